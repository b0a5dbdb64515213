//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size when `per_page` is omitted.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Page-number pagination parameters (`?page=&per_page=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageParams {
    /// 1-based page number; `0` and missing both mean the first page.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.per_page)
    }
}

/// Cursor pagination parameters (`?cursor=&per_page=`).
#[derive(Debug, Default, Deserialize)]
pub struct CursorParams {
    pub cursor: Option<String>,
    pub per_page: Option<u64>,
}

impl CursorParams {
    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.per_page)
    }
}

/// Clamp a requested page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: Option<u64>) -> u64 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_defaults_and_clamps() {
        assert_eq!(clamp_per_page(None), DEFAULT_PER_PAGE);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(500)), MAX_PER_PAGE);
        assert_eq!(clamp_per_page(Some(20)), 20);
    }

    #[test]
    fn page_starts_at_one() {
        assert_eq!(PageParams::default().page(), 1);
        let params = PageParams {
            page: Some(0),
            per_page: None,
        };
        assert_eq!(params.page(), 1);
    }
}
