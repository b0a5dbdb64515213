//! Paginated result sets handed to the formatter.
//!
//! The query layer that produces a page is outside this crate. It builds one
//! of the two page kinds below and the formatter turns it into the paginated
//! `data` object:
//!
//! - [`OffsetPage`]: page-number pagination, with or without a known total.
//! - [`CursorPage`]: opaque-cursor pagination. Never carries a total.

use serde::Serialize;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Query-string key used for page-number links.
pub const PAGE_QUERY_KEY: &str = "page";

/// Query-string key used for cursor links.
pub const CURSOR_QUERY_KEY: &str = "cursor";

/// Every key [`PageMeta`] can write next to the items.
pub const PAGE_META_KEYS: &[&str] = &[
    "current_page",
    "per_page",
    "count",
    "total",
    "last_page",
    "links",
    "current_cursor",
    "next_cursor",
    "prev_cursor",
];

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A paginated result set of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Offset(OffsetPage),
    Cursor(CursorPage),
}

impl Page {
    /// The items on this page, already in structured form.
    pub fn items(&self) -> &[Value] {
        match self {
            Page::Offset(page) => &page.items,
            Page::Cursor(page) => &page.items,
        }
    }

    pub fn per_page(&self) -> u64 {
        match self {
            Page::Offset(page) => page.per_page,
            Page::Cursor(page) => page.per_page,
        }
    }

    /// Total number of records across all pages, when the paginator knows it.
    pub fn total(&self) -> Option<u64> {
        match self {
            Page::Offset(page) => page.total,
            Page::Cursor(_) => None,
        }
    }

    /// Check the page metadata before it is rendered.
    pub fn validate(&self) -> CoreResult<()> {
        let per_page = self.per_page();
        if per_page == 0 {
            return Err(CoreError::InvalidArgument(
                "per_page must be greater than zero".to_string(),
            ));
        }

        let count = self.items().len() as u64;
        if count > per_page {
            return Err(CoreError::InvalidArgument(format!(
                "page holds {count} items but per_page is {per_page}"
            )));
        }

        if let Page::Offset(page) = self {
            if page.current_page == 0 {
                return Err(CoreError::InvalidArgument(
                    "current_page starts at 1".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Pagination metadata rendered next to the items.
    pub fn meta(&self) -> PageMeta {
        let count = self.items().len() as u64;
        match self {
            Page::Offset(page) => PageMeta::Offset {
                current_page: page.current_page,
                per_page: page.per_page,
                count,
                total: page.total,
                last_page: page.last_page(),
                links: page.links(),
            },
            Page::Cursor(page) => PageMeta::Cursor {
                per_page: page.per_page,
                count,
                current_cursor: page.current.clone(),
                next_cursor: page.next.clone(),
                prev_cursor: page.prev.clone(),
                links: page.links(),
            },
        }
    }
}

impl From<OffsetPage> for Page {
    fn from(page: OffsetPage) -> Self {
        Page::Offset(page)
    }
}

impl From<CursorPage> for Page {
    fn from(page: CursorPage) -> Self {
        Page::Cursor(page)
    }
}

// ---------------------------------------------------------------------------
// Offset pagination
// ---------------------------------------------------------------------------

/// Page-number pagination.
///
/// `total` is `Some` for a length-aware paginator and `None` for a simple
/// paginator that only knows whether another page exists.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPage {
    pub items: Vec<Value>,
    /// 1-based page number.
    pub current_page: u64,
    pub per_page: u64,
    pub total: Option<u64>,
    /// Only consulted when `total` is unknown.
    pub has_more: bool,
    /// Base path used to build links, e.g. `/api/v1/widgets`.
    pub path: Option<String>,
}

impl OffsetPage {
    /// Build a page whose total record count is known.
    pub fn length_aware<T: Serialize>(
        items: &[T],
        total: u64,
        per_page: u64,
        current_page: u64,
    ) -> CoreResult<Self> {
        Ok(Self {
            items: to_values(items)?,
            current_page,
            per_page,
            total: Some(total),
            has_more: false,
            path: None,
        })
    }

    /// Build a page without a total; `has_more` says whether a next page exists.
    pub fn simple<T: Serialize>(
        items: &[T],
        per_page: u64,
        current_page: u64,
        has_more: bool,
    ) -> CoreResult<Self> {
        Ok(Self {
            items: to_values(items)?,
            current_page,
            per_page,
            total: None,
            has_more,
            path: None,
        })
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Last page number, `None` when the total is unknown. Never below 1.
    pub fn last_page(&self) -> Option<u64> {
        let total = self.total?;
        if self.per_page == 0 {
            return Some(1);
        }
        Some(total.div_ceil(self.per_page).max(1))
    }

    pub fn has_more_pages(&self) -> bool {
        match self.last_page() {
            Some(last) => self.current_page < last,
            None => self.has_more,
        }
    }

    fn links(&self) -> OffsetLinks {
        let Some(path) = self.path.as_deref() else {
            return OffsetLinks::default();
        };
        let url = |page: u64| page_url(path, PAGE_QUERY_KEY, &page.to_string());

        OffsetLinks {
            first: Some(url(1)),
            last: self.last_page().map(url),
            prev: (self.current_page > 1).then(|| url(self.current_page - 1)),
            next: self.has_more_pages().then(|| url(self.current_page + 1)),
        }
    }
}

// ---------------------------------------------------------------------------
// Cursor pagination
// ---------------------------------------------------------------------------

/// Opaque-cursor pagination.
///
/// Cursors are treated as URL-safe tokens and are placed into links verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage {
    pub items: Vec<Value>,
    pub per_page: u64,
    /// Cursor that produced this page (`None` for the first page).
    pub current: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub path: Option<String>,
}

impl CursorPage {
    pub fn new<T: Serialize>(
        items: &[T],
        per_page: u64,
        current: Option<String>,
        next: Option<String>,
        prev: Option<String>,
    ) -> CoreResult<Self> {
        Ok(Self {
            items: to_values(items)?,
            per_page,
            current,
            next,
            prev,
            path: None,
        })
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn links(&self) -> CursorLinks {
        let Some(path) = self.path.as_deref() else {
            return CursorLinks::default();
        };
        let url = |cursor: &String| page_url(path, CURSOR_QUERY_KEY, cursor);

        CursorLinks {
            prev: self.prev.as_ref().map(url),
            next: self.next.as_ref().map(url),
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Navigation links for offset pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OffsetLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Navigation links for cursor pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CursorLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata flattened into the paginated `data` object.
///
/// Unknown totals are omitted from the output rather than rendered as
/// `null` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageMeta {
    Offset {
        current_page: u64,
        per_page: u64,
        count: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        total: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_page: Option<u64>,
        links: OffsetLinks,
    },
    Cursor {
        per_page: u64,
        count: u64,
        current_cursor: Option<String>,
        next_cursor: Option<String>,
        prev_cursor: Option<String>,
        links: CursorLinks,
    },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_values<T: Serialize>(items: &[T]) -> CoreResult<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(CoreError::from))
        .collect()
}

fn page_url(path: &str, key: &str, value: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{key}={value}")
}
