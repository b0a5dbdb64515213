//! In-memory widget store backing the demo routes.

use std::collections::BTreeMap;

use serde::Serialize;
use tokio::sync::RwLock;

/// A demo resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    pub id: u64,
    pub name: String,
    /// Bumped by each refresh request.
    pub revision: u64,
}

/// One cursor page read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSlice {
    pub widgets: Vec<Widget>,
    /// Cursor for the following page, if any.
    pub next: Option<u64>,
    /// Cursor for the preceding page, if any. `0` points at the first page.
    pub prev: Option<u64>,
}

#[derive(Debug, Default)]
struct Inner {
    widgets: BTreeMap<u64, Widget>,
    next_id: u64,
}

/// Widgets ordered by id, behind an async `RwLock`.
///
/// Designed to be wrapped in `Arc` and shared through `AppState`.
#[derive(Debug, Default)]
pub struct WidgetStore {
    inner: RwLock<Inner>,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `count` widgets named `widget-1`, `widget-2`, ...
    pub fn seeded(count: u64) -> Self {
        let mut inner = Inner::default();
        for id in 1..=count {
            inner.widgets.insert(
                id,
                Widget {
                    id,
                    name: format!("widget-{id}"),
                    revision: 0,
                },
            );
        }
        inner.next_id = count;

        Self {
            inner: RwLock::new(inner),
        }
    }

    pub async fn len(&self) -> u64 {
        self.inner.read().await.widgets.len() as u64
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.widgets.is_empty()
    }

    pub async fn get(&self, id: u64) -> Option<Widget> {
        self.inner.read().await.widgets.get(&id).cloned()
    }

    pub async fn insert(&self, name: &str) -> Widget {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let widget = Widget {
            id: inner.next_id,
            name: name.to_string(),
            revision: 0,
        };
        inner.widgets.insert(widget.id, widget.clone());
        widget
    }

    /// Bump a widget's revision.
    pub async fn refresh(&self, id: u64) -> Option<Widget> {
        let mut inner = self.inner.write().await;
        let widget = inner.widgets.get_mut(&id)?;
        widget.revision += 1;
        Some(widget.clone())
    }

    pub async fn remove(&self, id: u64) -> Option<Widget> {
        self.inner.write().await.widgets.remove(&id)
    }

    /// One page by page number, with the total widget count.
    pub async fn page(&self, page: u64, per_page: u64) -> (Vec<Widget>, u64) {
        let inner = self.inner.read().await;
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        let widgets = inner
            .widgets
            .values()
            .skip(offset as usize)
            .take(per_page as usize)
            .cloned()
            .collect();
        (widgets, inner.widgets.len() as u64)
    }

    /// One page by page number, reporting only whether another page follows.
    pub async fn simple_page(&self, page: u64, per_page: u64) -> (Vec<Widget>, bool) {
        let inner = self.inner.read().await;
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        let mut widgets: Vec<Widget> = inner
            .widgets
            .values()
            .skip(offset as usize)
            .take(per_page as usize + 1)
            .cloned()
            .collect();
        let has_more = widgets.len() as u64 > per_page;
        widgets.truncate(per_page as usize);
        (widgets, has_more)
    }

    /// Widgets with an id strictly greater than `after` (`None` starts at the
    /// beginning).
    pub async fn after(&self, after: Option<u64>, per_page: u64) -> CursorSlice {
        let inner = self.inner.read().await;
        let ids: Vec<u64> = inner.widgets.keys().copied().collect();
        let per_page = per_page as usize;

        let start = match after {
            Some(after) => ids.partition_point(|&id| id <= after),
            None => 0,
        };
        let end = (start + per_page).min(ids.len());

        let widgets = ids[start..end]
            .iter()
            .filter_map(|id| inner.widgets.get(id).cloned())
            .collect();

        let next = (end < ids.len() && end > start).then(|| ids[end - 1]);
        let prev = match start {
            0 => None,
            s if s <= per_page => Some(0),
            s => Some(ids[s - per_page - 1]),
        };

        CursorSlice {
            widgets,
            next,
            prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(widgets: &[Widget]) -> Vec<u64> {
        widgets.iter().map(|w| w.id).collect()
    }

    #[tokio::test]
    async fn page_returns_slice_and_total() {
        let store = WidgetStore::seeded(5);
        let (widgets, total) = store.page(2, 2).await;
        assert_eq!(ids(&widgets), vec![3, 4]);
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn simple_page_detects_following_page() {
        let store = WidgetStore::seeded(4);
        let (widgets, has_more) = store.simple_page(1, 3).await;
        assert_eq!(ids(&widgets), vec![1, 2, 3]);
        assert!(has_more);

        let (widgets, has_more) = store.simple_page(2, 3).await;
        assert_eq!(ids(&widgets), vec![4]);
        assert!(!has_more);
    }

    #[tokio::test]
    async fn cursor_walks_forward_and_back() {
        let store = WidgetStore::seeded(7);

        let first = store.after(None, 3).await;
        assert_eq!(ids(&first.widgets), vec![1, 2, 3]);
        assert_eq!(first.next, Some(3));
        assert_eq!(first.prev, None);

        let second = store.after(first.next, 3).await;
        assert_eq!(ids(&second.widgets), vec![4, 5, 6]);
        assert_eq!(second.next, Some(6));
        assert_eq!(second.prev, Some(0));

        let third = store.after(second.next, 3).await;
        assert_eq!(ids(&third.widgets), vec![7]);
        assert_eq!(third.next, None);
        assert_eq!(third.prev, Some(3));
    }

    #[tokio::test]
    async fn insert_refresh_remove() {
        let store = WidgetStore::new();
        let widget = store.insert("gear").await;
        assert_eq!(widget.id, 1);

        let refreshed = store.refresh(1).await.unwrap();
        assert_eq!(refreshed.revision, 1);

        assert_eq!(store.remove(1).await.map(|w| w.name), Some("gear".to_string()));
        assert!(store.is_empty().await);
        assert!(store.refresh(1).await.is_none());
    }
}
