//! Paginated document listings.

use serde::{Deserialize, Serialize};

/// One page of documents plus the total count across all pages.
///
/// Mirrors the document store's list response: `total` counts every matching
/// document regardless of the window, so it is independent of limit/offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total matching documents across all pages.
    pub total: u64,
    /// Documents in this window, in store order.
    pub documents: Vec<T>,
}

impl<T> Page<T> {
    /// An empty page with zero total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total: 0,
            documents: Vec::new(),
        }
    }

    /// Consume the page and return its first document, if any.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        self.documents.into_iter().next()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
