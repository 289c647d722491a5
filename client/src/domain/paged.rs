//! Defensive page extraction for list endpoints.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::coerce::{as_array, as_count, as_record};

/// One page of list results.
///
/// Every field defaults to zero or empty when the payload omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total item count across all pages.
    pub total: u64,
    /// Total page count.
    pub pages: u64,
    /// Current page number as reported by the backend.
    pub current: u64,
    /// Page size.
    pub size: u64,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            pages: 0,
            current: 0,
            size: 0,
        }
    }
}

/// Derive a [`Paged`] view from any payload.
///
/// Items that do not decode as `T` are skipped one by one rather than
/// discarding the whole page.
///
/// # Examples
/// ```
/// use meow_client::domain::{Paged, to_paged};
/// use serde_json::json;
///
/// let page: Paged<String> = to_paged(&json!({ "items": ["a", 1, "b"], "total": 2 }));
/// assert_eq!(page.items, vec!["a".to_owned(), "b".to_owned()]);
/// assert_eq!(page.total, 2);
/// assert_eq!(page.size, 0);
/// ```
#[must_use]
pub fn to_paged<T: DeserializeOwned>(value: &Value) -> Paged<T> {
    let record = as_record(value);
    let field = |name: &str| record.get(name).unwrap_or(&Value::Null);

    let raw_items = as_array(field("items"));
    let items: Vec<T> = raw_items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    if items.len() != raw_items.len() {
        debug!(
            skipped = raw_items.len() - items.len(),
            "page items did not match the expected shape"
        );
    }

    Paged {
        items,
        total: as_count(field("total")),
        pages: as_count(field("pages")),
        current: as_count(field("current")),
        size: as_count(field("size")),
    }
}
