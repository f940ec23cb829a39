//! Paged row queries.

use url::Url;

use crate::sort::SortOrder;

/// A request for one window of rows under a given sort.
///
/// The window is half-open: rows `[offset, offset + limit)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    /// Column id to sort by.
    pub sort_column: String,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Index of the first row in the window.
    pub offset: usize,
    /// Window size.
    pub limit: usize,
}

impl RowQuery {
    pub fn new(
        sort_column: impl Into<String>,
        sort_order: SortOrder,
        offset: usize,
        limit: usize,
    ) -> Self {
        Self {
            sort_column: sort_column.into(),
            sort_order,
            offset,
            limit,
        }
    }

    /// The half-open row range this query asks for.
    pub fn range(&self) -> (usize, usize) {
        (self.offset, self.offset + self.limit)
    }

    /// Build the request URL for this query against an endpoint.
    ///
    /// Existing query pairs on the endpoint are preserved; the paging and
    /// sorting pairs are appended.
    pub fn apply_to(&self, endpoint: &Url) -> Url {
        let (start, end) = self.range();
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("_sort", &self.sort_column)
            .append_pair("_order", self.sort_order.as_str())
            .append_pair("_start", &start.to_string())
            .append_pair("_end", &end.to_string());
        url
    }
}
