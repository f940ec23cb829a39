//! The DataTable component.
//!
//! A DataTable renders caller-supplied columns and fetched rows into a
//! region-addressable markup tree, sorts on header activation (client-side
//! over loaded rows, or server-side with a fresh fetch), and loads further
//! pages as the host scrolls to the bottom.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use datatable::prelude::*;
//!
//! let columns = vec![
//!     ColumnSpec::new("title", "Name").sortable(SortType::String),
//!     ColumnSpec::new("price", "Price").sortable(SortType::Number),
//! ];
//!
//! let options = TableOptions::new("https://api.example.com/rest/products".parse()?)
//!     .initial_sort("title", SortOrder::Asc);
//!
//! let table = DataTable::mount(columns, Arc::new(fetcher), Box::new(host), options)?;
//! table.load_initial().await;
//! ```

mod events;
mod loader;
mod reconcile;
pub mod render;
mod state;

pub use state::{DataTable, SortMode, TableId};

use url::Url;

use crate::sort::{SortOrder, SortState};

/// Rows fetched per page when the caller does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Endpoint the injected fetcher is pointed at.
    pub endpoint: Url,
    /// Client- or server-side sorting.
    pub mode: SortMode,
    /// Initial sort; defaults to the first sortable column, ascending.
    pub initial_sort: Option<SortState>,
    /// Rows per fetched page.
    pub page_size: usize,
    /// When set, body rows render as links to `<base>/<row id>`.
    pub row_link_base: Option<String>,
}

impl TableOptions {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            mode: SortMode::Server,
            initial_sort: None,
            page_size: DEFAULT_PAGE_SIZE,
            row_link_base: None,
        }
    }

    /// Sort already-loaded rows instead of re-fetching.
    ///
    /// Client mode disables incremental loading: the row set is fetched
    /// once.
    pub fn sort_locally(mut self) -> Self {
        self.mode = SortMode::Client;
        self
    }

    pub fn initial_sort(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.initial_sort = Some(SortState::new(column, order));
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn row_link_base(mut self, base: impl Into<String>) -> Self {
        self.row_link_base = Some(base.into());
        self
    }
}
