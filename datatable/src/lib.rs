pub mod column;
pub mod error;
pub mod fetch;
pub mod query;
pub mod registry;
pub mod sort;
pub mod table;
pub mod value;

pub use table::{DataTable, SortMode, TableId, TableOptions};

pub mod prelude {
    pub use crate::column::{CellKind, ColumnSpec, SortType};
    pub use crate::error::{RegistryError, TableError};
    pub use crate::fetch::{FetchError, RowFetcher};
    pub use crate::query::RowQuery;
    pub use crate::registry::TableRegistry;
    pub use crate::sort::{SortOrder, SortState};
    pub use crate::table::{DataTable, SortMode, TableId, TableOptions, DEFAULT_PAGE_SIZE};
    pub use crate::value::{CellValue, Row};
}
