//! Error types.

/// Construction and configuration errors.
///
/// These are the only errors the component returns to callers: a table whose
/// sort invariant cannot be satisfied is never constructed. Runtime fetch
/// failures degrade to the empty visual instead (see
/// [`FetchError`](crate::fetch::FetchError)).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// No explicit initial sort was given and no column is sortable.
    #[error("no sortable column to derive an initial sort from")]
    NoSortableColumn,

    /// The explicit initial sort names an unknown or unsortable column.
    #[error("initial sort references unknown or unsortable column `{0}`")]
    InvalidInitialSort(String),

    /// Page size must be positive.
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

/// Table registry lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("table registry is not initialized")]
    NotInitialized,

    #[error("table registry is already initialized")]
    AlreadyInitialized,
}
