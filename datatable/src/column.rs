//! Column configuration.

use std::fmt;
use std::sync::Arc;

use gridom::Element;

use crate::value::CellValue;

/// How a column's values are compared when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    /// Locale-aware text comparison.
    #[default]
    String,
    /// Arithmetic comparison.
    Number,
}

/// Custom cell renderer: maps a cell value to an element subtree.
pub type CellRenderFn = Arc<dyn Fn(&CellValue) -> Element + Send + Sync>;

/// How a column renders its cells.
#[derive(Clone, Default)]
pub enum CellKind {
    /// Stringify the raw value.
    #[default]
    Default,
    /// Run a caller-supplied renderer.
    Custom(CellRenderFn),
}

impl fmt::Debug for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

/// Column configuration.
///
/// Columns define the structure of the table: a unique id (the key into each
/// [`Row`](crate::value::Row)), header text, sortability, and how cells are
/// rendered. Immutable after construction.
///
/// # Examples
///
/// ```
/// use datatable::column::{ColumnSpec, SortType};
///
/// let columns = vec![
///     ColumnSpec::new("images", "Image"),
///     ColumnSpec::new("title", "Name").sortable(SortType::String),
///     ColumnSpec::new("price", "Price").sortable(SortType::Number),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Unique column id, also the row key.
    pub id: String,
    /// Header text.
    pub title: String,
    /// Whether header activation sorts by this column.
    pub sortable: bool,
    /// Comparison used when sorting.
    pub sort_type: SortType,
    /// Cell rendering.
    pub kind: CellKind,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_type: SortType::default(),
            kind: CellKind::default(),
        }
    }

    /// Make the column sortable with the given comparison.
    pub fn sortable(mut self, sort_type: SortType) -> Self {
        self.sortable = true;
        self.sort_type = sort_type;
        self
    }

    /// Render cells with a custom function instead of stringification.
    pub fn with_cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue) -> Element + Send + Sync + 'static,
    {
        self.kind = CellKind::Custom(Arc::new(render));
        self
    }
}

/// Find a column by id.
pub(crate) fn find<'a>(columns: &'a [ColumnSpec], id: &str) -> Option<&'a ColumnSpec> {
    columns.iter().find(|column| column.id == id)
}

/// First sortable column, used for the default initial sort.
pub(crate) fn first_sortable(columns: &[ColumnSpec]) -> Option<&ColumnSpec> {
    columns.iter().find(|column| column.sortable)
}
