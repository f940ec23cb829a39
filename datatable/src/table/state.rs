//! Table state and lifecycle.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use gridom::{EventKind, Host};
use url::Url;

use crate::column::{self, ColumnSpec};
use crate::error::TableError;
use crate::fetch::RowFetcher;
use crate::sort::{SortOrder, SortState};
use crate::value::Row;

use super::render;
use super::TableOptions;

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__datatable_{}", self.0)
    }
}

/// Whether sorting operates on loaded rows or triggers a fresh fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Sort the already-loaded rows; the row set is fetched once and
    /// incremental loading is disabled.
    Client,
    /// Re-fetch from offset 0 for each new sort.
    #[default]
    Server,
}

/// Internal state for the DataTable.
#[derive(Debug)]
pub(crate) struct TableInner {
    /// Column definitions, immutable after construction.
    pub columns: Vec<ColumnSpec>,
    /// Loaded rows, in display order.
    pub rows: Vec<Row>,
    /// The single active sort.
    pub sorted: SortState,
    /// Start of the most recently requested page window.
    pub offset: usize,
    /// Fetch window size.
    pub page_size: usize,
    /// Sort dispatch mode.
    pub mode: SortMode,
    /// Base URL for row links, if rows render as anchors.
    pub row_link_base: Option<String>,
    /// Element ids inside the header mapped to their column id, for
    /// resolving pointer targets.
    pub header_targets: HashMap<String, String>,
}

/// A sortable, incrementally loaded data table.
///
/// Cheap to clone: clones share the same state, like the component handles
/// elsewhere in this workspace. All mutation goes through the sort and
/// loading paths; the handle itself is `&self` throughout.
pub struct DataTable {
    /// Unique identifier.
    id: TableId,
    /// Endpoint handed to the fetcher together with each query.
    endpoint: Url,
    /// Internal state.
    pub(crate) inner: Arc<RwLock<TableInner>>,
    /// Set while a fetch is outstanding. At most one fetch is in flight per
    /// table; user actions arriving while this is set are ignored.
    pub(crate) loading: Arc<AtomicBool>,
    /// The injected HTTP collaborator.
    pub(crate) fetcher: Arc<dyn RowFetcher>,
    /// The injected UI host.
    pub(crate) host: Arc<Mutex<Box<dyn Host>>>,
}

impl DataTable {
    /// Build the markup tree, attach it to the host, and subscribe to
    /// pointer and scroll events.
    ///
    /// Fails when the options cannot satisfy the sort invariant: the
    /// resolved initial sort must name a sortable column, and the page size
    /// must be positive. No fetch is issued here; call
    /// [`load_initial`](DataTable::load_initial) for the first page.
    pub fn mount(
        columns: Vec<ColumnSpec>,
        fetcher: Arc<dyn RowFetcher>,
        mut host: Box<dyn Host>,
        options: TableOptions,
    ) -> Result<Self, TableError> {
        if options.page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }

        let sorted = match options.initial_sort {
            Some(state) => match column::find(&columns, &state.column) {
                Some(spec) if spec.sortable => state,
                _ => return Err(TableError::InvalidInitialSort(state.column)),
            },
            None => {
                let first = column::first_sortable(&columns).ok_or(TableError::NoSortableColumn)?;
                SortState::new(first.id.clone(), SortOrder::Asc)
            }
        };

        let root = render::build(&columns, &[], options.row_link_base.as_deref());
        let header_targets = render::header_targets(&root);

        host.mount(&root);
        host.listen(EventKind::Pointer);
        host.listen(EventKind::Scroll);

        let inner = TableInner {
            columns,
            rows: Vec::new(),
            sorted,
            offset: 0,
            page_size: options.page_size,
            mode: options.mode,
            row_link_base: options.row_link_base,
            header_targets,
        };

        Ok(Self {
            id: TableId::new(),
            endpoint: options.endpoint,
            inner: Arc::new(RwLock::new(inner)),
            loading: Arc::new(AtomicBool::new(false)),
            fetcher,
            host: Arc::new(Mutex::new(host)),
        })
    }

    /// Tear the table down: remove every event subscription made at
    /// construction, detach the tree, and discard the loaded rows.
    pub fn destroy(&self) {
        if let Ok(mut host) = self.host.lock() {
            host.unlisten(EventKind::Scroll);
            host.unlisten(EventKind::Pointer);
            host.unmount();
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.rows.clear();
            guard.header_targets.clear();
            guard.offset = 0;
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// The endpoint queries are issued against.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get all loaded rows.
    pub fn rows(&self) -> Vec<Row> {
        self.inner.read().map(|g| g.rows.clone()).unwrap_or_default()
    }

    /// Get the number of loaded rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if no rows are loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the active sort.
    pub fn sort_state(&self) -> Option<SortState> {
        self.inner.read().ok().map(|g| g.sorted.clone())
    }

    /// Start of the most recently requested page window.
    pub fn offset(&self) -> usize {
        self.inner.read().map(|g| g.offset).unwrap_or(0)
    }

    /// Fetch window size.
    pub fn page_size(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.page_size)
            .unwrap_or(super::DEFAULT_PAGE_SIZE)
    }

    /// Sort dispatch mode.
    pub fn mode(&self) -> SortMode {
        self.inner.read().map(|g| g.mode).unwrap_or_default()
    }
}

impl Clone for DataTable {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            endpoint: self.endpoint.clone(),
            inner: Arc::clone(&self.inner),
            loading: Arc::clone(&self.loading),
            fetcher: Arc::clone(&self.fetcher),
            host: Arc::clone(&self.host),
        }
    }
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("endpoint", &self.endpoint.as_str())
            .field("rows", &self.len())
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}
