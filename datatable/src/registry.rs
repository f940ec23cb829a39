//! Process-wide table registry.
//!
//! Hosts that route events by table id need a place to look running tables
//! up. The registry is process-wide but has an explicit lifecycle: nothing
//! exists until [`init`] runs, every access goes through [`with`], and
//! [`teardown`] drops all handles. There is no import-time setup and no
//! implicit singleton to reach for.
//!
//! # Example
//!
//! ```ignore
//! datatable::registry::init()?;
//! let id = datatable::registry::with(|registry| registry.register(table.clone()))?;
//! // ... later, from the event loop:
//! let table = datatable::registry::with(|registry| registry.get(id))?;
//! datatable::registry::teardown()?;
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::RegistryError;
use crate::table::{DataTable, TableId};

/// Registry of running tables, keyed by [`TableId`].
#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: HashMap<TableId, DataTable>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a table. Returns its id for later lookup.
    pub fn register(&mut self, table: DataTable) -> TableId {
        let id = table.id();
        self.tables.insert(id, table);
        id
    }

    /// Stop tracking a table, returning the handle if it was registered.
    ///
    /// Deregistering does not destroy the table; callers tear the table
    /// itself down with [`DataTable::destroy`].
    pub fn deregister(&mut self, id: TableId) -> Option<DataTable> {
        self.tables.remove(&id)
    }

    /// Look a table up by id. The returned handle shares state with the
    /// registered one.
    pub fn get(&self, id: TableId) -> Option<DataTable> {
        self.tables.get(&id).cloned()
    }

    /// Ids of all registered tables.
    pub fn ids(&self) -> Vec<TableId> {
        self.tables.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

static REGISTRY: Mutex<Option<TableRegistry>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<TableRegistry>> {
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Create the process-wide registry.
pub fn init() -> Result<(), RegistryError> {
    let mut guard = slot();
    if guard.is_some() {
        return Err(RegistryError::AlreadyInitialized);
    }
    *guard = Some(TableRegistry::new());
    Ok(())
}

/// Drop the process-wide registry and every handle it holds.
pub fn teardown() -> Result<(), RegistryError> {
    let mut guard = slot();
    if guard.take().is_none() {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

/// Whether [`init`] has run without a matching [`teardown`].
pub fn is_initialized() -> bool {
    slot().is_some()
}

/// Run a closure against the registry.
///
/// This is the only accessor; it fails rather than lazily initializing.
pub fn with<R>(f: impl FnOnce(&mut TableRegistry) -> R) -> Result<R, RegistryError> {
    let mut guard = slot();
    match guard.as_mut() {
        Some(registry) => Ok(f(registry)),
        None => Err(RegistryError::NotInitialized),
    }
}
