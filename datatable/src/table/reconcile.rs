//! Partial view updates.
//!
//! After every data change only the affected regions move: the `loading`
//! and `empty` classes toggle on the table region, the body's rows are
//! replaced, and the arrow is re-attributed to the active column. The
//! header and container nodes are never replaced, so listeners attached to
//! them survive every update.

use gridom::{region, Element};

use super::render;
use super::state::DataTable;

impl DataTable {
    /// Toggle the loading class on the table region.
    pub(crate) fn set_loading_visual(&self, on: bool) {
        if let Ok(mut host) = self.host.lock() {
            host.set_region_class(region::TABLE, render::LOADING_CLASS, on);
        }
    }

    /// Re-sync the empty class with the loaded row count, touching nothing
    /// else. Used after a failed fetch, where the row sequence is
    /// unchanged.
    pub(crate) fn reconcile_empty(&self) {
        let empty = self.is_empty();
        if let Ok(mut host) = self.host.lock() {
            host.set_region_class(region::TABLE, render::EMPTY_CLASS, empty);
        }
    }

    /// Push the current rows and sort indicator to the host.
    pub(crate) fn reconcile_data(&self) {
        let Ok(guard) = self.inner.read() else {
            return;
        };
        let rows: Vec<Element> = guard
            .rows
            .iter()
            .map(|row| render::render_row(&guard.columns, row, guard.row_link_base.as_deref()))
            .collect();
        let empty = guard.rows.is_empty();
        let sorted = guard.sorted.clone();
        drop(guard);

        if let Ok(mut host) = self.host.lock() {
            host.set_region_class(region::TABLE, render::EMPTY_CLASS, empty);
            host.replace_region(region::BODY, &rows);
            host.set_region_attr(region::ARROW, "data-column", Some(&sorted.column));
            host.set_region_attr(region::ARROW, "data-order", Some(sorted.order.as_str()));
        }
    }
}
