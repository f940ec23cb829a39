//! Event handling and sort dispatch.

use gridom::{ScrollMetrics, UiEvent};

use crate::column::{self, SortType};
use crate::sort::{self, SortOrder, SortState};

use super::state::{DataTable, SortMode};

impl DataTable {
    /// Dispatch a host event.
    ///
    /// Pointer activations outside the header and events arriving while a
    /// fetch is outstanding are ignored.
    pub async fn handle_event(&self, event: UiEvent) {
        match event {
            UiEvent::PointerDown {
                target: Some(target),
            } => self.on_header_activated(&target).await,
            UiEvent::PointerDown { target: None } => {}
            UiEvent::Scroll { metrics } => self.on_scroll(metrics).await,
        }
    }

    /// Handle activation of a header element.
    ///
    /// No-op when the target is not inside the header, names an unsortable
    /// column, or a fetch is outstanding. Otherwise the direction flips if
    /// the column is already the active sort and defaults to ascending for
    /// a new column, and the sort dispatches per the table's mode.
    pub async fn on_header_activated(&self, target: &str) {
        if self.is_loading() {
            return;
        }
        let Some((column_id, sort_type, order, mode)) = self.resolve_activation(target) else {
            return;
        };
        match mode {
            SortMode::Client => self.sort_on_client(&column_id, sort_type, order),
            SortMode::Server => self.sort_on_server(&column_id, order).await,
        }
    }

    /// Explicitly sort by a column.
    ///
    /// Same dispatch as header activation, but with a caller-chosen
    /// direction. Unknown and unsortable columns are ignored.
    pub async fn sort(&self, column_id: &str, order: SortOrder) {
        if self.is_loading() {
            return;
        }
        let resolved = self.inner.read().ok().and_then(|guard| {
            let spec = column::find(&guard.columns, column_id)?;
            if !spec.sortable {
                return None;
            }
            Some((spec.sort_type, guard.mode))
        });
        let Some((sort_type, mode)) = resolved else {
            log::debug!("ignoring sort on unknown or unsortable column `{column_id}`");
            return;
        };
        match mode {
            SortMode::Client => self.sort_on_client(column_id, sort_type, order),
            SortMode::Server => self.sort_on_server(column_id, order).await,
        }
    }

    /// Handle a scroll event, loading the next page when the viewport
    /// bottom exactly reaches the end of the content.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) {
        if metrics.at_bottom() {
            self.load_next_page().await;
        }
    }

    /// Sort the loaded rows in place and update the body.
    pub(crate) fn sort_on_client(&self, column_id: &str, sort_type: SortType, order: SortOrder) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sorted = SortState::new(column_id, order);
            sort::sort_rows(&mut guard.rows, column_id, sort_type, order);
        }
        self.reconcile_data();
    }

    fn resolve_activation(&self, target: &str) -> Option<(String, SortType, SortOrder, SortMode)> {
        let guard = self.inner.read().ok()?;
        let column_id = guard.header_targets.get(target)?.clone();
        let spec = column::find(&guard.columns, &column_id)?;
        if !spec.sortable {
            log::debug!("ignoring activation of unsortable column `{column_id}`");
            return None;
        }
        let order = if guard.sorted.column == column_id {
            guard.sorted.order.flipped()
        } else {
            SortOrder::Asc
        };
        Some((column_id, spec.sort_type, order, guard.mode))
    }
}
