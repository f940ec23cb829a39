//! Paged loading.
//!
//! Loader state machine: `Idle -> Loading -> Idle` on success and on
//! failure alike. Failures have no distinct terminal state beyond the empty
//! visual; the next user-triggered scroll or sort is the only retry path.

use std::sync::atomic::Ordering;

use crate::query::RowQuery;
use crate::sort::{SortOrder, SortState};

use super::state::{DataTable, SortMode};

impl DataTable {
    /// Fetch the first page for the construction-time sort.
    pub async fn load_initial(&self) {
        if !self.begin_load() {
            return;
        }
        let Some(sorted) = self.sort_state() else {
            self.loading.store(false, Ordering::SeqCst);
            return;
        };
        self.run_fetch(sorted, 0, true).await;
    }

    /// Refetch from offset 0, replacing the loaded rows.
    pub async fn reload(&self) {
        if !self.begin_load() {
            return;
        }
        let sorted = {
            let Ok(mut guard) = self.inner.write() else {
                self.loading.store(false, Ordering::SeqCst);
                return;
            };
            guard.offset = 0;
            guard.sorted.clone()
        };
        self.run_fetch(sorted, 0, true).await;
    }

    /// Apply a server-side sort: reset the pagination offset and fetch a
    /// fresh first page, replacing (not appending to) the row set.
    pub(crate) async fn sort_on_server(&self, column_id: &str, order: SortOrder) {
        if !self.begin_load() {
            return;
        }
        let sorted = SortState::new(column_id, order);
        if let Ok(mut guard) = self.inner.write() {
            guard.sorted = sorted.clone();
            // A new sort is a new result set, not an append.
            guard.offset = 0;
        }
        self.run_fetch(sorted, 0, true).await;
    }

    /// Advance the offset by one page and append the fetched window.
    ///
    /// No-op while a fetch is outstanding or in client sort mode. On
    /// failure the offset stays advanced and the loading flag clears, so
    /// the next scroll trigger retries the following window.
    pub async fn load_next_page(&self) {
        if self.mode() == SortMode::Client {
            return;
        }
        if !self.begin_load() {
            return;
        }
        let advanced = {
            let Ok(mut guard) = self.inner.write() else {
                self.loading.store(false, Ordering::SeqCst);
                return;
            };
            guard.offset += guard.page_size;
            (guard.sorted.clone(), guard.offset)
        };
        let (sorted, offset) = advanced;
        self.run_fetch(sorted, offset, false).await;
    }

    /// Try to move `Idle -> Loading`. At most one fetch is in flight per
    /// table; a `false` return means a fetch is already outstanding and the
    /// caller must back off.
    fn begin_load(&self) -> bool {
        !self.loading.swap(true, Ordering::SeqCst)
    }

    /// Run one fetch while holding the loading flag, apply the result, and
    /// return to idle. The state lock is never held across the await.
    async fn run_fetch(&self, sorted: SortState, offset: usize, replace: bool) {
        self.set_loading_visual(true);

        let limit = self.page_size();
        let query = RowQuery::new(sorted.column.clone(), sorted.order, offset, limit);
        let result = self.fetcher.fetch_rows(self.endpoint(), &query).await;

        let fetched = match result {
            Ok(batch) => {
                if let Ok(mut guard) = self.inner.write() {
                    if replace {
                        guard.rows = batch;
                    } else {
                        // Order preserved, no de-duplication: a row returned
                        // twice appears twice.
                        guard.rows.extend(batch);
                    }
                }
                true
            }
            Err(err) => {
                log::warn!(
                    "row fetch failed for window {}..{}: {err}",
                    offset,
                    offset + limit
                );
                false
            }
        };

        self.loading.store(false, Ordering::SeqCst);
        self.set_loading_visual(false);
        if fetched {
            self.reconcile_data();
        } else {
            self.reconcile_empty();
        }
    }
}
