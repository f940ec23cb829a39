//! Test doubles shared by the integration tests: a scripted fetcher and a
//! recording host.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gridom::{Element, EventKind, Host, ScrollMetrics, UiEvent};
use tokio::sync::Notify;
use url::Url;

use datatable::prelude::*;

pub fn endpoint() -> Url {
    Url::parse("https://api.example.test/rest/products").unwrap()
}

pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("images", "Image"),
        ColumnSpec::new("title", "Name").sortable(SortType::String),
        ColumnSpec::new("price", "Price").sortable(SortType::Number),
    ]
}

pub fn row(id: &str, title: &str, price: i64) -> Row {
    Row::new()
        .with("id", id)
        .with("title", title)
        .with("price", price)
}

pub fn scroll_to_bottom() -> UiEvent {
    UiEvent::Scroll {
        metrics: ScrollMetrics::new(2000, 2000),
    }
}

pub fn scroll_mid_page() -> UiEvent {
    UiEvent::Scroll {
        metrics: ScrollMetrics::new(1500, 2000),
    }
}

// ============================================================================
// Fetcher doubles
// ============================================================================

/// Scripted fetcher. Generates one row per index in the requested window,
/// or serves a fixed row set, and can be told to start failing after a
/// number of calls.
pub struct MockFetcher {
    calls: AtomicUsize,
    queries: Mutex<Vec<RowQuery>>,
    fixed: Option<Vec<Row>>,
    fail_from_call: Option<usize>,
    gate: Option<Arc<Notify>>,
}

impl MockFetcher {
    /// Generate `query.limit` rows per call, numbered by window index.
    pub fn generating() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            fixed: None,
            fail_from_call: None,
            gate: None,
        }
    }

    /// Serve the same fixed row set on every call.
    pub fn serving(rows: Vec<Row>) -> Self {
        Self {
            fixed: Some(rows),
            ..Self::generating()
        }
    }

    /// Fail every call with index `>= n` (0-based).
    pub fn fail_from_call(mut self, n: usize) -> Self {
        self.fail_from_call = Some(n);
        self
    }

    /// Park each call on the notify gate before responding.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<RowQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> RowQuery {
        self.queries.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl RowFetcher for MockFetcher {
    async fn fetch_rows(&self, _endpoint: &Url, query: &RowQuery) -> Result<Vec<Row>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(n) = self.fail_from_call
            && call >= n
        {
            return Err(FetchError::Network("connection reset".into()));
        }

        if let Some(rows) = &self.fixed {
            return Ok(rows.clone());
        }

        let (start, end) = query.range();
        Ok((start..end)
            .map(|i| row(&format!("p{i}"), &format!("Item {i:03}"), (i as i64 * 17) % 1000))
            .collect())
    }
}

// ============================================================================
// Host double
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Mount,
    Unmount,
    Replace { region: String, count: usize },
    Class { region: String, class: String, enabled: bool },
    Attr { region: String, name: String, value: Option<String> },
    Listen(EventKind),
    Unlisten(EventKind),
}

/// Host that records every call and keeps a copy of the mounted tree.
#[derive(Clone, Default)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
    mounted: Arc<Mutex<Option<Element>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mounted(&self) -> Option<Element> {
        self.mounted.lock().unwrap().clone()
    }

    /// Value of the most recent class toggle for `class`, if any.
    pub fn class_state(&self, class: &str) -> Option<bool> {
        self.calls()
            .iter()
            .rev()
            .find_map(|call| match call {
                HostCall::Class { class: c, enabled, .. } if c == class => Some(*enabled),
                _ => None,
            })
    }

    /// Value of the most recent attr update for `(region, name)`, if any.
    pub fn attr_state(&self, region: &str, name: &str) -> Option<Option<String>> {
        self.calls()
            .iter()
            .rev()
            .find_map(|call| match call {
                HostCall::Attr { region: r, name: n, value } if r == region && n == name => {
                    Some(value.clone())
                }
                _ => None,
            })
    }

    /// Element id of the header cell for a column, resolved from the
    /// mounted tree.
    pub fn header_cell_id(&self, column_id: &str) -> String {
        let root = self.mounted().expect("tree not mounted");
        let header = gridom::region::find_region(&root, gridom::region::HEADER).unwrap();
        header
            .child_elements()
            .iter()
            .find(|cell| cell.get_attr("data-id") == Some(column_id))
            .map(|cell| cell.id.clone())
            .expect("no header cell for column")
    }

    /// Element id of the title text inside a column's header cell.
    pub fn header_title_id(&self, column_id: &str) -> String {
        let root = self.mounted().expect("tree not mounted");
        let header = gridom::region::find_region(&root, gridom::region::HEADER).unwrap();
        header
            .child_elements()
            .iter()
            .find(|cell| cell.get_attr("data-id") == Some(column_id))
            .and_then(|cell| cell.child_elements().first())
            .map(|span| span.id.clone())
            .expect("no title element for column")
    }
}

impl Host for RecordingHost {
    fn mount(&mut self, root: &Element) {
        *self.mounted.lock().unwrap() = Some(root.clone());
        self.calls.lock().unwrap().push(HostCall::Mount);
    }

    fn unmount(&mut self) {
        *self.mounted.lock().unwrap() = None;
        self.calls.lock().unwrap().push(HostCall::Unmount);
    }

    fn replace_region(&mut self, region: &str, content: &[Element]) {
        self.calls.lock().unwrap().push(HostCall::Replace {
            region: region.to_string(),
            count: content.len(),
        });
    }

    fn set_region_class(&mut self, region: &str, class: &str, enabled: bool) {
        self.calls.lock().unwrap().push(HostCall::Class {
            region: region.to_string(),
            class: class.to_string(),
            enabled,
        });
    }

    fn set_region_attr(&mut self, region: &str, name: &str, value: Option<&str>) {
        self.calls.lock().unwrap().push(HostCall::Attr {
            region: region.to_string(),
            name: name.to_string(),
            value: value.map(str::to_string),
        });
    }

    fn listen(&mut self, kind: EventKind) {
        self.calls.lock().unwrap().push(HostCall::Listen(kind));
    }

    fn unlisten(&mut self, kind: EventKind) {
        self.calls.lock().unwrap().push(HostCall::Unlisten(kind));
    }
}

// ============================================================================
// Mount helpers
// ============================================================================

pub fn mount_table(fetcher: Arc<MockFetcher>, options: TableOptions) -> (DataTable, RecordingHost) {
    let host = RecordingHost::new();
    let table = DataTable::mount(columns(), fetcher, Box::new(host.clone()), options)
        .expect("mount failed");
    (table, host)
}

pub fn server_options() -> TableOptions {
    TableOptions::new(endpoint())
}

pub fn client_options() -> TableOptions {
    TableOptions::new(endpoint()).sort_locally()
}
