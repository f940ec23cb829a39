//! Products table example - demonstrates server-side sorting with
//! infinite-scroll pagination against a simulated backend.
//!
//! The host here just logs what a real UI host would do and prints the
//! markup it would keep live. Run with `cargo run --example products`.

use std::fs::File;
use std::sync::Arc;

use async_trait::async_trait;
use gridom::{to_markup, Element, EventKind, Host, ScrollMetrics, UiEvent};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use url::Url;

use datatable::prelude::*;
use datatable::registry;

// =============================================================================
// Simulated API
// =============================================================================

const TOTAL_ROWS: usize = 90;

struct ProductsApi;

#[async_trait]
impl RowFetcher for ProductsApi {
    async fn fetch_rows(&self, endpoint: &Url, query: &RowQuery) -> Result<Vec<Row>, FetchError> {
        log::info!("GET {}", query.apply_to(endpoint));

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(150)).await;

        let (start, end) = query.range();
        let mut rows: Vec<Row> = (0..TOTAL_ROWS)
            .map(|i| {
                Row::new()
                    .with("id", format!("prod-{i:03}"))
                    .with("title", format!("Product {i:03}"))
                    .with("price", ((i as i64 * 37) % 500) + 10)
            })
            .collect();

        if query.sort_column == "price" {
            rows.sort_by_key(|row| row.get("price").and_then(CellValue::as_f64).map(|p| p as i64));
        }
        if query.sort_order == SortOrder::Desc {
            rows.reverse();
        }

        Ok(rows
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect())
    }
}

// =============================================================================
// Host
// =============================================================================

/// Host that narrates updates instead of driving a real UI.
struct ConsoleHost;

impl Host for ConsoleHost {
    fn mount(&mut self, root: &Element) {
        println!("-- mounted:\n{}\n", to_markup(root));
    }

    fn unmount(&mut self) {
        println!("-- unmounted");
    }

    fn replace_region(&mut self, region: &str, content: &[Element]) {
        println!("-- replace `{region}` with {} element(s)", content.len());
        if let Some(first) = content.first() {
            println!("   first: {}", to_markup(first));
        }
    }

    fn set_region_class(&mut self, region: &str, class: &str, enabled: bool) {
        let state = if enabled { "on" } else { "off" };
        println!("-- class `{class}` {state} (region `{region}`)");
    }

    fn set_region_attr(&mut self, region: &str, name: &str, value: Option<&str>) {
        println!("-- attr `{name}` = {value:?} (region `{region}`)");
    }

    fn listen(&mut self, kind: EventKind) {
        println!("-- listening for {kind:?} events");
    }

    fn unlisten(&mut self, kind: EventKind) {
        println!("-- stopped listening for {kind:?} events");
    }
}

// =============================================================================
// Main
// =============================================================================

fn scroll_to_bottom() -> UiEvent {
    UiEvent::Scroll {
        metrics: ScrollMetrics::new(4000, 4000),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("products.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = registry::init() {
        eprintln!("Error: {e}");
        return;
    }

    let columns = vec![
        ColumnSpec::new("images", "Image").with_cell(|value| {
            let url = match value {
                CellValue::Nested(json) => json[0]["url"].as_str().unwrap_or("").to_string(),
                _ => String::new(),
            };
            Element::div().class("cell-image").attr("data-src", url)
        }),
        ColumnSpec::new("title", "Name").sortable(SortType::String),
        ColumnSpec::new("price", "Price").sortable(SortType::Number),
    ];

    let options = TableOptions::new("https://api.example.test/rest/products".parse().unwrap())
        .initial_sort("title", SortOrder::Asc)
        .row_link_base("/products");

    let table = match DataTable::mount(
        columns,
        Arc::new(ProductsApi),
        Box::new(ConsoleHost),
        options,
    ) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };
    let id = registry::with(|r| r.register(table.clone())).expect("registry initialized");

    table.load_initial().await;
    println!("loaded {} rows (offset {})\n", table.len(), table.offset());

    // Scroll twice: 30 -> 60 -> 90
    table.handle_event(scroll_to_bottom()).await;
    table.handle_event(scroll_to_bottom()).await;
    println!("loaded {} rows (offset {})\n", table.len(), table.offset());

    // Server-side sort: resets pagination and replaces the rows
    table.sort("price", SortOrder::Desc).await;
    println!(
        "sorted: {:?}, {} rows (offset {})\n",
        table.sort_state(),
        table.len(),
        table.offset()
    );

    if let Ok(Some(removed)) = registry::with(|r| r.deregister(id)) {
        removed.destroy();
    }
    let _ = registry::teardown();
}
