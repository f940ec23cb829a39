//! Pure tree builders for the table markup.
//!
//! Everything here maps data to element trees without touching component
//! state, so rendering is testable without a live host. The built tree
//! exposes six regions (`table`, `header`, `body`, `loading`, `empty`,
//! `arrow`); data changes replace the body and re-attribute the arrow, and
//! nothing else.

use std::collections::HashMap;

use gridom::{region, Element};

use crate::column::{CellKind, ColumnSpec, SortType};
use crate::value::{CellValue, Row};

/// Class toggled on the `table` region while a fetch is outstanding.
pub const LOADING_CLASS: &str = "data-table_loading";

/// Class toggled on the `table` region while no rows are loaded.
pub const EMPTY_CLASS: &str = "data-table_empty";

/// Build the full table tree.
pub fn build(columns: &[ColumnSpec], rows: &[Row], row_link_base: Option<&str>) -> Element {
    Element::div()
        .class("data-table")
        .region(region::TABLE)
        .child(header(columns))
        .child(
            Element::div()
                .class("data-table__body")
                .region(region::BODY)
                .children(rows.iter().map(|row| render_row(columns, row, row_link_base))),
        )
        .child(
            Element::div()
                .class("data-table__loading-line")
                .region(region::LOADING),
        )
        .child(
            Element::div()
                .class("data-table__empty-placeholder")
                .region(region::EMPTY)
                .child(Element::text("No rows match the current criteria")),
        )
        .child(
            Element::span()
                .class("data-table__sort-arrow")
                .region(region::ARROW)
                .child(Element::span().class("sort-arrow")),
        )
}

fn header(columns: &[ColumnSpec]) -> Element {
    Element::div()
        .class("data-table__header")
        .class("data-table__row")
        .region(region::HEADER)
        .children(columns.iter().map(header_cell))
}

fn header_cell(column: &ColumnSpec) -> Element {
    let sort_type = match column.sort_type {
        SortType::String => "string",
        SortType::Number => "number",
    };
    Element::div()
        .class("data-table__cell")
        .attr("data-id", column.id.as_str())
        .attr("data-sortable", if column.sortable { "true" } else { "false" })
        .attr("data-type", sort_type)
        .child(Element::text(column.title.clone()))
}

/// Render a single data row.
///
/// Cells follow the column order. Columns with a custom renderer get the
/// raw value; everything else falls back to stringification, with absent
/// cells rendering as empty content.
pub fn render_row(columns: &[ColumnSpec], row: &Row, row_link_base: Option<&str>) -> Element {
    let container = match (row_link_base, row.id()) {
        (Some(base), Some(id)) => Element::anchor(format!("{}/{id}", base.trim_end_matches('/'))),
        _ => Element::div(),
    };
    container.class("data-table__row").children(
        columns
            .iter()
            .map(|column| render_cell(column, row.get(&column.id).unwrap_or(&CellValue::Null))),
    )
}

fn render_cell(column: &ColumnSpec, value: &CellValue) -> Element {
    match &column.kind {
        CellKind::Default => Element::div()
            .class("data-table__cell")
            .text_content(value.display_text()),
        CellKind::Custom(render) => render(value),
    }
}

/// Map every element id inside each header cell to that cell's column id.
///
/// Pointer events target the deepest element under the pointer, which for a
/// header activation is usually the title text rather than the cell itself;
/// this map resolves either to the column.
pub fn header_targets(root: &Element) -> HashMap<String, String> {
    let mut targets = HashMap::new();
    if let Some(header) = region::find_region(root, region::HEADER) {
        for cell in header.child_elements() {
            if let Some(column_id) = cell.get_attr("data-id") {
                collect_ids(cell, column_id, &mut targets);
            }
        }
    }
    targets
}

fn collect_ids(element: &Element, column_id: &str, targets: &mut HashMap<String, String>) {
    targets.insert(element.id.clone(), column_id.to_string());
    for child in element.child_elements() {
        collect_ids(child, column_id, targets);
    }
}
