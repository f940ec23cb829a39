//! Sort state and client-side comparators.

use std::cmp::Ordering;

use crate::column::SortType;
use crate::value::{CellValue, Row};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// The single active sort of a table: column id plus direction.
///
/// The column is always one with `sortable == true`; construction paths
/// validate this before a state is ever stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }
}

/// Locale-aware text comparison.
///
/// Primary key is the case-folded character sequence, which orders both the
/// Latin and Cyrillic alphabets alphabetically and keeps the scripts apart;
/// equal letters are tie-broken case-sensitively with uppercase collating
/// before lowercase. `compare_text("Alice", "bob")` is `Less`,
/// `compare_text("BOB", "bob")` is `Less`.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        match (ca.is_uppercase(), cb.is_uppercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    a.cmp(b)
}

/// Arithmetic comparison over cell values.
///
/// Non-numeric and absent values collate first.
pub fn compare_numbers(a: &CellValue, b: &CellValue) -> Ordering {
    let a = a.as_f64().unwrap_or(f64::NEG_INFINITY);
    let b = b.as_f64().unwrap_or(f64::NEG_INFINITY);
    a.total_cmp(&b)
}

/// Sort rows in place by one column.
///
/// Uses `slice::sort_by`, which is stable: rows with equal keys keep their
/// original relative order. Descending order swaps the comparator operands,
/// which leaves ties untouched and therefore preserves stability in both
/// directions.
pub(crate) fn sort_rows(rows: &mut [Row], column: &str, sort_type: SortType, order: SortOrder) {
    rows.sort_by(|left, right| {
        let (a, b) = match order {
            SortOrder::Asc => (left, right),
            SortOrder::Desc => (right, left),
        };
        let a = a.get(column).unwrap_or(&CellValue::Null);
        let b = b.get(column).unwrap_or(&CellValue::Null);
        match sort_type {
            SortType::String => {
                compare_text(a.as_str().unwrap_or_default(), b.as_str().unwrap_or_default())
            }
            SortType::Number => compare_numbers(a, b),
        }
    });
}
