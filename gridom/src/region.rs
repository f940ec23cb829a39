//! Named regions of a markup tree.
//!
//! A region is a node that can be replaced, re-classed, or re-attributed
//! independently of the rest of the tree. Region names are plain strings so
//! that components can define their own vocabulary; the constants here are
//! the ones the table component uses.

use std::collections::HashMap;

use crate::element::{Content, Element};

/// Root container of a table; `loading`/`empty` state classes go here.
pub const TABLE: &str = "table";
/// Header row holding one cell per column.
pub const HEADER: &str = "header";
/// Body holding the data rows.
pub const BODY: &str = "body";
/// Loading indicator shown while a fetch is outstanding.
pub const LOADING: &str = "loading";
/// Placeholder shown when there are no rows.
pub const EMPTY: &str = "empty";
/// Sort direction indicator attached to the active column.
pub const ARROW: &str = "arrow";

/// Collect every region in a tree, mapping region name to element id.
///
/// When two nodes claim the same region name the first one (in document
/// order) wins.
pub fn collect_regions(root: &Element) -> HashMap<String, String> {
    let mut regions = HashMap::new();
    collect_recursive(root, &mut regions);
    regions
}

fn collect_recursive(element: &Element, regions: &mut HashMap<String, String>) {
    if let Some(name) = &element.region {
        if regions.contains_key(name) {
            log::warn!("duplicate region `{name}`, keeping the first occurrence");
        } else {
            regions.insert(name.clone(), element.id.clone());
        }
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_recursive(child, regions);
        }
    }
}

/// Find the region node with the given name, if present.
pub fn find_region<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    if root.region.as_deref() == Some(name) {
        return Some(root);
    }
    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_region(child, name) {
                return Some(found);
            }
        }
    }
    None
}
