use gridom::{collect_regions, region, to_markup, Element};

// ============================================================================
// Markup serialization
// ============================================================================

#[test]
fn test_text_content_is_escaped() {
    let el = Element::div().id("root").text_content("a < b & c > d");
    let markup = to_markup(&el);
    assert_eq!(markup, "<div id=\"root\">a &lt; b &amp; c &gt; d</div>");
}

#[test]
fn test_attributes_and_classes_are_serialized() {
    let el = Element::div()
        .id("cell")
        .class("table__cell")
        .attr("data-id", "title")
        .attr("data-sortable", "true");
    let markup = to_markup(&el);
    assert_eq!(
        markup,
        "<div id=\"cell\" class=\"table__cell\" data-id=\"title\" data-sortable=\"true\"></div>"
    );
}

#[test]
fn test_attribute_values_escape_quotes() {
    let el = Element::anchor("/products?a=\"1\"").id("link");
    let markup = to_markup(&el);
    assert!(markup.contains("href=\"/products?a=&quot;1&quot;\""));
}

#[test]
fn test_children_render_in_order() {
    let el = Element::div()
        .id("row")
        .child(Element::text("one").id("a"))
        .child(Element::text("two").id("b"));
    let markup = to_markup(&el);
    let a = markup.find("one").unwrap();
    let b = markup.find("two").unwrap();
    assert!(a < b);
}

#[test]
fn test_region_marker_is_serialized() {
    let el = Element::div().id("body").region(region::BODY);
    assert!(to_markup(&el).contains("data-region=\"body\""));
}

// ============================================================================
// Region collection
// ============================================================================

#[test]
fn test_collect_regions_finds_nested_regions() {
    let root = Element::div()
        .id("root")
        .region(region::TABLE)
        .child(Element::div().id("head").region(region::HEADER))
        .child(
            Element::div()
                .id("wrap")
                .child(Element::div().id("rows").region(region::BODY)),
        );

    let regions = collect_regions(&root);
    assert_eq!(regions.len(), 3);
    assert_eq!(regions[region::TABLE], "root");
    assert_eq!(regions[region::HEADER], "head");
    assert_eq!(regions[region::BODY], "rows");
}

#[test]
fn test_collect_regions_keeps_first_duplicate() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("first").region(region::BODY))
        .child(Element::div().id("second").region(region::BODY));

    let regions = collect_regions(&root);
    assert_eq!(regions[region::BODY], "first");
}

#[test]
fn test_find_region_returns_node() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("rows").region(region::BODY));

    let body = region::find_region(&root, region::BODY).unwrap();
    assert_eq!(body.id, "rows");
    assert!(region::find_region(&root, region::ARROW).is_none());
}

// ============================================================================
// Element builder
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_get_attr_returns_first_match() {
    let el = Element::div().attr("data-id", "price");
    assert_eq!(el.get_attr("data-id"), Some("price"));
    assert_eq!(el.get_attr("data-order"), None);
}

#[test]
fn test_child_elements_on_leaf_is_empty() {
    let el = Element::text("leaf");
    assert!(el.child_elements().is_empty());
}
