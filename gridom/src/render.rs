//! Markup serialization.
//!
//! Turns an [`Element`] tree into markup text. Hosts that retain a live tree
//! do not need this; hosts that hand markup strings to an outer renderer
//! (server-side rendering, snapshot tests, logging) do.

use crate::element::{Content, Element};

/// Serialize a tree to markup.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    out.push_str(" id=\"");
    out.push_str(&escape_attr(&element.id));
    out.push('"');

    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        for (i, class) in element.classes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&escape_attr(class));
        }
        out.push('"');
    }

    if let Some(region) = &element.region {
        out.push_str(" data-region=\"");
        out.push_str(&escape_attr(region));
        out.push('"');
    }

    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
