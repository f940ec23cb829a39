mod content;

pub use content::Content;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in a markup tree.
///
/// Elements are plain data: they describe markup without assuming any
/// rendering technology. A [`Host`](crate::Host) turns a tree into whatever
/// its UI actually needs (a DOM, a terminal buffer, a string) and can later
/// swap out the subtree of any node marked as a region.
#[derive(Debug, Clone)]
pub struct Element {
    /// Generated identity, unique per process.
    pub id: String,

    /// Markup tag ("div", "span", "a", ...).
    pub tag: String,

    /// Region name, if this node is independently replaceable.
    pub region: Option<String>,

    /// CSS-style class list.
    pub classes: Vec<String>,

    /// Plain attributes, in insertion order.
    pub attrs: Vec<(String, String)>,

    /// Child content.
    pub content: Content,
}

impl Element {
    fn with_tag(prefix: &str, tag: &str) -> Self {
        Self {
            id: generate_id(prefix),
            tag: tag.to_string(),
            region: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::with_tag("div", "div")
    }

    pub fn span() -> Self {
        Self::with_tag("span", "span")
    }

    /// Create an anchor element pointing at `href`.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::with_tag("a", "a").attr("href", href)
    }

    /// Create a span holding plain text.
    pub fn text(content: impl Into<String>) -> Self {
        let mut element = Self::with_tag("text", "span");
        element.content = Content::Text(content.into());
        element
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Mark this element as a named region.
    pub fn region(mut self, name: impl Into<String>) -> Self {
        self.region = Some(name.into());
        self
    }

    // Attributes

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    // Content

    pub fn text_content(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Iterate over direct children, if any.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
