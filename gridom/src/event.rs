/// Event classes a component can subscribe to on its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation (click / pointerdown) anywhere in the mounted tree.
    Pointer,
    /// Viewport scrolling.
    Scroll,
}

/// Scroll position snapshot delivered with a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Bottom edge of the viewport, in host units from the top of the content.
    pub viewport_bottom: u32,
    /// Total scrollable height of the content, in the same units.
    pub content_height: u32,
}

impl ScrollMetrics {
    pub fn new(viewport_bottom: u32, content_height: u32) -> Self {
        Self {
            viewport_bottom,
            content_height,
        }
    }

    /// Whether the viewport bottom exactly coincides with the end of the
    /// content.
    ///
    /// Exact equality is the contract: hosts reporting fractional positions
    /// must round the viewport bottom up before building the metrics, or
    /// bottom-of-page detection will never fire.
    pub fn at_bottom(&self) -> bool {
        self.viewport_bottom == self.content_height
    }
}

/// High-level events with element targeting, delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer activation. `target` is the id of the deepest element under
    /// the pointer, if the host could resolve one.
    PointerDown { target: Option<String> },
    /// Viewport scrolled.
    Scroll { metrics: ScrollMetrics },
}
