use crate::element::Element;
use crate::event::EventKind;

/// The injected UI side of a component.
///
/// A host owns the live presentation of a mounted [`Element`] tree. The
/// component never touches the presentation directly: after the initial
/// [`mount`](Host::mount) it only issues region-scoped updates, so the host
/// is free to keep listeners and other per-node state alive across data
/// changes.
///
/// Event flow is pull-free: the host delivers
/// [`UiEvent`](crate::event::UiEvent)s for every subscribed [`EventKind`] to
/// whatever component registered interest, and stops after the matching
/// [`unlisten`](Host::unlisten). Subscriptions made while mounting must be
/// removed on teardown.
pub trait Host: Send {
    /// Attach the tree to the host's mount point.
    fn mount(&mut self, root: &Element);

    /// Detach the mounted tree and drop any per-node state.
    fn unmount(&mut self);

    /// Replace the children of the named region. The region node itself
    /// stays in place.
    fn replace_region(&mut self, region: &str, content: &[Element]);

    /// Toggle a class on the named region's node.
    fn set_region_class(&mut self, region: &str, class: &str, enabled: bool);

    /// Set (`Some`) or remove (`None`) an attribute on the named region's
    /// node.
    fn set_region_attr(&mut self, region: &str, name: &str, value: Option<&str>);

    /// Start delivering events of the given kind.
    fn listen(&mut self, kind: EventKind);

    /// Stop delivering events of the given kind.
    fn unlisten(&mut self, kind: EventKind);
}
