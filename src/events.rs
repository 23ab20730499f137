//! Event listeners and dispatch.
//!
//! Listeners are keyed by the target's `StableId`. Dispatch runs the target's
//! listeners in registration order, then performs the default action unless a
//! listener prevented it. Events do not bubble: listeners are installed
//! directly on the elements that should react.

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::host::Host;
use crate::id::StableId;
use crate::link::LinkKind;
use crate::node::Document;

/// Kinds of events the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// A dispatched event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: StableId,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: StableId) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    pub fn click(target: StableId) -> Self {
        Self::new(EventKind::Click, target)
    }

    /// Suppress the element's default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// An event listener.
///
/// Listeners see the document as it is at dispatch time, not at bind time.
pub type Listener = Box<dyn Fn(&mut Event, &Document, &mut dyn Host)>;

/// Listeners per (target, kind)
#[derive(Default)]
pub struct EventRegistry {
    listeners: FxHashMap<(StableId, EventKind), SmallVec<[Listener; 2]>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; listeners for one target run in registration order
    pub fn add_listener<F>(&mut self, target: StableId, kind: EventKind, listener: F)
    where
        F: Fn(&mut Event, &Document, &mut dyn Host) + 'static,
    {
        self.listeners
            .entry((target, kind))
            .or_default()
            .push(Box::new(listener));
    }

    /// Number of listeners installed on `target` for `kind`
    pub fn listener_count(&self, target: StableId, kind: EventKind) -> usize {
        self.listeners.get(&(target, kind)).map_or(0, |l| l.len())
    }

    /// Total number of listeners
    pub fn len(&self) -> usize {
        self.listeners.values().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatch an event and run the default action.
    ///
    /// The default action of a click on an `<a href>` is to navigate to the
    /// href. Returns the event in its final state.
    pub fn dispatch(&self, doc: &Document, mut event: Event, host: &mut dyn Host) -> Event {
        if let Some(listeners) = self.listeners.get(&(event.target, event.kind)) {
            for listener in listeners {
                listener(&mut event, doc, host);
            }
        }

        if !event.is_default_prevented() {
            default_action(doc, &event, host);
        }
        event
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("targets", &self.listeners.len())
            .field("listeners", &self.len())
            .finish()
    }
}

fn default_action(doc: &Document, event: &Event, host: &mut dyn Host) {
    let Some(elem) = doc.find_by_stable_id(event.target) else {
        return;
    };
    if elem.tag == "a"
        && let Some(href) = elem.get_attr("href")
        && LinkKind::from_href(href) != LinkKind::None
    {
        host.navigate(href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Effect, RecordingHost, WindowTarget};
    use crate::index::Indexer;
    use crate::node::Element;

    fn doc() -> Document {
        let mut doc = Document::new(
            Element::new("body")
                .child(Element::new("a").with_id("link").attr("href", "#top"))
                .child(Element::new("button").with_id("btn")),
        );
        Indexer::new().index(&mut doc);
        doc
    }

    fn id_of(doc: &Document, id: &str) -> StableId {
        doc.get_element_by_id(id).unwrap().stable_id
    }

    #[test]
    fn test_anchor_default_navigation() {
        let doc = doc();
        let registry = EventRegistry::new();
        let mut host = RecordingHost::new();

        let event = registry.dispatch(&doc, Event::click(id_of(&doc, "link")), &mut host);
        assert!(!event.is_default_prevented());
        assert_eq!(host.effects(), &[Effect::Navigate("#top".into())]);
    }

    #[test]
    fn test_prevent_default_suppresses_navigation() {
        let doc = doc();
        let link = id_of(&doc, "link");
        let mut registry = EventRegistry::new();
        registry.add_listener(link, EventKind::Click, |event, _, _| event.prevent_default());

        let mut host = RecordingHost::new();
        let event = registry.dispatch(&doc, Event::click(link), &mut host);
        assert!(event.is_default_prevented());
        assert!(host.effects().is_empty());
    }

    #[test]
    fn test_listeners_run_in_order() {
        let doc = doc();
        let btn = id_of(&doc, "btn");
        let mut registry = EventRegistry::new();
        registry.add_listener(btn, EventKind::Click, |_, _, host| host.open("first", WindowTarget::Blank));
        registry.add_listener(btn, EventKind::Click, |_, _, host| host.open("second", WindowTarget::Blank));
        assert_eq!(registry.listener_count(btn, EventKind::Click), 2);
        assert_eq!(registry.len(), 2);

        let mut host = RecordingHost::new();
        registry.dispatch(&doc, Event::click(btn), &mut host);
        assert_eq!(host.opened().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_button_has_no_default_action() {
        let doc = doc();
        let mut host = RecordingHost::new();
        EventRegistry::new().dispatch(&doc, Event::click(id_of(&doc, "btn")), &mut host);
        assert!(host.effects().is_empty());
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let doc = doc();
        let mut host = RecordingHost::new();
        EventRegistry::new().dispatch(&doc, Event::click(StableId::from_raw(99)), &mut host);
        assert!(host.effects().is_empty());
    }
}
