//! Interaction binders.
//!
//! Binders walk the document once, pick the elements that should react to
//! clicks and install listeners on them. Listeners read the document at click
//! time, so a link whose `href` was filled in after binding is seen as filled.

use tracing::debug;

use crate::events::{Event, EventKind, EventRegistry};
use crate::host::{Host, ScrollBehavior, WindowTarget};
use crate::link::{LinkKind, fragment_target};
use crate::node::Document;
use crate::template::{CONTACT_SECTION_ID, HeroSinks};

/// Buttons that scroll to the contact section
pub const CONTACT_BUTTON_CLASSES: &[&str] = &["btn-primary", "btn-header"];

/// Button that opens the repository link
pub const GITHUB_BUTTON_CLASS: &str = "btn-secondary";

/// Install smooth scrolling on every in-page anchor.
///
/// Returns the number of anchors bound.
pub fn bind_smooth_scroll(doc: &Document, registry: &mut EventRegistry) -> usize {
    let anchors: Vec<_> = doc
        .find_all(|e| e.tag == "a" && e.get_attr("href").is_some_and(|href| href.starts_with('#')))
        .into_iter()
        .map(|e| e.stable_id)
        .collect();

    for &anchor in &anchors {
        registry.add_listener(anchor, EventKind::Click, scroll_to_fragment);
    }
    debug!(count = anchors.len(), "bound smooth scroll");
    anchors.len()
}

fn scroll_to_fragment(event: &mut Event, doc: &Document, host: &mut dyn Host) {
    let Some(anchor) = doc.find_by_stable_id(event.target) else {
        return;
    };
    // The bare placeholder keeps its default navigation
    let Some(fragment) = anchor.get_attr("href").and_then(fragment_target) else {
        return;
    };

    event.prevent_default();
    if let Some(target) = doc.get_element_by_id(fragment) {
        host.scroll_into_view(target.stable_id, ScrollBehavior::Smooth);
    }
}

/// Install the hero and header button behaviors.
///
/// Only elements present at bind time are bound. An element carrying several
/// of the recognized classes gets every matching listener. Returns the number
/// of listeners installed.
pub fn bind_buttons(doc: &Document, registry: &mut EventRegistry) -> usize {
    let mut installed = 0;

    for elem in doc.iter_elements() {
        if CONTACT_BUTTON_CLASSES.iter().any(|class| elem.has_class(class)) {
            registry.add_listener(elem.stable_id, EventKind::Click, scroll_to_contact);
            installed += 1;
        }
        if elem.has_class(GITHUB_BUTTON_CLASS) {
            registry.add_listener(elem.stable_id, EventKind::Click, open_github);
            installed += 1;
        }
    }
    debug!(count = installed, "bound buttons");
    installed
}

fn scroll_to_contact(event: &mut Event, doc: &Document, host: &mut dyn Host) {
    event.prevent_default();
    if let Some(contact) = doc.get_element_by_id(CONTACT_SECTION_ID) {
        host.scroll_into_view(contact.stable_id, ScrollBehavior::Smooth);
    }
}

fn open_github(event: &mut Event, doc: &Document, host: &mut dyn Host) {
    event.prevent_default();
    let href = doc
        .get_element_by_id(HeroSinks::GITHUB_ID)
        .and_then(|link| link.get_attr("href"));
    if let Some(href) = href
        && LinkKind::from_href(href).is_navigable()
    {
        host.open(href, WindowTarget::Blank);
    }
}
