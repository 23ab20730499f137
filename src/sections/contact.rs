//! Contact cards synthesized from the personal record.

use crate::data::Personal;
use crate::host::WindowTarget;
use crate::link::{self, LinkKind};
use crate::node::Element;

use super::fill;

/// Number of contact cards: e-mail, phone, location
pub const CONTACT_ENTRY_COUNT: usize = 3;

/// One synthesized contact card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub title: &'static str,
    pub value: String,
    pub link: String,
}

impl ContactEntry {
    /// Only real links open a new browsing context; the `#` placeholder does not.
    pub fn opens_new_context(&self) -> bool {
        LinkKind::from_href(&self.link).is_navigable()
    }
}

/// The e-mail, phone and location entries, in that order.
pub fn contact_entries(personal: &Personal) -> [ContactEntry; CONTACT_ENTRY_COUNT] {
    [
        ContactEntry {
            title: "Email",
            value: personal.email.clone(),
            link: link::mailto(&personal.email),
        },
        ContactEntry {
            title: "Phone",
            value: personal.phone.clone(),
            link: link::tel(&personal.phone),
        },
        ContactEntry {
            title: "Location",
            value: personal.location.clone(),
            link: link::PLACEHOLDER.to_string(),
        },
    ]
}

/// Fill `#contactInfo`: `div.contact-card > h3 + p > a`
pub fn populate_contact(container: &mut Element, personal: &Personal) {
    fill(container, &contact_entries(personal), |entry| {
        let mut anchor = Element::new("a")
            .attr("href", entry.link.as_str())
            .text(entry.value.as_str());
        if entry.opens_new_context() {
            anchor.set_attr("target", WindowTarget::Blank.as_attr());
        }

        Element::new("div")
            .with_class("contact-card")
            .child(Element::new("h3").text(entry.title))
            .child(Element::new("p").child(anchor))
    });
}
