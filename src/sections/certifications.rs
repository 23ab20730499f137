//! Certifications grid.

use crate::data::Certification;
use crate::host::WindowTarget;
use crate::node::Element;

use super::{fill, text_el};

/// Fill `#certificationsGrid`.
///
/// The certificate link always opens in a new browsing context; a record
/// without an icon shows the default glyph.
pub fn populate_certifications(container: &mut Element, certifications: &[Certification]) {
    fill(container, certifications, |cert| {
        Element::new("div")
            .with_class("certification-card")
            .child(text_el("div", "cert-icon", cert.icon_or_default()))
            .child(Element::new("h3").text(cert.title.as_str()))
            .child(Element::new("p").child(Element::new("strong").text(cert.issuer.as_str())))
            .child(Element::new("p").text(format!("Year: {}", cert.year)))
            .child(Element::new("p").text(format!("ID: {}", cert.credential_id)))
            .child(
                Element::new("a")
                    .attr("href", cert.link.as_str())
                    .attr("target", WindowTarget::Blank.as_attr())
                    .text("View Certificate"),
            )
    });
}
