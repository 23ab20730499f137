//! Experience list: one item per job.

use crate::data::Job;
use crate::node::Element;

use super::{fill, labeled, list, meta_line, text_el};

/// Fill `#experienceList`.
///
/// ```text
/// div.experience-item
///   h4                      title
///   p.experience-meta       company • location • period
///   ul.responsibilities-list > li*
///   p.key-skills            <strong>Key Skills:</strong> ...
/// ```
pub fn populate_experience(container: &mut Element, jobs: &[Job]) {
    fill(container, jobs, |job| {
        Element::new("div")
            .with_class("experience-item")
            .child(Element::new("h4").text(job.title.as_str()))
            .child(text_el(
                "p",
                "experience-meta",
                meta_line(&[job.company.as_str(), job.location.as_str(), job.period.as_str()]),
            ))
            .child(list("ul", Some("responsibilities-list"), &job.responsibilities))
            .child(labeled("p", "key-skills", "Key Skills:", &job.key_skills))
    });
}
