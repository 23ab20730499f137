//! Section population routines.
//!
//! Each routine clears one container and appends one fragment per input
//! record, in input order. Data always lands in text nodes; the only markup a
//! routine creates is its own fixed scaffolding (card wrappers, `<strong>`
//! labels, lists).
//!
//! The routines are independent of each other: none reads what another wrote.

mod academic;
mod certifications;
mod contact;
mod education;
mod experience;
mod hero;
mod projects;
mod skills;

pub use academic::populate_academic;
pub use certifications::populate_certifications;
pub use contact::{CONTACT_ENTRY_COUNT, ContactEntry, contact_entries, populate_contact};
pub use education::populate_education;
pub use experience::populate_experience;
pub use hero::populate_hero;
pub use projects::populate_projects;
pub use skills::populate_skills;

use tracing::debug;

use crate::data::PortfolioData;
use crate::error::FolioResult;
use crate::node::{Document, Element};
use crate::template::Sinks;

/// Separator between the parts of a meta line ("company • location • period")
pub const META_SEPARATOR: &str = " • ";

/// Run all eight population routines in their fixed order.
///
/// Every sink is checked before anything is written, so a stale template
/// leaves the document untouched.
pub fn render_sections(doc: &mut Document, sinks: &Sinks, data: &PortfolioData) -> FolioResult<()> {
    sinks.check(doc)?;

    populate_hero(doc, &sinks.hero, &data.personal)?;
    debug!(expertise = data.personal.expertise.len(), "populated hero");

    let s = &sinks.sections;
    populate_skills(s.skills.get_mut(doc)?, &data.skills);
    debug!(count = data.skills.len(), "populated skills");

    populate_projects(s.projects.get_mut(doc)?, &data.projects);
    debug!(count = data.projects.len(), "populated projects");

    populate_experience(s.experience.get_mut(doc)?, &data.experience);
    debug!(count = data.experience.len(), "populated experience");

    populate_education(s.education.get_mut(doc)?, &data.education);
    debug!(count = data.education.len(), "populated education");

    populate_academic(s.academic.get_mut(doc)?, &data.academic);
    debug!(count = data.academic.len(), "populated academic");

    populate_certifications(s.certifications.get_mut(doc)?, &data.certifications);
    debug!(count = data.certifications.len(), "populated certifications");

    populate_contact(s.contact.get_mut(doc)?, &data.personal);
    debug!(count = CONTACT_ENTRY_COUNT, "populated contact");

    Ok(())
}

// =============================================================================
// Fragment helpers
// =============================================================================

/// Clear `container`, then append one fragment per item.
fn fill<T>(container: &mut Element, items: &[T], fragment: impl Fn(&T) -> Element) {
    container.clear_children();
    container.children_extend(items.iter().map(fragment));
}

/// `<tag class="class">text</tag>`
fn text_el(tag: &str, class: &str, text: impl Into<String>) -> Element {
    Element::new(tag).with_class(class).text(text)
}

/// `<tag class="class"><strong>label</strong> value</tag>`
fn labeled(tag: &str, class: &str, label: &str, value: &str) -> Element {
    Element::new(tag)
        .with_class(class)
        .child(Element::new("strong").text(label))
        .text(format!(" {value}"))
}

/// `<ul class="class"><li>..</li>*</ul>` (or `ol`)
fn list(tag: &str, class: Option<&str>, items: &[String]) -> Element {
    let list = Element::new(tag).children_from(items.iter().map(|item| Element::new("li").text(item.as_str())));
    match class {
        Some(class) => list.with_class(class),
        None => list,
    }
}

/// "a • b • c"
fn meta_line(parts: &[&str]) -> String {
    parts.join(META_SEPARATOR)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::json;

    use crate::data::PortfolioData;

    pub fn document_json() -> serde_json::Value {
        json!({
            "personal": {
                "name": "Ada Lovelace",
                "title": "Analyst & Programmer",
                "description": "Writes notes on engines.",
                "expertise": ["Mathematics", "Algorithms", "Poetry"],
                "linkedin": "https://linkedin.com/in/ada",
                "email": "ada@example.com",
                "github": "https://github.com/ada",
                "profileImage": "images/ada.png",
                "phone": "+44 20 7946 0958",
                "location": "London"
            },
            "skills": [
                { "category": "Languages", "items": ["Rust", "SQL"] },
                { "category": "Tools", "items": ["Git"] }
            ],
            "projects": [
                {
                    "title": "Difference Engine",
                    "description": "A calculator.",
                    "context": "Tables had errors",
                    "action": "Built <gears>",
                    "result": "Fewer errors",
                    "tags": ["hardware", "math"],
                    "image": "images/engine.png"
                },
                {
                    "title": "Notes",
                    "description": "Annotations.",
                    "context": "c",
                    "action": "a",
                    "result": "r",
                    "tags": []
                }
            ],
            "experience": [
                {
                    "title": "Analyst",
                    "company": "Babbage & Co",
                    "location": "London",
                    "period": "1842 - 1843",
                    "responsibilities": ["Translate", "Annotate"],
                    "keySkills": "Translation, Mathematics"
                }
            ],
            "education": [
                { "degree": "Private tutoring", "institution": "Home", "location": "London", "period": "1830s" },
                { "degree": "Mathematics", "institution": "De Morgan", "location": "London", "period": "1840" }
            ],
            "academic": [
                {
                    "title": "Bernoulli numbers",
                    "meta": "Note G, 1843",
                    "description": "First published algorithm.",
                    "researchQuestions": ["Can it compute?", "Can it compose music?"],
                    "keyFindings": "It can."
                }
            ],
            "certifications": [
                { "title": "CKA", "issuer": "CNCF", "year": "2023", "credentialId": "LF-1", "link": "https://example.com/cka" },
                { "title": "AWS SA", "issuer": "AWS", "year": 2022, "credentialId": "AWS-2", "link": "https://example.com/aws", "icon": "☁️" }
            ]
        })
    }

    pub fn portfolio() -> PortfolioData {
        serde_json::from_value(document_json()).expect("fixture is well-formed")
    }
}
