//! Host page template and its sink handles.
//!
//! The page declares one container per section by DOM id. Those ids are the
//! whole contract between the renderer and the page: they are resolved once
//! into [`SinkHandle`]s (stable ids), and the population routines only ever
//! write through those handles.

use crate::error::{FolioError, FolioResult};
use crate::id::StableId;
use crate::node::{Document, Element};

// =============================================================================
// SinkHandle
// =============================================================================

/// A resolved, named section container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkHandle {
    /// Logical sink name (for diagnostics)
    pub name: &'static str,
    /// Identity of the container element
    pub id: StableId,
}

impl SinkHandle {
    /// Resolve the element carrying `dom_id` in an indexed document
    pub fn resolve(doc: &Document, name: &'static str, dom_id: &str) -> FolioResult<Self> {
        let elem = doc
            .get_element_by_id(dom_id)
            .ok_or_else(|| FolioError::MissingContainer(dom_id.to_string()))?;
        Ok(Self {
            name,
            id: elem.stable_id,
        })
    }

    /// The container element
    pub fn get<'a>(&self, doc: &'a Document) -> FolioResult<&'a Element> {
        doc.find_by_stable_id(self.id)
            .ok_or(FolioError::MissingSink(self.name))
    }

    /// The container element, for writing
    pub fn get_mut<'a>(&self, doc: &'a mut Document) -> FolioResult<&'a mut Element> {
        doc.find_by_stable_id_mut(self.id)
            .ok_or(FolioError::MissingSink(self.name))
    }
}

sink_table! {
    /// Hero-area sinks: text slots, the expertise tag strip, the three social
    /// links and the profile image.
    pub struct HeroSinks {
        name = "heroName",
        title = "heroTitle",
        description = "heroDescription",
        expertise = "expertiseTags",
        linkedin = "linkedinLink",
        email = "emailLink",
        github = "githubLink",
        profile_image = "profileImage",
    }
}

sink_table! {
    /// One container per list section.
    pub struct SectionSinks {
        skills = "skillsGrid",
        projects = "projectsGrid",
        experience = "experienceList",
        education = "educationList",
        academic = "academicGrid",
        certifications = "certificationsGrid",
        contact = "contactInfo",
    }
}

/// Every sink the renderer writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sinks {
    pub hero: HeroSinks,
    pub sections: SectionSinks,
}

impl Sinks {
    /// Resolve all sinks against an indexed document
    pub fn resolve(doc: &Document) -> FolioResult<Self> {
        Ok(Self {
            hero: HeroSinks::resolve(doc)?,
            sections: SectionSinks::resolve(doc)?,
        })
    }

    /// Fail unless every handle still resolves in `doc`
    pub fn check(&self, doc: &Document) -> FolioResult<()> {
        for handle in self.hero.handles().into_iter().chain(self.sections.handles()) {
            handle.get(doc)?;
        }
        Ok(())
    }

    /// DOM ids a host page must declare
    pub fn required_ids() -> impl Iterator<Item = &'static str> {
        HeroSinks::IDS.iter().chain(SectionSinks::IDS).copied()
    }
}

// =============================================================================
// Standard page
// =============================================================================

/// Section id the contact buttons scroll to
pub const CONTACT_SECTION_ID: &str = "contact";

const NAV: &[(&str, &str)] = &[
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("academic", "Academic"),
    ("certifications", "Certifications"),
    ("contact", "Contact"),
];

/// Build the default host page skeleton with every sink declared and empty.
pub fn standard_page(title: &str) -> Document {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(title))
        .child(Element::new("link").attr("rel", "stylesheet").attr("href", "styles.css"));

    let nav_links = Element::new("ul").with_class("nav-links").children_from(NAV.iter().map(|(id, label)| {
        Element::new("li").child(Element::new("a").attr("href", format!("#{id}")).text(*label))
    }));

    let header = Element::new("header").with_class("header").child(
        Element::new("nav")
            .with_class("nav")
            .child(Element::new("a").with_class("logo").attr("href", "#").text(title))
            .child(nav_links)
            .child(Element::new("button").with_class("btn-header").text("Get in Touch")),
    );

    let hero = Element::new("section")
        .with_id("hero")
        .with_class("hero")
        .child(
            Element::new("div")
                .with_class("hero-content")
                .child(Element::new("h1").with_id(HeroSinks::NAME_ID))
                .child(Element::new("p").with_id(HeroSinks::TITLE_ID).with_class("hero-title"))
                .child(Element::new("p").with_id(HeroSinks::DESCRIPTION_ID).with_class("hero-description"))
                .child(Element::new("div").with_id(HeroSinks::EXPERTISE_ID).with_class("expertise-tags"))
                .child(
                    Element::new("div")
                        .with_class("hero-buttons")
                        .child(Element::new("button").with_class("btn-primary").text("Contact Me"))
                        .child(Element::new("button").with_class("btn-secondary").text("View GitHub")),
                )
                .child(
                    Element::new("div")
                        .with_class("social-links")
                        .child(social_link(HeroSinks::LINKEDIN_ID, "LinkedIn"))
                        .child(social_link(HeroSinks::EMAIL_ID, "Email"))
                        .child(social_link(HeroSinks::GITHUB_ID, "GitHub")),
                ),
        )
        .child(
            Element::new("div")
                .with_class("hero-image")
                .child(Element::new("img").with_id(HeroSinks::PROFILE_IMAGE_ID).attr("alt", "")),
        );

    let main = Element::new("main")
        .child(hero)
        .child(section("skills", "Skills", "div", SectionSinks::SKILLS_ID, "skills-grid"))
        .child(section("projects", "Projects", "div", SectionSinks::PROJECTS_ID, "projects-grid"))
        .child(section("experience", "Experience", "div", SectionSinks::EXPERIENCE_ID, "experience-list"))
        .child(section("education", "Education", "div", SectionSinks::EDUCATION_ID, "education-list"))
        .child(section("academic", "Academic Work", "div", SectionSinks::ACADEMIC_ID, "academic-grid"))
        .child(section(
            "certifications",
            "Certifications",
            "div",
            SectionSinks::CERTIFICATIONS_ID,
            "certifications-grid",
        ))
        .child(section(CONTACT_SECTION_ID, "Get In Touch", "div", SectionSinks::CONTACT_ID, "contact-info"));

    let footer = Element::new("footer")
        .with_class("footer")
        .child(Element::new("p").text(format!("© {title}")));

    Document::new(
        Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(Element::new("body").child(header).child(main).child(footer)),
    )
}

fn social_link(id: &str, label: &str) -> Element {
    Element::new("a")
        .with_id(id)
        .with_class("social-link")
        .attr("href", "#")
        .text(label)
}

fn section(id: &str, heading: &str, container_tag: &str, container_id: &str, container_class: &str) -> Element {
    Element::new("section")
        .with_id(id)
        .with_class("section")
        .child(Element::new("h2").with_class("section-title").text(heading))
        .child(Element::new(container_tag).with_id(container_id).with_class(container_class))
}
