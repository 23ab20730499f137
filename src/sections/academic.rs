//! Academic work grid.

use crate::data::AcademicProject;
use crate::node::Element;

use super::{fill, labeled, list, text_el};

/// Fill `#academicGrid`.
///
/// Research questions are rendered as an ordered list under a fixed
/// "Research Questions:" heading; each question is its own text node.
pub fn populate_academic(container: &mut Element, academic: &[AcademicProject]) {
    fill(container, academic, |project| {
        let research = Element::new("div")
            .with_class("research-questions")
            .child(Element::new("h4").text("Research Questions:"))
            .child(list("ol", None, &project.research_questions));

        Element::new("div")
            .with_class("academic-card")
            .child(Element::new("h3").text(project.title.as_str()))
            .child(text_el("p", "academic-meta", project.meta.as_str()))
            .child(Element::new("p").text(project.description.as_str()))
            .child(research)
            .child(labeled("div", "key-findings", "Key Findings:", &project.key_findings))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academic_card() {
        let mut grid = Element::new("div");
        populate_academic(
            &mut grid,
            &[AcademicProject {
                title: "Graph sparsification".into(),
                meta: "MSc thesis, 2021".into(),
                description: "Spectral methods.".into(),
                research_questions: vec!["Q1 <i>?</i>".into(), "Q2".into()],
                key_findings: "Sparsifiers help.".into(),
            }],
        );

        let card = grid.first_child().unwrap();
        assert!(card.has_class("academic-card"));
        let children: Vec<_> = card.children_elements().collect();
        assert_eq!(children.len(), 5);
        assert_eq!(children[1].text_content(), "MSc thesis, 2021");

        let questions = children[3].children_elements().nth(1).unwrap();
        assert_eq!(questions.tag, "ol");
        let texts: Vec<_> = questions.children_elements().map(|li| li.text_content()).collect();
        assert_eq!(texts, vec!["Q1 <i>?</i>", "Q2"]);

        assert_eq!(children[4].text_content(), "Key Findings: Sparsifiers help.");
    }

    #[test]
    fn test_cards_follow_input_order() {
        let project = |title: &str| AcademicProject {
            title: title.into(),
            meta: "BSc project".into(),
            description: "d".into(),
            research_questions: vec![],
            key_findings: "k".into(),
        };
        let mut grid = Element::new("div");
        populate_academic(&mut grid, &[project("Type inference"), project("Garbage collection")]);

        let titles: Vec<_> = grid
            .children_elements()
            .map(|card| card.first_child().unwrap().text_content())
            .collect();
        assert_eq!(titles, vec!["Type inference", "Garbage collection"]);
    }

    #[test]
    fn test_empty_academic() {
        let mut grid = Element::new("div").child(Element::new("div").with_class("academic-card"));
        populate_academic(&mut grid, &[]);
        assert!(grid.is_empty());
    }
}
