//! Projects grid: one card per project, with an optional cover image and a
//! context / action / result breakdown.

use crate::data::Project;
use crate::node::Element;

use super::{fill, text_el};

/// Fill `#projectsGrid`.
pub fn populate_projects(container: &mut Element, projects: &[Project]) {
    fill(container, projects, project_card);
}

fn project_card(project: &Project) -> Element {
    let mut card = Element::new("div").with_class("project-card");

    if let Some(image) = &project.image {
        card.push_elem(
            Element::new("img")
                .attr("src", image.as_str())
                .attr("alt", project.title.as_str())
                .with_class("project-image"),
        );
    }

    let context = Element::new("div")
        .with_class("project-context")
        .child(context_item("Context:", &project.context))
        .child(context_item("Action:", &project.action))
        .child(context_item("Result:", &project.result));

    let tags = Element::new("div")
        .with_class("project-tags")
        .children_from(project.tags.iter().map(|tag| text_el("span", "project-tag", tag.as_str())));

    card.child(Element::new("h3").text(project.title.as_str()))
        .child(text_el("p", "project-description", project.description.as_str()))
        .child(context)
        .child(tags)
}

fn context_item(label: &str, value: &str) -> Element {
    Element::new("div")
        .with_class("project-context-item")
        .child(
            Element::new("span")
                .with_class("project-context-label")
                .child(Element::new("strong").text(label)),
        )
        .child(text_el("span", "project-context-value", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(image: Option<&str>) -> Project {
        Project {
            title: "Ledger".into(),
            description: "Double-entry bookkeeping.".into(),
            context: "Spreadsheets".into(),
            action: "Wrote <b>a service</b>".into(),
            result: "Closed books 3x faster".into(),
            tags: vec!["rust".into(), "postgres".into()],
            image: image.map(String::from),
        }
    }

    #[test]
    fn test_card_with_image() {
        let mut grid = Element::new("div");
        populate_projects(&mut grid, &[project(Some("img/ledger.png"))]);

        let card = grid.first_child().unwrap();
        let img = card.first_child().unwrap();
        assert_eq!(img.tag, "img");
        assert_eq!(img.get_attr("src"), Some("img/ledger.png"));
        assert_eq!(img.get_attr("alt"), Some("Ledger"));
        assert!(img.has_class("project-image"));
        assert_eq!(card.element_count(), 5);
    }

    #[test]
    fn test_card_without_image() {
        let mut grid = Element::new("div");
        populate_projects(&mut grid, &[project(None)]);

        let card = grid.first_child().unwrap();
        assert_eq!(card.element_count(), 4);
        assert_eq!(card.first_child().unwrap().tag, "h3");
    }

    #[test]
    fn test_context_values_stay_text() {
        let mut grid = Element::new("div");
        populate_projects(&mut grid, &[project(None)]);

        let card = grid.first_child().unwrap();
        let context = card.children_elements().find(|e| e.has_class("project-context")).unwrap();
        let rows: Vec<_> = context.children_elements().map(|row| row.text_content()).collect();
        assert_eq!(
            rows,
            vec![
                "Context:Spreadsheets",
                "Action:Wrote <b>a service</b>",
                "Result:Closed books 3x faster"
            ]
        );

        let action_value = context
            .children_elements()
            .nth(1)
            .and_then(|row| row.children_elements().nth(1))
            .unwrap();
        assert_eq!(action_value.element_count(), 0);
    }

    #[test]
    fn test_cards_follow_input_order() {
        let mut second = project(None);
        second.title = "Scheduler".into();
        let mut grid = Element::new("div");
        populate_projects(&mut grid, &[project(None), second]);

        let titles: Vec<_> = grid
            .children_elements()
            .map(|card| card.first_child().unwrap().text_content())
            .collect();
        assert_eq!(titles, vec!["Ledger", "Scheduler"]);
    }

    #[test]
    fn test_tags_in_order() {
        let mut grid = Element::new("div");
        populate_projects(&mut grid, &[project(None)]);
        let card = grid.first_child().unwrap();
        let tags = card.children_elements().last().unwrap();
        let names: Vec<_> = tags.children_elements().map(|t| t.text_content()).collect();
        assert_eq!(names, vec!["rust", "postgres"]);
    }
}
