//! Skills grid: one card per skill group.

use crate::data::SkillGroup;
use crate::node::Element;

use super::{fill, list};

/// Fill `#skillsGrid`: `div.skill-card > h3 + ul.skill-list > li*`
pub fn populate_skills(container: &mut Element, skills: &[SkillGroup]) {
    fill(container, skills, |group| {
        Element::new("div")
            .with_class("skill-card")
            .child(Element::new("h3").text(group.category.as_str()))
            .child(list("ul", Some("skill-list"), &group.items))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(category: &str, items: &[&str]) -> SkillGroup {
        SkillGroup {
            category: category.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_cards_in_input_order() {
        let mut grid = Element::new("div").with_id("skillsGrid");
        populate_skills(&mut grid, &[group("Languages", &["Rust", "SQL"]), group("Tools", &[])]);

        let cards: Vec<_> = grid.children_elements().collect();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].has_class("skill-card"));
        assert_eq!(cards[0].first_child().unwrap().text_content(), "Languages");

        let items: Vec<_> = cards[0]
            .children_elements()
            .nth(1)
            .unwrap()
            .children_elements()
            .map(|li| li.text_content())
            .collect();
        assert_eq!(items, vec!["Rust", "SQL"]);

        let empty_list = cards[1].children_elements().nth(1).unwrap();
        assert!(empty_list.has_class("skill-list"));
        assert!(empty_list.is_empty());
    }

    #[test]
    fn test_clears_previous_content() {
        let mut grid = Element::new("div").text("Loading…");
        populate_skills(&mut grid, &[]);
        assert!(grid.is_empty());
    }
}
