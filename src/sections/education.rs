//! Education list.

use crate::data::Education;
use crate::node::Element;

use super::{fill, meta_line, text_el};

/// Fill `#educationList`: `div.education-item > h4 + p.education-meta`
pub fn populate_education(container: &mut Element, education: &[Education]) {
    fill(container, education, |edu| {
        Element::new("div")
            .with_class("education-item")
            .child(Element::new("h4").text(edu.degree.as_str()))
            .child(text_el(
                "p",
                "education-meta",
                meta_line(&[edu.institution.as_str(), edu.location.as_str(), edu.period.as_str()]),
            ))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_item() {
        let mut list = Element::new("div");
        populate_education(
            &mut list,
            &[Education {
                degree: "BSc Computer Science".into(),
                institution: "University of Somewhere".into(),
                location: "Lisbon".into(),
                period: "2015 - 2018".into(),
            }],
        );

        let item = list.first_child().unwrap();
        assert!(item.has_class("education-item"));
        let parts: Vec<_> = item.children_elements().map(|e| e.text_content()).collect();
        assert_eq!(
            parts,
            vec!["BSc Computer Science", "University of Somewhere • Lisbon • 2015 - 2018"]
        );
    }

    #[test]
    fn test_items_follow_input_order() {
        let edu = |degree: &str| Education {
            degree: degree.into(),
            institution: "Open University".into(),
            location: "Milton Keynes".into(),
            period: "2019".into(),
        };
        let mut list = Element::new("div");
        populate_education(&mut list, &[edu("MSc Statistics"), edu("BA History")]);

        let degrees: Vec<_> = list
            .children_elements()
            .map(|item| item.first_child().unwrap().text_content())
            .collect();
        assert_eq!(degrees, vec!["MSc Statistics", "BA History"]);
    }
}
