//! Hero area: name, title, description, expertise tags, social links and
//! the optional profile image.

use crate::data::Personal;
use crate::error::FolioResult;
use crate::link;
use crate::node::{Document, Element};
use crate::template::HeroSinks;

use super::{fill, text_el};

/// Populate the hero sinks from the personal record.
///
/// The profile image is only touched when the record has one; otherwise the
/// template's image element is left as declared.
pub fn populate_hero(doc: &mut Document, sinks: &HeroSinks, personal: &Personal) -> FolioResult<()> {
    sinks.name.get_mut(doc)?.set_text(personal.name.as_str());
    sinks.title.get_mut(doc)?.set_text(personal.title.as_str());
    sinks.description.get_mut(doc)?.set_text(personal.description.as_str());

    fill(sinks.expertise.get_mut(doc)?, &personal.expertise, |exp| {
        text_el("span", "expertise-tag", exp.as_str())
    });

    sinks.linkedin.get_mut(doc)?.set_attr("href", personal.linkedin.as_str());
    sinks.email.get_mut(doc)?.set_attr("href", link::mailto(&personal.email));
    sinks.github.get_mut(doc)?.set_attr("href", personal.github.as_str());

    if let Some(src) = &personal.profile_image {
        let img: &mut Element = sinks.profile_image.get_mut(doc)?;
        img.set_attr("src", src.as_str());
        img.set_attr("alt", personal.name.as_str());
    }

    Ok(())
}
