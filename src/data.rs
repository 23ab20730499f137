//! Portfolio document model.
//!
//! The JSON document uses camelCase keys. Required fields are required: a
//! record missing one fails deserialization instead of rendering blanks.
//! Top-level arrays that are absent deserialize as empty.

use serde::{Deserialize, Deserializer};

/// Glyph shown on a certification card without an icon
pub const DEFAULT_CERT_ICON: &str = "📜";

/// The whole portfolio document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal: Personal,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub academic: Vec<AcademicProject>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// The person the portfolio is about
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub description: String,
    pub expertise: Vec<String>,
    pub linkedin: String,
    pub email: String,
    pub github: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub profile_image: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub context: String,
    pub action: String,
    pub result: String,
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
}

/// One entry of the `experience` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub key_skills: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
}

/// One entry of the `academic` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicProject {
    pub title: String,
    pub meta: String,
    pub description: String,
    pub research_questions: Vec<String>,
    pub key_findings: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    pub credential_id: String,
    pub link: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub icon: Option<String>,
}

impl Certification {
    /// The card glyph: the record's icon, or [`DEFAULT_CERT_ICON`]
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_CERT_ICON)
    }
}

impl PortfolioData {
    /// Child counts per section container, in render order
    /// (hero expertise tags, skills, projects, experience, education,
    /// academic, certifications, contact).
    pub fn section_counts(&self) -> [(&'static str, usize); 8] {
        [
            ("hero", self.personal.expertise.len()),
            ("skills", self.skills.len()),
            ("projects", self.projects.len()),
            ("experience", self.experience.len()),
            ("education", self.education.len()),
            ("academic", self.academic.len()),
            ("certifications", self.certifications.len()),
            ("contact", crate::sections::CONTACT_ENTRY_COUNT),
        ]
    }
}

// =============================================================================
// Field helpers
// =============================================================================

/// Optional string where `null`, absent and `""` all mean "not provided".
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Accept `"2021"` as well as `2021`; numbers keep their JSON spelling.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}
