use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{
    Certification, ContactInfo, Education, Experience, Gender, Language, ProfileId, Project,
    SocialChannel,
};

/// One graduate's record.
///
/// Optional sections are either `None` or non-empty; the form assembler never produces an empty
/// list. Profiles are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub photo: String,
    pub position: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub social_links: BTreeMap<SocialChannel, String>,
    /// Older records may predate the gender field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub area: String,
    /// Always held as text. Numeric years in stored data are converted on load.
    #[serde(default, deserialize_with = "year_as_string")]
    pub start_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

impl Profile {
    /// The fields free-text search looks at.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.position.as_str(),
            self.company.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Accept `"2020"`, `2020` or `null` for a year and keep it as trimmed text.
fn year_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Text(text)) => text.trim().to_string(),
        Some(RawYear::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
