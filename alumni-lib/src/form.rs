//! Assembly of a [`Profile`] from the sections of the profile form.
//!
//! [`ProfileForm`] holds everything a user has typed so far. Nothing is stored until
//! [`ProfileForm::build`] is called on submission, which validates the required fields, picks
//! a placeholder photo, drops incomplete section entries and omits empty sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;
use tracing::debug;

use crate::repository::{
    Certification, ContactInfo, Education, Experience, Gender, Language, Profile, ProfileId,
    Project, SocialChannel,
};

/// Top-level fields that must be filled before a profile can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RequiredField {
    #[strum(to_string = "nombre")]
    Name,
    #[strum(to_string = "puesto")]
    Position,
    #[strum(to_string = "empresa")]
    Company,
    #[strum(to_string = "descripción")]
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Faltan campos obligatorios: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn field_list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// An ordered set of free-text tags. Entries are trimmed; blanks and duplicates are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagList(Vec<String>);

impl TagList {
    /// Returns whether the tag was added.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.0.iter().any(|t| t == tag) {
            return false;
        }

        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) {
        self.0.retain(|t| t != tag);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_section(self) -> Option<Vec<String>> {
        non_empty(self.0)
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        let mut list = Self::default();
        for tag in &tags {
            list.add(tag);
        }
        list
    }
}

impl From<TagList> for Vec<String> {
    fn from(list: TagList) -> Self {
        list.0
    }
}

/// Everything entered in the profile form.
///
/// Also deserializable, so a whole form can be read from a file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileForm {
    // Basic information
    pub name: String,
    pub position: String,
    pub company: String,
    pub description: String,
    /// Uploaded image as a data URI, or a URL.
    pub photo: Option<String>,
    pub gender: Gender,
    pub area: String,
    pub start_year: String,

    pub contact_info: ContactInfo,
    pub social_links: BTreeMap<SocialChannel, String>,

    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,

    pub skills: TagList,
    pub interests: TagList,
    pub achievements: TagList,
}

impl ProfileForm {
    /// A form as first shown: one blank education entry and one blank experience entry.
    pub fn new() -> Self {
        Self {
            education: vec![Education::default()],
            experience: vec![Experience::default()],
            ..Default::default()
        }
    }

    pub fn add_education(&mut self) -> &mut Education {
        push_blank(&mut self.education)
    }

    pub fn remove_education(&mut self, index: usize) -> Option<Education> {
        remove_at(&mut self.education, index)
    }

    pub fn add_experience(&mut self) -> &mut Experience {
        push_blank(&mut self.experience)
    }

    pub fn remove_experience(&mut self, index: usize) -> Option<Experience> {
        remove_at(&mut self.experience, index)
    }

    pub fn add_project(&mut self) -> &mut Project {
        push_blank(&mut self.projects)
    }

    pub fn remove_project(&mut self, index: usize) -> Option<Project> {
        remove_at(&mut self.projects, index)
    }

    pub fn add_certification(&mut self) -> &mut Certification {
        push_blank(&mut self.certifications)
    }

    pub fn remove_certification(&mut self, index: usize) -> Option<Certification> {
        remove_at(&mut self.certifications, index)
    }

    pub fn add_language(&mut self) -> &mut Language {
        push_blank(&mut self.languages)
    }

    pub fn remove_language(&mut self, index: usize) -> Option<Language> {
        remove_at(&mut self.languages, index)
    }

    /// Enable or disable a social channel. Enabling starts with an empty URL; disabling drops
    /// whatever URL was entered. Returns whether the channel is now enabled.
    pub fn toggle_social_link(&mut self, channel: SocialChannel) -> bool {
        if self.social_links.remove(&channel).is_some() {
            false
        } else {
            self.social_links.insert(channel, String::new());
            true
        }
    }

    pub fn set_social_link(&mut self, channel: SocialChannel, url: &str) {
        self.social_links.insert(channel, url.trim().to_string());
    }

    pub fn set_photo(&mut self, photo: &str) {
        let photo = photo.trim();
        self.photo = (!photo.is_empty()).then(|| photo.to_string());
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Fields that are still blank but required.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Position, &self.position),
            (RequiredField::Company, &self.company),
            (RequiredField::Description, &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Assemble a [`Profile`] with a freshly generated id.
    pub fn build(&self) -> Result<Profile, ValidationError> {
        self.build_with_id(ProfileId::generate())
    }

    /// Assemble a [`Profile`] carrying `id`.
    pub fn build_with_id(&self, id: ProfileId) -> Result<Profile, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let photo = self
            .photo
            .as_deref()
            .map(str::trim)
            .filter(|photo| !photo.is_empty())
            .unwrap_or_else(|| self.gender.default_photo())
            .to_string();

        let social_links = self
            .social_links
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(channel, url)| (*channel, url.trim().to_string()))
            .collect();

        let contact_info = (!self.contact_info.is_empty()).then(|| self.contact_info.clone());

        let profile = Profile {
            id,
            name: self.name.trim().to_string(),
            photo,
            position: self.position.trim().to_string(),
            company: self.company.trim().to_string(),
            description: self.description.trim().to_string(),
            social_links,
            gender: Some(self.gender),
            area: self.area.trim().to_string(),
            start_year: self.start_year.trim().to_string(),
            contact_info,
            education: compact(&self.education, Education::is_complete),
            experience: compact(&self.experience, Experience::is_complete),
            skills: self.skills.clone().into_section(),
            projects: compact(&self.projects, Project::is_complete),
            certifications: compact(&self.certifications, Certification::is_complete),
            languages: compact(&self.languages, Language::is_complete),
            interests: self.interests.clone().into_section(),
            achievements: self.achievements.clone().into_section(),
        };

        debug!("Assembled profile {} ({})", profile.id, profile.name);

        Ok(profile)
    }
}

fn push_blank<T: Default>(entries: &mut Vec<T>) -> &mut T {
    entries.push(T::default());
    entries.last_mut().expect("an entry was just pushed")
}

fn remove_at<T>(entries: &mut Vec<T>, index: usize) -> Option<T> {
    (index < entries.len()).then(|| entries.remove(index))
}

/// Keep the complete entries; `None` if there are none.
fn compact<T: Clone>(entries: &[T], is_complete: fn(&T) -> bool) -> Option<Vec<T>> {
    non_empty(entries.iter().filter(|e| is_complete(e)).cloned().collect())
}

fn non_empty<T>(entries: Vec<T>) -> Option<Vec<T>> {
    (!entries.is_empty()).then_some(entries)
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled_form() -> ProfileForm {
        ProfileForm {
            name: "Ana García".into(),
            position: "Desarrolladora".into(),
            company: "Microsoft México".into(),
            description: "Desarrollo web".into(),
            ..ProfileForm::new()
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let form = ProfileForm {
            name: "Ana".into(),
            company: "  ".into(),
            ..ProfileForm::new()
        };

        let err = form.build().unwrap_err();

        assert_eq!(
            err.missing,
            vec![
                RequiredField::Position,
                RequiredField::Company,
                RequiredField::Description
            ]
        );
        assert_eq!(
            err.to_string(),
            "Faltan campos obligatorios: puesto, empresa, descripción"
        );
    }

    #[test]
    fn test_blank_sections_are_omitted() {
        let profile = filled_form().build().unwrap();

        assert_eq!(profile.education, None);
        assert_eq!(profile.experience, None);
        assert_eq!(profile.projects, None);
        assert_eq!(profile.skills, None);
        assert_eq!(profile.contact_info, None);
        assert!(profile.social_links.is_empty());
    }

    #[test]
    fn test_experience_without_company_is_omitted() {
        let mut form = filled_form();
        form.experience = vec![
            Experience {
                position: "Ingeniera".into(),
                ..Default::default()
            },
            Experience {
                position: "Líder técnica".into(),
                period: "2020-2022".into(),
                ..Default::default()
            },
        ];

        assert_eq!(form.build().unwrap().experience, None);
    }

    #[test]
    fn test_experience_is_filtered() {
        let mut form = filled_form();
        let complete = Experience {
            position: "Ingeniera de Software".into(),
            company: "Innovatech".into(),
            period: "2020-2022".into(),
            description: String::new(),
        };
        form.experience = vec![
            Experience {
                company: "Sin puesto".into(),
                ..Default::default()
            },
            complete.clone(),
        ];

        assert_eq!(form.build().unwrap().experience, Some(vec![complete]));
    }

    #[test]
    fn test_other_sections_are_compacted() {
        let mut form = filled_form();
        form.add_education().degree = "Ingeniería".into();
        let education = form.add_education();
        education.degree = "Maestría".into();
        education.institution = "UNAM".into();
        form.add_project().name = "Sistema Hospitalario".into();
        form.add_project();
        form.add_certification().name = "AWS".into();
        form.add_language().name = "Inglés".into();

        let profile = form.build().unwrap();

        assert_eq!(profile.education.map(|e| e.len()), Some(1));
        assert_eq!(profile.projects.map(|p| p.len()), Some(1));
        assert_eq!(profile.certifications, None);
        assert_eq!(profile.languages.map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_default_photo_by_gender() {
        let mut form = filled_form();
        form.gender = Gender::Feminine;

        assert_eq!(
            form.build().unwrap().photo,
            Gender::Feminine.default_photo()
        );

        form.set_photo("  ");
        assert_eq!(
            form.build().unwrap().photo,
            Gender::Feminine.default_photo()
        );
    }

    #[test]
    fn test_explicit_photo_is_kept() {
        let mut form = filled_form();
        form.gender = Gender::Feminine;
        form.set_photo("https://example.com/ana.png");

        assert_eq!(form.build().unwrap().photo, "https://example.com/ana.png");

        form.clear_photo();
        assert_eq!(
            form.build().unwrap().photo,
            Gender::Feminine.default_photo()
        );
    }

    #[test]
    fn test_tags_dedupe() {
        let mut form = filled_form();

        assert!(form.skills.add("Rust"));
        assert!(!form.skills.add(" Rust "));
        assert!(!form.skills.add(""));
        form.skills.add("SQL");
        form.skills.remove("SQL");
        form.achievements.add("Premio a la Innovación");
        form.achievements.add("Premio a la Innovación");

        let profile = form.build().unwrap();

        assert_eq!(profile.skills, Some(vec!["Rust".to_string()]));
        assert_eq!(profile.interests, None);
        assert_eq!(
            profile.achievements,
            Some(vec!["Premio a la Innovación".to_string()])
        );
    }

    #[test]
    fn test_contact_info_kept_when_any_field_set() {
        let mut form = filled_form();
        form.contact_info.phone = "+52 771 000 0000".into();

        let contact = form.build().unwrap().contact_info.unwrap();

        assert_eq!(contact.phone, "+52 771 000 0000");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn test_social_links() {
        let mut form = filled_form();

        assert!(form.toggle_social_link(SocialChannel::Github));
        assert!(form.toggle_social_link(SocialChannel::Twitter));
        form.set_social_link(SocialChannel::Linkedin, " https://linkedin.com/in/ana ");
        assert!(!form.toggle_social_link(SocialChannel::Twitter));

        let profile = form.build().unwrap();

        // Github was enabled but never filled in
        assert_eq!(
            profile.social_links,
            BTreeMap::from([(
                SocialChannel::Linkedin,
                "https://linkedin.com/in/ana".to_string()
            )])
        );
    }

    #[test]
    fn test_remove_entries() {
        let mut form = ProfileForm::new();

        assert!(form.remove_education(3).is_none());
        assert!(form.remove_education(0).is_some());
        assert!(form.education.is_empty());
    }

    #[test]
    fn test_ids_do_not_collide() {
        let form = filled_form();

        let first = form.build().unwrap();
        let second = form.build().unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_required_fields_are_trimmed() {
        let mut form = filled_form();
        form.name = "  Ana García  ".into();
        form.start_year = " 2016 ".into();

        let profile = form.build().unwrap();

        assert_eq!(profile.name, "Ana García");
        assert_eq!(profile.start_year, "2016");
        assert_eq!(profile.gender, Some(Gender::Unspecified));
    }

    #[test]
    fn test_deserialize_form() {
        let form: ProfileForm = serde_json::from_str(
            r#"{
                "name": "Laura",
                "skills": ["Redes", "Redes", " "],
                "experience": [{ "position": "Analista", "company": "Banxico" }]
            }"#,
        )
        .unwrap();

        assert_eq!(form.skills.as_slice(), ["Redes".to_string()]);
        assert_eq!(form.experience.len(), 1);
    }
}
