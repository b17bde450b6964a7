//! Structured sub-records attached to a [`Profile`](super::Profile).
//!
//! Each record knows which of its fields are required; incomplete records are dropped when a
//! profile is assembled.

use serde::{Deserialize, Serialize};

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

impl Education {
    pub fn is_complete(&self) -> bool {
        filled(&self.degree) && filled(&self.institution)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

impl Experience {
    pub fn is_complete(&self) -> bool {
        filled(&self.position) && filled(&self.company)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Project {
    pub fn is_complete(&self) -> bool {
        filled(&self.name)
    }

    /// Add a technology tag. Blank input is ignored.
    pub fn add_technology(&mut self, technology: &str) -> bool {
        let technology = technology.trim();
        if technology.is_empty() {
            return false;
        }

        self.technologies.push(technology.to_string());
        true
    }

    pub fn remove_technology(&mut self, technology: &str) {
        self.technologies.retain(|t| t != technology);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

impl Certification {
    pub fn is_complete(&self) -> bool {
        filled(&self.name) && filled(&self.issuer)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub level: String,
}

impl Language {
    pub fn is_complete(&self) -> bool {
        filled(&self.name)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl ContactInfo {
    /// Whether any of the contact fields carries a value.
    pub fn is_empty(&self) -> bool {
        [&self.email, &self.phone, &self.location]
            .iter()
            .all(|value| !filled(value))
    }
}
