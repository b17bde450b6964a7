use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A channel a graduate can be reached on. Each profile holds at most one URL per channel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialChannel {
    Linkedin,
    Github,
    Twitter,
    Website,
    Email,
}

impl SocialChannel {
    /// Label shown next to the link.
    pub fn label(self) -> &'static str {
        match self {
            SocialChannel::Linkedin => "LinkedIn",
            SocialChannel::Github => "GitHub",
            SocialChannel::Twitter => "Twitter",
            SocialChannel::Website => "Sitio Web",
            SocialChannel::Email => "Email",
        }
    }
}
