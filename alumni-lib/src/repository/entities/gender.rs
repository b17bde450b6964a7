use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Placeholder photos used when a profile is created without one.
const PHOTO_MASCULINE: &str = "/placeholder.svg?height=300&width=300&text=👨";
const PHOTO_FEMININE: &str = "/placeholder.svg?height=300&width=300&text=👩";
const PHOTO_UNSPECIFIED: &str = "/placeholder.svg?height=300&width=300&text=👤";

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Gender {
    #[serde(rename = "masculino")]
    #[strum(serialize = "masculino")]
    Masculine,
    #[serde(rename = "femenino")]
    #[strum(serialize = "femenino")]
    Feminine,
    #[default]
    #[serde(rename = "indefinido")]
    #[strum(serialize = "indefinido")]
    Unspecified,
}

impl Gender {
    /// The placeholder photo for profiles of this gender.
    pub fn default_photo(self) -> &'static str {
        match self {
            Gender::Masculine => PHOTO_MASCULINE,
            Gender::Feminine => PHOTO_FEMININE,
            Gender::Unspecified => PHOTO_UNSPECIFIED,
        }
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashSet, str::FromStr};

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Gender::Feminine.to_string(), "femenino");
        assert_eq!(Gender::from_str("masculino").unwrap(), Gender::Masculine);
        assert_eq!(
            serde_json::to_string(&Gender::Unspecified).unwrap(),
            "\"indefinido\""
        );
    }

    #[test]
    fn test_default_photos_are_distinct() {
        let photos: HashSet<_> = Gender::iter().map(Gender::default_photo).collect();

        assert_eq!(photos.len(), 3);
    }
}
