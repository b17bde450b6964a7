//! One-way export of a single profile as a human-readable JSON document.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{Result, repository::Profile};

/// Pretty-printed JSON for `profile`, two-space indented.
pub fn to_json(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// `perfil_<name>.json`, with the words of the name joined by `_` and lower-cased. Only
/// alphanumerics, `-` and `_` survive; names with nothing left fall back to the profile id.
pub fn file_name(profile: &Profile) -> String {
    let name = profile
        .name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();

    if name.is_empty() {
        format!("perfil_{}.json", profile.id)
    } else {
        format!("perfil_{name}.json")
    }
}

/// Write the export of `profile` into `dir`, returning the path of the new file.
pub fn write_to(dir: &Path, profile: &Profile) -> Result<PathBuf> {
    let path = dir.join(file_name(profile));
    fs::write(&path, to_json(profile)?)?;

    info!("Exported {} to {}", profile.name, path.display());

    Ok(path)
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;
    use crate::repository::seed::sample_profiles;

    fn ana() -> Profile {
        sample_profiles().remove(0)
    }

    #[test]
    fn test_file_name() {
        let mut profile = ana();
        assert_eq!(file_name(&profile), "perfil_ana_garcía_hernández.json");

        profile.name = "  Miguel   Ángel\tPérez ".into();
        assert_eq!(file_name(&profile), "perfil_miguel_ángel_pérez.json");
    }

    #[test]
    fn test_file_name_drops_path_separators() {
        let mut profile = ana();
        profile.name = "Ana García / López\\..".into();
        assert_eq!(file_name(&profile), "perfil_ana_garcía_lópez.json");

        profile.name = " / ".into();
        assert_eq!(file_name(&profile), "perfil_1.json");
    }

    #[test]
    fn test_write_to_with_slash_in_name() {
        let dir = tempdir().unwrap();
        let mut profile = ana();
        profile.name = "Ana García / López".into();

        let path = write_to(dir.path(), &profile).unwrap();

        assert_eq!(path, dir.path().join("perfil_ana_garcía_lópez.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&ana()).unwrap();

        assert!(json.contains("\n  \"name\": \"Ana García Hernández\""));
        assert!(json.contains("\"socialLinks\""));
        assert!(json.contains("\"startYear\": \"2014\""));
        assert!(!json.contains("education"));
    }

    #[test]
    fn test_write_to() {
        let dir = tempdir().unwrap();
        let profile = ana();

        let path = write_to(dir.path(), &profile).unwrap();

        let restored: Profile = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(restored, profile);
    }
}
