use crate::play::Config;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Process-wide settings for the chat front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prefix: char,
    pub roster: PathBuf,
    pub table: Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: crate::PREFIX,
            roster: PathBuf::from("roster.json"),
            table: Config::default(),
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing settings in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "prefix": ".", "table": { "ante": 2 } }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.prefix, '.');
        assert_eq!(settings.roster, PathBuf::from("roster.json"));
        assert_eq!(settings.table.ante, 2);
        assert_eq!(settings.table.big_blind, crate::B_BLIND);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().starts_with("reading settings from"));
    }
}
