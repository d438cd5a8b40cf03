//! Content configuration

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};

use crate::importer::RaceImporter;

/// Where race data lives, loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Directory holding the data files
    pub data_path: PathBuf,
    /// File name of the races file inside `data_path`
    pub races_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data"),
            races_file: RaceImporter::DEFAULT_RACES_FILE.to_string(),
        }
    }
}

impl ContentConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let data_path = lookup("KINDRED_DATA_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let races_file = lookup("KINDRED_RACES_FILE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.races_file);

        ensure!(
            is_plain_file_name(&races_file),
            "KINDRED_RACES_FILE must be a file name inside KINDRED_DATA_PATH, got '{}'",
            races_file
        );

        Ok(Self {
            data_path,
            races_file,
        })
    }

    /// Full path of the races file.
    pub fn races_path(&self) -> PathBuf {
        self.data_path.join(&self.races_file)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    path.file_name().and_then(|f| f.to_str()) == Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ContentConfig::default());
        assert_eq!(config.races_file, RaceImporter::DEFAULT_RACES_FILE);
        assert_eq!(config.races_path(), PathBuf::from("./data/races.json"));
    }

    #[test]
    fn test_reads_overrides() {
        let config = ContentConfig::from_lookup(lookup(&[
            ("KINDRED_DATA_PATH", "/srv/kindred"),
            ("KINDRED_RACES_FILE", "homebrew.json"),
        ]))
        .unwrap();
        assert_eq!(config.races_path(), PathBuf::from("/srv/kindred/homebrew.json"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            ContentConfig::from_lookup(lookup(&[("KINDRED_DATA_PATH", "  ")])).unwrap();
        assert_eq!(config.data_path, PathBuf::from("./data"));
    }

    #[test]
    fn test_rejects_races_file_outside_data_path() {
        for bad in ["../races.json", "nested/races.json", ".."] {
            let result = ContentConfig::from_lookup(lookup(&[("KINDRED_RACES_FILE", bad)]));
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }
}
