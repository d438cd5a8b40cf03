//! Race data importer.
//!
//! Reads a JSON races file and turns each entry into a [`RacialTraits`] tree:
//!
//! ```json
//! {
//!   "races": [
//!     {
//!       "name": "Elf", "plural": "Elves", "minimum_age": 100, "lifespan": 750,
//!       "base_height": "4'6\"", "height_modifier": "2d10", "base_weight": 90,
//!       "speed": 30, "ability_scores": ["DEX", "DEX"],
//!       "traits": { "Trance": "Elves meditate instead of sleeping." },
//!       "subraces": [ { "name": "High Elf", "ability_scores": ["INT"] } ]
//!     }
//!   ]
//! }
//! ```
//!
//! Invalid base races are skipped and loading continues. Subraces are never
//! rejected; malformed overrides fall back to the parent's values.

use std::path::PathBuf;

use kindred_domain::trait_keys as keys;
use kindred_domain::{PropertyBag, RacialTraits, RacialTraitsOverrides};
use serde_json::Value;
use thiserror::Error;
use tokio::fs;

use crate::diagnostics::TracingDiagnostics;

/// Errors that can occur during import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),
    #[error("Invalid races file layout: {0}")]
    InvalidLayout(String),
}

/// Importer for race data files.
#[derive(Debug, Clone)]
pub struct RaceImporter {
    data_path: PathBuf,
    races_file: String,
}

impl RaceImporter {
    /// Default name of the races file inside the data directory.
    pub const DEFAULT_RACES_FILE: &'static str = "races.json";

    /// Create a new importer pointing to a data directory.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            races_file: Self::DEFAULT_RACES_FILE.to_string(),
        }
    }

    /// Read races from a different file name inside the data directory.
    pub fn with_races_file(mut self, races_file: impl Into<String>) -> Self {
        self.races_file = races_file.into();
        self
    }

    pub fn races_path(&self) -> PathBuf {
        self.data_path.join(&self.races_file)
    }

    /// Import all races (with their subraces) from the races file.
    pub async fn import_races(&self) -> Result<Vec<RacialTraits>, ImportError> {
        let races_path = self.races_path();

        if !races_path.exists() {
            return Err(ImportError::DataFileNotFound(races_path));
        }

        let content = fs::read_to_string(&races_path).await?;
        let races = Self::parse_races(&content)?;

        tracing::info!(
            path = %races_path.display(),
            count = races.len(),
            "Loaded races"
        );
        Ok(races)
    }

    /// Parse the contents of a races file.
    pub fn parse_races(content: &str) -> Result<Vec<RacialTraits>, ImportError> {
        let root: Value = serde_json::from_str(content)?;
        let entries = root
            .get("races")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ImportError::InvalidLayout("expected a top-level \"races\" array".to_string())
            })?;

        let races = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| Self::convert_race(index, entry))
            .collect();

        Ok(races)
    }

    fn convert_race(index: usize, entry: &Value) -> Option<RacialTraits> {
        let Some(bag) = entry.as_object() else {
            tracing::warn!(index, "Race entry is not an object; skipping");
            return None;
        };

        let label = entry_label(bag, index);
        let diagnostics = TracingDiagnostics::new(label.as_str());

        let Some(race) = RacialTraits::from_bag(bag, &diagnostics) else {
            tracing::warn!(entry = %label, "Skipping invalid race definition");
            return None;
        };

        Some(Self::attach_children(race, bag))
    }

    /// Add the entry's descriptive traits and build its subraces from it.
    fn attach_children(record: RacialTraits, bag: &PropertyBag) -> RacialTraits {
        let record = match bag.get(keys::DESCRIPTIVE_TRAITS) {
            Some(Value::Object(own)) => {
                let mut traits = record.descriptive_traits().clone();
                traits.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
                record.with_descriptive_traits(traits)
            }
            Some(_) => {
                tracing::warn!(
                    race = record.name(),
                    "Descriptive traits must be an object; ignoring"
                );
                record
            }
            None => record,
        };

        let subrace_entries = match bag.get(keys::SUBRACES) {
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(_) => {
                tracing::warn!(race = record.name(), "Subraces must be an array; ignoring");
                &[]
            }
            None => &[],
        };

        let subraces: Vec<RacialTraits> = subrace_entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| Self::convert_subrace(&record, index, entry))
            .collect();

        tracing::debug!(
            race = record.name(),
            size = %record.size(),
            speed = record.speed(),
            subraces = subraces.len(),
            "Built race"
        );

        record.with_subraces(subraces)
    }

    fn convert_subrace(parent: &RacialTraits, index: usize, entry: &Value) -> Option<RacialTraits> {
        let Some(bag) = entry.as_object() else {
            tracing::warn!(
                parent = parent.name(),
                index,
                "Subrace entry is not an object; skipping"
            );
            return None;
        };

        let overrides = RacialTraitsOverrides::from_bag(bag);
        if overrides.is_empty() {
            tracing::warn!(
                parent = parent.name(),
                entry = %entry_label(bag, index),
                "Subrace entry overrides nothing; it will duplicate its parent"
            );
        }

        Some(Self::attach_children(parent.merged_with(overrides), bag))
    }
}

fn entry_label(bag: &PropertyBag, index: usize) -> String {
    bag.get(keys::NAME)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_domain::{Ability, Alignment, Size};

    const SAMPLE: &str = include_str!("../../../data/races.json");

    #[test]
    fn parses_sample_data() {
        let races = RaceImporter::parse_races(SAMPLE).unwrap();
        let names: Vec<&str> = races.iter().map(|r| r.name()).collect();
        assert!(names.contains(&"Elf"));
        assert!(names.contains(&"Dwarf"));

        let elf = races.iter().find(|r| r.name() == "Elf").unwrap();
        let drow = elf.subrace("Drow").unwrap();
        assert_eq!(drow.ability_score_increase().get(Ability::Dex), 2);
        assert_eq!(drow.ability_score_increase().get(Ability::Cha), 1);
        assert!(drow.aliases().iter().any(|a| a == "Dark Elf"));
        assert!(drow.descriptive_traits().contains_key("Trance"));
    }

    #[test]
    fn skips_invalid_base_races_and_keeps_the_rest() {
        let content = r#"{
            "races": [
                { "name": "Nameless Horror" },
                "not even an object",
                {
                    "name": "Halfling", "plural": "Halflings",
                    "minimum_age": 20, "lifespan": 150,
                    "base_height": "2'7\"", "height_modifier": "2d4",
                    "base_weight": 35, "speed": 25
                }
            ]
        }"#;
        let races = RaceImporter::parse_races(content).unwrap();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0].name(), "Halfling");
        assert_eq!(races[0].size(), Size::Small);
    }

    #[test]
    fn builds_nested_subraces_from_their_parent() {
        let content = r#"{
            "races": [{
                "name": "Elf", "plural": "Elves",
                "minimum_age": 100, "lifespan": 750,
                "base_height": "4'6\"", "height_modifier": "2d10",
                "base_weight": 90, "speed": 30,
                "aliases": ["Elf"], "ability_scores": ["DEX", "DEX"],
                "traits": { "Trance": "Meditates" },
                "subraces": [{
                    "name": "Drow", "aliases": ["Drow"], "ability_scores": ["CHA"],
                    "alignment": "neutral evil", "speed": "fast",
                    "traits": { "Sunlight Sensitivity": "Disadvantage in sunlight" },
                    "subraces": [{ "name": "Seldarine Drow", "alignment": "chaotic good" }]
                }]
            }]
        }"#;
        let races = RaceImporter::parse_races(content).unwrap();
        let elf = &races[0];
        let drow = elf.subrace("Drow").unwrap();

        assert_eq!(drow.aliases(), ["Elf".to_string(), "Drow".to_string()]);
        assert_eq!(drow.speed(), 30);
        assert_eq!(drow.alignment(), Some(Alignment::NeutralEvil));
        assert!(drow.descriptive_traits().contains_key("Trance"));
        assert!(drow.descriptive_traits().contains_key("Sunlight Sensitivity"));
        assert!(!elf.descriptive_traits().contains_key("Sunlight Sensitivity"));

        let seldarine = drow.subrace("Seldarine Drow").unwrap();
        assert_eq!(seldarine.alignment(), Some(Alignment::ChaoticGood));
        assert_eq!(seldarine.ability_score_increase().get(Ability::Cha), 1);
        assert!(elf.subrace("Seldarine Drow").is_none());
    }

    #[test]
    fn rejects_files_without_races_array() {
        let err = RaceImporter::parse_races(r#"{"race": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidLayout(_)));

        let err = RaceImporter::parse_races("not json").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[tokio::test]
    async fn imports_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("homebrew.json"), SAMPLE).unwrap();

        let importer = RaceImporter::new(dir.path()).with_races_file("homebrew.json");
        let races = importer.import_races().await.unwrap();
        assert!(!races.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let importer = RaceImporter::new(dir.path());
        let err = importer.import_races().await.unwrap_err();
        assert!(matches!(err, ImportError::DataFileNotFound(path) if path.ends_with("races.json")));
    }
}
