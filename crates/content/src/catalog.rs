//! Lazily loaded race catalog.

use kindred_domain::RacialTraits;
use tokio::sync::OnceCell;

use crate::config::ContentConfig;
use crate::importer::{ImportError, RaceImporter};

/// Race catalog backed by a [`RaceImporter`].
///
/// The races file is read once on first access and cached for the lifetime of
/// the catalog.
pub struct RaceCatalog {
    importer: RaceImporter,
    races: OnceCell<Vec<RacialTraits>>,
}

impl RaceCatalog {
    pub fn new(importer: RaceImporter) -> Self {
        Self {
            importer,
            races: OnceCell::new(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(
            RaceImporter::new(config.data_path.clone()).with_races_file(config.races_file.clone()),
        )
    }

    /// All base races, loading them on first use.
    pub async fn races(&self) -> Result<&[RacialTraits], ImportError> {
        let races = self
            .races
            .get_or_try_init(|| async { self.importer.import_races().await })
            .await?;
        Ok(races.as_slice())
    }

    /// Find a race or subrace by name, plural, or alias (case-insensitive).
    ///
    /// Base races are checked before their subraces.
    pub async fn find(&self, name: &str) -> Result<Option<&RacialTraits>, ImportError> {
        let races = self.races().await?;
        Ok(find_in(races, name))
    }
}

fn find_in<'a>(races: &'a [RacialTraits], name: &str) -> Option<&'a RacialTraits> {
    races
        .iter()
        .find(|race| race.matches_name(name))
        .or_else(|| races.iter().find_map(|race| find_in(race.subraces(), name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../../data/races.json");

    fn catalog_with(content: &str) -> (tempfile::TempDir, RaceCatalog) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("races.json"), content).unwrap();
        let catalog = RaceCatalog::new(RaceImporter::new(dir.path()));
        (dir, catalog)
    }

    #[tokio::test]
    async fn finds_base_races_and_subraces() {
        let (_dir, catalog) = catalog_with(SAMPLE);

        let dwarf = catalog.find("dwarves").await.unwrap().unwrap();
        assert_eq!(dwarf.name(), "Dwarf");

        let hill = catalog.find("Hill Dwarf").await.unwrap().unwrap();
        assert_eq!(hill.name(), "Hill Dwarf");
        assert_eq!(hill.hit_points_bonus(), 1);

        assert!(catalog.find("Tarrasque").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn base_race_wins_over_inherited_alias() {
        let (_dir, catalog) = catalog_with(SAMPLE);
        // Subraces inherit the "Elf" alias, but the base race comes first.
        let elf = catalog.find("elf").await.unwrap().unwrap();
        assert_eq!(elf.name(), "Elf");
    }

    #[tokio::test]
    async fn loads_once() {
        let (dir, catalog) = catalog_with(SAMPLE);
        let count = catalog.races().await.unwrap().len();

        std::fs::remove_file(dir.path().join("races.json")).unwrap();
        assert_eq!(catalog.races().await.unwrap().len(), count);
    }

    #[tokio::test]
    async fn failed_load_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = RaceCatalog::new(RaceImporter::new(dir.path()));
        assert!(matches!(
            catalog.races().await,
            Err(ImportError::DataFileNotFound(_))
        ));

        std::fs::write(dir.path().join("races.json"), SAMPLE).unwrap();
        assert!(!catalog.races().await.unwrap().is_empty());
    }
}
