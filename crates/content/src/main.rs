//! Kindred - prints the race catalog found in a data directory.
//!
//! Usage: `kindred [DATA_PATH]`. Without an argument the data path comes from
//! `KINDRED_DATA_PATH` (default `./data`).

use std::path::PathBuf;

use anyhow::Context;
use kindred_content::{ContentConfig, RaceCatalog};
use kindred_domain::RacialTraits;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kindred=info,kindred_content=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ContentConfig::from_env().context("Invalid content configuration")?;
    if let Some(data_path) = std::env::args().nth(1) {
        config.data_path = PathBuf::from(data_path);
    }

    tracing::info!(path = %config.races_path().display(), "Loading races");

    let catalog = RaceCatalog::from_config(&config);
    let races = catalog
        .races()
        .await
        .with_context(|| format!("Failed to load {}", config.races_path().display()))?;

    let mut rng = rand::thread_rng();
    for race in races {
        print_race(race, 0, &mut rng);
    }

    Ok(())
}

fn print_race(race: &RacialTraits, depth: usize, rng: &mut impl rand::Rng) {
    let indent = "  ".repeat(depth);
    let physique = race.sample_physique(rng);

    println!(
        "{indent}{} ({}, speed {} ft, {})",
        race.name(),
        race.size(),
        race.speed(),
        race.ability_score_increase()
    );
    println!(
        "{indent}  e.g. {:.0} in / {:.0} lb",
        physique.height.to_inches(),
        physique.weight.to_pounds()
    );

    for subrace in race.subraces() {
        print_race(subrace, depth + 1, rng);
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
