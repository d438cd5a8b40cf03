//! Kindred content: loads race data files into [`RacialTraits`] trees.
//!
//! [`RacialTraits`]: kindred_domain::RacialTraits

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod importer;

pub use catalog::RaceCatalog;
pub use config::ContentConfig;
pub use diagnostics::TracingDiagnostics;
pub use importer::{ImportError, RaceImporter};
