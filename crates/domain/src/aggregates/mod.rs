//! Aggregates - records with encapsulated state and invariants

mod racial_traits;

pub use racial_traits::{Physique, RacialTraits};
