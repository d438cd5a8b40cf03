//! Kindred domain: racial trait records for tabletop characters.
//!
//! A [`RacialTraits`] record is built once, either as a base race from a
//! property bag ([`RacialTraits::from_bag`]) or as a subrace layered over a
//! parent ([`RacialTraits::subrace_from_bag`]), and is an immutable snapshot
//! afterwards.

pub mod aggregates;
pub mod builder;
pub mod error;
pub mod trait_keys;
pub mod value_objects;

pub use aggregates::{Physique, RacialTraits};
pub use builder::{NoopDiagnostics, PropertyBag, RacialTraitsOverrides, TraitDiagnostics};
pub use error::DomainError;
pub use value_objects::{
    Ability, AbilityScoreIncrease, Alignment, DiceFormula, DiceParseError, DiceRoll, Height,
    LengthUnit, MassUnit, Size, Weight,
};
