//! Value objects - Immutable objects defined by their attributes

mod ability;
mod alignment;
mod dice;
mod measure;
mod size;

pub use ability::{Ability, AbilityScoreIncrease};
pub use alignment::Alignment;
pub use dice::{DiceFormula, DiceParseError, DiceRoll};
pub use measure::{Height, LengthUnit, MassUnit, Weight};
pub use size::Size;
