//! Racial trait record builder.
//!
//! Turns loosely-typed property bags into [`RacialTraits`] records, either as a
//! base race (all-or-nothing validation of the required traits) or as a
//! subrace layered over an existing parent (best effort, never fails).
//!
//! Keys come from [`crate::trait_keys`]; coercion of each value is delegated to
//! the matching value object's `from_value`.

mod diagnostics;
mod encode;
mod overrides;


pub use diagnostics::{NoopDiagnostics, TraitDiagnostics};
pub use overrides::RacialTraitsOverrides;

use serde_json::Value;

use crate::error::DomainError;
use crate::trait_keys as keys;
use crate::value_objects::{AbilityScoreIncrease, Alignment, DiceFormula, Height, Weight};
use crate::RacialTraits;

/// An untyped mapping from trait keys to values, as parsed from a data file.
pub type PropertyBag = serde_json::Map<String, Value>;

impl RacialTraits {
    /// Build a base race from a property bag.
    ///
    /// Required traits are checked in [`keys::REQUIRED`] order and the first one
    /// that is absent or malformed is returned as
    /// [`DomainError::MissingField`]. Optional traits fall back to their
    /// defaults when absent or malformed.
    pub fn try_from_bag(bag: &PropertyBag) -> Result<Self, DomainError> {
        let name = required(read_string(bag, keys::NAME), keys::NAME)?;
        let plural = required(read_string(bag, keys::PLURAL), keys::PLURAL)?;
        let minimum_age = required(read_integer(bag, keys::MINIMUM_AGE), keys::MINIMUM_AGE)?;
        let lifespan = required(read_integer(bag, keys::LIFESPAN), keys::LIFESPAN)?;
        let base_height = required(
            bag.get(keys::BASE_HEIGHT).and_then(Height::from_value),
            keys::BASE_HEIGHT,
        )?;
        let height_modifier = required(
            bag.get(keys::HEIGHT_MODIFIER)
                .and_then(DiceFormula::from_value),
            keys::HEIGHT_MODIFIER,
        )?;
        let base_weight = required(
            bag.get(keys::BASE_WEIGHT).and_then(Weight::from_value),
            keys::BASE_WEIGHT,
        )?;
        let speed = required(read_integer(bag, keys::SPEED), keys::SPEED)?;

        let mut record = Self::new(
            name,
            plural,
            minimum_age,
            lifespan,
            base_height,
            height_modifier,
            base_weight,
            speed,
        )
        .with_aliases(read_strings(bag, keys::ALIASES).unwrap_or_default())
        .with_ability_score_increase(
            bag.get(keys::ABILITY_SCORE_INCREASE)
                .and_then(AbilityScoreIncrease::from_value)
                .unwrap_or_default(),
        )
        .with_darkvision(read_integer(bag, keys::DARKVISION).unwrap_or(0))
        .with_hit_points_bonus(read_integer(bag, keys::HIT_POINTS_BONUS).unwrap_or(0));

        if let Some(alignment) = bag.get(keys::ALIGNMENT).and_then(Alignment::from_value) {
            record = record.with_alignment(alignment);
        }
        if let Some(modifier) = bag
            .get(keys::WEIGHT_MODIFIER)
            .and_then(DiceFormula::from_value)
        {
            record = record.with_weight_modifier(modifier);
        }

        Ok(record)
    }

    /// Build a base race, reporting a missing required trait to `diagnostics`.
    ///
    /// Returns `None` when the bag does not describe a complete race; no
    /// partial record is ever produced.
    pub fn from_bag(bag: &PropertyBag, diagnostics: &dyn TraitDiagnostics) -> Option<Self> {
        match Self::try_from_bag(bag) {
            Ok(record) => Some(record),
            Err(err) => {
                if let Some(key) = err.missing_key() {
                    diagnostics.missing_field(key);
                }
                None
            }
        }
    }

    /// Build a subrace of `self` from a property bag.
    ///
    /// Total: anything the bag does not validly supply is inherited. See
    /// [`RacialTraits::merged_with`] for the per-field merge policy.
    pub fn subrace_from_bag(&self, bag: &PropertyBag) -> Self {
        self.merged_with(RacialTraitsOverrides::from_bag(bag))
    }
}

fn required<T>(value: Option<T>, key: &'static str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::missing_field(key))
}

pub(crate) fn read_string(bag: &PropertyBag, key: &str) -> Option<String> {
    bag.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Integers only; floats, strings, and out-of-range values are rejected.
pub(crate) fn read_integer<T: TryFrom<i64>>(bag: &PropertyBag, key: &str) -> Option<T> {
    bag.get(key)
        .and_then(Value::as_i64)
        .and_then(|n| T::try_from(n).ok())
}

/// An array made up entirely of strings.
pub(crate) fn read_strings(bag: &PropertyBag, key: &str) -> Option<Vec<String>> {
    bag.get(key)?
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
