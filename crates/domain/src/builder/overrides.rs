//! The partial record a subrace layers over its parent.

use super::{read_integer, read_string, read_strings, PropertyBag};
use crate::trait_keys as keys;
use crate::value_objects::{AbilityScoreIncrease, Alignment, DiceFormula, Height, Weight};

/// Every trait a subrace bag may supply, each one optional.
///
/// Values that are present in the bag but fail coercion are dropped here, so
/// by the time a merge happens "malformed" and "absent" are the same thing.
/// See [`RacialTraits::merged_with`](crate::RacialTraits::merged_with) for how
/// each field is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RacialTraitsOverrides {
    pub name: Option<String>,
    pub plural: Option<String>,
    pub aliases: Vec<String>,
    pub ability_score_increase: Option<AbilityScoreIncrease>,
    pub minimum_age: Option<i32>,
    pub lifespan: Option<i32>,
    pub alignment: Option<Alignment>,
    pub base_height: Option<Height>,
    pub height_modifier: Option<DiceFormula>,
    pub base_weight: Option<Weight>,
    pub weight_modifier: Option<DiceFormula>,
    pub darkvision: Option<i32>,
    pub speed: Option<i32>,
    pub hit_points_bonus: Option<i32>,
}

impl RacialTraitsOverrides {
    /// Extract whatever valid overrides the bag carries. Never fails.
    pub fn from_bag(bag: &PropertyBag) -> Self {
        Self {
            name: read_string(bag, keys::NAME),
            plural: read_string(bag, keys::PLURAL),
            aliases: read_strings(bag, keys::ALIASES).unwrap_or_default(),
            ability_score_increase: bag
                .get(keys::ABILITY_SCORE_INCREASE)
                .and_then(AbilityScoreIncrease::from_value),
            minimum_age: read_integer(bag, keys::MINIMUM_AGE),
            lifespan: read_integer(bag, keys::LIFESPAN),
            alignment: bag.get(keys::ALIGNMENT).and_then(Alignment::from_value),
            base_height: bag.get(keys::BASE_HEIGHT).and_then(Height::from_value),
            // A height modifier that does not parse is ignored like any other
            // malformed override.
            height_modifier: bag
                .get(keys::HEIGHT_MODIFIER)
                .and_then(DiceFormula::from_value),
            base_weight: bag.get(keys::BASE_WEIGHT).and_then(Weight::from_value),
            weight_modifier: bag
                .get(keys::WEIGHT_MODIFIER)
                .and_then(DiceFormula::from_value),
            darkvision: read_integer(bag, keys::DARKVISION),
            speed: read_integer(bag, keys::SPEED),
            hit_points_bonus: read_integer(bag, keys::HIT_POINTS_BONUS),
        }
    }

    /// True when applying these overrides would reproduce the parent.
    pub fn is_empty(&self) -> bool {
        let adds_nothing = self.ability_score_increase.unwrap_or_default().is_zero();
        adds_nothing
            && Self {
                ability_score_increase: None,
                ..self.clone()
            } == Self::default()
    }
}
