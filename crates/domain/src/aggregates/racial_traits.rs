//! RacialTraits aggregate - a race or subrace and everything it grants
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: a record is an immutable snapshot once built
//! - **Valid by construction**: `new()` takes every required trait; optional
//!   traits are layered on with `with_*` builders that consume and return `Self`
//! - **Derived, not stored**: `size()` is computed from `base_height` on every read
//!
//! Records are normally produced from property bags, see
//! [`RacialTraits::from_bag`] and [`RacialTraits::subrace_from_bag`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::builder::{PropertyBag, RacialTraitsOverrides};
use crate::value_objects::{AbilityScoreIncrease, Alignment, DiceFormula, Height, Size, Weight};

/// A race (e.g. "Elf") or subrace (e.g. "High Elf").
///
/// # Invariants
///
/// - name, plural, minimum age, lifespan, base height, height modifier, base
///   weight and speed are always present
/// - a subrace is derived from exactly one parent snapshot and never mutates it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacialTraits {
    name: String,
    plural: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    descriptive_traits: PropertyBag,
    #[serde(default)]
    ability_score_increase: AbilityScoreIncrease,
    minimum_age: i32,
    lifespan: i32,
    #[serde(default)]
    alignment: Option<Alignment>,
    base_height: Height,
    height_modifier: DiceFormula,
    base_weight: Weight,
    #[serde(default)]
    weight_modifier: Option<DiceFormula>,
    #[serde(default)]
    darkvision: i32,
    speed: i32,
    #[serde(default)]
    hit_points_bonus: i32,
    #[serde(default)]
    subraces: Vec<RacialTraits>,
}

/// A randomly generated height and weight for one member of a race.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Physique {
    pub height: Height,
    pub weight: Weight,
    /// Inches added to the base height
    pub height_roll: i32,
    /// Multiplier applied to the height roll to get extra pounds
    pub weight_roll: i32,
}

impl RacialTraits {
    /// Create a record from its required traits; optional traits take their defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        plural: impl Into<String>,
        minimum_age: i32,
        lifespan: i32,
        base_height: Height,
        height_modifier: DiceFormula,
        base_weight: Weight,
        speed: i32,
    ) -> Self {
        Self {
            name: name.into(),
            plural: plural.into(),
            aliases: Vec::new(),
            descriptive_traits: PropertyBag::new(),
            ability_score_increase: AbilityScoreIncrease::zero(),
            minimum_age,
            lifespan,
            alignment: None,
            base_height,
            height_modifier,
            base_weight,
            weight_modifier: None,
            darkvision: 0,
            speed,
            hit_points_bonus: 0,
            subraces: Vec::new(),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Case-insensitive match against the name, plural, or any alias.
    pub fn matches_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        std::iter::once(&self.name)
            .chain(std::iter::once(&self.plural))
            .chain(self.aliases.iter())
            .any(|candidate| candidate.to_lowercase() == wanted)
    }

    // =========================================================================
    // Traits
    // =========================================================================

    pub fn descriptive_traits(&self) -> &PropertyBag {
        &self.descriptive_traits
    }

    pub fn ability_score_increase(&self) -> AbilityScoreIncrease {
        self.ability_score_increase
    }

    pub fn minimum_age(&self) -> i32 {
        self.minimum_age
    }

    pub fn lifespan(&self) -> i32 {
        self.lifespan
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn base_height(&self) -> Height {
        self.base_height
    }

    pub fn height_modifier(&self) -> &DiceFormula {
        &self.height_modifier
    }

    pub fn base_weight(&self) -> Weight {
        self.base_weight
    }

    pub fn weight_modifier(&self) -> Option<&DiceFormula> {
        self.weight_modifier.as_ref()
    }

    pub fn darkvision(&self) -> i32 {
        self.darkvision
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn hit_points_bonus(&self) -> i32 {
        self.hit_points_bonus
    }

    /// Size category, always derived from the current base height.
    pub fn size(&self) -> Size {
        Size::from_height_feet(self.base_height.to_feet())
    }

    // =========================================================================
    // Subraces
    // =========================================================================

    pub fn subraces(&self) -> &[RacialTraits] {
        &self.subraces
    }

    /// Direct child whose name, plural, or alias matches.
    pub fn subrace(&self, name: &str) -> Option<&RacialTraits> {
        self.subraces.iter().find(|sub| sub.matches_name(name))
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_descriptive_traits(mut self, traits: PropertyBag) -> Self {
        self.descriptive_traits = traits;
        self
    }

    pub fn with_ability_score_increase(mut self, increase: AbilityScoreIncrease) -> Self {
        self.ability_score_increase = increase;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_weight_modifier(mut self, modifier: DiceFormula) -> Self {
        self.weight_modifier = Some(modifier);
        self
    }

    pub fn with_darkvision(mut self, darkvision: i32) -> Self {
        self.darkvision = darkvision;
        self
    }

    pub fn with_hit_points_bonus(mut self, bonus: i32) -> Self {
        self.hit_points_bonus = bonus;
        self
    }

    pub fn with_subraces(mut self, subraces: Vec<RacialTraits>) -> Self {
        self.subraces = subraces;
        self
    }

    // =========================================================================
    // Physique
    // =========================================================================

    /// Roll a height and weight for one member of this race.
    ///
    /// Height is the base height plus the height-modifier roll in inches.
    /// Weight is the base weight plus that same roll times the weight-modifier
    /// roll in pounds; with no weight modifier the multiplier is 1.
    pub fn sample_physique<R: Rng>(&self, rng: &mut R) -> Physique {
        let height_roll = self.height_modifier.roll(rng).total;
        let weight_roll = self
            .weight_modifier
            .as_ref()
            .map_or(1, |modifier| modifier.roll(rng).total);

        Physique {
            height: self.base_height.plus_inches(f64::from(height_roll)),
            weight: self
                .base_weight
                .plus_pounds(f64::from(height_roll) * f64::from(weight_roll)),
            height_roll,
            weight_roll,
        }
    }

    // =========================================================================
    // Inheritance
    // =========================================================================

    /// Derive a specialised record: a copy of `self` with `overrides` applied.
    ///
    /// Merge policy per field:
    /// - **replace**: name, plural, minimum age, lifespan, base height, height
    ///   modifier, base weight, weight modifier, speed, alignment, darkvision,
    ///   hit points bonus
    /// - **append**: aliases (parent's first, no dedup)
    /// - **vector add**: ability score increase
    /// - **inherit**: descriptive traits, subraces
    ///
    /// `self` is never modified.
    pub fn merged_with(&self, overrides: RacialTraitsOverrides) -> Self {
        let mut merged = self.clone();

        replace(&mut merged.name, overrides.name);
        replace(&mut merged.plural, overrides.plural);
        replace(&mut merged.minimum_age, overrides.minimum_age);
        replace(&mut merged.lifespan, overrides.lifespan);
        replace(&mut merged.base_height, overrides.base_height);
        replace(&mut merged.height_modifier, overrides.height_modifier);
        replace(&mut merged.base_weight, overrides.base_weight);
        replace(&mut merged.speed, overrides.speed);
        replace(&mut merged.darkvision, overrides.darkvision);
        replace(&mut merged.hit_points_bonus, overrides.hit_points_bonus);
        if overrides.weight_modifier.is_some() {
            merged.weight_modifier = overrides.weight_modifier;
        }
        if overrides.alignment.is_some() {
            merged.alignment = overrides.alignment;
        }

        merged.aliases.extend(overrides.aliases);

        if let Some(increase) = overrides.ability_score_increase {
            merged.ability_score_increase += increase;
        }

        merged
    }
}

fn replace<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
