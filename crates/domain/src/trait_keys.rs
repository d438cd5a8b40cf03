//! Canonical property-bag keys for racial trait records.
//!
//! Both the builder (decoding) and [`RacialTraits::to_bag`](crate::RacialTraits::to_bag)
//! (encoding) read these, so a key can only be misspelled in one place.

pub const NAME: &str = "name";
pub const PLURAL: &str = "plural";
pub const MINIMUM_AGE: &str = "minimum_age";
pub const LIFESPAN: &str = "lifespan";
pub const BASE_HEIGHT: &str = "base_height";
pub const HEIGHT_MODIFIER: &str = "height_modifier";
pub const BASE_WEIGHT: &str = "base_weight";
pub const WEIGHT_MODIFIER: &str = "weight_modifier";
pub const SPEED: &str = "speed";
pub const DARKVISION: &str = "darkvision";
pub const ALIASES: &str = "aliases";
pub const ABILITY_SCORE_INCREASE: &str = "ability_scores";
pub const ALIGNMENT: &str = "alignment";
pub const HIT_POINTS_BONUS: &str = "hit_points_bonus";

// Read by content loaders only; the builder ignores them.
pub const SUBRACES: &str = "subraces";
pub const DESCRIPTIVE_TRAITS: &str = "traits";

/// Keys a base race must supply, in validation order.
pub const REQUIRED: [&str; 8] = [
    NAME,
    PLURAL,
    MINIMUM_AGE,
    LIFESPAN,
    BASE_HEIGHT,
    HEIGHT_MODIFIER,
    BASE_WEIGHT,
    SPEED,
];
