//! Encoding records back into property bags with the same registry keys.

use serde_json::Value;

use super::PropertyBag;
use crate::trait_keys as keys;
use crate::RacialTraits;

impl RacialTraits {
    /// Write this record as a property bag that [`RacialTraits::from_bag`]
    /// reads back to an equal record.
    ///
    /// Descriptive traits and subraces are not part of the bag the builder
    /// reads and are left out. Absent optional traits are omitted.
    pub fn to_bag(&self) -> PropertyBag {
        let mut bag = PropertyBag::new();

        bag.insert(keys::NAME.into(), self.name().into());
        bag.insert(keys::PLURAL.into(), self.plural().into());
        bag.insert(keys::MINIMUM_AGE.into(), self.minimum_age().into());
        bag.insert(keys::LIFESPAN.into(), self.lifespan().into());
        bag.insert(
            keys::BASE_HEIGHT.into(),
            self.base_height().to_string().into(),
        );
        bag.insert(
            keys::HEIGHT_MODIFIER.into(),
            self.height_modifier().to_string().into(),
        );
        bag.insert(
            keys::BASE_WEIGHT.into(),
            self.base_weight().to_string().into(),
        );
        bag.insert(keys::SPEED.into(), self.speed().into());

        if !self.aliases().is_empty() {
            bag.insert(keys::ALIASES.into(), self.aliases().into());
        }
        if !self.ability_score_increase().is_zero() {
            bag.insert(
                keys::ABILITY_SCORE_INCREASE.into(),
                self.ability_score_increase().to_value(),
            );
        }
        if let Some(alignment) = self.alignment() {
            bag.insert(keys::ALIGNMENT.into(), alignment.display_name().into());
        }
        if let Some(modifier) = self.weight_modifier() {
            bag.insert(keys::WEIGHT_MODIFIER.into(), modifier.to_string().into());
        }
        if self.darkvision() != 0 {
            bag.insert(keys::DARKVISION.into(), self.darkvision().into());
        }
        if self.hit_points_bonus() != 0 {
            bag.insert(
                keys::HIT_POINTS_BONUS.into(),
                Value::from(self.hit_points_bonus()),
            );
        }

        bag
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::NoopDiagnostics;
    use crate::value_objects::{
        Ability, AbilityScoreIncrease, Alignment, DiceFormula, Height, Weight,
    };
    use crate::RacialTraits;
    use serde_json::json;

    fn dwarf() -> RacialTraits {
        RacialTraits::new(
            "Dwarf",
            "Dwarves",
            50,
            350,
            Height::inches(44.0),
            DiceFormula::parse("2d4").unwrap(),
            Weight::pounds(115.0),
            25,
        )
        .with_aliases(["Dwarf-kin"])
        .with_ability_score_increase(AbilityScoreIncrease::zero().with(Ability::Con, 2))
        .with_alignment(Alignment::LawfulGood)
        .with_weight_modifier(DiceFormula::parse("2d6").unwrap())
        .with_darkvision(60)
        .with_hit_points_bonus(1)
    }

    #[test]
    fn test_bag_uses_registry_keys() {
        let bag = dwarf().to_bag();
        assert_eq!(bag["name"], json!("Dwarf"));
        assert_eq!(bag["base_height"], json!("44in"));
        assert_eq!(bag["height_modifier"], json!("2d4"));
        assert_eq!(bag["ability_scores"], json!({"CON": 2}));
        assert_eq!(bag["alignment"], json!("Lawful Good"));
        assert_eq!(bag["hit_points_bonus"], json!(1));
    }

    #[test]
    fn test_defaults_are_omitted() {
        let record = RacialTraits::new(
            "Human",
            "Humans",
            18,
            90,
            Height::feet(5.0),
            DiceFormula::parse("2d10").unwrap(),
            Weight::kilograms(60.0),
            30,
        );
        let bag = record.to_bag();
        for key in [
            "aliases",
            "ability_scores",
            "alignment",
            "weight_modifier",
            "darkvision",
            "hit_points_bonus",
        ] {
            assert!(!bag.contains_key(key), "{key} should be omitted");
        }
        assert_eq!(RacialTraits::from_bag(&bag, &NoopDiagnostics), Some(record));
    }

    #[test]
    fn test_builder_reads_encoded_bag_back() {
        let record = dwarf();
        let rebuilt = RacialTraits::from_bag(&record.to_bag(), &NoopDiagnostics).unwrap();
        assert_eq!(rebuilt, record);
    }
}
