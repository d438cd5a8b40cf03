//! Ability value objects - the six ability scores and racial increases to them.
//!
//! Provides type safety for ability references instead of using magic strings like "STR", "DEX".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::DomainError;

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    /// Strength - physical power
    Str,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Charisma - force of personality
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// Returns the short uppercase string representation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength", "Dexterity").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "CON" | "CONSTITUTION" => Ok(Self::Con),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "WIS" | "WISDOM" => Ok(Self::Wis),
            "CHA" | "CHARISMA" => Ok(Self::Cha),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// Per-ability bonuses granted by a race.
///
/// A fixed six-slot vector; the default is all zeros. Subraces add their
/// increases on top of the parent's with `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityScoreIncrease([i32; 6]);

impl AbilityScoreIncrease {
    /// Each name in the list contributes this much to its ability.
    pub const PER_NAME_INCREMENT: i32 = 1;

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builder-style setter for a single ability.
    pub fn with(mut self, ability: Ability, amount: i32) -> Self {
        self.0[ability.index()] = amount;
        self
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.0[ability.index()]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0)
    }

    /// Non-zero entries in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL
            .into_iter()
            .map(|ability| (ability, self.get(ability)))
            .filter(|(_, amount)| *amount != 0)
    }

    /// Build from a list of ability names, e.g. `["DEX", "DEX", "CHA"]`.
    ///
    /// Returns `None` if any entry is not a known ability name.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut increase = Self::zero();
        for name in names {
            let ability = name.parse::<Ability>().ok()?;
            increase.accumulate(ability, Self::PER_NAME_INCREMENT)?;
        }
        Some(increase)
    }

    /// Checked in-place add; `None` when the slot would overflow.
    fn accumulate(&mut self, ability: Ability, amount: i32) -> Option<()> {
        let slot = &mut self.0[ability.index()];
        *slot = slot.checked_add(amount)?;
        Some(())
    }

    /// Coerce an untyped property value.
    ///
    /// Accepts an array of ability names (each occurrence adds
    /// [`Self::PER_NAME_INCREMENT`]) or an object of explicit amounts such as
    /// `{"DEX": 2}`. Anything malformed, including amounts that overflow
    /// when combined, yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let names = items
                    .iter()
                    .map(Value::as_str)
                    .collect::<Option<Vec<&str>>>()?;
                Self::from_names(names)
            }
            Value::Object(amounts) => {
                let mut increase = Self::zero();
                for (name, amount) in amounts {
                    let ability = name.parse::<Ability>().ok()?;
                    let amount = i32::try_from(amount.as_i64()?).ok()?;
                    increase.accumulate(ability, amount)?;
                }
                Some(increase)
            }
            _ => None,
        }
    }

    /// Encode as an object of explicit amounts, omitting zero entries.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(ability, amount)| (ability.as_str().to_string(), Value::from(amount)))
                .collect(),
        )
    }
}

impl Add for AbilityScoreIncrease {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

/// Element-wise addition, saturating at the `i32` bounds.
impl AddAssign for AbilityScoreIncrease {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = lhs.saturating_add(rhs);
        }
    }
}

impl fmt::Display for AbilityScoreIncrease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "none");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(ability, amount)| format!("{} {:+}", ability, amount))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
