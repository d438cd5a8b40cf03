//! Alignment value object - the two-axis moral/ethical stance of a race.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    LawfulGood,
    NeutralGood,
    ChaoticGood,
    LawfulNeutral,
    TrueNeutral,
    ChaoticNeutral,
    LawfulEvil,
    NeutralEvil,
    ChaoticEvil,
    /// No moral capacity at all (beasts, constructs)
    Unaligned,
}

impl Alignment {
    /// Full display name, e.g. "Lawful Good".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LawfulGood => "Lawful Good",
            Self::NeutralGood => "Neutral Good",
            Self::ChaoticGood => "Chaotic Good",
            Self::LawfulNeutral => "Lawful Neutral",
            Self::TrueNeutral => "True Neutral",
            Self::ChaoticNeutral => "Chaotic Neutral",
            Self::LawfulEvil => "Lawful Evil",
            Self::NeutralEvil => "Neutral Evil",
            Self::ChaoticEvil => "Chaotic Evil",
            Self::Unaligned => "Unaligned",
        }
    }

    /// Two-letter abbreviation ("N" for true neutral, "U" for unaligned).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::LawfulGood => "LG",
            Self::NeutralGood => "NG",
            Self::ChaoticGood => "CG",
            Self::LawfulNeutral => "LN",
            Self::TrueNeutral => "N",
            Self::ChaoticNeutral => "CN",
            Self::LawfulEvil => "LE",
            Self::NeutralEvil => "NE",
            Self::ChaoticEvil => "CE",
            Self::Unaligned => "U",
        }
    }

    /// Coerce an untyped property value; only recognised name strings succeed.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Alignment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "lawful good" | "lg" => Ok(Self::LawfulGood),
            "neutral good" | "ng" => Ok(Self::NeutralGood),
            "chaotic good" | "cg" => Ok(Self::ChaoticGood),
            "lawful neutral" | "ln" => Ok(Self::LawfulNeutral),
            "true neutral" | "neutral" | "neutral neutral" | "n" | "tn" => Ok(Self::TrueNeutral),
            "chaotic neutral" | "cn" => Ok(Self::ChaoticNeutral),
            "lawful evil" | "le" => Ok(Self::LawfulEvil),
            "neutral evil" | "ne" => Ok(Self::NeutralEvil),
            "chaotic evil" | "ce" => Ok(Self::ChaoticEvil),
            "unaligned" | "u" => Ok(Self::Unaligned),
            _ => Err(DomainError::parse(format!("Unknown alignment: {}", s))),
        }
    }
}
