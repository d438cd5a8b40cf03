//! Creature size category derived from height.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this many feet a race is small.
const MEDIUM_MIN_FEET: f64 = 4.0;
/// At or above this many feet a race is large.
const LARGE_MIN_FEET: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Size for a height given in feet: `[0, 4)` small, `[4, 7)` medium, `7+` large.
    pub fn from_height_feet(feet: f64) -> Self {
        if feet < MEDIUM_MIN_FEET {
            Self::Small
        } else if feet < LARGE_MIN_FEET {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_half_open() {
        assert_eq!(Size::from_height_feet(3.5), Size::Small);
        assert_eq!(Size::from_height_feet(3.999), Size::Small);
        assert_eq!(Size::from_height_feet(4.0), Size::Medium);
        assert_eq!(Size::from_height_feet(6.999), Size::Medium);
        assert_eq!(Size::from_height_feet(7.0), Size::Large);
        assert_eq!(Size::from_height_feet(12.0), Size::Large);
    }

    #[test]
    fn test_monotonic() {
        let sizes: Vec<Size> = (0..100)
            .map(|tenths| Size::from_height_feet(f64::from(tenths) / 10.0))
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }
}
