//! Height and weight value objects with units.
//!
//! Race data writes these loosely: `62`, `"62in"`, `"5'2\""`, `"5 ft 2 in"`,
//! `"160cm"`, `"110 lb"`. Bare numbers are inches for heights and pounds for
//! weights.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const INCHES_PER_FOOT: f64 = 12.0;
const CENTIMETERS_PER_FOOT: f64 = 30.48;
const METERS_PER_FOOT: f64 = 0.3048;
const POUNDS_PER_KILOGRAM: f64 = 2.204_622_62;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Inches,
    Feet,
    Centimeters,
    Meters,
}

impl LengthUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Centimeters => "cm",
            Self::Meters => "m",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_lowercase().as_str() {
            "\"" | "in" | "inch" | "inches" => Some(Self::Inches),
            "'" | "ft" | "foot" | "feet" => Some(Self::Feet),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(Self::Centimeters)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Some(Self::Meters),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    Pounds,
    Kilograms,
}

impl MassUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Pounds => "lb",
            Self::Kilograms => "kg",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Some(Self::Pounds),
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(Self::Kilograms),
            _ => None,
        }
    }
}

/// A height with its unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    value: f64,
    unit: LengthUnit,
}

impl Height {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inches)
    }

    pub fn feet(value: f64) -> Self {
        Self::new(value, LengthUnit::Feet)
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimeters)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn to_feet(&self) -> f64 {
        match self.unit {
            LengthUnit::Inches => self.value / INCHES_PER_FOOT,
            LengthUnit::Feet => self.value,
            LengthUnit::Centimeters => self.value / CENTIMETERS_PER_FOOT,
            LengthUnit::Meters => self.value / METERS_PER_FOOT,
        }
    }

    pub fn to_inches(&self) -> f64 {
        match self.unit {
            LengthUnit::Inches => self.value,
            _ => self.to_feet() * INCHES_PER_FOOT,
        }
    }

    /// A new height, in inches, `inches` taller than this one.
    pub fn plus_inches(&self, inches: f64) -> Self {
        Self::inches(self.to_inches() + inches)
    }

    /// Coerce an untyped property value.
    ///
    /// Accepts a non-negative number (inches) or a string: a bare number, a
    /// number with a unit suffix, or the feet-and-inches form (`5'2"`,
    /// `5 ft 2 in`).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => non_negative(n.as_f64()?).map(Self::inches),
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    fn parse(input: &str) -> Option<Self> {
        match split_quantities(input)?.as_slice() {
            [(value, unit)] if unit.is_empty() => Some(Self::inches(*value)),
            [(value, unit)] => LengthUnit::from_suffix(unit).map(|u| Self::new(*value, u)),
            [(feet, feet_unit), (inches, inches_unit)] => {
                let feet_ok = LengthUnit::from_suffix(feet_unit) == Some(LengthUnit::Feet);
                let inches_ok = inches_unit.is_empty()
                    || LengthUnit::from_suffix(inches_unit) == Some(LengthUnit::Inches);
                (feet_ok && inches_ok).then(|| Self::inches(feet * INCHES_PER_FOOT + inches))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// A weight with its unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    value: f64,
    unit: MassUnit,
}

impl Weight {
    pub fn new(value: f64, unit: MassUnit) -> Self {
        Self { value, unit }
    }

    pub fn pounds(value: f64) -> Self {
        Self::new(value, MassUnit::Pounds)
    }

    pub fn kilograms(value: f64) -> Self {
        Self::new(value, MassUnit::Kilograms)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> MassUnit {
        self.unit
    }

    pub fn to_pounds(&self) -> f64 {
        match self.unit {
            MassUnit::Pounds => self.value,
            MassUnit::Kilograms => self.value * POUNDS_PER_KILOGRAM,
        }
    }

    /// A new weight, in pounds, `pounds` heavier than this one.
    pub fn plus_pounds(&self, pounds: f64) -> Self {
        Self::pounds(self.to_pounds() + pounds)
    }

    /// Coerce an untyped property value: a non-negative number (pounds) or a
    /// string with an optional unit suffix.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => non_negative(n.as_f64()?).map(Self::pounds),
            Value::String(s) => match split_quantities(s)?.as_slice() {
                [(value, unit)] if unit.is_empty() => Some(Self::pounds(*value)),
                [(value, unit)] => MassUnit::from_suffix(unit).map(|u| Self::new(*value, u)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

fn non_negative(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Split `"5 ft 2 in"` / `"5'2\""` / `"160cm"` into `(number, unit)` pairs.
///
/// Units are runs of letters or a single quote mark; the unit of the last
/// pair may be empty. Returns `None` on anything else.
fn split_quantities(input: &str) -> Option<Vec<(f64, String)>> {
    let mut chars = input.trim().chars().peekable();
    let mut pairs = Vec::new();

    while chars.peek().is_some() {
        let mut number = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            number.push(c);
        }
        let value = non_negative(number.parse::<f64>().ok()?)?;

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut unit = String::new();
        if let Some(quote) = chars.next_if(|c| *c == '\'' || *c == '"') {
            unit.push(quote);
        } else {
            while let Some(c) = chars.next_if(|c| c.is_alphabetic()) {
                unit.push(c);
            }
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let is_last = chars.peek().is_none();
        if unit.is_empty() && !is_last {
            return None;
        }
        pairs.push((value, unit));
    }

    (!pairs.is_empty()).then_some(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_height_bare_number_is_inches() {
        let height = Height::from_value(&json!(62)).unwrap();
        assert_eq!(height, Height::inches(62.0));
        let height = Height::from_value(&json!("54")).unwrap();
        assert_eq!(height.unit(), LengthUnit::Inches);
    }

    #[test]
    fn test_height_with_suffix() {
        assert_eq!(Height::from_value(&json!("4ft")), Some(Height::feet(4.0)));
        assert_eq!(Height::from_value(&json!("4.5 feet")), Some(Height::feet(4.5)));
        assert_eq!(
            Height::from_value(&json!("160cm")),
            Some(Height::centimeters(160.0))
        );
        assert_eq!(Height::from_value(&json!("58\"")), Some(Height::inches(58.0)));
    }

    #[test]
    fn test_height_feet_and_inches() {
        assert_eq!(Height::from_value(&json!("5'2\"")), Some(Height::inches(62.0)));
        assert_eq!(Height::from_value(&json!("5 ft 2 in")), Some(Height::inches(62.0)));
        assert_eq!(Height::from_value(&json!("4' 8")), Some(Height::inches(56.0)));
    }

    #[test]
    fn test_height_rejects_malformed() {
        assert!(Height::from_value(&json!("tall")).is_none());
        assert!(Height::from_value(&json!("5 parsecs")).is_none());
        assert!(Height::from_value(&json!("2 in 5 ft")).is_none());
        assert!(Height::from_value(&json!("")).is_none());
        assert!(Height::from_value(&json!(-4)).is_none());
        assert!(Height::from_value(&json!(["5ft"])).is_none());
        assert!(Height::from_value(&json!(true)).is_none());
    }

    #[test]
    fn test_height_conversions() {
        assert_eq!(Height::inches(42.0).to_feet(), 3.5);
        assert_eq!(Height::feet(5.0).to_inches(), 60.0);
        assert!((Height::new(2.0, LengthUnit::Meters).to_feet() - 6.5617).abs() < 1e-3);
        assert_eq!(Height::feet(4.0).plus_inches(6.0), Height::inches(54.0));
    }

    #[test]
    fn test_height_display_parses_back() {
        for height in [Height::inches(56.0), Height::feet(4.5), Height::centimeters(150.0)] {
            assert_eq!(Height::from_value(&json!(height.to_string())), Some(height));
        }
    }

    #[test]
    fn test_weight_coercion() {
        assert_eq!(Weight::from_value(&json!(110)), Some(Weight::pounds(110.0)));
        assert_eq!(Weight::from_value(&json!("90 lb")), Some(Weight::pounds(90.0)));
        assert_eq!(Weight::from_value(&json!("40kg")), Some(Weight::kilograms(40.0)));
        assert!(Weight::from_value(&json!("heavy")).is_none());
        assert!(Weight::from_value(&json!("5 ft")).is_none());
        assert!(Weight::from_value(&json!({"lb": 5})).is_none());
    }

    #[test]
    fn test_weight_conversions() {
        assert!((Weight::kilograms(10.0).to_pounds() - 22.046).abs() < 1e-3);
        assert_eq!(Weight::pounds(100.0).plus_pounds(12.0), Weight::pounds(112.0));
        assert_eq!(Weight::pounds(110.0).to_string(), "110lb");
    }
}
