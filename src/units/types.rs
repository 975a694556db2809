use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::error::UnitError;

/// Linear units accepted at the input/output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinearUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    #[default]
    Meter,
}

/// The unit all solver inputs and outputs are expressed in.
pub const CANONICAL_UNIT: LinearUnit = LinearUnit::Millimeter;

impl LinearUnit {
    pub const ALL: [LinearUnit; 3] = [
        LinearUnit::Millimeter,
        LinearUnit::Centimeter,
        LinearUnit::Meter,
    ];

    /// Number of canonical units (millimeters) in one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            LinearUnit::Millimeter => 1.0,
            LinearUnit::Centimeter => 10.0,
            LinearUnit::Meter => 1000.0,
        }
    }

    /// Factor raised to the power of the quantity kind.
    /// Multiplied out explicitly so 1 m³ is exactly 1e9 mm³.
    pub fn scale(self, kind: QuantityKind) -> f64 {
        let f = self.factor();
        match kind {
            QuantityKind::Linear => f,
            QuantityKind::Area => f * f,
            QuantityKind::Volume => f * f * f,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            LinearUnit::Millimeter => "mm",
            LinearUnit::Centimeter => "cm",
            LinearUnit::Meter => "m",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LinearUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LinearUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(LinearUnit::Centimeter),
            "m" | "meter" | "meters" => Ok(LinearUnit::Meter),
            _ => Err(UnitError::InvalidUnit(s.to_string())),
        }
    }
}

/// What a scalar measures: an edge length, an area or a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Linear,
    Area,
    Volume,
}

impl QuantityKind {
    pub fn exponent(self) -> u8 {
        match self {
            QuantityKind::Linear => 1,
            QuantityKind::Area => 2,
            QuantityKind::Volume => 3,
        }
    }

    pub fn from_exponent(exponent: u8) -> Option<Self> {
        match exponent {
            1 => Some(QuantityKind::Linear),
            2 => Some(QuantityKind::Area),
            3 => Some(QuantityKind::Volume),
            _ => None,
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityKind::Linear => f.write_str("linear"),
            QuantityKind::Area => f.write_str("area"),
            QuantityKind::Volume => f.write_str("volume"),
        }
    }
}

impl FromStr for QuantityKind {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "length" => Ok(QuantityKind::Linear),
            "area" | "surface" => Ok(QuantityKind::Area),
            "volume" => Ok(QuantityKind::Volume),
            other => Err(UnitError::ParseError(format!(
                "Unknown quantity kind: {}",
                other
            ))),
        }
    }
}
