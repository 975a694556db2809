use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::solver::{DerivationMode, DerivationRequest};
use crate::units::{from_canonical, parse_quantity, symbol};
use crate::units::{to_canonical_area, to_canonical_linear, to_canonical_volume};
use crate::units::{LinearUnit, QuantityKind, UnitError};

/// A named set of inputs, stored in the unit the user entered them in.
/// Fields the mode does not use are kept at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Mode")]
    pub mode: DerivationMode,
    #[serde(alias = "Unit", default, deserialize_with = "lenient_unit")]
    pub unit: LinearUnit,
    #[serde(alias = "Length", default)]
    pub length: f64,
    #[serde(alias = "Width", default)]
    pub width: f64,
    #[serde(alias = "Height", default)]
    pub height: f64,
    #[serde(alias = "Volume", default)]
    pub volume: f64,
    #[serde(alias = "SurfaceArea", default)]
    pub surface_area: f64,
}

// Files written by older tools may carry any casing, null, or an unknown tag.
// Anything unreadable is treated as meters.
fn lenient_unit<'de, D>(deserializer: D) -> Result<LinearUnit, D::Error>
where
    D: Deserializer<'de>,
{
    let tag: Option<String> = Option::deserialize(deserializer)?;
    Ok(match tag {
        Some(tag) => tag.parse().unwrap_or_else(|_| {
            log::warn!("Unknown preset unit '{}', using meters", tag);
            LinearUnit::Meter
        }),
        None => LinearUnit::Meter,
    })
}

impl Preset {
    fn blank(name: &str, mode: DerivationMode, unit: LinearUnit) -> Self {
        Self {
            name: name.trim().to_string(),
            mode,
            unit,
            length: 0.0,
            width: 0.0,
            height: 0.0,
            volume: 0.0,
            surface_area: 0.0,
        }
    }

    pub fn dimensions(name: &str, unit: LinearUnit, length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            ..Self::blank(name, DerivationMode::Dimensions, unit)
        }
    }

    pub fn from_volume(name: &str, unit: LinearUnit, volume: f64, length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            volume,
            ..Self::blank(name, DerivationMode::Volume, unit)
        }
    }

    pub fn from_surface(
        name: &str,
        unit: LinearUnit,
        surface_area: f64,
        length: f64,
        width: f64,
    ) -> Self {
        Self {
            length,
            width,
            surface_area,
            ..Self::blank(name, DerivationMode::Surface, unit)
        }
    }

    /// Build a preset from the three values a mode takes, in the order the CLI accepts
    /// them: `length width height`, `volume length width` or `area length width`.
    pub fn from_values(name: &str, mode: DerivationMode, unit: LinearUnit, values: [f64; 3]) -> Self {
        let [a, b, c] = values;
        match mode {
            DerivationMode::Dimensions => Self::dimensions(name, unit, a, b, c),
            DerivationMode::Volume => Self::from_volume(name, unit, a, b, c),
            DerivationMode::Surface => Self::from_surface(name, unit, a, b, c),
        }
    }

    /// Like [`Preset::from_values`] but reads quantity text such as "200 cm".
    /// Values are stored in `unit`, whatever unit each input was written in.
    pub fn from_inputs(
        name: &str,
        mode: DerivationMode,
        unit: LinearUnit,
        inputs: [&str; 3],
    ) -> Result<Self, UnitError> {
        let first_kind = match mode {
            DerivationMode::Dimensions => QuantityKind::Linear,
            DerivationMode::Volume => QuantityKind::Volume,
            DerivationMode::Surface => QuantityKind::Area,
        };
        let read = |input: &str, kind: QuantityKind| {
            parse_quantity(input, kind, unit).map(|canonical| from_canonical(canonical, unit, kind))
        };

        let values = [
            read(inputs[0], first_kind)?,
            read(inputs[1], QuantityKind::Linear)?,
            read(inputs[2], QuantityKind::Linear)?,
        ];
        Ok(Self::from_values(name, mode, unit, values))
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Normalize the stored values into a solver request
    pub fn to_request(&self) -> DerivationRequest {
        let length = to_canonical_linear(self.length, self.unit);
        let width = to_canonical_linear(self.width, self.unit);

        match self.mode {
            DerivationMode::Dimensions => DerivationRequest::Direct {
                length,
                width,
                height: to_canonical_linear(self.height, self.unit),
            },
            DerivationMode::Volume => DerivationRequest::FromVolume {
                volume: to_canonical_volume(self.volume, self.unit),
                length,
                width,
            },
            DerivationMode::Surface => DerivationRequest::FromSurface {
                surface_area: to_canonical_area(self.surface_area, self.unit),
                length,
                width,
            },
        }
    }

    /// One-line description of the stored inputs, e.g. `V=7 m³, L=1.9129 m, W=1.9129 m`
    pub fn summary(&self) -> String {
        let linear = symbol(self.unit, QuantityKind::Linear);
        let footprint = format!(
            "L={} {}, W={} {}",
            self.length, linear, self.width, linear
        );
        match self.mode {
            DerivationMode::Dimensions => {
                format!("{}, H={} {}", footprint, self.height, linear)
            }
            DerivationMode::Volume => format!(
                "V={} {}, {}",
                self.volume,
                symbol(self.unit, QuantityKind::Volume),
                footprint
            ),
            DerivationMode::Surface => format!(
                "A={} {}, {}",
                self.surface_area,
                symbol(self.unit, QuantityKind::Area),
                footprint
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.name, self.mode, self.summary())
    }
}
