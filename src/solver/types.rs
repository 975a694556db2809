use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated box edges in canonical units.
///
/// Only the solver builds these, so every edge is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxDimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl BoxDimensions {
    pub(crate) fn new_unchecked(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }
}

/// What the user entered, already normalized to canonical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivationRequest {
    Direct {
        length: f64,
        width: f64,
        height: f64,
    },
    FromVolume {
        volume: f64,
        length: f64,
        width: f64,
    },
    FromSurface {
        surface_area: f64,
        length: f64,
        width: f64,
    },
}

impl DerivationRequest {
    pub fn mode(&self) -> DerivationMode {
        match self {
            DerivationRequest::Direct { .. } => DerivationMode::Dimensions,
            DerivationRequest::FromVolume { .. } => DerivationMode::Volume,
            DerivationRequest::FromSurface { .. } => DerivationMode::Surface,
        }
    }
}

/// Which quantity the height is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationMode {
    Dimensions,
    Volume,
    Surface,
}

impl DerivationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DerivationMode::Dimensions => "dimensions",
            DerivationMode::Volume => "volume",
            DerivationMode::Surface => "surface",
        }
    }
}

impl fmt::Display for DerivationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DerivationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dimensions" | "direct" | "box" => Ok(DerivationMode::Dimensions),
            "volume" => Ok(DerivationMode::Volume),
            "surface" | "area" => Ok(DerivationMode::Surface),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}
