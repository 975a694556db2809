use serde::Serialize;
use std::fmt::Write;

use crate::solver::{self, BoxDimensions, SolverError};
use crate::units::{from_canonical, symbol, LinearUnit, QuantityKind, CANONICAL_UNIT};

/// Axis-aligned bounds of a box placed with one corner at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

/// Geometric properties of a box, all expressed in one unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurements {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
    pub surface_area: f64,
    pub centroid: [f64; 3],
    pub bounding_box: BoundingBox,
}

impl Measurements {
    fn canonical(dimensions: &BoxDimensions) -> Result<Self, SolverError> {
        let [l, w, h] = dimensions.as_array();
        Ok(Self {
            length: l,
            width: w,
            height: h,
            volume: solver::volume(l, w, h)?,
            surface_area: solver::surface_area(l, w, h)?,
            centroid: [l / 2.0, w / 2.0, h / 2.0],
            bounding_box: BoundingBox {
                min: [0.0; 3],
                max: [l, w, h],
            },
        })
    }

    fn in_unit(&self, unit: LinearUnit) -> Self {
        let linear = |v: f64| from_canonical(v, unit, QuantityKind::Linear);
        Self {
            length: linear(self.length),
            width: linear(self.width),
            height: linear(self.height),
            volume: from_canonical(self.volume, unit, QuantityKind::Volume),
            surface_area: from_canonical(self.surface_area, unit, QuantityKind::Area),
            centroid: self.centroid.map(linear),
            bounding_box: BoundingBox {
                min: self.bounding_box.min.map(linear),
                max: self.bounding_box.max.map(linear),
            },
        }
    }
}

/// Solved box in canonical units alongside its display-unit view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxReport {
    pub unit: LinearUnit,
    pub canonical: Measurements,
    pub display: Measurements,
}

impl BoxReport {
    pub fn new(dimensions: &BoxDimensions, unit: LinearUnit) -> Result<Self, SolverError> {
        let canonical = Measurements::canonical(dimensions)?;
        Ok(Self {
            unit,
            canonical,
            display: canonical.in_unit(unit),
        })
    }

    /// Multi-line text summary with `precision` decimals
    pub fn render(&self, precision: usize) -> String {
        let d = &self.display;
        let c = &self.canonical;
        let unit = symbol(self.unit, QuantityKind::Linear);
        let mm = symbol(CANONICAL_UNIT, QuantityKind::Linear);
        let p = precision;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Quader: {:.p$} × {:.p$} × {:.p$} {}",
            d.length, d.width, d.height, unit
        );
        if self.unit != CANONICAL_UNIT {
            let _ = writeln!(
                out,
                "  Internal ({}): {:.p$} × {:.p$} × {:.p$}",
                mm, c.length, c.width, c.height
            );
        }
        let _ = writeln!(
            out,
            "  Volume:       {}",
            self.dual_quantity(d.volume, c.volume, QuantityKind::Volume, p)
        );
        let _ = writeln!(
            out,
            "  Surface area: {}",
            self.dual_quantity(d.surface_area, c.surface_area, QuantityKind::Area, p)
        );
        let _ = writeln!(
            out,
            "  Centroid:     ({}) {}",
            join_point(&d.centroid, p),
            unit
        );
        let _ = write!(
            out,
            "  Bounding box: ({}) to ({}) {}",
            join_point(&d.bounding_box.min, p),
            join_point(&d.bounding_box.max, p),
            unit
        );
        out
    }

    fn dual_quantity(&self, display: f64, canonical: f64, kind: QuantityKind, p: usize) -> String {
        let shown = format_quantity(display, self.unit, kind, p);
        if self.unit == CANONICAL_UNIT {
            shown
        } else {
            format!("{} ({})", shown, format_quantity(canonical, CANONICAL_UNIT, kind, p))
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| error_json(&e.to_string()))
    }
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// "1.500 m³"
pub fn format_quantity(value: f64, unit: LinearUnit, kind: QuantityKind, precision: usize) -> String {
    format!("{:.*} {}", precision, value, symbol(unit, kind))
}

fn join_point(point: &[f64; 3], precision: usize) -> String {
    point
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect::<Vec<_>>()
        .join(", ")
}
