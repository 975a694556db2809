// WebAssembly bindings for the Quader API
use crate::preset::Preset;
use crate::report::BoxReport;
use crate::solver::{self, BoxDimensions, DerivationMode, DerivationRequest};
use crate::units::{self, parse_quantity, LinearUnit, QuantityKind};
use js_sys::{Array, Float64Array};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct QuaderWasm {
    unit: LinearUnit,
}

impl Default for QuaderWasm {
    fn default() -> Self {
        Self {
            unit: LinearUnit::Meter,
        }
    }
}

fn parse_unit(tag: &str) -> Result<LinearUnit, JsValue> {
    tag.parse::<LinearUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_kind(kind: &str) -> Result<QuantityKind, JsValue> {
    kind.parse::<QuantityKind>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_presets(presets_json: &str) -> Result<Vec<Preset>, JsValue> {
    serde_json::from_str(presets_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse presets JSON: {}", e)))
}

#[wasm_bindgen]
impl QuaderWasm {
    /// Unit tag ("mm", "cm", "m") used for input without a unit and for results.
    /// Defaults to meters.
    #[wasm_bindgen(constructor)]
    pub fn new(unit: Option<String>) -> Result<QuaderWasm, JsValue> {
        let unit = match unit {
            Some(tag) => parse_unit(&tag)?,
            None => LinearUnit::Meter,
        };
        Ok(Self { unit })
    }

    /// Solve a box from text inputs.
    /// mode: "dimensions" (a=L, b=W, c=H), "volume" (a=V, b=L, c=W) or "surface" (a=A, b=L, c=W).
    /// Returns the report as a JSON string.
    #[wasm_bindgen]
    pub fn solve(&self, mode: &str, a: &str, b: &str, c: &str) -> Result<String, JsValue> {
        let dimensions = self.solve_inputs(mode, a, b, c)?;
        self.report(&dimensions, self.unit)
    }

    /// Cube with the given volume (in this binding's unit), as a JSON report
    #[wasm_bindgen]
    pub fn cube_from_volume(&self, volume: f64) -> Result<String, JsValue> {
        let side = solver::cube_side_from_volume(units::to_canonical_volume(volume, self.unit))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let dimensions = solver::cube(side).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.report(&dimensions, self.unit)
    }

    /// Cube with the given surface area (in this binding's unit), as a JSON report
    #[wasm_bindgen]
    pub fn cube_from_surface_area(&self, surface_area: f64) -> Result<String, JsValue> {
        let side = solver::cube_side_from_surface_area(units::to_canonical_area(
            surface_area,
            self.unit,
        ))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let dimensions = solver::cube(side).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.report(&dimensions, self.unit)
    }

    /// Solved edges in this binding's unit as [length, width, height]
    #[wasm_bindgen]
    pub fn dimensions(&self, mode: &str, a: &str, b: &str, c: &str) -> Result<Float64Array, JsValue> {
        let edges = self
            .solve_inputs(mode, a, b, c)?
            .as_array()
            .map(|v| units::from_canonical_linear(v, self.unit));

        Ok(Float64Array::from(&edges[..]))
    }

    /// Convert a value between unit tags for a quantity kind ("linear", "area", "volume")
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, from: &str, to: &str, kind: &str) -> Result<f64, JsValue> {
        Ok(units::convert(
            value,
            parse_unit(from)?,
            parse_unit(to)?,
            parse_kind(kind)?,
        ))
    }

    /// Display symbol such as "cm²"
    #[wasm_bindgen]
    pub fn symbol(&self, unit: &str, kind: &str) -> Result<String, JsValue> {
        Ok(units::symbol(parse_unit(unit)?, parse_kind(kind)?).to_string())
    }

    /// Names from a preset file's JSON content
    #[wasm_bindgen]
    pub fn preset_names(&self, presets_json: &str) -> Result<Array, JsValue> {
        let names = Array::new();
        for preset in parse_presets(presets_json)? {
            names.push(&JsValue::from_str(&preset.name));
        }
        Ok(names)
    }

    /// Solve a preset by name (ignoring case) from a preset file's JSON content.
    /// The report uses the preset's own unit.
    #[wasm_bindgen]
    pub fn solve_preset(&self, presets_json: &str, name: &str) -> Result<String, JsValue> {
        let preset = parse_presets(presets_json)?
            .into_iter()
            .find(|p| p.matches_name(name))
            .ok_or_else(|| JsValue::from_str(&format!("Preset '{}' not found", name)))?;

        let dimensions = solver::solve(preset.to_request())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.report(&dimensions, preset.unit)
    }
}

impl QuaderWasm {
    fn solve_inputs(&self, mode: &str, a: &str, b: &str, c: &str) -> Result<BoxDimensions, JsValue> {
        let mode: DerivationMode = mode.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let parse = |input: &str, kind: QuantityKind| {
            parse_quantity(input, kind, self.unit).map_err(|e| JsValue::from_str(&e.to_string()))
        };

        let request = match mode {
            DerivationMode::Dimensions => DerivationRequest::Direct {
                length: parse(a, QuantityKind::Linear)?,
                width: parse(b, QuantityKind::Linear)?,
                height: parse(c, QuantityKind::Linear)?,
            },
            DerivationMode::Volume => DerivationRequest::FromVolume {
                volume: parse(a, QuantityKind::Volume)?,
                length: parse(b, QuantityKind::Linear)?,
                width: parse(c, QuantityKind::Linear)?,
            },
            DerivationMode::Surface => DerivationRequest::FromSurface {
                surface_area: parse(a, QuantityKind::Area)?,
                length: parse(b, QuantityKind::Linear)?,
                width: parse(c, QuantityKind::Linear)?,
            },
        };

        solver::solve(request).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn report(&self, dimensions: &BoxDimensions, unit: LinearUnit) -> Result<String, JsValue> {
        let report =
            BoxReport::new(dimensions, unit).map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&report)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
    }
}
