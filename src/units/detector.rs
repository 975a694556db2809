use lazy_static::lazy_static;
use regex::Regex;

use crate::units::error::UnitError;
use crate::units::normalizer::to_canonical;
use crate::units::types::{LinearUnit, QuantityKind};

lazy_static! {
    /// Number (optional sign, decimals, scientific notation), optional unit tag,
    /// optional power marker.
    /// Examples: "2.5", "250 cm", "1 m³", "1e3mm", "40 cm2"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)\s*(?:(?P<unit>[a-zA-Z]+)\s*(?P<power>[²³23])?)?$"
    ).unwrap();
}

/// Check if a string looks like a quantity: a number with an optional unit
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Parse user input such as "250 cm" or "1 m³" into a canonical (millimeter based) value.
///
/// Input without a unit is read in `default_unit`. A bare linear tag on an area or
/// volume quantity ("3 cm" for a volume) is shorthand for the matching power.
pub fn parse_quantity(
    input: &str,
    kind: QuantityKind,
    default_unit: LinearUnit,
) -> Result<f64, UnitError> {
    let trimmed = input.trim();
    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| UnitError::ParseError(format!("Not a quantity: '{}'", input)))?;

    let value: f64 = caps["value"]
        .parse()
        .map_err(|e| UnitError::ParseError(format!("Invalid number '{}': {}", &caps["value"], e)))?;
    if !value.is_finite() {
        return Err(UnitError::ParseError(format!(
            "Number out of range: '{}'",
            &caps["value"]
        )));
    }

    let unit = match caps.name("unit") {
        Some(tag) => tag.as_str().parse::<LinearUnit>()?,
        None => default_unit,
    };

    if let Some(power) = caps.name("power") {
        let exponent = match power.as_str() {
            "²" | "2" => 2,
            _ => 3,
        };
        let found = QuantityKind::from_exponent(exponent).unwrap_or(QuantityKind::Volume);
        if found != kind {
            return Err(UnitError::DimensionMismatch {
                expected: kind,
                found,
                input: input.to_string(),
            });
        }
    }

    let canonical = to_canonical(value, unit, kind);
    log::debug!("parsed '{}' as {} {} -> {} canonical", input, value, unit, canonical);
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("100"));
        assert!(looks_like_quantity("10.5 m"));
        assert!(looks_like_quantity("1e3mm"));
        assert!(looks_like_quantity("40 cm²"));
        assert!(looks_like_quantity("-2 cm"));

        assert!(!looks_like_quantity("cm"));
        assert!(!looks_like_quantity("hello world"));
        assert!(!looks_like_quantity("1 2 3"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_plain_number_uses_default_unit() {
        let mm = parse_quantity("2.5", QuantityKind::Linear, LinearUnit::Meter).unwrap();
        assert_eq!(mm, 2500.0);

        let mm = parse_quantity(" 7 ", QuantityKind::Volume, LinearUnit::Centimeter).unwrap();
        assert_eq!(mm, 7000.0);
    }

    #[test]
    fn test_explicit_unit_overrides_default() {
        let mm = parse_quantity("250 cm", QuantityKind::Linear, LinearUnit::Meter).unwrap();
        assert_eq!(mm, 2500.0);

        let mm = parse_quantity("1e3mm", QuantityKind::Linear, LinearUnit::Meter).unwrap();
        assert_eq!(mm, 1000.0);
    }

    #[test]
    fn test_powered_units() {
        let mm3 = parse_quantity("1 m³", QuantityKind::Volume, LinearUnit::Millimeter).unwrap();
        assert_eq!(mm3, 1_000_000_000.0);

        let mm2 = parse_quantity("1 m2", QuantityKind::Area, LinearUnit::Millimeter).unwrap();
        assert_eq!(mm2, 1_000_000.0);

        // Bare tag is shorthand for the expected power
        let mm3 = parse_quantity("3 cm", QuantityKind::Volume, LinearUnit::Meter).unwrap();
        assert_eq!(mm3, 3000.0);
    }

    #[test]
    fn test_power_must_match_kind() {
        let err = parse_quantity("1 m²", QuantityKind::Linear, LinearUnit::Meter).unwrap_err();
        assert!(matches!(
            err,
            UnitError::DimensionMismatch {
                expected: QuantityKind::Linear,
                found: QuantityKind::Area,
                ..
            }
        ));

        let err = parse_quantity("1 cm3", QuantityKind::Area, LinearUnit::Meter).unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_rejects_garbage_and_unknown_units() {
        assert!(matches!(
            parse_quantity("abc", QuantityKind::Linear, LinearUnit::Meter),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("5 km", QuantityKind::Linear, LinearUnit::Meter),
            Err(UnitError::InvalidUnit(tag)) if tag == "km"
        ));
    }

    #[test]
    fn test_rejects_out_of_range_numbers() {
        assert!(matches!(
            parse_quantity("1e400", QuantityKind::Linear, LinearUnit::Meter),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("-1e400 mm", QuantityKind::Linear, LinearUnit::Meter),
            Err(UnitError::ParseError(_))
        ));
    }

    #[test]
    fn test_sign_is_preserved() {
        // Positivity is checked by the solver, not the parser
        let mm = parse_quantity("-2 cm", QuantityKind::Linear, LinearUnit::Meter).unwrap();
        assert_eq!(mm, -20.0);
    }
}
