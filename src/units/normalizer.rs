use crate::units::types::{LinearUnit, QuantityKind};

/// Convert a value expressed in `unit` into canonical units for the given kind.
pub fn to_canonical(value: f64, unit: LinearUnit, kind: QuantityKind) -> f64 {
    value * unit.scale(kind)
}

/// Convert a canonical value back into `unit` for the given kind.
pub fn from_canonical(value: f64, unit: LinearUnit, kind: QuantityKind) -> f64 {
    value / unit.scale(kind)
}

/// Convert between two display units without keeping the canonical value around.
pub fn convert(value: f64, from: LinearUnit, to: LinearUnit, kind: QuantityKind) -> f64 {
    from_canonical(to_canonical(value, from, kind), to, kind)
}

pub fn to_canonical_linear(value: f64, unit: LinearUnit) -> f64 {
    to_canonical(value, unit, QuantityKind::Linear)
}

pub fn to_canonical_area(value: f64, unit: LinearUnit) -> f64 {
    to_canonical(value, unit, QuantityKind::Area)
}

pub fn to_canonical_volume(value: f64, unit: LinearUnit) -> f64 {
    to_canonical(value, unit, QuantityKind::Volume)
}

pub fn from_canonical_linear(value: f64, unit: LinearUnit) -> f64 {
    from_canonical(value, unit, QuantityKind::Linear)
}

pub fn from_canonical_area(value: f64, unit: LinearUnit) -> f64 {
    from_canonical(value, unit, QuantityKind::Area)
}

pub fn from_canonical_volume(value: f64, unit: LinearUnit) -> f64 {
    from_canonical(value, unit, QuantityKind::Volume)
}

/// Display label for a unit and quantity kind, e.g. "cm²".
pub fn symbol(unit: LinearUnit, kind: QuantityKind) -> &'static str {
    match (unit, kind) {
        (LinearUnit::Millimeter, QuantityKind::Linear) => "mm",
        (LinearUnit::Millimeter, QuantityKind::Area) => "mm²",
        (LinearUnit::Millimeter, QuantityKind::Volume) => "mm³",
        (LinearUnit::Centimeter, QuantityKind::Linear) => "cm",
        (LinearUnit::Centimeter, QuantityKind::Area) => "cm²",
        (LinearUnit::Centimeter, QuantityKind::Volume) => "cm³",
        (LinearUnit::Meter, QuantityKind::Linear) => "m",
        (LinearUnit::Meter, QuantityKind::Area) => "m²",
        (LinearUnit::Meter, QuantityKind::Volume) => "m³",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_conversion() {
        assert_eq!(to_canonical_linear(2.5, LinearUnit::Meter), 2500.0);
        assert_eq!(to_canonical_linear(2.5, LinearUnit::Centimeter), 25.0);
        assert_eq!(to_canonical_linear(2.5, LinearUnit::Millimeter), 2.5);
        assert_eq!(from_canonical_linear(2500.0, LinearUnit::Meter), 2.5);
    }

    #[test]
    fn test_area_and_volume_scale_by_powers() {
        assert_eq!(to_canonical_area(1.0, LinearUnit::Centimeter), 100.0);
        assert_eq!(to_canonical_area(1.0, LinearUnit::Meter), 1_000_000.0);
        assert_eq!(to_canonical_volume(1.0, LinearUnit::Centimeter), 1000.0);
        assert_eq!(to_canonical_volume(1.0, LinearUnit::Meter), 1_000_000_000.0);
        assert_eq!(from_canonical_volume(1_000_000_000.0, LinearUnit::Meter), 1.0);
        assert_eq!(from_canonical_area(100.0, LinearUnit::Centimeter), 1.0);
    }

    #[test]
    fn test_round_trip_every_unit() {
        let samples = [0.0, 1.0, -3.25, 1e-6, 123_456.789, 7.0 / 3.0];
        for unit in LinearUnit::ALL {
            for &x in &samples {
                assert_relative_eq!(
                    from_canonical_linear(to_canonical_linear(x, unit), unit),
                    x,
                    max_relative = 1e-12
                );
                assert_relative_eq!(
                    from_canonical_area(to_canonical_area(x, unit), unit),
                    x,
                    max_relative = 1e-12
                );
                assert_relative_eq!(
                    from_canonical_volume(to_canonical_volume(x, unit), unit),
                    x,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_convert_between_display_units() {
        assert_relative_eq!(
            convert(250.0, LinearUnit::Centimeter, LinearUnit::Meter, QuantityKind::Linear),
            2.5
        );
        assert_relative_eq!(
            convert(1.0, LinearUnit::Meter, LinearUnit::Centimeter, QuantityKind::Area),
            10_000.0
        );
        assert_relative_eq!(
            convert(5.0, LinearUnit::Millimeter, LinearUnit::Millimeter, QuantityKind::Volume),
            5.0
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbol(LinearUnit::Millimeter, QuantityKind::Linear), "mm");
        assert_eq!(symbol(LinearUnit::Centimeter, QuantityKind::Area), "cm²");
        assert_eq!(symbol(LinearUnit::Meter, QuantityKind::Volume), "m³");
    }
}
