use thiserror::Error;

/// Why the solver could not produce dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolverError {
    #[error("{name} must be a positive dimension, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("{name} must be a positive number, got {value}")]
    NonPositiveInput { name: &'static str, value: f64 },

    #[error("Invalid dimensions for surface area calculation")]
    DegenerateDimensions,

    #[error("Surface area {surface_area} too small for a {length} x {width} footprint")]
    SurfaceAreaTooSmall {
        surface_area: f64,
        length: f64,
        width: f64,
    },

    #[error("Derived height {value} is outside the representable range")]
    HeightOutOfRange { value: f64 },
}
