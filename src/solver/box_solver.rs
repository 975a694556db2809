use crate::solver::error::SolverError;
use crate::solver::types::{BoxDimensions, DerivationRequest};

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn require_dimension(name: &'static str, value: f64) -> Result<f64, SolverError> {
    if is_positive(value) {
        Ok(value)
    } else {
        Err(SolverError::NonPositiveDimension { name, value })
    }
}

fn require_input(name: &'static str, value: f64) -> Result<f64, SolverError> {
    if is_positive(value) {
        Ok(value)
    } else {
        Err(SolverError::NonPositiveInput { name, value })
    }
}

/// True when all three edges are finite and strictly positive
pub fn dimensions_valid(length: f64, width: f64, height: f64) -> bool {
    is_positive(length) && is_positive(width) && is_positive(height)
}

/// Volume = length × width × height
pub fn volume(length: f64, width: f64, height: f64) -> Result<f64, SolverError> {
    require_dimension("length", length)?;
    require_dimension("width", width)?;
    require_dimension("height", height)?;

    Ok(length * width * height)
}

/// Surface area = 2(lw + lh + wh)
pub fn surface_area(length: f64, width: f64, height: f64) -> Result<f64, SolverError> {
    require_dimension("length", length)?;
    require_dimension("width", width)?;
    require_dimension("height", height)?;

    Ok(2.0 * (length * width + length * height + width * height))
}

/// Missing edge of a box with the given volume and two known edges.
///
/// A quotient that underflows to zero or overflows to infinity is a
/// [`SolverError::HeightOutOfRange`].
pub fn third_from_volume(volume: f64, dim1: f64, dim2: f64) -> Result<f64, SolverError> {
    require_input("volume", volume)?;
    require_input("first dimension", dim1)?;
    require_input("second dimension", dim2)?;

    let third = volume / (dim1 * dim2);
    if !is_positive(third) {
        return Err(SolverError::HeightOutOfRange { value: third });
    }

    Ok(third)
}

/// Missing edge of a box with the given surface area and two known edges.
///
/// Solves `A = 2·d1·d2 + 2·d3·(d1 + d2)` for `d3`. Fails with
/// [`SolverError::SurfaceAreaTooSmall`] when the footprint alone already uses up
/// the requested area.
pub fn third_from_surface_area(
    surface_area: f64,
    dim1: f64,
    dim2: f64,
) -> Result<f64, SolverError> {
    require_input("surface area", surface_area)?;
    require_input("first dimension", dim1)?;
    require_input("second dimension", dim2)?;

    let numerator = surface_area - 2.0 * dim1 * dim2;
    let denominator = 2.0 * (dim1 + dim2);

    // Unreachable while both edges must be positive
    if denominator == 0.0 {
        return Err(SolverError::DegenerateDimensions);
    }

    let third = numerator / denominator;
    if third <= 0.0 {
        return Err(SolverError::SurfaceAreaTooSmall {
            surface_area,
            length: dim1,
            width: dim2,
        });
    }
    if !third.is_finite() {
        return Err(SolverError::HeightOutOfRange { value: third });
    }

    Ok(third)
}

/// Edge of a cube with the given volume
pub fn cube_side_from_volume(volume: f64) -> Result<f64, SolverError> {
    require_input("volume", volume)?;

    Ok(volume.cbrt())
}

/// Edge of a cube with the given surface area (A = 6s²)
pub fn cube_side_from_surface_area(surface_area: f64) -> Result<f64, SolverError> {
    require_input("surface area", surface_area)?;

    Ok((surface_area / 6.0).sqrt())
}

/// Dimensions of a cube with the given edge
pub fn cube(side: f64) -> Result<BoxDimensions, SolverError> {
    require_dimension("side", side)?;

    Ok(BoxDimensions::new_unchecked(side, side, side))
}

/// Turn a request into validated dimensions, reporting the first violation found.
pub fn solve(request: DerivationRequest) -> Result<BoxDimensions, SolverError> {
    let dimensions = match request {
        DerivationRequest::Direct {
            length,
            width,
            height,
        } => {
            require_dimension("length", length)?;
            require_dimension("width", width)?;
            require_dimension("height", height)?;
            BoxDimensions::new_unchecked(length, width, height)
        }
        DerivationRequest::FromVolume {
            volume,
            length,
            width,
        } => {
            require_input("volume", volume)?;
            require_input("length", length)?;
            require_input("width", width)?;
            let height = third_from_volume(volume, length, width)?;
            BoxDimensions::new_unchecked(length, width, height)
        }
        DerivationRequest::FromSurface {
            surface_area,
            length,
            width,
        } => {
            require_input("surface area", surface_area)?;
            require_input("length", length)?;
            require_input("width", width)?;
            let height = third_from_surface_area(surface_area, length, width)?;
            BoxDimensions::new_unchecked(length, width, height)
        }
    };

    log::debug!(
        "solved {} request: {} x {} x {} mm",
        request.mode(),
        dimensions.length(),
        dimensions.width(),
        dimensions.height()
    );

    Ok(dimensions)
}
