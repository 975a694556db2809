// Closed-form box geometry.
// All inputs and outputs are canonical (millimeter based) scalars; callers
// normalize before building a request and denormalize results for display.

pub mod box_solver;
pub mod error;
pub mod types;


pub use box_solver::*;
pub use error::SolverError;
pub use types::{BoxDimensions, DerivationMode, DerivationRequest};
