// Unit normalization for box quantities.
// Everything is computed in millimeters internally; the other units only exist
// at the input/output boundary.

pub mod detector;
pub mod error;
pub mod normalizer;
pub mod types;

pub use detector::{looks_like_quantity, parse_quantity};
pub use error::UnitError;
pub use normalizer::*;
pub use types::{LinearUnit, QuantityKind, CANONICAL_UNIT};
