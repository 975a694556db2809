use thiserror::Error;

use crate::units::types::QuantityKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Dimension mismatch: expected {expected} quantity, got {found} in '{input}'")]
    DimensionMismatch {
        expected: QuantityKind,
        found: QuantityKind,
        input: String,
    },
}
