pub mod config;
pub mod preset;
pub mod report;
pub mod solver;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::QuaderConfig;
pub use preset::{Preset, PresetStore};
pub use report::BoxReport;
pub use solver::{solve, BoxDimensions, DerivationMode, DerivationRequest, SolverError};
pub use units::{LinearUnit, QuantityKind, UnitError};
