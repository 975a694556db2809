pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::PresetError;
pub use models::Preset;
pub use store::{default_presets, PresetStore};
