use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preset name must not be empty")]
    EmptyName,

    #[error("Preset '{0}' not found")]
    NotFound(String),
}
