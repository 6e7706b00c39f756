use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input script: {0}")]
    InvalidScript(String),

    #[error("Input is not bound: no enhanced input capability was available at setup")]
    InputUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;
