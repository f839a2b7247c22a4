//! Front-end errors

use fleet_roster::{ConfigError, FormError};

/// Errors surfaced by board commands
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scripted form submission failed validation
    #[error("form rejected: {0}")]
    Form(#[from] FormError),

    /// No train with the requested number
    #[error("no train numbered {0:?}")]
    UnknownTrain(String),

    /// JSON output failed
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
