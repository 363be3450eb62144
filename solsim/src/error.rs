//! Error types for the simulation crate

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while setting up or checking a run
#[derive(Error, Debug)]
pub enum SimError {
    /// Invalid catalog, step parameters or playback settings.
    /// Raised before any simulation work is done.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-finite value found by a post-hoc trajectory check.
    /// The integrator itself never raises this.
    #[error("non-finite state at step {step} for body {body}")]
    NumericalDegeneracy { step: usize, body: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SimError::Configuration(msg.into())
    }
}
