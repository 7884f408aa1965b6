use thiserror::Error;

use crate::wizard::StepId;

/// Error type that captures common intake failures.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to persist {step} slice: {reason}")]
    SliceRejected { step: StepId, reason: String },
    #[error("No record found for client {0}")]
    UnknownClient(uuid::Uuid),
    #[error("Step index {index} out of range ({total} steps)")]
    StepOutOfRange { index: usize, total: usize },
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for IntakeError {
    fn from(err: dialoguer::Error) -> Self {
        IntakeError::Prompt(err.to_string())
    }
}
