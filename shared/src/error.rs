use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Failure taxonomy for the vote operations, shared between the service and
/// the client so both sides classify outcomes the same way.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum VoteError {
    #[error("Choice must be A or B")]
    InvalidChoice,
    #[error("Sign in to cast a pick")]
    Unauthorized,
    #[error("Vote storage unavailable: {0}")]
    Transient(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type Result<T> = std::result::Result<T, VoteError>;
