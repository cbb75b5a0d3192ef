use reqwest::StatusCode;
use thiserror::Error;

use crate::models::Mode;

/// A mode name that is not one of `code`, `phishing`, `web`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid test type.")]
pub struct InvalidMode(pub String);

/// Why a submission did not produce a result.
///
/// The `Display` output of each variant is the message shown in the result
/// container.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{}", .0.route().prompt)]
    EmptyInput(Mode),

    #[error("Error: {} {}", .0.as_u16(), .0.canonical_reason().unwrap_or(""))]
    Status(StatusCode),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Url(#[from] url::ParseError),
}

impl DispatchError {
    /// Empty input is a prompt for the user, not a failure of the request.
    pub fn is_prompt(&self) -> bool {
        matches!(self, DispatchError::EmptyInput(_))
    }
}
