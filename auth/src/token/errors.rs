use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token signature is invalid or token is malformed")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token subject does not match the asserted identity")]
    SubjectMismatch,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },
}
