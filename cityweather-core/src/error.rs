use thiserror::Error;

/// Why a weather fetch produced no record.
///
/// The session treats every variant the same way; the split exists for logs
/// and for callers that want to tell them apart.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("weather provider returned a malformed body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
