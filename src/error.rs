//! Error types for webhook-submit

use thiserror::Error;

/// Errors that can end a submission run
#[derive(Error, Debug)]
pub enum Error {
    /// Transport or HTTP-level failure talking to the challenge API
    #[error("{message}{}", status_suffix(.status))]
    Communication {
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// Human-readable description
        message: String,
    },

    /// Anything that is not a communication failure
    #[error("{0}")]
    Unexpected(String),

    /// Invalid settings, raised before any request is made
    #[error("configuration error: {0}")]
    Config(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status: {s})")).unwrap_or_default()
}

impl Error {
    /// Build a communication error with an observed status
    pub fn communication(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Communication {
            status,
            message: message.into(),
        }
    }

    /// Whether this failure came from talking to the remote API
    pub const fn is_communication(&self) -> bool {
        matches!(self, Self::Communication { .. })
    }

    /// HTTP status attached to the failure, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Communication { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Communication {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {e}"))
    }
}

/// Result type alias for webhook-submit operations
pub type Result<T> = std::result::Result<T, Error>;
