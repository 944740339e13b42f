//! Client Error Types

use thiserror::Error;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("[{code}] {message} (HTTP {status})")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A write was attempted without a saved token
    #[error("Not logged in")]
    NotLoggedIn,

    /// Response or token payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Stable server error code, if this came from the server
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::NotLoggedIn | ClientError::Api { status: 401, .. })
    }
}
