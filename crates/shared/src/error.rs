use thiserror::Error;

/// Uniform classification of every client call outcome. Callers never see a
/// raw transport error: each failure is exactly one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Required local input was missing or blank. Raised before any request
    /// is issued.
    #[error("{0}")]
    Validation(String),
    /// The server responded with a non-success status. The message comes from
    /// the server's `{"error": ...}` body when it parses, otherwise a generic
    /// fallback naming the status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The request never completed: connect failure, DNS, timeout.
    #[error("request could not complete: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
