use thiserror::Error;

/// Every failure a page action can run into.
///
/// `Unauthenticated` and `Unauthorized` are only produced by the
/// authenticated request wrapper, after it has already told the user and
/// navigated away; callers treat them as "the request did not complete".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("no admin token stored")]
    Unauthenticated,

    #[error("admin token rejected by the server")]
    Unauthorized,

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),
}

impl ClientError {
    /// True when the wrapper already notified the user and redirected
    pub fn is_session_failure(&self) -> bool {
        matches!(self, ClientError::Unauthenticated | ClientError::Unauthorized)
    }

    /// Server-provided detail of a rejected request, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}
