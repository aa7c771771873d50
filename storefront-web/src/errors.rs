use reqwest::StatusCode;
use shared::models::ApiErrorBody;
use thiserror::Error;

/// Failure of a call to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (network, CORS, decoding).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: StatusCode,
        body: Option<ApiErrorBody>,
    },
}

impl ApiError {
    /// Status code of a rejected request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::Rejected { status, .. } => Some(*status),
        }
    }

    /// Message supplied by the service, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::Rejected { body, .. } => body.as_ref().and_then(ApiErrorBody::user_message),
        }
    }

    /// Whether the service refused the credentials attached to the request.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Failure to read or write browser storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage operation on `{key}` failed: {reason}")]
    Operation { key: String, reason: String },
}
