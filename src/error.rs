use std::fmt;
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Remote call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    ListQuestions,
    CreateQuestion,
    DeleteQuestion,
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RemoteOperation::ListQuestions => "list questions",
            RemoteOperation::CreateQuestion => "create question",
            RemoteOperation::DeleteQuestion => "delete question",
        })
    }
}

#[derive(Debug, Error)]
pub enum RemoteFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A remote operation failed. The only error kind the controller reports.
#[derive(Debug, Error)]
#[error("{operation} failed: {cause}")]
pub struct RemoteError {
    pub operation: RemoteOperation,
    #[source]
    pub cause: RemoteFailure,
}

impl RemoteError {
    pub fn new(operation: RemoteOperation, cause: impl Into<RemoteFailure>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }

    pub fn status(operation: RemoteOperation, status: StatusCode) -> Self {
        Self::new(operation, RemoteFailure::Status(status))
    }

    /// Status code returned by the server, if the request got that far.
    pub fn status_code(&self) -> Option<StatusCode> {
        match &self.cause {
            RemoteFailure::Status(status) => Some(*status),
            RemoteFailure::Transport(err) => err.status(),
            RemoteFailure::Decode(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Top-level error for running the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_names_operation() {
        let err = RemoteError::status(RemoteOperation::DeleteQuestion, StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "delete question failed: server responded with 404 Not Found"
        );
        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
    }
}
