use serde::Deserialize;
use thiserror::Error;

/// JSON body shape both backend routes answer with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessagePayload {
    pub message: String,
}

/// Events the engine reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted { result: Result<String, FetchError> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("malformed body")]
    MalformedBody,
    #[error("network error")]
    Network,
}
