use thiserror::Error;

/// Failure of a single invocation. The message is surfaced to the caller as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    StorageWrite(String),
    #[error("{0}")]
    StorageRead(String),
}

impl HandlerError {
    pub fn message(&self) -> &str {
        match self {
            HandlerError::Decode(msg)
            | HandlerError::StorageWrite(msg)
            | HandlerError::StorageRead(msg) => msg,
        }
    }
}
