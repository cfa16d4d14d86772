use thiserror::Error;

/// Errors the board can hand back to callers. All of these are recoverable:
/// the in-memory state after a failed mutation matches the last successfully
/// persisted state.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Post not found: {0}")]
    NotFound(i64),

    #[error("{0} cannot be empty")]
    InvalidArgument(&'static str),

    #[error("Failed to persist board state: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("Failed to encode board state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Not a plaza directory: {0}")]
    NotInitialized(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, BoardError>;
