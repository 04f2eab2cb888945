use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("invalid object key: {key:?}")]
    InvalidKey { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error for {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("write error for {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("delete error for {key}: {reason}")]
    Delete { key: String, reason: String },

    #[error("list error under {prefix:?}: {reason}")]
    List { prefix: String, reason: String },

    #[error("cannot open store at {path}: {reason}")]
    Open { path: String, reason: String },
}
