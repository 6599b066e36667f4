use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt stored value: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
