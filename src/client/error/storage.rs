use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// No location is available to keep the session in (e.g. no data directory on this platform).
    #[error("Session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
