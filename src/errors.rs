use thiserror::Error;

/// Failure of the one-shot remote read of the post collection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Failure of the persisted favorites slot. Whether it was a load or a save
/// is known at the call site, which picks the user-facing message.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File system error: {0}")]
    Io(String),

    #[error("Corrupt favorites data: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}
