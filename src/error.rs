use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Unknown city `{0}`")]
    UnknownCity(String),
    #[error("Already showing the maximum number of clocks")]
    CapacityExceeded,
    #[error("City `{0}` is already shown")]
    DuplicateCity(String),
    #[error("City `{0}` is not shown")]
    NotActive(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),
    #[error("Stored city list is corrupt: {0}")]
    StorageCorrupt(#[from] serde_json::Error),
    #[error("Invalid timezone `{0}`")]
    InvalidTimezone(String),
}
