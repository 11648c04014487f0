use thiserror::Error;

/// Failures surfaced by a capability fetch. Absent data is not a failure;
/// adapters report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{name}: {message}")]
    Receipt { name: String, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
