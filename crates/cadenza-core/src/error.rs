use thiserror::Error;

/// Errors surfaced by the fallible parts of cadenza.
///
/// [`crate::respond`] never returns these: a payload that cannot be encoded
/// aborts the response instead. Use [`crate::encode`] when the error itself
/// is wanted.
#[derive(Debug, Error)]
pub enum CadenzaError {
    #[error("failed to serialize envelope: {0}")]
    Serialize(#[from] crate::json::Error),

    #[error("status code {0} cannot be carried by the transport")]
    InvalidStatus(u16),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T, E = CadenzaError> = std::result::Result<T, E>;
