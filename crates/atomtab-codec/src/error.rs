//! Errors raised while encoding or decoding.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text (JSON) encoder or decoder failed.
    #[error("text codec: {0}")]
    Text(#[from] serde_json::Error),

    /// The state holds a value JSON cannot carry, such as a non-finite float.
    #[error("state has no exact text form: {0}")]
    Unrepresentable(#[source] serde_json::Error),

    /// The binary encoder or decoder failed.
    #[error("binary codec: {0}")]
    Binary(#[from] bincode::Error),

    /// The input decoded, but the state it holds is not valid.
    #[error("decoded state rejected: {0}")]
    Restore(#[source] Box<dyn StdError + Send + Sync>),
}

impl CodecError {
    pub(crate) fn restore<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Restore(Box::new(err))
    }
}
