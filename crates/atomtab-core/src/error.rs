//! Errors raised by interners.

use thiserror::Error;

/// Errors that can occur while interning or restoring an interner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InternError {
    /// A read-only lookup was made for a string that was never interned.
    #[error("string {0:?} has not been interned")]
    NotInterned(String),

    /// A restored state violates the interner invariants.
    #[error("corrupt interner state: {0}")]
    CorruptState(String),
}
