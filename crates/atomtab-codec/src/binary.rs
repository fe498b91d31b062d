//! Compact binary encoding via bincode.

use std::error::Error as StdError;

use atomtab_core::Snapshot;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Encodes a value's snapshot as bytes.
///
/// # Errors
///
/// Returns [`CodecError::Binary`] if serialization fails.
pub fn to_binary<T>(value: &T) -> Result<Vec<u8>, CodecError>
where
    T: Snapshot,
    T::State: Serialize,
{
    Ok(bincode::serialize(&value.snapshot())?)
}

/// Decodes a value from bytes produced by [`to_binary`].
///
/// # Errors
///
/// Returns [`CodecError::Binary`] for malformed input and
/// [`CodecError::Restore`] if the decoded state is inconsistent.
pub fn from_binary<T>(bytes: &[u8]) -> Result<T, CodecError>
where
    T: Snapshot,
    T::State: DeserializeOwned,
    T::Error: StdError + Send + Sync + 'static,
{
    let state = bincode::deserialize(bytes)?;
    T::restore(state).map_err(CodecError::restore)
}
