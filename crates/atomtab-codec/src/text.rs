//! JSON encoding.

use std::error::Error as StdError;

use atomtab_core::Snapshot;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Encodes a value's snapshot as JSON.
///
/// JSON has no spelling for NaN or infinities, and `serde_json` would write
/// them as `null`. The encoded text is therefore decoded once more before it
/// is returned, so text that [`from_text`] would reject is never produced.
///
/// # Errors
///
/// Returns [`CodecError::Unrepresentable`] if the state has no exact JSON
/// form, for example a table holding a NaN, and [`CodecError::Text`] if
/// serialization itself fails.
pub fn to_text<T>(value: &T) -> Result<String, CodecError>
where
    T: Snapshot,
    T::State: Serialize + DeserializeOwned,
{
    let text = serde_json::to_string(&value.snapshot())?;
    serde_json::from_str::<T::State>(&text).map_err(CodecError::Unrepresentable)?;
    Ok(text)
}

/// Decodes a value from JSON produced by [`to_text`].
///
/// # Errors
///
/// Returns [`CodecError::Text`] for malformed input and
/// [`CodecError::Restore`] if the decoded state is inconsistent.
pub fn from_text<T>(text: &str) -> Result<T, CodecError>
where
    T: Snapshot,
    T::State: DeserializeOwned,
    T::Error: StdError + Send + Sync + 'static,
{
    let state = serde_json::from_str(text)?;
    T::restore(state).map_err(CodecError::restore)
}
