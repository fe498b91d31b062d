//! # atomtab-codec
//!
//! Text and binary encodings for atomtab snapshots.
//!
//! Any type implementing [`Snapshot`](atomtab_core::Snapshot) with a serde
//! state can be encoded:
//! - as JSON text, via `serde_json`
//! - as compact bytes, via `bincode`
//!
//! Decoding restores through `Snapshot::restore`, so invariant checks run
//! on every decoded value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binary;
pub mod error;
pub mod text;

pub use binary::{from_binary, to_binary};
pub use error::CodecError;
pub use text::{from_text, to_text};
