//! # atomtab-core
//!
//! String interning for atomtab.
//!
//! This crate provides:
//! - `Atom`, a 32-bit handle for an interned string
//! - `Interner`, a single-threaded interner with a read-only lookup path
//! - `SyncInterner`, a lock-guarded interner for concurrent interning
//! - `Snapshot`, the plain-state capture/restore contract used by encoders
//!
//! ## Design Principles
//!
//! - **Dense Atoms**: the k-th distinct string gets atom k - 1, so atoms index arrays directly
//! - **Monotonic**: atoms are never reused, reclaimed, or reassigned
//! - **Plain State**: every type can be captured as serde-friendly data and rebuilt

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod atom;
pub mod error;
pub mod intern;
pub mod snapshot;
pub mod sync;

#[cfg(test)]
mod proptests;

pub use atom::Atom;
pub use error::InternError;
pub use intern::Interner;
pub use snapshot::{InternerState, Snapshot};
pub use sync::SyncInterner;
