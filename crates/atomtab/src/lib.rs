//! # atomtab
//!
//! String interning and dense symmetric pairwise tables.
//!
//! Pairwise data keyed by string identifiers (distances, similarities,
//! co-occurrence counts) is stored in a square table indexed by small
//! integer atoms instead of in a map keyed by string pairs.
//!
//! ## Features
//!
//! - **Dense Atoms**: strings map to 32-bit atoms assigned in first-seen order
//! - **Concurrent Interning**: `SyncInterner` interns through a shared reference
//! - **Symmetric Tables**: `set(a, b, v)` is visible as both `(a, b)` and `(b, a)`
//! - **Amortized Growth**: tables double as new atoms arrive, keeping stored values
//! - **Snapshots**: JSON and binary encodings of interners and tables
//!
//! ## Quick Start
//!
//! ```rust
//! use atomtab::prelude::*;
//!
//! let mut table = DenseSymmetricTable::new(0);
//! let a = table.atom_for("a")?;
//! let b = table.atom_for("b")?;
//! table.set(a, b, 5.0)?;
//! assert_eq!(table.get(b, a)?, 5.0);
//! # Ok::<(), TableError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use atomtab_codec as codec;
pub use atomtab_core as core;
pub use atomtab_table as table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use atomtab_codec::{from_binary, from_text, to_binary, to_text, CodecError};
    pub use atomtab_core::{Atom, InternError, Interner, Snapshot, SyncInterner};
    pub use atomtab_table::{DenseSymmetricTable, TableConfig, TableError};
}
