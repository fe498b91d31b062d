//! Errors raised by dense tables.

use atomtab_core::{Atom, InternError};
use thiserror::Error;

/// Errors that can occur while using or restoring a table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// An atom indexes past the table capacity.
    ///
    /// The atom was not produced by this table's own atomizing calls.
    #[error("{atom} is out of range for table capacity {capacity}")]
    OutOfRange {
        /// The offending atom.
        atom: Atom,
        /// The table capacity at the time of the call.
        capacity: usize,
    },

    /// Growing the table could not allocate its new buffer.
    #[error("cannot allocate a table of capacity {capacity}")]
    Allocation {
        /// The capacity that was requested.
        capacity: usize,
    },

    /// The owned interner rejected an operation.
    #[error(transparent)]
    Intern(#[from] InternError),

    /// A restored state violates the table invariants.
    #[error("corrupt table state: {0}")]
    CorruptState(String),
}
