//! Atom handles.
//!
//! An atom is a 32-bit identifier handed out by an interner. Atoms are
//! dense: the `k`-th distinct string interned receives atom `k - 1`, which
//! makes them directly usable as row and column indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A handle to an interned string.
///
/// This is a lightweight 32-bit index that can be copied freely.
/// Two atoms from the same interner are equal if and only if they were
/// produced for the same string.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Atom(u32);

impl Atom {
    /// The first atom any interner assigns.
    pub const ZERO: Self = Self(0);

    /// Creates an atom from its raw value.
    ///
    /// Atoms built this way are only meaningful against an interner that
    /// has actually assigned them; tables reject atoms past their capacity.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this atom.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the atom as a `usize` index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Atom> for u32 {
    fn from(atom: Atom) -> Self {
        atom.0
    }
}

impl From<Atom> for usize {
    fn from(atom: Atom) -> Self {
        atom.index()
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({})", self.0)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
