//! Thread-safe interning.
//!
//! [`SyncInterner`] guards an [`Interner`] with a lock it owns, so many
//! threads can intern through a shared reference. Interning takes the lock
//! exclusively for the mapping mutation. Read-only lookups only share it,
//! so concurrent lookups never wait on one another.
//!
//! Once the interning phase is over, [`SyncInterner::into_inner`] hands back
//! the plain [`Interner`]; sharing `&Interner` between threads gives fully
//! lock-free lookups for hot paths.

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use rustc_hash::FxHashSet;

use crate::atom::Atom;
use crate::error::InternError;
use crate::intern::Interner;
use crate::snapshot::{InternerState, Snapshot};

/// A string interner that may be used from many threads at once.
#[derive(Debug, Default)]
pub struct SyncInterner {
    inner: RwLock<Interner>,
}

impl SyncInterner {
    /// Creates a new empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interner with room for `capacity` strings.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Interner::with_capacity(capacity))
    }

    /// Interns a string, returning its atom.
    ///
    /// Strings that are already interned are answered under an upgradable
    /// read guard; the guard is upgraded to exclusive only to assign a new
    /// atom.
    ///
    /// # Panics
    ///
    /// Panics if every `u32` atom has already been assigned.
    pub fn intern(&self, s: &str) -> Atom {
        let guard = self.inner.upgradable_read();
        if let Some(atom) = guard.get(s) {
            return atom;
        }
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        guard.intern(s)
    }

    /// Interns many strings at once under a single exclusive lock.
    ///
    /// Semantically identical to calling [`SyncInterner::intern`] for each
    /// string in order, except no other thread can interleave atoms.
    ///
    /// # Panics
    ///
    /// Panics if the batch exhausts the `u32` atom space.
    pub fn intern_many<I, S>(&self, strings: I) -> Vec<Atom>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().intern_many(strings)
    }

    /// Returns the atom of an already-interned string.
    ///
    /// Takes the lock in shared mode only.
    ///
    /// # Errors
    ///
    /// Returns [`InternError::NotInterned`] if `s` has never been interned.
    pub fn lookup_existing(&self, s: &str) -> Result<Atom, InternError> {
        self.inner.read().lookup_existing(s)
    }

    /// Returns the atom of `s` if it has been interned.
    #[must_use]
    pub fn get(&self, s: &str) -> Option<Atom> {
        self.inner.read().get(s)
    }

    /// Returns true if `s` has been interned.
    #[must_use]
    pub fn contains(&self, s: &str) -> bool {
        self.inner.read().contains(s)
    }

    /// Returns an owned copy of the string an atom was assigned to.
    #[must_use]
    pub fn resolve(&self, atom: Atom) -> Option<String> {
        self.inner.read().resolve(atom).map(str::to_owned)
    }

    /// Returns the number of distinct interned strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a copy of every interned string.
    #[must_use]
    pub fn strings(&self) -> FxHashSet<String> {
        self.inner.read().strings()
    }

    /// Borrows the interner mutably without locking.
    ///
    /// The exclusive borrow proves no other thread can hold the lock.
    pub fn get_mut(&mut self) -> &mut Interner {
        self.inner.get_mut()
    }

    /// Consumes the wrapper, returning the plain interner.
    #[must_use]
    pub fn into_inner(self) -> Interner {
        self.inner.into_inner()
    }
}

impl From<Interner> for SyncInterner {
    fn from(interner: Interner) -> Self {
        Self {
            inner: RwLock::new(interner),
        }
    }
}

impl Snapshot for SyncInterner {
    type State = InternerState;
    type Error = InternError;

    fn snapshot(&self) -> InternerState {
        self.inner.read().snapshot()
    }

    fn restore(state: InternerState) -> Result<Self, InternError> {
        Interner::restore(state).map(Self::from)
    }
}
