//! String interning.
//!
//! An [`Interner`] maps strings to dense [`Atom`]s. Atoms are assigned in
//! the order strings are first seen, starting at zero, and are never reused
//! or reclaimed. There is no way to remove a string once interned.

use hashbrown::HashMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::atom::Atom;
use crate::error::InternError;

/// A single-threaded string interner.
///
/// Mutation goes through `&mut self`, so the borrow checker already rules
/// out interning while another thread holds a shared reference. Shared
/// `&Interner` values carry no interior mutability: any number of threads
/// may call [`Interner::lookup_existing`] on one without locking.
///
/// For concurrent interning use [`SyncInterner`](crate::SyncInterner).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interner {
    /// Maps strings to their atoms.
    atoms: HashMap<Box<str>, Atom, FxBuildHasher>,
    /// Strings by atom, for reverse lookup. Its length is the next atom.
    names: Vec<Box<str>>,
}

impl Interner {
    /// Creates a new empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interner with room for `capacity` strings.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            atoms: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Interns a string, returning its atom.
    ///
    /// If the string was seen before, returns the existing atom.
    /// Otherwise assigns the next sequential atom.
    ///
    /// # Panics
    ///
    /// Panics if every `u32` atom has already been assigned.
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.atoms.get(s) {
            return atom;
        }

        let index = self.names.len();
        assert!(index < u32::MAX as usize, "atom space exhausted");

        let atom = Atom::new(index as u32);
        let name: Box<str> = s.into();
        self.atoms.insert(name.clone(), atom);
        self.names.push(name);
        atom
    }

    /// Interns many strings at once.
    ///
    /// The returned atoms correspond one-to-one with the input. Duplicates
    /// within the batch resolve to the same atom, and first-seen order still
    /// decides assignment, exactly as a loop over [`Interner::intern`] would.
    ///
    /// # Panics
    ///
    /// Panics if the batch exhausts the `u32` atom space.
    pub fn intern_many<I, S>(&mut self, strings: I) -> Vec<Atom>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let strings = strings.into_iter();
        let (lower, _) = strings.size_hint();
        self.atoms.reserve(lower);
        self.names.reserve(lower);

        strings.map(|s| self.intern(s.as_ref())).collect()
    }

    /// Returns the atom of an already-interned string.
    ///
    /// This is the read-only fast path: it never assigns a new atom.
    ///
    /// # Errors
    ///
    /// Returns [`InternError::NotInterned`] if `s` has never been interned.
    pub fn lookup_existing(&self, s: &str) -> Result<Atom, InternError> {
        self.get(s).ok_or_else(|| InternError::NotInterned(s.to_owned()))
    }

    /// Returns the atom of `s` if it has been interned.
    #[must_use]
    pub fn get(&self, s: &str) -> Option<Atom> {
        self.atoms.get(s).copied()
    }

    /// Returns true if `s` has been interned.
    #[must_use]
    pub fn contains(&self, s: &str) -> bool {
        self.atoms.contains_key(s)
    }

    /// Returns the string an atom was assigned to.
    #[must_use]
    pub fn resolve(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom.index()).map(|name| &**name)
    }

    /// Returns the number of distinct interned strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the atom the next new string will receive.
    #[must_use]
    pub fn next_atom(&self) -> Atom {
        Atom::new(self.names.len() as u32)
    }

    /// Returns a copy of every interned string.
    #[must_use]
    pub fn strings(&self) -> FxHashSet<String> {
        self.names.iter().map(|name| name.to_string()).collect()
    }

    /// Iterates over `(atom, string)` pairs in atom order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Atom::new(i as u32), &**name))
    }

    /// Builds an interner from parts already checked for consistency.
    pub(crate) fn from_parts(
        atoms: HashMap<Box<str>, Atom, FxBuildHasher>,
        names: Vec<Box<str>>,
    ) -> Self {
        debug_assert_eq!(atoms.len(), names.len());
        Self { atoms, names }
    }
}

impl<S: AsRef<str>> Extend<S> for Interner {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.intern_many(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for Interner {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut interner = Self::new();
        interner.extend(iter);
        interner
    }
}
