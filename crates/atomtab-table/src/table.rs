//! Dense symmetric tables keyed by atom pairs.
//!
//! A [`DenseSymmetricTable`] owns an [`Interner`] and a square row-major
//! buffer with one row and one column per atom. Atomizing a string that
//! would fall outside the buffer grows it first, so every atom the table
//! hands out can be used with [`DenseSymmetricTable::get`] and
//! [`DenseSymmetricTable::set`] immediately.

use std::ops::Index;

use num_traits::Zero;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use atomtab_core::{Atom, Interner, InternerState, Snapshot};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::grow::expand_square;

/// A dense table storing one value per unordered pair of strings.
///
/// `get(a, b)` and `get(b, a)` always agree: values are written through
/// [`DenseSymmetricTable::set`], which fills both cells.
///
/// A table is owned by one caller at a time. Mutation takes `&mut self`;
/// shared references may be read from many threads.
#[derive(Clone, Debug)]
pub struct DenseSymmetricTable<V = f64> {
    /// Strings known to the table.
    interner: Interner,
    /// Cells in row-major order, `capacity * capacity` of them.
    buffer: Vec<V>,
    /// Side length of the buffer.
    capacity: usize,
    /// Old capacity from which growth copies rows in parallel.
    parallel_copy_threshold: usize,
}

/// Plain state of a [`DenseSymmetricTable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableState<V> {
    /// State of the owned interner.
    pub interner: InternerState,
    /// Cells in row-major order.
    pub buffer: Vec<V>,
    /// Side length of the buffer.
    pub capacity: usize,
}

impl<V> DenseSymmetricTable<V>
where
    V: Copy + Zero + Send + Sync,
{
    /// Creates an empty table with room for `capacity_hint` atoms.
    ///
    /// The hint may be zero; the table grows on first use.
    #[must_use]
    pub fn new(capacity_hint: usize) -> Self {
        Self::with_config(TableConfig::default().with_capacity_hint(capacity_hint))
    }

    /// Creates an empty table from a configuration.
    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        Self::build(Interner::new(), config.capacity_hint, &config)
    }

    /// Creates a table around an existing interner, taking ownership of it.
    ///
    /// The capacity equals the number of strings already interned, and
    /// every cell starts at zero.
    #[must_use]
    pub fn from_interner(interner: Interner) -> Self {
        let capacity = interner.len();
        Self::build(interner, capacity, &TableConfig::default())
    }

    fn build(interner: Interner, capacity: usize, config: &TableConfig) -> Self {
        Self {
            interner,
            buffer: vec![V::zero(); capacity * capacity],
            capacity,
            parallel_copy_threshold: config.parallel_copy_threshold,
        }
    }

    /// Interns a string, returning an atom usable with `get` and `set`.
    ///
    /// Grows the table first if the atom would not fit.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Allocation`] if growing fails. The table is
    /// left as it was and the string is not interned.
    pub fn atom_for(&mut self, s: &str) -> Result<Atom, TableError> {
        if !self.interner.contains(s) {
            self.reserve(self.interner.len() + 1)?;
        }
        Ok(self.interner.intern(s))
    }

    /// Interns many strings, returning atoms in input order.
    ///
    /// Duplicates resolve to the same atom, exactly as repeated
    /// [`DenseSymmetricTable::atom_for`] calls would, but the table grows at
    /// most once, sized for the largest resulting atom.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Allocation`] if growing fails. Nothing from
    /// the batch is interned in that case.
    pub fn atoms_for<I, S>(&mut self, strings: I) -> Result<Vec<Atom>, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let strings: Vec<S> = strings.into_iter().collect();
        let fresh: FxHashSet<&str> = strings
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !self.interner.contains(s))
            .collect();
        let need = self.interner.len() + fresh.len();

        self.reserve(need)?;
        Ok(self.interner.intern_many(strings))
    }

    /// Ensures the table can hold at least `atoms` atoms.
    ///
    /// Does nothing if the capacity already suffices.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Allocation`] if growing fails.
    pub fn reserve(&mut self, atoms: usize) -> Result<(), TableError> {
        if atoms <= self.capacity {
            return Ok(());
        }

        let (buffer, capacity) = expand_square(
            &self.buffer,
            self.capacity,
            atoms,
            self.parallel_copy_threshold,
        )?;
        tracing::debug!(
            from = self.capacity,
            to = capacity,
            atoms = self.interner.len(),
            "grew dense table"
        );
        self.buffer = buffer;
        self.capacity = capacity;
        Ok(())
    }

    /// Returns the value stored for the pair `(a1, a2)`.
    ///
    /// The order of the pair does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfRange`] if either atom is past the
    /// capacity.
    pub fn get(&self, a1: Atom, a2: Atom) -> Result<V, TableError> {
        let index = self.index_of(a1, a2)?;
        Ok(self.buffer[index])
    }

    /// Stores `value` for the pair `(a1, a2)`.
    ///
    /// Both `(a1, a2)` and `(a2, a1)` are written.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfRange`] if either atom is past the
    /// capacity. Nothing is written in that case.
    pub fn set(&mut self, a1: Atom, a2: Atom, value: V) -> Result<(), TableError> {
        let forward = self.index_of(a1, a2)?;
        let backward = self.index_of(a2, a1)?;
        self.buffer[forward] = value;
        self.buffer[backward] = value;
        Ok(())
    }

    /// Returns the values of one row, restricted to interned atoms.
    ///
    /// Entry `i` is the value stored for `(atom, Atom::new(i))`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfRange`] if `atom` is past the capacity.
    pub fn row(&self, atom: Atom) -> Result<&[V], TableError> {
        let start = self.index_of(atom, Atom::ZERO)?;
        Ok(&self.buffer[start..start + self.interner.len()])
    }

    fn index_of(&self, row: Atom, col: Atom) -> Result<usize, TableError> {
        for atom in [row, col] {
            if atom.index() >= self.capacity {
                return Err(TableError::OutOfRange {
                    atom,
                    capacity: self.capacity,
                });
            }
        }
        Ok(row.index() * self.capacity + col.index())
    }
}

impl<V> DenseSymmetricTable<V> {
    /// Returns the atom of an already-interned string without interning.
    #[must_use]
    pub fn lookup(&self, s: &str) -> Option<Atom> {
        self.interner.get(s)
    }

    /// Returns the side length of the table.
    ///
    /// Always at least [`DenseSymmetricTable::len`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of atoms interned through this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    /// Returns true if no atoms have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// Returns the owned interner.
    #[must_use]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Returns the raw row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.buffer
    }

    /// Consumes the table, returning its interner.
    #[must_use]
    pub fn into_interner(self) -> Interner {
        self.interner
    }
}

impl<V> Default for DenseSymmetricTable<V>
where
    V: Copy + Zero + Send + Sync,
{
    fn default() -> Self {
        Self::new(0)
    }
}

impl<V> Index<(Atom, Atom)> for DenseSymmetricTable<V>
where
    V: Copy + Zero + Send + Sync,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if either atom is past the capacity.
    fn index(&self, (a1, a2): (Atom, Atom)) -> &V {
        match self.index_of(a1, a2) {
            Ok(index) => &self.buffer[index],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<V> Snapshot for DenseSymmetricTable<V>
where
    V: Copy + Zero + Send + Sync,
{
    type State = TableState<V>;
    type Error = TableError;

    fn snapshot(&self) -> TableState<V> {
        TableState {
            interner: self.interner.snapshot(),
            buffer: self.buffer.clone(),
            capacity: self.capacity,
        }
    }

    fn restore(state: TableState<V>) -> Result<Self, TableError> {
        let interner = Interner::restore(state.interner)?;

        let cells = state.capacity.checked_mul(state.capacity);
        if cells != Some(state.buffer.len()) {
            return Err(TableError::CorruptState(format!(
                "{} cells do not form a square of side {}",
                state.buffer.len(),
                state.capacity
            )));
        }
        if state.capacity < interner.len() {
            return Err(TableError::CorruptState(format!(
                "capacity {} cannot hold {} atoms",
                state.capacity,
                interner.len()
            )));
        }

        tracing::trace!(capacity = state.capacity, "restored dense table");
        Ok(Self {
            interner,
            buffer: state.buffer,
            capacity: state.capacity,
            parallel_copy_threshold: TableConfig::default().parallel_copy_threshold,
        })
    }
}
