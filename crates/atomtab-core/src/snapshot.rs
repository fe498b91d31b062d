//! Plain-state snapshots.
//!
//! Interners and tables expose their contents as plain data so an external
//! encoder can persist them and a decoder can rebuild an equivalent value.
//! Restoring validates the invariants the live types rely on.

use hashbrown::HashMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::error::InternError;
use crate::intern::Interner;

/// A value that can be captured as plain state and rebuilt from it.
pub trait Snapshot: Sized {
    /// The plain, encoder-friendly representation.
    type State;
    /// Error returned when a state cannot be restored.
    type Error;

    /// Captures the current state.
    fn snapshot(&self) -> Self::State;

    /// Rebuilds a value from a captured state.
    ///
    /// # Errors
    ///
    /// Fails if `state` violates the invariants of `Self`.
    fn restore(state: Self::State) -> Result<Self, Self::Error>;
}

/// Plain state of an [`Interner`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternerState {
    /// Every interned string and its atom.
    pub atoms: FxHashMap<String, Atom>,
    /// The atom the next new string would receive.
    pub next: Atom,
}

impl Snapshot for Interner {
    type State = InternerState;
    type Error = InternError;

    fn snapshot(&self) -> InternerState {
        InternerState {
            atoms: self.iter().map(|(atom, s)| (s.to_owned(), atom)).collect(),
            next: self.next_atom(),
        }
    }

    fn restore(state: InternerState) -> Result<Self, InternError> {
        let next = state.next.index();
        if state.atoms.len() != next {
            return Err(InternError::CorruptState(format!(
                "{} strings but next atom is {}",
                state.atoms.len(),
                state.next
            )));
        }

        let mut names: Vec<Option<Box<str>>> = vec![None; next];
        let mut atoms = HashMap::with_capacity_and_hasher(next, FxBuildHasher);
        for (s, atom) in state.atoms {
            let slot = names.get_mut(atom.index()).ok_or_else(|| {
                InternError::CorruptState(format!(
                    "{s:?} maps to {atom}, past next atom {}",
                    state.next
                ))
            })?;
            if slot.is_some() {
                return Err(InternError::CorruptState(format!(
                    "{atom} is assigned to more than one string"
                )));
            }
            let name: Box<str> = s.into();
            *slot = Some(name.clone());
            atoms.insert(name, atom);
        }

        // Lengths match and no slot was filled twice, so every slot is full.
        let names = names.into_iter().flatten().collect();
        tracing::trace!(atoms = next, "restored interner");
        Ok(Interner::from_parts(atoms, names))
    }
}
