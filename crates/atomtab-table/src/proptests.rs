//! Property-based tests for dense symmetric tables.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use atomtab_core::{Atom, Snapshot};
    use proptest::prelude::*;

    use crate::{grown_capacity, DenseSymmetricTable};

    /// One step of table usage: write `value` for the pair of names.
    #[derive(Clone, Debug)]
    struct PairWrite {
        left: String,
        right: String,
        value: i32,
    }

    fn name() -> impl Strategy<Value = String> {
        "[a-h]{1,2}"
    }

    fn pair_write() -> impl Strategy<Value = PairWrite> {
        (name(), name(), -1000i32..1000).prop_map(|(left, right, value)| PairWrite {
            left,
            right,
            value,
        })
    }

    fn ordered(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    proptest! {
        #[test]
        fn set_is_symmetric(hint in 0usize..8, w in pair_write()) {
            let mut table = DenseSymmetricTable::new(hint);
            let a1 = table.atom_for(&w.left).unwrap();
            let a2 = table.atom_for(&w.right).unwrap();
            table.set(a1, a2, f64::from(w.value)).unwrap();

            prop_assert_eq!(table.get(a1, a2), Ok(f64::from(w.value)));
            prop_assert_eq!(table.get(a2, a1), Ok(f64::from(w.value)));
        }

        #[test]
        fn growth_preserves_data(hint in 0usize..4, writes in prop::collection::vec(pair_write(), 0..64)) {
            let mut table = DenseSymmetricTable::new(hint);
            let mut model: HashMap<(String, String), f64> = HashMap::new();

            for w in &writes {
                let a1 = table.atom_for(&w.left).unwrap();
                let a2 = table.atom_for(&w.right).unwrap();
                // Every returned atom fits immediately
                prop_assert!(a1.index() < table.capacity());
                prop_assert!(a2.index() < table.capacity());

                table.set(a1, a2, f64::from(w.value)).unwrap();
                model.insert(ordered(&w.left, &w.right), f64::from(w.value));

                for ((l, r), v) in &model {
                    let la = table.lookup(l).unwrap();
                    let ra = table.lookup(r).unwrap();
                    prop_assert_eq!(table.get(la, ra), Ok(*v));
                }
            }

            // Pairs never written are still zero
            for (i, l) in table.interner().iter() {
                for (j, r) in table.interner().iter() {
                    if !model.contains_key(&ordered(l, r)) {
                        prop_assert_eq!(table.get(i, j), Ok(0.0));
                    }
                }
            }
        }

        #[test]
        fn batch_grows_at_most_once(hint in 0usize..4, names in prop::collection::vec(name(), 0..40)) {
            let mut table: DenseSymmetricTable = DenseSymmetricTable::new(hint);
            let before = table.capacity();
            let atoms = table.atoms_for(&names).unwrap();

            let need = atoms.iter().map(|a| a.index() + 1).max().unwrap_or(0);
            let expected = if need > before { grown_capacity(before, need) } else { before };
            prop_assert_eq!(table.capacity(), expected);
            prop_assert!(atoms.iter().all(|a| a.index() < table.capacity()));
        }

        #[test]
        fn snapshot_restore_is_equivalent(writes in prop::collection::vec(pair_write(), 0..32)) {
            let mut table = DenseSymmetricTable::new(0);
            for w in &writes {
                let atoms = table.atoms_for([&w.left, &w.right]).unwrap();
                table.set(atoms[0], atoms[1], f64::from(w.value)).unwrap();
            }

            let restored = DenseSymmetricTable::restore(table.snapshot()).unwrap();
            prop_assert_eq!(restored.capacity(), table.capacity());
            for (atom, s) in table.interner().iter() {
                prop_assert_eq!(restored.lookup(s), Some(atom));
            }
            let n = u32::try_from(table.len()).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let (a, b) = (Atom::new(i), Atom::new(j));
                    prop_assert_eq!(restored.get(a, b), table.get(a, b));
                }
            }
        }
    }
}
