//! Property-based tests for interning.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::{Atom, Interner, Snapshot, SyncInterner};

    // Short keys over a tiny alphabet, so batches contain plenty of repeats
    fn short_key() -> impl Strategy<Value = String> {
        "[a-d]{0,3}"
    }

    fn key_batch() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(short_key(), 0..64)
    }

    /// Random printable strings from a seeded generator.
    fn random_strings(seed: u64, count: usize, min: usize, max: usize) -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let len = rng.gen_range(min..max);
                (0..len).map(|_| rng.gen_range('A'..='z')).collect()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn atoms_are_stable(keys in key_batch()) {
            let mut interner = Interner::new();
            let first = interner.intern_many(&keys);
            let second = interner.intern_many(&keys);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn atoms_are_injective(keys in key_batch()) {
            let mut interner = Interner::new();
            let atoms = interner.intern_many(&keys);
            for (i, a) in keys.iter().enumerate() {
                for (j, b) in keys.iter().enumerate() {
                    prop_assert_eq!(a == b, atoms[i] == atoms[j]);
                }
            }
        }

        #[test]
        fn assignment_follows_first_seen_order(keys in key_batch()) {
            let mut interner = Interner::new();
            let atoms = interner.intern_many(&keys);

            let mut first_seen: Vec<&String> = Vec::new();
            for key in &keys {
                if !first_seen.contains(&key) {
                    first_seen.push(key);
                }
            }

            prop_assert_eq!(interner.len(), first_seen.len());
            for (k, key) in first_seen.iter().enumerate() {
                prop_assert_eq!(interner.get(key), Some(Atom::new(k as u32)));
            }
            for (key, atom) in keys.iter().zip(&atoms) {
                prop_assert_eq!(interner.resolve(*atom), Some(key.as_str()));
            }
        }

        #[test]
        fn snapshot_restores_same_atoms(keys in key_batch()) {
            let interner: Interner = keys.iter().collect();
            let restored = Interner::restore(interner.snapshot()).unwrap();
            for key in &keys {
                prop_assert_eq!(restored.lookup_existing(key), interner.lookup_existing(key));
            }
            prop_assert_eq!(restored, interner);
        }

        #[test]
        fn sync_matches_plain(keys in key_batch()) {
            let mut plain = Interner::new();
            let sync = SyncInterner::new();
            for key in &keys {
                prop_assert_eq!(sync.intern(key), plain.intern(key));
            }
            prop_assert_eq!(sync.into_inner(), plain);
        }
    }

    #[test]
    fn long_and_short_random_strings() {
        for (seed, min, max) in [(1, 5, 7), (2, 40, 50)] {
            let strings = random_strings(seed, 2_000, min, max);
            let mut interner = Interner::with_capacity(strings.len());
            let atoms = interner.intern_many(&strings);

            for (s, atom) in strings.iter().zip(&atoms) {
                assert_eq!(interner.lookup_existing(s), Ok(*atom));
            }
            assert_eq!(interner.strings().len(), interner.len());
        }
    }
}
