//! Cross-cutting [`srt::Tree`] scenario (spec §8 S4).

use srt::Tree;

/// Deterministic shuffle via a linear-congruential generator, avoiding a
/// `rand` crate dependency for a one-off test fixture.
fn shuffled(n: usize, seed: u64) -> Vec<i64> {
    let mut v: Vec<i64> = (0..n as i64).collect();
    let mut state = seed;
    for i in (1..v.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        v.swap(i, j);
    }
    v
}

#[test]
fn s4_rb_deletion_preserves_density_and_invariants() {
    let insert_order = shuffled(1000, 0xC0FFEE);
    let mut delete_order = shuffled(1000, 0xF00D)[..500].to_vec();
    // Only delete keys that actually exist (the shuffle already draws from
    // the same 0..1000 universe, so this is a no-op filter, kept for clarity).
    delete_order.retain(|k| insert_order.contains(k));

    let mut tree: Tree<i64, ()> = Tree::new();
    for k in &insert_order {
        tree.insert(*k, ());
    }
    assert_eq!(tree.len(), 1000);
    tree.debug_assert_invariants();

    for k in &delete_order {
        tree.remove(k);
    }
    assert_eq!(tree.len(), 500);
    tree.debug_assert_invariants();

    for k in &insert_order {
        let still_present = !delete_order.contains(k);
        assert_eq!(tree.contains_key(k), still_present, "key {k} in wrong state");
    }
}
