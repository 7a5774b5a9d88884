//! Sorted map / set built on the Red-Black tree (spec §4.G).
//!
//! The original C library closes over a family of per-subtype maps and
//! sets (`int`-keyed, `string`-keyed, ..., each with or without a stored
//! value). This port collapses that family into one generic [`SMap`],
//! with [`SSet`] realized as `SMap<K, ()>` (spec §4.G carry-forward note:
//! "a set is a map with a zero-sized value").

use crate::tree::Tree;
use crate::vector::SVec;

pub struct SMap<K, V> {
    tree: Tree<K, V>,
}

/// A sorted set: a map whose value carries no payload.
pub type SSet<K> = SMap<K, ()>;

impl<K, V> Default for SMap<K, V> {
    fn default() -> Self {
        SMap { tree: Tree::new() }
    }
}

impl<K: Ord, V> SMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.tree.insert(key, value);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key)
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.tree.min()
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.tree.max()
    }

    /// In-order visit of the whole map.
    pub fn for_each<F: FnMut(&K, &V)>(&self, f: F) {
        self.tree.visit_inorder(f);
    }

    /// Bounded in-order visit (spec §4.G `itr_XX(kmin, kmax, callback)`).
    pub fn itr<F: FnMut(&K, &V)>(&self, kmin: &K, kmax: &K, f: F) {
        self.tree.visit_range(kmin, kmax, f);
    }

    /// Inserts `key` with `delta` if absent, or adds `delta` to the
    /// existing value otherwise (spec §4.G `inc_ii`/`inc_si`/... counter
    /// family, generalized over one `insert_rw` call instead of one
    /// function per key/value type pairing).
    pub fn increment(&mut self, key: K, delta: V)
    where
        V: Copy + std::ops::AddAssign,
    {
        self.tree.insert_rw(key, delta, |existing, d| *existing += d);
    }
}

impl<K: Ord> SMap<K, ()> {
    /// Inserts `key` into a set (spec §4.G: a set realized as `V = ()`).
    pub fn insert_key(&mut self, key: K) {
        self.tree.insert(key, ());
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }
}

impl<K: Ord + Clone + Default, V: Clone + Default> SMap<K, V> {
    /// Bulk-exports the map's keys and values, in sorted order, into the
    /// crate's typed vector (spec §4.G `sort_to_vectors`-style export).
    pub fn sort_to_vectors(&self) -> (SVec<K>, SVec<V>) {
        let mut keys = SVec::with_capacity(self.len());
        let mut values = SVec::with_capacity(self.len());
        self.tree.visit_inorder(|k, v| {
            keys.push(k.clone());
            values.push(v.clone());
        });
        (keys, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove_roundtrip() {
        let mut m = SMap::new();
        m.insert("a", 1);
        m.insert("b", 2);
        assert_eq!(m.get(&"a"), Some(&1));
        assert_eq!(m.remove(&"a"), Some(1));
        assert_eq!(m.get(&"a"), None);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn set_insert_and_contains() {
        let mut s: SSet<i32> = SSet::new();
        s.insert_key(5);
        s.insert_key(5);
        s.insert_key(7);
        assert!(s.contains(&5));
        assert!(s.contains(&7));
        assert!(!s.contains(&6));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn increment_initializes_then_accumulates() {
        let mut counts: SMap<&str, i32> = SMap::new();
        counts.increment("x", 1);
        counts.increment("x", 1);
        counts.increment("y", 5);
        assert_eq!(counts.get(&"x"), Some(&2));
        assert_eq!(counts.get(&"y"), Some(&5));
    }

    #[test]
    fn itr_bounds_the_visited_range() {
        let mut m = SMap::new();
        for k in 0..30i32 {
            m.insert(k, k * k);
        }
        let mut seen = Vec::new();
        m.itr(&10, &15, |k, v| seen.push((*k, *v)));
        let expected: Vec<(i32, i32)> = (10..=15).map(|k| (k, k * k)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn sort_to_vectors_is_sorted_and_aligned() {
        let mut m = SMap::new();
        for (k, v) in [(3, "c"), (1, "a"), (2, "b")] {
            m.insert(k, v);
        }
        let (keys, values) = m.sort_to_vectors();
        assert_eq!(keys.as_slice(), &[1, 2, 3]);
        assert_eq!(values.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn min_max_track_bounds() {
        let mut m = SMap::new();
        for k in [5, 1, 9, 3] {
            m.insert(k, ());
        }
        assert_eq!(m.min().map(|(k, _)| *k), Some(1));
        assert_eq!(m.max().map(|(k, _)| *k), Some(9));
    }
}
