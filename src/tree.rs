//! Arena-backed Red-Black tree (spec §4.F).
//!
//! Grounded in `examples/original_source/src/saux/stree.c`: a top-down
//! insert/delete over index-addressed nodes instead of pointers. The C
//! source keeps a small sliding window of ancestor slots during its
//! iterative descent; this port instead carries an explicit ancestor
//! stack (`Vec<usize>`) and translates CLRS's parent-pointer
//! `RB-INSERT-FIXUP`/`RB-DELETE-FIXUP` onto it, since the arena has no
//! parent links. Deletion frees the backing slot with `Vec::swap_remove`
//! (spec invariant: "every index in `[0, len)` addresses a live node
//! after a delete") and repairs the one stale pointer that result leaves
//! behind by re-descending from the root using the moved node's own key.

use crate::container::heuristic_grow_target;
use std::cmp::Ordering;
use std::collections::VecDeque;

struct Node<K, V> {
    key: K,
    value: V,
    left: Option<usize>,
    right: Option<usize>,
    red: bool,
}

/// An index-addressed Red-Black tree mapping `K` to `V`.
///
/// `V = ()` realizes the spec's tree-backed *set* subtype (spec §4.G):
/// no value storage beyond the key, same traversal and balance code.
pub struct Tree<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<usize>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Tree { nodes: Vec::new(), root: None }
    }
}

impl<K: Ord, V> Tree<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn color(&self, idx: Option<usize>) -> bool {
        idx.is_some_and(|i| self.nodes[i].red)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root;
        while let Some(idx) = cur {
            match key.cmp(&self.nodes[idx].key) {
                Ordering::Equal => return Some(&self.nodes[idx].value),
                Ordering::Less => cur = self.nodes[idx].left,
                Ordering::Greater => cur = self.nodes[idx].right,
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root;
        while let Some(idx) = cur {
            match key.cmp(&self.nodes[idx].key) {
                Ordering::Equal => return Some(&mut self.nodes[idx].value),
                Ordering::Less => cur = self.nodes[idx].left,
                Ordering::Greater => cur = self.nodes[idx].right,
            }
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        let mut cur = self.root?;
        while let Some(l) = self.nodes[cur].left {
            cur = l;
        }
        Some((&self.nodes[cur].key, &self.nodes[cur].value))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        let mut cur = self.root?;
        while let Some(r) = self.nodes[cur].right {
            cur = r;
        }
        Some((&self.nodes[cur].key, &self.nodes[cur].value))
    }

    /// Inserts `key`/`value`, or calls `rw(existing, value)` to reconcile
    /// with an existing entry of the same key (spec §4.F "insert with
    /// rewrite callback"). Returns the arena index of the (possibly
    /// pre-existing) node.
    pub fn insert_rw<F>(&mut self, key: K, value: V, rw: F) -> usize
    where
        F: FnOnce(&mut V, V),
    {
        let mut path: Vec<usize> = Vec::new();
        let mut went_left: Vec<bool> = Vec::new();
        let mut cur = self.root;
        while let Some(idx) = cur {
            match key.cmp(&self.nodes[idx].key) {
                Ordering::Equal => {
                    rw(&mut self.nodes[idx].value, value);
                    return idx;
                }
                Ordering::Less => {
                    path.push(idx);
                    went_left.push(true);
                    cur = self.nodes[idx].left;
                }
                Ordering::Greater => {
                    path.push(idx);
                    went_left.push(false);
                    cur = self.nodes[idx].right;
                }
            }
        }
        if self.nodes.len() == self.nodes.capacity() {
            let target = heuristic_grow_target(self.nodes.capacity(), self.nodes.len() + 1);
            self.nodes.reserve(target - self.nodes.len());
        }
        let z = self.nodes.len();
        self.nodes.push(Node { key, value, left: None, right: None, red: true });
        match path.last() {
            Some(&parent) => {
                if *went_left.last().unwrap() {
                    self.nodes[parent].left = Some(z);
                } else {
                    self.nodes[parent].right = Some(z);
                }
            }
            None => self.root = Some(z),
        }
        self.insert_fixup(path, z);
        z
    }

    /// Plain insert: an existing key's value is overwritten (spec §4.F).
    pub fn insert(&mut self, key: K, value: V) -> usize {
        self.insert_rw(key, value, |slot, v| *slot = v)
    }

    fn rotate_left(&mut self, x: usize, parent: Option<usize>) -> usize {
        let y = self.nodes[x].right.expect("rotate_left requires a right child");
        let beta = self.nodes[y].left;
        self.nodes[x].right = beta;
        self.nodes[y].left = Some(x);
        match parent {
            Some(p) => {
                if self.nodes[p].left == Some(x) {
                    self.nodes[p].left = Some(y);
                } else {
                    self.nodes[p].right = Some(y);
                }
            }
            None => self.root = Some(y),
        }
        y
    }

    fn rotate_right(&mut self, x: usize, parent: Option<usize>) -> usize {
        let y = self.nodes[x].left.expect("rotate_right requires a left child");
        let beta = self.nodes[y].right;
        self.nodes[x].left = beta;
        self.nodes[y].right = Some(x);
        match parent {
            Some(p) => {
                if self.nodes[p].left == Some(x) {
                    self.nodes[p].left = Some(y);
                } else {
                    self.nodes[p].right = Some(y);
                }
            }
            None => self.root = Some(y),
        }
        y
    }

    /// CLRS `RB-INSERT-FIXUP`, translated from parent pointers to an
    /// explicit ancestor stack (`path`, root-first, `path.last()` is `z`'s
    /// parent).
    fn insert_fixup(&mut self, mut path: Vec<usize>, mut z: usize) {
        while let Some(&p) = path.last() {
            if !self.nodes[p].red {
                break;
            }
            // parent is red, so a grandparent must exist (the root is
            // always black).
            let gp = path[path.len() - 2];
            let ggp = if path.len() >= 3 { Some(path[path.len() - 3]) } else { None };
            if self.nodes[gp].left == Some(p) {
                let uncle = self.nodes[gp].right;
                if self.color(uncle) {
                    self.nodes[p].red = false;
                    self.nodes[uncle.unwrap()].red = false;
                    self.nodes[gp].red = true;
                    path.pop();
                    path.pop();
                    z = gp;
                    continue;
                }
                if self.nodes[p].right == Some(z) {
                    self.rotate_left(p, Some(gp));
                }
                let w = self.nodes[gp].left.unwrap();
                self.nodes[w].red = false;
                self.nodes[gp].red = true;
                self.rotate_right(gp, ggp);
                break;
            } else {
                let uncle = self.nodes[gp].left;
                if self.color(uncle) {
                    self.nodes[p].red = false;
                    self.nodes[uncle.unwrap()].red = false;
                    self.nodes[gp].red = true;
                    path.pop();
                    path.pop();
                    z = gp;
                    continue;
                }
                if self.nodes[p].left == Some(z) {
                    self.rotate_right(p, Some(gp));
                }
                let w = self.nodes[gp].right.unwrap();
                self.nodes[w].red = false;
                self.nodes[gp].red = true;
                self.rotate_left(gp, ggp);
                break;
            }
        }
        if let Some(r) = self.root {
            self.nodes[r].red = false;
        }
    }

    fn transplant(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.nodes[p].left == Some(old) {
                    self.nodes[p].left = new;
                } else {
                    self.nodes[p].right = new;
                }
            }
        }
    }

    /// Removes `key`, returning its value if present. Rebalances via CLRS
    /// `RB-DELETE-FIXUP` and compacts the arena so every index below the
    /// new length still addresses a live node.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut path: Vec<usize> = Vec::new();
        let mut cur = self.root;
        let z = loop {
            match cur {
                None => return None,
                Some(idx) => match key.cmp(&self.nodes[idx].key) {
                    Ordering::Equal => break idx,
                    Ordering::Less => {
                        path.push(idx);
                        cur = self.nodes[idx].left;
                    }
                    Ordering::Greater => {
                        path.push(idx);
                        cur = self.nodes[idx].right;
                    }
                },
            }
        };
        let z_parent = path.last().copied();

        let y_original_color;
        let x: Option<usize>;
        let anc: Vec<usize>;

        if self.nodes[z].left.is_none() {
            x = self.nodes[z].right;
            y_original_color = self.nodes[z].red;
            self.transplant(z_parent, z, x);
            anc = path;
        } else if self.nodes[z].right.is_none() {
            x = self.nodes[z].left;
            y_original_color = self.nodes[z].red;
            self.transplant(z_parent, z, x);
            anc = path;
        } else {
            let mut succ_path = path;
            succ_path.push(z);
            let mut ycur = self.nodes[z].right.unwrap();
            while let Some(l) = self.nodes[ycur].left {
                succ_path.push(ycur);
                ycur = l;
            }
            let y = ycur;
            y_original_color = self.nodes[y].red;
            x = self.nodes[y].right;
            if succ_path.last() == Some(&z) {
                anc = {
                    let mut a = succ_path;
                    a.push(y);
                    a
                };
            } else {
                let y_parent = *succ_path.last().unwrap();
                self.transplant(Some(y_parent), y, x);
                self.nodes[y].right = self.nodes[z].right;
                anc = succ_path;
            }
            self.transplant(z_parent, z, Some(y));
            self.nodes[y].left = self.nodes[z].left;
            self.nodes[y].red = self.nodes[z].red;
        }

        if !y_original_color {
            self.delete_fixup(x, anc);
        }

        let removed = self.remove_arena_slot(z);
        Some(removed.value)
    }

    /// CLRS `RB-DELETE-FIXUP` over the ancestor stack `anc` of `x`
    /// (`anc.last()` is `x`'s parent, mirroring [`Self::insert_fixup`]).
    fn delete_fixup(&mut self, mut x: Option<usize>, mut anc: Vec<usize>) {
        while x != self.root && !self.color(x) {
            let Some(&parent) = anc.last() else { break };
            if self.nodes[parent].left == x {
                let mut w = self.nodes[parent].right.expect("sibling must exist");
                if self.color(Some(w)) {
                    self.nodes[w].red = false;
                    self.nodes[parent].red = true;
                    let gpp = if anc.len() >= 2 { Some(anc[anc.len() - 2]) } else { None };
                    self.rotate_left(parent, gpp);
                    anc.insert(anc.len() - 1, w);
                    w = self.nodes[parent].right.unwrap();
                }
                let w_left_black = !self.color(self.nodes[w].left);
                let w_right_black = !self.color(self.nodes[w].right);
                if w_left_black && w_right_black {
                    self.nodes[w].red = true;
                    x = Some(parent);
                    anc.pop();
                    continue;
                }
                if w_right_black {
                    if let Some(wl) = self.nodes[w].left {
                        self.nodes[wl].red = false;
                    }
                    self.nodes[w].red = true;
                    self.rotate_right(w, Some(parent));
                    w = self.nodes[parent].right.unwrap();
                }
                self.nodes[w].red = self.nodes[parent].red;
                self.nodes[parent].red = false;
                if let Some(wr) = self.nodes[w].right {
                    self.nodes[wr].red = false;
                }
                let gpp = if anc.len() >= 2 { Some(anc[anc.len() - 2]) } else { None };
                self.rotate_left(parent, gpp);
                x = self.root;
                break;
            } else {
                let mut w = self.nodes[parent].left.expect("sibling must exist");
                if self.color(Some(w)) {
                    self.nodes[w].red = false;
                    self.nodes[parent].red = true;
                    let gpp = if anc.len() >= 2 { Some(anc[anc.len() - 2]) } else { None };
                    self.rotate_right(parent, gpp);
                    anc.insert(anc.len() - 1, w);
                    w = self.nodes[parent].left.unwrap();
                }
                let w_right_black = !self.color(self.nodes[w].right);
                let w_left_black = !self.color(self.nodes[w].left);
                if w_right_black && w_left_black {
                    self.nodes[w].red = true;
                    x = Some(parent);
                    anc.pop();
                    continue;
                }
                if w_left_black {
                    if let Some(wr) = self.nodes[w].right {
                        self.nodes[wr].red = false;
                    }
                    self.nodes[w].red = true;
                    self.rotate_left(w, Some(parent));
                    w = self.nodes[parent].left.unwrap();
                }
                self.nodes[w].red = self.nodes[parent].red;
                self.nodes[parent].red = false;
                if let Some(wl) = self.nodes[w].left {
                    self.nodes[wl].red = false;
                }
                let gpp = if anc.len() >= 2 { Some(anc[anc.len() - 2]) } else { None };
                self.rotate_right(parent, gpp);
                x = self.root;
                break;
            }
        }
        if let Some(xi) = x {
            self.nodes[xi].red = false;
        }
    }

    /// Frees arena slot `z` via `swap_remove` and repairs the single
    /// pointer left stale by the move (spec: "dense arena, move tail into
    /// the hole").
    fn remove_arena_slot(&mut self, z: usize) -> Node<K, V> {
        let last = self.nodes.len() - 1;
        if z != last {
            let removed = self.nodes.swap_remove(z);
            self.relink_after_move(last, z);
            removed
        } else {
            self.nodes.pop().unwrap()
        }
    }

    /// After the node formerly at `old_idx` lands at `new_idx`, finds the
    /// single parent/root pointer that still references `old_idx` by
    /// re-descending the tree with the moved node's own key, and repoints
    /// it — no need for `K: Clone` or parent pointers.
    fn relink_after_move(&mut self, old_idx: usize, new_idx: usize) {
        if self.root == Some(old_idx) {
            self.root = Some(new_idx);
            return;
        }
        let mut cur = self.root.expect("non-empty tree");
        loop {
            let go_left = self.nodes[new_idx].key < self.nodes[cur].key;
            let child = if go_left { self.nodes[cur].left } else { self.nodes[cur].right };
            if child == Some(old_idx) {
                if go_left {
                    self.nodes[cur].left = Some(new_idx);
                } else {
                    self.nodes[cur].right = Some(new_idx);
                }
                return;
            }
            cur = child.expect("moved node must be reachable by key search");
        }
    }

    pub fn visit_inorder<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.visit_inorder_from(self.root, &mut f);
    }

    fn visit_inorder_from<F: FnMut(&K, &V)>(&self, idx: Option<usize>, f: &mut F) {
        if let Some(i) = idx {
            self.visit_inorder_from(self.nodes[i].left, f);
            f(&self.nodes[i].key, &self.nodes[i].value);
            self.visit_inorder_from(self.nodes[i].right, f);
        }
    }

    pub fn visit_preorder<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.visit_preorder_from(self.root, &mut f);
    }

    fn visit_preorder_from<F: FnMut(&K, &V)>(&self, idx: Option<usize>, f: &mut F) {
        if let Some(i) = idx {
            f(&self.nodes[i].key, &self.nodes[i].value);
            self.visit_preorder_from(self.nodes[i].left, f);
            self.visit_preorder_from(self.nodes[i].right, f);
        }
    }

    pub fn visit_postorder<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.visit_postorder_from(self.root, &mut f);
    }

    fn visit_postorder_from<F: FnMut(&K, &V)>(&self, idx: Option<usize>, f: &mut F) {
        if let Some(i) = idx {
            self.visit_postorder_from(self.nodes[i].left, f);
            self.visit_postorder_from(self.nodes[i].right, f);
            f(&self.nodes[i].key, &self.nodes[i].value);
        }
    }

    pub fn visit_level_order<F: FnMut(&K, &V)>(&self, mut f: F) {
        let mut queue: VecDeque<usize> = VecDeque::new();
        if let Some(r) = self.root {
            queue.push_back(r);
        }
        while let Some(i) = queue.pop_front() {
            f(&self.nodes[i].key, &self.nodes[i].value);
            if let Some(l) = self.nodes[i].left {
                queue.push_back(l);
            }
            if let Some(r) = self.nodes[i].right {
                queue.push_back(r);
            }
        }
    }

    /// In-order traversal pruned to `[kmin, kmax]` (spec §4.G `itr_XX`).
    pub fn visit_range<F: FnMut(&K, &V)>(&self, kmin: &K, kmax: &K, mut f: F) {
        self.visit_range_from(self.root, kmin, kmax, &mut f);
    }

    fn visit_range_from<F: FnMut(&K, &V)>(&self, idx: Option<usize>, kmin: &K, kmax: &K, f: &mut F) {
        let Some(i) = idx else { return };
        let key_ref = &self.nodes[i].key;
        if key_ref > kmin {
            self.visit_range_from(self.nodes[i].left, kmin, kmax, f);
        }
        if key_ref >= kmin && key_ref <= kmax {
            f(&self.nodes[i].key, &self.nodes[i].value);
        }
        if key_ref < kmax {
            self.visit_range_from(self.nodes[i].right, kmin, kmax, f);
        }
    }

    /// Debug-only structural check: BST order, no red node with a red
    /// child, and equal black-height on every root-to-leaf path (spec
    /// §4.F invariant). Panics on violation; compiled out in release.
    #[cfg(debug_assertions)]
    pub fn debug_assert_invariants(&self) {
        if let Some(r) = self.root {
            assert!(!self.nodes[r].red, "root must be black");
            self.check_node(r);
        }
    }

    #[cfg(debug_assertions)]
    fn check_node(&self, idx: usize) -> usize {
        let node = &self.nodes[idx];
        if let Some(l) = node.left {
            assert!(self.nodes[l].key < node.key, "BST order violated (left)");
            assert!(!(node.red && self.nodes[l].red), "red-red violation");
        }
        if let Some(r) = node.right {
            assert!(self.nodes[r].key > node.key, "BST order violated (right)");
            assert!(!(node.red && self.nodes[r].red), "red-red violation");
        }
        let lh = node.left.map_or(1, |l| self.check_node(l));
        let rh = node.right.map_or(1, |r| self.check_node(r));
        assert_eq!(lh, rh, "black-height mismatch");
        lh + if node.red { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_inorder(t: &Tree<i32, i32>) -> Vec<i32> {
        let mut out = Vec::new();
        t.visit_inorder(|k, _| out.push(*k));
        out
    }

    #[test]
    fn insert_and_get() {
        let mut t = Tree::new();
        t.insert(5, 50);
        t.insert(2, 20);
        t.insert(8, 80);
        assert_eq!(t.get(&5), Some(&50));
        assert_eq!(t.get(&2), Some(&20));
        assert_eq!(t.get(&99), None);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let mut t = Tree::new();
        t.insert(1, "a");
        t.insert(1, "b");
        assert_eq!(t.get(&1), Some(&"b"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn inorder_is_sorted_after_many_inserts() {
        let mut t = Tree::new();
        let mut keys: Vec<i32> = (0..500).map(|i| (i * 37) % 997).collect();
        for &k in &keys {
            t.insert(k, k * 2);
            t.debug_assert_invariants();
        }
        keys.sort();
        keys.dedup();
        assert_eq!(keys_inorder(&t), keys);
    }

    #[test]
    fn remove_preserves_order_and_density() {
        let mut t = Tree::new();
        for k in 0..1000i32 {
            t.insert(k, k);
        }
        for k in (0..1000i32).step_by(2) {
            let removed = t.remove(&k);
            assert_eq!(removed, Some(k));
        }
        assert_eq!(t.len(), 500);
        let expected: Vec<i32> = (0..1000).filter(|k| k % 2 != 0).collect();
        assert_eq!(keys_inorder(&t), expected);
        t.debug_assert_invariants();
    }

    #[test]
    fn remove_half_of_five_hundred_random_order() {
        let mut t = Tree::new();
        let mut keys: Vec<i32> = (0..500).collect();
        // deterministic shuffle
        for i in 0..keys.len() {
            let j = (i * 131 + 7) % keys.len();
            keys.swap(i, j);
        }
        for &k in &keys {
            t.insert(k, k);
        }
        for &k in keys.iter().take(250) {
            assert_eq!(t.remove(&k), Some(k));
            t.debug_assert_invariants();
        }
        assert_eq!(t.len(), 250);
    }

    #[test]
    fn remove_missing_key_returns_none() {
        let mut t: Tree<i32, i32> = Tree::new();
        t.insert(1, 1);
        assert_eq!(t.remove(&42), None);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn remove_root_repeatedly_until_empty() {
        let mut t = Tree::new();
        for k in 0..64i32 {
            t.insert(k, k);
        }
        for k in 0..64i32 {
            assert_eq!(t.remove(&k), Some(k));
            t.debug_assert_invariants();
        }
        assert!(t.is_empty());
        assert_eq!(t.root, None);
    }

    #[test]
    fn min_and_max() {
        let mut t = Tree::new();
        for k in [5, 1, 9, 3, 7] {
            t.insert(k, k * 10);
        }
        assert_eq!(t.min(), Some((&1, &10)));
        assert_eq!(t.max(), Some((&9, &90)));
    }

    #[test]
    fn preorder_postorder_level_order_visit_all_nodes() {
        let mut t = Tree::new();
        for k in [5, 2, 8, 1, 3, 7, 9] {
            t.insert(k, k);
        }
        let mut pre = Vec::new();
        t.visit_preorder(|k, _| pre.push(*k));
        let mut post = Vec::new();
        t.visit_postorder(|k, _| post.push(*k));
        let mut level = Vec::new();
        t.visit_level_order(|k, _| level.push(*k));
        assert_eq!(pre.len(), 7);
        assert_eq!(post.len(), 7);
        assert_eq!(level.len(), 7);
        assert_eq!(level[0], 5); // root visited first in level order
    }

    #[test]
    fn visit_range_is_bounded_and_sorted() {
        let mut t = Tree::new();
        for k in 0..50i32 {
            t.insert(k, k);
        }
        let mut out = Vec::new();
        t.visit_range(&10, &20, |k, _| out.push(*k));
        let expected: Vec<i32> = (10..=20).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn insert_sorted_sequence_stays_balanced() {
        // Ascending-key insertion is the classic pathological case for an
        // unbalanced BST; the red-black invariants must hold throughout.
        let mut t = Tree::new();
        for k in 0..2000i32 {
            t.insert(k, ());
            if k % 97 == 0 {
                t.debug_assert_invariants();
            }
        }
        t.debug_assert_invariants();
        assert_eq!(t.len(), 2000);
    }
}
