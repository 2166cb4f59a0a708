//! Fibonacci heap with arena-backed nodes
//!
//! A Fibonacci heap is a mergeable priority queue with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min
//!
//! The structure is a collection of heap-ordered trees whose roots form a
//! circular doubly linked list, with a pointer to the minimum root. Instead
//! of raw node pointers, every node lives in a contiguous arena and all
//! parent/child/sibling links are arena indices; a freed slot goes onto a
//! free list and is only reused by a later insert.

use crate::{Error, Result};

/// Handle to a live entry in a [`FibonacciHeap`].
///
/// The handle is a stable arena index: it stays valid from `insert` until the
/// entry is removed by `extract_min`. Passing a handle whose entry has been
/// extracted returns [`Error::InvalidHandle`] while the slot is still vacant;
/// once the slot has been reused by a later insert the handle aliases the new
/// entry, so callers must not retain handles past extraction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeHandle(usize);

#[derive(Debug)]
struct Node<T, P> {
    item: T,
    key: P,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    marked: bool,
}

/// Fibonacci heap ordered by `P`, smallest key first.
///
/// Entries with equal keys may be returned in either order. Keys are totals
/// supplied by the caller; the heap never recomputes them, so a key must be
/// resynchronized through [`FibonacciHeap::decrease_key`] whenever the
/// underlying cost changes.
///
/// # Example
///
/// ```rust
/// use skyroute::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert("item", 5);
/// heap.decrease_key(handle, 1).unwrap();
/// assert_eq!(heap.find_min().unwrap(), (&1, &"item"));
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<T, P: Ord> {
    slots: Vec<Option<Node<T, P>>>,
    free: Vec<usize>,
    min: Option<usize>,
    len: usize,
}

impl<T, P: Ord> Default for FibonacciHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FibonacciHeap<T, P> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        FibonacciHeap {
            slots: Vec::new(),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with arena space for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        FibonacciHeap {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Returns true if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of live entries, tracked incrementally.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts `item` keyed by `key` as a new singleton root tree.
    ///
    /// O(1): the node is spliced into the root list and the minimum pointer
    /// updated if the new key is smaller.
    pub fn insert(&mut self, item: T, key: P) -> NodeHandle {
        let index = self.alloc(Node {
            item,
            key,
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            marked: false,
        });
        self.node_mut(index).left = index;
        self.node_mut(index).right = index;

        match self.min {
            None => self.min = Some(index),
            Some(min) => {
                self.splice(index, min);
                if self.node(index).key < self.node(min).key {
                    self.min = Some(index);
                }
            }
        }
        self.len += 1;
        NodeHandle(index)
    }

    /// Returns the minimum key and its item without removing them.
    ///
    /// Fails with [`Error::EmptyHeap`] when the heap holds no entries.
    pub fn find_min(&self) -> Result<(&P, &T)> {
        let min = self.min.ok_or(Error::EmptyHeap)?;
        let node = self.node(min);
        Ok((&node.key, &node.item))
    }

    /// Removes and returns the minimum key and its item.
    ///
    /// O(log n) amortized: the minimum's children are promoted to roots,
    /// then equal-degree root trees are consolidated pairwise until all root
    /// degrees are distinct. Fails with [`Error::EmptyHeap`] when empty.
    pub fn extract_min(&mut self) -> Result<(P, T)> {
        let min = self.min.ok_or(Error::EmptyHeap)?;

        // Promote the minimum's children to the root list.
        if let Some(first_child) = self.node(min).child {
            let mut children = Vec::with_capacity(self.node(min).degree);
            let mut current = first_child;
            loop {
                children.push(current);
                current = self.node(current).right;
                if current == first_child {
                    break;
                }
            }
            for child in children {
                self.node_mut(child).parent = None;
                self.node_mut(child).marked = false;
                self.splice(child, min);
            }
            self.node_mut(min).child = None;
        }

        let right = self.node(min).right;
        if right == min {
            // The removed root was the only one; the heap is now empty.
            self.min = None;
        } else {
            self.unlink(min);
            self.consolidate(right);
        }

        let node = self.release(min);
        self.len -= 1;
        Ok((node.key, node.item))
    }

    /// Lowers the key of the entry behind `handle` to `new_key`.
    ///
    /// O(1) amortized. Fails with [`Error::KeyNotDecreased`] if `new_key` is
    /// not strictly smaller than the current key (the heap is left untouched)
    /// and with [`Error::InvalidHandle`] if the entry was already extracted.
    pub fn decrease_key(&mut self, handle: NodeHandle, new_key: P) -> Result<()> {
        let index = handle.0;
        if !matches!(self.slots.get(index), Some(Some(_))) {
            return Err(Error::InvalidHandle(index));
        }
        if new_key >= self.node(index).key {
            return Err(Error::KeyNotDecreased);
        }
        self.node_mut(index).key = new_key;

        if let Some(parent) = self.node(index).parent {
            if self.node(index).key < self.node(parent).key {
                self.cut(index, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if self.node(index).key < self.node(min).key {
                self.min = Some(index);
            }
        }
        Ok(())
    }

    /// Merges root trees of equal degree until all root degrees are distinct,
    /// then rebuilds the root list and locates the new minimum.
    fn consolidate(&mut self, start: usize) {
        let mut roots = Vec::new();
        let mut current = start;
        loop {
            roots.push(current);
            current = self.node(current).right;
            if current == start {
                break;
            }
        }

        // Degree-indexed slots; only O(log n) distinct degrees can survive.
        let mut by_degree: Vec<Option<usize>> = vec![None; degree_hint(self.len)];
        for mut x in roots {
            let mut degree = self.node(x).degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree] else { break };
                by_degree[degree] = None;
                // The root with the larger key becomes a child of the other.
                if self.node(y).key < self.node(x).key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }
            if degree >= by_degree.len() {
                by_degree.resize(degree + 1, None);
            }
            by_degree[degree] = Some(x);
        }

        self.min = None;
        for x in by_degree.into_iter().flatten() {
            match self.min {
                None => {
                    self.node_mut(x).left = x;
                    self.node_mut(x).right = x;
                    self.min = Some(x);
                }
                Some(min) => {
                    self.splice(x, min);
                    if self.node(x).key < self.node(min).key {
                        self.min = Some(x);
                    }
                }
            }
        }
    }

    /// Removes root `y` from the root list and attaches it as a child of `x`,
    /// clearing its mark and incrementing `x`'s degree.
    fn link(&mut self, y: usize, x: usize) {
        self.unlink(y);
        self.node_mut(y).parent = Some(x);
        self.node_mut(y).marked = false;
        match self.node(x).child {
            Some(child) => self.splice(y, child),
            None => {
                self.node_mut(y).left = y;
                self.node_mut(y).right = y;
                self.node_mut(x).child = Some(y);
            }
        }
        self.node_mut(x).degree += 1;
    }

    /// Detaches `index` from its parent and splices it into the root list,
    /// clearing its mark.
    fn cut(&mut self, index: usize, parent: usize) {
        let right = self.node(index).right;
        if right == index {
            self.node_mut(parent).child = None;
        } else {
            self.unlink(index);
            if self.node(parent).child == Some(index) {
                self.node_mut(parent).child = Some(right);
            }
        }
        self.node_mut(parent).degree -= 1;

        match self.min {
            Some(min) => self.splice(index, min),
            None => {
                self.node_mut(index).left = index;
                self.node_mut(index).right = index;
                self.min = Some(index);
            }
        }
        self.node_mut(index).parent = None;
        self.node_mut(index).marked = false;
    }

    /// Walks up from a node that just lost a child: an unmarked non-root
    /// ancestor is marked and the walk stops; a marked ancestor is cut as
    /// well and the walk continues. Roots are never marked.
    fn cascading_cut(&mut self, start: usize) {
        let mut current = start;
        while let Some(parent) = self.node(current).parent {
            if !self.node(current).marked {
                self.node_mut(current).marked = true;
                break;
            }
            self.cut(current, parent);
            current = parent;
        }
    }

    /// Inserts `a` into the circular sibling list containing `b`, just left
    /// of `b`. `a`'s previous links are overwritten.
    fn splice(&mut self, a: usize, b: usize) {
        let b_left = self.node(b).left;
        self.node_mut(a).right = b;
        self.node_mut(a).left = b_left;
        self.node_mut(b_left).right = a;
        self.node_mut(b).left = a;
    }

    /// Removes `a` from its circular sibling list. `a`'s own links are left
    /// stale and must be rewritten before reuse.
    fn unlink(&mut self, a: usize) {
        let (left, right) = {
            let node = self.node(a);
            (node.left, node.right)
        };
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
    }

    fn alloc(&mut self, node: Node<T, P>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Node<T, P> {
        let node = self.slots[index].take().expect("released slot must be occupied");
        self.free.push(index);
        node
    }

    fn node(&self, index: usize) -> &Node<T, P> {
        self.slots[index].as_ref().expect("linked slot must be occupied")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T, P> {
        self.slots[index].as_mut().expect("linked slot must be occupied")
    }

    /// Checks every structural invariant: sibling lists are consistent
    /// doubly linked rings, parent keys never exceed child keys, degrees
    /// match child counts, no root is marked, and every live node is
    /// reachable.
    #[cfg(test)]
    fn audit(&self) {
        let Some(min) = self.min else {
            assert_eq!(self.len, 0, "empty heap with nonzero len");
            return;
        };

        let mut pending = Vec::new();
        let mut current = min;
        loop {
            let node = self.node(current);
            assert!(node.parent.is_none(), "root {} has a parent", current);
            assert!(!node.marked, "marked root {}", current);
            assert!(self.node(min).key <= node.key, "min is not minimal");
            assert_eq!(self.node(node.right).left, current);
            pending.push(current);
            current = node.right;
            if current == min {
                break;
            }
        }

        let mut total = 0;
        while let Some(index) = pending.pop() {
            total += 1;
            let node = self.node(index);
            let Some(first_child) = node.child else {
                assert_eq!(node.degree, 0, "childless node {} has degree", index);
                continue;
            };
            let mut count = 0;
            let mut child = first_child;
            loop {
                let child_node = self.node(child);
                assert_eq!(child_node.parent, Some(index));
                assert!(node.key <= child_node.key, "heap order violated at {}", child);
                assert_eq!(self.node(child_node.right).left, child);
                pending.push(child);
                count += 1;
                child = child_node.right;
                if child == first_child {
                    break;
                }
            }
            assert_eq!(count, node.degree, "degree mismatch at {}", index);
        }
        assert_eq!(total, self.len, "unreachable live entries");
    }
}

/// Initial size for the consolidation table. `log2(len) + 2` covers the
/// maximum root degree in practice; `consolidate` still grows the table on
/// demand.
fn degree_hint(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut heap = FibonacciHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert("a", 5);
        heap.insert("b", 3);
        heap.insert("c", 7);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.find_min().unwrap(), (&3, &"b"));

        assert_eq!(heap.extract_min().unwrap(), (3, "b"));
        assert_eq!(heap.find_min().unwrap(), (&5, &"a"));
        heap.audit();
    }

    #[test]
    fn decrease_key_reorders_entries() {
        let mut heap = FibonacciHeap::new();
        heap.insert("a", 10);
        let b = heap.insert("b", 20);
        let c = heap.insert("c", 30);

        heap.decrease_key(b, 5).unwrap();
        assert_eq!(heap.find_min().unwrap(), (&5, &"b"));

        heap.decrease_key(c, 1).unwrap();
        assert_eq!(heap.find_min().unwrap(), (&1, &"c"));
        heap.audit();
    }

    #[test]
    fn decrease_key_rejects_non_decreasing_keys() {
        let mut heap = FibonacciHeap::new();
        let handle = heap.insert("a", 10);
        assert!(matches!(
            heap.decrease_key(handle, 10),
            Err(Error::KeyNotDecreased)
        ));
        assert!(matches!(
            heap.decrease_key(handle, 11),
            Err(Error::KeyNotDecreased)
        ));
        assert_eq!(heap.find_min().unwrap(), (&10, &"a"));
        heap.audit();
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut heap = FibonacciHeap::new();
        let handle = heap.insert("a", 1);
        heap.insert("b", 2);
        heap.extract_min().unwrap();
        assert!(matches!(
            heap.decrease_key(handle, 0),
            Err(Error::InvalidHandle(_))
        ));
    }

    #[test]
    fn cascading_cuts_leave_no_marked_roots() {
        let mut heap = FibonacciHeap::new();
        let handles: Vec<_> = (0..64).map(|k| heap.insert(k, k * 10)).collect();

        // Force a consolidation so the entries form real trees.
        assert_eq!(heap.extract_min().unwrap(), (0, 0));
        heap.audit();

        // Repeated decreases below the current minimum force cuts, marking
        // ancestors and eventually cascading when a marked node loses a
        // second child. The audit asserts the mark/degree bookkeeping after
        // every structural change.
        let mut next_key = 0i64;
        for handle in handles.iter().skip(1).rev() {
            next_key -= 1;
            heap.decrease_key(*handle, next_key).unwrap();
            heap.audit();
        }

        // Entries drain in sorted key order.
        let mut previous = i64::MIN;
        while let Ok((key, _)) = heap.extract_min() {
            assert!(key >= previous);
            previous = key;
            heap.audit();
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn arena_slots_are_reused() {
        let mut heap = FibonacciHeap::new();
        for round in 0..3 {
            for k in 0..16 {
                heap.insert((), round * 100 + k);
            }
            while heap.extract_min().is_ok() {}
        }
        // Three full drains through the same 16 slots.
        assert!(heap.slots.len() <= 16);
        assert!(heap.is_empty());
    }
}
