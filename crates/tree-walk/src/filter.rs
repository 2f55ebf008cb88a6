//! Filters deciding which subtrees a traversal skips
//!
//! A filter is consulted once for every node occurrence the traversal
//! reaches, in traversal order, before any of that node's children are
//! looked at. Answering `true` drops the node together with its whole
//! subtree.
//!
//! Filters may keep state between calls. [`Visited`] uses that to turn a
//! structure with shared nodes (or cycles) into a tree-shaped traversal.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Decides whether a node and everything below it is ignored
pub trait NodeFilter<N> {
    /// Returns true if `node` and its entire subtree must be skipped
    fn is_ignored(&mut self, node: &N) -> bool;
}

/// The default filter: nothing is ignored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl<N> NodeFilter<N> for NoFilter {
    #[inline]
    fn is_ignored(&mut self, _node: &N) -> bool {
        false
    }
}

impl<N, F: NodeFilter<N> + ?Sized> NodeFilter<N> for &mut F {
    #[inline]
    fn is_ignored(&mut self, node: &N) -> bool {
        (**self).is_ignored(node)
    }
}

impl<N, F: NodeFilter<N> + ?Sized> NodeFilter<N> for Box<F> {
    #[inline]
    fn is_ignored(&mut self, node: &N) -> bool {
        (**self).is_ignored(node)
    }
}

/// A filter backed by a closure, created with [`filter_fn`]
#[derive(Clone)]
pub struct FilterFn<F>(F);

impl<F> fmt::Debug for FilterFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFn").finish_non_exhaustive()
    }
}

impl<N, F: FnMut(&N) -> bool> NodeFilter<N> for FilterFn<F> {
    #[inline]
    fn is_ignored(&mut self, node: &N) -> bool {
        (self.0)(node)
    }
}

/// Wraps a closure returning true for ignored nodes into a [`NodeFilter`]
///
/// ```
/// use tree_walk::filter::{filter_fn, NodeFilter};
///
/// let mut small = filter_fn(|n: &u32| *n < 10);
/// assert!(small.is_ignored(&3));
/// assert!(!small.is_ignored(&30));
/// ```
pub fn filter_fn<F>(f: F) -> FilterFn<F> {
    FilterFn(f)
}

/// Ignores every node whose identity has already been seen
///
/// The first occurrence of a node, in traversal order, is kept; later
/// occurrences are ignored together with their subtrees. This makes a
/// structure with shared nodes come out with each node exactly once, and
/// stops a cyclic structure from being walked forever.
///
/// Identity is the node handle itself for [`Visited::new`], or whatever key
/// [`Visited::by_key`] extracts (an id, a path, a pointer).
pub struct Visited<K, F> {
    seen: HashSet<K>,
    key: F,
}

impl<N: Clone> Visited<N, fn(&N) -> N> {
    /// Creates a filter keyed on the node handle
    pub fn new() -> Self {
        Self::by_key(N::clone)
    }
}

impl<N: Clone> Default for Visited<N, fn(&N) -> N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, F> Visited<K, F> {
    /// Creates a filter keyed on `key(node)`
    pub fn by_key(key: F) -> Self {
        Self {
            seen: HashSet::new(),
            key,
        }
    }

    /// Number of distinct identities seen so far
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if no node has been seen yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forgets every identity, so the filter can guard another traversal
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl<K: Hash + Eq, F> Visited<K, F> {
    /// Returns true if `key` has been seen
    pub fn contains(&self, key: &K) -> bool {
        self.seen.contains(key)
    }
}

impl<K, F> fmt::Debug for Visited<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visited")
            .field("seen", &self.seen.len())
            .finish_non_exhaustive()
    }
}

impl<N, K, F> NodeFilter<N> for Visited<K, F>
where
    K: Hash + Eq,
    F: FnMut(&N) -> K,
{
    fn is_ignored(&mut self, node: &N) -> bool {
        !self.seen.insert((self.key)(node))
    }
}
