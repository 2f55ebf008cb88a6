//! Lazy level-order traversal

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{Result, TraversalError};
use crate::filter::{NoFilter, NodeFilter};
use crate::node::Node;

/// Iterator walking a root and its descendants in breadth-first level order
///
/// Nodes come out in non-decreasing depth. Within a level they follow the
/// order in which their parents were produced, then each parent's child
/// order. Produced nodes wait in a queue and their children are only
/// enumerated once the traversal reaches them, so memory grows with the
/// width of the tree.
///
/// Created by [`breadth_first_search`](crate::breadth_first_search) and
/// [`breadth_first_search_with`](crate::breadth_first_search_with).
pub struct BreadthFirst<N: Node, F = NoFilter> {
    /// Produced nodes whose children have not been enumerated yet
    pending: VecDeque<N>,
    /// Children of the pending node currently being drained
    current: Option<N::Children>,
    /// Next candidate; `None` once the traversal is exhausted
    staged: Option<N>,
    /// The filter already accepted `staged`
    accepted: bool,
    filter: F,
}

impl<N: Node + Clone, F: NodeFilter<N>> BreadthFirst<N, F> {
    /// Starts a traversal at `root`
    pub fn new(root: N, filter: F) -> Self {
        Self {
            pending: VecDeque::new(),
            current: None,
            staged: Some(root),
            accepted: false,
            filter,
        }
    }

    /// Returns true if another node will be produced
    ///
    /// Repeated calls do not advance the traversal or query the filter again.
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Returns the node the next call to `next` will produce
    pub fn peek(&mut self) -> Option<&N> {
        self.settle();
        self.staged.as_ref()
    }

    /// Produces the next node, or [`TraversalError::Exhausted`]
    pub fn try_next(&mut self) -> Result<N> {
        self.next().ok_or(TraversalError::Exhausted)
    }

    /// Always fails: a traversal cannot remove nodes
    pub fn remove(&mut self) -> Result<()> {
        Err(TraversalError::Unsupported)
    }

    /// Returns the filter, to inspect its state mid-traversal
    ///
    /// Named so it does not collide with [`Iterator::filter`].
    pub fn node_filter(&self) -> &F {
        &self.filter
    }

    /// Consumes the traversal and returns the filter with its state
    pub fn into_filter(self) -> F {
        self.filter
    }

    fn settle(&mut self) {
        while !self.accepted {
            let Some(node) = &self.staged else {
                return;
            };
            if self.filter.is_ignored(node) {
                trace!("breadth-first: ignoring subtree, {} pending", self.pending.len());
                self.advance();
            } else {
                self.accepted = true;
            }
        }
    }

    /// Stages the next child, opening pending nodes until one has children left
    fn advance(&mut self) {
        self.accepted = false;
        loop {
            if let Some(child) = self.current.as_mut().and_then(Iterator::next) {
                self.staged = Some(child);
                return;
            }
            match self.pending.pop_front() {
                Some(parent) => self.current = Some(parent.children()),
                None => break,
            }
        }
        self.current = None;
        self.staged = None;
        debug!("breadth-first traversal exhausted");
    }
}

impl<N: Node + Clone, F: NodeFilter<N>> Iterator for BreadthFirst<N, F> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.settle();
        let node = self.staged.take()?;
        self.pending.push_back(node.clone());
        self.advance();
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.staged {
            None => (0, Some(0)),
            Some(_) => (usize::from(self.accepted), None),
        }
    }
}

impl<N: Node + Clone, F: NodeFilter<N>> FusedIterator for BreadthFirst<N, F> {}

impl<N: Node + fmt::Debug, F> fmt::Debug for BreadthFirst<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("pending", &self.pending)
            .field("staged", &self.staged)
            .field("accepted", &self.accepted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_fn, Visited};
    use crate::traverse::test_tree::{sample, TestNode};
    use pretty_assertions::assert_eq;

    fn names<'a>(iter: impl Iterator<Item = &'a TestNode>) -> Vec<&'static str> {
        iter.map(|n| n.name).collect()
    }

    #[test]
    fn test_level_order() {
        let tree = sample();
        let bfs = BreadthFirst::new(&tree, NoFilter);
        assert_eq!(names(bfs), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_children_enumerated_lazily() {
        let tree = sample();
        let mut bfs = BreadthFirst::new(&tree, NoFilter);

        assert_eq!(bfs.next().map(|n| n.name), Some("A"));
        // A was dequeued to stage B; C is still behind the cursor.
        assert!(bfs.pending.is_empty());
        assert_eq!(bfs.next().map(|n| n.name), Some("B"));
        assert_eq!(bfs.pending.len(), 1);
        assert_eq!(bfs.next().map(|n| n.name), Some("C"));
        // A's cursor ran dry, so B was dequeued to stage D.
        assert_eq!(names(bfs.pending.iter().copied()), vec!["C"]);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let tree = sample();
        let mut calls = Vec::new();
        let mut bfs = BreadthFirst::new(
            &tree,
            filter_fn(|n: &&TestNode| {
                calls.push(n.name);
                n.name == "C"
            }),
        );

        assert_eq!(bfs.next().map(|n| n.name), Some("A"));
        assert_eq!(bfs.next().map(|n| n.name), Some("B"));
        assert_eq!(bfs.peek().map(|n| n.name), Some("D"));
        assert_eq!(bfs.peek().map(|n| n.name), Some("D"));
        assert!(bfs.has_next());
        assert_eq!(names(bfs.by_ref()), vec!["D", "E"]);
        drop(bfs);

        assert_eq!(calls, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_errors() {
        let leaf = TestNode::leaf("X");
        let mut bfs = BreadthFirst::new(&leaf, NoFilter);
        assert_eq!(bfs.remove(), Err(TraversalError::Unsupported));
        assert_eq!(bfs.try_next().map(|n| n.name), Ok("X"));
        assert_eq!(bfs.try_next().map(|n| n.name), Err(TraversalError::Exhausted));
        assert!(bfs.next().is_none());
    }

    #[test]
    fn test_filter_state_mid_traversal() {
        let tree = sample();
        let mut bfs = BreadthFirst::new(&tree, Visited::by_key(|n: &&TestNode| n.name));

        assert_eq!(names(bfs.by_ref().take(3)), vec!["A", "B", "C"]);
        assert_eq!(bfs.node_filter().len(), 3);
        assert!(!bfs.node_filter().contains(&"D"));

        bfs.by_ref().for_each(drop);
        assert_eq!(bfs.into_filter().len(), 5);
    }

    #[test]
    fn test_size_hint() {
        let tree = sample();
        let mut bfs = BreadthFirst::new(&tree, NoFilter);
        assert_eq!(bfs.size_hint(), (0, None));
        assert!(bfs.has_next());
        assert_eq!(bfs.size_hint(), (1, None));
        bfs.next();
        assert_eq!(bfs.size_hint(), (0, None));
        bfs.by_ref().for_each(drop);
        assert_eq!(bfs.size_hint(), (0, Some(0)));
    }
}
