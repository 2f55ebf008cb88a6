//! Lazy preorder traversal

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::error::{Result, TraversalError};
use crate::filter::{NoFilter, NodeFilter};
use crate::node::Node;

/// Iterator walking a root and its descendants in depth-first preorder
///
/// A node is produced before its descendants, and siblings come out in the
/// order their parent lists them. The frontier is a stack holding one child
/// cursor per ancestor of the staged node, so memory grows with depth rather
/// than with the size of the tree.
///
/// Created by [`depth_first_search`](crate::depth_first_search) and
/// [`depth_first_search_with`](crate::depth_first_search_with).
pub struct DepthFirst<N: Node, F = NoFilter> {
    /// Remaining children of every ancestor on the current path
    stack: SmallVec<[N::Children; 8]>,
    /// Next candidate; `None` once the traversal is exhausted
    staged: Option<N>,
    /// The filter already accepted `staged`
    accepted: bool,
    filter: F,
}

impl<N: Node, F: NodeFilter<N>> DepthFirst<N, F> {
    /// Starts a traversal at `root`
    pub fn new(root: N, filter: F) -> Self {
        Self {
            stack: SmallVec::new(),
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

    /// Skips staged nodes until one passes the filter or the traversal ends
    fn settle(&mut self) {
        while !self.accepted {
            let Some(node) = &self.staged else {
                return;
            };
            if self.filter.is_ignored(node) {
                trace!("depth-first: ignoring subtree at depth {}", self.stack.len());
                self.advance();
            } else {
                self.accepted = true;
            }
        }
    }

    /// Stages the next child of the deepest ancestor that has one left
    fn advance(&mut self) {
        self.accepted = false;
        while let Some(top) = self.stack.last_mut() {
            if let Some(child) = top.next() {
                self.staged = Some(child);
                return;
            }
            self.stack.pop();
        }
        self.staged = None;
        debug!("depth-first traversal exhausted");
    }
}

impl<N: Node, F: NodeFilter<N>> Iterator for DepthFirst<N, F> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.settle();
        let node = self.staged.take()?;
        self.stack.push(node.children());
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

impl<N: Node, F: NodeFilter<N>> FusedIterator for DepthFirst<N, F> {}

impl<N: Node + fmt::Debug, F> fmt::Debug for DepthFirst<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("depth", &self.stack.len())
            .field("staged", &self.staged)
            .field("accepted", &self.accepted)
            .finish_non_exhaustive()
    }
}
