//! Traversal iterators and runtime order selection

mod breadth_first;
mod depth_first;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;

use std::iter::FusedIterator;
use std::str::FromStr;

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{NoFilter, NodeFilter};
use crate::node::Node;

/// Order in which a traversal produces nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TraversalOrder {
    /// Parent before children, whole subtrees one after another (preorder)
    #[default]
    #[display(fmt = "depth-first")]
    DepthFirst,
    /// Level by level, from the root outwards
    #[display(fmt = "breadth-first")]
    BreadthFirst,
}

/// Error returned when parsing an unknown [`TraversalOrder`]
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "unknown traversal order `{}`", _0)]
pub struct ParseOrderError(String);

impl std::error::Error for ParseOrderError {}

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth-first" | "depth_first" | "dfs" | "preorder" | "pre-order" => {
                Ok(TraversalOrder::DepthFirst)
            }
            "breadth-first" | "breadth_first" | "bfs" | "level-order" | "level_order" => {
                Ok(TraversalOrder::BreadthFirst)
            }
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

/// A traversal whose order was chosen at runtime
///
/// Created by [`walk`](crate::walk) and [`walk_with`](crate::walk_with).
#[derive(Debug)]
pub enum Walk<N: Node, F = NoFilter> {
    /// Preorder traversal
    DepthFirst(DepthFirst<N, F>),
    /// Level-order traversal
    BreadthFirst(BreadthFirst<N, F>),
}

impl<N: Node + Clone, F: NodeFilter<N>> Walk<N, F> {
    /// Starts a traversal at `root` in the given order
    pub fn new(root: N, order: TraversalOrder, filter: F) -> Self {
        match order {
            TraversalOrder::DepthFirst => Walk::DepthFirst(DepthFirst::new(root, filter)),
            TraversalOrder::BreadthFirst => Walk::BreadthFirst(BreadthFirst::new(root, filter)),
        }
    }

    /// The order this traversal follows
    pub fn order(&self) -> TraversalOrder {
        match self {
            Walk::DepthFirst(_) => TraversalOrder::DepthFirst,
            Walk::BreadthFirst(_) => TraversalOrder::BreadthFirst,
        }
    }

    /// Returns true if another node will be produced
    pub fn has_next(&mut self) -> bool {
        match self {
            Walk::DepthFirst(it) => it.has_next(),
            Walk::BreadthFirst(it) => it.has_next(),
        }
    }

    /// Returns the node the next call to `next` will produce
    pub fn peek(&mut self) -> Option<&N> {
        match self {
            Walk::DepthFirst(it) => it.peek(),
            Walk::BreadthFirst(it) => it.peek(),
        }
    }

    /// Produces the next node, or [`TraversalError::Exhausted`](crate::TraversalError::Exhausted)
    pub fn try_next(&mut self) -> Result<N> {
        match self {
            Walk::DepthFirst(it) => it.try_next(),
            Walk::BreadthFirst(it) => it.try_next(),
        }
    }

    /// Always fails: a traversal cannot remove nodes
    pub fn remove(&mut self) -> Result<()> {
        match self {
            Walk::DepthFirst(it) => it.remove(),
            Walk::BreadthFirst(it) => it.remove(),
        }
    }

    /// Returns the filter, to inspect its state mid-traversal
    pub fn node_filter(&self) -> &F {
        match self {
            Walk::DepthFirst(it) => it.node_filter(),
            Walk::BreadthFirst(it) => it.node_filter(),
        }
    }

    /// Consumes the traversal and returns the filter with its state
    pub fn into_filter(self) -> F {
        match self {
            Walk::DepthFirst(it) => it.into_filter(),
            Walk::BreadthFirst(it) => it.into_filter(),
        }
    }
}

impl<N: Node + Clone, F: NodeFilter<N>> Iterator for Walk<N, F> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        match self {
            Walk::DepthFirst(it) => it.next(),
            Walk::BreadthFirst(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Walk::DepthFirst(it) => it.size_hint(),
            Walk::BreadthFirst(it) => it.size_hint(),
        }
    }
}

impl<N: Node + Clone, F: NodeFilter<N>> FusedIterator for Walk<N, F> {}
