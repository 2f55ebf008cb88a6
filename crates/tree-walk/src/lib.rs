//! Tree Walk Library
//!
//! Lazy, pull-based traversal of tree-shaped structures in depth-first
//! (preorder) or breadth-first (level) order, with a filter hook that can
//! prune whole subtrees.
//!
//! # Core Concepts
//!
//! - **Node**: a handle that can list its direct children, in order
//! - **NodeFilter**: queried once per node occurrence; `true` prunes the
//!   node and its subtree. Filters may keep state, which is how shared nodes
//!   and cycles are handled (see [`Visited`])
//! - **DepthFirst / BreadthFirst**: the traversal iterators. They own their
//!   frontier explicitly, so deep trees never grow the call stack
//!
//! # Example
//!
//! ```
//! use tree_walk::prelude::*;
//!
//! struct Item {
//!     name: &'static str,
//!     children: Vec<Item>,
//! }
//!
//! impl<'a> Node for &'a Item {
//!     type Children = std::slice::Iter<'a, Item>;
//!
//!     fn children(&self) -> Self::Children {
//!         self.children.iter()
//!     }
//! }
//!
//! let leaf = |name| Item { name, children: vec![] };
//! let root = Item {
//!     name: "A",
//!     children: vec![
//!         Item { name: "B", children: vec![leaf("D"), leaf("E")] },
//!         leaf("C"),
//!     ],
//! };
//!
//! let dfs: Vec<_> = depth_first_search(&root).map(|n| n.name).collect();
//! assert_eq!(dfs, ["A", "B", "D", "E", "C"]);
//!
//! let bfs: Vec<_> = breadth_first_search(&root).map(|n| n.name).collect();
//! assert_eq!(bfs, ["A", "B", "C", "D", "E"]);
//!
//! let no_b = filter_fn(|n: &&Item| n.name == "B");
//! let pruned: Vec<_> = depth_first_search_with(&root, no_b).map(|n| n.name).collect();
//! assert_eq!(pruned, ["A", "C"]);
//! ```

pub mod arena;
pub mod error;
pub mod filter;
pub mod fs;
mod node;
pub mod traverse;

pub use error::TraversalError;
pub use filter::{filter_fn, NoFilter, NodeFilter, Visited};
pub use node::Node;
pub use traverse::{BreadthFirst, DepthFirst, TraversalOrder, Walk};

/// Walks `root` and its descendants in depth-first preorder
pub fn depth_first_search<N: Node>(root: N) -> DepthFirst<N> {
    DepthFirst::new(root, NoFilter)
}

/// Walks `root` in depth-first preorder, skipping subtrees `filter` rejects
///
/// Pass `&mut filter` to keep the filter's state after the traversal.
pub fn depth_first_search_with<N, F>(root: N, filter: F) -> DepthFirst<N, F>
where
    N: Node,
    F: NodeFilter<N>,
{
    DepthFirst::new(root, filter)
}

/// Walks `root` and its descendants in breadth-first level order
pub fn breadth_first_search<N: Node + Clone>(root: N) -> BreadthFirst<N> {
    BreadthFirst::new(root, NoFilter)
}

/// Walks `root` in breadth-first level order, skipping subtrees `filter` rejects
///
/// Pass `&mut filter` to keep the filter's state after the traversal.
pub fn breadth_first_search_with<N, F>(root: N, filter: F) -> BreadthFirst<N, F>
where
    N: Node + Clone,
    F: NodeFilter<N>,
{
    BreadthFirst::new(root, filter)
}

/// Walks `root` in an order chosen at runtime
pub fn walk<N: Node + Clone>(root: N, order: TraversalOrder) -> Walk<N> {
    Walk::new(root, order, NoFilter)
}

/// Walks `root` in an order chosen at runtime, skipping subtrees `filter` rejects
pub fn walk_with<N, F>(root: N, order: TraversalOrder, filter: F) -> Walk<N, F>
where
    N: Node + Clone,
    F: NodeFilter<N>,
{
    Walk::new(root, order, filter)
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::arena::{NodeId, Tree, TreeNode, TreeTraversal};
    pub use crate::filter::{filter_fn, NoFilter, NodeFilter, Visited};
    pub use crate::node::Node;
    pub use crate::traverse::{BreadthFirst, DepthFirst, TraversalOrder, Walk};
    pub use crate::{
        breadth_first_search, breadth_first_search_with, depth_first_search,
        depth_first_search_with, walk, walk_with, TraversalError,
    };
}
