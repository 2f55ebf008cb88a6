//! Traversal support for index-based trees
//!
//! Arena-backed structures keep nodes in one container and refer to them by
//! index, so a node alone cannot list its children. [`TreeNode`] pairs the
//! container with an id to form a handle that implements [`Node`].

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::filter::{NoFilter, NodeFilter};
use crate::node::Node;
use crate::traverse::{TraversalOrder, Walk};

/// Index of a node in an arena-backed [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub const fn get(self) -> usize {
        self.0
    }
}

/// An index-based hierarchical structure
///
/// Implementations only describe the shape. The same id may appear in more
/// than one children list; pair the traversal with a
/// [`Visited`](crate::filter::Visited) filter when it does.
pub trait Tree {
    /// Get the root node ID
    fn root(&self) -> NodeId;

    /// Iterate over children of a node, in order
    ///
    /// Returns an empty iterator for leaf nodes or invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;
}

/// A `(tree, id)` handle usable as a traversal [`Node`]
pub struct TreeNode<'a, T> {
    tree: &'a T,
    id: NodeId,
}

impl<'a, T: Tree> TreeNode<'a, T> {
    pub fn new(tree: &'a T, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a T {
        self.tree
    }
}

impl<T> Clone for TreeNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreeNode<'_, T> {}

impl<T> PartialEq for TreeNode<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl<T> Eq for TreeNode<'_, T> {}

impl<T> Hash for TreeNode<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for TreeNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TreeNode").field(&self.id).finish()
    }
}

/// Children of a [`TreeNode`]
pub struct TreeChildren<'a, T> {
    tree: &'a T,
    ids: Box<dyn Iterator<Item = NodeId> + 'a>,
}

impl<'a, T> Iterator for TreeChildren<'a, T> {
    type Item = TreeNode<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        Some(TreeNode {
            tree: self.tree,
            id,
        })
    }
}

impl<'a, T: Tree> Node for TreeNode<'a, T> {
    type Children = TreeChildren<'a, T>;

    fn children(&self) -> Self::Children {
        TreeChildren {
            tree: self.tree,
            ids: self.tree.children(self.id),
        }
    }
}

/// Extension trait walking a [`Tree`] by id
///
/// This trait is automatically implemented for all types that implement `Tree`.
pub trait TreeTraversal: Tree + Sized {
    /// Walk the tree from the root in the given order
    fn walk(&self, order: TraversalOrder) -> Walk<TreeNode<'_, Self>> {
        self.walk_from(self.root(), order)
    }

    /// Walk the tree starting from a specific node
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> Walk<TreeNode<'_, Self>> {
        Walk::new(TreeNode::new(self, start), order, NoFilter)
    }

    /// Walk the tree from the root, skipping subtrees the filter rejects
    fn walk_with<'a, F>(&'a self, order: TraversalOrder, filter: F) -> Walk<TreeNode<'a, Self>, F>
    where
        F: NodeFilter<TreeNode<'a, Self>>,
    {
        Walk::new(TreeNode::new(self, self.root()), order, filter)
    }
}

// Blanket implementation for all Tree types
impl<T: Tree> TreeTraversal for T {}
