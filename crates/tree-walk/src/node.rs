//! The node capability consumed by every traversal

/// A handle to a node that can enumerate its direct children
///
/// Implement this for a cheap handle type rather than for the node storage
/// itself: `&'a T`, `Rc<T>`, or an `(tree, id)` pair such as
/// [`TreeNode`](crate::arena::TreeNode). Traversals never mutate a node and
/// never assume a node occurs only once, so shared nodes are fine.
///
/// # Contract
///
/// `children` must return the node's direct children in a fixed order, and a
/// fresh iterator on every call. The sequence must be finite; calling
/// `children` again on the same node must yield an equivalent sequence.
///
/// # Example
///
/// ```
/// use tree_walk::Node;
///
/// struct Dir {
///     name: &'static str,
///     entries: Vec<Dir>,
/// }
///
/// impl<'a> Node for &'a Dir {
///     type Children = std::slice::Iter<'a, Dir>;
///
///     fn children(&self) -> Self::Children {
///         self.entries.iter()
///     }
/// }
///
/// let root = Dir {
///     name: "root",
///     entries: vec![Dir { name: "bin", entries: vec![] }],
/// };
/// let names: Vec<_> = tree_walk::depth_first_search(&root).map(|d| d.name).collect();
/// assert_eq!(names, ["root", "bin"]);
/// ```
pub trait Node: Sized {
    /// Iterator over the direct children, in order
    type Children: Iterator<Item = Self>;

    /// Returns a fresh iterator over this node's direct children
    fn children(&self) -> Self::Children;
}
