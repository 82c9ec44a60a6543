//! Weighted tree capability consumed by layouts and controllers.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only access to a weighted tree.
///
/// Nodes are lightweight handles owned by the implementation. A weight that
/// is absent from the underlying representation is reported as `0.0` and a
/// missing label as the empty string; neither is an error.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use treemap_core::WeightedTree;
///
/// /// A root with `n` equally weighted leaves.
/// struct Fan(usize);
///
/// impl WeightedTree for Fan {
///     type Node = usize;
///
///     fn root(&self) -> usize { 0 }
///     fn children(&self, node: usize) -> Vec<usize> {
///         if node == 0 { (1..=self.0).collect() } else { Vec::new() }
///     }
///     fn parent(&self, node: usize) -> Option<usize> {
///         (node != 0).then_some(0)
///     }
///     fn weight(&self, node: usize) -> f64 {
///         if node == 0 { self.0 as f64 } else { 1.0 }
///     }
///     fn label(&self, _node: usize) -> Cow<'_, str> { Cow::Borrowed("") }
/// }
///
/// let fan = Fan(3);
/// assert!(fan.has_children(0));
/// assert_eq!(fan.children(0), vec![1, 2, 3]);
/// ```
pub trait WeightedTree {
    /// Node handle type.
    type Node: Copy + Eq + Hash + Debug;

    /// The root node.
    fn root(&self) -> Self::Node;

    /// Children of `node`, in model order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Whether `node` has at least one child.
    fn has_children(&self, node: Self::Node) -> bool {
        !self.children(node).is_empty()
    }

    /// Parent of `node`, `None` for the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Non-negative weight of `node`.
    fn weight(&self, node: Self::Node) -> f64;

    /// Display label of `node`.
    fn label(&self, node: Self::Node) -> Cow<'_, str>;
}

/// Iterator over the strict ancestors of a node, nearest first.
#[derive(Debug)]
pub struct Ancestors<'a, T: WeightedTree + ?Sized> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: WeightedTree + ?Sized> Iterator for Ancestors<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Walk from `node`'s parent up to the root.
pub fn ancestors<T: WeightedTree + ?Sized>(tree: &T, node: T::Node) -> Ancestors<'_, T> {
    Ancestors {
        tree,
        next: tree.parent(node),
    }
}

/// Depth of `node` below the root (the root has depth 0).
pub fn depth<T: WeightedTree + ?Sized>(tree: &T, node: T::Node) -> usize {
    ancestors(tree, node).count()
}
