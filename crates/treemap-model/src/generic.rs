//! Arena-backed weighted tree built programmatically.

use std::borrow::Cow;
use treemap_core::WeightedTree;

/// Handle of a node inside a [`GenericTreeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    label: String,
    weight: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: T,
}

/// Weighted tree with explicit parent links and per-node user data.
///
/// ```
/// use treemap_core::WeightedTree;
/// use treemap_model::GenericTreeModel;
///
/// let mut model = GenericTreeModel::new("/", 0.0, ());
/// let root = model.root_id();
/// let etc = model.add_child(root, "etc", 0.0, ());
/// model.add_leaf(etc, "hosts", 3.0, ());
/// model.add_leaf(root, "vmlinuz", 7.0, ());
///
/// assert_eq!(model.weight(root), 10.0);
/// assert_eq!(model.weight(etc), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct GenericTreeModel<T = ()> {
    nodes: Vec<Node<T>>,
}

/// Clamp weights to the non-negative finite range; anything else is 0.
pub(crate) fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

impl<T> GenericTreeModel<T> {
    /// Create a model consisting of a root node.
    #[must_use]
    pub fn new(label: impl Into<String>, weight: f64, data: T) -> Self {
        Self {
            nodes: vec![Node {
                label: label.into(),
                weight: sanitize_weight(weight),
                parent: None,
                children: Vec::new(),
                data,
            }],
        }
    }

    /// Handle of the root node.
    #[must_use]
    pub const fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child with an explicit weight; ancestors are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this model.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        weight: f64,
        data: T,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes[parent.0].children.push(id);
        self.nodes.push(Node {
            label: label.into(),
            weight: sanitize_weight(weight),
            parent: Some(parent),
            children: Vec::new(),
            data,
        });
        id
    }

    /// Append a child and add its weight to every ancestor.
    pub fn add_leaf(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        weight: f64,
        data: T,
    ) -> NodeId {
        let id = self.add_child(parent, label, weight, data);
        let weight = self.nodes[id.0].weight;
        let mut runner = Some(parent);
        while let Some(node) = runner {
            self.nodes[node.0].weight += weight;
            runner = self.nodes[node.0].parent;
        }
        id
    }

    /// Replace the weight of `node`.
    pub fn set_weight(&mut self, node: NodeId, weight: f64) {
        self.nodes[node.0].weight = sanitize_weight(weight);
    }

    /// Recompute every branch weight as the sum of its children's weights.
    ///
    /// Leaves keep their own weight.
    pub fn sum_weights(&mut self) {
        // Children are always appended after their parent.
        for index in (0..self.nodes.len()).rev() {
            if self.nodes[index].children.is_empty() {
                continue;
            }
            let sum: f64 = self.nodes[index]
                .children
                .iter()
                .map(|child| self.nodes[child.0].weight)
                .sum();
            self.nodes[index].weight = sum;
        }
    }

    /// User data attached to `node`.
    #[must_use]
    pub fn data(&self, node: NodeId) -> &T {
        &self.nodes[node.0].data
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a model holds at least its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub(crate) fn children_of(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }
}

impl<T> WeightedTree for GenericTreeModel<T> {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.root_id()
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.children_of(node).to_vec()
    }

    fn has_children(&self, node: NodeId) -> bool {
        !self.children_of(node).is_empty()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn weight(&self, node: NodeId) -> f64 {
        self.nodes[node.0].weight
    }

    fn label(&self, node: NodeId) -> Cow<'_, str> {
        Cow::Borrowed(&self.nodes[node.0].label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_has_root() {
        let model = GenericTreeModel::new("root", 5.0, 42);
        let root = model.root_id();
        assert_eq!(model.len(), 1);
        assert_eq!(model.root(), root);
        assert_eq!(model.weight(root), 5.0);
        assert_eq!(model.label(root), "root");
        assert_eq!(*model.data(root), 42);
        assert_eq!(model.parent(root), None);
        assert!(!model.has_children(root));
    }

    #[test]
    fn test_add_child_keeps_ancestor_weights() {
        let mut model = GenericTreeModel::new("root", 6.0, ());
        let root = model.root_id();
        let a = model.add_child(root, "a", 4.0, ());
        let b = model.add_child(root, "b", 2.0, ());
        assert_eq!(model.weight(root), 6.0);
        assert_eq!(model.children(root), vec![a, b]);
        assert_eq!(model.parent(b), Some(root));
    }

    #[test]
    fn test_add_leaf_propagates_weight() {
        let mut model = GenericTreeModel::new("root", 0.0, ());
        let root = model.root_id();
        let dir = model.add_child(root, "dir", 0.0, ());
        model.add_leaf(dir, "x", 2.5, ());
        model.add_leaf(dir, "y", 1.5, ());
        model.add_leaf(root, "z", 1.0, ());
        assert_eq!(model.weight(dir), 4.0);
        assert_eq!(model.weight(root), 5.0);
    }

    #[test]
    fn test_sum_weights_overrides_branches() {
        let mut model = GenericTreeModel::new("root", 100.0, ());
        let root = model.root_id();
        let dir = model.add_child(root, "dir", 100.0, ());
        model.add_child(dir, "x", 2.0, ());
        model.add_child(dir, "y", 3.0, ());
        let leaf = model.add_child(root, "z", 4.0, ());
        model.sum_weights();
        assert_eq!(model.weight(dir), 5.0);
        assert_eq!(model.weight(leaf), 4.0);
        assert_eq!(model.weight(root), 9.0);
    }

    #[test]
    fn test_invalid_weights_become_zero() {
        let mut model = GenericTreeModel::new("root", -3.0, ());
        let root = model.root_id();
        assert_eq!(model.weight(root), 0.0);
        let child = model.add_child(root, "nan", f64::NAN, ());
        assert_eq!(model.weight(child), 0.0);
        model.set_weight(child, f64::INFINITY);
        assert_eq!(model.weight(child), 0.0);
        model.set_weight(child, 2.0);
        assert_eq!(model.weight(child), 2.0);
    }

    #[test]
    fn test_node_ids() {
        let mut model = GenericTreeModel::new("root", 1.0, ());
        let root = model.root_id();
        model.add_child(root, "a", 1.0, ());
        let ids: Vec<usize> = model.node_ids().map(NodeId::index).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
