//! Rectangle tree produced by a layout.
//!
//! Rectangles live in an arena and refer to each other by [`RectId`]. Every
//! entry records its parent (navigation only) and its ordered children. The
//! tree is built once per layout and never mutated afterwards by callers.

use crate::Rectangle;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;
use treemap_core::WeightedTree;

/// Handle of a rectangle inside a [`RectangleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectId(usize);

impl RectId {
    /// Position of the rectangle in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Entry<N> {
    rect: Rectangle<N>,
    parent: Option<RectId>,
    children: Vec<RectId>,
}

/// Tree of rectangles mirroring the laid-out part of a source tree.
#[derive(Debug, Clone)]
pub struct RectangleTree<N> {
    entries: Vec<Entry<N>>,
}

impl<N: Copy> RectangleTree<N> {
    /// Create a tree consisting of the root rectangle only.
    #[must_use]
    pub fn new(root: Rectangle<N>) -> Self {
        Self {
            entries: vec![Entry {
                rect: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Handle of the root rectangle.
    #[must_use]
    pub const fn root(&self) -> RectId {
        RectId(0)
    }

    /// Append `rect` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: RectId, rect: Rectangle<N>) -> RectId {
        let id = RectId(self.entries.len());
        self.entries[parent.0].children.push(id);
        self.entries.push(Entry {
            rect,
            parent: Some(parent),
            children: Vec::new(),
        });
        id
    }

    /// Rectangle behind `id`.
    #[must_use]
    pub fn get(&self, id: RectId) -> &Rectangle<N> {
        &self.entries[id.0].rect
    }

    /// Ordered children of `id`.
    #[must_use]
    pub fn children(&self, id: RectId) -> &[RectId] {
        &self.entries[id.0].children
    }

    /// Whether `id` has child rectangles.
    #[must_use]
    pub fn has_children(&self, id: RectId) -> bool {
        !self.entries[id.0].children.is_empty()
    }

    /// Parent of `id`, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: RectId) -> Option<RectId> {
        self.entries[id.0].parent
    }

    /// Number of rectangles, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a tree holds at least its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Distance of `id` from the root.
    #[must_use]
    pub fn depth(&self, id: RectId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// All rectangles in insertion (depth-first) order.
    pub fn iter(&self) -> impl Iterator<Item = (RectId, &Rectangle<N>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (RectId(i), &e.rect))
    }

    /// Rectangles without children.
    pub fn leaves(&self) -> impl Iterator<Item = (RectId, &Rectangle<N>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.children.is_empty())
            .map(|(i, e)| (RectId(i), &e.rect))
    }

    /// Breadth-first order starting at the root.
    ///
    /// Within one parent the children are visited last-added first, which is
    /// the order the painter uses.
    #[must_use]
    pub fn breadth_first(&self) -> Vec<RectId> {
        self.breadth_first_from(self.root())
    }

    /// Breadth-first order of the subtree below `start`, `start` included.
    #[must_use]
    pub fn breadth_first_from(&self, start: RectId) -> Vec<RectId> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Deepest rectangle containing the point.
    ///
    /// Starting at the root, children are scanned last-added first and the
    /// first one containing the point is descended into. If no child
    /// contains the point the current rectangle is returned, so the result
    /// is the root when nothing deeper matches.
    #[must_use]
    pub fn find_rectangle(&self, x: f32, y: f32) -> RectId {
        let mut result = self.root();
        while let Some(&hit) = self
            .children(result)
            .iter()
            .rev()
            .find(|&&child| self.get(child).contains(x, y))
        {
            result = hit;
        }
        result
    }

    /// First rectangle (depth-first) whose source node is `node`.
    #[must_use]
    pub fn find_node(&self, node: N) -> Option<RectId>
    where
        N: PartialEq,
    {
        self.iter().find(|(_, r)| r.node == node).map(|(id, _)| id)
    }
}

impl<N> Index<RectId> for RectangleTree<N> {
    type Output = Rectangle<N>;

    fn index(&self, id: RectId) -> &Self::Output {
        &self.entries[id.0].rect
    }
}

/// The rectangle tree is itself navigable as a weighted tree whose weights
/// are rectangle areas.
impl<N: Copy + Eq + Hash + Debug> WeightedTree for RectangleTree<N> {
    type Node = RectId;

    fn root(&self) -> RectId {
        RectId(0)
    }

    fn children(&self, node: RectId) -> Vec<RectId> {
        Self::children(self, node).to_vec()
    }

    fn has_children(&self, node: RectId) -> bool {
        Self::has_children(self, node)
    }

    fn parent(&self, node: RectId) -> Option<RectId> {
        Self::parent(self, node)
    }

    fn weight(&self, node: RectId) -> f64 {
        f64::from(self.get(node).area())
    }

    fn label(&self, _node: RectId) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root 0..100 x 0..100 split into two columns; the right column holds
    /// two stacked rectangles.
    fn sample() -> RectangleTree<char> {
        let mut tree = RectangleTree::new(Rectangle::new('r', 0.0, 0.0, 100.0, 100.0));
        let root = tree.root();
        tree.add_child(root, Rectangle::new('a', 0.0, 0.0, 50.0, 100.0));
        let b = tree.add_child(root, Rectangle::new('b', 50.0, 0.0, 50.0, 100.0));
        tree.add_child(b, Rectangle::new('c', 50.0, 0.0, 50.0, 40.0));
        tree.add_child(b, Rectangle::new('d', 50.0, 40.0, 50.0, 60.0));
        tree
    }

    #[test]
    fn test_new_tree_has_root_only() {
        let tree = RectangleTree::new(Rectangle::new((), 0.0, 0.0, 1.0, 1.0));
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert!(!tree.has_children(tree.root()));
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn test_parent_and_children_links() {
        let tree = sample();
        let root = tree.root();
        assert_eq!(tree.children(root).len(), 2);
        let b = tree.children(root)[1];
        assert_eq!(tree[b].node, 'b');
        for &child in tree.children(b) {
            assert_eq!(tree.parent(child), Some(b));
            assert_eq!(tree.depth(child), 2);
        }
    }

    #[test]
    fn test_find_rectangle_descends_to_deepest() {
        let tree = sample();
        assert_eq!(tree[tree.find_rectangle(10.0, 10.0)].node, 'a');
        assert_eq!(tree[tree.find_rectangle(60.0, 10.0)].node, 'c');
        assert_eq!(tree[tree.find_rectangle(60.0, 40.0)].node, 'd');
    }

    #[test]
    fn test_find_rectangle_outside_returns_root() {
        let tree = sample();
        assert_eq!(tree.find_rectangle(500.0, 500.0), tree.root());
    }

    #[test]
    fn test_find_rectangle_prefers_last_added() {
        let mut tree = RectangleTree::new(Rectangle::new(0, 0.0, 0.0, 10.0, 10.0));
        let root = tree.root();
        tree.add_child(root, Rectangle::new(1, 0.0, 0.0, 10.0, 10.0));
        let last = tree.add_child(root, Rectangle::new(2, 0.0, 0.0, 10.0, 10.0));
        assert_eq!(tree.find_rectangle(5.0, 5.0), last);
    }

    #[test]
    fn test_breadth_first_reverses_siblings() {
        let tree = sample();
        let nodes: Vec<char> = tree.breadth_first().into_iter().map(|id| tree[id].node).collect();
        assert_eq!(nodes, vec!['r', 'b', 'a', 'd', 'c']);
    }

    #[test]
    fn test_breadth_first_from_subtree() {
        let tree = sample();
        let b = tree.children(tree.root())[1];
        let nodes: Vec<char> = tree
            .breadth_first_from(b)
            .into_iter()
            .map(|id| tree[id].node)
            .collect();
        assert_eq!(nodes, vec!['b', 'd', 'c']);
        let a = tree.children(tree.root())[0];
        assert_eq!(tree.breadth_first_from(a), vec![a]);
    }

    #[test]
    fn test_leaves() {
        let tree = sample();
        let leaves: Vec<char> = tree.leaves().map(|(_, r)| r.node).collect();
        assert_eq!(leaves, vec!['a', 'c', 'd']);
    }

    #[test]
    fn test_find_node() {
        let tree = sample();
        assert_eq!(tree.find_node('d').map(|id| tree.depth(id)), Some(2));
        assert_eq!(tree.find_node('z'), None);
    }

    #[test]
    fn test_tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RectangleTree<u32>>();
    }

    #[test]
    fn test_weighted_tree_view() {
        let tree = sample();
        let root = WeightedTree::root(&tree);
        assert_eq!(tree.weight(root), 10_000.0);
        assert_eq!(WeightedTree::children(&tree, root).len(), 2);
        assert_eq!(tree.label(root), "");
    }
}
