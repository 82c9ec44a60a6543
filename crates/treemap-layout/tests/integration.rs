//! Integration tests for treemap-layout.
//!
//! Layouts are computed over programmatic models and checked for the
//! geometric guarantees renderers and hit-testing rely on.

use proptest::prelude::*;
use treemap_core::{Rect, WeightedTree};
use treemap_layout::{RectId, RectangleTree, SquarifiedLayout, TreeMapLayout};
use treemap_model::{GenericTreeModel, NodeId};

/// Root with one child per entry; entries with grandchildren become
/// branches whose weight is the sum of their leaves.
fn build(shape: &[(f64, Vec<f64>)]) -> GenericTreeModel {
    let mut model = GenericTreeModel::new("root", 0.0, ());
    let root = model.root_id();
    for (i, (weight, leaves)) in shape.iter().enumerate() {
        if leaves.is_empty() {
            model.add_leaf(root, format!("c{i}"), *weight, ());
        } else {
            let branch = model.add_child(root, format!("c{i}"), 0.0, ());
            for (j, leaf) in leaves.iter().enumerate() {
                model.add_leaf(branch, format!("c{i}.{j}"), *leaf, ());
            }
        }
    }
    model
}

fn overlap(a: &Rect, b: &Rect) -> f32 {
    let w = a.right().min(b.right()) - a.x.max(b.x);
    let h = a.bottom().min(b.bottom()) - a.y.max(b.y);
    if w > 0.0 && h > 0.0 {
        w * h
    } else {
        0.0
    }
}

fn child_bounds(tree: &RectangleTree<NodeId>, id: RectId) -> Vec<Rect> {
    tree.children(id).iter().map(|&c| tree[c].bounds()).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_two_children_are_sliced() {
    let mut model = GenericTreeModel::new("root", 6.0, ());
    let root = model.root_id();
    let a = model.add_child(root, "a", 4.0, ());
    let b = model.add_child(root, "b", 2.0, ());

    let tree = SquarifiedLayout::new(1).layout(&model, root, 100.0, 50.0);
    let children = tree.children(tree.root());
    assert_eq!(children.len(), 2);
    assert_eq!(tree[children[0]].node, a);
    assert_eq!(tree[children[0]].bounds(), Rect::new(0.0, 0.0, 67.0, 50.0));
    assert_eq!(tree[children[1]].node, b);
    assert_eq!(tree[children[1]].bounds(), Rect::new(67.0, 0.0, 33.0, 50.0));
}

#[test]
fn test_three_children_are_squarified() {
    let mut model = GenericTreeModel::new("root", 6.0, ());
    let root = model.root_id();
    let n1 = model.add_child(root, "1", 1.0, ());
    let n2 = model.add_child(root, "2", 2.0, ());
    let n3 = model.add_child(root, "3", 3.0, ());

    let tree = SquarifiedLayout::new(1).layout(&model, root, 300.0, 100.0);
    let placed: Vec<(NodeId, Rect)> = tree
        .children(tree.root())
        .iter()
        .map(|&id| (tree[id].node, tree[id].bounds()))
        .collect();
    assert_eq!(
        placed,
        vec![
            (n3, Rect::new(0.0, 0.0, 150.0, 100.0)),
            (n2, Rect::new(150.0, 0.0, 100.0, 100.0)),
            (n1, Rect::new(250.0, 0.0, 50.0, 100.0)),
        ]
    );

    let hit = tree.find_rectangle(200.0, 50.0);
    assert_eq!(tree[hit].node, n2);
    assert_eq!(tree[tree.find_rectangle(0.0, 0.0)].node, n3);
}

#[test]
fn test_equal_weights_keep_model_order() {
    let mut model = GenericTreeModel::new("root", 6.0, ());
    let root = model.root_id();
    let n1 = model.add_child(root, "1", 1.0, ());
    let n2 = model.add_child(root, "2", 1.0, ());
    let n3 = model.add_child(root, "3", 2.0, ());
    let n4 = model.add_child(root, "4", 1.0, ());
    let n5 = model.add_child(root, "5", 1.0, ());

    let tree = SquarifiedLayout::new(1).layout(&model, root, 600.0, 400.0);
    let placed: Vec<NodeId> = tree
        .children(tree.root())
        .iter()
        .map(|&id| tree[id].node)
        .collect();
    assert_eq!(placed, vec![n3, n1, n2, n4, n5]);

    // Same input, same rectangles.
    let again = SquarifiedLayout::new(1).layout(&model, root, 600.0, 400.0);
    let bounds = |t: &RectangleTree<NodeId>| t.iter().map(|(_, r)| r.bounds()).collect::<Vec<_>>();
    assert_eq!(bounds(&tree), bounds(&again));
}

#[test]
fn test_tall_viewport_slices_into_bands() {
    let mut model = GenericTreeModel::new("root", 4.0, ());
    let root = model.root_id();
    model.add_child(root, "top", 1.0, ());
    model.add_child(root, "bottom", 3.0, ());

    let tree = SquarifiedLayout::new(1).layout(&model, root, 50.0, 200.0);
    let bounds = child_bounds(&tree, tree.root());
    assert_eq!(
        bounds,
        vec![Rect::new(0.0, 0.0, 50.0, 50.0), Rect::new(0.0, 50.0, 50.0, 150.0)]
    );
}

#[test]
fn test_tiny_weight_gets_one_unit_strip() {
    let mut model = GenericTreeModel::new("root", 1001.0, ());
    let root = model.root_id();
    model.add_child(root, "tiny", 1.0, ());
    model.add_child(root, "huge", 1000.0, ());

    let tree = SquarifiedLayout::new(1).layout(&model, root, 100.0, 10.0);
    let bounds = child_bounds(&tree, tree.root());
    assert_eq!(bounds[0], Rect::new(0.0, 0.0, 1.0, 10.0));
    assert_eq!(bounds[1], Rect::new(1.0, 0.0, 99.0, 10.0));
}

#[test]
fn test_degenerate_inputs_yield_root_only() {
    let mut model = GenericTreeModel::new("root", 0.0, ());
    let root = model.root_id();
    model.add_child(root, "a", 1.0, ());
    model.add_child(root, "b", 1.0, ());
    let layout = SquarifiedLayout::default();

    assert_eq!(layout.layout(&model, root, 100.0, 100.0).len(), 1);

    model.set_weight(root, 2.0);
    assert_eq!(layout.layout(&model, root, 0.0, 100.0).len(), 1);
    assert_eq!(layout.layout(&model, root, 100.0, 0.0).len(), 1);
    assert_eq!(layout.layout(&model, root, 100.0, 100.0).len(), 3);
}

#[test]
fn test_layout_from_inner_node() {
    let model = build(&[(1.0, vec![2.0, 2.0, 4.0]), (3.0, vec![])]);
    let branch = model.children(model.root())[0];
    let tree = SquarifiedLayout::default().layout(&model, branch, 80.0, 80.0);
    assert_eq!(tree[tree.root()].node, branch);
    assert_eq!(tree.children(tree.root()).len(), 3);
    assert_eq!(tree.find_node(model.root()), None);
}

#[test]
fn test_rectangle_tree_as_weighted_tree() {
    let model = build(&[(1.0, vec![]), (3.0, vec![])]);
    let tree = SquarifiedLayout::default().layout(&model, model.root(), 40.0, 10.0);
    let root = WeightedTree::root(&tree);
    assert_eq!(WeightedTree::weight(&tree, root), 400.0);
    let total: f64 = WeightedTree::children(&tree, root)
        .into_iter()
        .map(|id| WeightedTree::weight(&tree, id))
        .sum();
    assert_eq!(total, 400.0);
}

// =============================================================================
// Property Tests
// =============================================================================

fn tree_shape() -> impl Strategy<Value = Vec<(f64, Vec<f64>)>> {
    prop::collection::vec(
        (
            1.0f64..100.0,
            prop::collection::vec(0.5f64..100.0, 0..6),
        ),
        1..12,
    )
}

fn viewport() -> impl Strategy<Value = (f32, f32)> {
    ((1u16..1500).prop_map(f32::from), (1u16..1500).prop_map(f32::from))
}

proptest! {
    #[test]
    fn prop_leaves_tile_viewport(shape in tree_shape(), (w, h) in viewport()) {
        let model = build(&shape);
        let tree = SquarifiedLayout::default().layout(&model, model.root(), w, h);
        let covered: f64 = tree.leaves().map(|(_, r)| f64::from(r.area())).sum();
        let expected = f64::from(w) * f64::from(h);
        prop_assert!((covered - expected).abs() <= expected * 1e-3 + 1.0,
            "covered {} of {}", covered, expected);
    }

    #[test]
    fn prop_siblings_disjoint_and_inside_parent(shape in tree_shape(), (w, h) in viewport()) {
        let model = build(&shape);
        let tree = SquarifiedLayout::default().layout(&model, model.root(), w, h);
        for (id, rect) in tree.iter() {
            let parent = rect.bounds();
            let children = child_bounds(&tree, id);
            for (i, a) in children.iter().enumerate() {
                prop_assert!(a.width > 0.0 && a.height > 0.0);
                prop_assert!(a.x >= parent.x - 1e-2 && a.right() <= parent.right() + 1e-2);
                prop_assert!(a.y >= parent.y - 1e-2 && a.bottom() <= parent.bottom() + 1e-2);
                for b in &children[i + 1..] {
                    prop_assert!(overlap(a, b) < 1e-2, "{:?} overlaps {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn prop_depth_bounded(shape in tree_shape(), (w, h) in viewport(), max_depth in 1usize..4) {
        let model = build(&shape);
        let tree = SquarifiedLayout::new(max_depth).layout(&model, model.root(), w, h);
        for (id, _) in tree.iter() {
            prop_assert!(tree.depth(id) <= max_depth);
        }
    }

    #[test]
    fn prop_rectangles_mirror_model(shape in tree_shape(), (w, h) in viewport()) {
        let model = build(&shape);
        let tree = SquarifiedLayout::default().layout(&model, model.root(), w, h);
        for (id, rect) in tree.iter() {
            if let Some(parent) = tree.parent(id) {
                prop_assert_eq!(model.parent(rect.node), Some(tree[parent].node));
            }
        }
    }

    #[test]
    fn prop_hit_test_finds_containing_leaf(
        shape in tree_shape(),
        (w, h) in viewport(),
        fx in 0.0f32..0.999,
        fy in 0.0f32..0.999,
    ) {
        let model = build(&shape);
        let tree = SquarifiedLayout::default().layout(&model, model.root(), w, h);
        let (x, y) = (fx * w, fy * h);
        let hit = tree.find_rectangle(x, y);
        prop_assert!(tree[hit].contains(x, y));
    }
}
