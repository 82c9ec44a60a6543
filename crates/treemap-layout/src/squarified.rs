//! Squarified layout after van Wijk et al.
//!
//! Children of a node are sorted by descending weight and greedily grouped
//! so that the rectangles handed to them stay as close to square as
//! possible. Runs of two or fewer nodes, and runs that cannot be divided any
//! further, are sliced into strips along one axis.

use crate::{Rectangle, RectangleTree, RectId};
use tracing::{debug, trace};
use treemap_core::{Rect, WeightedTree};

/// Computes a rectangle tree for a weighted tree.
pub trait TreeMapLayout<T: WeightedTree> {
    /// Lay out the subtree below `start` into a `width` x `height` viewport.
    ///
    /// The root of the result covers the whole viewport and is associated
    /// with `start`.
    fn layout(&self, tree: &T, start: T::Node, width: f32, height: f32)
        -> RectangleTree<T::Node>;
}

/// Squarified tree map layout with a recursion depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquarifiedLayout {
    max_depth: usize,
}

impl SquarifiedLayout {
    /// Depth used by [`Default`].
    pub const DEFAULT_MAX_DEPTH: usize = 2;

    /// Create a layout that recurses at most `max_depth` levels below the
    /// start node.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Maximum recursion depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for SquarifiedLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}

impl<T: WeightedTree> TreeMapLayout<T> for SquarifiedLayout {
    fn layout(
        &self,
        tree: &T,
        start: T::Node,
        width: f32,
        height: f32,
    ) -> RectangleTree<T::Node> {
        let mut builder = Builder {
            tree,
            max_depth: self.max_depth,
            result: RectangleTree::new(Rectangle::new(start, 0.0, 0.0, width, height)),
        };
        let root = builder.result.root();
        builder.layout_children(root, 0);

        debug!(
            ?start,
            width,
            height,
            max_depth = self.max_depth,
            rectangles = builder.result.len(),
            "computed squarified layout"
        );
        builder.result
    }
}

/// Outcome of growing a row from the head of a sorted run.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    /// Number of nodes committed to the row.
    len: usize,
    /// Summed weight of the committed nodes.
    sum: f64,
    /// Whether growth stopped because the next node made the aspect worse.
    degraded: bool,
    /// Aspect ratio of every accepted extension, in order.
    ratios: Vec<f64>,
}

/// Scale `dims` so the longer side carries `weight / total` of its length
/// and the shorter side is kept.
fn fit(dims: (f64, f64), weight: f64, total: f64) -> (f64, f64) {
    let (short, long) = if dims.0 < dims.1 {
        (dims.0, dims.1)
    } else {
        (dims.1, dims.0)
    };
    let side = weight * long / total;
    // A zero side would make the ratio meaningless; treat it as one unit.
    (if side == 0.0 { 1.0 } else { side }, short)
}

/// Aspect ratio (>= 1) of the rectangle `node_weight` would get if the row
/// summing to `sum` were placed into `rect` with budget `total`.
fn trial_ratio(rect: &Rect, node_weight: f64, sum: f64, total: f64) -> f64 {
    let dims = (f64::from(rect.width), f64::from(rect.height));
    let (a, b) = fit(fit(dims, sum, total), node_weight, sum);
    if a > b {
        a / b
    } else {
        b / a
    }
}

/// Grow a row while the trial aspect ratio does not get worse.
fn grow_row<N>(rect: &Rect, run: &[(N, f64)], total: f64) -> Row {
    let mut best = f64::MAX;
    let mut sum = 0.0;
    let mut ratios = Vec::new();

    for (i, &(_, weight)) in run.iter().enumerate() {
        let ratio = trial_ratio(rect, weight, sum + weight, total);
        if ratio > best {
            return Row {
                len: i,
                sum,
                degraded: true,
                ratios,
            };
        }
        sum += weight;
        best = ratio;
        ratios.push(ratio);
    }

    Row {
        len: run.len(),
        sum,
        degraded: false,
        ratios,
    }
}

struct Builder<'a, T: WeightedTree> {
    tree: &'a T,
    max_depth: usize,
    result: RectangleTree<T::Node>,
}

impl<T: WeightedTree> Builder<'_, T> {
    /// Lay out the source children of `parent` inside its rectangle.
    fn layout_children(&mut self, parent: RectId, depth: usize) {
        if depth >= self.max_depth {
            return;
        }
        let rectangle = *self.result.get(parent);
        let node = rectangle.node;
        if !self.tree.has_children(node) {
            return;
        }

        let weight = self.tree.weight(node);
        let bounds = rectangle.bounds();
        if weight <= 0.0 || !weight.is_finite() || bounds.size().is_empty() {
            trace!(?node, weight, ?bounds, "degenerate rectangle, children skipped");
            return;
        }

        let mut run: Vec<(T::Node, f64)> = self
            .tree
            .children(node)
            .into_iter()
            .map(|child| (child, self.tree.weight(child)))
            .collect();

        if run.len() > 2 {
            // Stable: equal weights keep model order.
            run.sort_by(|a, b| b.1.total_cmp(&a.1));
            self.squarify(parent, bounds, &run, weight, depth);
        } else {
            self.slice(parent, bounds, &run, weight, depth);
        }
    }

    fn squarify(
        &mut self,
        parent: RectId,
        rect: Rect,
        run: &[(T::Node, f64)],
        weight: f64,
        depth: usize,
    ) {
        if run.len() > 2 {
            let row = grow_row(&rect, run, weight);
            if row.degraded {
                let fraction = row.sum / weight;
                match rect.split(fraction as f32) {
                    Ok((first, second)) => {
                        trace!(len = row.len, fraction, ratios = ?row.ratios, "squarify split");
                        self.squarify(parent, first, &run[..row.len], row.sum, depth);
                        self.squarify(parent, second, &run[row.len..], weight - row.sum, depth);
                        return;
                    }
                    Err(err) => trace!(%err, "cannot subdivide, slicing instead"),
                }
            }
        }
        self.slice(parent, rect, run, weight, depth);
    }

    /// Lay the run end to end along the shorter side of `rect`.
    fn slice(
        &mut self,
        parent: RectId,
        rect: Rect,
        run: &[(T::Node, f64)],
        weight: f64,
        depth: usize,
    ) {
        if weight <= 0.0 || weight.is_nan() {
            return;
        }
        let horizontal = rect.width < rect.height;
        let (origin, extent) = if horizontal {
            (rect.y, rect.height)
        } else {
            (rect.x, rect.width)
        };

        let last = run.len().saturating_sub(1);
        let mut offset = 0.0f32;
        for (i, &(node, node_weight)) in run.iter().enumerate() {
            let rest = extent - offset;
            if rest <= 0.0 {
                break;
            }
            let step = if i == last {
                rest
            } else {
                ((f64::from(extent) * node_weight / weight).round() as f32).min(rest)
            };
            // Too small to show: keep it clickable with a one unit strip.
            let step = if step > 0.0 { step } else { rest.min(1.0) };

            let bounds = if horizontal {
                Rect::new(rect.x, origin + offset, rect.width, step)
            } else {
                Rect::new(origin + offset, rect.y, step, rect.height)
            };
            let child = self
                .result
                .add_child(parent, Rectangle::from_rect(node, bounds));
            self.layout_children(child, depth + 1);
            offset += step;
        }
    }
}
