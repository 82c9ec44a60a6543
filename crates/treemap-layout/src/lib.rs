//! Layout engine for the treemap visualization.
//!
//! Converts a [`WeightedTree`](treemap_core::WeightedTree) into a
//! [`RectangleTree`]: nested rectangles whose areas follow node weights.
//!
//! ```
//! use treemap_layout::{SquarifiedLayout, TreeMapLayout};
//! use treemap_model::GenericTreeModel;
//!
//! let mut model = GenericTreeModel::new("root", 6.0, ());
//! let root = model.root_id();
//! model.add_child(root, "a", 4.0, ());
//! model.add_child(root, "b", 2.0, ());
//!
//! let tree = SquarifiedLayout::new(1).layout(&model, root, 100.0, 50.0);
//! let widths: Vec<f32> = tree
//!     .children(tree.root())
//!     .iter()
//!     .map(|&id| tree[id].width)
//!     .collect();
//! assert_eq!(widths, vec![67.0, 33.0]);
//! ```

mod rectangle;
mod squarified;
mod tree;

pub use rectangle::Rectangle;
pub use squarified::{SquarifiedLayout, TreeMapLayout};
pub use tree::{RectId, RectangleTree};
