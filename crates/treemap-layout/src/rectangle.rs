//! Layout rectangle bound to a source tree node.

use treemap_core::{GeometryError, Point, Rect};

/// A laid-out rectangle associated with a node of the source tree.
///
/// The node is a non-owning handle; the geometry never changes after the
/// rectangle has been placed into a [`RectangleTree`](crate::RectangleTree).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<N> {
    /// Source node the area is allotted to
    pub node: N,
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl<N: Copy> Rectangle<N> {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(node: N, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            node,
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle covering `bounds`.
    #[must_use]
    pub const fn from_rect(node: N, bounds: Rect) -> Self {
        Self::new(node, bounds.x, bounds.y, bounds.width, bounds.height)
    }

    /// Geometry without the node.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Get the area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Half-open containment test; right and bottom edges are excluded.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }

    /// Split along the longer side; both halves keep this rectangle's node.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidFraction`] unless `0 < fraction < 1`.
    pub fn split(&self, fraction: f32) -> Result<(Self, Self), GeometryError> {
        let (first, second) = self.bounds().split(fraction)?;
        Ok((
            Self::from_rect(self.node, first),
            Self::from_rect(self.node, second),
        ))
    }
}
