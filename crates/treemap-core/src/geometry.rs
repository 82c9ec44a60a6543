//! Geometric primitives: Point, Size, Rect.

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Calculate area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True if either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
///
/// Containment is half-open: the left and top edges belong to the
/// rectangle, the right and bottom edges do not. Adjacent rectangles
/// produced by a layout therefore never both claim a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// X coordinate one past the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the coordinates lie inside the rectangle (half-open).
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let dx = px - self.x;
        if dx < 0.0 || dx >= self.width {
            return false;
        }
        let dy = py - self.y;
        dy >= 0.0 && dy < self.height
    }

    /// Check if the interiors of two rectangles overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Split into two rectangles along the longer side.
    ///
    /// A rectangle that is taller than wide is cut into a top and a bottom
    /// slab; otherwise into a left and a right slab. The first slab receives
    /// `fraction` of the extent, the second the exact remainder.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidFraction`] unless `0 < fraction < 1`.
    pub fn split(&self, fraction: f32) -> Result<(Self, Self), GeometryError> {
        // NaN fails both comparisons, so test for the accepted range.
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(GeometryError::InvalidFraction(fraction));
        }
        if self.width < self.height {
            let nh = self.height * fraction;
            Ok((
                Self::new(self.x, self.y, self.width, nh),
                Self::new(self.x, self.y + nh, self.width, self.height - nh),
            ))
        } else {
            let nw = self.width * fraction;
            Ok((
                Self::new(self.x, self.y, nw, self.height),
                Self::new(self.x + nw, self.y, self.width - nw, self.height),
            ))
        }
    }

}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
