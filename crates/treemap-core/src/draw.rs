//! Draw commands recorded by [`RecordingCanvas`](crate::RecordingCanvas).

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Text style for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
        }
    }
}

/// Radial gradient between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Center of both circles
    pub center: Point,
    /// Radius at which `inner` is painted
    pub inner_radius: f32,
    /// Radius at which `outer` is painted
    pub outer_radius: f32,
    /// Color at the inner radius
    pub inner: Color,
    /// Color at the outer radius
    pub outer: Color,
}

impl RadialGradient {
    /// Gradient centered in `rect`, reaching the outer color at its longer side.
    #[must_use]
    pub fn centered(rect: &Rect, inner: Color, outer: Color) -> Self {
        Self {
            center: rect.center(),
            inner_radius: 1.0,
            outer_radius: rect.width.max(rect.height),
            inner,
            outer,
        }
    }

    /// Sample the gradient at a distance from the center.
    #[must_use]
    pub fn sample(&self, distance: f32) -> Color {
        let span = self.outer_radius - self.inner_radius;
        if span <= 0.0 {
            return self.outer;
        }
        let t = (distance - self.inner_radius) / span;
        self.inner.lerp(&self.outer, t)
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a rectangle with a solid color
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Outline a rectangle
    StrokeRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Fill a rectangle with a radial gradient
    FillGradient {
        /// Rectangle bounds
        bounds: Rect,
        /// Gradient description
        gradient: RadialGradient,
    },
    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Baseline-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Bounds touched by the command, if it is rectangular.
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect> {
        match self {
            Self::FillRect { bounds, .. }
            | Self::StrokeRect { bounds, .. }
            | Self::FillGradient { bounds, .. } => Some(*bounds),
            Self::Text { .. } => None,
        }
    }
}
