//! Drawing surface abstraction and a recording implementation.

use crate::draw::{DrawCommand, RadialGradient, TextStyle};
use crate::{Color, Point, Rect, Size};

/// Drawing surface the renderers paint onto.
///
/// Layout code never touches a canvas; only renderers and the controller do.
pub trait Canvas {
    /// Width and height of the drawable area.
    fn size(&self) -> Size;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill a rectangle with a radial gradient.
    fn fill_gradient(&mut self, rect: Rect, gradient: &RadialGradient);

    /// Draw text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Measure the extent of `text` when drawn with `style`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;
}

/// Average glyph advance relative to the font size used by
/// [`RecordingCanvas::measure_text`].
const GLYPH_ADVANCE: f32 = 0.6;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another backend)
/// - Diffing (compare render outputs)
///
/// Text is measured as monospace: every character advances
/// `0.6 * style.size` pixels and the height equals the font size.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Change the surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }

    /// All recorded text contents, in drawing order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            bounds: rect,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            bounds: rect,
            color,
            width,
        });
    }

    fn fill_gradient(&mut self, rect: Rect, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::FillGradient {
            bounds: rect,
            gradient: *gradient,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: *style,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(chars * style.size * GLYPH_ADVANCE, style.size)
    }
}
