//! Rectangle renderers.
//!
//! A renderer paints one rectangle at a time, either normally or
//! highlighted. The controller decides the order; renderers never recurse.

use crate::color::ColorProvider;
use treemap_core::{Canvas, Color, Point, RadialGradient, TextStyle, WeightedTree};
use treemap_layout::{RectId, RectangleTree};

/// Everything a renderer may look at while painting.
pub struct RenderContext<'a, T: WeightedTree> {
    /// Source tree, for labels
    pub model: &'a T,
    /// Laid-out rectangles
    pub rectangles: &'a RectangleTree<T::Node>,
    /// Color policy
    pub colors: &'a dyn ColorProvider<T::Node>,
}

impl<T: WeightedTree> RenderContext<'_, T> {
    fn color(&self, id: RectId) -> Color {
        self.colors.color(self.rectangles, id)
    }

    fn is_leaf(&self, id: RectId) -> bool {
        !self.rectangles.has_children(id)
    }
}

/// Paints single rectangles in normal and highlighted mode.
pub trait RectangleRenderer<T: WeightedTree> {
    /// Paint `id` normally.
    fn render(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId);

    /// Paint `id` as the highlighted rectangle.
    fn highlight(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId);
}

/// Flat fill; the highlight adds an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultRectangleRenderer {
    outline: Color,
    outline_width: f32,
}

impl DefaultRectangleRenderer {
    /// Renderer outlining highlighted rectangles in `outline`.
    #[must_use]
    pub const fn new(outline: Color) -> Self {
        Self {
            outline,
            outline_width: 1.0,
        }
    }
}

impl Default for DefaultRectangleRenderer {
    fn default() -> Self {
        Self::new(Color::RED)
    }
}

impl<T: WeightedTree> RectangleRenderer<T> for DefaultRectangleRenderer {
    fn render(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId) {
        canvas.fill_rect(ctx.rectangles[id].bounds(), ctx.color(id));
    }

    fn highlight(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId) {
        self.render(canvas, ctx, id);
        canvas.stroke_rect(ctx.rectangles[id].bounds(), self.outline, self.outline_width);
    }
}

/// Cushion shading: every leaf gets a radial gradient that is lighter in
/// the middle, so neighbouring leaves of the same color stay apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CushionRectangleRenderer {
    backdrop: Color,
    overlay: Color,
    lighten: f32,
}

impl CushionRectangleRenderer {
    /// Renderer with a custom backdrop behind the leaves.
    #[must_use]
    pub const fn with_backdrop(backdrop: Color) -> Self {
        Self {
            backdrop,
            overlay: Color {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 0.33,
            },
            lighten: 0.6,
        }
    }
}

impl Default for CushionRectangleRenderer {
    fn default() -> Self {
        Self::with_backdrop(Color::BLACK)
    }
}

impl<T: WeightedTree> RectangleRenderer<T> for CushionRectangleRenderer {
    fn render(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId) {
        let bounds = ctx.rectangles[id].bounds();
        if ctx.is_leaf(id) {
            let color = ctx.color(id);
            let center = color.lerp(&Color::WHITE, self.lighten);
            canvas.fill_gradient(bounds, &RadialGradient::centered(&bounds, center, color));
        } else if id == ctx.rectangles.root() {
            canvas.fill_rect(bounds, self.backdrop);
        }
    }

    /// Branches are left untouched; only leaves get the overlay.
    fn highlight(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId) {
        if ctx.is_leaf(id) {
            self.render(canvas, ctx, id);
            canvas.fill_rect(ctx.rectangles[id].bounds(), self.overlay);
        }
    }
}

/// Draws node labels centered in their rectangles.
///
/// A label is skipped when it does not fit. The root label is only drawn
/// when requested or when the root is a leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRenderer {
    style: TextStyle,
    highlight: Color,
    show_root: bool,
}

impl LabelRenderer {
    /// Label renderer; `show_root` also labels a root that has children.
    #[must_use]
    pub fn new(show_root: bool) -> Self {
        Self {
            style: TextStyle {
                color: Color::WHITE,
                ..TextStyle::default()
            },
            highlight: Color::RED,
            show_root,
        }
    }

    /// Replace the text style used for normal labels.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the highlighted label color.
    #[must_use]
    pub fn with_highlight(mut self, color: Color) -> Self {
        self.highlight = color;
        self
    }

    fn wants_label<T: WeightedTree>(&self, ctx: &RenderContext<'_, T>, id: RectId) -> bool {
        self.show_root || id != ctx.rectangles.root() || ctx.is_leaf(id)
    }

    fn draw<T: WeightedTree>(
        &self,
        canvas: &mut dyn Canvas,
        ctx: &RenderContext<'_, T>,
        id: RectId,
        style: &TextStyle,
    ) {
        let rectangle = &ctx.rectangles[id];
        let label = ctx.model.label(rectangle.node);
        if label.is_empty() {
            return;
        }
        let extent = canvas.measure_text(&label, style);
        let free_w = rectangle.width - extent.width;
        let free_h = rectangle.height - extent.height;
        if free_w > 0.0 && free_h > 0.0 {
            let baseline = Point::new(
                rectangle.x + free_w / 2.0,
                rectangle.y + free_h / 2.0 + extent.height,
            );
            canvas.draw_text(&label, baseline, style);
        }
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T: WeightedTree> RectangleRenderer<T> for LabelRenderer {
    fn render(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId) {
        if self.wants_label(ctx, id) {
            self.draw(canvas, ctx, id, &self.style);
        }
    }

    fn highlight(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_, T>, id: RectId) {
        if self.wants_label(ctx, id) {
            let style = TextStyle {
                color: self.highlight,
                ..self.style
            };
            self.draw(canvas, ctx, id, &style);
        }
    }
}
