//! Navigation controller tying model, layout and rendering together.
//!
//! The controller owns the current [`RectangleTree`] and the view state:
//! the viewing node (the node whose subtree fills the viewport) and the
//! highlighted rectangle. Pointer movement highlights, a primary button
//! release zooms into the highlighted branch and a secondary release zooms
//! out by one level.

use crate::color::{ColorProvider, MonoColorProvider, PaletteColorProvider};
use crate::render::{
    CushionRectangleRenderer, DefaultRectangleRenderer, LabelRenderer, RectangleRenderer,
    RenderContext,
};
use crate::{ConfigError, TreeMapConfig};
use std::fmt;
use tracing::{debug, trace};
use treemap_core::tree::ancestors;
use treemap_core::{Canvas, Color, Event, MouseButton, Point, Rect, Size, TextStyle, WeightedTree};
use treemap_layout::{RectId, RectangleTree, SquarifiedLayout, TreeMapLayout};

/// Text shown when there is nothing to paint.
const NO_DATA: &str = "no data";

/// Handle returned by [`TreeMap::add_selection_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Notified whenever the highlighted rectangle changes.
///
/// Closures taking `(&TreeMap<T>, T::Node)` implement this trait.
pub trait SelectionListener<T: WeightedTree> {
    /// `node` is the source node of the newly highlighted rectangle.
    fn selection_changed(&mut self, treemap: &TreeMap<T>, node: T::Node);
}

impl<T, F> SelectionListener<T> for F
where
    T: WeightedTree,
    F: FnMut(&TreeMap<T>, T::Node),
{
    fn selection_changed(&mut self, treemap: &TreeMap<T>, node: T::Node) {
        self(treemap, node);
    }
}

/// Interactive treemap over a weighted tree model.
///
/// ```
/// use treemap::{Event, GenericTreeModel, RecordingCanvas, TreeMap};
///
/// let mut model = GenericTreeModel::new("root", 6.0, ());
/// let root = model.root_id();
/// let a = model.add_child(root, "a", 4.0, ());
/// model.add_child(root, "b", 2.0, ());
///
/// let mut treemap = TreeMap::new();
/// treemap.set_tree_model(Some(model));
/// treemap.set_size(100.0, 50.0);
/// treemap.compute();
///
/// let mut canvas = RecordingCanvas::new(100.0, 50.0);
/// treemap.paint(&mut canvas);
/// treemap.handle_event(&Event::moved(10.0, 10.0), &mut canvas);
/// assert_eq!(treemap.highlighted_node(), Some(a));
/// ```
pub struct TreeMap<T: WeightedTree> {
    model: Option<T>,
    viewing: Option<T::Node>,
    size: Option<Size>,
    layout: Box<dyn TreeMapLayout<T>>,
    renderer: Box<dyn RectangleRenderer<T>>,
    label_renderer: Option<Box<dyn RectangleRenderer<T>>>,
    colors: Box<dyn ColorProvider<T::Node>>,
    background: Color,
    rectangles: Option<RectangleTree<T::Node>>,
    highlighted: Option<RectId>,
    listeners: Vec<(ListenerId, Box<dyn SelectionListener<T>>)>,
    next_listener: u64,
}

impl<T: WeightedTree> TreeMap<T> {
    /// Controller with a squarified layout of depth 2, flat rendering in
    /// navy and no labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: None,
            viewing: None,
            size: None,
            layout: Box::new(SquarifiedLayout::default()),
            renderer: Box::new(DefaultRectangleRenderer::default()),
            label_renderer: None,
            colors: Box::new(MonoColorProvider::default()),
            background: Color::WHITE,
            rectangles: None,
            highlighted: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Controller configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &TreeMapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut treemap = Self::new();
        treemap.set_layout(SquarifiedLayout::new(config.max_depth));
        treemap.set_background(config.background_color()?);

        let palette = config.palette_colors()?;
        if palette.is_empty() {
            treemap.set_color_provider(MonoColorProvider::new(config.mono()?));
        } else {
            treemap.set_color_provider(PaletteColorProvider::new(palette));
        }

        if config.cushion {
            treemap.set_renderer(CushionRectangleRenderer::default());
        } else {
            treemap.set_renderer(DefaultRectangleRenderer::new(config.highlight()?));
        }

        if config.show_labels {
            treemap.set_label_renderer(
                LabelRenderer::new(config.show_root_label).with_highlight(config.highlight()?),
            );
        }
        debug!(?config, "treemap configured");
        Ok(treemap)
    }

    /// Replace the tree model. The viewing node becomes the model root; any
    /// computed rectangles and the highlight are dropped.
    pub fn set_tree_model(&mut self, model: Option<T>) {
        self.viewing = model.as_ref().map(WeightedTree::root);
        self.model = model;
        self.rectangles = None;
        self.highlighted = None;
    }

    /// Current tree model.
    pub fn tree_model(&self) -> Option<&T> {
        self.model.as_ref()
    }

    /// Record the viewport size used by [`compute`](Self::compute).
    ///
    /// Rectangles computed for a different size are dropped.
    pub fn set_size(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if self.size != Some(size) {
            self.size = Some(size);
            self.rectangles = None;
            self.highlighted = None;
        }
    }

    /// Viewport size, if set.
    pub const fn size(&self) -> Option<Size> {
        self.size
    }

    /// Replace the layout algorithm.
    pub fn set_layout(&mut self, layout: impl TreeMapLayout<T> + 'static) {
        self.layout = Box::new(layout);
    }

    /// Replace the rectangle renderer.
    pub fn set_renderer(&mut self, renderer: impl RectangleRenderer<T> + 'static) {
        self.renderer = Box::new(renderer);
    }

    /// Add a renderer run over all rectangles after the main pass.
    pub fn set_label_renderer(&mut self, renderer: impl RectangleRenderer<T> + 'static) {
        self.label_renderer = Some(Box::new(renderer));
    }

    /// Remove the label renderer.
    pub fn clear_label_renderer(&mut self) {
        self.label_renderer = None;
    }

    /// Replace the color provider.
    pub fn set_color_provider(&mut self, colors: impl ColorProvider<T::Node> + 'static) {
        self.colors = Box::new(colors);
    }

    /// Set the background painted behind the rectangles.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Register a selection listener.
    pub fn add_selection_listener(
        &mut self,
        listener: impl SelectionListener<T> + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if `id` was not registered.
    pub fn remove_selection_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Node whose subtree is currently displayed.
    pub const fn viewing_node(&self) -> Option<T::Node> {
        self.viewing
    }

    /// Currently highlighted rectangle.
    pub const fn highlighted(&self) -> Option<RectId> {
        self.highlighted
    }

    /// Source node of the highlighted rectangle.
    pub fn highlighted_node(&self) -> Option<T::Node> {
        let rectangles = self.rectangles.as_ref()?;
        self.highlighted.map(|id| rectangles[id].node)
    }

    /// Rectangles of the last computation.
    pub const fn rectangles(&self) -> Option<&RectangleTree<T::Node>> {
        self.rectangles.as_ref()
    }

    /// Deepest rectangle at a point; `None` until rectangles are computed.
    pub fn find_rectangle(&self, x: f32, y: f32) -> Option<RectId> {
        self.rectangles.as_ref().map(|r| r.find_rectangle(x, y))
    }

    /// Lay out the viewing node's subtree into the viewport and reset the
    /// highlight. Does nothing without a model, viewing node or size.
    pub fn compute(&mut self) {
        let (Some(model), Some(viewing), Some(size)) =
            (self.model.as_ref(), self.viewing, self.size)
        else {
            trace!("compute skipped, treemap not ready");
            return;
        };
        let rectangles = self.layout.layout(model, viewing, size.width, size.height);
        debug!(
            ?viewing,
            rectangles = rectangles.len(),
            "treemap computed"
        );
        self.rectangles = Some(rectangles);
        self.highlighted = None;
    }

    /// Paint the whole treemap, or the "no data" notice if nothing has
    /// been computed.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let (Some(model), Some(rectangles)) = (self.model.as_ref(), self.rectangles.as_ref())
        else {
            paint_no_data(canvas);
            return;
        };
        canvas.fill_rect(Rect::from_size(canvas.size()), self.background);

        let ctx = RenderContext {
            model,
            rectangles,
            colors: self.colors.as_ref(),
        };
        let order = rectangles.breadth_first();
        for &id in &order {
            self.renderer.render(canvas, &ctx, id);
        }
        if let Some(labels) = &self.label_renderer {
            for &id in &order {
                labels.render(canvas, &ctx, id);
            }
        }
        if let Some(id) = self.highlighted {
            self.renderer.highlight(canvas, &ctx, id);
            if let Some(labels) = &self.label_renderer {
                labels.highlight(canvas, &ctx, id);
            }
        }
        trace!(rectangles = order.len(), "treemap painted");
    }

    /// Dispatch a pointer event: moves highlight, primary release zooms
    /// in, secondary release zooms out.
    pub fn handle_event(&mut self, event: &Event, canvas: &mut dyn Canvas) {
        match *event {
            Event::Move { position } => self.highlight(position, canvas),
            Event::Release {
                button: MouseButton::Left,
                ..
            } => self.zoom_in(canvas),
            Event::Release {
                button: MouseButton::Right,
                ..
            } => self.zoom_out(canvas),
            Event::Release { .. } => {}
        }
    }

    /// Make the child of the viewing node that contains the highlighted
    /// rectangle the new viewing node, then recompute and repaint.
    ///
    /// Does nothing without a highlight below the viewing node.
    pub fn zoom_in(&mut self, canvas: &mut dyn Canvas) {
        let (Some(model), Some(viewing), Some(node)) =
            (self.model.as_ref(), self.viewing, self.highlighted_node())
        else {
            return;
        };
        let Some(target) = child_towards(model, viewing, node) else {
            trace!(?node, ?viewing, "highlight is not below the viewing node");
            return;
        };
        debug!(from = ?viewing, to = ?target, "zoom in");
        self.viewing = Some(target);
        self.highlighted = None;
        self.compute();
        self.paint(canvas);
    }

    /// Make the parent of the viewing node the new viewing node, then
    /// recompute and repaint. Does nothing at the root.
    pub fn zoom_out(&mut self, canvas: &mut dyn Canvas) {
        let (Some(model), Some(viewing)) = (self.model.as_ref(), self.viewing) else {
            return;
        };
        let Some(parent) = model.parent(viewing) else {
            return;
        };
        debug!(from = ?viewing, to = ?parent, "zoom out");
        self.viewing = Some(parent);
        self.highlighted = None;
        self.compute();
        self.paint(canvas);
    }

    fn highlight(&mut self, position: Point, canvas: &mut dyn Canvas) {
        let (Some(model), Some(rectangles)) = (self.model.as_ref(), self.rectangles.as_ref())
        else {
            return;
        };
        let hit = rectangles.find_rectangle(position.x, position.y);
        if self.highlighted == Some(hit) {
            return;
        }

        let ctx = RenderContext {
            model,
            rectangles,
            colors: self.colors.as_ref(),
        };
        if let Some(previous) = self.highlighted {
            // A branch covers its descendants, so the whole subtree is redrawn.
            let order = rectangles.breadth_first_from(previous);
            for &id in &order {
                self.renderer.render(canvas, &ctx, id);
            }
            if let Some(labels) = &self.label_renderer {
                for &id in &order {
                    labels.render(canvas, &ctx, id);
                }
            }
        }
        self.renderer.highlight(canvas, &ctx, hit);
        if let Some(labels) = &self.label_renderer {
            labels.highlight(canvas, &ctx, hit);
        }
        let node = rectangles[hit].node;

        self.highlighted = Some(hit);
        self.notify(node);
    }

    /// Call every listener, most recently registered first.
    fn notify(&mut self, node: T::Node) {
        let mut listeners = std::mem::take(&mut self.listeners);
        trace!(?node, listeners = listeners.len(), "selection changed");
        for (_, listener) in listeners.iter_mut().rev() {
            listener.selection_changed(self, node);
        }
        self.listeners = listeners;
    }
}

impl<T: WeightedTree> Default for TreeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WeightedTree> fmt::Debug for TreeMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMap")
            .field("has_model", &self.model.is_some())
            .field("viewing", &self.viewing)
            .field("size", &self.size)
            .field("rectangles", &self.rectangles.as_ref().map(RectangleTree::len))
            .field("highlighted", &self.highlighted)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// The child of `ancestor` on the path from `ancestor` down to `node`.
fn child_towards<T: WeightedTree>(model: &T, ancestor: T::Node, node: T::Node) -> Option<T::Node> {
    let mut child = node;
    for parent in ancestors(model, node) {
        if parent == ancestor {
            return Some(child);
        }
        child = parent;
    }
    None
}

fn paint_no_data(canvas: &mut dyn Canvas) {
    let bounds = Rect::from_size(canvas.size());
    canvas.fill_rect(bounds, Color::WHITE);
    let style = TextStyle::default();
    let extent = canvas.measure_text(NO_DATA, &style);
    canvas.draw_text(
        NO_DATA,
        Point::new((bounds.width - extent.width) / 2.0, bounds.height / 2.0),
        &style,
    );
    canvas.stroke_rect(bounds, Color::BLACK, 1.0);
}
