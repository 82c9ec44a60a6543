//! Color providers assigning a fill color to each rectangle.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use treemap_core::Color;
use treemap_layout::{RectId, RectangleTree};

/// Chooses the color a rectangle is painted with.
pub trait ColorProvider<N> {
    /// Color of the rectangle `id` in `rectangles`.
    fn color(&self, rectangles: &RectangleTree<N>, id: RectId) -> Color;
}

/// Paints every rectangle in the same color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoColorProvider {
    color: Color,
}

impl MonoColorProvider {
    /// Provider returning `color` for every rectangle.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for MonoColorProvider {
    fn default() -> Self {
        Self::new(Color::NAVY)
    }
}

impl<N> ColorProvider<N> for MonoColorProvider {
    fn color(&self, _rectangles: &RectangleTree<N>, _id: RectId) -> Color {
        self.color
    }
}

/// Blue pastel palette used by [`PaletteColorProvider::default`].
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#9669ae", "#a27aae", "#ad8bae", "#b89aae", "#c4abae", "#d0bcae", "#ddceaf", "#e6dbaf",
];

/// Picks a palette entry by hashing the rectangle's source node.
///
/// The same node always gets the same color, so zooming keeps colors
/// stable.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColorProvider {
    colors: Vec<Color>,
}

impl PaletteColorProvider {
    /// Provider cycling through `colors`; an empty list selects the default
    /// palette.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Palette entries.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for PaletteColorProvider {
    fn default() -> Self {
        let colors = DEFAULT_PALETTE
            .iter()
            .filter_map(|hex| Color::from_hex(hex).ok())
            .collect();
        Self { colors }
    }
}

impl<N: Hash> ColorProvider<N> for PaletteColorProvider {
    fn color(&self, rectangles: &RectangleTree<N>, id: RectId) -> Color {
        let mut hasher = DefaultHasher::new();
        rectangles[id].node.hash(&mut hasher);
        let index = (hasher.finish() % self.colors.len() as u64) as usize;
        self.colors[index]
    }
}
