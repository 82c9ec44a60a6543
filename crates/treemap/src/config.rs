//! YAML configuration for a [`TreeMap`](crate::TreeMap).
//!
//! ```yaml
//! max_depth: 3
//! background: "#ffffff"
//! palette: ["#9669ae", "#e6dbaf"]
//! cushion: true
//! show_labels: true
//! ```
//!
//! Missing fields take their defaults; unknown fields are rejected.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use treemap_core::Color;
use treemap_layout::SquarifiedLayout;

/// Treemap appearance and navigation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeMapConfig {
    /// Levels laid out below the viewing node (at least 1)
    pub max_depth: usize,
    /// Canvas background painted before the rectangles
    pub background: String,
    /// Outline color of the highlighted rectangle
    pub highlight_color: String,
    /// Fill color used when no palette is given
    pub mono_color: String,
    /// Colors picked per node; empty selects the mono color
    pub palette: Vec<String>,
    /// Use cushion shading instead of flat fills
    pub cushion: bool,
    /// Draw node labels
    pub show_labels: bool,
    /// Also label a root that has children
    pub show_root_label: bool,
}

impl Default for TreeMapConfig {
    fn default() -> Self {
        Self {
            max_depth: SquarifiedLayout::DEFAULT_MAX_DEPTH,
            background: "#ffffff".to_string(),
            highlight_color: "#ff0000".to_string(),
            mono_color: "#000080".to_string(),
            palette: Vec::new(),
            cushion: false,
            show_labels: false,
            show_root_label: false,
        }
    }
}

fn parse_color(field: &str, hex: &str) -> Result<Color, ConfigError> {
    Color::from_hex(hex).map_err(|source| ConfigError::Color {
        field: field.to_string(),
        source,
    })
}

impl TreeMapConfig {
    /// Parse and validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or an invalid field.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check value ranges and color syntax.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_depth".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.background_color()?;
        self.highlight()?;
        self.mono()?;
        self.palette_colors()?;
        Ok(())
    }

    /// Parsed `background`.
    pub fn background_color(&self) -> Result<Color, ConfigError> {
        parse_color("background", &self.background)
    }

    /// Parsed `highlight_color`.
    pub fn highlight(&self) -> Result<Color, ConfigError> {
        parse_color("highlight_color", &self.highlight_color)
    }

    /// Parsed `mono_color`.
    pub fn mono(&self) -> Result<Color, ConfigError> {
        parse_color("mono_color", &self.mono_color)
    }

    /// Parsed `palette`, in order.
    pub fn palette_colors(&self) -> Result<Vec<Color>, ConfigError> {
        self.palette
            .iter()
            .enumerate()
            .map(|(i, hex)| parse_color(&format!("palette[{i}]"), hex))
            .collect()
    }
}
