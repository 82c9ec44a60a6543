//! Squarified treemap with highlight and zoom navigation.
//!
//! This crate ties the workspace together: it re-exports the geometry,
//! layout and model crates and adds the [`TreeMap`] controller, color
//! providers, rectangle renderers and YAML configuration.
//!
//! ```
//! use treemap::{JsonTreeModel, RecordingCanvas, TreeMap, TreeMapConfig};
//!
//! let model = JsonTreeModel::from_json(
//!     r#"{ "label": "disk", "weight": 10, "children": [
//!         { "label": "home", "weight": 7 },
//!         { "label": "usr", "weight": 3 }
//!     ] }"#,
//! )?;
//! let config = TreeMapConfig::from_yaml("max_depth: 1\nshow_labels: true")?;
//!
//! let mut treemap = TreeMap::from_config(&config)?;
//! treemap.set_tree_model(Some(model));
//! treemap.set_size(200.0, 100.0);
//! treemap.compute();
//!
//! let mut canvas = RecordingCanvas::new(200.0, 100.0);
//! treemap.paint(&mut canvas);
//! // Siblings are painted last-added first.
//! assert_eq!(canvas.texts(), vec!["usr", "home"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod color;
mod config;
mod controller;
mod error;
mod render;

pub use color::{ColorProvider, MonoColorProvider, PaletteColorProvider, DEFAULT_PALETTE};
pub use config::TreeMapConfig;
pub use controller::{ListenerId, SelectionListener, TreeMap};
pub use error::ConfigError;
pub use render::{
    CushionRectangleRenderer, DefaultRectangleRenderer, LabelRenderer, RectangleRenderer,
    RenderContext,
};

pub use treemap_core::*;
pub use treemap_layout::{Rectangle, RectId, RectangleTree, SquarifiedLayout, TreeMapLayout};
pub use treemap_model::{GenericTreeModel, JsonTreeModel, ModelError, NodeId, XmlTreeModel};
