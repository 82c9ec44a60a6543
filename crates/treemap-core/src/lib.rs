//! Core types and traits for the treemap visualization.
//!
//! This crate provides foundational types used throughout the workspace:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Pointer input: [`Event`], [`MouseButton`]
//! - Drawing surface: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Tree access: [`WeightedTree`]

mod canvas;
mod color;
pub mod draw;
mod error;
mod event;
mod geometry;
pub mod tree;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::Color;
pub use draw::{DrawCommand, RadialGradient, TextStyle};
pub use error::{ColorParseError, GeometryError};
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use tree::WeightedTree;
