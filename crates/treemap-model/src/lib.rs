//! Tree models feeding the treemap layout.
//!
//! Each model implements [`WeightedTree`](treemap_core::WeightedTree):
//!
//! - [`GenericTreeModel`]: built in code, with optional per-node data.
//! - [`JsonTreeModel`]: nested JSON objects with `label`, `weight`, `children`.
//! - [`XmlTreeModel`]: nested `<node label=".." weight="..">` elements.

mod error;
mod generic;
mod json;
mod xml;

pub use error::ModelError;
pub use generic::{GenericTreeModel, NodeId};
pub use json::JsonTreeModel;
pub use xml::XmlTreeModel;
