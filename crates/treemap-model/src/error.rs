//! Error types for treemap-model.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors that can occur while building a tree model from text.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed XML input.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute.
    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] AttrError),

    /// A tree node was not represented by a JSON object.
    #[error("expected a JSON object at '{path}'")]
    NotAnObject {
        /// JSON pointer of the offending value
        path: String,
    },

    /// `children` was present but not an array.
    #[error("'children' must be an array at '{path}'")]
    ChildrenNotArray {
        /// JSON pointer of the offending node
        path: String,
    },

    /// The XML document has no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The XML document ended inside an element.
    #[error("document ended before all elements were closed")]
    Truncated,
}
