//! Tree model over an XML document of `node` elements.
//!
//! The document element is the root node. Below it only `node` elements
//! count as children; any other element hides its whole subtree.
//!
//! ```xml
//! <node label="root" weight="3">
//!   <node label="a" weight="2"/>
//!   <node label="b" weight="1"/>
//! </node>
//! ```

use crate::generic::{GenericTreeModel, NodeId};
use crate::ModelError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use std::str::FromStr;
use tracing::{debug, trace};
use treemap_core::WeightedTree;

const NODE_TAG: &[u8] = b"node";

/// Weighted tree read from XML.
#[derive(Debug, Clone)]
pub struct XmlTreeModel {
    tree: GenericTreeModel,
}

impl XmlTreeModel {
    /// Parse a model from XML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed XML, on a document without an element and on a
    /// document that ends before its elements are closed.
    pub fn from_xml(text: &str) -> Result<Self, ModelError> {
        let mut reader = Reader::from_str(text);
        reader.trim_text(true);

        let mut tree: Option<GenericTreeModel> = None;
        // One entry per open element; `None` marks elements outside the tree.
        let mut open: Vec<Option<NodeId>> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let id = enter(&mut tree, open.last().copied(), e)?;
                    open.push(id);
                }
                Event::Empty(ref e) => {
                    enter(&mut tree, open.last().copied(), e)?;
                }
                Event::End(_) => {
                    open.pop();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !open.is_empty() {
            return Err(ModelError::Truncated);
        }
        let tree = tree.ok_or(ModelError::MissingRoot)?;
        debug!(nodes = tree.len(), "parsed XML tree model");
        Ok(Self { tree })
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Always false: a model holds at least its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Register an opening element and return its node, if it is part of the tree.
fn enter(
    tree: &mut Option<GenericTreeModel>,
    parent: Option<Option<NodeId>>,
    element: &BytesStart<'_>,
) -> Result<Option<NodeId>, ModelError> {
    if tree.is_none() {
        let (label, weight) = read_attributes(element)?;
        let model = GenericTreeModel::new(label, weight, ());
        let root = model.root_id();
        *tree = Some(model);
        return Ok(Some(root));
    }
    match (tree.as_mut(), parent) {
        (Some(model), Some(Some(parent))) if element.name().as_ref() == NODE_TAG => {
            let (label, weight) = read_attributes(element)?;
            Ok(Some(model.add_child(parent, label, weight, ())))
        }
        _ => {
            trace!(
                element = %String::from_utf8_lossy(element.name().as_ref()),
                "skipping element outside the tree"
            );
            Ok(None)
        }
    }
}

fn read_attributes(element: &BytesStart<'_>) -> Result<(String, f64), ModelError> {
    let mut label = String::new();
    let mut weight = 0.0;
    for attr in element.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"label" => label = attr.unescape_value()?.into_owned(),
            b"weight" => weight = attr.unescape_value()?.trim().parse().unwrap_or(0.0),
            _ => {}
        }
    }
    Ok((label, weight))
}

impl FromStr for XmlTreeModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_xml(s)
    }
}

impl WeightedTree for XmlTreeModel {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.tree.root_id()
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.children(node)
    }

    fn has_children(&self, node: NodeId) -> bool {
        self.tree.has_children(node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    fn weight(&self, node: NodeId) -> f64 {
        self.tree.weight(node)
    }

    fn label(&self, node: NodeId) -> Cow<'_, str> {
        self.tree.label(node)
    }
}
