//! Tree model over nested JSON objects.
//!
//! Every node is an object with optional `label`, `weight` and `children`
//! members:
//!
//! ```json
//! { "label": "root", "weight": 4, "children": [
//!     { "label": "only-child", "weight": 4 }
//! ] }
//! ```
//!
//! Parent links are kept in the model's own arena; the JSON value is never
//! annotated.

use crate::generic::{GenericTreeModel, NodeId};
use crate::ModelError;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::debug;
use treemap_core::WeightedTree;

/// Weighted tree backed by a `serde_json::Value`.
#[derive(Debug, Clone)]
pub struct JsonTreeModel {
    source: Value,
    /// Node data is the JSON pointer of the node's object.
    tree: GenericTreeModel<String>,
}

impl JsonTreeModel {
    /// Build a model from an already parsed value.
    ///
    /// # Errors
    ///
    /// Fails if a node is not a JSON object or `children` is not an array.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let root = value.as_object().ok_or_else(|| ModelError::NotAnObject {
            path: String::new(),
        })?;
        let mut tree = GenericTreeModel::new(label_of(root), weight_of(root), String::new());
        let root_id = tree.root_id();
        add_children(&mut tree, root_id, root, "")?;

        debug!(nodes = tree.len(), "parsed JSON tree model");
        Ok(Self {
            source: value,
            tree,
        })
    }

    /// Parse a model from JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or on a structurally invalid tree.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// The JSON object a node was read from.
    #[must_use]
    pub fn value(&self, node: NodeId) -> Option<&Value> {
        self.source.pointer(self.tree.data(node))
    }

    /// The whole source document.
    #[must_use]
    pub const fn source(&self) -> &Value {
        &self.source
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

impl FromStr for JsonTreeModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

fn add_children(
    tree: &mut GenericTreeModel<String>,
    parent: NodeId,
    object: &Map<String, Value>,
    path: &str,
) -> Result<(), ModelError> {
    let children = match object.get("children") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(children)) => children,
        Some(_) => {
            return Err(ModelError::ChildrenNotArray {
                path: path.to_string(),
            })
        }
    };

    for (i, child) in children.iter().enumerate() {
        let child_path = format!("{path}/children/{i}");
        let Some(child_object) = child.as_object() else {
            return Err(ModelError::NotAnObject { path: child_path });
        };
        let id = tree.add_child(
            parent,
            label_of(child_object),
            weight_of(child_object),
            child_path.clone(),
        );
        add_children(tree, id, child_object, &child_path)?;
    }
    Ok(())
}

fn weight_of(object: &Map<String, Value>) -> f64 {
    match object.get("weight") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn label_of(object: &Map<String, Value>) -> String {
    match object.get("label") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl WeightedTree for JsonTreeModel {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested() {
        let model = JsonTreeModel::from_json(
            r#"{ "label": "root", "weight": 4, "children": [
                { "label": "only-child", "weight": 4, "children": [] }
            ] }"#,
        )
        .unwrap();
        let root = model.root();
        assert_eq!(model.label(root), "root");
        assert_eq!(model.weight(root), 4.0);
        let children = model.children(root);
        assert_eq!(children.len(), 1);
        assert_eq!(model.label(children[0]), "only-child");
        assert_eq!(model.parent(children[0]), Some(root));
        assert!(!model.has_children(children[0]));
    }

    #[test]
    fn test_missing_fields_default() {
        let model = JsonTreeModel::from_value(json!({ "children": [{}] })).unwrap();
        let root = model.root();
        assert_eq!(model.weight(root), 0.0);
        assert_eq!(model.label(root), "");
        let child = model.children(root)[0];
        assert_eq!(model.weight(child), 0.0);
    }

    #[test]
    fn test_weight_and_label_coercion() {
        let model =
            JsonTreeModel::from_value(json!({ "label": 7, "weight": " 2.5 " })).unwrap();
        assert_eq!(model.label(model.root()), "7");
        assert_eq!(model.weight(model.root()), 2.5);

        let negative = JsonTreeModel::from_value(json!({ "weight": -1 })).unwrap();
        assert_eq!(negative.weight(negative.root()), 0.0);
    }

    #[test]
    fn test_source_value_untouched() {
        let value = json!({ "label": "r", "children": [{ "label": "c" }] });
        let model = JsonTreeModel::from_value(value.clone()).unwrap();
        assert_eq!(model.source(), &value);
        let child = model.children(model.root())[0];
        assert_eq!(model.value(child), Some(&json!({ "label": "c" })));
        assert_eq!(model.value(model.root()), Some(&value));
    }

    #[test]
    fn test_rejects_non_object_child() {
        let err = JsonTreeModel::from_value(json!({ "children": [{}, 3] })).unwrap_err();
        match err {
            ModelError::NotAnObject { path } => assert_eq!(path, "/children/1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_children_not_array() {
        let err = JsonTreeModel::from_value(json!({ "children": {} })).unwrap_err();
        assert!(matches!(err, ModelError::ChildrenNotArray { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            "[1, 2".parse::<JsonTreeModel>(),
            Err(ModelError::Json(_))
        ));
        assert!(matches!(
            JsonTreeModel::from_json("[]"),
            Err(ModelError::NotAnObject { .. })
        ));
    }
}
