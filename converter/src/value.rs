//! The projected value tree.
//!
//! A [`Node`] maps field names to [`FieldValue`]s. The first write under a
//! key fixes its shape; a later write of a different shape is rejected with
//! [`ConvertError::ShapeConflict`]. Sets are ordered so serialized output is
//! stable across runs.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ConvertError, Result};

/// Field name carrying a node's identifier.
pub const ID_KEY: &str = "@id";

/// Field name carrying the JSON-LD context.
pub const CONTEXT_KEY: &str = "@context";

/// The value stored under one field of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single string, used for `@id`.
    Scalar(String),
    /// Literal values of a repeated predicate.
    MultiScalar(BTreeSet<String>),
    /// A reconstructed RDF collection, in list order.
    OrderedList(Vec<String>),
    /// Nested objects of a repeated predicate.
    MultiObject(BTreeSet<Node>),
}

impl FieldValue {
    /// Short description of the shape, used in error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Scalar(_) => "scalar",
            FieldValue::MultiScalar(_) => "literal",
            FieldValue::OrderedList(_) => "ordered list",
            FieldValue::MultiObject(_) => "object",
        }
    }

    /// Converts the value into plain JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Scalar(s) => Value::String(s.clone()),
            FieldValue::MultiScalar(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
            FieldValue::OrderedList(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
            FieldValue::MultiObject(nodes) => {
                Value::Array(nodes.iter().map(Node::to_json).collect())
            }
        }
    }
}

/// A JSON object under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Node {
    fields: BTreeMap<String, FieldValue>,
}

impl Node {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node carrying only `@id`.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut node = Self::new();
        node.fields.insert(ID_KEY.to_owned(), FieldValue::Scalar(id.into()));
        node
    }

    /// Returns the node's `@id`, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self.fields.get(ID_KEY) {
            Some(FieldValue::Scalar(id)) => Some(id),
            _ => None,
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Iterates over fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields, `@id` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the node has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds a literal to the set stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ShapeConflict`] if `key` holds another shape.
    pub fn add_literal(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        match self
            .fields
            .entry(key.to_owned())
            .or_insert_with(|| FieldValue::MultiScalar(BTreeSet::new()))
        {
            FieldValue::MultiScalar(values) => {
                values.insert(value.into());
                Ok(())
            }
            other => Err(conflict(key, other, "literal")),
        }
    }

    /// Stores an ordered list under `key`, replacing any earlier list.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ShapeConflict`] if `key` holds another shape.
    pub fn set_list(&mut self, key: &str, values: Vec<String>) -> Result<()> {
        match self.fields.get(key) {
            None | Some(FieldValue::OrderedList(_)) => {
                self.fields
                    .insert(key.to_owned(), FieldValue::OrderedList(values));
                Ok(())
            }
            Some(other) => Err(conflict(key, other, "ordered list")),
        }
    }

    /// Adds a nested object to the set stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ShapeConflict`] if `key` holds another shape.
    pub fn add_object(&mut self, key: &str, node: Node) -> Result<()> {
        match self
            .fields
            .entry(key.to_owned())
            .or_insert_with(|| FieldValue::MultiObject(BTreeSet::new()))
        {
            FieldValue::MultiObject(nodes) => {
                nodes.insert(node);
                Ok(())
            }
            other => Err(conflict(key, other, "object")),
        }
    }

    /// Converts the node into a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.to_json()
    }
}

fn conflict(key: &str, existing: &FieldValue, attempted: &'static str) -> ConvertError {
    ConvertError::ShapeConflict {
        key: key.to_owned(),
        existing: existing.shape(),
        attempted,
    }
}
