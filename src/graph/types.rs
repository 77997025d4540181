//! Core graph types
//!
//! This module contains the fundamental data structures used in the derived
//! node-link graph.

use serde::Serialize;

use crate::core::Value;

/// A node in the derived graph
///
/// `id` and `label` carry the same cell value. `group` is the index of the
/// node's group value in the [`GroupTable`], present only for grouped
/// datasets. Absent fields are omitted from the serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

impl Node {
    pub fn builder() -> NodeBuilder {
        NodeBuilder::new()
    }
}

pub struct NodeBuilder {
    id: Option<Option<Value>>,
    label: Option<Option<Value>>,
    group: Option<usize>,
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            label: None,
            group: None,
        }
    }

    pub fn with_id(mut self, id: Option<Value>) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_label(mut self, label: Option<Value>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_group(mut self, group: Option<usize>) -> Self {
        self.group = group;
        self
    }
}

impl crate::common::ConfigBuilder for NodeBuilder {
    type Config = Node;

    fn build(self) -> Result<Self::Config, crate::error::RowGraphError> {
        let id = self
            .id
            .ok_or_else(|| crate::error::RowGraphError::ConfigurationError {
                message: "Missing required field: id".to_string(),
            })?;
        // The label mirrors the id unless set explicitly
        let label = self.label.unwrap_or_else(|| id.clone());

        Ok(Node {
            id,
            label,
            group: self.group,
        })
    }
}

/// A directed edge in the derived graph
///
/// Edges are taken straight from rows and are never validated against the
/// node set; an endpoint may reference no node at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
}

impl Edge {
    pub fn new(from: Option<Value>, to: Option<Value>) -> Self {
        Self { from, to }
    }
}

/// The derived graph content handed to the rendering library
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Insertion-ordered table of distinct group-column values
///
/// A value's group index is its position in this table. A row with no group
/// cell interns an empty entry, so ungrouped rows of a grouped dataset share
/// one index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTable {
    entries: Vec<Option<Value>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Position of a value in the table, if it has been seen before
    pub fn index_of(&self, value: Option<&Value>) -> Option<usize> {
        self.entries.iter().position(|entry| entry.as_ref() == value)
    }

    /// Find a value's position, appending it first if unseen
    pub fn intern(&mut self, value: Option<&Value>) -> usize {
        match self.index_of(value) {
            Some(position) => position,
            None => {
                self.entries.push(value.cloned());
                self.entries.len() - 1
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::RowGraphError;

    #[test]
    fn test_node_builder_requires_id() {
        let result = Node::builder().build();

        match result {
            Err(RowGraphError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: id");
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_node_label_mirrors_id() {
        let node = Node::builder()
            .with_id(Some(Value::from("users")))
            .build()
            .unwrap();

        assert_eq!(node.id, Some(Value::from("users")));
        assert_eq!(node.label, Some(Value::from("users")));
        assert_eq!(node.group, None);
    }

    #[test]
    fn test_node_with_absent_id_builds() {
        let node = Node::builder().with_id(None).build().unwrap();

        assert_eq!(node.id, None);
        assert_eq!(node.label, None);
    }

    #[test]
    fn test_node_serialization_omits_absent_fields() {
        let node = Node::builder().with_id(None).build().unwrap();

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_group_table_interns_in_first_seen_order() {
        let mut table = GroupTable::new();

        let emea = Value::from("emea");
        let apac = Value::from("apac");

        assert_eq!(table.intern(Some(&emea)), 0);
        assert_eq!(table.intern(Some(&apac)), 1);
        assert_eq!(table.intern(Some(&emea)), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_group_table_interns_missing_value_once() {
        let mut table = GroupTable::new();

        assert_eq!(table.intern(None), 0);
        assert_eq!(table.intern(None), 0);
        assert_eq!(table.intern(Some(&Value::from("emea"))), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_group_table_index_of_unseen_value() {
        let table = GroupTable::new();

        assert_eq!(table.index_of(Some(&Value::from("emea"))), None);
        assert!(table.is_empty());
    }
}
