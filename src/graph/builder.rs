use log::debug;

use super::types::{Edge, GraphData, GroupTable, Node};
use crate::common::ConfigBuilder;
use crate::core::{Row, Value};
use crate::error::RowGraphError;
use crate::utils::string::pluralize;

/// Positional column roles of a dataset
///
/// The first row's column order is a structural contract of the input: the
/// first column holds edge sources, the second holds edge targets, and a
/// third column (when present) assigns nodes to groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRoles {
    source: String,
    target: String,
    group: Option<String>,
}

impl ColumnRoles {
    /// Resolve column roles from a dataset's first row
    pub fn resolve(rows: &[Row]) -> Result<Self, RowGraphError> {
        let first = rows.first().ok_or(RowGraphError::EmptyDataset)?;
        let columns: Vec<&str> = first.columns().collect();

        if columns.len() < 2 {
            return Err(RowGraphError::InsufficientColumns {
                found: columns.len(),
            });
        }

        Ok(Self {
            source: columns[0].to_string(),
            target: columns[1].to_string(),
            group: columns.get(2).map(|column| column.to_string()),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// Builder for deriving node-link graphs from query rows
///
/// Derivation is synchronous and re-entrant: every call to [`derive`] starts
/// from scratch, so one builder can serve successive data deliveries without
/// leaking state between them.
///
/// [`derive`]: GraphBuilder::derive
pub struct GraphBuilder {
    groups: GroupTable,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            groups: GroupTable::new(),
        }
    }

    /// Derive the deduplicated node set and the edge list for a dataset
    ///
    /// Nodes are created in first-seen order, one per distinct source value.
    /// A target value gets a node only if it never appears as a source
    /// anywhere in the dataset. Edges are taken from rows verbatim, one per
    /// row, with no deduplication and no validation against the node set.
    ///
    /// Missing cells are tolerated: an absent source, target or group value
    /// flows through as an absent field rather than aborting the derivation.
    pub fn derive(&mut self, rows: &[Row]) -> Result<GraphData, RowGraphError> {
        self.groups = GroupTable::new();

        let roles = ColumnRoles::resolve(rows)?;
        let mut nodes: Vec<Node> = Vec::new();
        let mut edges: Vec<Edge> = Vec::with_capacity(rows.len());

        for row in rows {
            let source = row.value(roles.source()).cloned();
            let target = row.value(roles.target()).cloned();

            // Group membership is an explicit optional: every node derived
            // from a grouped dataset carries its group's table index,
            // including index 0 and indices minted by this very row.
            let group = roles
                .group()
                .map(|column| self.groups.intern(row.value(column)));

            if !has_node(&nodes, source.as_ref()) {
                nodes.push(
                    Node::builder()
                        .with_id(source.clone())
                        .with_group(group)
                        .build()?,
                );
            }

            if !has_node(&nodes, target.as_ref())
                && !appears_as_source(rows, roles.source(), target.as_ref())
            {
                nodes.push(
                    Node::builder()
                        .with_id(target.clone())
                        .with_group(group)
                        .build()?,
                );
            }

            edges.push(Edge::new(source, target));
        }

        debug!(
            "derived {} {} and {} {} from {} {}",
            nodes.len(),
            pluralize("node", nodes.len()),
            edges.len(),
            pluralize("edge", edges.len()),
            rows.len(),
            pluralize("row", rows.len()),
        );

        Ok(GraphData { nodes, edges })
    }

    /// Group table built by the most recent derivation
    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }
}

fn has_node(nodes: &[Node], id: Option<&Value>) -> bool {
    nodes.iter().any(|node| node.id.as_ref() == id)
}

fn appears_as_source(rows: &[Row], source_column: &str, value: Option<&Value>) -> bool {
    rows.iter().any(|row| row.value(source_column) == value)
}
