//! Integration tests for graph derivation using the library interface

use pretty_assertions::assert_eq;
use rowgraph::core::{Row, Value};
use rowgraph::error::RowGraphError;
use rowgraph::graph::{Edge, GraphBuilder, GraphData};

/// Type alias for row definition: (source, target, optional group)
type RowDefinition<'a> = (&'a str, &'a str, Option<&'a str>);

fn dataset(definitions: &[RowDefinition]) -> Vec<Row> {
    definitions
        .iter()
        .map(|(source, target, group)| {
            let row = Row::new().with("source", *source).with("target", *target);
            match group {
                Some(group) => row.with("group", *group),
                None => row,
            }
        })
        .collect()
}

fn derive(rows: &[Row]) -> GraphData {
    GraphBuilder::new().derive(rows).unwrap()
}

fn node_ids(graph: &GraphData) -> Vec<Option<Value>> {
    graph.nodes.iter().map(|node| node.id.clone()).collect()
}

#[test]
fn test_single_row_produces_two_nodes_and_one_edge() {
    let rows = dataset(&[("X", "Y", None)]);

    let graph = derive(&rows);

    assert_eq!(
        node_ids(&graph),
        vec![Some(Value::from("X")), Some(Value::from("Y"))]
    );
    assert_eq!(
        graph.edges,
        vec![Edge::new(Some(Value::from("X")), Some(Value::from("Y")))]
    );
}

#[test]
fn test_chained_rows_add_each_value_once() {
    let rows = dataset(&[("X", "Y", None), ("Y", "Z", None)]);

    let graph = derive(&rows);

    assert_eq!(
        node_ids(&graph),
        vec![
            Some(Value::from("X")),
            Some(Value::from("Y")),
            Some(Value::from("Z")),
        ]
    );
    assert_eq!(
        graph.edges,
        vec![
            Edge::new(Some(Value::from("X")), Some(Value::from("Y"))),
            Edge::new(Some(Value::from("Y")), Some(Value::from("Z"))),
        ]
    );
}

#[test]
fn test_edge_count_equals_row_count_for_every_dataset() {
    let datasets = [
        dataset(&[("X", "Y", None)]),
        dataset(&[("X", "Y", None), ("X", "Y", None), ("X", "Y", None)]),
        dataset(&[("X", "X", None), ("Y", "Z", None)]),
        dataset(&[("A", "B", Some("g1")), ("B", "C", Some("g2"))]),
    ];

    for rows in &datasets {
        let graph = derive(rows);
        assert_eq!(graph.edge_count(), rows.len());
    }
}

#[test]
fn test_node_ids_are_unique_for_every_dataset() {
    let rows = dataset(&[
        ("X", "Y", None),
        ("Y", "X", None),
        ("X", "Z", None),
        ("Z", "Y", None),
    ]);

    let graph = derive(&rows);

    let ids = node_ids(&graph);
    for (position, id) in ids.iter().enumerate() {
        assert!(
            !ids[position + 1..].contains(id),
            "duplicate node id: {id:?}"
        );
    }
}

#[test]
fn test_target_only_value_becomes_a_node() {
    let rows = dataset(&[("X", "Y", None), ("X", "Z", None)]);

    let graph = derive(&rows);

    assert!(node_ids(&graph).contains(&Some(Value::from("Z"))));
}

#[test]
fn test_value_appearing_as_source_anywhere_is_never_added_from_target_position() {
    // Q is the target of the first row but a source only in the last row;
    // the whole dataset is scanned, so Q waits for its source position.
    let rows = dataset(&[("X", "Q", None), ("X", "Y", None), ("Q", "Z", None)]);

    let graph = derive(&rows);

    assert_eq!(
        node_ids(&graph),
        vec![
            Some(Value::from("X")),
            Some(Value::from("Y")),
            Some(Value::from("Q")),
            Some(Value::from("Z")),
        ]
    );
}

#[test]
fn test_grouped_dataset_assigns_first_seen_group_indices() {
    let rows = dataset(&[
        ("X", "Y", Some("emea")),
        ("Y", "Z", Some("apac")),
        ("W", "X", Some("emea")),
    ]);

    let graph = derive(&rows);

    let groups: Vec<(Option<Value>, Option<usize>)> = graph
        .nodes
        .iter()
        .map(|node| (node.id.clone(), node.group))
        .collect();
    // A node takes the group index of the row that created it: Y is deferred
    // to its source position in the apac row, and Z rides along with it.
    assert_eq!(
        groups,
        vec![
            (Some(Value::from("X")), Some(0)),
            (Some(Value::from("Y")), Some(1)),
            (Some(Value::from("Z")), Some(1)),
            (Some(Value::from("W")), Some(0)),
        ]
    );
}

#[test]
fn test_first_group_gets_index_zero_and_keeps_it() {
    let rows = dataset(&[("X", "Y", Some("emea"))]);

    let graph = derive(&rows);

    assert!(graph.nodes.iter().all(|node| node.group == Some(0)));
}

#[test]
fn test_ungrouped_dataset_attaches_no_groups() {
    let rows = dataset(&[("X", "Y", None), ("Y", "Z", None)]);

    let graph = derive(&rows);

    assert!(graph.nodes.iter().all(|node| node.group.is_none()));
}

#[test]
fn test_missing_target_cell_still_produces_an_edge() {
    let rows = vec![Row::new().with("source", "X").with_empty("target")];

    let graph = derive(&rows);

    assert_eq!(graph.edges, vec![Edge::new(Some(Value::from("X")), None)]);
}

#[test]
fn test_derivation_is_deterministic() {
    let rows = dataset(&[
        ("X", "Y", Some("emea")),
        ("Y", "Z", Some("apac")),
        ("Z", "X", Some("emea")),
        ("X", "X", Some("apac")),
    ]);

    let first = GraphBuilder::new().derive(&rows).unwrap();
    let second = GraphBuilder::new().derive(&rows).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_dataset_reports_an_explicit_error() {
    let result = GraphBuilder::new().derive(&[]);

    assert!(matches!(result, Err(RowGraphError::EmptyDataset)));
}

#[test]
fn test_single_column_dataset_reports_an_explicit_error() {
    let rows = vec![Row::new().with("source", "X")];

    let result = GraphBuilder::new().derive(&rows);

    assert!(matches!(
        result,
        Err(RowGraphError::InsufficientColumns { found: 1 })
    ));
}
