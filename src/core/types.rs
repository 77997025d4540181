//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! crate, with minimal logic - focusing on data representation.

use serde::{Deserialize, Serialize};

/// A scalar cell value from a query result
///
/// Equality is on the raw value; text and number never compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Number(number) => write!(f, "{number}"),
        }
    }
}

/// A single query result row: an ordered sequence of column cells
///
/// Column order is significant - the first, second and (optional) third
/// columns of a dataset's first row are interpreted positionally as the
/// source, target and group columns. A cell may be present without a value,
/// which models a row that is missing data for a selected column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Option<Value>)>,
}

impl Row {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Append a cell holding a value
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.push((column.into(), Some(value.into())));
        self
    }

    /// Append a cell for a column this row has no value for
    pub fn with_empty(mut self, column: impl Into<String>) -> Self {
        self.cells.push((column.into(), None));
        self
    }

    /// Column names in declaration order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(column, _)| column.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Look up this row's value for a column
    ///
    /// Returns `None` both for an unknown column and for an empty cell; the
    /// caller decides how tolerant to be.
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_ref())
    }
}
