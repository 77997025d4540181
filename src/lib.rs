//! # Rowgraph - Render Query Results as a Directed Node-Link Graph
//!
//! Rowgraph is the core of a host-loaded visualization plugin for an
//! analytics platform. It receives tabular query results and derives a
//! deduplicated, optionally grouped node set plus an edge list, then hands
//! the graph and a static style configuration to an external
//! network-rendering library.
//!
//! ## Main Components
//!
//! - **GraphBuilder**: Derives `{nodes, edges}` from flat rows; the first
//!   two columns name edge sources and targets, an optional third column
//!   assigns groups
//! - **NetworkOptions / NetworkRenderer**: The static render configuration
//!   and the injected boundary to the rendering library
//! - **Plugin**: The host adapter surface - option schema, mount hook,
//!   update hook and completion-callback contract
//! - **Config**: Declarative plugin options rendered by the host's editor
//!
//! ## Usage
//!
//! ### Deriving a graph from rows
//!
//! ```
//! use rowgraph::core::Row;
//! use rowgraph::graph::GraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! let rows = vec![
//!     Row::new().with("source", "orders").with("target", "users"),
//!     Row::new().with("source", "users").with("target", "accounts"),
//! ];
//!
//! let mut builder = GraphBuilder::new();
//! let graph = builder.derive(&rows)?;
//!
//! // One node per distinct source value; a target-only value gets a node
//! // of its own. One edge per row, always.
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving the full plugin lifecycle
//!
//! ```
//! use rowgraph::common::ConfigBuilder;
//! use rowgraph::config::PluginConfig;
//! use rowgraph::core::Row;
//! use rowgraph::graph::PayloadRenderer;
//! use rowgraph::plugin::{NodeGraphPlugin, UpdateContext};
//!
//! # fn main() -> miette::Result<()> {
//! // The host registers the declarative option schema once
//! let schema = NodeGraphPlugin::<PayloadRenderer<Vec<u8>>>::option_schema();
//! assert_eq!(schema.len(), 2);
//!
//! // A PayloadRenderer stands in for the host's rendering shim
//! let mut plugin = NodeGraphPlugin::new(PayloadRenderer::new(Vec::new()));
//! plugin.create();
//!
//! let rows = vec![
//!     Row::new()
//!         .with("source", "orders")
//!         .with("target", "users")
//!         .with("group", "core"),
//!     Row::new()
//!         .with("source", "users")
//!         .with("target", "accounts")
//!         .with("group", "auth"),
//! ];
//!
//! let context = UpdateContext::builder()
//!     .with_rows(rows)
//!     .with_config(PluginConfig::new().with("first_option", "custom"))
//!     .build()?;
//!
//! let mut rendered = false;
//! plugin.update(&context, || rendered = true)?;
//! assert!(rendered);
//! # Ok(())
//! # }
//! ```

// Private modules
mod utils;

// Public modules
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod plugin;
