//! # Graph Derivation and Rendering Module
//!
//! This module turns flat query rows into a directed node-link graph and
//! assembles the payload handed to the external rendering library.
//!
//! ## Components
//!
//! ### Graph Derivation
//! - **GraphBuilder**: Derives the deduplicated node set and the edge list
//!   from rows
//! - **ColumnRoles**: Resolves the positional source/target/group columns
//! - **Node** / **Edge** / **GraphData**: The derived graph content
//! - **GroupTable**: First-seen ordering of distinct group values
//!
//! ### Rendering Boundary
//! - **NetworkOptions**: The static layout/style configuration
//! - **NetworkRenderer**: Collaborator trait the host's rendering shim
//!   implements
//! - **PayloadRenderer**: Serializes the construction payload as JSON
//!
//! ## Example
//!
//! ```
//! use rowgraph::core::Row;
//! use rowgraph::graph::{GraphBuilder, NetworkOptions, NetworkRenderer, PayloadRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rows = vec![
//!     Row::new().with("source", "orders").with("target", "users"),
//!     Row::new().with("source", "users").with("target", "accounts"),
//! ];
//!
//! let mut builder = GraphBuilder::new();
//! let graph = builder.derive(&rows)?;
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//!
//! // Serialize the construction payload the way a host shim would
//! let mut renderer = PayloadRenderer::new(Vec::new());
//! renderer.render_network(&graph, &NetworkOptions::default())?;
//!
//! let payload = String::from_utf8(renderer.into_inner())?;
//! assert!(payload.contains("\"edges\""));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

// Re-export main types and builders
pub use builder::{ColumnRoles, GraphBuilder};
pub use renderer::{
    EdgeColor, EdgeStyle, FontStyle, HierarchicalLayout, HighlightColor, InteractionOptions,
    LayoutOptions, NetworkOptions, NetworkRenderer, NodeColor, NodeStyle, PayloadRenderer,
    PhysicsOptions,
};
pub use types::{Edge, GraphData, GroupTable, Node, NodeBuilder};
