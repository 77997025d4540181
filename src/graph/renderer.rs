use std::io::Write;

use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::error::RowGraphError;
use crate::graph::GraphData;

// Fixed style palette for the rendered network
mod palette {
    pub const NODE_FILL: &str = "lightblue";
    pub const NODE_STROKE: &str = "blue";
    pub const NODE_HOVER: &str = "red";
    pub const NODE_HIGHLIGHT_FILL: &str = "lightcyan";
    pub const NODE_HIGHLIGHT_STROKE: &str = "cyan";
    pub const NODE_FONT: &str = "black";
    pub const EDGE: &str = "black";
    pub const EDGE_HOVER: &str = "red";
    pub const EDGE_HIGHLIGHT: &str = "#F7E7CE";
}

/// Static layout and style configuration for the rendering library
///
/// Nothing in here derives from data: the default value is the complete
/// configuration the plugin hands to the network constructor - a hierarchical
/// left-to-right layout over fixed, box-shaped nodes with physics disabled.
/// Field names serialize in the rendering library's camelCase convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkOptions {
    pub layout: LayoutOptions,
    pub nodes: NodeStyle,
    pub edges: EdgeStyle,
    pub interaction: InteractionOptions,
    pub physics: PhysicsOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutOptions {
    pub hierarchical: HierarchicalLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalLayout {
    pub direction: String,
    pub sort_method: String,
}

impl Default for HierarchicalLayout {
    fn default() -> Self {
        Self {
            direction: "LR".to_string(),
            sort_method: "directed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub fixed: bool,
    pub shape: String,
    pub size: u32,
    pub border_width: u32,
    pub color: NodeColor,
    pub font: FontStyle,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fixed: true,
            shape: "box".to_string(),
            size: 40,
            border_width: 1,
            color: NodeColor::default(),
            font: FontStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeColor {
    pub background: String,
    pub border: String,
    pub hover: String,
    pub highlight: HighlightColor,
}

impl Default for NodeColor {
    fn default() -> Self {
        Self {
            background: palette::NODE_FILL.to_string(),
            border: palette::NODE_STROKE.to_string(),
            hover: palette::NODE_HOVER.to_string(),
            highlight: HighlightColor::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightColor {
    pub background: String,
    pub border: String,
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self {
            background: palette::NODE_HIGHLIGHT_FILL.to_string(),
            border: palette::NODE_HIGHLIGHT_STROKE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontStyle {
    pub size: u32,
    pub color: String,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size: 16,
            color: palette::NODE_FONT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    pub arrows: String,
    pub width: u32,
    pub color: EdgeColor,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            arrows: "to".to_string(),
            width: 2,
            color: EdgeColor::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeColor {
    pub color: String,
    pub hover: String,
    pub highlight: String,
}

impl Default for EdgeColor {
    fn default() -> Self {
        Self {
            color: palette::EDGE.to_string(),
            hover: palette::EDGE_HOVER.to_string(),
            highlight: palette::EDGE_HIGHLIGHT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionOptions {
    pub hover: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self { hover: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicsOptions {
    pub enabled: bool,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self { enabled: false }
    }
}

/// Collaborator boundary to the external rendering library
///
/// The plugin hands the derived graph and the static options to an injected
/// implementation of this trait instead of reaching for an ambient rendering
/// global, so the derivation stays independently testable. Rendering may
/// complete asynchronously on the host side; implementations return once the
/// construction call has been issued.
pub trait NetworkRenderer {
    fn render_network(
        &mut self,
        graph: &GraphData,
        options: &NetworkOptions,
    ) -> Result<(), RowGraphError>;
}

/// Renderer that serializes the network-construction payload as JSON
///
/// Writes `{"nodes": .., "edges": .., "options": ..}` to the wrapped sink -
/// the form a host shim forwards to the rendering library's constructor.
/// Output is deterministic for a given graph.
pub struct PayloadRenderer<W: Write> {
    output: W,
    pretty: bool,
}

impl<W: Write> PayloadRenderer<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            pretty: false,
        }
    }

    /// Pretty-printed variant, for payloads meant to be read by people
    pub fn pretty(output: W) -> Self {
        Self {
            output,
            pretty: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> NetworkRenderer for PayloadRenderer<W> {
    fn render_network(
        &mut self,
        graph: &GraphData,
        options: &NetworkOptions,
    ) -> Result<(), RowGraphError> {
        let payload = json!({
            "nodes": graph.nodes,
            "edges": graph.edges,
            "options": options,
        });

        let text = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };

        self.output.write_all(text.as_bytes())?;
        self.output.write_all(b"\n")?;

        debug!(
            "issued render payload: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(())
    }
}
