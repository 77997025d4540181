//! Host adapter boundary
//!
//! The analytics host drives a visualization instance through two hooks:
//! a mount hook called once before any data arrives, and an update hook
//! called on every data delivery. The host also registers the declarative
//! option schema and supplies a completion callback that must be invoked
//! exactly once per successful update, after the graph has been handed to
//! the rendering library.
//!
//! The plugin consumes only the delivered rows; option values, the query
//! shape and render details are carried through for the host's benefit and
//! never influence derivation.

use log::{debug, info};
use miette::{Result, WrapErr};

use crate::common::ConfigBuilder;
use crate::config::{OptionSchema, OptionSpec, PluginConfig};
use crate::core::Row;
use crate::graph::{GraphBuilder, NetworkOptions, NetworkRenderer};
use crate::utils::string::pluralize;

/// Everything the host delivers with one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContext {
    rows: Vec<Row>,
    config: PluginConfig,
    query_shape: Option<serde_json::Value>,
    render_details: Option<serde_json::Value>,
}

impl UpdateContext {
    pub fn builder() -> UpdateContextBuilder {
        UpdateContextBuilder::new()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn query_shape(&self) -> Option<&serde_json::Value> {
        self.query_shape.as_ref()
    }

    pub fn render_details(&self) -> Option<&serde_json::Value> {
        self.render_details.as_ref()
    }
}

#[derive(Default)]
pub struct UpdateContextBuilder {
    rows: Option<Vec<Row>>,
    config: Option<PluginConfig>,
    query_shape: Option<serde_json::Value>,
    render_details: Option<serde_json::Value>,
}

impl UpdateContextBuilder {
    pub fn new() -> Self {
        Self {
            rows: None,
            config: None,
            query_shape: None,
            render_details: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_config(mut self, config: PluginConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_query_shape(mut self, query_shape: serde_json::Value) -> Self {
        self.query_shape = Some(query_shape);
        self
    }

    pub fn with_render_details(mut self, render_details: serde_json::Value) -> Self {
        self.render_details = Some(render_details);
        self
    }
}

impl ConfigBuilder for UpdateContextBuilder {
    type Config = UpdateContext;

    fn build(self) -> Result<Self::Config, crate::error::RowGraphError> {
        Ok(UpdateContext {
            rows: self
                .rows
                .ok_or_else(|| crate::error::RowGraphError::ConfigurationError {
                    message: "Missing required field: rows".to_string(),
                })?,
            config: self.config.unwrap_or_default(),
            query_shape: self.query_shape,
            render_details: self.render_details,
        })
    }
}

/// A node-link graph visualization instance
///
/// The rendering library is injected as a [`NetworkRenderer`] collaborator,
/// so the plugin itself never touches an ambient rendering global and stays
/// testable without a host.
pub struct NodeGraphPlugin<R: NetworkRenderer> {
    renderer: R,
    builder: GraphBuilder,
    options: NetworkOptions,
}

impl<R: NetworkRenderer> NodeGraphPlugin<R> {
    /// The declarative option schema the host registers for this plugin
    ///
    /// Two stock options, one string and one number. Neither affects graph
    /// derivation.
    pub fn option_schema() -> OptionSchema {
        OptionSchema::new()
            .with_option(
                "first_option",
                OptionSpec::string("My First Option", "Default Value"),
            )
            .with_option("second_option", OptionSpec::number("My Second Option", 42.0))
    }

    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            builder: GraphBuilder::new(),
            options: NetworkOptions::default(),
        }
    }

    /// Mount hook, called once before any data is delivered
    pub fn create(&mut self) {
        info!("node graph visualization mounted, ready to render");
    }

    /// Data delivery hook
    ///
    /// Derives the graph for the delivered rows, hands it to the renderer
    /// together with the static options, then signals completion. `done` is
    /// invoked exactly once per successful update and not at all when the
    /// update fails.
    pub fn update(&mut self, context: &UpdateContext, done: impl FnOnce()) -> Result<()> {
        debug!(
            "update: {} {} delivered",
            context.rows().len(),
            pluralize("row", context.rows().len()),
        );

        let graph = self
            .builder
            .derive(context.rows())
            .wrap_err("Failed to derive node-link graph from query rows")?;

        self.renderer
            .render_network(&graph, &self.options)
            .wrap_err("Failed to hand the graph to the rendering library")?;

        done();
        Ok(())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
