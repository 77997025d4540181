//! # Configuration Module
//!
//! This module provides the plugin's declarative option surface: the schema
//! the host renders in its visualization editor, and the typed bag of values
//! the host hands back on every data delivery.
//!
//! ## Example
//!
//! ```
//! use rowgraph::config::{OptionSchema, OptionSpec, PluginConfig};
//!
//! let schema = OptionSchema::new()
//!     .with_option("first_option", OptionSpec::string("My First Option", "Default Value"))
//!     .with_option("second_option", OptionSpec::number("My Second Option", 42.0));
//!
//! let config = PluginConfig::new().with("first_option", "custom");
//! assert_eq!(config.text("first_option"), Some("custom"));
//! ```

mod options;

pub use options::{OptionSchema, OptionSpec, OptionType, PluginConfig};
