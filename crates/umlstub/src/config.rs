//! Configuration types for stub generation.
//!
//! This module provides configuration structures that control which diagram
//! elements are read, where stubs land, and how they are rendered. All types
//! implement [`serde::Deserialize`] so they can be loaded from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`DiagramConfig`] - Which diagram elements are treated as class nodes.
//! - [`OutputConfig`] - File naming in the output tree.
//! - [`RenderConfig`] - Text emitted into every stub.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! [diagram]
//! node_kind = "UMLClass"
//!
//! [output]
//! extension = "py"
//! namespace_marker = "__init__.py"
//! backup_suffix = ".bak"
//!
//! [render]
//! indent = "    "
//! singleton_import = "from singleton_decorator import singleton"
//! singleton_decorator = "@singleton"
//! parameter_placeholder = "INSERT PARAMETER DESCRIPTION HERE"
//! ```
//!
//! # Example
//!
//! ```
//! # use umlstub::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.diagram().node_kind(), "UMLClass");
//! assert_eq!(config.output().extension(), "py");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram reading section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Output tree section.
    #[serde(default)]
    output: OutputConfig,

    /// Rendering section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(diagram: DiagramConfig, output: OutputConfig, render: RenderConfig) -> Self {
        Self {
            diagram,
            output,
            render,
        }
    }

    /// Returns the diagram configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Which diagram elements are read as class nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Element kind (the `<id>` text) of class nodes.
    node_kind: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            node_kind: "UMLClass".to_string(),
        }
    }
}

impl DiagramConfig {
    /// Returns the element kind of class nodes.
    pub fn node_kind(&self) -> &str {
        &self.node_kind
    }
}

/// File naming in the output tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension of stub files, without the dot.
    extension: String,

    /// File name of the namespace marker created in every package directory.
    namespace_marker: String,

    /// Suffix appended to an existing stub before it is overwritten.
    backup_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "py".to_string(),
            namespace_marker: "__init__.py".to_string(),
            backup_suffix: ".bak".to_string(),
        }
    }
}

impl OutputConfig {
    /// Returns the stub file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns the namespace marker file name.
    pub fn namespace_marker(&self) -> &str {
        &self.namespace_marker
    }

    /// Returns the backup suffix.
    pub fn backup_suffix(&self) -> &str {
        &self.backup_suffix
    }
}

/// Text emitted into every stub.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// One level of indentation.
    indent: String,

    /// Import line added for singleton classes.
    singleton_import: String,

    /// Decorator line placed above singleton classes.
    singleton_decorator: String,

    /// Description written for every documented parameter.
    parameter_placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            singleton_import: "from singleton_decorator import singleton".to_string(),
            singleton_decorator: "@singleton".to_string(),
            parameter_placeholder: "INSERT PARAMETER DESCRIPTION HERE".to_string(),
        }
    }
}

impl RenderConfig {
    /// Returns one level of indentation.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Returns the singleton import line.
    pub fn singleton_import(&self) -> &str {
        &self.singleton_import
    }

    /// Returns the singleton decorator line.
    pub fn singleton_decorator(&self) -> &str {
        &self.singleton_decorator
    }

    /// Returns the parameter description placeholder.
    pub fn parameter_placeholder(&self) -> &str {
        &self.parameter_placeholder
    }
}
