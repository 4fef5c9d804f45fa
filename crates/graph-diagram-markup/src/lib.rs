//! # Graph Diagram Markup
//!
//! Reads a graph [`Model`] out of an annotated XML (or XHTML) fragment.
//!
//! Elements declare graph entities through their `class` list and `data-*`
//! attributes:
//!
//! | class | attributes |
//! |-------|------------|
//! | `graph-diagram-node` | `data-node-id`, `data-x`, `data-y`, `data-label`, `data-class` |
//! | `graph-diagram-relationship` | `data-from`, `data-to`, `data-label`, `data-class` |
//!
//! The root element may also carry `data-internal-scale` and
//! `data-external-scale`.
//!
//! An empty `data-node-id` is treated as absent and gets a generated id. An
//! empty `data-label` means no label is drawn; on a relationship it also
//! removes the default label.
//!
//! ## Usage
//!
//! ```
//! # use graph_diagram_markup::{parse, MarkupConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <ul>
//!           <li class="graph-diagram-node" data-node-id="a" data-x="0" data-y="0"/>
//!           <li class="graph-diagram-node" data-node-id="b" data-x="200" data-y="0"/>
//!           <li class="graph-diagram-relationship" data-from="a" data-to="b"/>
//!         </ul>
//!     "#;
//!
//!     let model = parse(source, MarkupConfig::default())?;
//!     assert_eq!(model.node_list().len(), 2);
//!     assert_eq!(model.relationship_list()[0].label(), Some("KNOWS"));
//!     Ok(())
//! }
//! ```

mod builder;
pub mod error;
mod reader;
mod span;

pub use error::ParseError;
pub use span::Span;

use log::{debug, info};

use graph_diagram_core::model::Model;

/// Scales used when the document does not declare its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkupConfig {
    internal_scale: f64,
    external_scale: f64,
}

impl MarkupConfig {
    /// Create a config with the given fallback scales.
    pub fn new(internal_scale: f64, external_scale: f64) -> Self {
        Self {
            internal_scale,
            external_scale,
        }
    }

    /// Fallback for `data-internal-scale`
    pub fn internal_scale(&self) -> f64 {
        self.internal_scale
    }

    /// Fallback for `data-external-scale`
    pub fn external_scale(&self) -> f64 {
        self.external_scale
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Parse markup source into a model.
///
/// The pipeline has two steps:
///
/// 1. **Read** - Parse the XML and collect node and relationship declarations
/// 2. **Build** - Validate scales and references, then create the model
///
/// # Errors
///
/// Returns a [`ParseError`] holding every error found: a malformed document
/// (`E100`), a relationship without endpoints (`E200`), a relationship
/// naming an undeclared node (`E201`), or an invalid scale (`E202`).
pub fn parse(source: &str, config: MarkupConfig) -> Result<Model, ParseError> {
    info!(source_len = source.len(); "Reading markup");
    let declarations = reader::read(source)?;
    debug!(
        nodes = declarations.nodes.len(),
        relationships = declarations.relationships.len();
        "Declarations read"
    );

    builder::build(&declarations, config)
}
