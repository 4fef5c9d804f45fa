//! Graph Diagram - SVG rendering of node-and-relationship graphs.
//!
//! Nodes are drawn as circles at their model coordinates and relationships
//! as arrows between them. Rendering goes through a retained [`Scene`]: the
//! binding engine diffs the model against what the scene already holds, so
//! re-binding after a model change only touches the affected elements.
//!
//! # Pipeline
//!
//! ```text
//! Markup ──parse──► Model ──bind──► Scene ──serialize──► SVG
//! ```

pub mod bind;
pub mod config;
pub mod scene;
pub mod view;

mod error;

pub use graph_diagram_core::{create_model, geometry, model};

pub use bind::{BindReport, Binder, bind};
pub use error::GraphDiagramError;

use std::fmt::Write as _;

use log::{debug, info, trace};

use graph_diagram_markup::MarkupConfig;

use config::AppConfig;
use model::Model;
use scene::{Scene, SvgScene};

/// Builder for parsing and rendering graph diagrams.
///
/// # Examples
///
/// ```rust
/// use graph_diagram::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     <ul>
///       <li class="graph-diagram-node" data-node-id="a" data-x="0" data-y="0"/>
///       <li class="graph-diagram-node" data-node-id="b" data-x="200" data-y="0"/>
///       <li class="graph-diagram-relationship" data-from="a" data-to="b"/>
///     </ul>
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse markup to a model
/// let model = builder.parse(source).expect("Failed to parse");
///
/// // Render the model to SVG
/// let svg = builder.render_svg(&model).expect("Failed to render");
/// assert!(svg.contains("graphdiagram"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse markup into a model.
    ///
    /// Scales declared on the markup root take precedence over the scales
    /// in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDiagramError::Parse`] for malformed markup, incomplete
    /// or unresolvable relationships, and invalid scales.
    pub fn parse(&self, source: &str) -> Result<Model, GraphDiagramError> {
        info!("Parsing markup");

        let scale = self.config.scale();
        let markup_config = MarkupConfig::new(scale.internal(), scale.external());
        let model = graph_diagram_markup::parse(source, markup_config)
            .map_err(|err| GraphDiagramError::new_parse_error(err, source))?;

        debug!(nodes = model.node_count(); "Markup parsed successfully");
        trace!(model:?; "Parsed model");

        Ok(model)
    }

    /// Bind a model into an existing scene.
    ///
    /// The scene may already hold elements from an earlier bind; only the
    /// differences are applied.
    pub fn render_into<S: Scene + ?Sized>(&self, model: &Model, scene: &mut S) -> BindReport {
        Binder::new(*self.config.diagram()).bind(model, scene)
    }

    /// Render a model to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`GraphDiagramError::Export`] if the document cannot be
    /// serialized.
    pub fn render_svg(&self, model: &Model) -> Result<String, GraphDiagramError> {
        let mut scene = SvgScene::new();
        self.render_into(model, &mut scene);

        let mut svg = String::new();
        write!(svg, "{}", scene.to_document())
            .map_err(|err| GraphDiagramError::Export(Box::new(err)))?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
