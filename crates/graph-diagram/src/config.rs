//! Configuration types for graph diagram rendering.
//!
//! This module provides configuration structures that control node geometry
//! and the default coordinate scales. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`DiagramConfig`] - Node radius, stroke width and arrow margins.
//! - [`ScaleConfig`] - Scales used when the markup does not declare its own.
//!
//! # Example
//!
//! ```
//! # use graph_diagram::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.diagram().node_radius(), 50.0);
//! assert_eq!(config.scale().internal(), 1.0);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram geometry section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Default scale section.
    #[serde(default)]
    scale: ScaleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(diagram: DiagramConfig, scale: ScaleConfig) -> Self {
        Self { diagram, scale }
    }

    /// Returns the diagram geometry configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the default scale configuration.
    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }
}

/// Geometry of the drawn nodes and arrows, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    node_radius: f64,
    stroke_width: f64,
    start_margin: f64,
    end_margin: f64,
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`].
    ///
    /// # Arguments
    ///
    /// * `node_radius` - Radius of every node circle.
    /// * `stroke_width` - Width of the node outline, used to pad the view box.
    /// * `start_margin` - Gap between the start node's edge and the arrow.
    /// * `end_margin` - Gap between the arrow tip and the end node's edge.
    pub fn new(node_radius: f64, stroke_width: f64, start_margin: f64, end_margin: f64) -> Self {
        Self {
            node_radius,
            stroke_width,
            start_margin,
            end_margin,
        }
    }

    pub fn node_radius(&self) -> f64 {
        self.node_radius
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn start_margin(&self) -> f64 {
        self.start_margin
    }

    pub fn end_margin(&self) -> f64 {
        self.end_margin
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new(50.0, 8.0, 15.0, 15.0)
    }
}

/// Fallback coordinate scales.
///
/// Markup that declares `data-internal-scale` or `data-external-scale` on its
/// root element overrides these.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    internal: f64,
    external: f64,
}

impl ScaleConfig {
    /// Creates a new [`ScaleConfig`].
    pub fn new(internal: f64, external: f64) -> Self {
        Self { internal, external }
    }

    /// Model-to-drawing scale.
    pub fn internal(&self) -> f64 {
        self.internal
    }

    /// Drawing-to-display scale.
    pub fn external(&self) -> f64 {
        self.external
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
