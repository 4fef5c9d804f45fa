//! Drawing-space geometry derived from a model.
//!
//! Node centers are model coordinates multiplied by the model's internal
//! scale. The view box is the smallest box containing every center, grown on
//! all sides by the node radius plus the stroke width so that whole circles
//! fit. The displayed size is the view box size multiplied by the external
//! scale.

use graph_diagram_core::{
    geometry::{Bounds, Point, Size},
    model::{Model, Node},
};

use crate::config::DiagramConfig;

/// Returns the center of a node in drawing space.
pub fn center(node: &Node, internal_scale: f64) -> Point {
    node.position().scale(internal_scale)
}

/// The view box and display size of a model.
///
/// # Examples
///
/// ```
/// # use graph_diagram::{config::DiagramConfig, view::View};
/// # use graph_diagram_core::model::Model;
/// let mut model = Model::new();
/// model.create_node(None).set_x(0.0).set_y(0.0);
/// model.create_node(None).set_x(200.0).set_y(0.0);
///
/// let view = View::new(&model, &DiagramConfig::default());
/// assert_eq!(view.view_box(), "-58 -58 316 116");
/// assert_eq!(view.display_size().width(), 316.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    bounds: Bounds,
    display_size: Size,
}

impl View {
    /// Computes the view of `model`.
    ///
    /// A model without nodes has the zero box at the origin.
    pub fn new(model: &Model, config: &DiagramConfig) -> Self {
        let internal_scale = model.internal_scale();
        let bounds = Bounds::from_points(model.nodes().map(|node| center(node, internal_scale)))
            .map(|bounds| bounds.inflate(config.node_radius() + config.stroke_width()))
            .unwrap_or_default();

        Self {
            bounds,
            display_size: bounds.to_size().scale(model.external_scale()),
        }
    }

    /// The view box in drawing space
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The value of the SVG `viewBox` attribute
    pub fn view_box(&self) -> String {
        self.bounds.to_view_box()
    }

    /// The displayed width and height
    pub fn display_size(&self) -> Size {
        self.display_size
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_empty_model_has_zero_box() {
        let view = View::new(&Model::new(), &DiagramConfig::default());

        assert_eq!(view.view_box(), "0 0 0 0");
        assert!(view.display_size().is_zero());
    }

    #[test]
    fn test_single_node_box() {
        let mut model = Model::new();
        model.create_node(None).set_x(10.0).set_y(20.0);

        let view = View::new(&model, &DiagramConfig::default());

        assert_eq!(view.view_box(), "-48 -38 116 116");
    }

    #[test]
    fn test_scales_apply() {
        let mut model = Model::with_scales(2.0, 0.5);
        model.create_node(None).set_x(0.0).set_y(0.0);
        model.create_node(None).set_x(100.0).set_y(50.0);

        let view = View::new(&model, &DiagramConfig::default());

        assert_eq!(view.bounds().min_x(), -58.0);
        assert_eq!(view.bounds().max_x(), 258.0);
        assert_eq!(view.bounds().max_y(), 158.0);
        assert_approx_eq!(f64, view.display_size().width(), 158.0);
        assert_approx_eq!(f64, view.display_size().height(), 108.0);
    }

    #[test]
    fn test_config_changes_padding() {
        let mut model = Model::new();
        model.create_node(None).set_x(0.0).set_y(0.0);

        let view = View::new(&model, &DiagramConfig::new(10.0, 2.0, 0.0, 0.0));

        assert_eq!(view.view_box(), "-12 -12 24 24");
    }

    #[test]
    fn test_center_uses_internal_scale() {
        let mut model = Model::with_scales(3.0, 1.0);
        let node = model.create_node(None).set_x(1.0).set_y(-2.0);

        assert_eq!(center(node, 3.0), Point::new(3.0, -6.0));
    }
}
