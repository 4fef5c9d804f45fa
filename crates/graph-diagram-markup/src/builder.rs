//! Turns declarations into a [`Model`].
//!
//! Scales are validated first since they are fixed when the model is
//! created. Nodes are then created in document order, and relationships are
//! created after all nodes so that they may refer to nodes declared later in
//! the document.

use indexmap::IndexMap;
use log::{debug, trace};

use graph_diagram_core::model::{Model, NodeId, coerce_number};

use crate::{
    MarkupConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    reader::{Attr, Declarations, NodeDecl, RelationshipDecl},
    span::Span,
};

/// Builds a model from the declarations, reporting every problem found.
pub(crate) fn build(declarations: &Declarations, config: MarkupConfig) -> Result<Model, ParseError> {
    let mut collector = DiagnosticCollector::new();

    let internal_scale = scale(
        declarations.internal_scale.as_ref(),
        "data-internal-scale",
        config.internal_scale(),
        &mut collector,
    );
    let external_scale = scale(
        declarations.external_scale.as_ref(),
        "data-external-scale",
        config.external_scale(),
        &mut collector,
    );

    let mut model = Model::with_scales(internal_scale, external_scale);
    let mut declared_at: IndexMap<NodeId, Span> = IndexMap::new();

    for decl in &declarations.nodes {
        add_node(&mut model, decl, &mut declared_at, &mut collector);
    }
    for decl in &declarations.relationships {
        add_relationship(&mut model, decl, &mut collector);
    }

    collector.finish()?;
    debug!(
        nodes = model.node_count(),
        relationships = model.relationship_list().len();
        "Model built from markup"
    );
    Ok(model)
}

fn scale(
    attr: Option<&Attr>,
    name: &str,
    default: f64,
    collector: &mut DiagnosticCollector,
) -> f64 {
    let Some(attr) = attr else {
        return default;
    };

    let value = coerce_number(&attr.value);
    if value.is_finite() && value > 0.0 {
        return value;
    }

    collector.emit(
        Diagnostic::error(format!("invalid `{name}` value `{}`", attr.value))
            .with_code(ErrorCode::E202)
            .with_label(attr.span, "declared on this element")
            .with_help("scales must be positive numbers"),
    );
    default
}

fn add_node(
    model: &mut Model,
    decl: &NodeDecl,
    declared_at: &mut IndexMap<NodeId, Span>,
    collector: &mut DiagnosticCollector,
) {
    let x = decl.x.as_deref().map_or(0.0, coerce_number);
    let y = decl.y.as_deref().map_or(0.0, coerce_number);
    if x.is_nan() || y.is_nan() {
        collector.emit(
            Diagnostic::warning("node coordinate is not a number")
                .with_label(decl.span, "declared here")
                .with_help("`data-x` and `data-y` should hold plain numbers"),
        );
    }

    // Empty ids and labels count as absent.
    let id = decl.id.as_deref().filter(|id| !id.is_empty()).map(NodeId::from);
    let label = decl.label.clone().filter(|label| !label.is_empty());
    let node = model
        .create_node(id)
        .set_x(x)
        .set_y(y)
        .set_label(label)
        .set_class(decl.class.clone());
    let id = node.id().clone();
    trace!(id = id.as_str(), x = x, y = y; "Node added");

    if let Some(first) = declared_at.insert(id.clone(), decl.span) {
        collector.emit(
            Diagnostic::warning(format!("node `{id}` is declared more than once"))
                .with_label(decl.span, "this declaration replaces the earlier one")
                .with_secondary_label(first, "first declared here"),
        );
    }
}

fn add_relationship(model: &mut Model, decl: &RelationshipDecl, collector: &mut DiagnosticCollector) {
    let (Some(from), Some(to)) = (decl.from.as_deref(), decl.to.as_deref()) else {
        let missing = match (&decl.from, &decl.to) {
            (None, None) => "`data-from` and `data-to`",
            (None, Some(_)) => "`data-from`",
            _ => "`data-to`",
        };
        collector.emit(
            Diagnostic::error(format!("relationship is missing {missing}"))
                .with_code(ErrorCode::E200)
                .with_label(decl.span, "declared here")
                .with_help("name the start node in `data-from` and the end node in `data-to`"),
        );
        return;
    };

    let start = NodeId::from(from);
    let end = NodeId::from(to);
    let mut resolved = true;
    for id in [&start, &end] {
        if model.node(id).is_none() {
            resolved = false;
            collector.emit(
                Diagnostic::error(format!("relationship refers to undeclared node `{id}`"))
                    .with_code(ErrorCode::E201)
                    .with_label(decl.span, "referenced here")
                    .with_help(format!(
                        "add an element with class `graph-diagram-node` and `data-node-id=\"{id}\"`"
                    )),
            );
        }
    }
    if !resolved {
        return;
    }

    let relationship = model.create_relationship(&start, &end);
    match decl.label.as_deref() {
        None => {}
        Some("") => {
            relationship.clear_label();
        }
        Some(label) => {
            relationship.set_label(label);
        }
    }
    relationship.set_class(decl.class.clone());
    trace!(start = from, end = to; "Relationship added");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read;

    fn build_source(source: &str) -> Result<Model, ParseError> {
        let declarations = read(source).map_err(ParseError::from)?;
        build(&declarations, MarkupConfig::default())
    }

    #[test]
    fn test_build_missing_coordinates_are_zero() {
        let model = build_source(r#"<g><n class="graph-diagram-node"/></g>"#).unwrap();

        let node = model.node_list()[0];
        assert_eq!(node.id().as_str(), "0");
        assert_eq!(node.x(), 0.0);
        assert_eq!(node.y(), 0.0);
        assert_eq!(node.label(), None);
    }

    #[test]
    fn test_build_empty_node_id_is_generated() {
        let source = r#"<g>
            <n class="graph-diagram-node" data-node-id=""/>
            <n class="graph-diagram-node" data-node-id=""/>
        </g>"#;

        let model = build_source(source).unwrap();
        let ids: Vec<&str> = model.nodes().map(|node| node.id().as_str()).collect();

        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn test_build_empty_node_label_is_absent() {
        let source = r#"<g>
            <n class="graph-diagram-node" data-node-id="a" data-label=""/>
            <n class="graph-diagram-node" data-node-id="b" data-label="Bob"/>
        </g>"#;

        let model = build_source(source).unwrap();
        let labels: Vec<Option<&str>> = model.nodes().map(|node| node.label()).collect();

        assert_eq!(labels, vec![None, Some("Bob")]);
    }

    #[test]
    fn test_build_unparsable_coordinate_is_nan() {
        let model =
            build_source(r#"<g><n class="graph-diagram-node" data-x="left" data-y=" 7 "/></g>"#)
                .unwrap();

        let node = model.node_list()[0];
        assert!(node.x().is_nan());
        assert_eq!(node.y(), 7.0);
    }

    #[test]
    fn test_build_relationship_labels() {
        let source = r#"<g>
            <n class="graph-diagram-node" data-node-id="a"/>
            <e class="graph-diagram-relationship" data-from="a" data-to="a"/>
            <e class="graph-diagram-relationship" data-from="a" data-to="a" data-label=""/>
            <e class="graph-diagram-relationship" data-from="a" data-to="a" data-label="LIKES"/>
        </g>"#;

        let model = build_source(source).unwrap();
        let labels: Vec<Option<&str>> =
            model.relationship_list().iter().map(|r| r.label()).collect();

        assert_eq!(labels, vec![Some("KNOWS"), None, Some("LIKES")]);
    }

    #[test]
    fn test_build_relationship_before_node_declaration() {
        let source = r#"<g>
            <e class="graph-diagram-relationship" data-from="a" data-to="b"/>
            <n class="graph-diagram-node" data-node-id="a"/>
            <n class="graph-diagram-node" data-node-id="b"/>
        </g>"#;

        let model = build_source(source).unwrap();

        assert_eq!(model.relationship_list().len(), 1);
    }

    #[test]
    fn test_build_relationship_to_generated_id() {
        let source = r#"<g>
            <n class="graph-diagram-node"/>
            <n class="graph-diagram-node"/>
            <e class="graph-diagram-relationship" data-from="0" data-to="1"/>
        </g>"#;

        let model = build_source(source).unwrap();

        assert!(!model.is_dangling(&model.relationship_list()[0]));
    }

    #[test]
    fn test_build_collects_all_errors() {
        let source = r#"<g data-internal-scale="-1">
            <n class="graph-diagram-node" data-node-id="a"/>
            <e class="graph-diagram-relationship" data-from="a"/>
            <e class="graph-diagram-relationship" data-from="a" data-to="zz"/>
        </g>"#;

        let err = build_source(source).unwrap_err();
        let codes: Vec<Option<ErrorCode>> = err.diagnostics().iter().map(|d| d.code()).collect();

        assert_eq!(
            codes,
            vec![Some(ErrorCode::E202), Some(ErrorCode::E200), Some(ErrorCode::E201)]
        );
    }

    #[test]
    fn test_build_duplicate_node_is_warning() {
        let source = r#"<g>
            <n class="graph-diagram-node" data-node-id="a" data-x="1"/>
            <n class="graph-diagram-node" data-node-id="a" data-x="2"/>
        </g>"#;

        let model = build_source(source).unwrap();

        assert_eq!(model.node_count(), 1);
        assert_eq!(model.node_list()[0].x(), 2.0);
    }

    #[test]
    fn test_build_scales_override_config() {
        let declarations = read(r#"<g data-external-scale="3"/>"#).unwrap();

        let model = build(&declarations, MarkupConfig::new(2.0, 1.0)).unwrap();

        assert_eq!(model.internal_scale(), 2.0);
        assert_eq!(model.external_scale(), 3.0);
    }
}
