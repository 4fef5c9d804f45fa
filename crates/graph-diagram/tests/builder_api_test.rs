//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use graph_diagram::{
    DiagramBuilder, GraphDiagramError,
    config::{AppConfig, DiagramConfig, ScaleConfig},
    model::NodeId,
    scene::{ElementKey, ElementKind, Scene, SvgScene},
};

const TWO_NODES: &str = r#"
    <ul>
      <li class="graph-diagram-node" data-node-id="a" data-x="0" data-y="0" data-label="Alice"/>
      <li class="graph-diagram-node" data-node-id="b" data-x="200" data-y="0"/>
      <li class="graph-diagram-relationship" data-from="a" data-to="b"/>
    </ul>
"#;

#[test]
fn test_builder_api_exists() {
    let builder = DiagramBuilder::default();
    assert_eq!(builder.config().diagram().node_radius(), 50.0);
}

#[test]
fn test_parse_simple_diagram() {
    let builder = DiagramBuilder::default();
    let result = builder.parse(TWO_NODES);
    assert!(
        result.is_ok(),
        "Should parse valid markup: {:?}",
        result.err()
    );

    let model = result.unwrap();
    assert_eq!(model.node_count(), 2);
    assert_eq!(model.relationship_list().len(), 1);
    assert_eq!(model.relationship_list()[0].label(), Some("KNOWS"));
}

#[test]
fn test_render_simple_diagram() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(TWO_NODES).expect("Failed to parse markup");
    let svg = builder.render_svg(&model).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("graphdiagram"));
    assert!(svg.contains(r#"viewBox="-58 -58 316 116""#));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("translate(0,0) rotate(0)"));
    assert!(svg.contains("Alice"));
    assert!(svg.contains("KNOWS"));
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        DiagramConfig::new(20.0, 2.0, 5.0, 5.0),
        ScaleConfig::default(),
    );
    let builder = DiagramBuilder::new(config);
    let model = builder.parse(TWO_NODES).expect("Failed to parse markup");

    let mut scene = SvgScene::new();
    builder.render_into(&model, &mut scene);

    let a = ElementKey::Node(NodeId::new("a"));
    assert_eq!(scene.attribute(ElementKind::NodeCircle, &a, "r"), Some("20"));
    assert_eq!(scene.root_attribute("viewBox"), Some("-22 -22 244 44"));
}

#[test]
fn test_markup_scales_override_config() {
    let config = AppConfig::new(DiagramConfig::default(), ScaleConfig::new(3.0, 3.0));
    let builder = DiagramBuilder::new(config);

    let configured = builder.parse(TWO_NODES).expect("Failed to parse markup");
    assert_eq!(configured.internal_scale(), 3.0);

    let declared = builder
        .parse(
            r#"<div data-internal-scale="0.5" data-external-scale="2">
                 <span class="graph-diagram-node" data-node-id="a" data-x="10" data-y="10"/>
               </div>"#,
        )
        .expect("Failed to parse markup");
    assert_eq!(declared.internal_scale(), 0.5);
    assert_eq!(declared.external_scale(), 2.0);
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("<ul><li class=\"graph-diagram-node\"></ul>");

    match result {
        Err(GraphDiagramError::Parse { err, src }) => {
            assert!(!err.diagnostics().is_empty());
            assert!(src.starts_with("<ul>"));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_undeclared_endpoint_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse(
        r#"<ul>
             <li class="graph-diagram-node" data-node-id="a"/>
             <li class="graph-diagram-relationship" data-from="a" data-to="ghost"/>
           </ul>"#,
    );

    assert!(matches!(result, Err(GraphDiagramError::Parse { .. })));
}

#[test]
fn test_render_into_rebinds_incrementally() {
    let builder = DiagramBuilder::default();
    let mut model = builder.parse(TWO_NODES).expect("Failed to parse markup");
    let mut scene = SvgScene::new();

    let first = builder.render_into(&model, &mut scene);
    assert_eq!(first.kind(ElementKind::NodeCircle).entered, 2);

    model
        .node_mut(&NodeId::new("b"))
        .expect("node b exists")
        .set_y(100.0);
    let second = builder.render_into(&model, &mut scene);

    assert_eq!(second.kind(ElementKind::NodeCircle).entered, 0);
    assert_eq!(second.kind(ElementKind::NodeCircle).updated, 2);
    let b = ElementKey::Node(NodeId::new("b"));
    assert_eq!(scene.attribute(ElementKind::NodeCircle, &b, "cy"), Some("100"));
}

#[test]
fn test_render_skips_dangling_relationships() {
    let builder = DiagramBuilder::default();
    let mut model = builder.parse(TWO_NODES).expect("Failed to parse markup");
    model.delete_node(&NodeId::new("b"));

    let mut scene = SvgScene::new();
    let report = builder.render_into(&model, &mut scene);

    assert_eq!(report.dangling(), &[0]);
    assert!(scene.keys(ElementKind::RelationshipGroup).is_empty());
    assert_eq!(scene.len(ElementKind::NodeCircle), 1);
}

#[test]
fn test_builder_reusability() {
    let source1 = r#"<g><n class="graph-diagram-node" data-node-id="one"/></g>"#;
    let source2 = r#"<g><n class="graph-diagram-node" data-node-id="two" data-x="5"/></g>"#;

    let builder = DiagramBuilder::default();

    let model1 = builder.parse(source1).expect("Failed to parse model1");
    let svg1 = builder.render_svg(&model1).expect("Failed to render model1");

    let model2 = builder.parse(source2).expect("Failed to parse model2");
    let svg2 = builder.render_svg(&model2).expect("Failed to render model2");

    assert!(svg1.contains("graph-diagram-node-id-one"));
    assert!(svg2.contains("graph-diagram-node-id-two"));
    assert!(!svg2.contains("graph-diagram-node-id-one"));
}
