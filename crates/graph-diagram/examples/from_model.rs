//! Example: Building and re-binding a diagram from the model API
//!
//! This example builds a small graph directly through the model, binds it to
//! a scene, then edits the model and binds again to show that only the
//! changed elements are touched.

use graph_diagram::{
    DiagramBuilder,
    config::AppConfig,
    create_model,
    model::NodeId,
    scene::{ElementKind, SvgScene},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building graph from the model API...\n");

    let mut model = create_model();

    let alice = NodeId::new("alice");
    let bob = NodeId::new("bob");
    let carol = NodeId::new("carol");

    model
        .create_node(Some(alice.clone()))
        .set_x(0.0)
        .set_y(0.0)
        .set_label(Some("Alice".to_string()));
    model
        .create_node(Some(bob.clone()))
        .set_x(300.0)
        .set_y(0.0)
        .set_label(Some("Bob".to_string()));
    model
        .create_node(Some(carol.clone()))
        .set_x(150.0)
        .set_y(250.0);

    model.create_relationship(&alice, &bob);
    model.create_relationship(&bob, &carol).set_label("LIKES");
    model
        .create_relationship(&carol, &alice)
        .clear_label()
        .set_class(Some("dashed".to_string()));

    println!("Created model:");
    println!("  Nodes: {}", model.node_list().len());
    println!("  Relationships: {}", model.relationship_list().len());
    println!();

    let builder = DiagramBuilder::new(AppConfig::default());
    let mut scene = SvgScene::new();

    let report = builder.render_into(&model, &mut scene);
    println!(
        "First bind: {} circles, {} relationship groups created",
        report.kind(ElementKind::NodeCircle).entered,
        report.kind(ElementKind::RelationshipGroup).entered
    );

    // Move one node and delete another; the relationships to carol dangle.
    if let Some(node) = model.node_mut(&bob) {
        node.set_y(100.0);
    }
    model.delete_node(&carol);

    let report = builder.render_into(&model, &mut scene);
    println!(
        "Second bind: {} circles updated, {} removed, dangling relationships {:?}",
        report.kind(ElementKind::NodeCircle).updated,
        report.kind(ElementKind::NodeCircle).exited,
        report.dangling()
    );

    let svg = scene.to_string();
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_model_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
