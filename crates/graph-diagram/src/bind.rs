//! The binding engine: reconciles a model against a scene.
//!
//! Binding is idempotent and incremental. For every [`ElementKind`] the
//! engine computes the set of keys the model calls for, removes scene
//! elements whose keys are no longer wanted, creates missing elements with
//! their initial attributes, and then reapplies the position-dependent
//! attributes of every wanted element.
//!
//! | kind | key | target set | initial | reapplied |
//! |------|-----|------------|---------|-----------|
//! | node circle | node id | all nodes | `class`, `r` | `cx`, `cy` |
//! | node label | node id | nodes with a label | `class` | `x`, `y`, text |
//! | relationship group | index | resolvable relationships | `class` | `transform` |
//! | relationship path | index | resolvable relationships | `class` | `d` |
//! | relationship label | index | resolvable relationships with a label | `class` | `x`, `y`, text |
//!
//! Relationships whose start or end node has been deleted are skipped and
//! any elements previously drawn for them are removed.

use indexmap::IndexSet;
use log::{debug, info, trace, warn};

use graph_diagram_core::{
    geometry::{Point, format_number, horizontal_arrow_outline},
    model::{Model, Node, Relationship},
};

use crate::{
    config::DiagramConfig,
    scene::{ElementKey, ElementKind, Join, Scene},
    view::{self, View},
};

/// Class set on the root of every bound scene.
pub const VIEW_CLASS: &str = "graphdiagram";

/// Element counts for one kind after a bind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindReport {
    /// Elements created.
    pub entered: usize,
    /// Elements kept and refreshed.
    pub updated: usize,
    /// Elements removed.
    pub exited: usize,
}

impl KindReport {
    /// Number of elements of this kind present after the bind.
    pub fn present(&self) -> usize {
        self.entered + self.updated
    }
}

/// What a call to [`bind`] changed in the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    node_circles: KindReport,
    node_labels: KindReport,
    relationship_groups: KindReport,
    relationship_paths: KindReport,
    relationship_labels: KindReport,
    dangling: Vec<usize>,
}

impl BindReport {
    /// Returns the counts for one element kind.
    pub fn kind(&self, kind: ElementKind) -> KindReport {
        match kind {
            ElementKind::NodeCircle => self.node_circles,
            ElementKind::NodeLabel => self.node_labels,
            ElementKind::RelationshipGroup => self.relationship_groups,
            ElementKind::RelationshipPath => self.relationship_paths,
            ElementKind::RelationshipLabel => self.relationship_labels,
        }
    }

    /// Indices of relationships skipped because an endpoint is missing.
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }

    /// Returns `true` if the bind created or removed any element.
    pub fn changed(&self) -> bool {
        ElementKind::ALL.iter().any(|&kind| {
            let report = self.kind(kind);
            report.entered > 0 || report.exited > 0
        })
    }
}

/// A relationship with both endpoints resolved, measured for drawing.
struct Placed<'a> {
    relationship: &'a Relationship,
    start: Point,
    angle: f64,
    side: f64,
    length: f64,
}

impl<'a> Placed<'a> {
    fn new(relationship: &'a Relationship, start: &Node, end: &Node, internal_scale: f64) -> Self {
        let leftward = end.is_left_of(start);
        let angle = start.angle_to(end);

        Self {
            relationship,
            start: view::center(start, internal_scale),
            angle: if leftward { angle + 180.0 } else { angle },
            side: if leftward { -1.0 } else { 1.0 },
            length: start.distance_to(end),
        }
    }

    fn class(&self) -> String {
        format!(
            "graph-diagram-relationship {}",
            self.relationship.class().unwrap_or_default()
        )
    }
}

/// Binds models to scenes using a fixed [`DiagramConfig`].
#[derive(Debug, Clone, Default)]
pub struct Binder {
    config: DiagramConfig,
}

impl Binder {
    /// Creates a binder with the given geometry.
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    /// Returns the geometry used by this binder.
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Reconciles `scene` with `model`.
    ///
    /// Sets the root attributes first, then reconciles every element kind
    /// in drawing order.
    pub fn bind<S: Scene + ?Sized>(&self, model: &Model, scene: &mut S) -> BindReport {
        info!(
            nodes = model.node_count(),
            relationships = model.relationship_list().len();
            "Binding model to scene"
        );

        let view = View::new(model, &self.config);
        let size = view.display_size();
        scene.set_root_attribute("class", VIEW_CLASS.to_string());
        scene.set_root_attribute("width", format_number(size.width()));
        scene.set_root_attribute("height", format_number(size.height()));
        scene.set_root_attribute("viewBox", view.view_box());

        let internal_scale = model.internal_scale();
        let radius = self.config.node_radius();

        let nodes: Vec<(ElementKey, &Node)> = model
            .nodes()
            .map(|node| (ElementKey::Node(node.id().clone()), node))
            .collect();
        let labeled: Vec<(ElementKey, &Node)> = nodes
            .iter()
            .filter(|(_, node)| node.label().is_some())
            .cloned()
            .collect();

        let mut dangling = Vec::new();
        let mut placed: Vec<(ElementKey, Placed<'_>)> = Vec::new();
        for (index, relationship) in model.relationship_list().iter().enumerate() {
            match model.endpoints(relationship) {
                Some((start, end)) => placed.push((
                    ElementKey::Relationship(index),
                    Placed::new(relationship, start, end, internal_scale),
                )),
                None => {
                    warn!(
                        index = index,
                        start = relationship.start().as_str(),
                        end = relationship.end().as_str();
                        "Skipping relationship with a missing endpoint"
                    );
                    dangling.push(index);
                }
            }
        }

        let node_circles = reconcile(
            scene,
            ElementKind::NodeCircle,
            &nodes,
            |node| {
                vec![
                    (
                        "class",
                        format!(
                            "graph-diagram-node graph-diagram-node-id-{} {}",
                            node.id(),
                            node.class().unwrap_or_default()
                        ),
                    ),
                    ("r", format_number(radius)),
                ]
            },
            |scene, key, node| {
                let center = view::center(node, internal_scale);
                scene.set_attribute(ElementKind::NodeCircle, key, "cx", format_number(center.x()));
                scene.set_attribute(ElementKind::NodeCircle, key, "cy", format_number(center.y()));
            },
        );

        let node_labels = reconcile(
            scene,
            ElementKind::NodeLabel,
            &labeled,
            |node| {
                vec![(
                    "class",
                    format!(
                        "graph-diagram-bound-variable {}",
                        node.class().unwrap_or_default()
                    ),
                )]
            },
            |scene, key, node| {
                let center = view::center(node, internal_scale);
                scene.set_attribute(ElementKind::NodeLabel, key, "x", format_number(center.x()));
                scene.set_attribute(ElementKind::NodeLabel, key, "y", format_number(center.y()));
                scene.set_text(ElementKind::NodeLabel, key, node.label().unwrap_or_default());
            },
        );

        let relationship_groups = reconcile(
            scene,
            ElementKind::RelationshipGroup,
            &placed,
            |placed| vec![("class", placed.class())],
            |scene, key, placed| {
                let transform = format!(
                    "translate({},{}) rotate({})",
                    format_number(placed.start.x()),
                    format_number(placed.start.y()),
                    format_number(placed.angle)
                );
                scene.set_attribute(ElementKind::RelationshipGroup, key, "transform", transform);
            },
        );

        let start_offset = radius + self.config.start_margin();
        let end_offset = radius + self.config.end_margin();
        let relationship_paths = reconcile(
            scene,
            ElementKind::RelationshipPath,
            &placed,
            |placed| vec![("class", placed.class())],
            |scene, key, placed| {
                let outline = horizontal_arrow_outline(
                    placed.side * start_offset,
                    placed.side * (placed.length - end_offset),
                );
                scene.set_attribute(ElementKind::RelationshipPath, key, "d", outline.to_string());
            },
        );

        let with_label: Vec<(ElementKey, &Placed<'_>)> = placed
            .iter()
            .filter(|(_, placed)| placed.relationship.label().is_some())
            .map(|(key, placed)| (key.clone(), placed))
            .collect();
        let relationship_labels = reconcile(
            scene,
            ElementKind::RelationshipLabel,
            &with_label,
            |_| vec![("class", "graph-diagram-relationship-label".to_string())],
            |scene, key, placed| {
                let x = placed.side * placed.length / 2.0;
                scene.set_attribute(ElementKind::RelationshipLabel, key, "x", format_number(x));
                scene.set_attribute(ElementKind::RelationshipLabel, key, "y", "0".to_string());
                scene.set_text(
                    ElementKind::RelationshipLabel,
                    key,
                    placed.relationship.label().unwrap_or_default(),
                );
            },
        );

        let report = BindReport {
            node_circles,
            node_labels,
            relationship_groups,
            relationship_paths,
            relationship_labels,
            dangling,
        };
        debug!(report:?; "Bind complete");
        report
    }
}

/// Reconciles `scene` with `model` using the default [`DiagramConfig`].
///
/// # Examples
///
/// ```
/// # use graph_diagram::{bind, scene::{ElementKind, SvgScene}};
/// # use graph_diagram_core::create_model;
/// let mut model = create_model();
/// let a = model.create_node(None).set_x(0.0).set_y(0.0).id().clone();
/// let b = model.create_node(None).set_x(200.0).set_y(0.0).id().clone();
/// model.create_relationship(&a, &b);
///
/// let mut scene = SvgScene::new();
/// let report = bind(&model, &mut scene);
///
/// assert_eq!(report.kind(ElementKind::NodeCircle).entered, 2);
/// assert_eq!(report.kind(ElementKind::RelationshipLabel).entered, 1);
/// ```
pub fn bind<S: Scene + ?Sized>(model: &Model, scene: &mut S) -> BindReport {
    Binder::default().bind(model, scene)
}

fn reconcile<S, T, I, U>(
    scene: &mut S,
    kind: ElementKind,
    targets: &[(ElementKey, T)],
    initial: I,
    update: U,
) -> KindReport
where
    S: Scene + ?Sized,
    I: Fn(&T) -> Vec<(&'static str, String)>,
    U: Fn(&mut S, &ElementKey, &T),
{
    let target_keys: Vec<ElementKey> = targets.iter().map(|(key, _)| key.clone()).collect();
    let join = Join::compute(&scene.keys(kind), &target_keys);

    for key in join.exit() {
        scene.remove(kind, key);
    }

    let entering: IndexSet<&ElementKey> = join.enter().iter().collect();
    for (key, target) in targets {
        if entering.contains(key) {
            scene.append(kind, key.clone(), initial(target));
        }
        trace!(kind:% = kind, key:% = key; "Updating element");
        update(scene, key, target);
    }

    let report = KindReport {
        entered: join.enter().len(),
        updated: join.update().len(),
        exited: join.exit().len(),
    };
    debug!(
        kind:% = kind,
        entered = report.entered,
        updated = report.updated,
        exited = report.exited;
        "Reconciled elements"
    );
    report
}
