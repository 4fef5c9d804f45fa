//! The graph model: nodes, relationships and coordinate scaling.
//!
//! A [`Model`] owns its nodes in an insertion-ordered map keyed by
//! [`NodeId`] and its relationships in an ordered sequence. Iteration order
//! is always insertion order, which makes the drawing order deterministic.
//!
//! Relationships refer to their endpoints by id. Deleting a node does not
//! touch the relationships that reference it; they become *dangling*, which
//! can be detected with [`Model::is_dangling`] and is skipped when drawing.
//!
//! # Examples
//!
//! ```
//! # use graph_diagram_core::model::{Model, NodeId};
//! let mut model = Model::new();
//! let a = model.create_node(None).set_x(0.0).set_y(0.0).id().clone();
//! let b = model.create_node(None).set_x(200.0).set_y(0.0).id().clone();
//! model.create_relationship(&a, &b);
//!
//! assert_eq!(a, NodeId::new("0"));
//! assert_eq!(b, NodeId::new("1"));
//! assert_eq!(model.node_list().len(), 2);
//! assert_eq!(model.relationship_list()[0].label(), Some("KNOWS"));
//!
//! model.delete_node(&b);
//! assert_eq!(model.node_list().len(), 1);
//! assert!(model.is_dangling(&model.relationship_list()[0]));
//! ```

mod node;
mod relationship;

pub use node::{Node, NodeId, coerce_number};
pub use relationship::{DEFAULT_RELATIONSHIP_LABEL, Relationship};

use indexmap::{IndexMap, map::Entry};
use log::trace;

/// An editable graph of positioned nodes and the relationships between them.
#[derive(Debug, Clone)]
pub struct Model {
    nodes: IndexMap<NodeId, Node>,
    relationships: Vec<Relationship>,
    next_id: u64,
    internal_scale: f64,
    external_scale: f64,
}

impl Model {
    /// Creates an empty model with both scales set to `1.0`.
    pub fn new() -> Self {
        Self::with_scales(1.0, 1.0)
    }

    /// Creates an empty model with the given scale factors.
    ///
    /// `internal_scale` maps model coordinates to drawing coordinates;
    /// `external_scale` maps the drawing to its displayed size.
    pub fn with_scales(internal_scale: f64, external_scale: f64) -> Self {
        Self {
            nodes: IndexMap::new(),
            relationships: Vec::new(),
            next_id: 0,
            internal_scale,
            external_scale,
        }
    }

    /// Inserts a fresh node and returns it for configuration.
    ///
    /// With `Some(id)` that id is used as is and the id counter is left
    /// untouched; an existing node with the same id is replaced but keeps its
    /// position in the iteration order. With `None` the next generated id is
    /// taken.
    pub fn create_node(&mut self, id: Option<NodeId>) -> &mut Node {
        let id = id.unwrap_or_else(|| {
            let generated = NodeId::from(self.next_id);
            self.next_id += 1;
            generated
        });
        trace!(id = id.as_str(); "Creating node");

        match self.nodes.entry(id) {
            Entry::Occupied(mut entry) => {
                let fresh = Node::new(entry.key().clone());
                entry.insert(fresh);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let fresh = Node::new(entry.key().clone());
                entry.insert(fresh)
            }
        }
    }

    /// Removes a node. Relationships that reference it are kept.
    ///
    /// Deleting an unknown id does nothing.
    pub fn delete_node(&mut self, id: &NodeId) {
        if self.nodes.shift_remove(id).is_some() {
            trace!(id = id.as_str(); "Deleted node");
        }
    }

    /// Appends a relationship from `start` to `end` with the default label.
    ///
    /// The endpoints are not required to exist.
    pub fn create_relationship(&mut self, start: &NodeId, end: &NodeId) -> &mut Relationship {
        trace!(start = start.as_str(), end = end.as_str(); "Creating relationship");
        self.relationships
            .push(Relationship::new(start.clone(), end.clone()));
        let last = self.relationships.len() - 1;
        &mut self.relationships[last]
    }

    /// Returns the current nodes in insertion order.
    pub fn node_list(&self) -> Vec<&Node> {
        self.nodes.values().collect()
    }

    /// Iterates over the current nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the relationships in drawing order.
    pub fn relationship_list(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Returns a mutable reference to the relationship at `index`.
    pub fn relationship_mut(&mut self, index: usize) -> Option<&mut Relationship> {
        self.relationships.get_mut(index)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Looks up a node by id for modification.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Returns the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolves both endpoints of a relationship.
    ///
    /// Returns `None` when either endpoint is no longer in the model.
    pub fn endpoints(&self, relationship: &Relationship) -> Option<(&Node, &Node)> {
        let start = self.nodes.get(relationship.start())?;
        let end = self.nodes.get(relationship.end())?;
        Some((start, end))
    }

    /// Returns `true` if either endpoint of the relationship is missing.
    pub fn is_dangling(&self, relationship: &Relationship) -> bool {
        self.endpoints(relationship).is_none()
    }

    /// Scale factor from model coordinates to drawing coordinates
    pub fn internal_scale(&self) -> f64 {
        self.internal_scale
    }

    /// Scale factor from drawing size to displayed size
    pub fn external_scale(&self) -> f64 {
        self.external_scale
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_sequential() {
        let mut model = Model::new();
        let ids: Vec<NodeId> = (0..3)
            .map(|_| model.create_node(None).id().clone())
            .collect();
        assert_eq!(ids, vec![NodeId::new("0"), NodeId::new("1"), NodeId::new("2")]);
    }

    #[test]
    fn test_supplied_id_does_not_advance_counter() {
        let mut model = Model::new();
        model.create_node(Some(NodeId::new("x")));
        let generated = model.create_node(None).id().clone();
        assert_eq!(generated, NodeId::new("0"));
    }

    #[test]
    fn test_generated_ids_not_reused_after_delete() {
        let mut model = Model::new();
        let first = model.create_node(None).id().clone();
        model.delete_node(&first);
        let second = model.create_node(None).id().clone();
        assert_ne!(first, second);
        assert_eq!(second, NodeId::new("1"));
    }

    #[test]
    fn test_create_node_overwrites_in_place() {
        let mut model = Model::new();
        model.create_node(Some(NodeId::new("a"))).set_x(1.0);
        model.create_node(Some(NodeId::new("b")));
        model.create_node(Some(NodeId::new("a")));

        let ids: Vec<&str> = model.nodes().map(|n| n.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(model.node(&NodeId::new("a")).unwrap().x().is_nan());
    }

    #[test]
    fn test_set_coordinates_read_back() {
        let mut model = Model::new();
        let node = model.create_node(None).set_x(10.0).set_y(20.0);
        assert_eq!(node.x(), 10.0);
        assert_eq!(node.y(), 20.0);
    }

    #[test]
    fn test_coerced_coordinate() {
        let mut model = Model::new();
        let node = model.create_node(None).set_x(coerce_number("10"));
        assert_eq!(node.x(), 10.0);
    }

    #[test]
    fn test_delete_keeps_relationships() {
        let mut model = Model::new();
        let a = model.create_node(None).id().clone();
        let b = model.create_node(None).id().clone();
        model.create_relationship(&a, &b);

        model.delete_node(&a);

        assert_eq!(model.node_list().len(), 1);
        assert_eq!(model.relationship_list().len(), 1);
        let rel = &model.relationship_list()[0];
        assert!(model.is_dangling(rel));
        assert!(model.endpoints(rel).is_none());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut model = Model::new();
        model.create_node(None);
        model.delete_node(&NodeId::new("missing"));
        assert_eq!(model.node_count(), 1);
    }

    #[test]
    fn test_delete_preserves_order_of_remaining() {
        let mut model = Model::new();
        for _ in 0..4 {
            model.create_node(None);
        }
        model.delete_node(&NodeId::new("1"));
        let ids: Vec<&str> = model.nodes().map(|n| n.id().as_str()).collect();
        assert_eq!(ids, vec!["0", "2", "3"]);
    }

    #[test]
    fn test_relationships_keep_insertion_order() {
        let mut model = Model::new();
        let a = model.create_node(None).id().clone();
        let b = model.create_node(None).id().clone();
        model.create_relationship(&a, &b).set_label("FIRST");
        model.create_relationship(&b, &a).set_label("SECOND");

        let labels: Vec<Option<&str>> = model
            .relationship_list()
            .iter()
            .map(|r| r.label())
            .collect();
        assert_eq!(labels, vec![Some("FIRST"), Some("SECOND")]);
    }

    #[test]
    fn test_endpoints_resolve() {
        let mut model = Model::new();
        let a = model.create_node(None).set_x(1.0).id().clone();
        let b = model.create_node(None).set_x(2.0).id().clone();
        model.create_relationship(&a, &b);

        let (start, end) = model.endpoints(&model.relationship_list()[0]).unwrap();
        assert_eq!(start.x(), 1.0);
        assert_eq!(end.x(), 2.0);
    }

    #[test]
    fn test_scales() {
        assert_eq!(Model::new().internal_scale(), 1.0);
        let model = Model::with_scales(2.0, 0.5);
        assert_eq!(model.internal_scale(), 2.0);
        assert_eq!(model.external_scale(), 0.5);
    }

    #[test]
    fn test_relationship_mut() {
        let mut model = Model::new();
        let a = model.create_node(None).id().clone();
        model.create_relationship(&a, &a);
        model.relationship_mut(0).unwrap().clear_label();
        assert_eq!(model.relationship_list()[0].label(), None);
        assert!(model.relationship_mut(1).is_none());
    }
}
