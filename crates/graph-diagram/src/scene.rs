//! The drawing surface that the binding engine writes to.
//!
//! A [`Scene`] is a retained set of keyed elements grouped by
//! [`ElementKind`]. The engine only ever creates, updates and removes
//! elements by key; it never inspects how a scene stores or renders them.
//!
//! # Overview
//!
//! - [`Scene`] - The keyed create/update/remove capability
//! - [`ElementKind`] - The five element categories a graph diagram uses
//! - [`ElementKey`] - Identity of an element within its category
//! - [`Join`] - The enter/update/exit split between existing and target keys
//! - [`SvgScene`] - An in-memory scene that serializes to an SVG document

mod svg;

pub use self::svg::SvgScene;

use std::fmt;

use indexmap::IndexSet;

use graph_diagram_core::model::NodeId;

/// The category of a scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The circle drawn for a node.
    NodeCircle,
    /// The text drawn at a node's center.
    NodeLabel,
    /// The group positioning and rotating a relationship.
    RelationshipGroup,
    /// The arrow outline inside a relationship group.
    RelationshipPath,
    /// The text inside a relationship group.
    RelationshipLabel,
}

impl ElementKind {
    /// All kinds, in drawing order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::NodeCircle,
        ElementKind::NodeLabel,
        ElementKind::RelationshipGroup,
        ElementKind::RelationshipPath,
        ElementKind::RelationshipLabel,
    ];

    /// Returns the SVG tag used for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::NodeCircle => "circle",
            ElementKind::NodeLabel | ElementKind::RelationshipLabel => "text",
            ElementKind::RelationshipGroup => "g",
            ElementKind::RelationshipPath => "path",
        }
    }

    /// Returns `true` for kinds that live inside a relationship group.
    pub fn is_relationship_child(self) -> bool {
        matches!(
            self,
            ElementKind::RelationshipPath | ElementKind::RelationshipLabel
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::NodeCircle => "node circle",
            ElementKind::NodeLabel => "node label",
            ElementKind::RelationshipGroup => "relationship group",
            ElementKind::RelationshipPath => "relationship path",
            ElementKind::RelationshipLabel => "relationship label",
        };
        f.write_str(name)
    }
}

/// Identity of an element within its [`ElementKind`].
///
/// Node elements are keyed by node id; relationship elements by the
/// relationship's position in the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Node(NodeId),
    Relationship(usize),
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKey::Node(id) => write!(f, "node:{id}"),
            ElementKey::Relationship(index) => write!(f, "relationship:{index}"),
        }
    }
}

/// A keyed, retained drawing surface.
///
/// Elements of one kind are unique by key. Implementations decide how
/// elements are stored and rendered, but must keep these rules:
///
/// - [`append`](Scene::append) on an existing key replaces that element.
/// - Relationship elements are ordered by relationship index, whatever
///   order they were appended in.
/// - Removing a [`ElementKind::RelationshipGroup`] also removes the
///   path and label with the same key.
/// - Operations on keys that do not exist are ignored.
pub trait Scene {
    /// Sets an attribute on the root of the drawing.
    fn set_root_attribute(&mut self, name: &str, value: String);

    /// Returns the keys of all current elements of `kind`, in drawing order.
    fn keys(&self, kind: ElementKind) -> Vec<ElementKey>;

    /// Creates an element with its initial attributes.
    fn append(&mut self, kind: ElementKind, key: ElementKey, attributes: Vec<(&str, String)>);

    /// Removes an element.
    fn remove(&mut self, kind: ElementKind, key: &ElementKey);

    /// Sets an attribute on an existing element.
    fn set_attribute(&mut self, kind: ElementKind, key: &ElementKey, name: &str, value: String);

    /// Sets the text content of an existing element.
    fn set_text(&mut self, kind: ElementKind, key: &ElementKey, text: &str);

    /// Reads an attribute of an element.
    fn attribute(&self, kind: ElementKind, key: &ElementKey, name: &str) -> Option<&str>;

    /// Reads the text content of an element.
    fn text(&self, kind: ElementKind, key: &ElementKey) -> Option<&str>;
}

/// The split of target keys against the keys a scene already has.
///
/// # Examples
///
/// ```
/// # use graph_diagram::scene::{ElementKey, Join};
/// let existing = [ElementKey::Relationship(0), ElementKey::Relationship(1)];
/// let target = [ElementKey::Relationship(1), ElementKey::Relationship(2)];
///
/// let join = Join::compute(&existing, &target);
/// assert_eq!(join.enter(), &[ElementKey::Relationship(2)]);
/// assert_eq!(join.update(), &[ElementKey::Relationship(1)]);
/// assert_eq!(join.exit(), &[ElementKey::Relationship(0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Join {
    enter: Vec<ElementKey>,
    update: Vec<ElementKey>,
    exit: Vec<ElementKey>,
}

impl Join {
    /// Computes the join. `enter` and `update` follow `target` order; `exit`
    /// follows `existing` order. Duplicate keys count once.
    pub fn compute(existing: &[ElementKey], target: &[ElementKey]) -> Self {
        let existing_set: IndexSet<&ElementKey> = existing.iter().collect();
        let target_set: IndexSet<&ElementKey> = target.iter().collect();

        let (update, enter): (Vec<&ElementKey>, Vec<&ElementKey>) = target_set
            .iter()
            .copied()
            .partition(|key| existing_set.contains(*key));
        let exit = existing_set
            .iter()
            .filter(|key| !target_set.contains(**key))
            .map(|key| (*key).clone())
            .collect();

        Self {
            enter: enter.into_iter().cloned().collect(),
            update: update.into_iter().cloned().collect(),
            exit,
        }
    }

    /// Keys to create
    pub fn enter(&self) -> &[ElementKey] {
        &self.enter
    }

    /// Keys that already exist and stay
    pub fn update(&self) -> &[ElementKey] {
        &self.update
    }

    /// Keys to remove
    pub fn exit(&self) -> &[ElementKey] {
        &self.exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> ElementKey {
        ElementKey::Node(NodeId::new(id))
    }

    #[test]
    fn test_join_empty_existing_enters_all() {
        let join = Join::compute(&[], &[node("a"), node("b")]);

        assert_eq!(join.enter(), &[node("a"), node("b")]);
        assert!(join.update().is_empty());
        assert!(join.exit().is_empty());
    }

    #[test]
    fn test_join_empty_target_exits_all() {
        let join = Join::compute(&[node("a"), node("b")], &[]);

        assert!(join.enter().is_empty());
        assert_eq!(join.exit(), &[node("a"), node("b")]);
    }

    #[test]
    fn test_join_duplicates_count_once() {
        let join = Join::compute(&[node("a"), node("a")], &[node("b"), node("b"), node("a")]);

        assert_eq!(join.enter(), &[node("b")]);
        assert_eq!(join.update(), &[node("a")]);
        assert!(join.exit().is_empty());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ElementKind::NodeCircle.tag(), "circle");
        assert_eq!(ElementKind::RelationshipGroup.tag(), "g");
        assert_eq!(ElementKind::RelationshipLabel.tag(), "text");
        assert!(ElementKind::RelationshipPath.is_relationship_child());
        assert!(!ElementKind::NodeLabel.is_relationship_child());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(node("a").to_string(), "node:a");
        assert_eq!(ElementKey::Relationship(3).to_string(), "relationship:3");
    }
}
