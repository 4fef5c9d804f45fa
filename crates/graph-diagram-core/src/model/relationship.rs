use super::NodeId;

/// Label carried by a newly created relationship.
pub const DEFAULT_RELATIONSHIP_LABEL: &str = "KNOWS";

/// A directed edge between two nodes.
///
/// Relationships have no id of their own; their identity is their position
/// in the model's relationship sequence. The endpoints are held by
/// [`NodeId`], so deleting a node leaves the relationship dangling rather
/// than invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    start: NodeId,
    end: NodeId,
    label: Option<String>,
    class: Option<String>,
}

impl Relationship {
    pub(crate) fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            label: Some(DEFAULT_RELATIONSHIP_LABEL.to_string()),
            class: None,
        }
    }

    /// Returns the id of the start node
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    /// Returns the id of the end node
    pub fn end(&self) -> &NodeId {
        &self.end
    }

    /// Returns the label, or `None` once it has been cleared.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the label text. An empty string keeps the label present.
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Removes the label so that none is drawn.
    pub fn clear_label(&mut self) -> &mut Self {
        self.label = None;
        self
    }

    /// Returns the display class, if any
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Sets or clears the display class
    pub fn set_class(&mut self, class: Option<String>) -> &mut Self {
        self.class = class;
        self
    }
}
