use std::{borrow::Borrow, fmt};

use crate::geometry::{self, Coordinates, Point};

/// Stable identity of a node within a [`Model`](super::Model).
///
/// Ids are either supplied by the caller (any string) or generated by the
/// model from its counter, in which case they are the decimal rendering of
/// the counter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Creates an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A positioned vertex of the graph.
///
/// Coordinates are in model space and start out as NaN until set. Derived
/// measurements on an unset node are NaN rather than an error.
///
/// # Examples
///
/// ```
/// # use graph_diagram_core::model::{Model, NodeId};
/// let mut model = Model::new();
/// model
///     .create_node(Some(NodeId::new("a")))
///     .set_x(10.0)
///     .set_y(20.0)
///     .set_label(Some("n".to_string()));
///
/// let node = model.node(&NodeId::new("a")).unwrap();
/// assert_eq!(node.x(), 10.0);
/// assert_eq!(node.y(), 20.0);
/// assert_eq!(node.label(), Some("n"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    position: Point,
    class: Option<String>,
    label: Option<String>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            position: Point::unset(),
            class: None,
            label: None,
        }
    }

    /// Returns the node id
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the x-coordinate in model space
    pub fn x(&self) -> f64 {
        self.position.x()
    }

    /// Returns the y-coordinate in model space
    pub fn y(&self) -> f64 {
        self.position.y()
    }

    /// Returns the position in model space
    pub fn position(&self) -> Point {
        self.position
    }

    /// Sets the x-coordinate
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.position = self.position.with_x(x);
        self
    }

    /// Sets the y-coordinate
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.position = self.position.with_y(y);
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

    /// Returns the label text, or `None` if the node has no label
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets or clears the label
    pub fn set_label(&mut self, label: Option<String>) -> &mut Self {
        self.label = label;
        self
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        geometry::distance(self, other)
    }

    /// The point halfway to another node.
    pub fn midway_to(&self, other: &Node) -> Point {
        geometry::midpoint(self, other)
    }

    /// Direction to another node in degrees, see [`geometry::angle_degrees`].
    pub fn angle_to(&self, other: &Node) -> f64 {
        geometry::angle_degrees(self, other)
    }

    /// Returns `true` iff this node lies strictly left of `other`.
    pub fn is_left_of(&self, other: &Node) -> bool {
        geometry::is_left_of(self, other)
    }
}

impl Coordinates for Node {
    fn x(&self) -> f64 {
        self.position.x()
    }

    fn y(&self) -> f64 {
        self.position.y()
    }
}

/// Converts text to a number the way loosely typed input is read.
///
/// Surrounding whitespace is ignored, an empty string is `0`, and anything
/// that does not parse is NaN.
///
/// # Examples
///
/// ```
/// # use graph_diagram_core::model::coerce_number;
/// assert_eq!(coerce_number("10"), 10.0);
/// assert_eq!(coerce_number(" -2.5 "), -2.5);
/// assert_eq!(coerce_number(""), 0.0);
/// assert!(coerce_number("ten").is_nan());
/// ```
pub fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts spellings like "inf" and "nan" that are not numbers here.
        _ if text.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) => {
            f64::NAN
        }
        _ => text.parse().unwrap_or(f64::NAN),
    }
}
