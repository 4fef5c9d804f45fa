//! In-memory scene that serializes to an SVG document.

use std::fmt;

use indexmap::IndexMap;
use log::trace;
use svg::{Document, Node, node::element as svg_element};

use super::{ElementKey, ElementKind, Scene};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Default, PartialEq)]
struct Element {
    attributes: IndexMap<String, String>,
    text: Option<String>,
}

impl Element {
    fn apply_to<T: Node>(&self, mut node: T) -> T {
        for (name, value) in &self.attributes {
            node.assign(name.as_str(), value.as_str());
        }
        node
    }
}

/// A retained scene held in memory.
///
/// Node elements keep their creation order within each kind; relationship
/// elements are kept sorted by relationship index. The scene can be
/// bound repeatedly and serialized at any point with
/// [`to_document`](SvgScene::to_document) or `to_string()`.
///
/// The document lists node circles first, then node labels, then one `g`
/// per relationship holding its `path` and optional `text`.
///
/// # Examples
///
/// ```
/// # use graph_diagram::scene::{ElementKey, ElementKind, Scene, SvgScene};
/// let mut scene = SvgScene::new();
/// scene.set_root_attribute("class", "graphdiagram".to_string());
/// scene.append(
///     ElementKind::RelationshipGroup,
///     ElementKey::Relationship(0),
///     vec![("class", "graph-diagram-relationship ".to_string())],
/// );
///
/// let svg = scene.to_string();
/// assert!(svg.contains("graphdiagram"));
/// assert!(svg.contains("<g"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgScene {
    root: IndexMap<String, String>,
    elements: IndexMap<ElementKind, IndexMap<ElementKey, Element>>,
}

impl SvgScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a root attribute.
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root.get(name).map(String::as_str)
    }

    /// Returns the number of elements of `kind`.
    pub fn len(&self, kind: ElementKind) -> usize {
        self.elements.get(&kind).map_or(0, IndexMap::len)
    }

    /// Returns `true` if the scene holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements.values().all(IndexMap::is_empty)
    }

    /// Builds the SVG document for the current state of the scene.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new().set("xmlns", SVG_NAMESPACE);
        for (name, value) in &self.root {
            doc.assign(name.as_str(), value.as_str());
        }

        for (_, circle) in self.iter(ElementKind::NodeCircle) {
            doc = doc.add(circle.apply_to(svg_element::Circle::new()));
        }

        for (_, label) in self.iter(ElementKind::NodeLabel) {
            doc = doc.add(text_element(label));
        }

        for (key, group) in self.iter(ElementKind::RelationshipGroup) {
            let mut g = group.apply_to(svg_element::Group::new());
            if let Some(path) = self.get(ElementKind::RelationshipPath, key) {
                g = g.add(path.apply_to(svg_element::Path::new()));
            }
            if let Some(label) = self.get(ElementKind::RelationshipLabel, key) {
                g = g.add(text_element(label));
            }
            doc = doc.add(g);
        }

        doc
    }

    fn iter(&self, kind: ElementKind) -> impl Iterator<Item = (&ElementKey, &Element)> {
        self.elements.get(&kind).into_iter().flatten()
    }

    fn get(&self, kind: ElementKind, key: &ElementKey) -> Option<&Element> {
        self.elements.get(&kind)?.get(key)
    }

    fn get_mut(&mut self, kind: ElementKind, key: &ElementKey) -> Option<&mut Element> {
        let element = self.elements.get_mut(&kind)?.get_mut(key);
        if element.is_none() {
            trace!(kind:% = kind, key:% = key; "Ignoring update of missing element");
        }
        element
    }
}

fn text_element(element: &Element) -> svg_element::Text {
    let content = element.text.clone().unwrap_or_default();
    element.apply_to(svg_element::Text::new(content))
}

impl Scene for SvgScene {
    fn set_root_attribute(&mut self, name: &str, value: String) {
        self.root.insert(name.to_string(), value);
    }

    fn keys(&self, kind: ElementKind) -> Vec<ElementKey> {
        self.iter(kind).map(|(key, _)| key.clone()).collect()
    }

    fn append(&mut self, kind: ElementKind, key: ElementKey, attributes: Vec<(&str, String)>) {
        trace!(kind:% = kind, key:% = key; "Appending element");
        let element = Element {
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            text: None,
        };
        let elements = self.elements.entry(kind).or_default();
        match key {
            // Relationship elements are drawn in relationship order.
            ElementKey::Relationship(index) if !elements.contains_key(&key) => {
                let position = elements
                    .keys()
                    .position(|existing| {
                        matches!(existing, ElementKey::Relationship(other) if *other > index)
                    })
                    .unwrap_or(elements.len());
                elements.shift_insert(position, key, element);
            }
            key => {
                elements.insert(key, element);
            }
        }
    }

    fn remove(&mut self, kind: ElementKind, key: &ElementKey) {
        trace!(kind:% = kind, key:% = key; "Removing element");
        if let Some(elements) = self.elements.get_mut(&kind) {
            elements.shift_remove(key);
        }
        if kind == ElementKind::RelationshipGroup {
            let children = ElementKind::ALL
                .into_iter()
                .filter(|child| child.is_relationship_child());
            for child in children {
                if let Some(elements) = self.elements.get_mut(&child) {
                    elements.shift_remove(key);
                }
            }
        }
    }

    fn set_attribute(&mut self, kind: ElementKind, key: &ElementKey, name: &str, value: String) {
        if let Some(element) = self.get_mut(kind, key) {
            element.attributes.insert(name.to_string(), value);
        }
    }

    fn set_text(&mut self, kind: ElementKind, key: &ElementKey, text: &str) {
        if let Some(element) = self.get_mut(kind, key) {
            element.text = Some(text.to_string());
        }
    }

    fn attribute(&self, kind: ElementKind, key: &ElementKey, name: &str) -> Option<&str> {
        self.get(kind, key)?
            .attributes
            .get(name)
            .map(String::as_str)
    }

    fn text(&self, kind: ElementKind, key: &ElementKey) -> Option<&str> {
        self.get(kind, key)?.text.as_deref()
    }
}

impl fmt::Display for SvgScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_document())
    }
}
