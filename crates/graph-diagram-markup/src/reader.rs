//! Reads graph declarations out of an XML document.
//!
//! This is the first phase of [`parse`](crate::parse): the source is parsed
//! with `roxmltree`, and every element that declares a node or a relationship
//! is captured together with its source span. No validation beyond XML
//! well-formedness happens here; see [`builder`](crate::builder) for that.

use log::trace;
use roxmltree::{Document, Node};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    span::{self, Span},
};

/// Class marking an element that declares a node.
pub(crate) const NODE_CLASS: &str = "graph-diagram-node";
/// Class marking an element that declares a relationship.
pub(crate) const RELATIONSHIP_CLASS: &str = "graph-diagram-relationship";

/// An attribute value together with the span of the element carrying it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attr {
    pub value: String,
    pub span: Span,
}

/// Everything the document declares, in document order.
#[derive(Debug, Default)]
pub(crate) struct Declarations {
    pub internal_scale: Option<Attr>,
    pub external_scale: Option<Attr>,
    pub nodes: Vec<NodeDecl>,
    pub relationships: Vec<RelationshipDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeDecl {
    pub id: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub label: Option<String>,
    pub class: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RelationshipDecl {
    pub from: Option<String>,
    pub to: Option<String>,
    pub label: Option<String>,
    pub class: Option<String>,
    pub span: Span,
}

/// Parses the source and collects all declarations.
///
/// Fails with [`ErrorCode::E100`] when the source is not a well-formed
/// document with a single root element.
pub(crate) fn read(source: &str) -> Result<Declarations> {
    let document = Document::parse(source).map_err(|err| malformed(source, &err))?;
    let root = document.root_element();

    let mut declarations = Declarations {
        internal_scale: attr(root, "data-internal-scale"),
        external_scale: attr(root, "data-external-scale"),
        ..Declarations::default()
    };

    for element in root.descendants().filter(Node::is_element) {
        if has_class(element, NODE_CLASS) {
            let decl = NodeDecl {
                id: owned(element, "data-node-id"),
                x: owned(element, "data-x"),
                y: owned(element, "data-y"),
                label: owned(element, "data-label"),
                class: owned(element, "data-class"),
                span: Span::new(element.range()),
            };
            trace!(id:? = decl.id, start = decl.span.start(); "Found node declaration");
            declarations.nodes.push(decl);
        }

        if has_class(element, RELATIONSHIP_CLASS) {
            let decl = RelationshipDecl {
                from: owned(element, "data-from"),
                to: owned(element, "data-to"),
                label: owned(element, "data-label"),
                class: owned(element, "data-class"),
                span: Span::new(element.range()),
            };
            trace!(from:? = decl.from, to:? = decl.to; "Found relationship declaration");
            declarations.relationships.push(decl);
        }
    }

    Ok(declarations)
}

fn has_class(element: Node<'_, '_>, class: &str) -> bool {
    element
        .attribute("class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
}

fn owned(element: Node<'_, '_>, name: &str) -> Option<String> {
    element.attribute(name).map(str::to_string)
}

fn attr(element: Node<'_, '_>, name: &str) -> Option<Attr> {
    element.attribute(name).map(|value| Attr {
        value: value.to_string(),
        span: Span::new(element.range()),
    })
}

fn malformed(source: &str, err: &roxmltree::Error) -> Diagnostic {
    let pos = err.pos();
    let offset = span::offset_at(source, pos.row, pos.col);
    let end = (offset + 1).min(source.len());

    Diagnostic::error(format!("malformed document: {err}"))
        .with_code(ErrorCode::E100)
        .with_label(Span::new(offset..end), "document is invalid here")
        .with_help("the markup must be well-formed XML with a single root element")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_nodes_in_document_order() {
        let source = r#"<ul>
            <li class="graph-diagram-node" data-node-id="a" data-x="1" data-y="2"/>
            <li class="big graph-diagram-node" data-label="B" data-class="big"/>
        </ul>"#;

        let declarations = read(source).unwrap();

        assert_eq!(declarations.nodes.len(), 2);
        assert_eq!(declarations.nodes[0].id.as_deref(), Some("a"));
        assert_eq!(declarations.nodes[0].x.as_deref(), Some("1"));
        assert_eq!(declarations.nodes[1].id, None);
        assert_eq!(declarations.nodes[1].label.as_deref(), Some("B"));
        assert_eq!(declarations.nodes[1].class.as_deref(), Some("big"));
    }

    #[test]
    fn test_read_span_covers_element() {
        let source = r#"<g><n class="graph-diagram-node"/></g>"#;

        let declarations = read(source).unwrap();
        let span = declarations.nodes[0].span;

        assert_eq!(&source[span.range()], r#"<n class="graph-diagram-node"/>"#);
    }

    #[test]
    fn test_read_class_must_match_whole_word() {
        let source = r#"<g><n class="graph-diagram-node-id-a"/><n class="xgraph-diagram-node"/></g>"#;

        let declarations = read(source).unwrap();

        assert!(declarations.nodes.is_empty());
    }

    #[test]
    fn test_read_relationships() {
        let source = r#"<g>
            <e class="graph-diagram-relationship" data-from="a" data-to="b" data-label=""/>
            <e class="graph-diagram-relationship" data-from="b"/>
        </g>"#;

        let declarations = read(source).unwrap();

        assert_eq!(declarations.relationships.len(), 2);
        assert_eq!(declarations.relationships[0].label.as_deref(), Some(""));
        assert_eq!(declarations.relationships[1].to, None);
    }

    #[test]
    fn test_read_root_scales() {
        let source = r#"<g data-internal-scale="2" data-external-scale="0.5"/>"#;

        let declarations = read(source).unwrap();

        assert_eq!(declarations.internal_scale.unwrap().value, "2");
        assert_eq!(declarations.external_scale.unwrap().value, "0.5");
    }

    #[test]
    fn test_read_root_can_declare_node() {
        let source = r#"<n class="graph-diagram-node" data-node-id="solo"/>"#;

        let declarations = read(source).unwrap();

        assert_eq!(declarations.nodes.len(), 1);
    }

    #[test]
    fn test_read_malformed() {
        let source = "<g>\n  <n class=\"graph-diagram-node\">\n</g>";

        let err = read(source).unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.labels().len(), 1);
        assert!(err.labels()[0].span().start() <= source.len());
    }

    #[test]
    fn test_read_multiple_roots_is_malformed() {
        let err = read("<a/><b/>").unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E100));
    }
}
