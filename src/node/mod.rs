//! Node types for the document tree.
//!
//! A tree is built from two node shapes: [`Element`] (tag, attributes,
//! ordered children) and bare text. The [`Node`] enum makes the pair an
//! explicit sum type so traversal, search, and mutation dispatch on the
//! variant tag instead of inspecting shapes dynamically. [`NodeView`] is the
//! flattened projection handed to predicates, which hides that difference
//! again where callers don't care.

mod document;
mod element;

pub use document::{Document, Stats};
pub use element::Element;

use smallvec::SmallVec;

use crate::attr::Attrs;

/// Node in a document tree - either an element or bare text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(String),
}

/// Type alias for children collections.
pub type Children = SmallVec<[Node; 8]>;

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Check if this is an element with the given tag name.
    pub fn is_element_named(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|e| e.tag == tag)
    }

    /// The normalized projection of this node handed to predicates.
    pub fn view(&self) -> NodeView<'_> {
        match self {
            Node::Element(e) => e.view(),
            Node::Text(t) => NodeView {
                tag: None,
                attrs: None,
                content: Some(t),
            },
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

// =============================================================================
// NodeView
// =============================================================================

/// Uniform read-only view of a node, as seen by search and prune predicates.
///
/// For a text node `tag` and `attrs` are `None` and `content` carries the
/// text. For an element, `content` is the text of its single child if and
/// only if that element has exactly one child and the child is text -
/// otherwise `None`, even when several text children exist. This lets
/// predicates match "leaf text content" without probing children shape.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    /// Tag name, `None` for text nodes.
    pub tag: Option<&'a str>,
    /// Attribute map, `None` for text nodes.
    pub attrs: Option<&'a Attrs>,
    /// Text content, per the sole-text-child rule above.
    pub content: Option<&'a str>,
}

impl NodeView<'_> {
    /// Check if this view is of an element with the given tag name.
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag == Some(tag)
    }

    /// Get an attribute value, `None` for text nodes or absent keys.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.and_then(|a| a.get(name))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Node: Send, Sync);
    assert_impl_all!(Document: Send, Sync);

    #[test]
    fn test_node_variants() {
        let elem: Node = Element::new("div").into();
        assert!(elem.is_element());
        assert!(!elem.is_text());
        assert!(elem.is_element_named("div"));
        assert!(!elem.is_element_named("span"));

        let text = Node::text("hello");
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_element().is_none());
    }

    #[test]
    fn test_text_view() {
        let node = Node::text("hello");
        let view = node.view();
        assert_eq!(view.tag, None);
        assert!(view.attrs.is_none());
        assert_eq!(view.content, Some("hello"));
        assert_eq!(view.attr("class"), None);
    }

    #[test]
    fn test_element_view_sole_text_child() {
        let node: Node = Element::new("title").text("Hi").into();
        let view = node.view();
        assert_eq!(view.tag, Some("title"));
        assert_eq!(view.content, Some("Hi"));
    }

    #[test]
    fn test_element_view_content_requires_single_text_child() {
        // Two text children: content must be None.
        let node: Node = Element::new("p").text("a").text("b").into();
        assert_eq!(node.view().content, None);

        // Element child: content must be None.
        let node: Node = Element::new("p").child(Element::new("b")).into();
        assert_eq!(node.view().content, None);

        // No children at all.
        let node: Node = Element::new("p").into();
        assert_eq!(node.view().content, None);
    }
}
