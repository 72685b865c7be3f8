//! Element type - tagged tree nodes with attributes and children.

use smallvec::SmallVec;

use crate::attr::Attrs;

use super::{Children, Node, NodeView};

// =============================================================================
// Element
// =============================================================================

/// An element node: lowercase tag name, attribute map, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Element attributes, in insertion order.
    pub attrs: Attrs,
    /// Child nodes in document order.
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an attribute (builder style).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Append a child element (builder style).
    pub fn child(mut self, elem: Element) -> Self {
        self.children.push(elem.into());
        self
    }

    /// Append a text child (builder style).
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Set attribute value (update if exists, append if not).
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set(name, value);
    }

    /// Remove attribute by name, returning the old value if it existed.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Check if attribute exists.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Children helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types).
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Append a child element.
    pub fn push_elem(&mut self, elem: Element) {
        self.children.push(elem.into());
    }

    /// Append a text child.
    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push(Node::Text(content.into()));
    }

    /// Iterate over child element references.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Iterate over child element mutable references.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    /// Get text content of this element (concatenated from all text nodes,
    /// depth first).
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(t),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }

    /// The sole text child, if this element has exactly one child and it is
    /// text. This is the `content` rule predicates see through [`NodeView`].
    pub fn sole_text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [Node::Text(t)] => Some(t),
            _ => None,
        }
    }

    /// The normalized predicate view of this element.
    pub fn view(&self) -> NodeView<'_> {
        NodeView {
            tag: Some(&self.tag),
            attrs: Some(&self.attrs),
            content: self.sole_text(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Closure-based traversal
    // ─────────────────────────────────────────────────────────────────────────

    /// Visit this element and every descendant element, depth first.
    pub fn for_each_element_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        self.visit_elements_mut(&mut f);
    }

    fn visit_elements_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        f(self);
        for child in &mut self.children {
            if let Node::Element(e) = child {
                e.visit_elements_mut(f);
            }
        }
    }
}
