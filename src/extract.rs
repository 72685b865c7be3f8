//! Resource reference extraction.
//!
//! Collects every attribute that points at an external resource, in
//! document order, without touching the tree.

use crate::node::{Document, Element, Node};
use crate::traverse::NodeIter;

/// Attributes treated as pointing to an external resource, in the order
/// they are checked on each element.
pub const RESOURCE_ATTRIBUTES: [&str; 4] = ["src", "href", "data", "action"];

/// One resource reference found in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Tag name of the element carrying the reference.
    pub tag: String,
    /// The attribute the value came from (`src`, `href`, `data`, `action`).
    pub attribute: String,
    /// The attribute value.
    pub value: String,
}

/// Collect every resource reference in the subtree, pre-order.
///
/// An element carrying several resource attributes emits one record per
/// attribute, in [`RESOURCE_ATTRIBUTES`] order. Empty values are skipped.
pub fn collect_resources(node: &Node) -> Vec<Resource> {
    let mut resources = Vec::new();

    for n in node.subtree() {
        if let Node::Element(elem) = n {
            push_element_resources(elem, &mut resources);
        }
    }

    resources
}

fn push_element_resources(elem: &Element, out: &mut Vec<Resource>) {
    for attribute in RESOURCE_ATTRIBUTES {
        if let Some(value) = elem.get_attr(attribute)
            && !value.is_empty()
        {
            out.push(Resource {
                tag: elem.tag.clone(),
                attribute: attribute.to_string(),
                value: value.to_string(),
            });
        }
    }
}

impl Document {
    /// Collect every resource reference in the document. See
    /// [`collect_resources`].
    pub fn resources(&self) -> Vec<Resource> {
        let mut resources = Vec::new();
        push_element_resources(&self.root, &mut resources);
        for n in NodeIter::over(&self.root.children) {
            if let Node::Element(elem) = n {
                push_element_resources(elem, &mut resources);
            }
        }
        resources
    }
}

// =============================================================================
// Tests
// =============================================================================
