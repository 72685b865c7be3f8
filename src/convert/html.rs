//! Conversion from parsed HTML to the canonical tree.
//!
//! This module bridges the `tl` parser's node tree to our document tree.
//! The adapter keeps its own arena of borrowed slices; conversion copies
//! everything into an owned tree so nothing aliases the adapter's buffers.
//!
//! # Normalization rules
//!
//! - Tag names are lowercased. Attributes are sorted by name - the adapter
//!   hands them back in map order, so sorting is what makes re-serialization
//!   deterministic. Valueless attributes map to empty values.
//! - Text that is pure whitespace is dropped. Anything else is kept
//!   verbatim - one raw text leaf becomes exactly one text child, never
//!   split or merged.
//! - Comments (and the other non-element, non-text kinds the adapter
//!   surfaces the same way) are dropped with their subtrees.
//!
//! # Flow
//!
//! ```text
//! &str ──tl::parse──▶ tl::VDom ──from_html──▶ Option<Document>
//! ```

use crate::error::{GroveError, GroveResult};
use crate::node::{Document, Element, Node};

// =============================================================================
// Public API
// =============================================================================

/// Convert HTML text into a canonical document tree.
///
/// Locates the first top-level `<html>` element and maps its subtree.
/// Fragment-only or otherwise root-less input yields `Ok(None)` rather than
/// an error - that case is common and callers are expected to handle it as
/// an ordinary outcome. The error path is reserved for the parse adapter
/// refusing the input outright.
pub fn from_html(html: &str) -> GroveResult<Option<Document>> {
    let dom = tl::parse(html, tl::ParserOptions::default()).map_err(GroveError::adapter)?;
    let parser = dom.parser();

    let root = dom.children().iter().find_map(|handle| match handle.get(parser) {
        Some(tl::Node::Tag(tag)) if tag.name().as_utf8_str().eq_ignore_ascii_case("html") => {
            Some(convert_tag(tag, parser))
        }
        _ => None,
    });

    Ok(root.map(Document::new))
}

// =============================================================================
// Converter
// =============================================================================

fn convert_tag(tag: &tl::HTMLTag<'_>, parser: &tl::Parser<'_>) -> Element {
    let mut elem = Element::new(tag.name().as_utf8_str().to_ascii_lowercase());

    // Adapter attribute order is map order, not source order; sort so the
    // same input always serializes the same way.
    let mut pairs: Vec<(String, String)> = tag
        .attributes()
        .iter()
        .map(|(name, value)| {
            (
                name.into_owned(),
                value.map(|v| v.into_owned()).unwrap_or_default(),
            )
        })
        .collect();
    pairs.sort();
    for (name, value) in pairs {
        elem.attrs.set(name, value);
    }

    let children = tag.children();
    for handle in children.top().iter() {
        if let Some(node) = convert_node(handle, parser) {
            elem.children.push(node);
        }
    }

    elem
}

/// Map one raw node, or `None` when it contributes nothing to the tree.
fn convert_node(handle: &tl::NodeHandle, parser: &tl::Parser<'_>) -> Option<Node> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => Some(Node::Element(Box::new(convert_tag(tag, parser)))),
        tl::Node::Raw(raw) => {
            let text = raw.as_utf8_str();
            if text.trim().is_empty() {
                None
            } else {
                Some(Node::Text(text.into_owned()))
            }
        }
        tl::Node::Comment(_) => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
