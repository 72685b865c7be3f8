//! grove - HTML document trees: parse, query, transform, render.
//!
//! ## Core Concepts
//!
//! A [`Document`] owns a tree of [`Node`]s - each either an [`Element`]
//! (tag, attributes, children) or bare text. [`from_html`] builds the tree
//! from HTML text through an external parse adapter, normalizing as it
//! goes (whitespace-only text and comment-like nodes are dropped);
//! [`render_document`] serializes it back. In between, traversal, predicate
//! search, pruning, and the head-section mutations edit the tree in place.
//!
//! Tree operations never fail: missing targets (`head`, `title`, charset
//! meta) are created on the way, and fragment-only input converts to `None`
//! rather than an error. The only error path is the parse adapter itself.
//!
//! ## Modules
//! - `node`: Node/Element/Document types
//! - `attr`: Attribute mapping
//! - `convert`: HTML → tree conversion
//! - `render`: tree → HTML serialization
//! - `traverse`: depth-first walk, search, pruning
//! - `head`: title/meta/link/script mutations
//! - `extract`: resource reference extraction
//!
//! ## Usage
//!
//! ```ignore
//! use grove::prelude::*;
//!
//! let mut doc = from_html(input)?.unwrap_or_else(Document::skeleton);
//! doc.set_title("Home");
//! doc.set_charset(DEFAULT_CHARSET);
//! doc.insert_stylesheet("/main.css");
//! doc.prune(|v| v.attr("class") == Some("draft"));
//! let html = doc.to_html();
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Attribute mapping
pub mod attr;

/// Source format converters
pub mod convert;

/// Error types
pub mod error;

/// Resource reference extraction
pub mod extract;

/// Head-section mutations
pub mod head;

/// Node types: Document, Element, Node
pub mod node;

/// Prelude for common imports
pub mod prelude;

/// HTML rendering
pub mod render;

/// Traversal, search, pruning
pub mod traverse;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Document, Element, Node, NodeView, Stats};

// Attributes
pub use attr::Attrs;

// Codec
pub use convert::from_html;
pub use render::{is_void_element, render_document, render_element, render_node};

#[cfg(feature = "parallel")]
pub use render::render_all;

// Traversal, search, pruning
pub use traverse::{contains, contains_in, prune, prune_all, walk, walk_all, NodeIter};

// Head mutations
pub use head::{DEFAULT_CHARSET, DEFAULT_VIEWPORT};

// Resource extraction
pub use extract::{collect_resources, Resource, RESOURCE_ATTRIBUTES};

// Error types
pub use error::{GroveError, GroveResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_skeleton_round_trip() {
        let doc = Document::skeleton();
        let reparsed = from_html(&doc.to_html()).unwrap().unwrap();

        assert_eq!(reparsed.root.tag, doc.root.tag);
        assert_eq!(reparsed.root.attrs, doc.root.attrs);
        assert_eq!(reparsed.root.child_count(), doc.root.child_count());
    }

    #[test]
    fn test_built_document_round_trip() {
        let mut doc = Document::skeleton();
        doc.set_title("Home");
        doc.set_charset(DEFAULT_CHARSET);
        doc.set_viewport(DEFAULT_VIEWPORT);
        doc.insert_stylesheet("/main.css");

        let reparsed = from_html(&doc.to_html()).unwrap().unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_parse_edit_render_pipeline() {
        let input = "<html><head><title>Old</title></head>\
                     <body><p class=\"draft\">wip</p><p>done</p></body></html>";
        let mut doc = from_html(input).unwrap().unwrap();

        doc.set_title("New");
        doc.prune(|v| v.attr("class") == Some("draft"));
        doc.insert_inline_script("init();");

        let html = doc.to_html();
        assert_eq!(
            html,
            "<html><head><title>New</title><script>init();</script></head>\
             <body><p>done</p></body></html>"
        );
    }

    #[test]
    fn test_extracted_resources_survive_round_trip() {
        let input = r#"<html><head><link rel="stylesheet" href="/a.css" /></head><body><img src="/b.jpg" /></body></html>"#;
        let doc = from_html(input).unwrap().unwrap();

        let resources = doc.resources();
        assert_eq!(resources.len(), 2);

        let reparsed = from_html(&doc.to_html()).unwrap().unwrap();
        assert_eq!(reparsed.resources(), resources);
    }

    #[test]
    fn test_head_created_first_for_headless_input() {
        let mut doc = from_html("<html><body><p>x</p></body></html>").unwrap().unwrap();
        doc.insert_stylesheet("/a.css");
        assert!(doc.root.children[0].is_element_named("head"));
        assert!(doc.root.children[1].is_element_named("body"));
    }
}
