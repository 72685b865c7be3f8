//! HTML rendering for document trees.
//!
//! The serializer is a pure read-only traversal: attributes render in their
//! insertion order, childless void elements self-close, everything else gets
//! an explicit closing tag.
//!
//! # Known limitation
//!
//! Neither text content nor attribute values are entity-escaped - output is
//! byte-for-byte what the tree holds. A `"` inside an attribute value will
//! break the output, and untrusted text can inject markup. This mirrors the
//! conversion side, which leaves entity decoding to the parse adapter and
//! never re-encodes; callers sanitize text before putting it in the tree.

use crate::node::{Document, Element, Node};

// =============================================================================
// Public API
// =============================================================================

/// Render a whole document to HTML text.
pub fn render_document(doc: &Document) -> String {
    let mut output = String::new();
    render_element_into(&doc.root, &mut output);
    output
}

/// Render a single node (element or text) to HTML text.
pub fn render_node(node: &Node) -> String {
    let mut output = String::new();
    render_node_into(node, &mut output);
    output
}

/// Render an element to HTML text.
pub fn render_element(elem: &Element) -> String {
    let mut output = String::new();
    render_element_into(elem, &mut output);
    output
}

/// Render documents in parallel, preserving input order.
///
/// Rendering is read-only, so sibling documents can serialize concurrently;
/// each individual document still renders sequentially.
#[cfg(feature = "parallel")]
pub fn render_all(docs: &[Document]) -> Vec<String> {
    use rayon::prelude::*;
    docs.par_iter().map(render_document).collect()
}

// =============================================================================
// Serializer
// =============================================================================

fn render_node_into(node: &Node, output: &mut String) {
    match node {
        Node::Element(elem) => render_element_into(elem, output),
        // Text renders verbatim - see the module-level escaping note.
        Node::Text(text) => output.push_str(text),
    }
}

fn render_element_into(elem: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    for (name, value) in elem.attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(value);
        output.push('"');
    }

    // Void elements self-close only while childless; a void tag that was
    // given children renders like any other element.
    if elem.children.is_empty() && is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    for child in &elem.children {
        render_node_into(child, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

/// Check if a tag belongs to the fixed void-element set.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "meta" | "base" | "link" | "img" | "br" | "hr" | "input" | "area" | "source"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attrs;

    #[test]
    fn test_render_text_verbatim() {
        assert_eq!(render_node(&Node::text("a & b < c")), "a & b < c");
    }

    #[test]
    fn test_void_element_without_attrs() {
        assert_eq!(render_element(&Element::new("br")), "<br />");
    }

    #[test]
    fn test_void_element_with_attrs() {
        let meta = Element::new("meta").with_attr("charset", "utf-8");
        assert_eq!(render_element(&meta), r#"<meta charset="utf-8" />"#);
    }

    #[test]
    fn test_all_void_elements_self_close() {
        for tag in ["meta", "base", "link", "img", "br", "hr", "input", "area", "source"] {
            assert_eq!(render_element(&Element::new(tag)), format!("<{tag} />"));
        }
    }

    #[test]
    fn test_empty_non_void_gets_closing_tag() {
        assert_eq!(render_element(&Element::new("div")), "<div></div>");
        assert_eq!(render_element(&Element::new("script")), "<script></script>");
    }

    #[test]
    fn test_void_with_children_renders_closing_tag() {
        let link = Element::new("link").text("odd");
        assert_eq!(render_element(&link), "<link>odd</link>");
    }

    #[test]
    fn test_attrs_render_in_insertion_order() {
        let a = Element::new("a")
            .with_attr("href", "/x")
            .with_attr("class", "nav")
            .text("go");
        assert_eq!(render_element(&a), r#"<a href="/x" class="nav">go</a>"#);
    }

    #[test]
    fn test_attr_values_not_escaped() {
        // Documented fidelity limitation: values pass through untouched.
        let el = Element::new("div").with_attr("title", "say \"hi\"");
        assert_eq!(render_element(&el), "<div title=\"say \"hi\"\"></div>");
    }

    #[test]
    fn test_nested_rendering() {
        let doc = Document::new(
            Element::new("html")
                .child(Element::new("head").child(Element::new("title").text("Hi")))
                .child(Element::new("body").child(Element::new("p").text("x"))),
        );
        assert_eq!(
            render_document(&doc),
            "<html><head><title>Hi</title></head><body><p>x</p></body></html>"
        );
    }

    #[test]
    fn test_link_renders_rel_before_href() {
        let mut attrs = Attrs::new();
        attrs.set("rel", "stylesheet");
        attrs.set("href", "/main.css");
        let mut link = Element::new("link");
        link.attrs = attrs;
        assert_eq!(render_element(&link), r#"<link rel="stylesheet" href="/main.css" />"#);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_render_all_preserves_order() {
        let docs: Vec<Document> = (0..16)
            .map(|i| Document::new(Element::new("html").text(i.to_string())))
            .collect();
        let rendered = render_all(&docs);
        for (i, html) in rendered.iter().enumerate() {
            assert_eq!(html, &format!("<html>{i}</html>"));
        }
    }
}
