//! Document type - root container with query APIs and census stats.

use rustc_hash::FxHashMap;

use super::{Element, Node};

// =============================================================================
// Document
// =============================================================================

/// Root document container. The root element is normally `<html>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Root element.
    pub root: Element,
}

impl Document {
    /// Create a document around a root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Standard empty scaffold: `html > (head, body)`.
    pub fn skeleton() -> Self {
        Self::new(
            Element::new("html")
                .child(Element::new("head"))
                .child(Element::new("body")),
        )
    }

    /// Render the whole document to HTML text.
    pub fn to_html(&self) -> String {
        crate::render::render_document(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find the first element matching the predicate (depth-first search,
    /// root included).
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        Self::find_in(&self.root, &predicate)
    }

    fn find_in<'a, F>(elem: &'a Element, predicate: &F) -> Option<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            return Some(elem);
        }
        for child in &elem.children {
            if let Some(child_elem) = child.as_element()
                && let Some(found) = Self::find_in(child_elem, predicate)
            {
                return Some(found);
            }
        }
        None
    }

    /// Find all elements matching the predicate, in visit order.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut results = Vec::new();
        Self::collect_matches(&self.root, &predicate, &mut results);
        results
    }

    fn collect_matches<'a, F>(elem: &'a Element, predicate: &F, results: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            results.push(elem);
        }
        for child in &elem.children {
            if let Some(child_elem) = child.as_element() {
                Self::collect_matches(child_elem, predicate, results);
            }
        }
    }

    /// Collect census statistics over the tree.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        Self::collect_stats(&self.root, &mut stats);
        stats
    }

    fn collect_stats(elem: &Element, stats: &mut Stats) {
        stats.element_count += 1;
        *stats.tag_counts.entry(elem.tag.clone()).or_insert(0) += 1;

        for child in &elem.children {
            match child {
                Node::Element(e) => Self::collect_stats(e, stats),
                Node::Text(_) => stats.text_count += 1,
            }
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Census statistics collected in one traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Total element nodes, root included.
    pub element_count: usize,
    /// Total text nodes.
    pub text_count: usize,
    /// Occurrences per tag name.
    pub tag_counts: FxHashMap<String, usize>,
}

impl Stats {
    /// Occurrences of a given tag.
    pub fn count_of(&self, tag: &str) -> usize {
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            Element::new("html")
                .child(Element::new("head").child(Element::new("title").text("Hi")))
                .child(
                    Element::new("body")
                        .child(Element::new("p").with_attr("class", "intro").text("one"))
                        .child(Element::new("p").text("two")),
                ),
        )
    }

    #[test]
    fn test_skeleton_shape() {
        let doc = Document::skeleton();
        assert_eq!(doc.root.tag, "html");
        assert_eq!(doc.root.child_count(), 2);
        assert!(doc.root.children[0].is_element_named("head"));
        assert!(doc.root.children[1].is_element_named("body"));
    }

    #[test]
    fn test_find() {
        let doc = sample();
        let p = doc.find(|e| e.tag == "p").unwrap();
        assert_eq!(p.get_attr("class"), Some("intro"));
        assert!(doc.find(|e| e.tag == "nav").is_none());
    }

    #[test]
    fn test_find_all() {
        let doc = sample();
        let ps = doc.find_all(|e| e.tag == "p");
        assert_eq!(ps.len(), 2);
        assert_eq!(ps[0].text_content(), "one");
        assert_eq!(ps[1].text_content(), "two");
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.element_count, 6);
        assert_eq!(stats.text_count, 3);
        assert_eq!(stats.count_of("p"), 2);
        assert_eq!(stats.count_of("title"), 1);
        assert_eq!(stats.count_of("nav"), 0);
    }
}
