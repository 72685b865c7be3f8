//! Head-section mutations: title, meta, link, and script insertion.
//!
//! Every operation edits the tree in place and never fails - a missing
//! `head` (or `title`, or charset meta) is constructed on the way rather
//! than reported. Charset and viewport insertion are idempotent; link and
//! script insertion deliberately are not, so repeated calls append repeated
//! nodes.

use crate::attr::Attrs;
use crate::node::{Document, Element, Node, NodeView};

/// Charset inserted when the caller does not pick one.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Viewport content inserted when the caller does not pick one.
pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1";

impl Element {
    /// Get the child element named `head`, creating it when absent.
    ///
    /// A created `head` goes immediately before the first child named
    /// `body`, or at index 0 when there is none.
    pub fn ensure_head(&mut self) -> &mut Element {
        let at = match self.children.iter().position(|c| c.is_element_named("head")) {
            Some(at) => at,
            None => {
                let at = self
                    .children
                    .iter()
                    .position(|c| c.is_element_named("body"))
                    .unwrap_or(0);
                self.children.insert(at, Element::new("head").into());
                at
            }
        };
        match &mut self.children[at] {
            Node::Element(e) => e,
            Node::Text(_) => unreachable!("head position always holds an element"),
        }
    }

    /// Set the document title.
    ///
    /// When any `title` element exists, every one of them has its children
    /// replaced wholesale with the single text child (nested markup
    /// included). Otherwise a fresh `title` is prepended into `head`.
    pub fn set_title(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.contains(|v| v.is_tag("title")) {
            self.for_each_element_mut(|e| {
                if e.tag == "title" {
                    e.children.clear();
                    e.children.push(Node::Text(text.clone()));
                }
            });
        } else {
            let title = Element::new("title").text(text);
            self.ensure_head().children.insert(0, title.into());
        }
    }

    /// Declare the document charset, unless one is already signalled.
    ///
    /// Any existing `meta` carrying a `charset` attribute, an `http-equiv`
    /// content-type whose `content` mentions a charset, or `name="charset"`
    /// counts as a signal and makes this a no-op. Otherwise a
    /// `meta[charset]` is prepended into `head`.
    pub fn set_charset(&mut self, charset: impl Into<String>) {
        if self.contains(signals_charset) {
            return;
        }
        let meta = Element::new("meta").with_attr("charset", charset);
        self.ensure_head().children.insert(0, meta.into());
    }

    /// Declare the viewport, unless a `meta[name="viewport"]` already
    /// exists. Otherwise the viewport meta is appended to `head`.
    pub fn set_viewport(&mut self, content: impl Into<String>) {
        if self.contains(|v| v.is_tag("meta") && v.attr("name") == Some("viewport")) {
            return;
        }
        let meta = Element::new("meta")
            .with_attr("name", "viewport")
            .with_attr("content", content);
        self.ensure_head().children.push(meta.into());
    }

    /// Append a `link` element to `head`.
    ///
    /// Attributes land as `rel`, `href`, then the extras in their own
    /// order; an extra that repeats `rel` or `href` overwrites it in place.
    /// No duplicate check is made - repeated calls append repeated links.
    pub fn insert_link(&mut self, href: impl Into<String>, rel: impl Into<String>, extra: Attrs) {
        let mut attrs = Attrs::new();
        attrs.set("rel", rel);
        attrs.set("href", href);
        for (name, value) in extra {
            attrs.set(name, value);
        }

        let mut link = Element::new("link");
        link.attrs = attrs;
        self.ensure_head().children.push(link.into());
    }

    /// Append a stylesheet `link` to `head`.
    pub fn insert_stylesheet(&mut self, href: impl Into<String>) {
        self.insert_link(href, "stylesheet", Attrs::new());
    }

    /// Append an inline `script` to `head`. No duplicate check, same as
    /// link insertion.
    pub fn insert_inline_script(&mut self, code: impl Into<String>) {
        let script = Element::new("script").text(code);
        self.ensure_head().children.push(script.into());
    }
}

fn signals_charset(view: NodeView<'_>) -> bool {
    if !view.is_tag("meta") {
        return false;
    }
    if view.attr("charset").is_some() {
        return true;
    }
    if view
        .attr("http-equiv")
        .is_some_and(|v| v.eq_ignore_ascii_case("content-type"))
        && view
            .attr("content")
            .is_some_and(|v| v.to_ascii_lowercase().contains("charset"))
    {
        return true;
    }
    view.attr("name").is_some_and(|v| v.eq_ignore_ascii_case("charset"))
}

// =============================================================================
// Document conveniences
// =============================================================================

impl Document {
    /// See [`Element::ensure_head`].
    pub fn ensure_head(&mut self) -> &mut Element {
        self.root.ensure_head()
    }

    /// See [`Element::set_title`].
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.root.set_title(text);
    }

    /// See [`Element::set_charset`].
    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.root.set_charset(charset);
    }

    /// See [`Element::set_viewport`].
    pub fn set_viewport(&mut self, content: impl Into<String>) {
        self.root.set_viewport(content);
    }

    /// See [`Element::insert_link`].
    pub fn insert_link(&mut self, href: impl Into<String>, rel: impl Into<String>, extra: Attrs) {
        self.root.insert_link(href, rel, extra);
    }

    /// See [`Element::insert_stylesheet`].
    pub fn insert_stylesheet(&mut self, href: impl Into<String>) {
        self.root.insert_stylesheet(href);
    }

    /// See [`Element::insert_inline_script`].
    pub fn insert_inline_script(&mut self, code: impl Into<String>) {
        self.root.insert_inline_script(code);
    }
}

// =============================================================================
// Tests
// =============================================================================
