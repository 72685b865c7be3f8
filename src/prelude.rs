//! Prelude module for common imports.
//!
//! ```ignore
//! use grove::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Document, Element, Node, NodeView, Stats};

// Attributes
pub use crate::attr::Attrs;

// Codec
pub use crate::convert::from_html;
pub use crate::render::{is_void_element, render_document, render_element, render_node};

#[cfg(feature = "parallel")]
pub use crate::render::render_all;

// Traversal, search, pruning
pub use crate::traverse::{contains, contains_in, prune, prune_all, walk, walk_all, NodeIter};

// Head mutations
pub use crate::head::{DEFAULT_CHARSET, DEFAULT_VIEWPORT};

// Resource extraction
pub use crate::extract::{collect_resources, Resource, RESOURCE_ATTRIBUTES};

// Error
pub use crate::error::{GroveError, GroveResult};
