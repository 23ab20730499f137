//! HTML Rendering for VDOM
//!
//! Serializes documents to HTML strings. Text nodes and attribute values are
//! always escaped.

use crate::attr::Attrs;
use crate::node::{Document, Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Default attribute name for stable IDs.
pub const DEFAULT_ID_ATTR: &str = "data-folio-id";

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to emit stable ID attributes.
    pub emit_ids: bool,
    /// Whether to minify output (no newlines between block elements).
    pub minify: bool,
    /// Attribute name for stable IDs (default: "data-folio-id").
    pub id_attr_name: String,
}

impl RenderConfig {
    /// Development config (emit IDs, no minify).
    pub const DEV: Self = Self {
        emit_ids: true,
        minify: false,
        id_attr_name: String::new(), // Will use DEFAULT_ID_ATTR
    };

    /// Production config (no IDs, minify).
    pub const PROD: Self = Self {
        emit_ids: false,
        minify: true,
        id_attr_name: String::new(),
    };

    /// Create a new config.
    pub fn new(emit_ids: bool, minify: bool) -> Self {
        Self {
            emit_ids,
            minify,
            id_attr_name: DEFAULT_ID_ATTR.to_string(),
        }
    }

    /// Set custom attribute name for stable IDs.
    pub fn with_id_attr(mut self, attr_name: impl Into<String>) -> Self {
        self.id_attr_name = attr_name.into();
        self
    }

    /// Get the attribute name for stable IDs.
    pub fn id_attr(&self) -> &str {
        if self.id_attr_name.is_empty() {
            DEFAULT_ID_ATTR
        } else {
            &self.id_attr_name
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Render a document to HTML string.
///
/// An `<html>` root gets a leading `<!DOCTYPE html>`.
pub fn render_document(doc: &Document, config: &RenderConfig) -> String {
    let mut output = String::new();
    if doc.root.tag == "html" {
        output.push_str("<!DOCTYPE html>");
        if !config.minify {
            output.push('\n');
        }
    }
    render_element(&doc.root, config, &mut output);
    output
}

fn render_element(elem: &Element, config: &RenderConfig, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    render_attrs(&elem.attrs, output);

    if config.emit_ids && !elem.stable_id.is_detached() {
        output.push(' ');
        output.push_str(config.id_attr());
        output.push_str("=\"");
        output.push_str(&elem.stable_id.to_attr_value());
        output.push('"');
    }

    if is_void_element(&elem.tag) {
        output.push_str(" />");
        push_break(elem, config, output);
        return;
    }

    output.push('>');
    if !config.minify && is_block_element(&elem.tag) && elem.children.iter().any(|c| c.is_element()) {
        output.push('\n');
    }

    for child in &elem.children {
        render_node(child, config, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
    push_break(elem, config, output);
}

fn push_break(elem: &Element, config: &RenderConfig, output: &mut String) {
    if !config.minify && (is_block_element(&elem.tag) || elem.tag == "img") {
        output.push('\n');
    }
}

fn render_node(node: &Node, config: &RenderConfig, output: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, config, output),
        Node::Text(text) => output.push_str(&escape_html(&text.content)),
    }
}

fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements after which a newline is emitted in non-minified output.
fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "head"
            | "body"
            | "header"
            | "nav"
            | "main"
            | "section"
            | "footer"
            | "div"
            | "ul"
            | "ol"
            | "li"
            | "p"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "title"
            | "meta"
            | "link"
    )
}

// =============================================================================
// Tests
// =============================================================================
