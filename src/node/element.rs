//! Element type - HTML elements with attributes and children
//!
//! The core building block of the VDOM tree.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};
use crate::id::StableId;

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes, children and a stable identity
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag: CompactString,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
    /// Identity assigned by the indexer (detached until indexed)
    pub stable_id: StableId,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: SmallVec::new(),
            stable_id: StableId::detached(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute (builder form)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the `id` attribute (builder form)
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `class` attribute (builder form)
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child element (builder form)
    pub fn child(mut self, child: Element) -> Self {
        self.push_elem(child);
        self
    }

    /// Append a text node (builder form)
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.push_text(content);
        self
    }

    /// Append every element of an iterator (builder form)
    pub fn children_from(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children_extend(children);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set_attr(name, value);
    }

    /// Remove attribute by name, returning the old value if it existed
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// The raw `class` attribute
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    /// Check whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs.has_class(class)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Children
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a child element
    pub fn push_elem(&mut self, child: Element) {
        self.children.push(child.into());
    }

    /// Append a text node
    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push(Text::new(content).into());
    }

    /// Append every element of an iterator
    pub fn children_extend(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children.extend(children.into_iter().map(Node::from));
    }

    /// Remove every child
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Replace all children with a single text node (`textContent = ...`)
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.clear_children();
        self.push_text(content);
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of direct child elements (excludes Text)
    pub fn element_count(&self) -> usize {
        self.children.iter().filter(|n| n.is_element()).count()
    }

    /// First child element, if any
    pub fn first_child(&self) -> Option<&Element> {
        self.children_elements().next()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Iterate over child element mutable references
    pub fn children_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| n.as_element_mut())
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }
}
