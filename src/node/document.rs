//! Document type and related utilities
//!
//! The root container for VDOM trees, with query and traversal APIs.

use crate::id::StableId;

use super::{Element, Node};

// =============================================================================
// Document
// =============================================================================

/// Root document container
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Root element (typically `<html>`)
    pub root: Element,
}

impl Document {
    /// Create a new document with a root element
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find the element whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.find_element(|e| e.id() == Some(id))
    }

    /// Find the element whose `id` attribute equals `id` (mutable)
    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        Self::find_in_element_mut(&mut self.root, &|e: &Element| e.id() == Some(id))
    }

    /// Find an element by its stable identity
    pub fn find_by_stable_id(&self, id: StableId) -> Option<&Element> {
        if id.is_detached() {
            return None;
        }
        self.find_element(|e| e.stable_id == id)
    }

    /// Find an element by its stable identity (mutable)
    pub fn find_by_stable_id_mut(&mut self, id: StableId) -> Option<&mut Element> {
        if id.is_detached() {
            return None;
        }
        Self::find_in_element_mut(&mut self.root, &|e: &Element| e.stable_id == id)
    }

    /// Find first element matching predicate (depth-first search)
    pub fn find_element<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        Self::find_in_element(&self.root, &predicate)
    }

    fn find_in_element<'a, F>(elem: &'a Element, predicate: &F) -> Option<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            return Some(elem);
        }
        for child in &elem.children {
            if let Some(child_elem) = child.as_element()
                && let Some(found) = Self::find_in_element(child_elem, predicate)
            {
                return Some(found);
            }
        }
        None
    }

    fn find_in_element_mut<'a, F>(elem: &'a mut Element, predicate: &F) -> Option<&'a mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            return Some(elem);
        }
        for child in &mut elem.children {
            if let Some(child_elem) = child.as_element_mut()
                && let Some(found) = Self::find_in_element_mut(child_elem, predicate)
            {
                return Some(found);
            }
        }
        None
    }

    /// Find all elements matching predicate, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.iter_elements().filter(|e| predicate(e)).collect()
    }

    /// Check if any element matches predicate
    pub fn has_element<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.find_element(predicate).is_some()
    }

    /// Count total elements in document
    pub fn element_count(&self) -> usize {
        self.iter_elements().count()
    }

    /// Iterate over all elements (depth-first, document order)
    pub fn iter_elements(&self) -> ElementIterator<'_> {
        ElementIterator::new(&self.root)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Closure-based traversal API
    // ─────────────────────────────────────────────────────────────────────────

    /// Visit all elements with a closure (mutable)
    pub fn for_each_element_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        Self::visit_elements_mut_recursive(&mut self.root, &mut f);
    }

    fn visit_elements_mut_recursive<F>(elem: &mut Element, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        f(elem);
        for child in &mut elem.children {
            if let Some(child_elem) = child.as_element_mut() {
                Self::visit_elements_mut_recursive(child_elem, f);
            }
        }
    }

    /// Collect statistics about the document
    pub fn collect_stats(&self) -> Stats {
        let mut stats = Stats::default();
        Self::collect_stats_recursive(&self.root, &mut stats);
        stats
    }

    fn collect_stats_recursive(elem: &Element, stats: &mut Stats) {
        stats.element_count += 1;

        match elem.tag.as_str() {
            "a" => stats.link_count += 1,
            "img" => stats.media_count += 1,
            _ => {}
        }

        for child in &elem.children {
            match child {
                Node::Element(e) => Self::collect_stats_recursive(e, stats),
                Node::Text(_) => stats.text_count += 1,
            }
        }
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIterator<'a> {
    fn new(root: &'a Element) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

// =============================================================================
// Stats - document statistics
// =============================================================================

/// Document statistics collected from traversal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub element_count: usize,
    pub text_count: usize,
    pub link_count: usize,
    pub media_count: usize,
}

impl Stats {
    /// Check if document has any links
    pub fn has_links(&self) -> bool {
        self.link_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_stable_id() {
        let mut root = Element::new("main").child(Element::new("section").with_id("contact"));
        root.stable_id = StableId::from_raw(1);
        root.children_elements_mut().next().unwrap().stable_id = StableId::from_raw(2);
        let mut doc = Document::new(root);

        assert_eq!(
            doc.find_by_stable_id(StableId::from_raw(2)).and_then(|e| e.id()),
            Some("contact")
        );
        assert!(doc.find_by_stable_id(StableId::detached()).is_none());

        doc.find_by_stable_id_mut(StableId::from_raw(2))
            .unwrap()
            .push_text("Say hi");
        assert_eq!(doc.get_element_by_id("contact").unwrap().text_content(), "Say hi");
    }

    #[test]
    fn test_collect_stats() {
        let root = Element::new("div")
            .child(Element::new("a").attr("href", "#").text("top"))
            .child(Element::new("img").attr("src", "me.png"))
            .text("tail");
        let stats = Document::new(root).collect_stats();
        assert_eq!(
            stats,
            Stats {
                element_count: 3,
                text_count: 2,
                link_count: 1,
                media_count: 1,
            }
        );
        assert!(stats.has_links());
    }

    #[test]
    fn test_find_all_document_order() {
        let root = Element::new("ul")
            .child(Element::new("li").text("a"))
            .child(Element::new("li").text("b"))
            .child(Element::new("li").text("c"));
        let doc = Document::new(root);
        let texts: Vec<_> = doc
            .find_all(|e| e.tag == "li")
            .into_iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }
}
