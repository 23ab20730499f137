//! Attribute system for VDOM elements
//!
//! Attributes are plain `(name, value)` pairs kept in insertion order so the
//! rendered markup is deterministic.

/// Element attributes as simple key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;

    /// Check whether the whitespace-separated `class` list contains `class`
    fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

/// Whether an attribute takes part in element identity.
///
/// Only `id`, `key` and `data-key*` do; `class`, `href` and friends may change
/// without the element becoming a different node.
pub fn is_key_attr(name: &str) -> bool {
    name == "id" || name == "key" || name.starts_with("data-key")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        attrs.set_attr("id", "main");
        attrs.set_attr("class", "container");
        assert_eq!(attrs.len(), 2);

        assert_eq!(attrs.get_attr("id"), Some("main"));
        assert_eq!(attrs.get_attr("href"), None);
        assert!(attrs.has_attr("id"));

        // Update existing
        attrs.set_attr("class", "wrapper");
        assert_eq!(attrs.get_attr("class"), Some("wrapper"));
        assert_eq!(attrs.len(), 2);

        let removed = attrs.remove_attr("id");
        assert_eq!(removed.as_deref(), Some("main"));
        assert!(!attrs.has_attr("id"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let attrs: Attrs = vec![("class".into(), "btn  btn-primary\tlarge".into())];
        assert!(attrs.has_class("btn"));
        assert!(attrs.has_class("btn-primary"));
        assert!(attrs.has_class("large"));
        assert!(!attrs.has_class("btn-prim"));
        assert!(!Attrs::new().has_class("btn"));
    }

    #[test]
    fn test_key_attrs() {
        assert!(is_key_attr("id"));
        assert!(is_key_attr("data-key-slot"));
        assert!(!is_key_attr("class"));
        assert!(!is_key_attr("href"));
    }
}
