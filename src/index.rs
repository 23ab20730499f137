//! Indexer: assigns a `StableId` to every element of a document
//!
//! Indexing runs in place and is idempotent: re-indexing after a population
//! routine filled a container leaves every pre-existing element with the id
//! it already had, and gives the new children fresh ids.
//!
//! # Occurrence-based StableId
//!
//! Siblings that share a tag and key attributes are told apart by their
//! occurrence index (how many equal siblings came before), not by absolute
//! position, so inserting an unrelated sibling does not renumber the rest.

use rustc_hash::FxHashMap;

use crate::attr::is_key_attr;
use crate::hash::StableHasher;
use crate::id::{PageSeed, StableId};
use crate::node::{Document, Element};

// =============================================================================
// Indexer
// =============================================================================

/// Assigns stable ids to all elements of a document
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    /// Page-specific seed mixed into every id
    page_seed: PageSeed,
}

/// Counts gathered while indexing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Total elements indexed
    pub element_count: usize,
    /// Total text nodes visited
    pub text_count: usize,
    /// Elements carrying an `id` attribute
    pub anchored_count: usize,
}

impl Indexer {
    /// Create a new Indexer with a zero seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page-specific seed for globally unique StableIds.
    ///
    /// # Example
    /// ```
    /// use folio_vdom::id::PageSeed;
    /// use folio_vdom::index::Indexer;
    ///
    /// let indexer = Indexer::new().with_page_seed(PageSeed::from_path("/index.html"));
    /// # let _ = indexer;
    /// ```
    pub fn with_page_seed(mut self, seed: PageSeed) -> Self {
        self.page_seed = seed;
        self
    }

    /// Index a document in place
    pub fn index(&self, doc: &mut Document) -> IndexStats {
        let mut stats = IndexStats::default();
        Self::index_element(&mut doc.root, 0, self.page_seed.as_u64(), &mut stats);
        stats
    }

    fn index_element(elem: &mut Element, occurrence: usize, parent_seed: u64, stats: &mut IndexStats) {
        stats.element_count += 1;
        if elem.id().is_some() {
            stats.anchored_count += 1;
        }

        elem.stable_id = StableId::for_element(&elem.tag, &elem.attrs, occurrence, parent_seed);
        let my_seed = elem.stable_id.as_raw();

        let mut occurrences: FxHashMap<ContentKey, usize> = FxHashMap::default();
        for child in &mut elem.children {
            match child.as_element_mut() {
                Some(child_elem) => {
                    let counter = occurrences.entry(ContentKey::of(child_elem)).or_insert(0);
                    let current = *counter;
                    *counter += 1;
                    Self::index_element(child_elem, current, my_seed, stats);
                }
                None => stats.text_count += 1,
            }
        }
    }
}

// =============================================================================
// ContentKey: For occurrence counting
// =============================================================================

/// Two sibling elements with the same key get different occurrence indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ContentKey {
    tag: compact_str::CompactString,
    key_attrs_hash: u64,
}

impl ContentKey {
    fn of(elem: &Element) -> Self {
        let mut hasher = StableHasher::new();
        for (k, v) in &elem.attrs {
            if is_key_attr(k) {
                hasher = hasher.update_str(k).update_str(v);
            }
        }
        Self {
            tag: elem.tag.clone(),
            key_attrs_hash: hasher.finish(),
        }
    }
}
