//! Content-based stable node identity
//!
//! Every element gets a `StableId` computed from:
//! - the parent's id (the page seed for the root)
//! - its tag
//! - its key attributes (`id`, `key`, `data-key*`)
//! - its occurrence index among siblings with the same tag and key attributes
//!
//! Children never influence their parent's id. A section container therefore
//! keeps the same id after a population routine fills it, which is what lets
//! sink handles and event listeners survive re-indexing.

use std::fmt;

use crate::attr::is_key_attr;
use crate::hash::StableHasher;

// =============================================================================
// PageSeed
// =============================================================================

/// Page-specific seed for globally unique StableIds
///
/// ```
/// use folio_vdom::id::PageSeed;
///
/// let seed = PageSeed::from_path("/index.html");
/// assert_ne!(seed, PageSeed::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageSeed(pub u64);

impl PageSeed {
    /// Create a PageSeed from a page path
    pub fn from_path(path: &str) -> Self {
        Self(StableHasher::new().update_str("__page__").update_str(path).finish())
    }

    /// Create a zero seed (for single-page or test scenarios)
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// StableId
// =============================================================================

/// Stable node identifier based on content hash
///
/// 8 bytes, `Copy`. The zero value is reserved for "detached" (not yet indexed).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct StableId(pub(crate) u64);

impl StableId {
    /// Create a StableId from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Lowercase hex form used for the `data-folio-id` attribute.
    #[inline]
    pub fn to_attr_value(self) -> String {
        format!("{:x}", self.as_raw())
    }

    /// Parse the `data-folio-id` attribute form back into an id.
    pub fn from_attr_value(value: &str) -> Option<Self> {
        u64::from_str_radix(value, 16).ok().map(Self)
    }

    /// Create a StableId for an element node
    ///
    /// Regular attributes (`class`, `href`, `src`) are not hashed, so setting
    /// a link target does not change which node an element is.
    pub fn for_element<K: AsRef<str>, V: AsRef<str>>(
        tag: &str,
        attrs: &[(K, V)],
        occurrence: usize,
        parent_seed: u64,
    ) -> Self {
        let mut hasher = StableHasher::new().update_u64(parent_seed).update_str(tag);

        for (k, v) in attrs {
            let k = k.as_ref();
            if is_key_attr(k) {
                hasher = hasher.update_str(k).update_str(v.as_ref());
            }
        }

        Self::non_detached(hasher.update_usize(occurrence).finish())
    }

    /// Create a detached/placeholder ID
    #[inline]
    pub const fn detached() -> Self {
        Self(0)
    }

    /// Check if this is a detached/placeholder ID
    #[inline]
    pub const fn is_detached(&self) -> bool {
        self.0 == 0
    }

    // A real hash of zero would read as "not indexed".
    #[inline]
    const fn non_detached(raw: u64) -> Self {
        if raw == 0 { Self(1) } else { Self(raw) }
    }
}

impl fmt::Debug for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_detached() {
            write!(f, "StableId(detached)")
        } else {
            write!(f, "StableId({:016x})", self.0)
        }
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

impl Default for StableId {
    fn default() -> Self {
        Self::detached()
    }
}
