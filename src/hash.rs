//! Deterministic hashing utilities for VDOM
//!
//! Provides cross-process deterministic hashing using blake3, so the same
//! page renders with the same stable ids on every run.

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a string, length-prefixed so `("ab", "c")` and `("a", "bc")` differ
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_usize(s.len()).update(s.as_bytes())
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(self, v: u64) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Update with a usize value (little-endian, widened to u64)
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update_u64(v as u64)
    }

    /// Finish and return the hash as u64
    ///
    /// Takes the first 8 bytes of blake3 output as little-endian u64.
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = StableHasher::new().update_str("section").update_u64(7).finish();
        let b = StableHasher::new().update_str("section").update_u64(7).finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_string_boundaries_matter() {
        let a = StableHasher::new().update_str("ab").update_str("c").finish();
        let b = StableHasher::new().update_str("a").update_str("bc").finish();
        assert_ne!(a, b);
    }
}
