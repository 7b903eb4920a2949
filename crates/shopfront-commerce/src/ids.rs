//! Product identifiers and how new ones are minted.
//!
//! Generation is a strategy object so tests can mint deterministic ids while
//! production uses random ones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix carried by every generated product id.
pub const PRODUCT_ID_PREFIX: &str = "p_";

/// A unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of candidate identifiers for newly created products.
///
/// A generator only proposes ids; the inventory store rejects any candidate
/// it has already seen, so a generator need not track history itself.
pub trait IdGenerator {
    /// Propose the next identifier.
    fn next_id(&mut self) -> ProductId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> ProductId {
        (**self).next_id()
    }
}

/// Monotonic counter ids: `p_1`, `p_2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Start counting at 1 with the default prefix.
    pub fn new() -> Self {
        Self::with_prefix(PRODUCT_ID_PREFIX)
    }

    /// Start counting at 1 with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ProductId {
        let id = ProductId(format!("{}{}", self.prefix, self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Random ids: the prefix followed by 72 random bits, URL-safe base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ProductId {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 9] = rand::thread_rng().gen();
        ProductId(format!("{}{}", PRODUCT_ID_PREFIX, URL_SAFE_NO_PAD.encode(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("r1");
        assert_eq!(id.as_str(), "r1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("r1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""r1""#);
        let back: ProductId = serde_json::from_str(r#""r1""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "p_1");
        assert_eq!(ids.next_id().as_str(), "p_2");

        let mut custom = SequentialIds::with_prefix("test-");
        assert_eq!(custom.next_id().as_str(), "test-1");
    }

    #[test]
    fn test_random_ids_shape() {
        let mut ids = RandomIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(a.as_str().starts_with(PRODUCT_ID_PREFIX));
        assert_eq!(a.as_str().len(), PRODUCT_ID_PREFIX.len() + 12);
        assert_ne!(a, b);
    }
}
