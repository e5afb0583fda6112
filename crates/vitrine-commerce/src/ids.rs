//! Newtype ID for type-safe product identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product identifier, unique and stable for the session.
///
/// Wrapping the raw integer prevents accidentally mixing product ids with
/// other numeric values such as cart indices or stock counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from a raw integer.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
