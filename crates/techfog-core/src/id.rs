use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a technology in the host's tree. An opaque string key, stable
/// for the session; the host assigns it and this crate never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechId(pub String);

impl TechId {
    /// Create a TechId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TechId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TechId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Research state for a single technology, as reported by the host's
/// research-state store. The store owns and mutates this; it is read-only
/// to this crate.
///
/// Hosts with richer state spaces report every not-yet-unlocked state as
/// `Unavailable`; the visibility decision only ever distinguishes
/// `Available` from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechState {
    /// The technology has been unlocked/researched.
    Available,
    /// The technology has not been researched yet.
    Unavailable,
}

impl TechState {
    /// Whether this state means the technology is unlocked.
    pub fn is_available(self) -> bool {
        matches!(self, TechState::Available)
    }
}
