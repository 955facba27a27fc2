//! Node identity

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical identity of a graph node.
///
/// Node values supplied by callers are converted to their string form once,
/// and two values name the same node if and only if those strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from any displayable node value
    pub fn of(value: impl fmt::Display) -> Self {
        Self(value.to_string())
    }

    /// Borrow the canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning its string form
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&NodeId> for NodeId {
    fn from(value: &NodeId) -> Self {
        value.clone()
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_values_share_identity() {
        assert_eq!(NodeId::of(42), NodeId::from("42"));
        assert_ne!(NodeId::of(4.2), NodeId::from("42"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = NodeId::from("a");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a\"");
        let back: NodeId = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn compares_against_str() {
        let id = NodeId::from("d");
        assert!(id == "d");
        assert_eq!(id.as_str(), "d");
    }
}
