//! Relation kinds between people.
//!
//! Every edge in the graph carries a relation. The kinds the loader knows
//! about get their own variant together with a policy that says which
//! mirror edge, if any, is synthesized when a statement is loaded. Any
//! other label is kept verbatim in `Relation::Other`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// The type of relationship an edge describes.
///
/// Edges are read as "source has `relation` target", so
/// `Alice --parent--> Bob` means Bob is one of Alice's parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relation {
    /// Target is a parent of the source.
    Parent,

    /// Target is a child of the source.
    Child,

    /// Source and target are married.
    Spouse,

    /// Source and target are friends.
    Friend,

    /// Any label the loader has no policy for.
    Other(String),
}

/// How a loaded statement is mirrored onto the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationPolicy {
    /// Only the stated edge is added.
    Directed,

    /// The same relation is added in the opposite direction.
    Symmetric,

    /// The given relation is added in the opposite direction.
    Inverse(Relation),
}

impl Relation {
    /// Returns the label as it appears in statements and output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse => "spouse",
            Self::Friend => "friend",
            Self::Other(label) => label,
        }
    }

    /// Returns the mirroring policy for this relation.
    pub fn policy(&self) -> RelationPolicy {
        match self {
            Self::Spouse | Self::Friend => RelationPolicy::Symmetric,
            Self::Parent => RelationPolicy::Inverse(Self::Child),
            Self::Child => RelationPolicy::Inverse(Self::Parent),
            Self::Other(_) => RelationPolicy::Directed,
        }
    }

    /// Returns the relation of the edge synthesized in the reverse
    /// direction, or `None` for directed relations.
    pub fn mirror(&self) -> Option<Relation> {
        match self.policy() {
            RelationPolicy::Directed => None,
            RelationPolicy::Symmetric => Some(self.clone()),
            RelationPolicy::Inverse(inverse) => Some(inverse),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Relation {
    fn from(label: &str) -> Self {
        match label {
            "parent" => Self::Parent,
            "child" => Self::Child,
            "spouse" => Self::Spouse,
            "friend" => Self::Friend,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Relation {
    fn from(label: String) -> Self {
        match Relation::from(label.as_str()) {
            Self::Other(_) => Self::Other(label),
            known => known,
        }
    }
}

impl From<Relation> for String {
    fn from(relation: Relation) -> Self {
        match relation {
            Relation::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Relation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Relation::from(s))
    }
}
