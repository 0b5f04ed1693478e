//! Edge types for the relationship graph.
//!
//! Edges are directed and carry a single relation. Mirrored relationships
//! (spouses, parent/child pairs) are two separate edges.

use kith_core::Relation;
use serde::{Deserialize, Serialize};

/// An edge in the relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The kind of relationship.
    pub relation: Relation,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(relation: impl Into<Relation>) -> Self {
        Self {
            relation: relation.into(),
        }
    }
}

/// A flattened edge for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub relation: Relation,
}
