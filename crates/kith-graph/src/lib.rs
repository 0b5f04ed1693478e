//! Kith Graph - Relationship graph and family queries
//!
//! This crate stores people and their relationships as a directed,
//! labeled graph and answers structural questions about it: how two people
//! are connected, who descends from whom, and who counts as an nth cousin
//! k times removed.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a name index on top. Queries
//! live in their own modules as `impl KithGraph` blocks:
//! - `path`: shortest relationship path (layered BFS)
//! - `descendants`: generation-by-generation `child` walk
//! - `cousins`: ancestor climb followed by a guarded descent
//!
//! The graph never invents edges. `GraphBuilder` applies the relation
//! policy (mirroring spouses, inverting parent/child) while loading.
//!
//! # Example
//!
//! ```
//! use kith_graph::KithGraph;
//! use kith_core::Relation;
//!
//! let mut graph = KithGraph::new();
//! graph.add_edge("Bob", "Alice", Relation::Child);
//! graph.add_edge("Alice", "Bob", Relation::Parent);
//!
//! let path = graph.shortest_path("Bob", "Alice").unwrap();
//! assert_eq!(path.len(), 2);
//!
//! let descendants = graph.descendants("Bob").unwrap();
//! assert_eq!(descendants.generations[0].names, vec!["Alice"]);
//! ```

mod builder;
mod cousins;
mod descendants;
mod edge;
mod error;
mod graph;
mod path;
mod query;

pub use builder::{load_file, GraphBuilder, LoadResult};
pub use descendants::{generation_label, Descendants, Generation};
pub use edge::{Edge, GraphEdge};
pub use error::QueryError;
pub use graph::{GraphStats, KithGraph, NodeId};
pub use query::{PersonInfo, PersonRef, Relationship, RelationshipInfo};
