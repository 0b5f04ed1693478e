//! Core graph data structure.
//!
//! The KithGraph wraps petgraph and adds a name index for lookups.
//! Nodes and edges are only ever appended, so petgraph's indexes double
//! as insertion order: iterating node indexes walks people in the order
//! they were first mentioned, and sorting a node's edges by edge index
//! recovers the order its relationships were added.

use crate::edge::{Edge, GraphEdge};
use crate::query::PersonRef;
use kith_core::{Person, Relation};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// The relationship graph.
///
/// Stores every person as a node and every relationship as a directed
/// edge owned by its source node's adjacency list.
#[derive(Debug, Clone)]
pub struct KithGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<Person, Edge>,

    /// Maps names to graph node indexes.
    name_index: HashMap<String, NodeId>,
}

impl Default for KithGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl KithGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
        }
    }

    /// Adds a person if nobody by that name exists yet.
    ///
    /// Returns the index of the (possibly pre-existing) node.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&index) = self.name_index.get(name) {
            return index;
        }

        let index = self.graph.add_node(Person::new(name));
        self.name_index.insert(name.to_string(), index);
        index
    }

    /// Adds a relationship edge, creating either person if needed.
    ///
    /// Identical edges are not merged and no reverse edge is implied.
    pub fn add_edge(&mut self, source: &str, target: &str, relation: impl Into<Relation>) {
        let from = self.add_node(source);
        let to = self.add_node(target);
        self.graph.add_edge(from, to, Edge::new(relation));
    }

    /// Looks up a person by name.
    pub fn get_node(&self, name: &str) -> Option<PersonRef<'_>> {
        let index = self.get_index(name)?;
        Some(PersonRef::new(self, index))
    }

    /// Gets the node index for a name.
    pub fn get_index(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Gets a person by graph index.
    pub fn get(&self, index: NodeId) -> Option<&Person> {
        self.graph.node_weight(index)
    }

    /// People with no `parent` edge, in insertion order.
    pub fn orphans(&self) -> Vec<&Person> {
        self.graph
            .node_indices()
            .filter(|&index| self.related(index, &Relation::Parent).is_empty())
            .map(|index| &self.graph[index])
            .collect()
    }

    /// Every relation on edges from `source` to `target`, in insertion order.
    pub fn relations_between(&self, source: &str, target: &str) -> Vec<&Relation> {
        let (Some(from), Some(to)) = (self.get_index(source), self.get_index(target)) else {
            return Vec::new();
        };

        self.outgoing(from)
            .into_iter()
            .filter(|&(neighbor, _)| neighbor == to)
            .map(|(_, relation)| relation)
            .collect()
    }

    /// Outgoing edges of a node as `(target, relation)`, in insertion order.
    pub(crate) fn outgoing(&self, index: NodeId) -> Vec<(NodeId, &Relation)> {
        let mut edges: Vec<_> = self.graph.edges(index).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| (edge.target(), &edge.weight().relation))
            .collect()
    }

    /// Targets of a node's edges with the given relation, in insertion order.
    pub(crate) fn related(&self, index: NodeId, relation: &Relation) -> Vec<NodeId> {
        self.outgoing(index)
            .into_iter()
            .filter(|&(_, r)| r == relation)
            .map(|(target, _)| target)
            .collect()
    }

    /// Returns the name stored at an index.
    pub(crate) fn name_of(&self, index: NodeId) -> &str {
        self.graph[index].name()
    }

    /// Returns the number of people.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of relationship edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all people in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.graph.node_weights()
    }

    /// Iterates over all people as lookup handles, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = PersonRef<'_>> + '_ {
        self.graph
            .node_indices()
            .map(move |index| PersonRef::new(self, index))
    }

    /// Returns all edges with source and target names for export.
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        let mut edges: Vec<_> = self.graph.edge_references().collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| GraphEdge {
                source: self.name_of(edge.source()).to_string(),
                target: self.name_of(edge.target()).to_string(),
                relation: edge.weight().relation.clone(),
            })
            .collect()
    }
}

/// Graph statistics for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub people: usize,
    pub relationships: usize,
    pub orphans: usize,
}

impl KithGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            people: self.node_count(),
            relationships: self.edge_count(),
            orphans: self.orphans().len(),
        }
    }
}
