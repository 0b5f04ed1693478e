//! Lookup handles and serializable query results.

use crate::graph::{KithGraph, NodeId};
use kith_core::{Person, Relation};
use serde::{Deserialize, Serialize};

/// A person looked up in a graph, with access to their relationships.
#[derive(Debug, Clone, Copy)]
pub struct PersonRef<'a> {
    graph: &'a KithGraph,
    index: NodeId,
}

/// One outgoing relationship of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship<'a> {
    pub relation: &'a Relation,
    pub target: &'a Person,
}

impl<'a> PersonRef<'a> {
    pub(crate) fn new(graph: &'a KithGraph, index: NodeId) -> Self {
        Self { graph, index }
    }

    /// The node's graph index.
    pub fn id(&self) -> NodeId {
        self.index
    }

    pub fn person(&self) -> &'a Person {
        &self.graph.graph[self.index]
    }

    pub fn name(&self) -> &'a str {
        self.person().name()
    }

    /// All outgoing relationships in the order they were added.
    pub fn edges(&self) -> Vec<Relationship<'a>> {
        let graph = self.graph;
        graph
            .outgoing(self.index)
            .into_iter()
            .map(|(target, relation)| Relationship {
                relation,
                target: &graph.graph[target],
            })
            .collect()
    }

    /// Outgoing relationships of one kind, e.g. all friends.
    pub fn edges_with(&self, relation: &Relation) -> Vec<Relationship<'a>> {
        self.edges()
            .into_iter()
            .filter(|r| r.relation == relation)
            .collect()
    }
}

/// Owned, serializable view of a person and their relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub relationships: Vec<RelationshipInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipInfo {
    pub relation: Relation,
    pub target: String,
}

impl From<Relationship<'_>> for RelationshipInfo {
    fn from(relationship: Relationship<'_>) -> Self {
        Self {
            relation: relationship.relation.clone(),
            target: relationship.target.name().to_string(),
        }
    }
}

impl From<PersonRef<'_>> for PersonInfo {
    fn from(person: PersonRef<'_>) -> Self {
        Self {
            name: person.name().to_string(),
            relationships: person.edges().into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_info_from_ref() {
        let mut graph = KithGraph::new();
        graph.add_edge("Alice", "Bob", Relation::Spouse);
        graph.add_edge("Alice", "Carol", Relation::Friend);
        graph.add_edge("Alice", "Dan", Relation::Friend);

        let alice = graph.get_node("Alice").unwrap();
        let friends: Vec<&str> = alice
            .edges_with(&Relation::Friend)
            .iter()
            .map(|r| r.target.name())
            .collect();
        assert_eq!(friends, vec!["Carol", "Dan"]);

        let info = PersonInfo::from(alice);
        assert_eq!(info.name, "Alice");
        assert_eq!(info.relationships.len(), 3);
        assert_eq!(
            info.relationships[0],
            RelationshipInfo {
                relation: Relation::Spouse,
                target: "Bob".to_string(),
            }
        );
    }
}
