//! Generational descendant listing.

use crate::error::QueryError;
use crate::graph::{KithGraph, NodeId};
use kith_core::Relation;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One generation below the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    /// 1 for children, 2 for grandchildren, and so on.
    pub depth: usize,
    /// Names reached at this depth, in traversal order. A person reached
    /// along two lines of descent appears twice.
    pub names: Vec<String>,
}

impl Generation {
    /// Human-readable label: "Children", "Grandchildren",
    /// "Great Grandchildren", "Great Great Grandchildren", ...
    pub fn label(&self) -> String {
        generation_label(self.depth)
    }
}

/// Returns the label for a generation depth.
pub fn generation_label(depth: usize) -> String {
    if depth <= 1 {
        return "Children".to_string();
    }
    format!("{}Grandchildren", "Great ".repeat(depth - 2))
}

/// All descendants of a person, grouped by generation, root-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descendants {
    pub root: String,
    pub generations: Vec<Generation>,
}

impl Descendants {
    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}

impl KithGraph {
    /// Lists the descendants of `name` by following `child` edges.
    ///
    /// Each generation is every `child` target of the previous one. The walk
    /// stops at the first empty generation. A cycle of `child` edges would
    /// never empty, so the walk is also capped at one generation per person
    /// in the graph.
    ///
    /// # Errors
    ///
    /// `QueryError::PersonNotFound` if `name` is not in the graph.
    pub fn descendants(&self, name: &str) -> Result<Descendants, QueryError> {
        let root = self
            .get_index(name)
            .ok_or_else(|| QueryError::PersonNotFound(name.to_string()))?;

        let max_generations = self.node_count();
        let mut generations = Vec::new();
        let mut current: Vec<NodeId> = vec![root];

        loop {
            let next: Vec<NodeId> = current
                .iter()
                .flat_map(|&node| self.related(node, &Relation::Child))
                .collect();

            if next.is_empty() {
                break;
            }
            if generations.len() == max_generations {
                warn!(
                    "Descendants of {} exceed {} generations; child edges form a cycle",
                    name, max_generations
                );
                break;
            }

            generations.push(Generation {
                depth: generations.len() + 1,
                names: next.iter().map(|&node| self.name_of(node).to_string()).collect(),
            });
            current = next;
        }

        Ok(Descendants {
            root: name.to_string(),
            generations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> KithGraph {
        let mut graph = KithGraph::new();
        graph.add_edge("Alice", "Bob", Relation::Child);
        graph.add_edge("Alice", "Carol", Relation::Child);
        graph.add_edge("Bob", "Eve", Relation::Child);
        graph.add_edge("Bob", "Alice", Relation::Parent);
        graph
    }

    #[test]
    fn test_generation_labels() {
        assert_eq!(generation_label(1), "Children");
        assert_eq!(generation_label(2), "Grandchildren");
        assert_eq!(generation_label(3), "Great Grandchildren");
        assert_eq!(generation_label(4), "Great Great Grandchildren");
    }

    #[test]
    fn test_descendants_by_generation() {
        let graph = family();
        let result = graph.descendants("Alice").unwrap();

        assert_eq!(result.root, "Alice");
        assert_eq!(
            result.generations,
            vec![
                Generation {
                    depth: 1,
                    names: vec!["Bob".to_string(), "Carol".to_string()],
                },
                Generation {
                    depth: 2,
                    names: vec!["Eve".to_string()],
                },
            ]
        );
        assert_eq!(result.generations[1].label(), "Grandchildren");
    }

    #[test]
    fn test_leaf_has_no_descendants() {
        let graph = family();
        let result = graph.descendants("Eve").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_root() {
        let graph = family();
        assert_eq!(
            graph.descendants("Zed"),
            Err(QueryError::PersonNotFound("Zed".to_string()))
        );
    }

    #[test]
    fn test_shared_descendant_is_listed_per_line() {
        // Both of Gus's children are parents of Ivy.
        let mut graph = KithGraph::new();
        graph.add_edge("Gus", "Hal", Relation::Child);
        graph.add_edge("Gus", "Hana", Relation::Child);
        graph.add_edge("Hal", "Ivy", Relation::Child);
        graph.add_edge("Hana", "Ivy", Relation::Child);

        let result = graph.descendants("Gus").unwrap();
        assert_eq!(result.generations[1].names, vec!["Ivy", "Ivy"]);
    }

    #[test]
    fn test_child_cycle_terminates() {
        let mut graph = KithGraph::new();
        graph.add_edge("A", "B", Relation::Child);
        graph.add_edge("B", "A", Relation::Child);

        let result = graph.descendants("A").unwrap();
        assert_eq!(result.generations.len(), graph.node_count());
    }

    #[test]
    fn test_serializes_to_json() {
        let graph = family();
        let result = graph.descendants("Alice").unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["root"], "Alice");
        assert_eq!(json["generations"][0]["names"][1], "Carol");
    }
}
