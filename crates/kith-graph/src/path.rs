//! Shortest relationship path between two people.
//!
//! The search runs breadth-first but keeps each BFS level as its own list
//! instead of recording parent pointers. The path is then rebuilt from the
//! target back to the source one level at a time, which lets a step be
//! satisfied either by a forward edge into the shallower level or by an
//! edge from that level pointing back at the current node.

use crate::error::QueryError;
use crate::graph::{KithGraph, NodeId};
use kith_core::Person;
use std::collections::HashSet;
use tracing::debug;

impl KithGraph {
    /// Finds a shortest directed path from `from` to `to`.
    ///
    /// The returned people include both endpoints. Among several shortest
    /// paths, the first matching edge in insertion order wins at every step.
    ///
    /// # Errors
    ///
    /// `QueryError::NoPath` if either person is missing, if they are the
    /// same person, or if `to` cannot be reached from `from`.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Vec<&Person>, QueryError> {
        let no_path = || QueryError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        };

        let (source, target) = match (self.get_index(from), self.get_index(to)) {
            (Some(source), Some(target)) if source != target => (source, target),
            _ => return Err(no_path()),
        };

        let levels = self.bfs_levels(source, target).ok_or_else(no_path)?;
        debug!("Reached {} from {} after {} levels", to, from, levels.len());

        let path = self
            .trace_back(&levels, source, target)
            .ok_or_else(no_path)?;

        Ok(path.into_iter().map(|index| &self.graph[index]).collect())
    }

    /// Builds BFS levels from `source` until an edge into `target` shows up.
    ///
    /// The last level returned is the one holding a node with an edge to
    /// `target`. Returns `None` once the frontier empties without reaching it.
    fn bfs_levels(&self, source: NodeId, target: NodeId) -> Option<Vec<Vec<NodeId>>> {
        let mut levels = vec![vec![source]];
        let mut seen: HashSet<NodeId> = HashSet::new();
        seen.insert(source);

        loop {
            let mut next = Vec::new();
            let mut found = false;

            'expand: for &node in &levels[levels.len() - 1] {
                for (neighbor, _) in self.outgoing(node) {
                    if neighbor == target {
                        found = true;
                        break 'expand;
                    }
                    if seen.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }

            if found {
                return Some(levels);
            }
            if next.is_empty() {
                return None;
            }
            levels.push(next);
        }
    }

    /// Walks from `target` back to `source`, one level per step.
    ///
    /// Returns the path in source-to-target order.
    fn trace_back(
        &self,
        levels: &[Vec<NodeId>],
        source: NodeId,
        target: NodeId,
    ) -> Option<Vec<NodeId>> {
        let mut path = vec![target];

        for level in levels.iter().rev() {
            let tail = *path.last()?;
            if tail == source {
                break;
            }

            let step = self
                .outgoing(tail)
                .into_iter()
                .map(|(neighbor, _)| neighbor)
                .find(|neighbor| level.contains(neighbor))
                .or_else(|| {
                    // No edge leads up into this level, so follow one down from it.
                    level.iter().copied().find(|&candidate| {
                        self.outgoing(candidate)
                            .iter()
                            .any(|&(neighbor, _)| neighbor == tail)
                    })
                })?;

            path.push(step);
        }

        if path.last() != Some(&source) {
            return None;
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kith_core::Relation;

    fn names<'a>(path: &[&'a Person]) -> Vec<&'a str> {
        path.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_same_person_has_no_path() {
        let mut graph = KithGraph::new();
        graph.add_edge("Alice", "Bob", Relation::Friend);
        graph.add_edge("Bob", "Alice", Relation::Friend);

        assert_eq!(
            graph.shortest_path("Alice", "Alice"),
            Err(QueryError::NoPath {
                from: "Alice".to_string(),
                to: "Alice".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_people_have_no_path() {
        let graph = KithGraph::new();
        assert!(graph.shortest_path("X", "Y").is_err());

        let mut graph = KithGraph::new();
        graph.add_node("Alice");
        assert!(graph.shortest_path("Alice", "Nobody").is_err());
        assert!(graph.shortest_path("Nobody", "Alice").is_err());
    }

    #[test]
    fn test_unreachable_target() {
        let mut graph = KithGraph::new();
        graph.add_edge("Alice", "Bob", Relation::Friend);
        graph.add_edge("Carol", "Alice", Relation::Friend);

        // Edges only point away from Carol.
        assert!(graph.shortest_path("Alice", "Carol").is_err());
    }

    #[test]
    fn test_direct_edge() {
        let mut graph = KithGraph::new();
        graph.add_edge("Alice", "Bob", Relation::Spouse);

        let path = graph.shortest_path("Alice", "Bob").unwrap();
        assert_eq!(names(&path), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_path_through_shared_relative() {
        let mut graph = KithGraph::new();
        graph.add_edge("Alice", "Bob", Relation::Parent);
        graph.add_edge("Alice", "Carol", Relation::Parent);
        graph.add_edge("Bob", "Alice", Relation::Child);
        graph.add_edge("Carol", "Alice", Relation::Child);
        graph.add_edge("Dave", "Bob", Relation::Parent);
        graph.add_edge("Bob", "Dave", Relation::Child);

        let path = graph.shortest_path("Dave", "Carol").unwrap();
        assert_eq!(names(&path), vec!["Dave", "Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_prefers_shorter_route() {
        // A → B → C → D and a shortcut A → X → D
        let mut graph = KithGraph::new();
        graph.add_edge("A", "B", Relation::Friend);
        graph.add_edge("B", "C", Relation::Friend);
        graph.add_edge("C", "D", Relation::Friend);
        graph.add_edge("A", "X", Relation::Friend);
        graph.add_edge("X", "D", Relation::Friend);

        let path = graph.shortest_path("A", "D").unwrap();
        assert_eq!(names(&path), vec!["A", "X", "D"]);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        //     A
        //    / \
        //   B   C
        //    \ /
        //     D
        let mut graph = KithGraph::new();
        graph.add_edge("A", "B", Relation::Friend);
        graph.add_edge("A", "C", Relation::Friend);
        graph.add_edge("B", "D", Relation::Friend);
        graph.add_edge("C", "D", Relation::Friend);

        let path = graph.shortest_path("A", "D").unwrap();
        assert_eq!(names(&path), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_cycle_no_infinite_loop() {
        // A → B → C → A, with D hanging off nowhere reachable
        let mut graph = KithGraph::new();
        graph.add_edge("A", "B", Relation::Friend);
        graph.add_edge("B", "C", Relation::Friend);
        graph.add_edge("C", "A", Relation::Friend);
        graph.add_node("D");

        assert!(graph.shortest_path("A", "D").is_err());

        let path = graph.shortest_path("B", "A").unwrap();
        assert_eq!(names(&path), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_path_uses_downward_edge_when_needed() {
        // Only Root → Mid and Mid → Leaf exist; Leaf links back to Root.
        let mut graph = KithGraph::new();
        graph.add_edge("Root", "Mid", Relation::Child);
        graph.add_edge("Mid", "Leaf", Relation::Child);
        graph.add_edge("Leaf", "Root", Relation::Other("ancestor".into()));

        let path = graph.shortest_path("Root", "Leaf").unwrap();
        assert_eq!(names(&path), vec!["Root", "Mid", "Leaf"]);
    }
}
