//! "Nth cousin, k times removed" computation.
//!
//! Cousins are found by climbing `parent` edges to a common ancestor
//! generation and descending `child` edges back down. Removed cousins are
//! looked for on both sides of the subject's generation:
//!
//! - the top walk descends `n + 1` generations from the ancestors
//!   `n + 1 + k` generations up;
//! - the end-level walk descends `n + 1 + k` generations from the ancestors
//!   `n + 1` generations up.
//!
//! Both walks share one exclusion set. It starts with the subject and the
//! ancestors up to `n` generations above it, and every person a walk
//! expands is added to it, so the end-level walk never re-enters a branch
//! the top walk already went through.

use crate::error::QueryError;
use crate::graph::{KithGraph, NodeId};
use indexmap::IndexSet;
use kith_core::Relation;
use std::collections::HashSet;
use tracing::debug;

/// Frontier of people at one generation, in first-reached order.
type Frontier = IndexSet<NodeId>;

impl KithGraph {
    /// Returns the names of the `degree`-th cousins of `name`, `removed`
    /// times removed.
    ///
    /// `degree` 1 gives first cousins; `degree` 0 gives siblings. Names are
    /// deduplicated and listed top walk first, each group in the order the
    /// walk reached them. The subject and their ancestors up to `degree`
    /// generations up are never included.
    ///
    /// # Errors
    ///
    /// `QueryError::PersonNotFound` if `name` is not in the graph.
    pub fn cousins(
        &self,
        name: &str,
        degree: usize,
        removed: usize,
    ) -> Result<Vec<String>, QueryError> {
        let subject = self
            .get_index(name)
            .ok_or_else(|| QueryError::PersonNotFound(name.to_string()))?;

        let depth = degree + 1;
        let ancestry = self.ancestry(subject, depth + removed);

        let mut excluded: HashSet<NodeId> =
            ancestry[..depth].iter().flatten().copied().collect();

        let mut found = self.descend(&ancestry, depth + removed, depth, &mut excluded);
        if removed != 0 {
            let end_level = self.descend(&ancestry, depth, depth + removed, &mut excluded);
            found.extend(end_level);
        }
        found.retain(|node| !excluded.contains(node));

        debug!(
            "{} has {} cousin(s) of degree {} removed {}",
            name,
            found.len(),
            degree,
            removed
        );

        Ok(found
            .into_iter()
            .map(|node| self.name_of(node).to_string())
            .collect())
    }

    /// Frontiers of ancestors, index `g` holding the people `g` generations
    /// above `subject`. Always `generations + 1` entries long; entries past
    /// the known family tree are empty.
    fn ancestry(&self, subject: NodeId, generations: usize) -> Vec<Frontier> {
        let mut levels: Vec<Frontier> = Vec::with_capacity(generations + 1);
        levels.push(Frontier::from([subject]));

        for _ in 0..generations {
            let next: Frontier = levels[levels.len() - 1]
                .iter()
                .flat_map(|&node| self.related(node, &Relation::Parent))
                .collect();
            levels.push(next);
        }

        levels
    }

    /// Descends `steps` generations from `ancestry[start]`.
    ///
    /// Excluded people are never expanded, and everyone expanded joins
    /// `excluded`. The returned frontier is unfiltered; the caller filters
    /// once every walk has run.
    fn descend(
        &self,
        ancestry: &[Frontier],
        start: usize,
        steps: usize,
        excluded: &mut HashSet<NodeId>,
    ) -> Frontier {
        let mut frontier = ancestry.get(start).cloned().unwrap_or_default();
        for _ in 0..steps {
            let mut next = Frontier::new();
            for &node in &frontier {
                if !excluded.insert(node) {
                    continue;
                }
                next.extend(self.related(node, &Relation::Child));
            }
            frontier = next;
        }

        frontier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds both directions of a parent/child link.
    fn parent_of(graph: &mut KithGraph, parent: &str, child: &str) {
        graph.add_edge(child, parent, Relation::Parent);
        graph.add_edge(parent, child, Relation::Child);
    }

    /// Four generations:
    ///
    /// ```text
    ///                 Great
    ///               /       \
    ///           Grand        GreatAunt
    ///          /     \            \
    ///       Mom       Aunt        Second
    ///      /   \        \             \
    ///    Me    Sis     Cousin      SecondKid
    ///    |               |
    ///   Kid          CousinKid
    /// ```
    fn family() -> KithGraph {
        let mut graph = KithGraph::new();
        graph.add_node("Me");
        parent_of(&mut graph, "Great", "Grand");
        parent_of(&mut graph, "Great", "GreatAunt");
        parent_of(&mut graph, "Grand", "Mom");
        parent_of(&mut graph, "Grand", "Aunt");
        parent_of(&mut graph, "GreatAunt", "Second");
        parent_of(&mut graph, "Mom", "Me");
        parent_of(&mut graph, "Mom", "Sis");
        parent_of(&mut graph, "Aunt", "Cousin");
        parent_of(&mut graph, "Second", "SecondKid");
        parent_of(&mut graph, "Me", "Kid");
        parent_of(&mut graph, "Cousin", "CousinKid");
        graph
    }

    #[test]
    fn test_first_cousins() {
        let graph = family();
        assert_eq!(graph.cousins("Me", 1, 0).unwrap(), vec!["Cousin"]);
        assert_eq!(graph.cousins("Cousin", 1, 0).unwrap(), vec!["Me", "Sis"]);
    }

    #[test]
    fn test_first_cousins_exclude_siblings_and_ancestors() {
        let graph = family();
        let cousins = graph.cousins("Sis", 1, 0).unwrap();
        assert!(!cousins.contains(&"Me".to_string()));
        assert!(!cousins.contains(&"Mom".to_string()));
        assert!(!cousins.contains(&"Grand".to_string()));
        assert_eq!(cousins, vec!["Cousin"]);
    }

    #[test]
    fn test_second_cousins() {
        let graph = family();
        assert_eq!(graph.cousins("Mom", 2, 0).unwrap(), Vec::<String>::new());
        assert_eq!(graph.cousins("Me", 2, 0).unwrap(), vec!["SecondKid"]);
    }

    #[test]
    fn test_siblings_as_zeroth_cousins() {
        let graph = family();
        assert_eq!(graph.cousins("Me", 0, 0).unwrap(), vec!["Sis"]);
    }

    #[test]
    fn test_once_removed_from_the_top_walk() {
        let graph = family();
        // The top walk reaches Mom's generation. Grand was expanded there,
        // so the end-level walk starting at Grand finds nothing.
        assert_eq!(graph.cousins("Me", 1, 1).unwrap(), vec!["Aunt", "Second"]);
    }

    #[test]
    fn test_removed_beyond_known_ancestors() {
        let graph = family();
        // Nobody is known above Great, so only the end-level walk can match.
        assert_eq!(graph.cousins("Mom", 1, 1).unwrap(), vec!["SecondKid"]);
        assert!(graph.cousins("Mom", 1, 2).unwrap().is_empty());
    }

    #[test]
    fn test_walks_share_one_exclusion_set() {
        let graph = family();
        // The top walk lands on Mom and Aunt. Mom is not an excluded
        // ancestor at degree 0, but the end-level walk expands her.
        assert_eq!(graph.cousins("Me", 0, 1).unwrap(), vec!["Aunt"]);
    }

    #[test]
    fn test_no_ancestors() {
        let mut graph = KithGraph::new();
        graph.add_node("Solo");
        assert!(graph.cousins("Solo", 1, 0).unwrap().is_empty());
        assert!(graph.cousins("Solo", 3, 2).unwrap().is_empty());
    }

    #[test]
    fn test_shared_grandparents_do_not_duplicate() {
        // Two grandparents with the same children.
        let mut graph = KithGraph::new();
        for grand in ["Gramps", "Gran"] {
            parent_of(&mut graph, grand, "Dad");
            parent_of(&mut graph, grand, "Uncle");
        }
        parent_of(&mut graph, "Dad", "Me");
        parent_of(&mut graph, "Uncle", "Cuz");

        assert_eq!(graph.cousins("Me", 1, 0).unwrap(), vec!["Cuz"]);
    }

    #[test]
    fn test_unknown_person() {
        let graph = family();
        assert_eq!(
            graph.cousins("Nobody", 1, 0),
            Err(QueryError::PersonNotFound("Nobody".to_string()))
        );
    }
}
