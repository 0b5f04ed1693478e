//! Plain-text rendering of query results.
//!
//! Everything here returns strings without color codes; callers decide
//! how to style headings when printing.

use kith_core::{Person, Relation};
use kith_graph::{Descendants, KithGraph, PersonRef};

/// A person followed by one indented line per relationship.
pub fn person(person: &PersonRef<'_>) -> String {
    let mut out = format!("{}\n", person.name());
    for relationship in person.edges() {
        out.push_str(&format!(
            "  {}: {}\n",
            relationship.relation,
            relationship.target.name()
        ));
    }
    out
}

/// Every person in the graph, in insertion order.
pub fn dump(graph: &KithGraph) -> String {
    graph.nodes().map(|node| person(&node)).collect()
}

pub fn friends(person: &PersonRef<'_>) -> String {
    let names: Vec<&str> = person
        .edges_with(&Relation::Friend)
        .iter()
        .map(|r| r.target.name())
        .collect();
    format!("{}'s friends: {}", person.name(), names.join(" "))
}

pub fn orphans(orphans: &[&Person]) -> String {
    let mut out = String::from("Orphans:\n");
    for orphan in orphans {
        out.push_str(&format!("\t{}\n", orphan.name()));
    }
    out
}

/// One line per edge along the path, e.g. "Dave is a parent of Bob".
///
/// Every edge from one person to the next is listed, so a couple who are
/// also friends produce two lines.
pub fn path(graph: &KithGraph, path: &[&Person]) -> Vec<String> {
    path.windows(2)
        .flat_map(|pair| {
            let (from, to) = (pair[0].name(), pair[1].name());
            graph
                .relations_between(from, to)
                .into_iter()
                .map(move |relation| format!("{} is a {} of {}", from, relation, to))
        })
        .collect()
}

pub fn descendants(descendants: &Descendants) -> String {
    let mut out = format!("Descendants of {}:\n", descendants.root);
    for generation in &descendants.generations {
        out.push_str(&format!(
            "{}: {}\n",
            generation.label(),
            generation.names.join(", ")
        ));
    }
    out
}

pub fn cousins(cousins: &[String]) -> String {
    cousins.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> KithGraph {
        let mut graph = KithGraph::new();
        graph.add_edge("Dave", "Bob", Relation::Parent);
        graph.add_edge("Bob", "Dave", Relation::Child);
        graph.add_edge("Bob", "Alice", Relation::Child);
        graph.add_edge("Alice", "Bob", Relation::Parent);
        graph.add_edge("Alice", "Carol", Relation::Friend);
        graph.add_edge("Alice", "Erin", Relation::Friend);
        graph
    }

    #[test]
    fn test_render_person() {
        let graph = family();
        let alice = graph.get_node("Alice").unwrap();
        assert_eq!(
            person(&alice),
            "Alice\n  parent: Bob\n  friend: Carol\n  friend: Erin\n"
        );
    }

    #[test]
    fn test_render_friends() {
        let graph = family();
        let alice = graph.get_node("Alice").unwrap();
        assert_eq!(friends(&alice), "Alice's friends: Carol Erin");
    }

    #[test]
    fn test_render_orphans() {
        let graph = family();
        assert_eq!(
            orphans(&graph.orphans()),
            "Orphans:\n\tBob\n\tCarol\n\tErin\n"
        );
    }

    #[test]
    fn test_render_path() {
        let graph = family();
        let found = graph.shortest_path("Dave", "Alice").unwrap();
        assert_eq!(
            path(&graph, &found),
            vec!["Dave is a parent of Bob", "Bob is a child of Alice"]
        );
    }

    #[test]
    fn test_render_descendants() {
        let graph = family();
        let result = graph.descendants("Bob").unwrap();
        assert_eq!(descendants(&result), "Descendants of Bob:\nChildren: Dave, Alice\n");
    }

    #[test]
    fn test_render_dump_lists_everyone() {
        let graph = family();
        let text = dump(&graph);
        assert!(text.starts_with("Dave\n  parent: Bob\n"));
        assert!(text.contains("Erin\n"));
    }
}
