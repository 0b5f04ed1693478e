//! Graph builder for constructing the relationship graph from statements.
//!
//! The builder is where the relation policy is applied: the graph itself
//! stores exactly the edges it is given, while the builder adds the mirror
//! edge each relation calls for (spouses both ways, a `child` edge for every
//! `parent` edge and vice versa).

use crate::graph::KithGraph;
use kith_core::{parse_file, Entry, SkippedStatement, Statement};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Builds a KithGraph from parsed entries.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: KithGraph,
    people_declared: usize,
    statements_applied: usize,
}

impl GraphBuilder {
    /// Creates a new builder over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds parsed entries in order.
    pub fn add_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a Entry>) {
        for entry in entries {
            match entry {
                Entry::Person(name) => self.add_person(name),
                Entry::Relationship(statement) => self.add_statement(statement),
            }
        }
    }

    /// Declares a person.
    pub fn add_person(&mut self, name: &str) {
        self.graph.add_node(name);
        self.people_declared += 1;
    }

    /// Adds a relationship and its mirror edge, if the relation has one.
    pub fn add_statement(&mut self, statement: &Statement) {
        self.graph.add_edge(
            &statement.subject,
            &statement.object,
            statement.relation.clone(),
        );

        if let Some(mirror) = statement.relation.mirror() {
            self.graph
                .add_edge(&statement.object, &statement.subject, mirror);
        }

        self.statements_applied += 1;
    }

    /// Number of `name:` declarations seen so far.
    pub fn people_declared(&self) -> usize {
        self.people_declared
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> KithGraph {
        self.graph
    }
}

/// Result of loading a relationship file.
#[derive(Debug)]
pub struct LoadResult {
    pub graph: KithGraph,
    pub people_declared: usize,
    pub statements_applied: usize,
    pub skipped: Vec<SkippedStatement>,
    pub duration_ms: u64,
}

/// Reads a relationship file and builds a fresh graph from it.
///
/// # Errors
///
/// Fails only if the file cannot be read; malformed statements are skipped
/// and listed in `LoadResult::skipped`.
pub fn load_file(path: &Path) -> kith_core::Result<LoadResult> {
    let start = Instant::now();
    let parsed = parse_file(path)?;

    let mut builder = GraphBuilder::new();
    builder.add_entries(&parsed.entries);

    let people_declared = builder.people_declared();
    let statements_applied = builder.statements_applied;
    let graph = builder.build();

    info!(
        "Loaded {} people ({} relationships) from {}",
        people_declared,
        graph.edge_count(),
        path.display()
    );

    Ok(LoadResult {
        graph,
        people_declared,
        statements_applied,
        skipped: parsed.skipped,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
