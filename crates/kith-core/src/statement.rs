//! Relationship statement parsing.
//!
//! A relationship file is a flat list of `key: value` statements separated
//! by `;` or line breaks:
//!
//! ```text
//! name: Alice; parent: Bob; spouse: Dave
//! name: Bob
//! child: Alice
//! ```
//!
//! `name: X` introduces X and makes it the subject of the statements that
//! follow. Every other key is a relation from the current subject to the
//! value. Statements that cannot be understood are skipped and reported,
//! never fatal.

use crate::error::{ParseError, Result, StatementError};
use crate::relation::Relation;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Statements this short or shorter are treated as blank.
const MIN_STATEMENT_LEN: usize = 2;

/// Key that introduces a new subject.
const NAME_KEY: &str = "name";

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// One resolved relationship: `subject` has `relation` `object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: String,
    pub object: String,
    pub relation: Relation,
}

/// A parsed entry, kept in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A `name:` statement declaring a person.
    Person(String),
    /// A relationship from the current subject.
    Relationship(Statement),
}

/// A statement the parser could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStatement {
    /// The raw statement text.
    pub text: String,
    /// Why it was skipped.
    pub reason: StatementError,
}

/// Result of parsing a relationship file.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Declarations and relationships in the order they appeared.
    pub entries: Vec<Entry>,
    /// Malformed statements that were dropped.
    pub skipped: Vec<SkippedStatement>,
}

impl ParseResult {
    /// Number of `name:` declarations read.
    pub fn people_declared(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, Entry::Person(_)))
            .count()
    }

    /// Iterates over the relationship statements only.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Relationship(statement) => Some(statement),
            Entry::Person(_) => None,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Reads and parses a relationship file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read. Malformed statements
/// inside a readable file are reported in `ParseResult::skipped` instead.
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    let input = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", input.len(), path.display());
    Ok(parse_statements(&input))
}

/// Parses relationship statements from text.
pub fn parse_statements(input: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut subject: Option<String> = None;

    for raw in input.split([';', '\r', '\n']) {
        let text = raw.trim();
        if text.len() <= MIN_STATEMENT_LEN {
            continue;
        }

        match parse_one(text, subject.as_deref()) {
            Ok(Entry::Person(name)) => {
                subject = Some(name.clone());
                result.entries.push(Entry::Person(name));
            }
            Ok(entry) => result.entries.push(entry),
            Err(reason) => {
                warn!("Skipping statement '{}': {}", text, reason);
                result.skipped.push(SkippedStatement {
                    text: text.to_string(),
                    reason,
                });
            }
        }
    }

    result
}

fn parse_one(text: &str, subject: Option<&str>) -> std::result::Result<Entry, StatementError> {
    let (key, value) = text
        .split_once(':')
        .ok_or(StatementError::MissingSeparator)?;
    let key = key.trim();
    let value = value.trim();

    if value.is_empty() {
        return Err(StatementError::EmptyValue(key.to_string()));
    }

    if key == NAME_KEY {
        return Ok(Entry::Person(value.to_string()));
    }

    let subject = subject.ok_or_else(|| StatementError::NoSubject(key.to_string()))?;
    Ok(Entry::Relationship(Statement {
        subject: subject.to_string(),
        object: value.to_string(),
        relation: Relation::from(key),
    }))
}
