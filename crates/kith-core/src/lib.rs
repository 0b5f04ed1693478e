//! Kith Core - People, relations and relationship statements
//!
//! This crate defines what the graph is made of and how it is read from
//! text. It knows nothing about traversal; `kith-graph` builds the graph
//! from the statements parsed here.
//!
//! # Example
//!
//! ```
//! use kith_core::{parse_statements, Relation};
//!
//! let result = parse_statements("name: Alice; parent: Bob");
//! let statement = result.statements().next().unwrap();
//!
//! assert_eq!(statement.relation, Relation::Parent);
//! assert_eq!(statement.relation.mirror(), Some(Relation::Child));
//! ```

mod error;
mod person;
mod relation;
mod statement;

pub use error::{ParseError, Result, StatementError};
pub use person::Person;
pub use relation::{Relation, RelationPolicy};
pub use statement::{
    parse_file, parse_statements, Entry, ParseResult, SkippedStatement, Statement,
};
