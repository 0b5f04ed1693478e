//! Error types for loading relationship statements.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole load.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single statement was skipped. The rest of the load continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("missing ':' between relation and name")]
    MissingSeparator,
    #[error("relation '{0}' has no name")]
    EmptyValue(String),
    #[error("relation '{0}' appears before any 'name:' statement")]
    NoSubject(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
