use thiserror::Error;

/// Query outcomes that carry no result.
///
/// These are ordinary answers ("nobody by that name", "not related"), not
/// failures of the graph itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{0} not found")]
    PersonNotFound(String),
    #[error("{from} has no relation to {to}")]
    NoPath { from: String, to: String },
}
