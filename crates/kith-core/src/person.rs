//! The person stored at each graph node.

use serde::{Deserialize, Serialize};

/// A named person in the relationship graph.
///
/// The name is the person's identity: it is the key used for lookups and
/// never changes once the person exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
}

impl Person {
    /// Creates a person with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the person's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
