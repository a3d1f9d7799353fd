use serde::{Deserialize, Serialize};

/// A library user (playlist owner)
///
/// Users are never created, mutated, or deleted by change application;
/// they pass straight through from the input dataset to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user
    pub id: String,

    /// Display name
    pub name: String,
}
