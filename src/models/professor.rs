//! Professor model.

use serde::{Deserialize, Serialize};

/// A teaching professor.
///
/// Identity is the numeric `id`; the registry never checks it for
/// uniqueness on insertion (see [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    /// Professor identifier.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Department the professor belongs to.
    pub department: String,
}

impl Professor {
    /// Creates a new professor.
    pub fn new(id: u32, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }
}
