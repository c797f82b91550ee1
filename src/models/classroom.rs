//! Classroom model.

use serde::{Deserialize, Serialize};

/// A classroom that lessons can be placed in.
///
/// Identity is the room `number` (a string, e.g. `"101"` or `"B-204"`).
/// Capacity is descriptive metadata; placement never checks it against
/// enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Room number (identity).
    pub number: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Whether the room is equipped with a projector.
    pub has_projector: bool,
}

impl Classroom {
    /// Creates a classroom without a projector.
    pub fn new(number: impl Into<String>, capacity: u32) -> Self {
        Self {
            number: number.into(),
            capacity,
            has_projector: false,
        }
    }

    /// Marks the room as projector-equipped.
    pub fn with_projector(mut self) -> Self {
        self.has_projector = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_builder() {
        let c = Classroom::new("101", 30).with_projector();
        assert_eq!(c.number, "101");
        assert_eq!(c.capacity, 30);
        assert!(c.has_projector);

        let plain = Classroom::new("102", 25);
        assert!(!plain.has_projector);
    }
}
