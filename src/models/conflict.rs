//! Scheduling conflict model.
//!
//! A conflict is a transient value produced by placement validation, never
//! stored: it carries the pre-existing lesson that collides with an
//! attempted insertion, plus the classification of the collision.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Lesson;

/// Classification of a scheduling collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The professor is already teaching in that cell.
    Professor,
    /// The classroom is already occupied in that cell.
    Classroom,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConflictKind::Professor => "ProfessorConflict",
            ConflictKind::Classroom => "ClassroomConflict",
        };
        f.write_str(name)
    }
}

/// A scheduling collision detected during placement validation.
///
/// `lesson` is a clone of the first existing lesson (in schedule insertion
/// order) that blocks the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConflict {
    /// What resource is double-booked.
    pub kind: ConflictKind,
    /// The pre-existing lesson the candidate collides with.
    pub lesson: Lesson,
}

impl ScheduleConflict {
    /// Creates a professor conflict.
    pub fn professor(lesson: Lesson) -> Self {
        Self {
            kind: ConflictKind::Professor,
            lesson,
        }
    }

    /// Creates a classroom conflict.
    pub fn classroom(lesson: Lesson) -> Self {
        Self {
            kind: ConflictKind::Classroom,
            lesson,
        }
    }
}

impl fmt::Display for ScheduleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} at {}",
            self.kind, self.lesson.day, self.lesson.slot
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, TimeSlot};

    #[test]
    fn test_conflict_display() {
        let lesson = Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First);
        let conflict = ScheduleConflict::professor(lesson.clone());
        assert_eq!(
            conflict.to_string(),
            "ProfessorConflict on Monday at 8:30-10:00"
        );

        let conflict = ScheduleConflict::classroom(lesson);
        assert_eq!(conflict.kind, ConflictKind::Classroom);
    }
}
