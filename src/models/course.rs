//! Course model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A course offered by the university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier.
    pub id: u32,
    /// Course name.
    pub name: String,
    /// Teaching format.
    pub course_type: CourseType,
}

/// Teaching format of a course.
///
/// Declared order doubles as the deterministic tie-break order for
/// popularity statistics: on equal lesson counts the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Frontal lecture.
    Lecture,
    /// Discussion seminar.
    Seminar,
    /// Laboratory session.
    Lab,
    /// Exercise/practice session.
    Practice,
}

impl CourseType {
    /// All course types in declared order.
    pub const ALL: [CourseType; 4] = [
        CourseType::Lecture,
        CourseType::Seminar,
        CourseType::Lab,
        CourseType::Practice,
    ];
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourseType::Lecture => "Lecture",
            CourseType::Seminar => "Seminar",
            CourseType::Lab => "Lab",
            CourseType::Practice => "Practice",
        };
        f.write_str(name)
    }
}

impl Course {
    /// Creates a new course.
    pub fn new(id: u32, name: impl Into<String>, course_type: CourseType) -> Self {
        Self {
            id,
            name: name.into(),
            course_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_new() {
        let c = Course::new(1, "Calculus", CourseType::Lecture);
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "Calculus");
        assert_eq!(c.course_type, CourseType::Lecture);
    }

    #[test]
    fn test_course_type_display() {
        assert_eq!(CourseType::Lab.to_string(), "Lab");
        assert_eq!(CourseType::Practice.to_string(), "Practice");
    }
}
