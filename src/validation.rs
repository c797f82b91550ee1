//! Advisory integrity checks over a registry.
//!
//! Registry mutation is permissive: nothing stops a duplicate professor id,
//! a second classroom with the same number, or a lesson referencing a course
//! that was never registered. These checks detect such inconsistencies after
//! the fact without blocking or repairing anything. Detects:
//! - Duplicate professor ids, classroom numbers, course ids
//! - Lessons referencing an unknown course, professor, or classroom
//!
//! Placement conflicts (double-booked professors or rooms) are not re-checked
//! here; those are enforced at insertion by
//! [`crate::registry::Registry::add_lesson`].

use std::collections::HashSet;

use thiserror::Error;

use crate::registry::Registry;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// An integrity inconsistency in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two professors share an id.
    #[error("duplicate professor id {0}")]
    DuplicateProfessorId(u32),
    /// Two classrooms share a room number.
    #[error("duplicate classroom number '{0}'")]
    DuplicateClassroomNumber(String),
    /// Two courses share an id.
    #[error("duplicate course id {0}")]
    DuplicateCourseId(u32),
    /// A lesson references a course that isn't registered.
    #[error("lesson {lesson_id} references unknown course {course_id}")]
    UnknownCourse { lesson_id: u64, course_id: u32 },
    /// A lesson references a professor that isn't registered.
    #[error("lesson {lesson_id} references unknown professor {professor_id}")]
    UnknownProfessor { lesson_id: u64, professor_id: u32 },
    /// A lesson references a classroom that isn't registered.
    #[error("lesson {lesson_id} references unknown classroom '{classroom_number}'")]
    UnknownClassroom {
        lesson_id: u64,
        classroom_number: String,
    },
}

/// Validates the referential integrity of a registry.
///
/// Checks:
/// 1. No duplicate professor ids
/// 2. No duplicate classroom numbers
/// 3. No duplicate course ids
/// 4. Every lesson references a registered course, professor, and classroom
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_registry(registry: &Registry) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in registry.professors() {
        if !professor_ids.insert(p.id) {
            errors.push(ValidationError::DuplicateProfessorId(p.id));
        }
    }

    let mut classroom_numbers = HashSet::new();
    for c in registry.classrooms() {
        if !classroom_numbers.insert(c.number.as_str()) {
            errors.push(ValidationError::DuplicateClassroomNumber(c.number.clone()));
        }
    }

    let mut course_ids = HashSet::new();
    for c in registry.courses() {
        if !course_ids.insert(c.id) {
            errors.push(ValidationError::DuplicateCourseId(c.id));
        }
    }

    for lesson in registry.lessons() {
        if !course_ids.contains(&lesson.course_id) {
            errors.push(ValidationError::UnknownCourse {
                lesson_id: lesson.id,
                course_id: lesson.course_id,
            });
        }
        if !professor_ids.contains(&lesson.professor_id) {
            errors.push(ValidationError::UnknownProfessor {
                lesson_id: lesson.id,
                professor_id: lesson.professor_id,
            });
        }
        if !classroom_numbers.contains(lesson.classroom_number.as_str()) {
            errors.push(ValidationError::UnknownClassroom {
                lesson_id: lesson.id,
                classroom_number: lesson.classroom_number.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Course, CourseType, DayOfWeek, Lesson, Professor, TimeSlot};

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_professor(Professor::new(1, "Dr. Smith", "Mathematics"));
        registry.add_classroom(Classroom::new("101", 30));
        registry.add_course(Course::new(1, "Calculus", CourseType::Lecture));
        assert!(registry.add_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First)));
        registry
    }

    #[test]
    fn test_valid_registry() {
        assert!(validate_registry(&sample_registry()).is_ok());
    }

    #[test]
    fn test_duplicate_professor_id() {
        let mut registry = sample_registry();
        registry.add_professor(Professor::new(1, "Dr. Smith II", "Physics"));

        let errors = validate_registry(&registry).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateProfessorId(1)));
    }

    #[test]
    fn test_duplicate_classroom_number() {
        let mut registry = sample_registry();
        registry.add_classroom(Classroom::new("101", 99));

        let errors = validate_registry(&registry).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateClassroomNumber(n) if n == "101")));
    }

    #[test]
    fn test_duplicate_course_id() {
        let mut registry = sample_registry();
        registry.add_course(Course::new(1, "Calculus II", CourseType::Lecture));

        let errors = validate_registry(&registry).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateCourseId(1)));
    }

    #[test]
    fn test_dangling_lesson_references() {
        let mut registry = sample_registry();
        // Permissive insertion: an entirely unresolvable lesson is accepted.
        assert!(registry.add_lesson(Lesson::new(9, 9, "999", DayOfWeek::Friday, TimeSlot::Fifth)));

        let errors = validate_registry(&registry).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownCourse { course_id: 9, .. }
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownProfessor { professor_id: 9, .. }
        )));
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::UnknownClassroom { classroom_number, .. } if classroom_number == "999")
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::UnknownCourse {
            lesson_id: 3,
            course_id: 7,
        };
        assert_eq!(err.to_string(), "lesson 3 references unknown course 7");
    }
}
