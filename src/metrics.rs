//! Timetable quality metrics (KPIs).
//!
//! Computes aggregate indicators from a registry snapshot.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilization per room | Lessons in room / weekly cells, as a percentage |
//! | Avg Utilization | Mean over registered classrooms |
//! | Lesson Count | Scheduled lessons |
//! | Most Popular Type | Course type with the most lessons |

use std::collections::HashMap;

use crate::models::CourseType;
use crate::registry::Registry;

/// Aggregate timetable indicators.
///
/// Utilization values are percentages of the 25 weekly cells.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Number of scheduled lessons.
    pub lesson_count: usize,
    /// Utilization per registered classroom. Rooms with no lessons are
    /// included at 0.0.
    pub utilization_by_classroom: HashMap<String, f64>,
    /// Mean utilization over registered classrooms (0.0 when none).
    pub avg_utilization: f64,
    /// Course type with the most scheduled lessons, if any resolve.
    pub most_popular_course_type: Option<CourseType>,
}

impl TimetableKpi {
    /// Computes KPIs from a registry snapshot.
    pub fn calculate(registry: &Registry) -> Self {
        let utilization_by_classroom: HashMap<String, f64> = registry
            .classrooms()
            .iter()
            .map(|c| (c.number.clone(), registry.classroom_utilization(&c.number)))
            .collect();

        let avg_utilization = if utilization_by_classroom.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_classroom.values().sum();
            sum / utilization_by_classroom.len() as f64
        };

        Self {
            lesson_count: registry.lesson_count(),
            utilization_by_classroom,
            avg_utilization,
            most_popular_course_type: registry.most_popular_course_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Course, DayOfWeek, Lesson, Professor, TimeSlot};

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_professor(Professor::new(1, "Dr. Smith", "Mathematics"));
        registry.add_professor(Professor::new(2, "Dr. Johnson", "Physics"));
        registry.add_classroom(Classroom::new("101", 30));
        registry.add_classroom(Classroom::new("102", 25));
        registry.add_classroom(Classroom::new("103", 40));
        registry.add_course(Course::new(1, "Calculus", CourseType::Lecture));
        registry.add_course(Course::new(2, "Physics Lab", CourseType::Lab));

        assert!(registry.add_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First)));
        assert!(registry.add_lesson(Lesson::new(1, 1, "101", DayOfWeek::Tuesday, TimeSlot::First)));
        assert!(registry.add_lesson(Lesson::new(2, 2, "102", DayOfWeek::Monday, TimeSlot::Second)));
        registry
    }

    #[test]
    fn test_kpi_utilization() {
        let kpi = TimetableKpi::calculate(&sample_registry());

        assert_eq!(kpi.lesson_count, 3);
        assert!((kpi.utilization_by_classroom["101"] - 8.0).abs() < 1e-10);
        assert!((kpi.utilization_by_classroom["102"] - 4.0).abs() < 1e-10);
        // Idle room is reported, not omitted.
        assert!((kpi.utilization_by_classroom["103"] - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_most_popular_type() {
        let kpi = TimetableKpi::calculate(&sample_registry());
        assert_eq!(kpi.most_popular_course_type, Some(CourseType::Lecture));
    }

    #[test]
    fn test_kpi_empty_registry() {
        let kpi = TimetableKpi::calculate(&Registry::new());
        assert_eq!(kpi.lesson_count, 0);
        assert!(kpi.utilization_by_classroom.is_empty());
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
        assert_eq!(kpi.most_popular_course_type, None);
    }
}
