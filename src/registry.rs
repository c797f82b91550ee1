//! In-memory course registry and conflict-checked lesson placement.
//!
//! The registry owns the four collections (professors, classrooms, courses,
//! and the schedule of lessons) and implements every read/write operation.
//! Mutation is permissive: the only enforced invariants are
//! professor and classroom exclusivity per weekday/time-slot cell. Nothing
//! checks classroom capacity, nor that a lesson references registered
//! entities; [`crate::validation`] offers those checks advisorily.
//!
//! # Identity
//!
//! Accepted lessons are stamped with a sequence number (`Lesson::id`).
//! The course-id-keyed operations ([`Registry::reassign_classroom`],
//! [`Registry::cancel_lesson`]) predate lesson identity and act on the
//! first lesson matching the course id; the `_by_id` variants are the
//! unambiguous forms.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{
    weekly_cells, Classroom, Course, CourseType, DayOfWeek, Lesson, Professor, ScheduleConflict,
    TimeSlot,
};

/// Owner of all timetable state.
///
/// Single-threaded: a plain owned struct with no interior mutability.
/// Callers needing shared access wrap it themselves.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Classroom, DayOfWeek, Lesson, Professor, TimeSlot};
/// use u_timetable::registry::Registry;
///
/// let mut registry = Registry::new();
/// registry.add_professor(Professor::new(1, "Dr. Smith", "Mathematics"));
/// registry.add_classroom(Classroom::new("101", 30).with_projector());
///
/// let placed = registry.add_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First));
/// assert!(placed);
/// assert!(registry
///     .find_available_classrooms(TimeSlot::First, DayOfWeek::Monday)
///     .is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    professors: Vec<Professor>,
    classrooms: Vec<Classroom>,
    courses: Vec<Course>,
    schedule: Vec<Lesson>,
    next_lesson_id: u64,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a professor. Appends unconditionally; no duplicate-id check.
    pub fn add_professor(&mut self, professor: Professor) {
        self.professors.push(professor);
    }

    /// Registers a classroom. Appends unconditionally.
    pub fn add_classroom(&mut self, classroom: Classroom) {
        self.classrooms.push(classroom);
    }

    /// Registers a course. Appends unconditionally.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Places a lesson into the schedule.
    ///
    /// Runs [`Registry::validate_lesson`]; on success stamps the lesson with
    /// the next sequence id and appends it. On conflict the schedule is left
    /// untouched, a diagnostic naming the conflict kind, day, and slot is
    /// logged, and `false` is returned.
    pub fn add_lesson(&mut self, mut lesson: Lesson) -> bool {
        if let Some(conflict) = self.validate_lesson(&lesson) {
            warn!(
                kind = %conflict.kind,
                day = %lesson.day,
                slot = %lesson.slot,
                course_id = lesson.course_id,
                "lesson placement rejected"
            );
            return false;
        }
        self.next_lesson_id += 1;
        lesson.id = self.next_lesson_id;
        debug!(
            lesson_id = lesson.id,
            course_id = lesson.course_id,
            day = %lesson.day,
            slot = %lesson.slot,
            "lesson scheduled"
        );
        self.schedule.push(lesson);
        true
    }

    /// Checks a candidate lesson against the current schedule.
    ///
    /// Scans the schedule in insertion order and returns the FIRST existing
    /// lesson that occupies the same cell and matches the candidate on
    /// professor or classroom. Classification follows that single first
    /// match: a professor match (including a match on both) is a professor
    /// conflict, a classroom-only match is a classroom conflict. Later
    /// lessons that would also collide are never examined.
    pub fn validate_lesson(&self, lesson: &Lesson) -> Option<ScheduleConflict> {
        let existing = self.schedule.iter().find(|l| {
            l.same_cell(lesson)
                && (l.professor_id == lesson.professor_id
                    || l.classroom_number == lesson.classroom_number)
        })?;

        if existing.professor_id == lesson.professor_id {
            Some(ScheduleConflict::professor(existing.clone()))
        } else {
            Some(ScheduleConflict::classroom(existing.clone()))
        }
    }

    /// Moves the first lesson of a course to another classroom.
    ///
    /// Compatibility operation keyed on `course_id`: when several lessons
    /// share the course id, only the first (in insertion order) is
    /// considered. Returns `false` when no lesson matches or the target
    /// room is occupied at the lesson's cell.
    ///
    /// The occupancy scan covers the whole schedule, including the lesson
    /// being moved: reassigning a lesson to the room it already occupies
    /// finds itself and fails. Use
    /// [`Registry::reassign_classroom_by_id`] for the self-excluding form.
    pub fn reassign_classroom(&mut self, course_id: u32, new_classroom: &str) -> bool {
        let idx = match self.schedule.iter().position(|l| l.course_id == course_id) {
            Some(idx) => idx,
            None => return false,
        };
        let (day, slot) = (self.schedule[idx].day, self.schedule[idx].slot);

        let occupied = self
            .schedule
            .iter()
            .any(|l| l.classroom_number == new_classroom && l.occupies(day, slot));
        if occupied {
            return false;
        }

        self.schedule[idx].classroom_number = new_classroom.to_string();
        true
    }

    /// Moves a specific lesson to another classroom.
    ///
    /// Unlike [`Registry::reassign_classroom`], the occupancy scan excludes
    /// the lesson being moved, so reassigning to the current room is an
    /// accepted no-op.
    pub fn reassign_classroom_by_id(&mut self, lesson_id: u64, new_classroom: &str) -> bool {
        let idx = match self.schedule.iter().position(|l| l.id == lesson_id) {
            Some(idx) => idx,
            None => return false,
        };
        let (day, slot) = (self.schedule[idx].day, self.schedule[idx].slot);

        let occupied = self.schedule.iter().any(|l| {
            l.id != lesson_id && l.classroom_number == new_classroom && l.occupies(day, slot)
        });
        if occupied {
            return false;
        }

        self.schedule[idx].classroom_number = new_classroom.to_string();
        true
    }

    /// Removes the first lesson of a course from the schedule.
    ///
    /// Compatibility operation keyed on `course_id`; silent no-op when no
    /// lesson matches, so repeated cancellation is safe. Relative order of
    /// the remaining lessons is preserved.
    pub fn cancel_lesson(&mut self, course_id: u32) {
        if let Some(idx) = self.schedule.iter().position(|l| l.course_id == course_id) {
            let removed = self.schedule.remove(idx);
            debug!(lesson_id = removed.id, course_id, "lesson cancelled");
        }
    }

    /// Removes a specific lesson from the schedule.
    ///
    /// Returns whether a lesson was removed.
    pub fn cancel_lesson_by_id(&mut self, lesson_id: u64) -> bool {
        match self.schedule.iter().position(|l| l.id == lesson_id) {
            Some(idx) => {
                self.schedule.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Classroom numbers free at the given cell, in registration order.
    pub fn find_available_classrooms(&self, slot: TimeSlot, day: DayOfWeek) -> Vec<&str> {
        let occupied = self.occupied_classrooms(slot, day);
        self.classrooms
            .iter()
            .filter(|c| !occupied.contains(&c.number.as_str()))
            .map(|c| c.number.as_str())
            .collect()
    }

    /// Classroom numbers occupied by any lesson at the given cell.
    pub fn occupied_classrooms(&self, slot: TimeSlot, day: DayOfWeek) -> Vec<&str> {
        self.schedule
            .iter()
            .filter(|l| l.occupies(day, slot))
            .map(|l| l.classroom_number.as_str())
            .collect()
    }

    /// Whether no lesson occupies the given room at the given cell.
    pub fn is_cell_free(&self, day: DayOfWeek, slot: TimeSlot, classroom_number: &str) -> bool {
        !self
            .schedule
            .iter()
            .any(|l| l.classroom_number == classroom_number && l.occupies(day, slot))
    }

    /// All lessons taught by a professor, in insertion order.
    pub fn professor_schedule(&self, professor_id: u32) -> Vec<&Lesson> {
        self.schedule
            .iter()
            .filter(|l| l.professor_id == professor_id)
            .collect()
    }

    /// All lessons held in a classroom, in insertion order.
    pub fn classroom_schedule(&self, classroom_number: &str) -> Vec<&Lesson> {
        self.schedule
            .iter()
            .filter(|l| l.classroom_number == classroom_number)
            .collect()
    }

    /// Weekly utilization of a classroom as a percentage.
    ///
    /// Numerator is the raw lesson count for the room, denominator the
    /// number of weekly cells (weekdays × slots). No clamping: lessons
    /// inserted through validated placement keep the figure within 100,
    /// but the formula itself does not.
    pub fn classroom_utilization(&self, classroom_number: &str) -> f64 {
        let used = self
            .schedule
            .iter()
            .filter(|l| l.classroom_number == classroom_number)
            .count();
        (used as f64 / weekly_cells() as f64) * 100.0
    }

    /// The course type with the most scheduled lessons.
    ///
    /// Each lesson contributes through a linear course lookup; lessons whose
    /// course id resolves to no registered course are skipped. Returns
    /// `None` when nothing resolves (empty schedule included). Ties resolve
    /// to the earliest variant in [`CourseType`] declared order.
    pub fn most_popular_course_type(&self) -> Option<CourseType> {
        let mut counts: HashMap<CourseType, usize> = HashMap::new();
        for lesson in &self.schedule {
            if let Some(course) = self.course_by_id(lesson.course_id) {
                *counts.entry(course.course_type).or_insert(0) += 1;
            }
        }

        let mut best: Option<(CourseType, usize)> = None;
        for course_type in CourseType::ALL {
            if let Some(&count) = counts.get(&course_type) {
                if best.map_or(true, |(_, max)| count > max) {
                    best = Some((course_type, count));
                }
            }
        }
        best.map(|(course_type, _)| course_type)
    }

    /// Registered professors, in registration order.
    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Registered classrooms, in registration order.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// Registered courses, in registration order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The schedule, in insertion order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.schedule
    }

    /// Number of scheduled lessons.
    pub fn lesson_count(&self) -> usize {
        self.schedule.len()
    }

    /// Finds a professor by id.
    pub fn professor_by_id(&self, professor_id: u32) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == professor_id)
    }

    /// Finds a classroom by room number.
    pub fn classroom_by_number(&self, classroom_number: &str) -> Option<&Classroom> {
        self.classrooms
            .iter()
            .find(|c| c.number == classroom_number)
    }

    /// Finds a course by id.
    pub fn course_by_id(&self, course_id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Finds a lesson by its sequence id.
    pub fn lesson_by_id(&self, lesson_id: u64) -> Option<&Lesson> {
        self.schedule.iter().find(|l| l.id == lesson_id)
    }
}
