//! Timetabling domain models.
//!
//! Provides the core data types for the course timetable: the people, rooms,
//! and courses being scheduled, the lessons that place them into the weekly
//! grid, and the conflict value produced when a placement is rejected.
//!
//! The weekly grid itself is the closed 5-weekday × 5-slot enumeration
//! ([`DayOfWeek`], [`TimeSlot`]); there is no notion of terms or semesters.

mod classroom;
mod conflict;
mod course;
mod lesson;
mod professor;
mod week;

pub use classroom::Classroom;
pub use conflict::{ConflictKind, ScheduleConflict};
pub use course::{Course, CourseType};
pub use lesson::Lesson;
pub use professor::Professor;
pub use week::{weekly_cells, DayOfWeek, TimeSlot};
