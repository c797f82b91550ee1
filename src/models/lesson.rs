//! Lesson model.
//!
//! A lesson places a course, taught by a professor, into a classroom at one
//! weekday/time-slot cell. The registry stamps each accepted lesson with a
//! sequence number; course-id-keyed operations remain available as the
//! compatibility surface and act on the first matching lesson.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, TimeSlot};

/// A scheduled (or candidate) lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Registry-assigned sequence number. Zero until the lesson is accepted
    /// by [`crate::registry::Registry::add_lesson`].
    #[serde(default)]
    pub id: u64,
    /// Course being taught.
    pub course_id: u32,
    /// Professor teaching it.
    pub professor_id: u32,
    /// Room the lesson takes place in.
    pub classroom_number: String,
    /// Weekday of the cell.
    pub day: DayOfWeek,
    /// Time slot of the cell.
    pub slot: TimeSlot,
}

impl Lesson {
    /// Creates a candidate lesson (not yet stamped with an id).
    pub fn new(
        course_id: u32,
        professor_id: u32,
        classroom_number: impl Into<String>,
        day: DayOfWeek,
        slot: TimeSlot,
    ) -> Self {
        Self {
            id: 0,
            course_id,
            professor_id,
            classroom_number: classroom_number.into(),
            day,
            slot,
        }
    }

    /// Whether this lesson occupies the given cell.
    #[inline]
    pub fn occupies(&self, day: DayOfWeek, slot: TimeSlot) -> bool {
        self.day == day && self.slot == slot
    }

    /// Whether two lessons sit in the same weekday/time-slot cell.
    #[inline]
    pub fn same_cell(&self, other: &Lesson) -> bool {
        self.occupies(other.day, other.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_cells() {
        let a = Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First);
        let b = Lesson::new(2, 2, "102", DayOfWeek::Monday, TimeSlot::First);
        let c = Lesson::new(3, 3, "103", DayOfWeek::Tuesday, TimeSlot::First);

        assert!(a.occupies(DayOfWeek::Monday, TimeSlot::First));
        assert!(a.same_cell(&b));
        assert!(!a.same_cell(&c));
    }

    #[test]
    fn test_lesson_fixture_deserializes() {
        let json = r#"{
            "course_id": 1,
            "professor_id": 1,
            "classroom_number": "101",
            "day": "Monday",
            "slot": "8:30-10:00"
        }"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.id, 0); // defaulted: fixtures carry no id
        assert_eq!(lesson.classroom_number, "101");
        assert_eq!(lesson.day, DayOfWeek::Monday);
        assert_eq!(lesson.slot, TimeSlot::First);
    }
}
