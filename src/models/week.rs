//! The fixed teaching week: weekday and time-slot enumerations.
//!
//! Five weekdays and five named lesson intervals define the 25 schedulable
//! cells per professor and per classroom each week. Both enumerations are
//! closed; the cell count is derived from their cardinalities.
//!
//! # Serialized Form
//! Weekdays serialize as their English names (`"Monday"`), slots as their
//! interval labels (`"8:30-10:00"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching weekday (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// All weekdays in calendar order.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// English name of the weekday.
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fixed lesson interval within a teaching day.
///
/// Variants are ordered by start time. The interval boundaries are
/// institutional constants, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 8:30-10:00
    #[serde(rename = "8:30-10:00")]
    First,
    /// 10:15-11:45
    #[serde(rename = "10:15-11:45")]
    Second,
    /// 12:15-13:45
    #[serde(rename = "12:15-13:45")]
    Third,
    /// 14:00-15:30
    #[serde(rename = "14:00-15:30")]
    Fourth,
    /// 15:45-17:15
    #[serde(rename = "15:45-17:15")]
    Fifth,
}

impl TimeSlot {
    /// All slots in start-time order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::First,
        TimeSlot::Second,
        TimeSlot::Third,
        TimeSlot::Fourth,
        TimeSlot::Fifth,
    ];

    /// Interval label, e.g. `"8:30-10:00"`.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::First => "8:30-10:00",
            TimeSlot::Second => "10:15-11:45",
            TimeSlot::Third => "12:15-13:45",
            TimeSlot::Fourth => "14:00-15:30",
            TimeSlot::Fifth => "15:45-17:15",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of schedulable cells in one week (weekdays × slots).
pub fn weekly_cells() -> usize {
    DayOfWeek::ALL.len() * TimeSlot::ALL.len()
}
