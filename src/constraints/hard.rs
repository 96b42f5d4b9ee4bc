//! Feasibility constraints: double-bookings and availability.

use std::collections::HashMap;

use super::Constraint;
use crate::models::{Assignment, AvailabilityGrid, Problem};

/// Counts bookings beyond the first for each `(key, day, period)`.
fn count_double_bookings<'a>(
    assignments: &'a [Assignment],
    key: impl Fn(&'a Assignment) -> &'a str,
) -> u64 {
    let mut seen: HashMap<(&str, u8, u8), u64> = HashMap::with_capacity(assignments.len());
    for a in assignments {
        *seen.entry((key(a), a.day, a.period)).or_insert(0) += 1;
    }
    seen.values().map(|&n| n.saturating_sub(1)).sum()
}

/// Same teacher booked twice in one slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeacherConflictConstraint;

impl Constraint for TeacherConflictConstraint {
    fn name(&self) -> &str {
        "teacher_conflict"
    }

    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, assignments: &[Assignment]) -> u64 {
        count_double_bookings(assignments, |a| a.teacher_id.as_str())
    }
}

/// Same room booked twice in one slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomConflictConstraint;

impl Constraint for RoomConflictConstraint {
    fn name(&self) -> &str {
        "room_conflict"
    }

    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, assignments: &[Assignment]) -> u64 {
        count_double_bookings(assignments, |a| a.room_id.as_str())
    }
}

/// Teacher placed in a slot they are not available for.
///
/// Teachers missing from the captured map, or whose grid holds no data,
/// are available everywhere.
#[derive(Debug, Clone, Default)]
pub struct TeacherUnavailableConstraint {
    availability: HashMap<String, AvailabilityGrid>,
}

impl TeacherUnavailableConstraint {
    pub fn new(availability: HashMap<String, AvailabilityGrid>) -> Self {
        Self { availability }
    }

    pub fn from_problem(problem: &Problem) -> Self {
        // first occurrence wins, matching Problem lookups
        let mut availability = HashMap::with_capacity(problem.teachers.len());
        for t in &problem.teachers {
            availability
                .entry(t.id.clone())
                .or_insert_with(|| t.availability.clone());
        }
        Self::new(availability)
    }
}

impl Constraint for TeacherUnavailableConstraint {
    fn name(&self) -> &str {
        "teacher_unavailable"
    }

    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, assignments: &[Assignment]) -> u64 {
        assignments
            .iter()
            .filter(|a| {
                self.availability
                    .get(a.teacher_id.as_str())
                    .is_some_and(|grid| !grid.is_available(a.slot()))
            })
            .count() as u64
    }
}

/// Room placed in a slot it is not available for.
#[derive(Debug, Clone, Default)]
pub struct RoomUnavailableConstraint {
    availability: HashMap<String, AvailabilityGrid>,
}

impl RoomUnavailableConstraint {
    pub fn new(availability: HashMap<String, AvailabilityGrid>) -> Self {
        Self { availability }
    }

    pub fn from_problem(problem: &Problem) -> Self {
        // first occurrence wins, matching Problem lookups
        let mut availability = HashMap::with_capacity(problem.rooms.len());
        for r in &problem.rooms {
            availability
                .entry(r.id.clone())
                .or_insert_with(|| r.availability.clone());
        }
        Self::new(availability)
    }
}

impl Constraint for RoomUnavailableConstraint {
    fn name(&self) -> &str {
        "room_unavailable"
    }

    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, assignments: &[Assignment]) -> u64 {
        assignments
            .iter()
            .filter(|a| {
                self.availability
                    .get(a.room_id.as_str())
                    .is_some_and(|grid| !grid.is_available(a.slot()))
            })
            .count() as u64
    }
}
