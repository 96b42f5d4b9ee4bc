//! Concrete conflict listing for review screens.
//!
//! Where the constraints in [`crate::constraints`] only count, these
//! functions say *which* assignments clash and where, so a reviewer can
//! fix a generated timetable by hand.

use std::collections::BTreeMap;

use crate::models::{Assignment, Problem, TimeSlot, Violation, ViolationType};

/// Groups double-bookings by teacher and then by room.
///
/// Each group of two or more assignments sharing an entity and slot yields
/// one [`Violation`]. Output is ordered by kind, entity id, then slot.
///
/// ```
/// use u_timetable::conflicts::detect_conflicts;
/// use u_timetable::models::{Assignment, TimeSlot};
///
/// let slot = TimeSlot::new(0, 3);
/// let clashes = detect_conflicts(&[
///     Assignment::new("math", "alice", "r1", slot),
///     Assignment::new("physics", "alice", "r2", slot),
/// ]);
/// assert_eq!(clashes.len(), 1);
/// assert_eq!(clashes[0].message, "Teacher alice double-booked on Mon P3");
/// ```
pub fn detect_conflicts(assignments: &[Assignment]) -> Vec<Violation> {
    let mut out = group_double_bookings(
        assignments,
        ViolationType::TeacherConflict,
        "Teacher",
        |a| &a.teacher_id,
    );
    out.extend(group_double_bookings(
        assignments,
        ViolationType::RoomConflict,
        "Room",
        |a| &a.room_id,
    ));
    out
}

/// Lists placements outside teacher or room availability.
pub fn detect_unavailability(problem: &Problem, assignments: &[Assignment]) -> Vec<Violation> {
    let mut teachers = Vec::new();
    let mut rooms = Vec::new();

    for (index, a) in assignments.iter().enumerate() {
        let slot = a.slot();
        if problem
            .teacher(&a.teacher_id)
            .is_some_and(|t| !t.is_available(slot))
        {
            teachers.push(Violation {
                violation_type: ViolationType::TeacherUnavailable,
                entity_id: a.teacher_id.clone(),
                slot,
                assignment_indices: vec![index],
                message: format!("Teacher {} unavailable on {slot}", a.teacher_id),
            });
        }
        if problem.room(&a.room_id).is_some_and(|r| !r.is_available(slot)) {
            rooms.push(Violation {
                violation_type: ViolationType::RoomUnavailable,
                entity_id: a.room_id.clone(),
                slot,
                assignment_indices: vec![index],
                message: format!("Room {} unavailable on {slot}", a.room_id),
            });
        }
    }

    teachers.extend(rooms);
    teachers
}

/// Every hard-constraint breach: double-bookings then unavailability.
pub fn detect_violations(problem: &Problem, assignments: &[Assignment]) -> Vec<Violation> {
    let mut out = detect_conflicts(assignments);
    out.extend(detect_unavailability(problem, assignments));
    out
}

fn group_double_bookings<'a>(
    assignments: &'a [Assignment],
    violation_type: ViolationType,
    label: &str,
    key: impl Fn(&'a Assignment) -> &'a String,
) -> Vec<Violation> {
    let mut groups: BTreeMap<(&str, TimeSlot), Vec<usize>> = BTreeMap::new();
    for (index, a) in assignments.iter().enumerate() {
        groups
            .entry((key(a).as_str(), a.slot()))
            .or_default()
            .push(index);
    }

    groups
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .map(|((entity, slot), indices)| Violation {
            violation_type,
            entity_id: entity.to_string(),
            slot,
            assignment_indices: indices,
            message: format!("{label} {entity} double-booked on {slot}"),
        })
        .collect()
}
