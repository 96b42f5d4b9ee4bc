//! Greedy constructive heuristic.
//!
//! # Algorithm
//!
//! 1. Sort subjects by weekly hours, descending (most constrained first).
//! 2. Resolve each subject's teacher: pre-assignment, else first teacher.
//! 3. For every required hour, take the first slot in universe order where
//!    the teacher is available and free and some room (in problem order) is
//!    available and free at that slot.
//! 4. Hours with no such (slot, room) pair are dropped.
//!
//! No backtracking. The result is a feasible-leaning seed for annealing,
//! which can move placements but never add missing ones.
//!
//! # Complexity
//! O(h * s * r) where h = total hours, s = slots, r = rooms.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Assignment, Problem, SLOT_COUNT};

/// Builds an initial assignment list for `problem`.
///
/// Never fails: missing teachers, rooms or slots just produce fewer
/// assignments.
///
/// ```
/// use u_timetable::models::{Problem, RoomInfo, SubjectInfo, TeacherInfo};
/// use u_timetable::scheduler::greedy_assign;
///
/// let problem = Problem::new()
///     .with_subject(SubjectInfo::new("math", 2))
///     .with_teacher(TeacherInfo::new("alice"))
///     .with_room(RoomInfo::new("r1"));
/// let seed = greedy_assign(&problem);
/// assert_eq!(seed.len(), 2);
/// ```
pub fn greedy_assign(problem: &Problem) -> Vec<Assignment> {
    let mut subjects: Vec<_> = problem.subjects.iter().collect();
    subjects.sort_by(|a, b| b.hours_per_week.cmp(&a.hours_per_week));

    let mut teacher_index: HashMap<&str, usize> = HashMap::with_capacity(problem.teachers.len());
    for (i, t) in problem.teachers.iter().enumerate() {
        teacher_index.entry(t.id.as_str()).or_insert(i);
    }

    let mut teacher_busy = vec![[false; SLOT_COUNT]; problem.teachers.len()];
    let mut room_busy = vec![[false; SLOT_COUNT]; problem.rooms.len()];

    let mut assignments = Vec::with_capacity(problem.required_hours() as usize);

    for subject in subjects {
        let Some(teacher) = problem.resolve_teacher(&subject.id) else {
            debug!(subject = subject.id.as_str(), "no teacher available, skipping subject");
            continue;
        };
        let t_idx = teacher_index[teacher.id.as_str()];

        for hour in 0..subject.hours_per_week {
            let placed = problem.slots.iter().find_map(|&slot| {
                let s_idx = slot.index()?;
                if teacher_busy[t_idx][s_idx] || !teacher.is_available(slot) {
                    return None;
                }
                let r_idx = (0..problem.rooms.len()).find(|&r| {
                    !room_busy[r][s_idx] && problem.rooms[r].is_available(slot)
                })?;
                Some((slot, s_idx, r_idx))
            });

            match placed {
                Some((slot, s_idx, r_idx)) => {
                    teacher_busy[t_idx][s_idx] = true;
                    room_busy[r_idx][s_idx] = true;
                    assignments.push(Assignment::new(
                        subject.id.clone(),
                        teacher.id.clone(),
                        problem.rooms[r_idx].id.clone(),
                        slot,
                    ));
                }
                None => debug!(
                    subject = subject.id.as_str(),
                    hour,
                    "no free (slot, room) pair, hour left unplaced"
                ),
            }
        }
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Constraints;
    use crate::models::{AvailabilityGrid, RoomInfo, SubjectInfo, TeacherInfo, TimeSlot};

    #[test]
    fn test_single_hour_is_feasible() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 1))
            .with_teacher(TeacherInfo::new("T1").with_availability(AvailabilityGrid::always()))
            .with_room(RoomInfo::new("R1").with_availability(AvailabilityGrid::always()));
        let a = greedy_assign(&p);
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].slot(), TimeSlot::new(0, 1));
        assert_eq!(Constraints::for_problem(&p).hard_violations(&a), 0);
    }

    #[test]
    fn test_no_teachers_yields_nothing() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 3))
            .with_room(RoomInfo::new("R1"));
        assert!(greedy_assign(&p).is_empty());
    }

    #[test]
    fn test_no_rooms_yields_nothing() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 2))
            .with_teacher(TeacherInfo::new("T1"));
        assert!(greedy_assign(&p).is_empty());
    }

    #[test]
    fn test_empty_slot_universe() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 2))
            .with_teacher(TeacherInfo::new("T1"))
            .with_room(RoomInfo::new("R1"))
            .with_slots(Vec::new());
        assert!(greedy_assign(&p).is_empty());
    }

    #[test]
    fn test_most_hours_first() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("light", 1))
            .with_subject(SubjectInfo::new("heavy", 3))
            .with_teacher(TeacherInfo::new("T1"))
            .with_room(RoomInfo::new("R1"));
        let a = greedy_assign(&p);
        let order: Vec<&str> = a.iter().map(|a| a.subject_id.as_str()).collect();
        assert_eq!(order, vec!["heavy", "heavy", "heavy", "light"]);
        // one teacher -> consecutive slots, no double-booking
        let periods: Vec<u8> = a.iter().map(|a| a.period).collect();
        assert_eq!(periods, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_respects_availability() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 2))
            .with_teacher(TeacherInfo::new("T1").with_availability(AvailabilityGrid::only([
                TimeSlot::new(2, 5),
                TimeSlot::new(3, 1),
            ])))
            .with_room(RoomInfo::new("R1").with_availability(
                AvailabilityGrid::always().with(TimeSlot::new(2, 5), false),
            ))
            .with_room(RoomInfo::new("R2"));
        let a = greedy_assign(&p);
        assert_eq!(a.len(), 2);
        assert_eq!((a[0].slot(), a[0].room_id.as_str()), (TimeSlot::new(2, 5), "R2"));
        assert_eq!((a[1].slot(), a[1].room_id.as_str()), (TimeSlot::new(3, 1), "R1"));
    }

    #[test]
    fn test_under_provisioned_drops_hours() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 3))
            .with_teacher(TeacherInfo::new("T1"))
            .with_room(RoomInfo::new("R1"))
            .with_slots(vec![TimeSlot::new(0, 1), TimeSlot::new(0, 2)]);
        let a = greedy_assign(&p);
        assert_eq!(a.len(), 2);
        assert_eq!(Constraints::for_problem(&p).hard_violations(&a), 0);
    }

    #[test]
    fn test_pre_assignment_used() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 1))
            .with_teacher(TeacherInfo::new("T1"))
            .with_teacher(TeacherInfo::new("T2"))
            .with_room(RoomInfo::new("R1"))
            .with_teacher_assignment("S1", "T2");
        assert_eq!(greedy_assign(&p)[0].teacher_id, "T2");
    }

    #[test]
    fn test_rooms_shared_between_teachers() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("S1", 1))
            .with_subject(SubjectInfo::new("S2", 1))
            .with_teacher(TeacherInfo::new("T1"))
            .with_teacher(TeacherInfo::new("T2"))
            .with_room(RoomInfo::new("R1"))
            .with_teacher_assignment("S2", "T2");
        let a = greedy_assign(&p);
        // same first slot for both teachers, so the single room is taken -> next slot
        assert_eq!(a[0].slot(), TimeSlot::new(0, 1));
        assert_eq!(a[1].slot(), TimeSlot::new(0, 2));
        assert_eq!(Constraints::for_problem(&p).hard_violations(&a), 0);
    }
}
