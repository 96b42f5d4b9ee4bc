//! Neighborhood moves for local search.
//!
//! Every move touches one or two assignments and keeps subject, teacher
//! and the list length fixed, so coverage never changes during search.
//!
//! | Move | Probability | Effect |
//! |------|-------------|--------|
//! | Swap | 50% | exchange (day, period, room) of two assignments |
//! | MoveSlot | 35% | put one assignment on a random universe slot |
//! | ReassignRoom | 15% | put one assignment in a random room |

use rand::Rng;

use crate::models::{Assignment, Problem};

/// Neighborhood move kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Swap,
    MoveSlot,
    ReassignRoom,
}

impl Move {
    /// Draws a move with 50/35/15 weights.
    pub fn pick<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..100u32) {
            0..=49 => Move::Swap,
            50..=84 => Move::MoveSlot,
            _ => Move::ReassignRoom,
        }
    }

    /// Applies the move in place. Degenerate inputs (fewer than two
    /// assignments for a swap, no slots, no rooms) leave `assignments`
    /// untouched.
    pub fn apply<R: Rng>(self, assignments: &mut [Assignment], problem: &Problem, rng: &mut R) {
        match self {
            Move::Swap => swap(assignments, rng),
            Move::MoveSlot => move_slot(assignments, problem, rng),
            Move::ReassignRoom => reassign_room(assignments, problem, rng),
        }
    }
}

/// Returns a copy of `assignments` with one random move applied.
///
/// The input is never modified; an empty input comes back empty.
pub fn neighbor<R: Rng>(
    assignments: &[Assignment],
    problem: &Problem,
    rng: &mut R,
) -> Vec<Assignment> {
    let mut next = assignments.to_vec();
    if next.is_empty() {
        return next;
    }
    Move::pick(rng).apply(&mut next, problem, rng);
    next
}

fn swap<R: Rng>(a: &mut [Assignment], rng: &mut R) {
    let len = a.len();
    if len < 2 {
        return;
    }
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len);
    while j == i {
        j = rng.random_range(0..len);
    }
    let (slot_i, slot_j) = (a[i].slot(), a[j].slot());
    a[i].set_slot(slot_j);
    a[j].set_slot(slot_i);
    let room_i = std::mem::take(&mut a[i].room_id);
    a[i].room_id = std::mem::replace(&mut a[j].room_id, room_i);
}

fn move_slot<R: Rng>(a: &mut [Assignment], problem: &Problem, rng: &mut R) {
    if a.is_empty() || problem.slots.is_empty() {
        return;
    }
    let i = rng.random_range(0..a.len());
    let slot = problem.slots[rng.random_range(0..problem.slots.len())];
    a[i].set_slot(slot);
}

fn reassign_room<R: Rng>(a: &mut [Assignment], problem: &Problem, rng: &mut R) {
    if a.is_empty() || problem.rooms.is_empty() {
        return;
    }
    let i = rng.random_range(0..a.len());
    let room = &problem.rooms[rng.random_range(0..problem.rooms.len())];
    a[i].room_id.clone_from(&room.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomInfo, TimeSlot};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn problem() -> Problem {
        Problem::new()
            .with_room(RoomInfo::new("R1"))
            .with_room(RoomInfo::new("R2"))
            .with_room(RoomInfo::new("R3"))
    }

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 1)),
            Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 2)),
            Assignment::new("S2", "T2", "R2", TimeSlot::new(1, 1)),
            Assignment::new("S3", "T2", "R3", TimeSlot::new(4, 9)),
        ]
    }

    fn subjects(a: &[Assignment]) -> Vec<String> {
        let mut s: Vec<String> = a.iter().map(|a| a.subject_id.clone()).collect();
        s.sort();
        s
    }

    #[test]
    fn test_neighbor_preserves_coverage() {
        let p = problem();
        let base = sample();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut current = base.clone();
        for _ in 0..500 {
            current = neighbor(&current, &p, &mut rng);
            assert_eq!(current.len(), base.len());
            assert_eq!(subjects(&current), subjects(&base));
            // teachers never move between assignments
            for (a, b) in current.iter().zip(base.iter()) {
                assert_eq!(a.subject_id, b.subject_id);
                assert_eq!(a.teacher_id, b.teacher_id);
            }
            assert!(current.iter().all(|a| a.slot().is_valid()));
        }
    }

    #[test]
    fn test_neighbor_stays_inside_slot_universe() {
        let universe = vec![TimeSlot::new(2, 3), TimeSlot::new(4, 7), TimeSlot::new(1, 1)];
        let p = problem().with_slots(universe.clone());
        let mut current = vec![
            Assignment::new("S1", "T1", "R1", TimeSlot::new(2, 3)),
            Assignment::new("S1", "T1", "R2", TimeSlot::new(4, 7)),
            Assignment::new("S2", "T2", "R3", TimeSlot::new(1, 1)),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..500 {
            current = neighbor(&current, &p, &mut rng);
            assert!(current.iter().all(|a| universe.contains(&a.slot())));
        }
    }

    #[test]
    fn test_neighbor_does_not_touch_input() {
        let p = problem();
        let base = sample();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let _ = neighbor(&base, &p, &mut rng);
        assert_eq!(base, sample());
    }

    #[test]
    fn test_neighbor_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(neighbor(&[], &problem(), &mut rng).is_empty());
    }

    #[test]
    fn test_neighbor_changes_at_most_two() {
        let p = problem();
        let base = sample();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..200 {
            let next = neighbor(&base, &p, &mut rng);
            let changed = next.iter().zip(base.iter()).filter(|(a, b)| a != b).count();
            assert!(changed <= 2);
        }
    }

    #[test]
    fn test_swap_exchanges_placement() {
        let mut a = vec![
            Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 1)),
            Assignment::new("S2", "T2", "R2", TimeSlot::new(3, 7)),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        Move::Swap.apply(&mut a, &problem(), &mut rng);
        assert_eq!((a[0].slot(), a[0].room_id.as_str()), (TimeSlot::new(3, 7), "R2"));
        assert_eq!((a[1].slot(), a[1].room_id.as_str()), (TimeSlot::new(0, 1), "R1"));
        assert_eq!(a[0].subject_id, "S1");
    }

    #[test]
    fn test_degenerate_moves_are_noops() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut single = vec![Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 1))];
        Move::Swap.apply(&mut single, &problem(), &mut rng);
        assert_eq!(single[0].slot(), TimeSlot::new(0, 1));

        let no_slots = Problem::new().with_slots(Vec::new());
        Move::MoveSlot.apply(&mut single, &no_slots, &mut rng);
        Move::ReassignRoom.apply(&mut single, &no_slots, &mut rng);
        assert_eq!(single[0], Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 1)));
    }

    #[test]
    fn test_move_weights_roughly_hold() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            match Move::pick(&mut rng) {
                Move::Swap => counts[0] += 1,
                Move::MoveSlot => counts[1] += 1,
                Move::ReassignRoom => counts[2] += 1,
            }
        }
        assert!((4_500..5_500).contains(&counts[0]));
        assert!((3_000..4_000).contains(&counts[1]));
        assert!((1_000..2_000).contains(&counts[2]));
    }
}
