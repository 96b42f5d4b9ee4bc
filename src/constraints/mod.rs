//! Timetable constraints.
//!
//! Every rule is a [`Constraint`] evaluated over a whole assignment list and
//! returning a non-negative violation or penalty count. Hard constraints
//! must reach zero for a timetable to be feasible; soft constraints only
//! measure quality.
//!
//! | Name | Kind | Counts |
//! |------|------|--------|
//! | `teacher_conflict` | hard | extra bookings of a teacher in one slot |
//! | `room_conflict` | hard | extra bookings of a room in one slot |
//! | `teacher_unavailable` | hard | placements outside teacher availability |
//! | `room_unavailable` | hard | placements outside room availability |
//! | `teacher_gap` | soft | idle periods between a teacher's classes |
//! | `even_distribution` | soft | spread of classes across weekdays |
//!
//! Constraints hold no mutable state, so one [`Constraints`] bundle can be
//! shared by reference across search threads.

mod hard;
mod soft;

pub use hard::{
    RoomConflictConstraint, RoomUnavailableConstraint, TeacherConflictConstraint,
    TeacherUnavailableConstraint,
};
pub use soft::{EvenDistributionConstraint, TeacherGapConstraint};

use crate::models::{Assignment, Problem};

/// A rule evaluated over a complete assignment list.
pub trait Constraint: Send + Sync {
    /// Diagnostic name, e.g. `"teacher_conflict"`.
    fn name(&self) -> &str;

    /// Whether violations make the timetable infeasible.
    fn is_hard(&self) -> bool;

    /// Violation count (hard) or penalty (soft).
    fn evaluate(&self, assignments: &[Assignment]) -> u64;
}

/// Builds the four hard constraints, capturing availability from `problem`.
pub fn build_hard_constraints(problem: &Problem) -> Vec<Box<dyn Constraint>> {
    vec![
        Box::new(TeacherConflictConstraint),
        Box::new(RoomConflictConstraint),
        Box::new(TeacherUnavailableConstraint::from_problem(problem)),
        Box::new(RoomUnavailableConstraint::from_problem(problem)),
    ]
}

/// Builds the two stateless soft constraints.
pub fn build_soft_constraints() -> Vec<Box<dyn Constraint>> {
    vec![
        Box::new(TeacherGapConstraint),
        Box::new(EvenDistributionConstraint),
    ]
}

/// Hard and soft constraint sets for one problem.
pub struct Constraints {
    pub hard: Vec<Box<dyn Constraint>>,
    pub soft: Vec<Box<dyn Constraint>>,
}

impl Constraints {
    /// Standard constraint sets for `problem`.
    pub fn for_problem(problem: &Problem) -> Self {
        Self {
            hard: build_hard_constraints(problem),
            soft: build_soft_constraints(),
        }
    }

    /// Sum of hard violations.
    pub fn hard_violations(&self, assignments: &[Assignment]) -> u64 {
        self.hard.iter().map(|c| c.evaluate(assignments)).sum()
    }

    /// Sum of soft penalties.
    pub fn soft_penalty(&self, assignments: &[Assignment]) -> u64 {
        self.soft.iter().map(|c| c.evaluate(assignments)).sum()
    }

    /// Iterates hard constraints first, then soft.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Constraint> {
        self.hard.iter().chain(self.soft.iter()).map(|c| c.as_ref())
    }
}

impl std::fmt::Debug for Constraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hard: Vec<&str> = self.hard.iter().map(|c| c.name()).collect();
        let soft: Vec<&str> = self.soft.iter().map(|c| c.name()).collect();
        f.debug_struct("Constraints")
            .field("hard", &hard)
            .field("soft", &soft)
            .finish()
    }
}
