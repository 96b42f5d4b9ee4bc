//! Scalar cost over hard and soft constraints.
//!
//! ```text
//! cost = HARD_WEIGHT * sum(hard violations) + sum(soft penalties)
//! ```
//!
//! A single hard violation outweighs any realistic soft penalty, so the
//! search treats feasibility as lexicographically prior to quality while
//! comparing one integer.

use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, Constraints};
use crate::models::Assignment;

/// Multiplier applied to every hard violation.
pub const HARD_WEIGHT: u64 = 10_000;

/// Total cost of `assignments` under the given constraint sets.
pub fn cost(
    assignments: &[Assignment],
    hard: &[Box<dyn Constraint>],
    soft: &[Box<dyn Constraint>],
) -> u64 {
    let hard_total: u64 = hard.iter().map(|c| c.evaluate(assignments)).sum();
    let soft_total: u64 = soft.iter().map(|c| c.evaluate(assignments)).sum();
    hard_total * HARD_WEIGHT + soft_total
}

impl Constraints {
    /// Shorthand for [`cost`] over this bundle.
    #[inline]
    pub fn cost(&self, assignments: &[Assignment]) -> u64 {
        cost(assignments, &self.hard, &self.soft)
    }
}

/// Value of one constraint in a [`CostBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintScore {
    pub name: String,
    pub hard: bool,
    pub value: u64,
}

/// Per-constraint view of a cost evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of hard violations (unweighted).
    pub hard_violations: u64,
    /// Sum of soft penalties.
    pub soft_penalty: u64,
    /// `hard_violations * HARD_WEIGHT + soft_penalty`.
    pub total: u64,
    /// Every constraint's individual value, hard first.
    pub scores: Vec<ConstraintScore>,
}

impl CostBreakdown {
    /// Evaluates each constraint once.
    pub fn evaluate(assignments: &[Assignment], constraints: &Constraints) -> Self {
        let scores: Vec<ConstraintScore> = constraints
            .iter()
            .map(|c| ConstraintScore {
                name: c.name().to_string(),
                hard: c.is_hard(),
                value: c.evaluate(assignments),
            })
            .collect();

        let hard_violations = scores.iter().filter(|s| s.hard).map(|s| s.value).sum();
        let soft_penalty = scores.iter().filter(|s| !s.hard).map(|s| s.value).sum();

        Self {
            hard_violations,
            soft_penalty,
            total: hard_violations * HARD_WEIGHT + soft_penalty,
            scores,
        }
    }

    /// Zero hard violations.
    pub fn is_feasible(&self) -> bool {
        self.hard_violations == 0
    }

    /// Value of the named constraint, if evaluated.
    pub fn score(&self, name: &str) -> Option<u64> {
        self.scores.iter().find(|s| s.name == name).map(|s| s.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Problem, TimeSlot};

    struct Fixed {
        hard: bool,
        value: u64,
    }

    impl Constraint for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn is_hard(&self) -> bool {
            self.hard
        }
        fn evaluate(&self, _: &[Assignment]) -> u64 {
            self.value
        }
    }

    fn fixed(hard: bool, value: u64) -> Box<dyn Constraint> {
        Box::new(Fixed { hard, value })
    }

    #[test]
    fn test_cost_weights_hard() {
        let hard = vec![fixed(true, 2), fixed(true, 1)];
        let soft = vec![fixed(false, 7)];
        assert_eq!(cost(&[], &hard, &soft), 3 * HARD_WEIGHT + 7);
    }

    #[test]
    fn test_one_hard_violation_dominates_soft() {
        for soft_penalty in [0, 1, 500, 9_999] {
            let feasible = cost(&[], &[fixed(true, 0)], &[fixed(false, soft_penalty)]);
            let with_violation = cost(&[], &[fixed(true, 1)], &[fixed(false, soft_penalty)]);
            let lean_infeasible = cost(&[], &[fixed(true, 1)], &[fixed(false, 0)]);
            assert_eq!(with_violation - feasible, HARD_WEIGHT);
            assert!(lean_infeasible > feasible);
        }
    }

    #[test]
    fn test_adding_hard_violation_raises_cost_by_weight() {
        let problem = Problem::new();
        let constraints = Constraints::for_problem(&problem);
        let base = vec![
            Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 1)),
            Assignment::new("S2", "T1", "R1", TimeSlot::new(0, 5)),
        ];
        let mut clashing = base.clone();
        clashing[1].period = 1;
        let before = constraints.cost(&base);
        let after = constraints.cost(&clashing);
        // teacher + room conflict
        assert!(after >= before + HARD_WEIGHT);
    }

    #[test]
    fn test_breakdown_matches_cost() {
        let problem = Problem::new();
        let constraints = Constraints::for_problem(&problem);
        let a = vec![
            Assignment::new("S1", "T1", "R1", TimeSlot::new(0, 1)),
            Assignment::new("S2", "T1", "R2", TimeSlot::new(0, 1)),
            Assignment::new("S3", "T1", "R2", TimeSlot::new(0, 4)),
        ];
        let b = CostBreakdown::evaluate(&a, &constraints);
        assert_eq!(b.total, constraints.cost(&a));
        assert_eq!(b.hard_violations, 1);
        assert_eq!(b.score("teacher_conflict"), Some(1));
        assert_eq!(b.score("teacher_gap"), Some(2));
        assert!(!b.is_feasible());
        assert_eq!(b.scores.len(), 6);
    }
}
