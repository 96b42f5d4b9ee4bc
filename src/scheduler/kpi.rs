//! Timetable quality metrics (KPIs).
//!
//! Computes coverage and quality indicators from a problem and a finished
//! assignment list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage rate | placed hours / required hours |
//! | Coverage gaps | subjects with fewer placements than weekly hours |
//! | Hard violations | sum over hard constraints |
//! | Soft penalty | sum over soft constraints |
//! | Teacher load | placements per teacher |
//! | Room utilization | occupied slots / slot universe, averaged over rooms |
//!
//! The engine drops hours it cannot place without reporting them; the gap
//! list is where a caller finds out.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::models::{Assignment, Problem, DAYS_PER_WEEK};

/// A subject placed fewer times than required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub subject_id: String,
    pub required: u32,
    pub placed: u32,
}

impl CoverageGap {
    /// Hours still missing.
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.placed)
    }
}

/// Timetable performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableKpi {
    /// Sum of weekly hours over all subjects.
    pub required_hours: u64,
    /// Placements that belong to a known subject.
    pub placed_hours: u64,
    /// `placed_hours / required_hours`; 1.0 when nothing is required.
    pub coverage_rate: f64,
    /// Under-placed subjects, in problem order.
    pub coverage_gaps: Vec<CoverageGap>,
    pub hard_violations: u64,
    pub soft_penalty: u64,
    /// Placement count per day index.
    pub assignments_per_day: [u32; DAYS_PER_WEEK as usize],
    /// Placement count per teacher id.
    pub teacher_load: BTreeMap<String, u32>,
    /// Mean fraction of the slot universe each room is occupied (0.0..1.0).
    pub avg_room_utilization: f64,
}

impl TimetableKpi {
    /// Computes KPIs for `assignments` against `problem`.
    pub fn calculate(problem: &Problem, assignments: &[Assignment]) -> Self {
        let constraints = Constraints::for_problem(problem);

        let mut per_subject: HashMap<&str, u32> = HashMap::new();
        let mut assignments_per_day = [0u32; DAYS_PER_WEEK as usize];
        let mut teacher_load: BTreeMap<String, u32> = BTreeMap::new();
        let mut room_load: HashMap<&str, u32> = HashMap::new();

        for a in assignments {
            *per_subject.entry(a.subject_id.as_str()).or_insert(0) += 1;
            if let Some(count) = assignments_per_day.get_mut(a.day as usize) {
                *count += 1;
            }
            *teacher_load.entry(a.teacher_id.clone()).or_insert(0) += 1;
            *room_load.entry(a.room_id.as_str()).or_insert(0) += 1;
        }

        let required_hours = problem.required_hours();
        let mut placed_hours = 0u64;
        let mut coverage_gaps = Vec::new();
        for subject in &problem.subjects {
            let placed = per_subject.get(subject.id.as_str()).copied().unwrap_or(0);
            placed_hours += u64::from(placed.min(subject.hours_per_week));
            if placed < subject.hours_per_week {
                coverage_gaps.push(CoverageGap {
                    subject_id: subject.id.clone(),
                    required: subject.hours_per_week,
                    placed,
                });
            }
        }

        let coverage_rate = if required_hours == 0 {
            1.0
        } else {
            placed_hours as f64 / required_hours as f64
        };

        let universe = problem.slots.len();
        let avg_room_utilization = if problem.rooms.is_empty() || universe == 0 {
            0.0
        } else {
            let sum: f64 = problem
                .rooms
                .iter()
                .map(|r| {
                    let used = room_load.get(r.id.as_str()).copied().unwrap_or(0) as f64;
                    (used / universe as f64).min(1.0)
                })
                .sum();
            sum / problem.rooms.len() as f64
        };

        Self {
            required_hours,
            placed_hours,
            coverage_rate,
            coverage_gaps,
            hard_violations: constraints.hard_violations(assignments),
            soft_penalty: constraints.soft_penalty(assignments),
            assignments_per_day,
            teacher_load,
            avg_room_utilization,
        }
    }

    /// Every required hour placed with no hard violation.
    pub fn is_fully_scheduled(&self) -> bool {
        self.coverage_gaps.is_empty() && self.hard_violations == 0
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_soft_penalty: u64, min_coverage: f64) -> bool {
        self.hard_violations == 0
            && self.soft_penalty <= max_soft_penalty
            && self.coverage_rate >= min_coverage
    }
}
