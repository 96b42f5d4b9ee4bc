//! Quality constraints: compact teaching days and an even weekly spread.

use std::collections::HashMap;

use super::Constraint;
use crate::models::{Assignment, DAYS_PER_WEEK};

/// Idle periods between a teacher's classes on the same day.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeacherGapConstraint;

impl Constraint for TeacherGapConstraint {
    fn name(&self) -> &str {
        "teacher_gap"
    }

    fn is_hard(&self) -> bool {
        false
    }

    fn evaluate(&self, assignments: &[Assignment]) -> u64 {
        let mut periods: HashMap<(&str, u8), Vec<u8>> = HashMap::new();
        for a in assignments {
            periods
                .entry((a.teacher_id.as_str(), a.day))
                .or_default()
                .push(a.period);
        }

        let mut gaps = 0u64;
        for day_periods in periods.values_mut() {
            if day_periods.len() < 2 {
                continue;
            }
            day_periods.sort_unstable();
            gaps += day_periods
                .windows(2)
                .map(|w| (w[1] as u64).saturating_sub(w[0] as u64 + 1))
                .sum::<u64>();
        }
        gaps
    }
}

/// Uneven spread of classes across the six weekdays.
///
/// Sum of squared deviations of the per-day counts from their mean,
/// scaled by 10 and truncated. Days outside `0..6` are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvenDistributionConstraint;

impl Constraint for EvenDistributionConstraint {
    fn name(&self) -> &str {
        "even_distribution"
    }

    fn is_hard(&self) -> bool {
        false
    }

    fn evaluate(&self, assignments: &[Assignment]) -> u64 {
        let mut counts = [0u64; DAYS_PER_WEEK as usize];
        for a in assignments {
            if let Some(c) = counts.get_mut(a.day as usize) {
                *c += 1;
            }
        }

        let total: u64 = counts.iter().sum();
        let mean = total as f64 / counts.len() as f64;
        let spread: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - mean;
                diff * diff
            })
            .sum();
        (spread * 10.0) as u64
    }
}
