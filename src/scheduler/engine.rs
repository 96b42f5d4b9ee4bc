//! High-level timetable scheduler.
//!
//! Wraps configuration checks, the multi-restart search and result
//! evaluation behind one builder.

use tracing::{info, instrument};

use super::parallel::{effective_workers, parallel_anneal};
use crate::config::{ConfigError, SaConfig};
use crate::models::{Problem, Schedule};

/// Builder-style entry point for generating a timetable.
///
/// # Example
///
/// ```
/// use u_timetable::config::SaConfig;
/// use u_timetable::models::{Problem, RoomInfo, SubjectInfo, TeacherInfo};
/// use u_timetable::scheduler::TimetableScheduler;
///
/// let problem = Problem::new()
///     .with_subject(SubjectInfo::new("math", 3))
///     .with_teacher(TeacherInfo::new("alice"))
///     .with_room(RoomInfo::new("r1"));
///
/// let scheduler = TimetableScheduler::new()
///     .with_config(SaConfig::default().with_max_iterations(2_000))
///     .with_workers(2);
/// let schedule = scheduler.solve(&problem).unwrap();
/// assert_eq!(schedule.assignment_count(), 3);
/// assert!(schedule.is_feasible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    config: SaConfig,
    workers: usize,
}

impl TimetableScheduler {
    /// Default annealing schedule, one worker per hardware thread.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SaConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the worker count; `0` means one per hardware thread.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Worker count that [`solve`](Self::solve) will use.
    pub fn workers(&self) -> usize {
        effective_workers(self.workers)
    }

    /// Generates and evaluates a timetable.
    ///
    /// Fails only on an invalid configuration; an infeasible or
    /// under-provisioned problem still yields a schedule, with its
    /// violations and missing hours visible in the result.
    #[instrument(skip_all, fields(workers = self.workers))]
    pub fn solve(&self, problem: &Problem) -> Result<Schedule, ConfigError> {
        self.config.validate()?;
        let assignments = parallel_anneal(problem, &self.config, self.workers);
        let schedule = Schedule::evaluate(problem, assignments);
        info!(
            assignments = schedule.assignment_count(),
            required = problem.required_hours(),
            hard_violations = schedule.hard_violations,
            soft_penalty = schedule.soft_penalty,
            "timetable generated"
        );
        Ok(schedule)
    }

    /// [`solve`](Self::solve), then stamps the result as the next version
    /// of `semester_id` after `previous_version`.
    pub fn solve_for_semester(
        &self,
        problem: &Problem,
        semester_id: impl Into<String>,
        previous_version: Option<u32>,
    ) -> Result<Schedule, ConfigError> {
        let mut schedule = self.solve(problem)?;
        schedule.stamp(semester_id, Schedule::next_version(previous_version));
        Ok(schedule)
    }
}
