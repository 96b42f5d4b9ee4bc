//! Parallel multi-restart search.
//!
//! Each worker runs the full greedy -> annealing pipeline on its own
//! thread with a private RNG seeded from its index. The problem and the
//! constraint sets are shared read-only; every worker publishes exactly
//! one result over a channel and the cheapest one wins. Ties go to the
//! lowest worker index, so the outcome does not depend on which thread
//! finishes first.

use std::sync::mpsc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use super::annealing::anneal_with;
use super::greedy::greedy_assign;
use crate::config::SaConfig;
use crate::constraints::Constraints;
use crate::models::{Assignment, Problem};

const SEED_STRIDE: u64 = 1_000_003;
const SEED_OFFSET: u64 = 42;

/// Seed for worker `index`.
#[inline]
pub fn worker_seed(index: usize) -> u64 {
    (index as u64)
        .wrapping_mul(SEED_STRIDE)
        .wrapping_add(SEED_OFFSET)
}

/// Number of workers actually used for a requested count; `0` means one
/// per available hardware thread.
pub fn effective_workers(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Result of a multi-restart run.
#[derive(Debug, Clone)]
pub struct MultiStartOutcome {
    /// Cheapest assignment list across workers.
    pub assignments: Vec<Assignment>,
    /// Its cost.
    pub cost: u64,
    /// Index of the worker that produced it.
    pub best_worker: usize,
    /// Final cost of every worker, by index.
    pub worker_costs: Vec<u64>,
}

struct WorkerResult {
    index: usize,
    assignments: Vec<Assignment>,
    cost: u64,
}

/// Runs `workers` independent greedy + annealing pipelines and returns
/// the cheapest result.
///
/// ```
/// use u_timetable::config::SaConfig;
/// use u_timetable::models::{Problem, RoomInfo, SubjectInfo, TeacherInfo};
/// use u_timetable::scheduler::parallel_anneal;
///
/// let problem = Problem::new()
///     .with_subject(SubjectInfo::new("math", 2))
///     .with_teacher(TeacherInfo::new("alice"))
///     .with_room(RoomInfo::new("r1"));
/// let config = SaConfig::default().with_max_iterations(1_000);
/// let best = parallel_anneal(&problem, &config, 2);
/// assert_eq!(best.len(), 2);
/// ```
pub fn parallel_anneal(problem: &Problem, config: &SaConfig, workers: usize) -> Vec<Assignment> {
    parallel_anneal_detailed(problem, config, workers).assignments
}

/// [`parallel_anneal`] with per-worker costs.
///
/// The result channel is drained only after every worker has joined, so
/// each worker's single send always reaches the receiver.
#[instrument(level = "info", skip_all, fields(workers))]
pub fn parallel_anneal_detailed(
    problem: &Problem,
    config: &SaConfig,
    workers: usize,
) -> MultiStartOutcome {
    let workers = effective_workers(workers);
    tracing::Span::current().record("workers", workers);

    let constraints = Constraints::for_problem(problem);
    let (tx, rx) = mpsc::channel::<WorkerResult>();

    info!(
        subjects = problem.subjects.len(),
        teachers = problem.teachers.len(),
        rooms = problem.rooms.len(),
        "starting multi-restart search"
    );

    std::thread::scope(|scope| {
        for index in 0..workers {
            let tx = tx.clone();
            let constraints = &constraints;
            scope.spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(worker_seed(index));
                let seed = greedy_assign(problem);
                let outcome = anneal_with(&seed, problem, constraints, config, &mut rng);
                let cost = constraints.cost(&outcome.assignments);
                debug!(worker = index, cost, iterations = outcome.iterations, "worker finished");
                let _ = tx.send(WorkerResult {
                    index,
                    assignments: outcome.assignments,
                    cost,
                });
            });
        }
    });
    drop(tx);

    let mut worker_costs = vec![u64::MAX; workers];
    let mut best: Option<WorkerResult> = None;
    for result in rx {
        worker_costs[result.index] = result.cost;
        let better = match &best {
            None => true,
            Some(b) => (result.cost, result.index) < (b.cost, b.index),
        };
        if better {
            best = Some(result);
        }
    }

    let outcome = match best {
        Some(b) => MultiStartOutcome {
            assignments: b.assignments,
            cost: b.cost,
            best_worker: b.index,
            worker_costs,
        },
        None => MultiStartOutcome {
            assignments: Vec::new(),
            cost: 0,
            best_worker: 0,
            worker_costs,
        },
    };

    info!(
        cost = outcome.cost,
        best_worker = outcome.best_worker,
        assignments = outcome.assignments.len(),
        "multi-restart search finished"
    );
    outcome
}
