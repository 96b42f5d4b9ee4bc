//! Simulated annealing over neighbor moves.
//!
//! # Algorithm
//!
//! ```text
//! T = initial_temperature
//! while iteration < max_iterations and T > min_temperature:
//!     candidate = neighbor(current)
//!     delta = cost(candidate) - cost(current)
//!     if delta < 0 or U(0,1) < exp(-delta / T): current = candidate
//!     if cost(current) < cost(best): best = current
//!     T *= cooling_rate
//! ```
//!
//! The uniform draw only happens for non-improving moves, so a run is fully
//! determined by the RNG it is given.
//!
//! # Reference
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use rand::Rng;
use tracing::{debug, instrument};

use super::neighbor::neighbor;
use crate::config::SaConfig;
use crate::constraints::Constraints;
use crate::models::{Assignment, Problem};

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// Best assignment list seen.
    pub assignments: Vec<Assignment>,
    /// Cost of `assignments`.
    pub cost: u64,
    /// Cost of the starting list.
    pub initial_cost: u64,
    /// Iterations executed.
    pub iterations: u64,
    /// Candidates accepted as the new current solution.
    pub accepted: u64,
    /// Times the best solution improved.
    pub improvements: u64,
    /// Temperature when the loop stopped.
    pub final_temperature: f64,
}

/// Refines `initial` and returns the best list found.
///
/// Builds the constraint sets for `problem`; use [`anneal_with`] to share
/// prebuilt sets across runs.
pub fn anneal<R: Rng>(
    initial: &[Assignment],
    problem: &Problem,
    config: &SaConfig,
    rng: &mut R,
) -> Vec<Assignment> {
    let constraints = Constraints::for_problem(problem);
    anneal_with(initial, problem, &constraints, config, rng).assignments
}

/// Annealing against prebuilt `constraints`, with run statistics.
#[instrument(level = "debug", skip_all, fields(assignments = initial.len()))]
pub fn anneal_with<R: Rng>(
    initial: &[Assignment],
    problem: &Problem,
    constraints: &Constraints,
    config: &SaConfig,
    rng: &mut R,
) -> AnnealOutcome {
    let mut current = initial.to_vec();
    let mut current_cost = constraints.cost(&current);
    let initial_cost = current_cost;
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut temperature = config.initial_temperature;
    let mut iterations = 0u64;
    let mut accepted = 0u64;
    let mut improvements = 0u64;

    while iterations < config.max_iterations && temperature > config.min_temperature {
        let candidate = neighbor(&current, problem, rng);
        let candidate_cost = constraints.cost(&candidate);
        let delta = candidate_cost as f64 - current_cost as f64;

        if delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp() {
            current = candidate;
            current_cost = candidate_cost;
            accepted += 1;

            if current_cost < best_cost {
                best.clone_from(&current);
                best_cost = current_cost;
                improvements += 1;
            }
        }

        temperature *= config.cooling_rate;
        iterations += 1;
    }

    debug!(
        initial_cost,
        best_cost, iterations, accepted, improvements, "annealing finished"
    );

    AnnealOutcome {
        assignments: best,
        cost: best_cost,
        initial_cost,
        iterations,
        accepted,
        improvements,
        final_temperature: temperature,
    }
}
