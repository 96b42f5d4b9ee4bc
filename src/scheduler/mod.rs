//! Timetable construction and search.
//!
//! # Pipeline
//!
//! ```text
//! Problem ──greedy_assign──> seed ──anneal──> refined ─┐
//!    (one pipeline per worker, seeds i * 1_000_003 + 42) ├─> cheapest
//! Problem ──greedy_assign──> seed ──anneal──> refined ─┘
//! ```
//!
//! - [`greedy_assign`]: most-constrained-first constructive heuristic.
//! - [`neighbor`]: swap / move-slot / reassign-room perturbations.
//! - [`anneal`]: simulated annealing with Metropolis acceptance.
//! - [`parallel_anneal`]: independent multi-restart over threads.
//! - [`TimetableScheduler`]: config check + search + evaluation.
//! - [`TimetableKpi`]: coverage and quality metrics for a result.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod annealing;
mod engine;
mod greedy;
mod kpi;
mod neighbor;
mod parallel;

pub use annealing::{anneal, anneal_with, AnnealOutcome};
pub use engine::TimetableScheduler;
pub use greedy::greedy_assign;
pub use kpi::{CoverageGap, TimetableKpi};
pub use neighbor::{neighbor, Move};
pub use parallel::{
    effective_workers, parallel_anneal, parallel_anneal_detailed, worker_seed, MultiStartOutcome,
};
