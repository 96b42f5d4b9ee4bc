//! Academic timetable engine.
//!
//! Places weekly subject hours into a fixed week of 6 days x 10 periods,
//! choosing a teacher and a room for every placement, and searches for a
//! timetable that breaks no hard rule and keeps soft penalties low.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Problem`, `SubjectInfo`, `TeacherInfo`,
//!   `RoomInfo`, `TimeSlot`, `AvailabilityGrid`, `Assignment`, `Schedule`
//! - **`constraints`**: Hard and soft rules behind the `Constraint` trait
//! - **`cost`**: Weighted cost (`HARD_WEIGHT` per hard violation) and breakdowns
//! - **`conflicts`**: Concrete double-booking and availability violations
//! - **`scheduler`**: Greedy seed, neighborhood, annealing, parallel restarts,
//!   `TimetableScheduler` facade and KPIs
//! - **`config`**: Annealing parameters and their validation
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   pre-assignments, malformed slots)
//!
//! # Example
//!
//! ```
//! use u_timetable::config::SaConfig;
//! use u_timetable::models::{AvailabilityGrid, Problem, RoomInfo, SubjectInfo, TeacherInfo};
//! use u_timetable::scheduler::TimetableScheduler;
//!
//! let problem = Problem::new()
//!     .with_subject(SubjectInfo::new("math", 2))
//!     .with_subject(SubjectInfo::new("physics", 2))
//!     .with_teacher(TeacherInfo::new("alice").with_availability(AvailabilityGrid::always()))
//!     .with_teacher(TeacherInfo::new("bob").with_availability(AvailabilityGrid::always()))
//!     .with_room(RoomInfo::new("r101"))
//!     .with_teacher_assignment("physics", "bob");
//!
//! let schedule = TimetableScheduler::new()
//!     .with_config(SaConfig::default().with_max_iterations(5_000))
//!     .with_workers(2)
//!     .solve(&problem)
//!     .unwrap();
//! assert_eq!(schedule.assignment_count(), 4);
//! assert!(schedule.is_feasible());
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

pub mod config;
pub mod conflicts;
pub mod constraints;
pub mod cost;
pub mod models;
pub mod scheduler;
pub mod validation;
