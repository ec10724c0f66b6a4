//! Camp workshop assignment engine.
//!
//! Assigns campers to workshop sessions across parallel time slots,
//! honoring per-session capacity, per-slot concurrency ceilings and
//! age-cohort segregation while maximizing how many ranked preferences
//! each camper receives.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Camper`, `Configuration`, `Schedule`,
//!   `Session`, `SchedulingPolicy`
//! - **`validation`**: Input integrity checks (duplicate ids, empty or
//!   unknown preferences)
//! - **`scheduler`**: First-feasible greedy baseline and KPI evaluation
//! - **`csp`**: Constructive MRV/LCV heuristic solver
//! - **`ga`**: Population-based genetic solver
//!
//! # Usage
//!
//! ```
//! use camp_schedule::csp::CspSolver;
//! use camp_schedule::models::{AgeGroup, Camper, Configuration, SchedulingPolicy};
//! use camp_schedule::scheduler::ScheduleKpi;
//! use camp_schedule::validation::validate_configuration;
//!
//! let config = Configuration::new()
//!     .with_workshops(["Archery", "Pottery", "Robotics"])
//!     .with_camper(
//!         Camper::new("c1", AgeGroup::Kilobyte)
//!             .with_preferences(["Archery", "Pottery", "Robotics"]),
//!     );
//! let policy = SchedulingPolicy::default();
//! validate_configuration(&config, &policy).expect("well-formed input");
//!
//! let schedule = CspSolver::new(policy).solve(&config);
//! let kpi = ScheduleKpi::calculate(&schedule, &config);
//! assert_eq!(kpi.fully_scheduled, 1);
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"

pub mod csp;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;
