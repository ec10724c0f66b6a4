//! Greedy baseline assigner and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyAssigner` is a single first-feasible sweep in registration
//! order. It is not optimal — it exists as the quality and latency floor
//! the heuristic solvers ([`csp`], [`ga`]) are measured against.
//!
//! # KPI
//!
//! `ScheduleKpi` computes the assignment quality measures: completion
//! rate, preference-satisfaction histogram, and weighted satisfaction.
//!
//! [`csp`]: crate::csp
//! [`ga`]: crate::ga

mod greedy;
mod kpi;

pub use greedy::GreedyAssigner;
pub use kpi::ScheduleKpi;
