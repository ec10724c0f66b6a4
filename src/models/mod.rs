//! Assignment domain models.
//!
//! Core data types for the camp assignment problem: who is being
//! scheduled ([`Camper`]), under which rules ([`SchedulingPolicy`]),
//! into which units of capacity ([`Session`]), and the candidate
//! solution itself ([`Schedule`]).
//!
//! # Domain Mapping
//!
//! | Type | Camp term |
//! |------|-----------|
//! | Camper | registered participant |
//! | Workshop | recurring activity offering |
//! | Session | one workshop × slot × cohort instance |
//! | Schedule | a full day's assignment |

mod camper;
mod configuration;
mod policy;
mod schedule;
mod session;

pub use camper::{AgeGroup, Camper, CohortBand};
pub use configuration::Configuration;
pub use policy::{CohortKey, CohortPolicy, SchedulingPolicy};
pub use schedule::{Schedule, Violation, ViolationType, UNASSIGNED};
pub use session::{Session, SessionKey};
