//! Scheduling limits and cohort-compatibility policy.
//!
//! [`SchedulingPolicy`] bundles the facility constraints every solver
//! checks against: per-session capacity, the per-slot ceiling on
//! concurrently running sessions, the number of daily slots, and the
//! cohort-mixing rule. One policy value is owned by each [`Schedule`]
//! so a candidate solution always knows the rules it was built under.
//!
//! [`Schedule`]: super::Schedule

use serde::{Deserialize, Serialize};

use super::{AgeGroup, CohortBand};

/// Cohort key under which a session's roster is stored.
///
/// Which campers may share a session depends on the active
/// [`CohortPolicy`]: under exact matching every cohort gets its own
/// sessions; under band matching the two youngest (and the two oldest)
/// cohorts are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CohortKey {
    /// Session restricted to one exact cohort.
    Group(AgeGroup),
    /// Session open to a young/old band.
    Band(CohortBand),
}

/// Rule deciding which cohorts may share a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CohortPolicy {
    /// Only campers of the identical cohort share a session.
    SameGroup,
    /// Adjacent cohorts are interchangeable: Nanobyte/Kilobyte form the
    /// young band, Megabyte/Gigabyte the old band. This is how the camp
    /// actually runs its sessions.
    #[default]
    AdjacentBands,
}

impl CohortPolicy {
    /// The cohort key a camper of `age_group` books under.
    pub fn cohort_key(self, age_group: AgeGroup) -> CohortKey {
        match self {
            CohortPolicy::SameGroup => CohortKey::Group(age_group),
            CohortPolicy::AdjacentBands => CohortKey::Band(age_group.band()),
        }
    }
}

/// Facility constraints and tunables shared by all solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingPolicy {
    /// Maximum campers per session.
    pub session_capacity: usize,
    /// Minimum viable session size. Only the post-hoc consolidation pass
    /// ([`Schedule::dissolve_small_sessions`]) uses this; solvers ignore it.
    ///
    /// [`Schedule::dissolve_small_sessions`]: super::Schedule::dissolve_small_sessions
    pub min_session_size: usize,
    /// Maximum concurrently running sessions per slot (staffing/facility cap).
    pub max_sessions_per_slot: usize,
    /// Number of daily time slots.
    pub slot_count: usize,
    /// Cohort-mixing rule.
    pub cohort_policy: CohortPolicy,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            session_capacity: 15,
            min_session_size: 4,
            max_sessions_per_slot: 35,
            slot_count: 3,
            cohort_policy: CohortPolicy::default(),
        }
    }
}

impl SchedulingPolicy {
    /// Creates the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-session capacity.
    pub fn with_session_capacity(mut self, capacity: usize) -> Self {
        self.session_capacity = capacity;
        self
    }

    /// Sets the minimum viable session size.
    pub fn with_min_session_size(mut self, size: usize) -> Self {
        self.min_session_size = size;
        self
    }

    /// Sets the per-slot concurrent-session ceiling.
    pub fn with_max_sessions_per_slot(mut self, ceiling: usize) -> Self {
        self.max_sessions_per_slot = ceiling;
        self
    }

    /// Sets the number of daily slots.
    pub fn with_slot_count(mut self, slots: usize) -> Self {
        self.slot_count = slots;
        self
    }

    /// Sets the cohort-mixing rule.
    pub fn with_cohort_policy(mut self, policy: CohortPolicy) -> Self {
        self.cohort_policy = policy;
        self
    }

    /// The cohort key a camper of `age_group` books under.
    pub fn cohort_key(&self, age_group: AgeGroup) -> CohortKey {
        self.cohort_policy.cohort_key(age_group)
    }
}
