//! Session (booking-table record) model.
//!
//! A session is the actual unit of capacity: one workshop, running in one
//! slot, restricted to one cohort key. The [`Schedule`] stores sessions in
//! an arena indexed by [`SessionKey`] so capacity and cohort rules are
//! enforceable on a single record instead of nested maps.
//!
//! [`Schedule`]: super::Schedule

use serde::Serialize;

use super::CohortKey;

/// Identity of a session: workshop × slot × cohort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionKey {
    /// Workshop name.
    pub workshop: String,
    /// Slot index.
    pub slot: usize,
    /// Cohort key the roster is restricted to.
    pub cohort: CohortKey,
}

impl SessionKey {
    /// Creates a session key.
    pub fn new(workshop: impl Into<String>, slot: usize, cohort: CohortKey) -> Self {
        Self {
            workshop: workshop.into(),
            slot,
            cohort,
        }
    }
}

/// One session record: its identity plus the enrolled campers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    /// Session identity.
    pub key: SessionKey,
    /// Enrolled camper ids, in booking order.
    pub roster: Vec<String>,
    /// Capacity ceiling this session was created under.
    pub capacity: usize,
}

impl Session {
    /// Creates an empty session.
    pub fn new(key: SessionKey, capacity: usize) -> Self {
        Self {
            key,
            roster: Vec::new(),
            capacity,
        }
    }

    /// Number of enrolled campers.
    pub fn enrolled(&self) -> usize {
        self.roster.len()
    }

    /// Whether the session has no enrolled campers.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Spare seats, saturating at zero when overfilled.
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.roster.len())
    }

    /// Seats enrolled beyond capacity (zero for a legal session).
    pub fn overflow(&self) -> usize {
        self.roster.len().saturating_sub(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeGroup, CohortPolicy};

    fn key() -> SessionKey {
        SessionKey::new(
            "Archery",
            0,
            CohortPolicy::AdjacentBands.cohort_key(AgeGroup::Nanobyte),
        )
    }

    #[test]
    fn test_empty_session() {
        let s = Session::new(key(), 15);
        assert!(s.is_empty());
        assert_eq!(s.enrolled(), 0);
        assert_eq!(s.remaining_capacity(), 15);
        assert_eq!(s.overflow(), 0);
    }

    #[test]
    fn test_capacity_accounting() {
        let mut s = Session::new(key(), 2);
        s.roster.push("c1".into());
        assert_eq!(s.remaining_capacity(), 1);
        s.roster.push("c2".into());
        assert_eq!(s.remaining_capacity(), 0);
        assert_eq!(s.overflow(), 0);

        // Forced overfill is representable and reported, never silent.
        s.roster.push("c3".into());
        assert_eq!(s.remaining_capacity(), 0);
        assert_eq!(s.overflow(), 1);
    }
}
