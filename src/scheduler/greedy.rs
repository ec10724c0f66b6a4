//! First-feasible greedy assigner.
//!
//! # Algorithm
//!
//! 1. Sweep campers once, in registration order.
//! 2. For each camper, walk the ranked preferences; for each preference,
//!    take the first slot where [`Schedule::can_assign`] holds.
//! 3. Stop once every slot is filled or preferences run out; untouched
//!    slots keep the unassigned sentinel.
//!
//! No backtracking, no optimization — the result is a quality and
//! latency floor for comparing the heuristic solvers against.
//!
//! # Complexity
//! O(n * p * s) where n=campers, p=preferences/camper, s=slots.

use crate::models::{Configuration, Schedule, SchedulingPolicy};

/// First-feasible baseline assigner.
///
/// Deterministic for a fixed camper order; campers earlier in the input
/// are served strictly first.
///
/// # Example
///
/// ```
/// use camp_schedule::models::{AgeGroup, Camper, Configuration, SchedulingPolicy};
/// use camp_schedule::scheduler::GreedyAssigner;
///
/// let config = Configuration::new()
///     .with_workshops(["Archery", "Pottery", "Robotics"])
///     .with_camper(
///         Camper::new("c1", AgeGroup::Kilobyte)
///             .with_preferences(["Archery", "Pottery", "Robotics"]),
///     );
///
/// let assigner = GreedyAssigner::new(SchedulingPolicy::default());
/// let schedule = assigner.assign(&config);
/// assert_eq!(schedule.assigned_count("c1"), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    policy: SchedulingPolicy,
}

impl GreedyAssigner {
    /// Creates an assigner with the given policy.
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self { policy }
    }

    /// Assigns all campers in one sweep.
    pub fn assign(&self, config: &Configuration) -> Schedule {
        let mut schedule = Schedule::new(self.policy.clone());

        for camper in &config.campers {
            schedule.register_camper(&camper.id);
            let mut assigned = 0;

            'preferences: for preference in &camper.preferences {
                for slot in 0..self.policy.slot_count {
                    if schedule.can_assign(&camper.id, camper.age_group, preference, slot) {
                        schedule.add_booking(&camper.id, camper.age_group, preference, slot);
                        assigned += 1;
                        if assigned == self.policy.slot_count {
                            break 'preferences;
                        }
                        break;
                    }
                }
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeGroup::{self, *};
    use crate::models::Camper;

    fn camper(id: &str, age: AgeGroup, prefs: &[&str]) -> Camper {
        Camper::new(id, age).with_preferences(prefs.iter().copied())
    }

    fn three_workshop_config() -> Configuration {
        Configuration::new()
            .with_workshops(["W1", "W2", "W3"])
            .with_camper(camper("c1", Nanobyte, &["W1", "W2", "W3"]))
    }

    #[test]
    fn test_single_camper_gets_preferences_in_slot_order() {
        let assigner = GreedyAssigner::new(SchedulingPolicy::default());
        let schedule = assigner.assign(&three_workshop_config());

        let row = schedule.row("c1").unwrap();
        assert_eq!(row[0].as_deref(), Some("W1"));
        assert_eq!(row[1].as_deref(), Some("W2"));
        assert_eq!(row[2].as_deref(), Some("W3"));
        assert!(schedule.is_valid());
        assert!(schedule.is_consistent());
    }

    #[test]
    fn test_exhausted_preferences_leave_sentinel() {
        let config = Configuration::new()
            .with_workshops(["W1", "W2"])
            .with_camper(camper("c1", Nanobyte, &["W1", "W2"]));
        let assigner = GreedyAssigner::new(SchedulingPolicy::default());

        let schedule = assigner.assign(&config);
        let row = schedule.row("c1").unwrap();
        assert_eq!(row.iter().flatten().count(), 2);
        assert_eq!(row[2], None);
    }

    #[test]
    fn test_capacity_overflow_pushes_sixteenth_camper_out() {
        let mut config = Configuration::new().with_workshop("W1");
        for i in 0..16 {
            config = config.with_camper(camper(&format!("c{i}"), Kilobyte, &["W1"]));
        }
        let assigner = GreedyAssigner::new(SchedulingPolicy::default());
        let schedule = assigner.assign(&config);

        // Slot 0's session fills to capacity; the sixteenth camper is
        // forced out of it and keeps the sentinel there.
        let in_slot0 = (0..16)
            .filter(|i| schedule.row(&format!("c{i}")).unwrap()[0].is_some())
            .count();
        assert_eq!(in_slot0, 15);
        assert_eq!(schedule.row("c15").unwrap()[0], None);
        for s in schedule.sessions() {
            assert!(s.enrolled() <= s.capacity);
        }
        assert!(schedule.is_valid());
    }

    #[test]
    fn test_non_adjacent_cohorts_never_share_a_session() {
        let config = Configuration::new()
            .with_workshop("W1")
            .with_camper(camper("young", Nanobyte, &["W1"]))
            .with_camper(camper("old", Megabyte, &["W1"]));
        let assigner = GreedyAssigner::new(SchedulingPolicy::default());
        let schedule = assigner.assign(&config);

        // Both may get W1, but never in the same session.
        for s in schedule.sessions() {
            assert!(
                !(s.roster.iter().any(|id| id == "young") && s.roster.iter().any(|id| id == "old"))
            );
        }
        assert!(schedule.is_valid());
    }

    #[test]
    fn test_earlier_campers_win_contested_seats() {
        let policy = SchedulingPolicy::default()
            .with_session_capacity(1)
            .with_max_sessions_per_slot(1)
            .with_slot_count(1);
        let config = Configuration::new()
            .with_workshop("W1")
            .with_camper(camper("first", Kilobyte, &["W1"]))
            .with_camper(camper("second", Kilobyte, &["W1"]));

        let schedule = GreedyAssigner::new(policy).assign(&config);
        assert_eq!(schedule.row("first").unwrap()[0].as_deref(), Some("W1"));
        assert_eq!(schedule.row("second").unwrap()[0], None);
    }

    #[test]
    fn test_every_camper_has_a_full_row() {
        let config = Configuration::new()
            .with_workshops(["W1"])
            .with_camper(camper("c1", Nanobyte, &["W1"]))
            .with_camper(camper("c2", Gigabyte, &[]));
        let schedule = GreedyAssigner::new(SchedulingPolicy::default()).assign(&config);

        // Even a camper with no preferences gets a sentinel-only row.
        assert_eq!(schedule.row("c2").unwrap().len(), 3);
        assert_eq!(schedule.assigned_count("c2"), 0);
    }
}
