//! Constructive MRV/LCV solver.
//!
//! Treats each camper as a variable whose value is an ordering of their
//! preferred workshops across the day's slots, and assigns campers one
//! at a time using the two classic constraint-satisfaction orderings:
//!
//! - **Variable order (MRV)**: among still-unassigned campers, pick the
//!   one with the fewest feasible placements — summed `can_assign` hits
//!   over every permutation of their preferences — so the most
//!   constrained campers book while the solution space is least
//!   depleted.
//! - **Value order (LCV)**: for the chosen camper, commit the preference
//!   permutation whose sessions have the most spare seats, leaving the
//!   most room for everyone after them.
//!
//! This is a one-pass constructive heuristic, not an exhaustive search:
//! no backtracking across campers, so pathological orderings can leave
//! sentinel slots that a complete search would fill. That trade keeps
//! runtime tractable for hundreds of campers.
//!
//! # References
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6.3 (variable and value ordering)
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

use crate::models::{Camper, Configuration, Schedule, SchedulingPolicy};

/// Options for the constructive solver.
#[derive(Debug, Clone, Default)]
pub struct CspConfig {
    /// When a position of the winning permutation fails `can_assign`,
    /// book it anyway as long as the camper's own row allows it and the
    /// slot's session ceiling still admits a new session.
    ///
    /// This reproduces the historical capacity slack: an overfilled
    /// session becomes a [`Violation`] instead of a sentinel slot.
    /// Disabled by default, which keeps solver output valid by
    /// construction.
    ///
    /// [`Violation`]: crate::models::Violation
    pub open_session_fallback: bool,
}

impl CspConfig {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the overflow fallback.
    pub fn with_open_session_fallback(mut self, enabled: bool) -> Self {
        self.open_session_fallback = enabled;
        self
    }
}

/// One-pass MRV/LCV assignment solver.
///
/// Deterministic: ties in both orderings break toward registration
/// order, and no randomness is used anywhere.
///
/// # Example
///
/// ```
/// use camp_schedule::csp::CspSolver;
/// use camp_schedule::models::{AgeGroup, Camper, Configuration, SchedulingPolicy};
///
/// let config = Configuration::new()
///     .with_workshops(["Archery", "Pottery", "Robotics"])
///     .with_camper(
///         Camper::new("c1", AgeGroup::Kilobyte)
///             .with_preferences(["Archery", "Pottery", "Robotics"]),
///     );
///
/// let solver = CspSolver::new(SchedulingPolicy::default());
/// let schedule = solver.solve(&config);
/// assert_eq!(schedule.assigned_count("c1"), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CspSolver {
    policy: SchedulingPolicy,
    config: CspConfig,
}

impl CspSolver {
    /// Creates a solver with the given policy and default options.
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            config: CspConfig::default(),
        }
    }

    /// Sets the solver options.
    pub fn with_config(mut self, config: CspConfig) -> Self {
        self.config = config;
        self
    }

    /// Assigns every camper exactly once and returns the schedule.
    pub fn solve(&self, configuration: &Configuration) -> Schedule {
        let mut schedule = Schedule::new(self.policy.clone());
        let mut remaining: Vec<&Camper> = configuration.campers.iter().collect();

        while !remaining.is_empty() {
            let next = self.most_constrained(&remaining, &schedule);
            let camper = remaining.remove(next);
            self.commit_least_constraining(camper, &mut schedule);
        }

        schedule
    }

    /// MRV: index of the camper with the fewest feasible placements.
    ///
    /// The score sums `can_assign` over every position of every
    /// preference permutation against the current schedule; ties keep
    /// the earliest camper.
    fn most_constrained(&self, remaining: &[&Camper], schedule: &Schedule) -> usize {
        let mut best = 0;
        let mut best_score = usize::MAX;

        for (i, camper) in remaining.iter().enumerate() {
            let mut score = 0;
            for perm in k_permutations(&camper.preferences, self.policy.slot_count) {
                for (slot, workshop) in perm.iter().enumerate() {
                    if schedule.can_assign(&camper.id, camper.age_group, workshop, slot) {
                        score += 1;
                    }
                }
            }
            if score < best_score {
                best_score = score;
                best = i;
            }
        }

        best
    }

    /// LCV: commit the permutation whose sessions have the most spare
    /// seats, position by position.
    fn commit_least_constraining(&self, camper: &Camper, schedule: &mut Schedule) {
        schedule.register_camper(&camper.id);

        let perms = k_permutations(&camper.preferences, self.policy.slot_count);
        let Some(first) = perms.first() else {
            // Fewer preferences than slots: nothing to permute, the row
            // stays all-sentinel. Validation flags this at the boundary.
            return;
        };

        let mut best = first;
        let mut best_score = 0;
        for perm in &perms {
            let score: usize = perm
                .iter()
                .enumerate()
                .map(|(slot, workshop)| {
                    schedule.remaining_capacity(workshop, slot, camper.age_group)
                })
                .sum();
            if score > best_score {
                best_score = score;
                best = perm;
            }
        }

        for (slot, workshop) in best.iter().enumerate() {
            if schedule.can_assign(&camper.id, camper.age_group, workshop, slot) {
                schedule.add_booking(&camper.id, camper.age_group, workshop, slot);
            } else if self.config.open_session_fallback
                && row_admits(schedule, &camper.id, workshop, slot)
                && schedule.can_open_session_in_slot(slot)
            {
                // Historical slack: accept the booking and let the
                // violation audit price any capacity excess.
                schedule.add_booking(&camper.id, camper.age_group, workshop, slot);
            }
            // Otherwise the slot keeps the sentinel.
        }
    }
}

/// Whether the camper's own row allows booking `workshop` at `slot`
/// (free slot, workshop not already taken). Session-level limits are
/// deliberately not checked — this guards only the structural
/// invariants the booking table cannot represent being broken.
fn row_admits(schedule: &Schedule, camper_id: &str, workshop: &str, slot: usize) -> bool {
    match schedule.row(camper_id) {
        Some(row) => row[slot].is_none() && !row.iter().flatten().any(|w| w == workshop),
        None => true,
    }
}

/// All orderings of `k` distinct items from `items`, in stable
/// index-lexicographic order.
fn k_permutations(items: &[String], k: usize) -> Vec<Vec<&str>> {
    fn extend<'a>(
        items: &'a [String],
        used: &mut [bool],
        current: &mut Vec<&'a str>,
        k: usize,
        out: &mut Vec<Vec<&'a str>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(&items[i]);
            extend(items, used, current, k, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    if k <= items.len() {
        let mut used = vec![false; items.len()];
        extend(items, &mut used, &mut Vec::with_capacity(k), k, &mut out);
    }
    out
}
