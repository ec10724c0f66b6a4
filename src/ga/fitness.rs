//! Fitness evaluation for candidate schedules.
//!
//! Fitness is maximized. It rewards the completion rate (campers with
//! every slot filled) and, with a dominant weight, the preference-
//! satisfaction rate, then subtracts per-unit penalties for capacity
//! overfill, cohort conflicts and slot-ceiling excesses. Solver-built
//! schedules gated by `can_assign` never incur penalties; the terms
//! exist so that any schedule that slips a violation in (e.g. through
//! the CSP overflow fallback used as a seed) ranks strictly below every
//! comparable feasible one.

use std::collections::{HashMap, HashSet};

use crate::models::{Camper, CohortKey, Schedule};

use super::config::FitnessWeights;

/// Scores a schedule; higher is better.
pub fn evaluate(schedule: &Schedule, campers: &[Camper], weights: &FitnessWeights) -> f64 {
    let slots = schedule.policy().slot_count;
    let total = campers.len();

    let mut fully_scheduled = 0usize;
    let mut satisfied = 0usize;
    for camper in campers {
        let row = schedule.row(&camper.id);
        let filled = row.map(|r| r.iter().flatten().count()).unwrap_or(0);
        if filled == slots {
            fully_scheduled += 1;
        }
        satisfied += row
            .map(|r| {
                r.iter()
                    .flatten()
                    .filter(|workshop| camper.prefers(workshop))
                    .count()
            })
            .unwrap_or(0);
    }

    let mut score = 0.0;
    if total > 0 {
        score += weights.completion * (fully_scheduled as f64 / total as f64);
        if slots > 0 {
            score += weights.satisfaction * (satisfied as f64 / (total * slots) as f64);
        }
    }

    score -= weights.capacity_penalty * capacity_overflow(schedule) as f64;
    score -= weights.cohort_penalty * cohort_conflicts(schedule) as f64;
    score -= weights.ceiling_penalty * ceiling_excess(schedule) as f64;

    score
}

/// Total seats enrolled beyond capacity, across all sessions.
fn capacity_overflow(schedule: &Schedule) -> usize {
    schedule.sessions().iter().map(|s| s.overflow()).sum()
}

/// Number of (workshop, slot) pairs with more than one active cohort.
fn cohort_conflicts(schedule: &Schedule) -> usize {
    let mut cohorts: HashMap<(&str, usize), HashSet<CohortKey>> = HashMap::new();
    for s in schedule.sessions() {
        if !s.is_empty() {
            cohorts
                .entry((s.key.workshop.as_str(), s.key.slot))
                .or_default()
                .insert(s.key.cohort);
        }
    }
    cohorts.values().filter(|set| set.len() > 1).count()
}

/// Sessions running beyond the per-slot ceiling, summed over slots.
fn ceiling_excess(schedule: &Schedule) -> usize {
    let policy = schedule.policy();
    (0..policy.slot_count)
        .map(|slot| {
            schedule
                .active_sessions_in_slot(slot)
                .saturating_sub(policy.max_sessions_per_slot)
        })
        .sum()
}
