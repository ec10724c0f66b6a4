//! Schedule quality metrics (KPIs).
//!
//! Computes assignment quality indicators from a completed schedule and
//! its input configuration.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Rate | Fraction of campers with every slot filled |
//! | Satisfaction Histogram | Campers by number of fulfilled preferences |
//! | Weighted Satisfaction | Sum of fulfilled-preference counts |
//! | Satisfaction Rate | Weighted satisfaction / (campers × slots) |
//! | Unassigned Slots | Total sentinel entries across all rows |

use crate::models::{Configuration, Schedule};

/// Assignment quality indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Number of campers measured.
    pub total_campers: usize,
    /// Campers with every slot filled (no sentinel).
    pub fully_scheduled: usize,
    /// `fully_scheduled / total_campers` (0.0..1.0).
    pub completion_rate: f64,
    /// Index k = number of campers with exactly k fulfilled preferences.
    pub satisfaction_counts: Vec<usize>,
    /// Sum over campers of fulfilled-preference counts.
    pub weighted_satisfaction: usize,
    /// `weighted_satisfaction / (total_campers * slots)` (0.0..1.0).
    pub satisfaction_rate: f64,
    /// Sentinel entries across all camper rows.
    pub unassigned_slots: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the configuration it solved.
    pub fn calculate(schedule: &Schedule, config: &Configuration) -> Self {
        let slots = schedule.policy().slot_count;
        let total_campers = config.camper_count();

        let mut fully_scheduled = 0;
        let mut satisfaction_counts = vec![0usize; slots + 1];
        let mut unassigned_slots = 0;

        for camper in &config.campers {
            let row = schedule.row(&camper.id);
            let filled = row.map(|r| r.iter().flatten().count()).unwrap_or(0);
            unassigned_slots += slots - filled;
            if filled == slots {
                fully_scheduled += 1;
            }

            let fulfilled = row
                .map(|r| {
                    r.iter()
                        .flatten()
                        .filter(|workshop| camper.prefers(workshop))
                        .count()
                })
                .unwrap_or(0);
            satisfaction_counts[fulfilled.min(slots)] += 1;
        }

        let weighted_satisfaction: usize = satisfaction_counts
            .iter()
            .enumerate()
            .map(|(fulfilled, &count)| fulfilled * count)
            .sum();

        let completion_rate = if total_campers == 0 {
            0.0
        } else {
            fully_scheduled as f64 / total_campers as f64
        };
        let satisfaction_rate = if total_campers == 0 || slots == 0 {
            0.0
        } else {
            weighted_satisfaction as f64 / (total_campers * slots) as f64
        };

        Self {
            total_campers,
            fully_scheduled,
            completion_rate,
            satisfaction_counts,
            weighted_satisfaction,
            satisfaction_rate,
            unassigned_slots,
        }
    }
}
