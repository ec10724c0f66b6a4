//! Camper (participant) model.
//!
//! A camper is the unit being scheduled: an identity, an age cohort,
//! and a ranked list of preferred workshops. Campers are immutable
//! for the duration of a solve.

use serde::{Deserialize, Serialize};

/// Age cohort of a camper.
///
/// The camp divides campers into four named cohorts, youngest first.
/// Session compatibility is decided per [`CohortPolicy`] — either exact
/// cohort match or the two-band grouping returned by [`band`](Self::band).
///
/// [`CohortPolicy`]: super::CohortPolicy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Youngest cohort.
    Nanobyte,
    /// Second-youngest cohort.
    Kilobyte,
    /// Second-oldest cohort.
    Megabyte,
    /// Oldest cohort.
    Gigabyte,
}

/// The two-band grouping of cohorts used by the adjacent-cohort policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CohortBand {
    /// Nanobyte and Kilobyte.
    Young,
    /// Megabyte and Gigabyte.
    Old,
}

impl AgeGroup {
    /// All cohorts, youngest first.
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Nanobyte,
        AgeGroup::Kilobyte,
        AgeGroup::Megabyte,
        AgeGroup::Gigabyte,
    ];

    /// The band this cohort belongs to.
    pub fn band(self) -> CohortBand {
        match self {
            AgeGroup::Nanobyte | AgeGroup::Kilobyte => CohortBand::Young,
            AgeGroup::Megabyte | AgeGroup::Gigabyte => CohortBand::Old,
        }
    }

    /// Cohort name as it appears in registration data.
    pub fn name(self) -> &'static str {
        match self {
            AgeGroup::Nanobyte => "Nanobyte",
            AgeGroup::Kilobyte => "Kilobyte",
            AgeGroup::Megabyte => "Megabyte",
            AgeGroup::Gigabyte => "Gigabyte",
        }
    }
}

/// A camper to be scheduled.
///
/// Preferences are ordered most-wanted first and reference workshops by
/// name. A camper receives at most one assignment per slot and never the
/// same workshop twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camper {
    /// Unique camper identifier (registration id or name).
    pub id: String,
    /// Age cohort.
    pub age_group: AgeGroup,
    /// Ranked workshop preferences, most-wanted first (typically 3–4).
    pub preferences: Vec<String>,
}

impl Camper {
    /// Creates a camper with no preferences.
    pub fn new(id: impl Into<String>, age_group: AgeGroup) -> Self {
        Self {
            id: id.into(),
            age_group,
            preferences: Vec::new(),
        }
    }

    /// Sets the ranked preference list.
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = preferences.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `workshop` appears in this camper's preference list.
    pub fn prefers(&self, workshop: &str) -> bool {
        self.preferences.iter().any(|p| p == workshop)
    }

    /// Rank of `workshop` in the preference list (0 = most wanted).
    ///
    /// Returns `None` if the workshop is not preferred.
    pub fn preference_rank(&self, workshop: &str) -> Option<usize> {
        self.preferences.iter().position(|p| p == workshop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_split() {
        assert_eq!(AgeGroup::Nanobyte.band(), CohortBand::Young);
        assert_eq!(AgeGroup::Kilobyte.band(), CohortBand::Young);
        assert_eq!(AgeGroup::Megabyte.band(), CohortBand::Old);
        assert_eq!(AgeGroup::Gigabyte.band(), CohortBand::Old);
    }

    #[test]
    fn test_preference_rank() {
        let camper = Camper::new("c1", AgeGroup::Kilobyte)
            .with_preferences(["Archery", "Robotics", "Pottery"]);

        assert!(camper.prefers("Robotics"));
        assert!(!camper.prefers("Sailing"));
        assert_eq!(camper.preference_rank("Archery"), Some(0));
        assert_eq!(camper.preference_rank("Pottery"), Some(2));
        assert_eq!(camper.preference_rank("Sailing"), None);
    }

    #[test]
    fn test_all_cohorts_listed() {
        assert_eq!(AgeGroup::ALL.len(), 4);
        for group in AgeGroup::ALL {
            assert!(!group.name().is_empty());
        }
    }
}
