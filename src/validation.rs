//! Input validation for assignment problems.
//!
//! Checks structural integrity of a [`Configuration`] before it enters
//! the solvers. Detects:
//! - Duplicate camper ids and workshop names
//! - Empty, short, or self-repeating preference lists
//! - Preferences referencing unknown workshops
//! - Names colliding with the reserved unassigned sentinel
//!
//! Feasibility (capacity, cohorts, slot ceilings) is *not* validated
//! here — infeasible placements are an expected runtime condition the
//! solvers absorb via the sentinel, never an input error.

use std::collections::HashSet;

use crate::models::{Configuration, SchedulingPolicy, UNASSIGNED};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two campers share the same id.
    DuplicateCamperId,
    /// The workshop catalog lists one name twice.
    DuplicateWorkshop,
    /// A camper has no preferences at all.
    EmptyPreferences,
    /// A camper has fewer preferences than there are slots to fill.
    TooFewPreferences,
    /// A camper lists the same workshop twice.
    DuplicatePreference,
    /// A preference references a workshop not in the catalog.
    UnknownWorkshop,
    /// A camper or workshop uses the reserved sentinel name.
    ReservedSentinelName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a configuration against a policy.
///
/// Checks:
/// 1. No duplicate camper ids
/// 2. No duplicate workshop names
/// 3. No workshop or preference named like the sentinel
/// 4. Every camper has at least one preference
/// 5. Every camper has at least `policy.slot_count` preferences
/// 6. No camper repeats a workshop in their preference list
/// 7. All preferences reference cataloged workshops
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_configuration(
    config: &Configuration,
    policy: &SchedulingPolicy,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut workshop_names = HashSet::new();
    for name in &config.workshops {
        if name == UNASSIGNED {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedSentinelName,
                format!("Workshop name '{name}' is reserved for unassigned slots"),
            ));
        }
        if !workshop_names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWorkshop,
                format!("Duplicate workshop name: {name}"),
            ));
        }
    }

    let mut camper_ids = HashSet::new();
    for camper in &config.campers {
        if camper.id == UNASSIGNED {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedSentinelName,
                format!("Camper id '{}' is reserved for unassigned slots", camper.id),
            ));
        }
        if !camper_ids.insert(camper.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCamperId,
                format!("Duplicate camper id: {}", camper.id),
            ));
        }

        if camper.preferences.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPreferences,
                format!("Camper '{}' has no preferences", camper.id),
            ));
            continue;
        }

        if camper.preferences.len() < policy.slot_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooFewPreferences,
                format!(
                    "Camper '{}' lists {} preferences, need at least {}",
                    camper.id,
                    camper.preferences.len(),
                    policy.slot_count
                ),
            ));
        }

        let mut seen = HashSet::new();
        for preference in &camper.preferences {
            if !seen.insert(preference.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePreference,
                    format!(
                        "Camper '{}' lists workshop '{preference}' more than once",
                        camper.id
                    ),
                ));
            }
            if !workshop_names.contains(preference.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownWorkshop,
                    format!(
                        "Camper '{}' references unknown workshop '{preference}'",
                        camper.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
