//! Solver input container.
//!
//! A [`Configuration`] is everything a solver needs: the ordered camper
//! list (input order doubles as the deterministic tie-break order) and
//! the set of valid workshop names. How the data was obtained — a
//! registration spreadsheet, a form export — is the caller's concern.

use serde::{Deserialize, Serialize};

use super::Camper;

/// Input for one solve: campers plus the valid workshop catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Campers in registration order.
    pub campers: Vec<Camper>,
    /// Valid workshop names.
    pub workshops: Vec<String>,
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a camper.
    pub fn with_camper(mut self, camper: Camper) -> Self {
        self.campers.push(camper);
        self
    }

    /// Adds a workshop to the catalog.
    pub fn with_workshop(mut self, name: impl Into<String>) -> Self {
        self.workshops.push(name.into());
        self
    }

    /// Adds several workshops to the catalog.
    pub fn with_workshops<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workshops.extend(names.into_iter().map(Into::into));
        self
    }

    /// Looks up a camper by id.
    pub fn camper(&self, id: &str) -> Option<&Camper> {
        self.campers.iter().find(|c| c.id == id)
    }

    /// Whether `name` is a cataloged workshop.
    pub fn has_workshop(&self, name: &str) -> bool {
        self.workshops.iter().any(|w| w == name)
    }

    /// Number of campers.
    pub fn camper_count(&self) -> usize {
        self.campers.len()
    }
}
