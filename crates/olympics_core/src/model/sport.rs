//! Sport record.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Row id of the `sport` table.
pub type SportId = i64;

/// A sport discipline, e.g. "Swimming". Referenced by events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub id: Option<SportId>,
    pub name: String,
}

impl Sport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("sport", "name", &self.name)
    }
}
