//! Team record.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Row id of the `team` table.
pub type TeamId = i64;

/// A national or club team an athlete competes for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<TeamId>,
    pub name: String,
    /// Short code such as `ESP` or `TMA`.
    pub initials: String,
}

impl Team {
    pub fn new(name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            initials: initials.into(),
        }
    }

    /// Both `name` and `initials` are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("team", "name", &self.name)?;
        require_text("team", "initials", &self.initials)
    }
}
