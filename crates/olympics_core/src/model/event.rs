//! Event record.
//!
//! An event is one competition inside an olympiad, tied to one sport.
//! Both foreign keys are checked for existence at insert time by the
//! repository, not here.

use super::olympiad::OlympiadId;
use super::sport::SportId;
use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Row id of the `event` table.
pub type EventId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<EventId>,
    pub name: String,
    pub olympiad_id: OlympiadId,
    pub sport_id: SportId,
}

impl Event {
    pub fn new(name: impl Into<String>, olympiad_id: OlympiadId, sport_id: SportId) -> Self {
        Self {
            id: None,
            name: name.into(),
            olympiad_id,
            sport_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("event", "name", &self.name)
    }
}
