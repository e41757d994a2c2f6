//! Participation record: an athlete competing in an event for a team.
//!
//! # Invariants
//! - Identity is the composite `(athlete_id, event_id)`; an athlete enters a
//!   given event at most once.
//! - `team_id` and `medal` are the only mutable attributes.

use super::athlete::AthleteId;
use super::event::EventId;
use super::team::TeamId;
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Medal outcome. `None` records a participation without a podium finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Other,
    #[default]
    None,
}

impl Medal {
    pub const ALL: [Medal; 5] = [
        Self::Gold,
        Self::Silver,
        Self::Bronze,
        Self::Other,
        Self::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
            Self::Other => "Other",
            Self::None => "None",
        }
    }

    /// Case-insensitive parse; an empty string means no medal.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::None);
        }
        Self::ALL
            .into_iter()
            .find(|medal| medal.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "medal",
                value: trimmed.to_string(),
            })
    }

    /// Gold, silver and bronze count towards a medal table.
    pub fn is_podium(self) -> bool {
        matches!(self, Self::Gold | Self::Silver | Self::Bronze)
    }
}

/// Composite primary key of the `participation` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipationKey {
    pub athlete_id: AthleteId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    pub athlete_id: AthleteId,
    pub event_id: EventId,
    pub team_id: TeamId,
    pub medal: Medal,
}

impl Participation {
    pub fn new(athlete_id: AthleteId, event_id: EventId, team_id: TeamId, medal: Medal) -> Self {
        Self {
            athlete_id,
            event_id,
            team_id,
            medal,
        }
    }

    pub fn key(&self) -> ParticipationKey {
        ParticipationKey {
            athlete_id: self.athlete_id,
            event_id: self.event_id,
        }
    }
}
