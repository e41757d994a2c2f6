//! Olympiad record: one edition of the Games.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Row id of the `olympiad` table.
pub type OlympiadId = i64;

/// Season of an edition. Stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    /// Case-insensitive parse of `spring|summer|autumn|winter`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|season| season.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "season",
                value: value.trim().to_string(),
            })
    }
}

/// One edition of the Games, e.g. "2024 Paris". Referenced by events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Olympiad {
    pub id: Option<OlympiadId>,
    pub name: String,
    pub year: u32,
    pub season: Season,
    pub city: String,
}

impl Olympiad {
    pub fn new(
        name: impl Into<String>,
        year: u32,
        season: Season,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            year,
            season,
            city: city.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("olympiad", "name", &self.name)?;
        require_text("olympiad", "city", &self.city)
    }
}
