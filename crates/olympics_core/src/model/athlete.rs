//! Athlete record.
//!
//! # Invariants
//! - `name` is non-empty.
//! - `weight` and `height` are finite and non-negative; `age` is unsigned.
//! - `photo` holds raw image bytes and is never interpreted by core.

use super::validation::{require_non_negative, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Row id of the `athlete` table.
pub type AthleteId = i64;

/// Sex as recorded on the athlete form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    /// Stored spelling (`M` or `F`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }

    /// Parses the stored spelling; lowercase input is accepted.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim() {
            "M" | "m" => Ok(Self::M),
            "F" | "f" => Ok(Self::F),
            other => Err(ValidationError::UnknownVariant {
                kind: "sex",
                value: other.to_string(),
            }),
        }
    }
}

/// A competitor. Referenced by participations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: Option<AthleteId>,
    pub name: String,
    pub sex: Sex,
    /// Age in whole years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimetres.
    pub height: f64,
    /// Optional portrait, stored as a BLOB.
    pub photo: Option<Vec<u8>>,
}

impl Athlete {
    /// Creates an unsaved athlete without a photo.
    pub fn new(name: impl Into<String>, sex: Sex, age: u32, weight: f64, height: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            sex,
            age,
            weight,
            height,
            photo: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("athlete", "name", &self.name)?;
        require_non_negative("athlete", "weight", self.weight)?;
        require_non_negative("athlete", "height", self.height)
    }
}
