//! Field-level validation shared by all catalog records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a record (or a caller-supplied value) is not acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// A numeric field is negative, NaN or infinite.
    NegativeValue {
        entity: &'static str,
        field: &'static str,
    },
    /// A stored or typed spelling does not name any enum variant.
    UnknownVariant { kind: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
            Self::NegativeValue { entity, field } => {
                write!(f, "{entity}.{field} must be a non-negative number")
            }
            Self::UnknownVariant { kind, value } => write!(f, "unknown {kind} `{value}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::NegativeValue { entity, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_non_negative, require_text, ValidationError};

    #[test]
    fn require_text_rejects_whitespace_only() {
        let err = require_text("sport", "name", "   ").unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                entity: "sport",
                field: "name"
            }
        );
        assert!(require_text("sport", "name", " Judo ").is_ok());
    }

    #[test]
    fn require_non_negative_rejects_nan_and_negative() {
        assert!(require_non_negative("athlete", "weight", -0.5).is_err());
        assert!(require_non_negative("athlete", "weight", f64::NAN).is_err());
        assert!(require_non_negative("athlete", "weight", f64::INFINITY).is_err());
        assert!(require_non_negative("athlete", "weight", 0.0).is_ok());
    }

    #[test]
    fn display_names_entity_and_field() {
        let err = ValidationError::NegativeValue {
            entity: "athlete",
            field: "height",
        };
        assert_eq!(err.to_string(), "athlete.height must be a non-negative number");
    }
}
