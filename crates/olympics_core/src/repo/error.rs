use crate::db::DbError;
use crate::model::validation::ValidationError;
use crate::repo::integrity::ReferenceTable;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of a repository operation.
///
/// Zero-row writes are not represented here; they surface as `Ok(false)`.
#[derive(Debug)]
pub enum RepoError {
    /// The record failed `validate()`; nothing was sent to the database.
    Validation(ValidationError),
    /// A foreign key names a row that does not exist; nothing was written.
    InvalidReference { table: ReferenceTable, id: i64 },
    /// Connectivity, statement or constraint failure reported by SQLite.
    Db(DbError),
    /// A persisted value could not be decoded into the model.
    InvalidData(String),
}

impl RepoError {
    /// Returns whether this is a database constraint violation, such as a
    /// duplicate participation key or deleting a still-referenced row.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_constraint_violation())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidReference { table, id } => {
                write!(f, "invalid reference: no {table} with id {id}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidReference { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
