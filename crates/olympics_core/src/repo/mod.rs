//! Repository layer: one data-access module per catalog entity.
//!
//! # Responsibility
//! - Keep SQL inside the persistence boundary; callers see typed records.
//! - Run record validation and the reference guard before writes.
//!
//! # Invariants
//! - Each operation issues a single write statement; guard lookups precede it.
//! - A write that matches zero rows is `Ok(false)`, never an error.
//! - Database faults are returned as `RepoError::Db` and never retried.
//! - Queries are compile-time constants; caller strings are only bound as
//!   parameters.

pub mod athlete_repo;
pub mod browse;
mod error;
pub mod event_repo;
pub mod integrity;
mod named;
pub mod olympiad_repo;
pub mod participation_repo;
pub mod sport_repo;
pub mod team_repo;

pub use error::{RepoError, RepoResult};
