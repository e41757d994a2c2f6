//! Entity model for the Olympics catalog.
//!
//! # Responsibility
//! - Define the six catalog records and their closed enums.
//! - Provide `validate()` checks that repositories run before writes.
//!
//! # Invariants
//! - Records are plain data: every field is public and independently settable.
//! - Construction never validates; an unsaved record has `id: None`.

pub mod athlete;
pub mod event;
pub mod olympiad;
pub mod participation;
pub mod sport;
pub mod team;
pub mod validation;
