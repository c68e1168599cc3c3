//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when parsing orderings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// The ordering named no field.
    #[error("ordering has an empty field name")]
    EmptyField,

    /// The direction suffix was not recognised.
    #[error("unknown sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidDirection(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
