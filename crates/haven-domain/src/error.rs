//! Error types for the relief registry

use thiserror::Error;

use crate::model::camp::CampId;

/// Errors a registry operation can return
///
/// One variant per failure the front end has to explain to the operator,
/// each carrying the data a caller needs to branch on without parsing
/// message text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReliefError {
    /// Malformed caller input (blank field, zero capacity, unknown health status)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Every camp is at capacity; nothing was changed
    #[error("all camps are full, victim cannot be registered")]
    CapacityExceeded,

    /// The distribution target does not exist
    #[error("camp {camp} not found")]
    CampNotFound { camp: CampId },

    /// A requested amount exceeds the pool; both counters left untouched
    #[error(
        "insufficient supplies: requested {requested_medicine} medicine / {requested_food} food, \
         available {available_medicine} / {available_food}"
    )]
    InsufficientSupplies {
        requested_medicine: u64,
        requested_food: u64,
        available_medicine: u64,
        available_food: u64,
    },
}

pub type Result<T> = std::result::Result<T, ReliefError>;
