//! # Haven Domain
//!
//! The bookkeeping core of a relief operation: camps, victims, and the
//! supply pools, plus the registry service that ties them together.
//!
//! Everything in this crate is synchronous, in-memory state owned by the
//! caller. There is no global instance, no persistence, and no I/O -
//! front ends construct a [`ReliefRegistry`], drive it, and render the
//! results however they like.

pub mod error;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use error::{ReliefError, Result};
pub use model::{
    camp::{Camp, CampId},
    supply::SupplyLedger,
    victim::{HealthStatus, Victim, VictimId},
};
pub use service::{
    registry::{Admission, ReliefRegistry},
    report::{CampSummary, Report},
};
