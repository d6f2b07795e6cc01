//! Victim - A displaced person registered into exactly one camp
//!
//! Victim is an Entity, but an immutable one: once registered, the
//! record never changes, is never transferred to another camp, and is
//! never deleted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::camp::CampId;
use crate::error::ReliefError;

/// Unique identifier for a Victim
///
/// Sequential, starting at 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VictimId(u32);

impl VictimId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for VictimId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Triage state recorded at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Needs immediate medical attention
    Critical,
    /// Stable
    Normal,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Critical => "critical",
            HealthStatus::Normal => "normal",
        }
    }

    /// All statuses (useful for selection prompts)
    pub fn all() -> &'static [HealthStatus] {
        &[HealthStatus::Critical, HealthStatus::Normal]
    }
}

impl core::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = ReliefError;

    /// Accepts exactly `"critical"` or `"normal"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(HealthStatus::Critical),
            "normal" => Ok(HealthStatus::Normal),
            other => Err(ReliefError::InvalidInput {
                reason: format!(
                    "health status must be 'critical' or 'normal', got '{}'",
                    other
                ),
            }),
        }
    }
}

/// Victim record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Victim {
    /// Unique identifier (Entity identity)
    id: VictimId,
    name: String,
    /// Place of origin
    place: String,
    /// The camp assigned at registration (never changes)
    camp: CampId,
    health: HealthStatus,
}

impl Victim {
    pub fn new(
        id: VictimId,
        name: impl Into<String>,
        place: impl Into<String>,
        camp: CampId,
        health: HealthStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            place: place.into(),
            camp,
            health,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> VictimId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn camp(&self) -> CampId {
        self.camp
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }
}
