//! Camp - A relief shelter with fixed capacity
//!
//! Camp is an Entity (its identifier persists for the life of the
//! operation and is never reused). Capacity is fixed at creation;
//! occupancy only ever grows through [`Camp::admit`], and camps are
//! never closed or deleted.

use serde::{Deserialize, Serialize};

use super::victim::VictimId;
use crate::error::{ReliefError, Result};

/// Unique identifier for a Camp
///
/// Sequential, starting at 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CampId(u32);

impl CampId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for CampId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Camp - a relief shelter unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camp {
    /// Unique identifier (Entity identity)
    id: CampId,
    /// Maximum number of victims this camp can hold (fixed at creation)
    capacity: u32,
    /// Victims assigned to this camp, in admission order
    victims: Vec<VictimId>,
}

impl Camp {
    /// Create a new Camp with an empty victim list
    pub fn new(id: CampId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            victims: Vec::new(),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> CampId {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Count of victims currently assigned here
    ///
    /// Derived from the victim list, so it can never drift out of sync
    /// with it.
    pub fn occupancy(&self) -> u32 {
        self.victims.len() as u32
    }

    pub fn victims(&self) -> &[VictimId] {
        &self.victims
    }

    /// Whether this camp can take one more victim
    pub fn has_vacancy(&self) -> bool {
        self.occupancy() < self.capacity
    }

    // ========== Mutations ==========

    /// Admit a victim into this camp
    ///
    /// Occupancy never exceeds capacity: a full camp rejects the
    /// admission and stays unchanged.
    pub fn admit(&mut self, victim: VictimId) -> Result<()> {
        if !self.has_vacancy() {
            return Err(ReliefError::CapacityExceeded);
        }
        self.victims.push(victim);
        Ok(())
    }
}
