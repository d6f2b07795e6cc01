//! Supply ledger - the global medicine and food pools
//!
//! One process-wide pair of counters. Distribution draws from the global
//! pool regardless of which camp receives the goods; there is no
//! per-camp sub-ledger.

use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, Result};

/// The global supply counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyLedger {
    medicine: u64,
    food: u64,
}

impl SupplyLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn medicine(&self) -> u64 {
        self.medicine
    }

    pub fn food(&self) -> u64 {
        self.food
    }

    /// Add incoming stock to the pools
    ///
    /// There is no upper bound on stock; additions saturate at the
    /// counter width.
    pub fn receive(&mut self, medicine: u64, food: u64) {
        self.medicine = self.medicine.saturating_add(medicine);
        self.food = self.food.saturating_add(food);
    }

    /// Draw from both pools at once
    ///
    /// Either both withdrawals are covered and both happen, or neither
    /// does. The counters can never go negative.
    pub fn issue(&mut self, medicine: u64, food: u64) -> Result<()> {
        if medicine > self.medicine || food > self.food {
            return Err(ReliefError::InsufficientSupplies {
                requested_medicine: medicine,
                requested_food: food,
                available_medicine: self.medicine,
                available_food: self.food,
            });
        }
        self.medicine -= medicine;
        self.food -= food;
        Ok(())
    }
}
