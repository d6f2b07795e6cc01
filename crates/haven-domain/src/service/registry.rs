//! ReliefRegistry - the bookkeeping core of the relief operation
//!
//! The registry is the single stateful object of the system. It owns the
//! camp roster, the victim records, and the supply pools, and it is the
//! only place the bookkeeping rules are enforced:
//!
//! 1. A camp's occupancy never exceeds its capacity.
//! 2. A victim is assigned to the lowest-numbered camp with a vacancy at
//!    registration time, and is never moved afterwards.
//! 3. The supply counters never go negative; a dispatch that cannot be
//!    covered in full is rejected without touching either counter.
//!
//! Callers construct and own the registry; there is no process-wide
//! instance.

use std::collections::BTreeMap;

use crate::error::{ReliefError, Result};
use crate::model::camp::{Camp, CampId};
use crate::model::supply::SupplyLedger;
use crate::model::victim::{HealthStatus, Victim, VictimId};

use super::report::{CampSummary, Report};

/// The outcome of a successful victim registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub victim: VictimId,
    pub camp: CampId,
}

/// In-memory registry of camps, victims, and supplies
///
/// `BTreeMap` keyed by the raw identifier keeps every scan in ascending
/// id order, which is what the assignment and tie-break rules require.
#[derive(Debug, Clone)]
pub struct ReliefRegistry {
    camps: BTreeMap<u32, Camp>,
    victims: BTreeMap<u32, Victim>,
    supplies: SupplyLedger,
    next_camp_id: u32,
    next_victim_id: u32,
}

impl ReliefRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            camps: BTreeMap::new(),
            victims: BTreeMap::new(),
            supplies: SupplyLedger::new(),
            next_camp_id: 1,
            next_victim_id: 1,
        }
    }

    // ========== Operations ==========

    /// Open a new camp with the given capacity
    ///
    /// Identifiers are sequential from 1 and never reused. Zero capacity
    /// is rejected: such a camp could never admit anyone and would only
    /// distort the report.
    pub fn open_camp(&mut self, capacity: u32) -> Result<CampId> {
        if capacity == 0 {
            return Err(ReliefError::InvalidInput {
                reason: "camp capacity must be a positive number".to_string(),
            });
        }
        let id = CampId::new(self.next_camp_id);
        self.camps.insert(id.get(), Camp::new(id, capacity));
        self.next_camp_id += 1;
        Ok(id)
    }

    /// Register a victim into the first camp with a vacancy
    ///
    /// Camps are scanned in ascending id order. The victim record is only
    /// created once a camp has been found, so a failed registration
    /// leaves the registry exactly as it was.
    pub fn register_victim(
        &mut self,
        name: impl Into<String>,
        place: impl Into<String>,
        health: HealthStatus,
    ) -> Result<Admission> {
        let name = name.into();
        let place = place.into();
        if name.trim().is_empty() {
            return Err(ReliefError::InvalidInput {
                reason: "victim name must not be blank".to_string(),
            });
        }
        if place.trim().is_empty() {
            return Err(ReliefError::InvalidInput {
                reason: "place of origin must not be blank".to_string(),
            });
        }

        let camp = self
            .camps
            .values_mut()
            .find(|c| c.has_vacancy())
            .ok_or(ReliefError::CapacityExceeded)?;

        let victim_id = VictimId::new(self.next_victim_id);
        camp.admit(victim_id)?;
        let admission = Admission {
            victim: victim_id,
            camp: camp.id(),
        };

        self.victims
            .insert(victim_id.get(), Victim::new(victim_id, name, place, admission.camp, health));
        self.next_victim_id += 1;

        Ok(admission)
    }

    /// Add incoming supplies to the global pools
    pub fn receive_supplies(&mut self, medicine: u64, food: u64) {
        self.supplies.receive(medicine, food);
    }

    /// Dispatch supplies to a camp
    ///
    /// The pools are global: the camp id names the recipient, but there
    /// is no per-camp stock to update. The target must exist and both
    /// requested amounts must be covered, otherwise nothing changes.
    pub fn dispatch_supplies(&mut self, camp: CampId, medicine: u64, food: u64) -> Result<()> {
        if !self.camps.contains_key(&camp.get()) {
            return Err(ReliefError::CampNotFound { camp });
        }
        self.supplies.issue(medicine, food)
    }

    /// Aggregate the current state of the operation
    ///
    /// Total function: with no camps the busiest-camp slot is simply
    /// empty. On equal occupancy the lowest-numbered camp wins, which
    /// falls out of scanning in ascending id order with a strict
    /// comparison.
    pub fn report(&self) -> Report {
        let mut busiest: Option<CampSummary> = None;
        for camp in self.camps.values() {
            let beats_current = busiest
                .as_ref()
                .map_or(true, |b| camp.occupancy() > b.occupancy);
            if beats_current {
                busiest = Some(CampSummary {
                    camp: camp.id(),
                    occupancy: camp.occupancy(),
                    capacity: camp.capacity(),
                });
            }
        }

        Report {
            total_camps: self.camps.len(),
            total_victims: self.victims.len(),
            busiest_camp: busiest,
            medicine: self.supplies.medicine(),
            food: self.supplies.food(),
        }
    }

    // ========== Read surface ==========

    pub fn camp(&self, id: CampId) -> Option<&Camp> {
        self.camps.get(&id.get())
    }

    /// Camps in ascending id order
    pub fn camps(&self) -> impl Iterator<Item = &Camp> {
        self.camps.values()
    }

    pub fn camp_count(&self) -> usize {
        self.camps.len()
    }

    pub fn victim(&self, id: VictimId) -> Option<&Victim> {
        self.victims.get(&id.get())
    }

    /// Victims in ascending id order
    pub fn victims(&self) -> impl Iterator<Item = &Victim> {
        self.victims.values()
    }

    pub fn victim_count(&self) -> usize {
        self.victims.len()
    }

    pub fn supplies(&self) -> &SupplyLedger {
        &self.supplies
    }
}

impl Default for ReliefRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_camps(capacities: &[u32]) -> ReliefRegistry {
        let mut registry = ReliefRegistry::new();
        for &capacity in capacities {
            registry.open_camp(capacity).unwrap();
        }
        registry
    }

    #[test]
    fn test_camp_ids_sequential_from_one() {
        let mut registry = ReliefRegistry::new();

        assert_eq!(registry.open_camp(5).unwrap(), CampId::new(1));
        assert_eq!(registry.open_camp(3).unwrap(), CampId::new(2));
        assert_eq!(registry.open_camp(8).unwrap(), CampId::new(3));

        for camp in registry.camps() {
            assert_eq!(camp.occupancy(), 0);
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut registry = ReliefRegistry::new();

        let result = registry.open_camp(0);
        assert!(matches!(result, Err(ReliefError::InvalidInput { .. })));
        assert_eq!(registry.camp_count(), 0);

        // The failed attempt did not burn an identifier
        assert_eq!(registry.open_camp(1).unwrap(), CampId::new(1));
    }

    #[test]
    fn test_registration_assigns_lowest_camp_with_vacancy() {
        let mut registry = registry_with_camps(&[1, 2]);

        let first = registry
            .register_victim("Asha Verma", "Kharun", HealthStatus::Normal)
            .unwrap();
        assert_eq!(first.camp, CampId::new(1));

        // Camp 1 is now full, so camp 2 takes the next two
        let second = registry
            .register_victim("Binod Rai", "Kharun", HealthStatus::Critical)
            .unwrap();
        assert_eq!(second.camp, CampId::new(2));

        let third = registry
            .register_victim("Chitra Joshi", "Motipur", HealthStatus::Normal)
            .unwrap();
        assert_eq!(third.camp, CampId::new(2));
    }

    #[test]
    fn test_single_camp_fills_then_rejects() {
        // The worked example: one camp of capacity 2
        let mut registry = registry_with_camps(&[2]);

        let a = registry
            .register_victim("A", "X", HealthStatus::Normal)
            .unwrap();
        assert_eq!(a.camp, CampId::new(1));
        assert_eq!(registry.camp(a.camp).unwrap().occupancy(), 1);

        let b = registry
            .register_victim("B", "Y", HealthStatus::Critical)
            .unwrap();
        assert_eq!(b.camp, CampId::new(1));
        assert_eq!(registry.camp(b.camp).unwrap().occupancy(), 2);

        let c = registry.register_victim("C", "Z", HealthStatus::Normal);
        assert_eq!(c, Err(ReliefError::CapacityExceeded));
    }

    #[test]
    fn test_failed_registration_mutates_nothing() {
        let mut registry = registry_with_camps(&[1]);
        registry
            .register_victim("Asha Verma", "Kharun", HealthStatus::Normal)
            .unwrap();

        let result = registry.register_victim("Binod Rai", "Kharun", HealthStatus::Normal);
        assert_eq!(result, Err(ReliefError::CapacityExceeded));

        assert_eq!(registry.victim_count(), 1);
        assert_eq!(registry.camp(CampId::new(1)).unwrap().occupancy(), 1);

        // The denied registration did not burn a victim identifier
        registry.open_camp(1).unwrap();
        let next = registry
            .register_victim("Binod Rai", "Kharun", HealthStatus::Normal)
            .unwrap();
        assert_eq!(next.victim, VictimId::new(2));
    }

    #[test]
    fn test_no_camps_rejects_registration() {
        let mut registry = ReliefRegistry::new();
        let result = registry.register_victim("Asha Verma", "Kharun", HealthStatus::Normal);
        assert_eq!(result, Err(ReliefError::CapacityExceeded));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut registry = registry_with_camps(&[5]);

        for (name, place) in [("", "Kharun"), ("   ", "Kharun"), ("Asha", ""), ("Asha", " ")] {
            let result = registry.register_victim(name, place, HealthStatus::Normal);
            assert!(
                matches!(result, Err(ReliefError::InvalidInput { .. })),
                "expected InvalidInput for {:?}/{:?}",
                name,
                place
            );
        }
        assert_eq!(registry.victim_count(), 0);
    }

    #[test]
    fn test_victim_record_lookup() {
        let mut registry = registry_with_camps(&[2]);
        let admission = registry
            .register_victim("Asha Verma", "Kharun", HealthStatus::Critical)
            .unwrap();

        let victim = registry.victim(admission.victim).unwrap();
        assert_eq!(victim.name(), "Asha Verma");
        assert_eq!(victim.place(), "Kharun");
        assert_eq!(victim.camp(), admission.camp);
        assert_eq!(victim.health(), HealthStatus::Critical);

        assert!(registry.victim(VictimId::new(99)).is_none());
    }

    #[test]
    fn test_dispatch_to_unknown_camp() {
        let mut registry = registry_with_camps(&[2]);
        registry.receive_supplies(10, 5);

        let result = registry.dispatch_supplies(CampId::new(9), 1, 1);
        assert_eq!(
            result,
            Err(ReliefError::CampNotFound {
                camp: CampId::new(9)
            })
        );
        assert_eq!(registry.supplies().medicine(), 10);
        assert_eq!(registry.supplies().food(), 5);
    }

    #[test]
    fn test_dispatch_short_leaves_both_pools() {
        let mut registry = registry_with_camps(&[2]);
        registry.receive_supplies(10, 5);

        let result = registry.dispatch_supplies(CampId::new(1), 12, 0);
        assert!(matches!(
            result,
            Err(ReliefError::InsufficientSupplies { .. })
        ));
        assert_eq!(registry.supplies().medicine(), 10);
        assert_eq!(registry.supplies().food(), 5);
    }

    #[test]
    fn test_dispatch_decrements_both_pools() {
        let mut registry = registry_with_camps(&[2]);
        registry.receive_supplies(10, 5);

        registry.dispatch_supplies(CampId::new(1), 4, 2).unwrap();
        assert_eq!(registry.supplies().medicine(), 6);
        assert_eq!(registry.supplies().food(), 3);
    }

    #[test]
    fn test_report_on_empty_registry() {
        let registry = ReliefRegistry::new();
        let report = registry.report();

        assert_eq!(report.total_camps, 0);
        assert_eq!(report.total_victims, 0);
        assert_eq!(report.busiest_camp, None);
        assert_eq!(report.medicine, 0);
        assert_eq!(report.food, 0);
    }

    #[test]
    fn test_report_aggregates() {
        let mut registry = registry_with_camps(&[1, 3]);
        registry
            .register_victim("Asha Verma", "Kharun", HealthStatus::Normal)
            .unwrap();
        registry
            .register_victim("Binod Rai", "Kharun", HealthStatus::Normal)
            .unwrap();
        registry
            .register_victim("Chitra Joshi", "Motipur", HealthStatus::Critical)
            .unwrap();
        registry.receive_supplies(10, 5);
        registry.dispatch_supplies(CampId::new(2), 4, 2).unwrap();

        let report = registry.report();
        assert_eq!(report.total_camps, 2);
        assert_eq!(report.total_victims, 3);
        assert_eq!(report.medicine, 6);
        assert_eq!(report.food, 3);

        let busiest = report.busiest_camp.unwrap();
        assert_eq!(busiest.camp, CampId::new(2));
        assert_eq!(busiest.occupancy, 2);
        assert_eq!(busiest.capacity, 3);
    }

    #[test]
    fn test_report_tie_breaks_on_lowest_id() {
        let mut registry = registry_with_camps(&[1, 1]);
        registry
            .register_victim("Asha Verma", "Kharun", HealthStatus::Normal)
            .unwrap();
        registry
            .register_victim("Binod Rai", "Kharun", HealthStatus::Normal)
            .unwrap();

        // Both camps hold one victim each; camp 1 wins the tie
        let busiest = registry.report().busiest_camp.unwrap();
        assert_eq!(busiest.camp, CampId::new(1));
        assert_eq!(busiest.occupancy, 1);
    }
}
