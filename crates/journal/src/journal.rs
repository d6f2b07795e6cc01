//! OperationJournal - what happened during a session
//!
//! The registry itself stays pure; the front end records every operation
//! it performs here, denials included, so an operator can answer "what
//! did I just do" without scrolling terminal history. Nothing in here
//! outlives the process.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use haven_domain::{Admission, CampId, HealthStatus, ReliefError};

/// Journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub timestamp: String,
    pub kind: EventKind,
    /// Camp involved, when the operation names one
    pub camp: Option<CampId>,
    pub success: bool,
    pub detail: String,
}

/// Kinds of journaled operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    CampOpened,
    VictimAdmitted,
    AdmissionDenied,
    SuppliesReceived,
    SuppliesDispatched,
    DispatchDenied,
}

/// Bounded journal of registry operations
#[derive(Debug)]
pub struct OperationJournal {
    entries: VecDeque<JournalEntry>,
    max_entries: usize,
}

impl OperationJournal {
    /// Create a new journal holding at most `max_entries` records
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Record an entry, evicting the oldest when the journal is full
    pub fn record(&mut self, entry: JournalEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Record a newly opened camp
    pub fn record_camp_opened(&mut self, camp: CampId, capacity: u32) {
        self.record(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: EventKind::CampOpened,
            camp: Some(camp),
            success: true,
            detail: format!("capacity {}", capacity),
        });
    }

    /// Record a successful victim registration
    pub fn record_admission(&mut self, admission: &Admission, health: HealthStatus) {
        self.record(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: EventKind::VictimAdmitted,
            camp: Some(admission.camp),
            success: true,
            detail: format!("victim {} ({})", admission.victim, health),
        });
    }

    /// Record a rejected victim registration
    pub fn record_admission_denied(&mut self, error: &ReliefError) {
        self.record(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: EventKind::AdmissionDenied,
            camp: None,
            success: false,
            detail: error.to_string(),
        });
    }

    /// Record incoming supplies
    pub fn record_supplies_received(&mut self, medicine: u64, food: u64) {
        self.record(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: EventKind::SuppliesReceived,
            camp: None,
            success: true,
            detail: format!("{} medicine, {} food", medicine, food),
        });
    }

    /// Record a successful dispatch
    pub fn record_dispatch(&mut self, camp: CampId, medicine: u64, food: u64) {
        self.record(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: EventKind::SuppliesDispatched,
            camp: Some(camp),
            success: true,
            detail: format!("{} medicine, {} food", medicine, food),
        });
    }

    /// Record a rejected dispatch
    pub fn record_dispatch_denied(&mut self, camp: CampId, error: &ReliefError) {
        self.record(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: EventKind::DispatchDenied,
            camp: Some(camp),
            success: false,
            detail: error.to_string(),
        });
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> Vec<&JournalEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Most recent denials first
    pub fn recent_denials(&self, limit: usize) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect()
    }

    /// Entry and denial counts
    pub fn stats(&self) -> JournalStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.success).count();

        JournalStats {
            total_entries: total,
            denial_count: denials,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Journal statistics
#[derive(Debug, Clone)]
pub struct JournalStats {
    pub total_entries: usize,
    pub denial_count: usize,
}

impl Default for OperationJournal {
    fn default() -> Self {
        Self::new(10_000)
    }
}
