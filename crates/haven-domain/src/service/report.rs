//! Report aggregation over the registry

use serde::{Deserialize, Serialize};

use crate::model::camp::CampId;

/// Snapshot of the camp currently holding the most victims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampSummary {
    pub camp: CampId,
    pub occupancy: u32,
    pub capacity: u32,
}

/// Operation-wide status report
///
/// `busiest_camp` is `None` while no camps have been opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_camps: usize,
    pub total_victims: usize,
    pub busiest_camp: Option<CampSummary>,
    pub medicine: u64,
    pub food: u64,
}
