//! Performance Review Model

use serde::{Deserialize, Serialize};

/// Performance review record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub id: u64,
    pub employee_id: u64,
    /// Employee id of the reviewer (set from the authenticated requester)
    pub reviewer_id: u64,
    /// Review period label, e.g. "2025-H1"
    pub period: String,
    /// Numeric rating, 1.0 - 5.0
    pub rating: f64,
    #[serde(default)]
    pub comments: String,
}

/// Create / overwrite review payload
///
/// Reviews follow the payroll mutation policy: no partial update, a PUT
/// replaces period, rating and comments wholesale. The reviewer is pinned at
/// creation time and survives overwrites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub period: String,
    pub rating: f64,
    #[serde(default)]
    pub comments: String,
}
