use serde::{Deserialize, Serialize};

use crate::api::EmployeeId;
use crate::models::Availability;

/// Ranked candidate employee proposed to absorb coverage work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageSuggestion {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    /// Composite suitability score, 0-100.
    pub score: f64,
    /// Threshold-derived explanation of the ranking.
    pub reason: String,
    pub availability: Availability,
    /// Fraction of the required skills this candidate matches, 0-100.
    pub skill_match_percentage: f64,
    /// The candidate's current workload percentage: what taking on coverage
    /// would stack on top of.
    pub workload_impact_percentage: f64,
}
