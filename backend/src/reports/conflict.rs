use serde::{Deserialize, Serialize};

use crate::api::{EmployeeId, RequestId};
use crate::models::Department;
use crate::reports::suggestion::CoverageSuggestion;

// =========================================================
// Conflict analysis types
// =========================================================

/// Four-tier classification of how disruptive a conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for ConflictSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConflictSeverity::Low => "low",
            ConflictSeverity::Medium => "medium",
            ConflictSeverity::High => "high",
            ConflictSeverity::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Organizational blast radius of a conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictImpact {
    /// Distinct departments among the conflicting employees.
    pub departments: Vec<Department>,
    /// Number of conflicting employees holding a critical role.
    pub critical_roles: usize,
}

/// Full conflict analysis for one target request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictAnalysis {
    pub request_id: RequestId,
    pub severity: ConflictSeverity,
    /// Distinct employees whose approved requests overlap the target.
    pub affected_employees: Vec<EmployeeId>,
    /// Number of conflicting requests.
    pub conflicting_requests: usize,
    /// Sum of per-conflict overlap lengths against the target, in days.
    pub total_conflicting_days: i64,
    /// `min(100, conflicting_employees / roster_size * 100)`.
    pub coverage_gap_percentage: f64,
    pub impact: ConflictImpact,
    /// Ranked candidates who could absorb the target's coverage needs.
    pub suggestions: Vec<CoverageSuggestion>,
}

/// One symmetric conflict pair from the organization-wide pending view.
///
/// Request A conflicts with B iff B conflicts with A; each pair is emitted
/// exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConflict {
    pub request_a: RequestId,
    pub request_b: RequestId,
    pub employee_a: EmployeeId,
    pub employee_b: EmployeeId,
    pub overlap_days: i64,
}
