use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{DateRange, OrganizationId};
use crate::models::Department;

// =========================================================
// Team coverage types
// =========================================================

/// Coverage picture for a single working day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCoverage {
    pub date: NaiveDate,
    /// `round(available / roster_size * 100)`, always within [0, 100].
    pub coverage_percentage: f64,
    pub available_employees: usize,
    pub on_vacation_employees: usize,
    /// Departments with zero available representation on this day.
    pub department_gaps: Vec<Department>,
}

/// Whole-range coverage report for one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCoverageAnalysis {
    pub organization_id: OrganizationId,
    pub range: DateRange,
    /// Rounded arithmetic mean of the daily percentages.
    pub overall_coverage_percentage: f64,
    /// One record per working day in the range (weekends and holidays are
    /// skipped).
    pub daily: Vec<DailyCoverage>,
    /// Human-readable guidance derived from the daily series.
    pub recommendations: Vec<String>,
}
