//! Team coverage reporting.
//!
//! For each working day in a range, computes the fraction of the roster not
//! on approved vacation, flags departments that vacate entirely, and derives
//! textual recommendations from the aggregate numbers.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use log::debug;

use crate::api::{DailyCoverage, DateRange, OrganizationId, TeamCoverageAnalysis};
use crate::db::repository::FullRepository;
use crate::models::{Department, Employee, VacationRequest};
use crate::services::error::{AnalysisError, AnalysisResult};
use crate::services::workdays::{holiday_date_set, is_working_day};

/// Daily percentage below which a day counts as critically staffed.
const CRITICAL_COVERAGE_THRESHOLD: f64 = 70.0;

/// Mean coverage below which staggering vacations is recommended.
const STAGGER_COVERAGE_THRESHOLD: f64 = 80.0;

/// Coverage picture for one day.
///
/// The percentage denominator is the full roster size, department-blind;
/// gaps are computed department-wise. Callers must guarantee a non-empty
/// roster.
pub fn compute_daily_coverage(
    roster: &[Employee],
    requests: &[VacationRequest],
    day: NaiveDate,
) -> DailyCoverage {
    let on_vacation: BTreeSet<_> = requests
        .iter()
        .filter(|r| r.is_approved() && r.period.contains(day))
        .map(|r| r.employee_id)
        .collect();

    let mut vacated_departments = BTreeSet::new();
    let mut covered_departments = BTreeSet::new();
    let mut on_vacation_count = 0;
    for employee in roster {
        if on_vacation.contains(&employee.id) {
            on_vacation_count += 1;
            vacated_departments.insert(employee.department);
        } else {
            covered_departments.insert(employee.department);
        }
    }

    let available_count = roster.len() - on_vacation_count;
    let coverage_percentage = (available_count as f64 / roster.len() as f64 * 100.0).round();

    // A department is a gap only when it vacates entirely: every member on
    // vacation, nobody left to pick up the work.
    let department_gaps: Vec<Department> = vacated_departments
        .difference(&covered_departments)
        .copied()
        .collect();

    DailyCoverage {
        date: day,
        coverage_percentage,
        available_employees: available_count,
        on_vacation_employees: on_vacation_count,
        department_gaps,
    }
}

/// Derive guidance from the daily series. Rules are independent and applied
/// in fixed order; when none fires a single positive message is emitted.
pub fn build_recommendations(daily: &[DailyCoverage], overall: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    let critical_days = daily
        .iter()
        .filter(|d| d.coverage_percentage < CRITICAL_COVERAGE_THRESHOLD)
        .count();
    if critical_days > 0 {
        recommendations.push(format!(
            "{} days with critical staffing (<70% coverage)",
            critical_days
        ));
    }

    let gap_departments: BTreeSet<Department> = daily
        .iter()
        .flat_map(|d| d.department_gaps.iter().copied())
        .collect();
    if !gap_departments.is_empty() {
        let names: Vec<&str> = gap_departments.iter().map(|d| d.as_str()).collect();
        recommendations.push(format!("Department coverage gaps: {}", names.join(", ")));
    }

    if overall < STAGGER_COVERAGE_THRESHOLD {
        recommendations
            .push("Consider staggering vacation periods to maintain coverage".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Good staffing coverage across the selected period".to_string());
    }

    recommendations
}

/// Whole-range coverage report over supplied snapshots.
///
/// Weekends and holidays are skipped: nobody needs covering on a day nobody
/// works. An empty roster is rejected, the percentage would be undefined.
pub fn compute_team_coverage(
    organization: OrganizationId,
    range: DateRange,
    roster: &[Employee],
    requests: &[VacationRequest],
    holidays: &HashSet<NaiveDate>,
) -> AnalysisResult<TeamCoverageAnalysis> {
    if roster.is_empty() {
        return Err(AnalysisError::EmptyRoster(organization));
    }

    let daily: Vec<DailyCoverage> = range
        .iter_days()
        .filter(|day| is_working_day(*day, holidays))
        .map(|day| compute_daily_coverage(roster, requests, day))
        .collect();

    let overall_coverage_percentage = if daily.is_empty() {
        // No working day in the range: nothing needed covering.
        100.0
    } else {
        (daily.iter().map(|d| d.coverage_percentage).sum::<f64>() / daily.len() as f64).round()
    };

    let recommendations = build_recommendations(&daily, overall_coverage_percentage);

    Ok(TeamCoverageAnalysis {
        organization_id: organization,
        range,
        overall_coverage_percentage,
        daily,
        recommendations,
    })
}

/// Team coverage report for one stored organization.
///
/// Fetches the roster, the requests intersecting the range, and the holiday
/// calendar, then delegates to [`compute_team_coverage`].
pub async fn get_team_coverage<R: FullRepository>(
    repo: &R,
    organization: OrganizationId,
    range: DateRange,
) -> AnalysisResult<TeamCoverageAnalysis> {
    let roster = repo.fetch_roster(organization).await.map_err(|e| {
        if e.is_not_found() {
            AnalysisError::OrganizationNotFound(organization)
        } else {
            AnalysisError::Storage(e)
        }
    })?;
    let requests = repo.fetch_requests_in_range(organization, &range).await?;
    let holidays = repo.fetch_holidays_in_range(&range).await?;

    debug!(
        "computing coverage for org {} over {} ({} roster, {} requests)",
        organization,
        range,
        roster.len(),
        requests.len()
    );
    compute_team_coverage(
        organization,
        range,
        &roster,
        &requests,
        &holiday_date_set(&holidays),
    )
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod coverage_tests;
