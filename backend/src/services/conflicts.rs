//! Vacation conflict detection and severity classification.
//!
//! Two requests conflict iff their periods overlap and they belong to
//! different employees. Same-employee overlaps never reach this module: the
//! storage service rejects them as duplicates when the request is filed.

use std::collections::BTreeSet;

use log::debug;

use crate::api::{
    ConflictAnalysis, ConflictImpact, ConflictSeverity, DateRange, EmployeeId, OrganizationId,
    RequestConflict, RequestId,
};
use crate::db::repository::FullRepository;
use crate::models::{Employee, VacationRequest};
use crate::services::error::{AnalysisError, AnalysisResult};
use crate::services::suggestions::compute_coverage_suggestions;

/// Approved requests from other employees whose period overlaps the target.
pub fn find_request_conflicts<'a>(
    target: &VacationRequest,
    requests: &'a [VacationRequest],
) -> Vec<&'a VacationRequest> {
    requests
        .iter()
        .filter(|r| {
            r.id != target.id
                && r.employee_id != target.employee_id
                && r.is_approved()
                && r.period.overlaps(&target.period)
        })
        .collect()
}

/// Symmetric pairwise conflicts across an organization's active requests.
///
/// Every pair of overlapping active (pending or approved) requests from
/// different employees is reported exactly once, ordered by request ID.
pub fn compute_pending_conflicts(requests: &[VacationRequest]) -> Vec<RequestConflict> {
    let active: Vec<&VacationRequest> = requests.iter().filter(|r| r.is_active()).collect();

    let mut conflicts = Vec::new();
    for i in 0..active.len() {
        for j in (i + 1)..active.len() {
            let a = active[i];
            let b = active[j];
            if a.employee_id == b.employee_id {
                continue;
            }
            let overlap_days = a.period.overlap_days(&b.period);
            if overlap_days > 0 {
                conflicts.push(RequestConflict {
                    request_a: a.id,
                    request_b: b.id,
                    employee_a: a.employee_id,
                    employee_b: b.employee_id,
                    overlap_days,
                });
            }
        }
    }

    conflicts
}

/// Severity decision table over the three conflict metrics.
pub fn classify_severity(
    conflict_count: usize,
    coverage_gap_percentage: f64,
    critical_roles_count: usize,
) -> ConflictSeverity {
    if critical_roles_count > 0 || coverage_gap_percentage > 75.0 {
        ConflictSeverity::Critical
    } else if conflict_count > 2 || coverage_gap_percentage > 50.0 {
        ConflictSeverity::High
    } else if conflict_count > 1 || coverage_gap_percentage > 25.0 {
        ConflictSeverity::Medium
    } else {
        ConflictSeverity::Low
    }
}

/// Analyze one target request against the organization's approved requests.
///
/// Pure function over the supplied snapshots. Returns `Ok(None)` when no
/// approved request conflicts with the target: that is the modeled
/// "no conflict" state, not an error.
pub fn compute_conflict_analysis(
    target: &VacationRequest,
    requests: &[VacationRequest],
    roster: &[Employee],
) -> AnalysisResult<Option<ConflictAnalysis>> {
    if roster.is_empty() {
        return Err(AnalysisError::EmptyRoster(target.organization_id));
    }

    let conflicts = find_request_conflicts(target, requests);
    if conflicts.is_empty() {
        return Ok(None);
    }

    let affected: BTreeSet<EmployeeId> = conflicts.iter().map(|r| r.employee_id).collect();
    let total_conflicting_days: i64 = conflicts
        .iter()
        .map(|r| r.period.overlap_days(&target.period))
        .sum();

    let mut departments = BTreeSet::new();
    let mut critical_roles = 0;
    for employee in roster.iter().filter(|e| affected.contains(&e.id)) {
        departments.insert(employee.department);
        if employee.role.is_critical() {
            critical_roles += 1;
        }
    }

    let coverage_gap_percentage =
        (affected.len() as f64 / roster.len() as f64 * 100.0).min(100.0);
    let severity = classify_severity(conflicts.len(), coverage_gap_percentage, critical_roles);

    // The requester cannot cover their own absence; everyone else is fair
    // game for the suggestion ranking.
    let candidates: Vec<Employee> = roster
        .iter()
        .filter(|e| e.id != target.employee_id)
        .cloned()
        .collect();
    let suggestions = compute_coverage_suggestions(
        &candidates,
        requests,
        &target.period,
        &target.coverage_skills,
    );

    Ok(Some(ConflictAnalysis {
        request_id: target.id,
        severity,
        affected_employees: affected.into_iter().collect(),
        conflicting_requests: conflicts.len(),
        total_conflicting_days,
        coverage_gap_percentage,
        impact: ConflictImpact {
            departments: departments.into_iter().collect(),
            critical_roles,
        },
        suggestions,
    }))
}

/// Conflict analysis for one stored request.
///
/// Loads the target, the organization roster, and every request intersecting
/// the target's period, then delegates to [`compute_conflict_analysis`].
pub async fn get_conflict_analysis<R: FullRepository>(
    repo: &R,
    request_id: RequestId,
) -> AnalysisResult<Option<ConflictAnalysis>> {
    let target = repo.fetch_request(request_id).await.map_err(|e| {
        if e.is_not_found() {
            AnalysisError::RequestNotFound(request_id)
        } else {
            AnalysisError::Storage(e)
        }
    })?;

    let roster = repo
        .fetch_roster(target.organization_id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                AnalysisError::OrganizationNotFound(target.organization_id)
            } else {
                AnalysisError::Storage(e)
            }
        })?;
    let requests = repo
        .fetch_requests_in_range(target.organization_id, &target.period)
        .await?;

    debug!(
        "analyzing request {} against {} requests in range",
        request_id,
        requests.len()
    );
    compute_conflict_analysis(&target, &requests, &roster)
}

/// Symmetric conflict overview for an organization over a window.
pub async fn get_pending_conflicts<R: FullRepository>(
    repo: &R,
    organization: OrganizationId,
    window: DateRange,
) -> AnalysisResult<Vec<RequestConflict>> {
    let requests = repo
        .fetch_requests_in_range(organization, &window)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                AnalysisError::OrganizationNotFound(organization)
            } else {
                AnalysisError::Storage(e)
            }
        })?;
    Ok(compute_pending_conflicts(&requests))
}
