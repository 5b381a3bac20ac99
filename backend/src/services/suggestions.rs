//! Coverage suggestion ranking.
//!
//! Scores every candidate employee against a coverage gap (required skill
//! set + date window) and returns the best matches. Candidates already on
//! approved vacation during the window never enter the pool.

use log::debug;

use crate::api::{CoverageSuggestion, DateRange, EmployeeId, OrganizationId};
use crate::db::repository::FullRepository;
use crate::models::{Availability, Employee, Role, VacationRequest};
use crate::services::error::{AnalysisError, AnalysisResult};

/// Maximum number of suggestions returned to the caller.
const MAX_SUGGESTIONS: usize = 10;

/// Baseline match percentage when the gap lists no required skills:
/// no constraint means default-compatible.
const UNCONSTRAINED_SKILL_MATCH: f64 = 75.0;

/// Fraction of the required skills the candidate covers, as 0-100.
///
/// Matching is case-insensitive and bidirectional-substring ("postgres"
/// matches a required "postgresql" and vice versa). Each required skill
/// counts at most once, so the result never exceeds 100.
pub(crate) fn skill_match_percentage(candidate_skills: &[String], required: &[String]) -> f64 {
    if required.is_empty() {
        return UNCONSTRAINED_SKILL_MATCH;
    }

    let matched = required
        .iter()
        .filter(|req| {
            let req_lc = req.to_lowercase();
            candidate_skills.iter().any(|skill| {
                let skill_lc = skill.to_lowercase();
                skill_lc.contains(&req_lc) || req_lc.contains(&skill_lc)
            })
        })
        .count();

    matched as f64 / required.len() as f64 * 100.0
}

fn availability_bonus(availability: Availability) -> f64 {
    match availability {
        Availability::Available => 25.0,
        Availability::Limited => 15.0,
        Availability::Unavailable => 0.0,
    }
}

fn role_bonus(role: Role) -> f64 {
    match role {
        Role::Admin => 15.0,
        _ => 10.0,
    }
}

/// Composite suitability score for one candidate, clamped to [0, 100].
pub(crate) fn coverage_score(candidate: &Employee, skill_match: f64) -> f64 {
    let score = 50.0
        + skill_match * 0.4
        + (100.0 - candidate.current_workload as f64) * 0.2
        + availability_bonus(candidate.availability)
        + role_bonus(candidate.role);
    score.clamp(0.0, 100.0)
}

/// Threshold-derived explanation of a candidate's ranking.
fn build_reason(candidate: &Employee, skill_match: f64) -> String {
    let mut parts: Vec<String> = Vec::new();

    if skill_match > 80.0 {
        parts.push("excellent skill match".to_string());
    } else if skill_match > 60.0 {
        parts.push("good skill match".to_string());
    } else if skill_match > 40.0 {
        parts.push("partial skill match".to_string());
    }

    match candidate.availability {
        Availability::Limited => parts.push("limited availability".to_string()),
        Availability::Unavailable => parts.push("marked unavailable".to_string()),
        Availability::Available => {}
    }

    if candidate.current_workload < 50 {
        parts.push("low current workload".to_string());
    } else if candidate.current_workload > 80 {
        parts.push("high workload impact".to_string());
    }

    let base = if parts.is_empty() {
        "available for coverage".to_string()
    } else {
        parts.join(", ")
    };
    format!("{} ({} department)", base, candidate.department)
}

/// Is the employee away on approved vacation at any point of the window?
pub(crate) fn on_approved_vacation(
    employee_id: EmployeeId,
    window: &DateRange,
    requests: &[VacationRequest],
) -> bool {
    requests.iter().any(|r| {
        r.employee_id == employee_id && r.is_approved() && r.period.overlaps(window)
    })
}

/// Rank candidates for covering a gap.
///
/// Pure function over the supplied snapshots: employees on approved vacation
/// during the window are dropped, the rest are scored, sorted descending and
/// capped at the top 10. Ties keep roster order, so identical inputs always
/// produce identical output.
pub fn compute_coverage_suggestions(
    roster: &[Employee],
    requests: &[VacationRequest],
    window: &DateRange,
    required_skills: &[String],
) -> Vec<CoverageSuggestion> {
    let mut suggestions: Vec<CoverageSuggestion> = roster
        .iter()
        .filter(|e| !on_approved_vacation(e.id, window, requests))
        .map(|candidate| {
            let skill_match = skill_match_percentage(&candidate.skills, required_skills);
            CoverageSuggestion {
                employee_id: candidate.id,
                employee_name: candidate.name.clone(),
                score: coverage_score(candidate, skill_match),
                reason: build_reason(candidate, skill_match),
                availability: candidate.availability,
                skill_match_percentage: skill_match,
                workload_impact_percentage: candidate.current_workload as f64,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Rank coverage candidates for an organization over a window.
///
/// Fetches the roster and request snapshots, then delegates to
/// [`compute_coverage_suggestions`]. An empty roster yields an empty list;
/// a missing organization is an error.
pub async fn get_coverage_suggestions<R: FullRepository>(
    repo: &R,
    organization: OrganizationId,
    window: DateRange,
    required_skills: &[String],
) -> AnalysisResult<Vec<CoverageSuggestion>> {
    let roster = repo.fetch_roster(organization).await.map_err(|e| {
        if e.is_not_found() {
            AnalysisError::OrganizationNotFound(organization)
        } else {
            AnalysisError::Storage(e)
        }
    })?;
    let requests = repo.fetch_requests_in_range(organization, &window).await?;

    debug!(
        "ranking {} candidates for coverage in {}",
        roster.len(),
        window
    );
    Ok(compute_coverage_suggestions(
        &roster,
        &requests,
        &window,
        required_skills,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{OrganizationId, RequestId};
    use crate::models::{Department, RequestStatus};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn window() -> DateRange {
        DateRange::new(d(2025, 6, 2), d(2025, 6, 6)).unwrap()
    }

    fn candidate(id: i64, skills: &[&str], workload: u8) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            organization_id: OrganizationId::new(1),
            name: format!("Employee {}", id),
            department: Department::Engineering,
            role: Role::Employee,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            current_workload: workload,
            availability: Availability::Available,
        }
    }

    fn approved_vacation(employee: i64, start: NaiveDate, end: NaiveDate) -> VacationRequest {
        VacationRequest {
            id: RequestId::new(employee * 100),
            employee_id: EmployeeId::new(employee),
            organization_id: OrganizationId::new(1),
            period: DateRange::new(start, end).unwrap(),
            status: RequestStatus::Approved,
            coverage_skills: vec![],
            priority: None,
        }
    }

    #[test]
    fn test_empty_required_skills_uses_baseline() {
        assert_eq!(
            skill_match_percentage(&["rust".to_string()], &[]),
            UNCONSTRAINED_SKILL_MATCH
        );
    }

    #[test]
    fn test_skill_match_is_case_insensitive_and_substring() {
        let skills = vec!["PostgreSQL".to_string(), "Rust".to_string()];
        let required = vec!["postgres".to_string(), "rust".to_string()];
        assert_eq!(skill_match_percentage(&skills, &required), 100.0);
    }

    #[test]
    fn test_skill_match_never_exceeds_100() {
        // Several candidate skills all matching the single requirement must
        // not double-count.
        let skills = vec![
            "java".to_string(),
            "javascript".to_string(),
            "java ee".to_string(),
        ];
        let required = vec!["java".to_string()];
        assert_eq!(skill_match_percentage(&skills, &required), 100.0);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        let e = candidate(1, &["rust"], 0);
        let score = coverage_score(&e, 100.0);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_higher_workload_strictly_lowers_score() {
        // Limited availability keeps the score below the clamp so the
        // workload term stays observable.
        let mut lightly_loaded = candidate(1, &[], 20);
        lightly_loaded.availability = Availability::Limited;
        let mut heavily_loaded = candidate(1, &[], 90);
        heavily_loaded.availability = Availability::Limited;

        let low = coverage_score(&lightly_loaded, 0.0);
        let high = coverage_score(&heavily_loaded, 0.0);
        assert!(high < low);
        assert_eq!(low - high, 14.0);
    }

    #[test]
    fn test_vacationing_candidate_is_never_suggested() {
        let roster = vec![candidate(1, &["rust"], 10), candidate(2, &["rust"], 10)];
        let requests = vec![approved_vacation(1, d(2025, 6, 4), d(2025, 6, 10))];

        let suggestions =
            compute_coverage_suggestions(&roster, &requests, &window(), &["rust".to_string()]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].employee_id, EmployeeId::new(2));
    }

    #[test]
    fn test_pending_vacation_does_not_exclude() {
        let roster = vec![candidate(1, &["rust"], 10)];
        let mut pending = approved_vacation(1, d(2025, 6, 4), d(2025, 6, 10));
        pending.status = RequestStatus::Pending;

        let suggestions = compute_coverage_suggestions(&roster, &[pending], &window(), &[]);
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_suggestions_sorted_descending_and_capped() {
        let roster: Vec<Employee> = (1..=15)
            .map(|i| {
                let mut e = candidate(i, &[], (i * 6) as u8);
                e.availability = Availability::Unavailable;
                e
            })
            .collect();

        let suggestions =
            compute_coverage_suggestions(&roster, &[], &window(), &["rust".to_string()]);
        assert_eq!(suggestions.len(), 10);
        for pair in suggestions.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Lowest workload wins the top slot.
        assert_eq!(suggestions[0].employee_id, EmployeeId::new(1));
    }

    #[test]
    fn test_admin_outranks_employee_with_equal_profile() {
        let mut admin = candidate(1, &[], 40);
        admin.role = Role::Admin;
        admin.availability = Availability::Limited;
        let mut regular = candidate(2, &[], 40);
        regular.availability = Availability::Limited;

        let suggestions = compute_coverage_suggestions(
            &[regular, admin],
            &[],
            &window(),
            &["rust".to_string()],
        );
        assert_eq!(suggestions[0].employee_id, EmployeeId::new(1));
        assert_eq!(suggestions[0].score - suggestions[1].score, 5.0);
    }

    #[test]
    fn test_reason_thresholds() {
        let strong = candidate(1, &["rust"], 20);
        let reason = build_reason(&strong, 100.0);
        assert!(reason.contains("excellent skill match"));
        assert!(reason.contains("low current workload"));
        assert!(reason.contains("engineering department"));

        let mut plain = candidate(2, &[], 60);
        plain.availability = Availability::Available;
        let reason = build_reason(&plain, 0.0);
        assert!(reason.starts_with("available for coverage"));

        let mut loaded = candidate(3, &[], 90);
        loaded.availability = Availability::Limited;
        let reason = build_reason(&loaded, 50.0);
        assert!(reason.contains("partial skill match"));
        assert!(reason.contains("limited availability"));
        assert!(reason.contains("high workload impact"));
    }
}
