mod support;

use support::{date, range, seed_organization};

use vci_rust::api::{OrganizationId, RequestId};
use vci_rust::db::repositories::LocalRepository;
use vci_rust::db::{roster_for_organization, RepositoryError};
use vci_rust::services::{
    get_conflict_analysis, get_coverage_suggestions, get_team_coverage, AnalysisError,
};

#[tokio::test]
async fn test_roster_for_unknown_organization_is_not_found() {
    let repo = LocalRepository::new();
    let result = roster_for_organization(&repo, OrganizationId::new(77)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn test_team_coverage_for_unknown_organization() {
    let repo = LocalRepository::new();
    let result = get_team_coverage(
        &repo,
        OrganizationId::new(77),
        range(date(2025, 6, 2), date(2025, 6, 6)),
    )
    .await;
    assert!(matches!(
        result,
        Err(AnalysisError::OrganizationNotFound(id)) if id.value() == 77
    ));
}

#[tokio::test]
async fn test_team_coverage_for_empty_roster() {
    let repo = LocalRepository::new();
    let (org, _) = seed_organization(&repo, "Ghost Town Inc", &[]).await;

    let result = get_team_coverage(
        &repo,
        org.id,
        range(date(2025, 6, 2), date(2025, 6, 6)),
    )
    .await;
    assert!(matches!(result, Err(AnalysisError::EmptyRoster(id)) if id == org.id));
}

#[tokio::test]
async fn test_suggestions_for_empty_roster_are_empty_not_error() {
    let repo = LocalRepository::new();
    let (org, _) = seed_organization(&repo, "Ghost Town Inc", &[]).await;

    let suggestions = get_coverage_suggestions(
        &repo,
        org.id,
        range(date(2025, 6, 2), date(2025, 6, 6)),
        &[],
    )
    .await
    .unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_conflict_analysis_distinguishes_not_found_from_no_conflict() {
    let repo = LocalRepository::new();

    // Missing request: an error, never a silent empty result.
    let missing = get_conflict_analysis(&repo, RequestId::new(1)).await;
    assert!(matches!(missing, Err(AnalysisError::RequestNotFound(_))));
}
