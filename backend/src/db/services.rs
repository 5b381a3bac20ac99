//! High-level storage service functions.
//!
//! These functions sit on top of the repository traits and add the
//! cross-cutting concerns the raw backends do not: record validation,
//! duplicate-request rejection, and checksum-deduplicated calendar imports.
//! They are generic over the repository implementation.

use chrono::NaiveDate;
use log::info;

use super::checksum::calculate_checksum;
use super::repository::{
    ErrorContext, FullRepository, HolidayRepository, OrganizationRepository, RepositoryError,
    RepositoryResult, RequestRepository, RosterRepository,
};
use crate::api::{DateRange, EmployeeId, OrganizationId, RequestId};
use crate::models::{Employee, Holiday, Organization, RequestStatus, VacationRequest};

/// Verify the storage backend responds to queries.
pub async fn health_check<R: FullRepository>(repo: &R) -> RepositoryResult<bool> {
    // A probe read; any date works since holidays are global reference data.
    let probe = DateRange::single(NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid probe date"));
    repo.fetch_holidays_in_range(&probe).await?;
    Ok(true)
}

/// Register a new tenant organization.
pub async fn register_organization<R: OrganizationRepository>(
    repo: &R,
    name: &str,
) -> RepositoryResult<Organization> {
    if name.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Organization name must not be empty",
            ErrorContext::new("register_organization").with_entity("organization"),
        ));
    }
    let org = Organization {
        id: OrganizationId::default(),
        name: name.to_string(),
    };
    let id = repo.store_organization(&org).await?;
    info!("registered organization {} ({})", name, id);
    Ok(Organization { id, ..org })
}

/// Validate and store an employee record.
pub async fn store_employee<R: RosterRepository>(
    repo: &R,
    employee: &Employee,
) -> RepositoryResult<EmployeeId> {
    employee.validate().map_err(|message| {
        RepositoryError::validation_with_context(
            message,
            ErrorContext::new("store_employee")
                .with_entity("employee")
                .with_entity_id(employee.id),
        )
    })?;
    repo.store_employee(employee).await
}

/// Fetch the roster snapshot of an organization.
pub async fn roster_for_organization<R: RosterRepository>(
    repo: &R,
    organization: OrganizationId,
) -> RepositoryResult<Vec<Employee>> {
    repo.fetch_roster(organization).await
}

/// Validate and file a vacation request.
///
/// A request overlapping an existing active (pending or approved) request
/// from the same employee is rejected as a duplicate before it reaches
/// storage; the conflict engine therefore never sees same-employee overlaps.
pub async fn submit_request<R: RequestRepository>(
    repo: &R,
    request: &VacationRequest,
) -> RepositoryResult<RequestId> {
    if request.period.start > request.period.end {
        return Err(RepositoryError::validation_with_context(
            format!("Request period {} is inverted", request.period),
            ErrorContext::new("submit_request").with_entity("vacation_request"),
        ));
    }

    let existing = repo
        .fetch_requests_in_range(request.organization_id, &request.period)
        .await?;
    let duplicate = existing.iter().find(|r| {
        r.employee_id == request.employee_id && r.is_active() && r.id != request.id
    });
    if let Some(other) = duplicate {
        return Err(RepositoryError::duplicate_with_context(
            format!(
                "Employee {} already has request {} covering {}",
                request.employee_id, other.id, other.period
            ),
            ErrorContext::new("submit_request")
                .with_entity("vacation_request")
                .with_entity_id(other.id),
        ));
    }

    repo.store_request(request).await
}

/// Transition a request through the approval workflow.
pub async fn set_request_status<R: RequestRepository>(
    repo: &R,
    id: RequestId,
    status: RequestStatus,
) -> RepositoryResult<()> {
    repo.update_request_status(id, status).await
}

/// Fetch all requests of an organization intersecting a window.
pub async fn requests_in_range<R: RequestRepository>(
    repo: &R,
    organization: OrganizationId,
    range: &DateRange,
) -> RepositoryResult<Vec<VacationRequest>> {
    repo.fetch_requests_in_range(organization, range).await
}

/// Import a bulk holiday calendar from a JSON payload.
///
/// The payload is deduplicated by SHA-256 checksum: re-importing an
/// identical calendar is a no-op and returns 0.
pub async fn import_holiday_calendar<R: HolidayRepository>(
    repo: &R,
    payload: &str,
) -> RepositoryResult<usize> {
    let holidays: Vec<Holiday> = serde_json::from_str(payload).map_err(|e| {
        RepositoryError::validation_with_context(
            format!("Failed to parse holiday calendar: {}", e),
            ErrorContext::new("import_holiday_calendar").with_entity("holiday"),
        )
    })?;

    let checksum = calculate_checksum(payload);
    let stored = repo.store_holiday_calendar(&checksum, &holidays).await?;
    if stored > 0 {
        info!("imported holiday calendar with {} entries", stored);
    }
    Ok(stored)
}

/// Fetch holidays falling inside a window.
pub async fn holidays_in_range<R: HolidayRepository>(
    repo: &R,
    range: &DateRange,
) -> RepositoryResult<Vec<Holiday>> {
    repo.fetch_holidays_in_range(range).await
}
