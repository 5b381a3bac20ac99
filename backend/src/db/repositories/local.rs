//! In-memory repository backend.
//!
//! Backs the default `local-repo` feature: a single `RwLock` over plain
//! collections. IDs are assigned sequentially on store when the incoming
//! record carries 0; storing with an explicit ID upserts.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use parking_lot::RwLock;

use crate::api::{DateRange, EmployeeId, OrganizationId, RequestId};
use crate::db::repository::{
    ErrorContext, HolidayRepository, OrganizationRepository, RepositoryError, RepositoryResult,
    RequestRepository, RosterRepository,
};
use crate::models::{Employee, Holiday, Organization, RequestStatus, VacationRequest};

#[derive(Default)]
struct LocalState {
    organizations: HashMap<i64, Organization>,
    employees: HashMap<i64, Employee>,
    requests: HashMap<i64, VacationRequest>,
    holidays: BTreeMap<NaiveDate, Vec<Holiday>>,
    imported_calendars: HashSet<String>,
    next_organization_id: i64,
    next_employee_id: i64,
    next_request_id: i64,
}

impl LocalState {
    fn require_organization(&self, id: OrganizationId, operation: &str) -> RepositoryResult<()> {
        if self.organizations.contains_key(&id.value()) {
            Ok(())
        } else {
            Err(RepositoryError::not_found_with_context(
                format!("Organization {} does not exist", id),
                ErrorContext::new(operation)
                    .with_entity("organization")
                    .with_entity_id(id),
            ))
        }
    }
}

/// In-memory repository for tests and local development.
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LocalState::default()),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(provided: i64, counter: &mut i64) -> i64 {
    if provided != 0 {
        *counter = (*counter).max(provided);
        return provided;
    }
    *counter += 1;
    *counter
}

#[async_trait]
impl OrganizationRepository for LocalRepository {
    async fn store_organization(&self, org: &Organization) -> RepositoryResult<OrganizationId> {
        let mut state = self.state.write();
        let id = next_id(org.id.value(), &mut state.next_organization_id);
        let mut stored = org.clone();
        stored.id = OrganizationId::new(id);
        state.organizations.insert(id, stored);
        debug!("stored organization id={}", id);
        Ok(OrganizationId::new(id))
    }

    async fn fetch_organization(&self, id: OrganizationId) -> RepositoryResult<Organization> {
        let state = self.state.read();
        state.organizations.get(&id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Organization {} does not exist", id),
                ErrorContext::new("fetch_organization")
                    .with_entity("organization")
                    .with_entity_id(id),
            )
        })
    }
}

#[async_trait]
impl RosterRepository for LocalRepository {
    async fn store_employee(&self, employee: &Employee) -> RepositoryResult<EmployeeId> {
        let mut state = self.state.write();
        state.require_organization(employee.organization_id, "store_employee")?;
        let id = next_id(employee.id.value(), &mut state.next_employee_id);
        let mut stored = employee.clone();
        stored.id = EmployeeId::new(id);
        state.employees.insert(id, stored);
        debug!(
            "stored employee id={} org={}",
            id, employee.organization_id
        );
        Ok(EmployeeId::new(id))
    }

    async fn fetch_employee(&self, id: EmployeeId) -> RepositoryResult<Employee> {
        let state = self.state.read();
        state.employees.get(&id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Employee {} does not exist", id),
                ErrorContext::new("fetch_employee")
                    .with_entity("employee")
                    .with_entity_id(id),
            )
        })
    }

    async fn fetch_roster(&self, organization: OrganizationId) -> RepositoryResult<Vec<Employee>> {
        let state = self.state.read();
        state.require_organization(organization, "fetch_roster")?;
        let mut roster: Vec<Employee> = state
            .employees
            .values()
            .filter(|e| e.organization_id == organization)
            .cloned()
            .collect();
        roster.sort_by_key(|e| e.id);
        Ok(roster)
    }
}

#[async_trait]
impl RequestRepository for LocalRepository {
    async fn store_request(&self, request: &VacationRequest) -> RepositoryResult<RequestId> {
        let mut state = self.state.write();
        let employee = state
            .employees
            .get(&request.employee_id.value())
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Employee {} does not exist", request.employee_id),
                    ErrorContext::new("store_request")
                        .with_entity("employee")
                        .with_entity_id(request.employee_id),
                )
            })?;
        if employee.organization_id != request.organization_id {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "Employee {} does not belong to organization {}",
                    request.employee_id, request.organization_id
                ),
                ErrorContext::new("store_request").with_entity("vacation_request"),
            ));
        }
        let id = next_id(request.id.value(), &mut state.next_request_id);
        let mut stored = request.clone();
        stored.id = RequestId::new(id);
        state.requests.insert(id, stored);
        debug!(
            "stored request id={} employee={} period={}",
            id, request.employee_id, request.period
        );
        Ok(RequestId::new(id))
    }

    async fn fetch_request(&self, id: RequestId) -> RepositoryResult<VacationRequest> {
        let state = self.state.read();
        state.requests.get(&id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Vacation request {} does not exist", id),
                ErrorContext::new("fetch_request")
                    .with_entity("vacation_request")
                    .with_entity_id(id),
            )
        })
    }

    async fn fetch_requests_in_range(
        &self,
        organization: OrganizationId,
        range: &DateRange,
    ) -> RepositoryResult<Vec<VacationRequest>> {
        let state = self.state.read();
        state.require_organization(organization, "fetch_requests_in_range")?;
        let mut requests: Vec<VacationRequest> = state
            .requests
            .values()
            .filter(|r| r.organization_id == organization && r.period.overlaps(range))
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.id);
        Ok(requests)
    }

    async fn update_request_status(
        &self,
        id: RequestId,
        status: RequestStatus,
    ) -> RepositoryResult<()> {
        let mut state = self.state.write();
        let request = state.requests.get_mut(&id.value()).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Vacation request {} does not exist", id),
                ErrorContext::new("update_request_status")
                    .with_entity("vacation_request")
                    .with_entity_id(id),
            )
        })?;
        request.status = status;
        debug!("request id={} transitioned to {:?}", id, status);
        Ok(())
    }
}

#[async_trait]
impl HolidayRepository for LocalRepository {
    async fn store_holiday_calendar(
        &self,
        checksum: &str,
        holidays: &[Holiday],
    ) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        if !state.imported_calendars.insert(checksum.to_string()) {
            debug!("holiday calendar checksum={} already imported", checksum);
            return Ok(0);
        }
        for holiday in holidays {
            state
                .holidays
                .entry(holiday.date)
                .or_default()
                .push(holiday.clone());
        }
        Ok(holidays.len())
    }

    async fn fetch_holidays_in_range(&self, range: &DateRange) -> RepositoryResult<Vec<Holiday>> {
        let state = self.state.read();
        Ok(state
            .holidays
            .range(range.start..=range.end)
            .flat_map(|(_, v)| v.iter().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Department, HolidayScope, Role};

    fn org() -> Organization {
        Organization {
            id: OrganizationId::default(),
            name: "Test Org".to_string(),
        }
    }

    fn employee(org_id: OrganizationId) -> Employee {
        Employee {
            id: EmployeeId::default(),
            organization_id: org_id,
            name: "Sam Berg".to_string(),
            department: Department::Engineering,
            role: Role::Employee,
            skills: vec![],
            current_workload: 30,
            availability: Availability::Available,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = LocalRepository::new();
        let org_id = repo.store_organization(&org()).await.unwrap();
        let first = repo.store_employee(&employee(org_id)).await.unwrap();
        let second = repo.store_employee(&employee(org_id)).await.unwrap();
        assert_eq!(first.value() + 1, second.value());
    }

    #[tokio::test]
    async fn test_store_employee_requires_organization() {
        let repo = LocalRepository::new();
        let result = repo
            .store_employee(&employee(OrganizationId::new(99)))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_roster_is_tenant_scoped() {
        let repo = LocalRepository::new();
        let org_a = repo.store_organization(&org()).await.unwrap();
        let org_b = repo.store_organization(&org()).await.unwrap();
        repo.store_employee(&employee(org_a)).await.unwrap();
        repo.store_employee(&employee(org_a)).await.unwrap();
        repo.store_employee(&employee(org_b)).await.unwrap();

        assert_eq!(repo.fetch_roster(org_a).await.unwrap().len(), 2);
        assert_eq!(repo.fetch_roster(org_b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_requests_in_range_filters_by_overlap() {
        let repo = LocalRepository::new();
        let org_id = repo.store_organization(&org()).await.unwrap();
        let emp_id = repo.store_employee(&employee(org_id)).await.unwrap();

        let mut request = VacationRequest {
            id: RequestId::default(),
            employee_id: emp_id,
            organization_id: org_id,
            period: DateRange::new(date(2025, 7, 1), date(2025, 7, 5)).unwrap(),
            status: RequestStatus::Approved,
            coverage_skills: vec![],
            priority: None,
        };
        repo.store_request(&request).await.unwrap();

        request.period = DateRange::new(date(2025, 8, 1), date(2025, 8, 5)).unwrap();
        repo.store_request(&request).await.unwrap();

        let window = DateRange::new(date(2025, 7, 4), date(2025, 7, 10)).unwrap();
        let found = repo.fetch_requests_in_range(org_id, &window).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].period.start, date(2025, 7, 1));
    }

    #[tokio::test]
    async fn test_calendar_import_is_idempotent_by_checksum() {
        let repo = LocalRepository::new();
        let holidays = vec![Holiday {
            date: date(2025, 12, 25),
            scope: HolidayScope::National,
            name: "Christmas Day".to_string(),
        }];
        assert_eq!(
            repo.store_holiday_calendar("abc", &holidays).await.unwrap(),
            1
        );
        assert_eq!(
            repo.store_holiday_calendar("abc", &holidays).await.unwrap(),
            0
        );

        let range = DateRange::new(date(2025, 12, 1), date(2025, 12, 31)).unwrap();
        assert_eq!(repo.fetch_holidays_in_range(&range).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_request_status() {
        let repo = LocalRepository::new();
        let org_id = repo.store_organization(&org()).await.unwrap();
        let emp_id = repo.store_employee(&employee(org_id)).await.unwrap();
        let request_id = repo
            .store_request(&VacationRequest {
                id: RequestId::default(),
                employee_id: emp_id,
                organization_id: org_id,
                period: DateRange::new(date(2025, 7, 1), date(2025, 7, 5)).unwrap(),
                status: RequestStatus::Pending,
                coverage_skills: vec![],
                priority: None,
            })
            .await
            .unwrap();

        repo.update_request_status(request_id, RequestStatus::Approved)
            .await
            .unwrap();
        let stored = repo.fetch_request(request_id).await.unwrap();
        assert_eq!(stored.status, RequestStatus::Approved);
    }
}
