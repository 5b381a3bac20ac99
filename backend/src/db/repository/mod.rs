//! Abstract repository interfaces for the storage collaborators.
//!
//! The analysis engine consumes three kinds of reference data: the roster,
//! the vacation requests intersecting a window, and the holiday calendar.
//! Each is behind its own trait so backends can implement them
//! independently; `FullRepository` bundles them for consumers that need the
//! whole storage surface.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{DateRange, EmployeeId, OrganizationId, RequestId};
use crate::models::{Employee, Holiday, Organization, RequestStatus, VacationRequest};

/// Tenant organization registry.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Store an organization, assigning an ID when the record carries 0.
    async fn store_organization(&self, org: &Organization) -> RepositoryResult<OrganizationId>;

    /// Fetch one organization by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` when the tenant does not exist.
    async fn fetch_organization(&self, id: OrganizationId) -> RepositoryResult<Organization>;
}

/// Employee roster storage.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Store an employee record, assigning an ID when the record carries 0.
    async fn store_employee(&self, employee: &Employee) -> RepositoryResult<EmployeeId>;

    /// Fetch one employee by ID.
    async fn fetch_employee(&self, id: EmployeeId) -> RepositoryResult<Employee>;

    /// Fetch the full roster of an organization, ordered by employee ID.
    ///
    /// The organization must exist; an unknown tenant is a `NotFound` error,
    /// distinct from an existing tenant with no employees (empty `Vec`).
    async fn fetch_roster(&self, organization: OrganizationId) -> RepositoryResult<Vec<Employee>>;
}

/// Vacation request storage.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Store a vacation request, assigning an ID when the record carries 0.
    async fn store_request(&self, request: &VacationRequest) -> RepositoryResult<RequestId>;

    /// Fetch one request by ID.
    async fn fetch_request(&self, id: RequestId) -> RepositoryResult<VacationRequest>;

    /// Fetch every request of an organization whose period intersects the
    /// given window, ordered by request ID. Status filtering is left to the
    /// caller.
    async fn fetch_requests_in_range(
        &self,
        organization: OrganizationId,
        range: &DateRange,
    ) -> RepositoryResult<Vec<VacationRequest>>;

    /// Transition a request to a new status (admin approval workflow).
    async fn update_request_status(
        &self,
        id: RequestId,
        status: RequestStatus,
    ) -> RepositoryResult<()>;
}

/// Public holiday reference data.
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Store a bulk holiday calendar identified by a payload checksum.
    ///
    /// # Returns
    /// * `Ok(usize)` - number of holidays stored; 0 when the checksum was
    ///   already imported (idempotent re-import).
    async fn store_holiday_calendar(
        &self,
        checksum: &str,
        holidays: &[Holiday],
    ) -> RepositoryResult<usize>;

    /// Fetch all holidays falling inside the given window, ordered by date.
    async fn fetch_holidays_in_range(&self, range: &DateRange) -> RepositoryResult<Vec<Holiday>>;
}

/// The complete storage surface required by the analysis services.
pub trait FullRepository:
    OrganizationRepository + RosterRepository + RequestRepository + HolidayRepository
{
}

impl<T> FullRepository for T where
    T: OrganizationRepository + RosterRepository + RequestRepository + HolidayRepository
{
}
