//! Shared data models re-exported for database layer consumers.

pub use crate::api::{
    ConflictAnalysis, CoverageSuggestion, DateRange, EmployeeId, OrganizationId, RequestId,
    TeamCoverageAnalysis,
};
pub use crate::models::{
    Availability, Department, Employee, Holiday, HolidayScope, Organization, RequestPriority,
    RequestStatus, Role, VacationRequest,
};
