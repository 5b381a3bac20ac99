//! Vacation request value types.

use serde::{Deserialize, Serialize};

use crate::api::{DateRange, EmployeeId, OrganizationId, RequestId};

/// Lifecycle state of a vacation request.
///
/// Requests are created as `pending` and transitioned to `approved` or
/// `rejected` by admin actions. The analysis engine only ever reads pending
/// and approved requests; rejected requests are invisible to every conflict
/// and coverage computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Optional requester-supplied urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPriority {
    Low,
    Normal,
    High,
}

/// One vacation request for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Database ID (0 on input, server-assigned on store).
    #[serde(default)]
    pub id: RequestId,
    pub employee_id: EmployeeId,
    pub organization_id: OrganizationId,
    /// Inclusive calendar-date span of the absence.
    pub period: DateRange,
    pub status: RequestStatus,
    /// Skills the requester would like covered while away.
    #[serde(default)]
    pub coverage_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,
}

impl VacationRequest {
    /// Pending and approved requests participate in conflict/coverage
    /// computations; rejected ones never do.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, RequestStatus::Rejected)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.status, RequestStatus::Approved)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        RequestId(0)
    }
}
