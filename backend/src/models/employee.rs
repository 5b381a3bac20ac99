//! Roster entry value types.
//!
//! The analysis engine treats employees as read-only snapshots: records are
//! validated once when they cross the storage boundary and assumed
//! well-formed everywhere after that.

use serde::{Deserialize, Serialize};

use crate::api::{EmployeeId, OrganizationId};

/// Organizational role of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Employee,
    TenantAdmin,
}

impl Role {
    /// Admins are the critical roles for conflict severity: an organization
    /// losing an admin to overlapping vacations escalates straight to
    /// critical.
    pub fn is_critical(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Department an employee belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Engineering,
    Sales,
    Marketing,
    HumanResources,
    Finance,
    Operations,
    Support,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "engineering",
            Department::Sales => "sales",
            Department::Marketing => "marketing",
            Department::HumanResources => "human_resources",
            Department::Finance => "finance",
            Department::Operations => "operations",
            Department::Support => "support",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Willingness/ability to absorb coverage work for an absent colleague.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

/// Roster entry for one employee of an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Database ID (0 on input, server-assigned on store).
    #[serde(default)]
    pub id: EmployeeId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub department: Department,
    pub role: Role,
    /// Free-form skill tags, matched case-insensitively against coverage
    /// requirements.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Percent of capacity already committed, 0-100.
    pub current_workload: u8,
    pub availability: Availability,
}

impl Employee {
    /// Validate a record before it enters storage.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Employee name must not be empty".to_string());
        }
        if self.current_workload > 100 {
            return Err(format!(
                "current_workload must be within 0-100, got {}",
                self.current_workload
            ));
        }
        Ok(())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        EmployeeId(0)
    }
}
