#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;

use vci_rust::api::{DateRange, EmployeeId, OrganizationId, RequestId};
use vci_rust::db::repositories::LocalRepository;
use vci_rust::db::{register_organization, store_employee, submit_request};
use vci_rust::models::{
    Availability, Department, Employee, Organization, RequestStatus, Role, VacationRequest,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes
/// access to process-global env vars to avoid flaky tests when Rust runs
/// tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// ==================== Domain fixtures ====================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).unwrap()
}

/// Blueprint for one roster entry.
pub struct EmployeeSpec {
    pub name: &'static str,
    pub department: Department,
    pub role: Role,
    pub skills: &'static [&'static str],
    pub workload: u8,
    pub availability: Availability,
}

impl EmployeeSpec {
    pub fn basic(name: &'static str, department: Department) -> Self {
        Self {
            name,
            department,
            role: Role::Employee,
            skills: &[],
            workload: 30,
            availability: Availability::Available,
        }
    }
}

/// Register an organization and store one employee per spec.
///
/// Returns the organization and the assigned employee IDs in spec order.
pub async fn seed_organization(
    repo: &LocalRepository,
    name: &str,
    specs: &[EmployeeSpec],
) -> (Organization, Vec<EmployeeId>) {
    let org = register_organization(repo, name).await.unwrap();

    let mut ids = Vec::with_capacity(specs.len());
    for spec in specs {
        let employee = Employee {
            id: EmployeeId::default(),
            organization_id: org.id,
            name: spec.name.to_string(),
            department: spec.department,
            role: spec.role,
            skills: spec.skills.iter().map(|s| s.to_string()).collect(),
            current_workload: spec.workload,
            availability: spec.availability,
        };
        ids.push(store_employee(repo, &employee).await.unwrap());
    }

    (org, ids)
}

/// File a request and return its assigned ID.
pub async fn file_request(
    repo: &LocalRepository,
    org: OrganizationId,
    employee: EmployeeId,
    period: DateRange,
    status: RequestStatus,
    coverage_skills: &[&str],
) -> RequestId {
    let request = VacationRequest {
        id: RequestId::default(),
        employee_id: employee,
        organization_id: org,
        period,
        status,
        coverage_skills: coverage_skills.iter().map(|s| s.to_string()).collect(),
        priority: None,
    };
    submit_request(repo, &request).await.unwrap()
}
