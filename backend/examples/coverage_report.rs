//! Example demonstrating the vacation coverage analysis workflow.
//!
//! Seeds an in-memory repository with a small organization, files a few
//! overlapping vacation requests, and prints the conflict analysis and the
//! weekly team coverage report.
//!
//! To run this example:
//! ```bash
//! cargo run --example coverage_report
//! ```

use chrono::NaiveDate;

use vci_rust::api::{DateRange, EmployeeId, RequestId};
use vci_rust::db::repositories::LocalRepository;
use vci_rust::db::{
    import_holiday_calendar, register_organization, store_employee, submit_request,
};
use vci_rust::models::{
    Availability, Department, Employee, RequestStatus, Role, VacationRequest,
};
use vci_rust::services::{get_conflict_analysis, get_team_coverage};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repo = LocalRepository::new();

    println!("=== Seeding organization ===");
    let org = register_organization(&repo, "Acme GmbH").await?;

    let team = [
        ("Ada Byron", Department::Engineering, Role::Employee, 30),
        ("Grace Murray", Department::Engineering, Role::Employee, 55),
        ("Jean Bartik", Department::Sales, Role::Employee, 20),
        ("Edith Clarke", Department::Operations, Role::Admin, 60),
    ];
    let mut ids = Vec::new();
    for (name, department, role, workload) in team {
        let id = store_employee(
            &repo,
            &Employee {
                id: EmployeeId::default(),
                organization_id: org.id,
                name: name.to_string(),
                department,
                role,
                skills: vec!["onboarding".to_string()],
                current_workload: workload,
                availability: Availability::Available,
            },
        )
        .await?;
        ids.push(id);
        println!("  - {} (ID: {})", name, id);
    }

    import_holiday_calendar(
        &repo,
        r#"[{"date": "2025-06-05", "scope": "national", "name": "Founders Day"}]"#,
    )
    .await?;

    println!("\n=== Filing vacation requests ===");
    let week = DateRange::new(day(2025, 6, 2), day(2025, 6, 6)).expect("valid range");
    let target = submit_request(
        &repo,
        &VacationRequest {
            id: RequestId::default(),
            employee_id: ids[0],
            organization_id: org.id,
            period: week,
            status: RequestStatus::Approved,
            coverage_skills: vec!["onboarding".to_string()],
            priority: None,
        },
    )
    .await?;
    submit_request(
        &repo,
        &VacationRequest {
            id: RequestId::default(),
            employee_id: ids[1],
            organization_id: org.id,
            period: DateRange::new(day(2025, 6, 4), day(2025, 6, 10)).expect("valid range"),
            status: RequestStatus::Approved,
            coverage_skills: vec![],
            priority: None,
        },
    )
    .await?;

    println!("\n=== Conflict analysis for request {} ===", target);
    match get_conflict_analysis(&repo, target).await? {
        Some(analysis) => {
            println!("severity: {}", analysis.severity);
            println!("affected employees: {:?}", analysis.affected_employees);
            println!("coverage gap: {:.0}%", analysis.coverage_gap_percentage);
            for suggestion in &analysis.suggestions {
                println!(
                    "  candidate {} score {:.1}: {}",
                    suggestion.employee_name, suggestion.score, suggestion.reason
                );
            }
        }
        None => println!("no conflicts"),
    }

    println!("\n=== Team coverage (week of June 2) ===");
    let coverage = get_team_coverage(&repo, org.id, week).await?;
    for daily in &coverage.daily {
        println!(
            "  {}: {:.0}% available ({} away), gaps: {:?}",
            daily.date,
            daily.coverage_percentage,
            daily.on_vacation_employees,
            daily.department_gaps
        );
    }
    println!("overall: {:.0}%", coverage.overall_coverage_percentage);
    for recommendation in &coverage.recommendations {
        println!("note: {}", recommendation);
    }

    Ok(())
}
