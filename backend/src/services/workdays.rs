//! Business-day arithmetic.
//!
//! Working days are calendar days that are neither Saturday nor Sunday nor a
//! public holiday. Every "days used/remaining" figure in the system is
//! expressed in business days, and the coverage reporter iterates working
//! days only.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::{DateRange, EmployeeId};
use crate::models::{Holiday, VacationRequest};

/// Collapse holiday records to their date set for O(1) lookups.
pub fn holiday_date_set(holidays: &[Holiday]) -> HashSet<NaiveDate> {
    holidays.iter().map(|h| h.date).collect()
}

/// A day counts as working iff it is Mon-Fri and not a holiday.
pub fn is_working_day(day: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&day)
}

/// Count the business days in an inclusive range.
///
/// A single-day range that falls on a weekend or holiday yields 0.
pub fn business_days(range: &DateRange, holidays: &HashSet<NaiveDate>) -> u32 {
    range
        .iter_days()
        .filter(|d| is_working_day(*d, holidays))
        .count() as u32
}

/// Business days consumed by one vacation request.
pub fn request_business_days(request: &VacationRequest, holidays: &HashSet<NaiveDate>) -> u32 {
    business_days(&request.period, holidays)
}

/// Per-employee vacation-day usage over one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationUsage {
    pub employee_id: EmployeeId,
    pub year: i32,
    /// Business days consumed by approved requests, clipped to the year.
    pub business_days_used: u32,
    /// Number of approved requests that contributed days.
    pub requests_counted: usize,
}

/// Sum the business days an employee's approved requests consume in a year.
///
/// Requests straddling a year boundary are clipped: only the days falling
/// inside the queried year count against it. Weekends and holidays never
/// consume allowance.
pub fn vacation_usage(
    employee_id: EmployeeId,
    year: i32,
    requests: &[VacationRequest],
    holidays: &HashSet<NaiveDate>,
) -> VacationUsage {
    let year_range = DateRange {
        start: NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year start"),
        end: NaiveDate::from_ymd_opt(year, 12, 31).expect("valid year end"),
    };

    let mut business_days_used = 0;
    let mut requests_counted = 0;
    for request in requests {
        if request.employee_id != employee_id || !request.is_approved() {
            continue;
        }
        let Some(clipped) = request.period.intersection(&year_range) else {
            continue;
        };
        let days = business_days(&clipped, holidays);
        if days > 0 {
            business_days_used += days;
            requests_counted += 1;
        }
    }

    VacationUsage {
        employee_id,
        year,
        business_days_used,
        requests_counted,
    }
}
