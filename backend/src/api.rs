//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes, the calendar-date interval
//! type, and re-exports of the analysis DTOs. All types derive
//! Serialize/Deserialize; their JSON shape is the wire format consumed by the
//! request-handling layer.

pub use crate::reports::conflict::{
    ConflictAnalysis, ConflictImpact, ConflictSeverity, RequestConflict,
};
pub use crate::reports::coverage::{DailyCoverage, TeamCoverageAnalysis};
pub use crate::reports::suggestion::CoverageSuggestion;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(i64, OrganizationId);
define_id_type!(i64, EmployeeId);
define_id_type!(i64, RequestId);

/// Inclusive calendar-date interval.
///
/// Both endpoints are part of the range: a single-day vacation has
/// `start == end` and spans one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, refusing `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Single-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Number of calendar days covered, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Check whether a day falls inside the range (inclusive on both ends).
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Two inclusive ranges intersect iff `start1 <= end2 && start2 <= end1`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Length of the intersection in whole days, inclusive on both ends.
    ///
    /// Returns 0 when the ranges do not intersect.
    pub fn overlap_days(&self, other: &Self) -> i64 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            0
        } else {
            (end - start).num_days() + 1
        }
    }

    /// The intersection of two ranges, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Self::new(start, end)
    }

    /// Iterate over every day in the range, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::{DateRange, EmployeeId, OrganizationId, RequestId};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_id_newtypes() {
        let org = OrganizationId::new(7);
        assert_eq!(org.value(), 7);
        assert_eq!(format!("{}", org), "7");

        let emp: EmployeeId = 42.into();
        assert_eq!(i64::from(emp), 42);

        let req = RequestId::new(3);
        assert_eq!(req, RequestId(3));
    }

    #[test]
    fn test_range_new_rejects_inverted() {
        assert!(DateRange::new(d(2025, 3, 10), d(2025, 3, 1)).is_none());
        assert!(DateRange::new(d(2025, 3, 1), d(2025, 3, 1)).is_some());
    }

    #[test]
    fn test_range_num_days_inclusive() {
        let range = DateRange::new(d(2025, 3, 3), d(2025, 3, 7)).unwrap();
        assert_eq!(range.num_days(), 5);
        assert_eq!(DateRange::single(d(2025, 3, 3)).num_days(), 1);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = DateRange::new(d(2025, 1, 1), d(2025, 1, 10)).unwrap();
        let b = DateRange::new(d(2025, 1, 8), d(2025, 1, 20)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert_eq!(a.overlap_days(&b), b.overlap_days(&a));
        assert_eq!(a.overlap_days(&b), 3);
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = DateRange::new(d(2025, 5, 1), d(2025, 5, 5)).unwrap();
        assert!(a.overlaps(&a));
        assert_eq!(a.overlap_days(&a), 5);
    }

    #[test]
    fn test_disjoint_ranges_never_overlap() {
        let a = DateRange::new(d(2025, 1, 1), d(2025, 1, 5)).unwrap();
        let b = DateRange::new(d(2025, 1, 6), d(2025, 1, 9)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert_eq!(a.overlap_days(&b), 0);
    }

    #[test]
    fn test_adjacent_endpoints_do_overlap() {
        // Inclusive semantics: sharing a single day is a one-day overlap.
        let a = DateRange::new(d(2025, 1, 1), d(2025, 1, 5)).unwrap();
        let b = DateRange::new(d(2025, 1, 5), d(2025, 1, 9)).unwrap();
        assert!(a.overlaps(&b));
        assert_eq!(a.overlap_days(&b), 1);
    }

    #[test]
    fn test_intersection() {
        let a = DateRange::new(d(2025, 1, 1), d(2025, 1, 10)).unwrap();
        let b = DateRange::new(d(2025, 1, 5), d(2025, 1, 20)).unwrap();
        let i = a.intersection(&b).unwrap();
        assert_eq!(i.start, d(2025, 1, 5));
        assert_eq!(i.end, d(2025, 1, 10));

        let c = DateRange::new(d(2025, 2, 1), d(2025, 2, 2)).unwrap();
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn test_iter_days() {
        let range = DateRange::new(d(2025, 3, 30), d(2025, 4, 2)).unwrap();
        let days: Vec<_> = range.iter_days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], d(2025, 3, 30));
        assert_eq!(days[3], d(2025, 4, 2));
    }

    #[test]
    fn test_contains_endpoints() {
        let range = DateRange::new(d(2025, 3, 1), d(2025, 3, 31)).unwrap();
        assert!(range.contains(d(2025, 3, 1)));
        assert!(range.contains(d(2025, 3, 31)));
        assert!(!range.contains(d(2025, 4, 1)));
    }
}
