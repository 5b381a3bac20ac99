//! Service layer for business logic and orchestration.
//!
//! This module contains the Vacation Coverage & Conflict Analysis Engine.
//! Every computation is a pure, synchronous function of roster/request/
//! holiday snapshots; the async `get_*` entry points only fetch those
//! snapshots from a repository and delegate. No shared state, no I/O inside
//! the computations, no implicit "now".

pub mod conflicts;
pub mod coverage;
pub mod error;
pub mod suggestions;
pub mod workdays;

pub use conflicts::{
    classify_severity, compute_conflict_analysis, compute_pending_conflicts,
    find_request_conflicts, get_conflict_analysis, get_pending_conflicts,
};
pub use coverage::{
    build_recommendations, compute_daily_coverage, compute_team_coverage, get_team_coverage,
};
pub use error::{AnalysisError, AnalysisResult};
pub use suggestions::{compute_coverage_suggestions, get_coverage_suggestions};
pub use workdays::{
    business_days, holiday_date_set, is_working_day, request_business_days, vacation_usage,
    VacationUsage,
};
