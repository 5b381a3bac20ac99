//! Error types for analysis operations.

use thiserror::Error;

use crate::api::{OrganizationId, RequestId};
use crate::db::repository::RepositoryError;

/// Failure states of the analysis entry points.
///
/// "No conflict" is deliberately NOT an error: conflict analysis models it
/// as `Ok(None)`, keeping it distinguishable from a failed lookup.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Organization {0} not found")]
    OrganizationNotFound(OrganizationId),

    #[error("Vacation request {0} not found")]
    RequestNotFound(RequestId),

    /// Coverage percentages are undefined over a roster of size 0; the call
    /// is rejected instead of inventing a convention.
    #[error("Organization {0} has no employees on its roster")]
    EmptyRoster(OrganizationId),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
