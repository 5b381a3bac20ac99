//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("local", "memory")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads the `REPOSITORY_TYPE` environment variable; defaults to Local
    /// when unset or unparseable.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }
        Self::Local
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use vci_rust::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::Local)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn FullRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads the `REPOSITORY_TYPE` environment variable to determine which
    /// repository to create.
    pub fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        Self::create(RepositoryType::from_env())
    }
}
