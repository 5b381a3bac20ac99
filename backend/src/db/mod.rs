//! Database module for vacation and roster data storage.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (request handlers, analysis engine)  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Record validation at the storage boundary             │
//! │  - Duplicate-request rejection                           │
//! │  - Checksum-deduplicated calendar imports                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For new code, use the service layer:**
//! ```ignore
//! use vci_rust::db::{services, factory::RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env()?;
//!     let org = services::register_organization(repo.as_ref(), "Acme").await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    health_check, holidays_in_range, import_holiday_calendar, register_organization,
    requests_in_range, roster_for_organization, set_request_status, store_employee,
    submit_request,
};

// ==================== Repository Pattern Exports ====================

pub use checksum::calculate_checksum;
pub use repo_config::RepositoryConfig;

// Repository traits and implementations
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, HolidayRepository, OrganizationRepository, RepositoryError,
    RepositoryResult, RequestRepository, RosterRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = RepositoryFactory::from_env()
        .map_err(|e| anyhow::Error::msg(e.to_string()))
        .context("Failed to create repository from environment")?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Storage not initialized. Call init_repository() first.")
}
