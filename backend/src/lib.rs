//! # VCI Rust Backend
//!
//! Vacation Coverage Intelligence for multi-tenant organizations.
//!
//! This crate provides the analysis engine behind an organizational vacation
//! management system: conflict detection between overlapping requests, daily
//! team coverage quantification, candidate ranking for covering absences,
//! and derived staffing recommendations. It is consumed as a library by the
//! request-handling layer, which serializes the result structures as JSON.
//!
//! ## Features
//!
//! - **Conflict Analysis**: Detect and classify overlaps between approved
//!   vacation requests, with severity tiers and impact metrics
//! - **Team Coverage**: Per-working-day availability over a date range,
//!   excluding weekends and public holidays
//! - **Coverage Suggestions**: Multi-factor scoring of candidates to absorb
//!   the workload of absent colleagues
//! - **Business-Day Arithmetic**: Allowance accounting that never charges
//!   weekends or holidays
//! - **Storage Layer**: Repository pattern with an in-memory backend for
//!   tests and local development
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes, the `DateRange` interval type, DTO re-exports
//! - [`models`]: Employee/VacationRequest/Holiday/Organization value types
//! - [`db`]: Storage operations, repository pattern, and persistence layer
//! - [`reports`]: Analysis output data structures
//! - [`services`]: The analysis engine (pure computations + repo-backed entries)
//!
//! ## Determinism
//!
//! Engine computations are pure functions over supplied snapshots: two calls
//! with identical inputs produce identical output, and concurrent
//! invocations need no coordination.

pub mod api;

pub mod db;
pub mod models;

pub mod reports;

pub mod services;
