//! Analysis output data structures.
//!
//! Plain serde DTOs assembled by the analysis services and serialized as
//! JSON by the request-handling layer. The engine owns the field names but
//! no transport concerns.

pub mod conflict;
pub mod coverage;
pub mod suggestion;
