//! Multi-tenant organization record.

use serde::{Deserialize, Serialize};

use crate::api::OrganizationId;

/// One tenant organization. Employees and vacation requests are always owned
/// by exactly one organization; analysis never crosses tenant boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Database ID (0 on input, server-assigned on store).
    #[serde(default)]
    pub id: OrganizationId,
    pub name: String,
}

impl Default for OrganizationId {
    fn default() -> Self {
        OrganizationId(0)
    }
}
