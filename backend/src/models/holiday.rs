//! Public holiday reference data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a holiday applies nation-wide or to a region only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayScope {
    National,
    Regional,
}

/// One public holiday. Immutable reference data, supplied in bulk for a
/// queried range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub scope: HolidayScope,
    pub name: String,
}
