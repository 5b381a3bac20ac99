//! Checksum calculation for holiday-calendar import deduplication.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of a calendar JSON payload.
///
/// # Arguments
/// * `content` - JSON string content of the calendar
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
