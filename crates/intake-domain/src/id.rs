//! Record Identifiers
//!
//! IDs are generated in the browser: a per-kind prefix followed by the last six
//! digits of the millisecond clock, e.g. `REQ-482913`. Collisions are possible
//! but unlikely for a single store's submission rate.

use serde::{Deserialize, Serialize};
use std::fmt;

const ID_DIGITS: usize = 6;
const ID_MODULUS: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Build an ID from a prefix and a millisecond timestamp
    pub fn generate(prefix: &str, now_millis: i64) -> Self {
        let digits = now_millis.rem_euclid(ID_MODULUS);
        Self(format!("{}-{:0width$}", prefix, digits, width = ID_DIGITS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the ID is `<prefix>-` followed by exactly six digits
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .map(|digits| digits.len() == ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_last_six_digits() {
        let id = RecordId::generate("REQ", 1_760_000_123_456);
        assert_eq!(id.as_str(), "REQ-123456");
    }

    #[test]
    fn test_generate_keeps_leading_zeros() {
        let id = RecordId::generate("PC", 1_760_000_000_042);
        assert_eq!(id.as_str(), "PC-000042");
        assert!(id.has_prefix("PC"));
    }

    #[test]
    fn test_has_prefix_rejects_other_shapes() {
        assert!(!RecordId::from("SHC-12345").has_prefix("SHC"));
        assert!(!RecordId::from("SHC-12345a").has_prefix("SHC"));
        assert!(!RecordId::from("LSM-123456").has_prefix("SHC"));
        assert!(!RecordId::from("SHC123456").has_prefix("SHC"));
    }
}
