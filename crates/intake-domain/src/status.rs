//! Request Status
//!
//! Every record is created as `Pending`. Later states are only ever set by the
//! back office, never by the portal.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        }
    }

    /// CSS class for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "status-badge status-pending",
            RequestStatus::InProgress => "status-badge status-in-progress",
            RequestStatus::Completed => "status-badge status-completed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&RequestStatus::InProgress).unwrap(), "\"In Progress\"");
        let parsed: RequestStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(parsed, RequestStatus::Completed);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
        assert_eq!(RequestStatus::default().to_string(), "Pending");
    }
}
