//! Waitlist entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::STATUS_PENDING;

/// A single waitlist signup, as stored in the `waitlist` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub school: String,
    pub source: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// New entry in the initial `pending` state
    pub fn pending(email: impl Into<String>, school: impl Into<String>, source: Option<String>) -> Self {
        Self {
            email: email.into(),
            school: school.into(),
            source,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_entry_serializes_all_fields() {
        let entry = WaitlistEntry::pending("a@yale.edu", "Yale University", None);
        assert_eq!(entry.status, STATUS_PENDING);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["email"], "a@yale.edu");
        assert_eq!(value["school"], "Yale University");
        assert_eq!(value["status"], "pending");
        assert!(value["source"].is_null());
        assert!(value["created_at"].is_string());
    }
}
