//! Domain types returned by the registrar operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One activity as shown to students, with the e-mails of everyone registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Registered e-mails, oldest registration first.
    pub participants: Vec<String>,
}

/// Activity name → summary. Serializes as a JSON object keyed by name.
pub type Roster = BTreeMap<String, ActivitySummary>;

/// Success payload of signup and unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }

    pub fn unregistered(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity_name}"),
        }
    }
}
