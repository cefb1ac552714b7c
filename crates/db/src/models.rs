//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `registrar` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// activity
// ---------------------------------------------------------------------------

/// A persisted activity row. `name` is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    /// Free-text schedule, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,
    pub max_participants: i64,
}

// ---------------------------------------------------------------------------
// participant
// ---------------------------------------------------------------------------

/// A persisted participant row: one student registered for one activity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParticipantRow {
    pub id: i64,
    pub email: String,
    pub activity_name: String,
    pub registered_at: DateTime<Utc>,
}
