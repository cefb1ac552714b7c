//! Bootstrap data: the activity catalog and the registrations it opens with.

use chrono::Utc;
use tracing::info;

use db::models::ActivityRow;
use db::repository::{activities as activity_repo, participants as participant_repo};
use db::{DbError, DbPool};

use crate::RegistrarError;

/// One catalog entry together with its opening registrations.
#[derive(Debug, Clone, Copy)]
pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

pub const CATALOG: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Insert [`CATALOG`] when the activity table is empty.
///
/// Returns `true` if the catalog was written, `false` if the store already held
/// activities and was left untouched.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, RegistrarError> {
    let mut conn = pool.acquire().await.map_err(DbError::from)?;
    if activity_repo::count_activities(&mut conn).await? > 0 {
        info!("Activity catalog already populated, skipping seed");
        return Ok(false);
    }

    // First statement is a write, so the transaction takes the write lock up front.
    let mut tx = sqlx::Connection::begin(&mut *conn)
        .await
        .map_err(DbError::from)?;

    let now = Utc::now();
    let mut registrations = 0usize;
    for entry in CATALOG {
        let row = ActivityRow {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            schedule: entry.schedule.to_string(),
            max_participants: entry.max_participants,
        };
        activity_repo::insert_activity(&mut tx, &row).await?;

        for email in entry.participants {
            participant_repo::insert_participant(&mut tx, entry.name, email, now).await?;
            registrations += 1;
        }
    }

    tx.commit().await.map_err(DbError::from)?;

    info!(activities = CATALOG.len(), registrations, "Seeded activity catalog");
    Ok(true)
}
