//! Signup operations.
//!
//! Each operation holds one pooled connection for its whole run. The
//! connection goes back to the pool when it is dropped, on every exit path.
//!
//! The duplicate and capacity checks are read before the write to report the
//! precise reason for a rejection. The write itself is a single autocommit
//! statement: a guarded insert backed by a UNIQUE index, or a delete by id.
//! SQLite takes the write lock at the start of such a statement and waits on
//! the busy timeout, so a writer never has to upgrade a stale read snapshot.
//! A signup that loses a race therefore sees `ActivityFull` or
//! `AlreadySignedUp`, and an unregister sees `NotRegistered`.

use chrono::Utc;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info, instrument};

use db::repository::{activities as activity_repo, participants as participant_repo};
use db::{DbError, DbPool};

use crate::{ActivitySummary, Confirmation, RegistrarError, Roster};

async fn acquire(pool: &DbPool) -> Result<PoolConnection<Sqlite>, RegistrarError> {
    Ok(pool.acquire().await.map_err(DbError::from)?)
}

async fn begin(pool: &DbPool) -> Result<Transaction<'static, Sqlite>, RegistrarError> {
    Ok(pool.begin().await.map_err(DbError::from)?)
}

async fn commit(tx: Transaction<'static, Sqlite>) -> Result<(), RegistrarError> {
    tx.commit().await.map_err(DbError::from)?;
    Ok(())
}

/// Every activity with its registered students, read from one snapshot.
#[instrument(skip(pool))]
pub async fn list_activities(pool: &DbPool) -> Result<Roster, RegistrarError> {
    let mut tx = begin(pool).await?;
    let activities = activity_repo::list_activities(&mut tx).await?;
    let participants = participant_repo::list_participants(&mut tx).await?;
    commit(tx).await?;

    let mut roster: Roster = activities
        .into_iter()
        .map(|a| {
            let summary = ActivitySummary {
                description: a.description,
                schedule: a.schedule,
                max_participants: a.max_participants,
                participants: Vec::new(),
            };
            (a.name, summary)
        })
        .collect();

    for p in participants {
        if let Some(summary) = roster.get_mut(&p.activity_name) {
            summary.participants.push(p.email);
        }
    }

    debug!(activities = roster.len(), "Listed activities");
    Ok(roster)
}

/// Register `email` for `activity_name`.
///
/// # Errors
/// - [`RegistrarError::ActivityNotFound`] if the activity does not exist.
/// - [`RegistrarError::AlreadySignedUp`] if the student is already registered.
/// - [`RegistrarError::ActivityFull`] if no seat is left.
#[instrument(skip(pool))]
pub async fn signup(
    pool: &DbPool,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistrarError> {
    let mut conn = acquire(pool).await?;

    let activity = activity_repo::get_activity(&mut conn, activity_name)
        .await?
        .ok_or(RegistrarError::ActivityNotFound)?;

    if participant_repo::find_participant(&mut conn, activity_name, email)
        .await?
        .is_some()
    {
        return Err(RegistrarError::AlreadySignedUp);
    }

    let taken = participant_repo::count_participants(&mut conn, activity_name).await?;
    if taken >= activity.max_participants {
        return Err(RegistrarError::ActivityFull);
    }

    let inserted = participant_repo::insert_participant_if_capacity(
        &mut conn,
        activity_name,
        email,
        Utc::now(),
    )
    .await;

    let participant = match inserted {
        Ok(Some(row)) => row,
        // Lost a race for the last seat.
        Ok(None) => return Err(RegistrarError::ActivityFull),
        Err(DbError::UniqueViolation(_)) => return Err(RegistrarError::AlreadySignedUp),
        Err(e) => return Err(e.into()),
    };

    info!(participant_id = participant.id, "Student signed up");
    Ok(Confirmation::signed_up(email, activity_name))
}

/// Remove the registration of `email` for `activity_name`.
///
/// # Errors
/// - [`RegistrarError::ActivityNotFound`] if the activity does not exist.
/// - [`RegistrarError::NotRegistered`] if the student holds no registration.
#[instrument(skip(pool))]
pub async fn unregister(
    pool: &DbPool,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistrarError> {
    let mut conn = acquire(pool).await?;

    if activity_repo::get_activity(&mut conn, activity_name).await?.is_none() {
        return Err(RegistrarError::ActivityNotFound);
    }

    let participant = participant_repo::find_participant(&mut conn, activity_name, email)
        .await?
        .ok_or(RegistrarError::NotRegistered)?;

    match participant_repo::delete_participant(&mut conn, participant.id).await {
        Ok(()) => {}
        // Another request removed it between the lookup and the delete.
        Err(DbError::NotFound) => return Err(RegistrarError::NotRegistered),
        Err(e) => return Err(e.into()),
    }

    info!(participant_id = participant.id, "Student unregistered");
    Ok(Confirmation::unregistered(email, activity_name))
}
