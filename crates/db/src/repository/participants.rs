//! Participant registration operations.
//!
//! A `(activity_name, email)` pair is unique at the schema level, so a
//! duplicate insert surfaces as [`DbError::UniqueViolation`].

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use crate::{DbError, models::ParticipantRow};

/// Register `email` for `activity_name` unconditionally.
pub async fn insert_participant(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
    registered_at: DateTime<Utc>,
) -> Result<ParticipantRow, DbError> {
    let row = sqlx::query_as::<_, ParticipantRow>(
        r#"
        INSERT INTO participant (email, activity_name, registered_at)
        VALUES (?, ?, ?)
        RETURNING id, email, activity_name, registered_at
        "#,
    )
    .bind(email)
    .bind(activity_name)
    .bind(registered_at)
    .fetch_one(&mut *conn)
    .await
    .map_err(DbError::from_write)?;

    Ok(row)
}

/// Register `email` for `activity_name` only while the activity has a free seat.
///
/// The seat count and the insert happen in one statement, so two writers can
/// never both take the last seat. Returns `None` when the activity is full
/// (or does not exist).
pub async fn insert_participant_if_capacity(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
    registered_at: DateTime<Utc>,
) -> Result<Option<ParticipantRow>, DbError> {
    let row = sqlx::query_as::<_, ParticipantRow>(
        r#"
        INSERT INTO participant (email, activity_name, registered_at)
        SELECT ?1, a.name, ?3
        FROM activity a
        WHERE a.name = ?2
          AND (SELECT COUNT(*) FROM participant p WHERE p.activity_name = a.name)
              < a.max_participants
        RETURNING id, email, activity_name, registered_at
        "#,
    )
    .bind(email)
    .bind(activity_name)
    .bind(registered_at)
    .fetch_optional(&mut *conn)
    .await
    .map_err(DbError::from_write)?;

    Ok(row)
}

/// Look up the registration of `email` for `activity_name`.
pub async fn find_participant(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> Result<Option<ParticipantRow>, DbError> {
    let row = sqlx::query_as::<_, ParticipantRow>(
        r#"
        SELECT id, email, activity_name, registered_at
        FROM participant
        WHERE activity_name = ? AND email = ?
        "#,
    )
    .bind(activity_name)
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// Number of students currently registered for `activity_name`.
pub async fn count_participants(
    conn: &mut SqliteConnection,
    activity_name: &str,
) -> Result<i64, DbError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM participant WHERE activity_name = ?")
            .bind(activity_name)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count)
}

/// Return every registration, oldest first.
pub async fn list_participants(
    conn: &mut SqliteConnection,
) -> Result<Vec<ParticipantRow>, DbError> {
    let rows = sqlx::query_as::<_, ParticipantRow>(
        r#"SELECT id, email, activity_name, registered_at FROM participant ORDER BY id ASC"#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Permanently delete a registration by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_participant(conn: &mut SqliteConnection, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM participant WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
