//! Activity catalog operations.

use sqlx::SqliteConnection;

use crate::{DbError, models::ActivityRow};

/// Insert a new activity into the catalog.
pub async fn insert_activity(
    conn: &mut SqliteConnection,
    activity: &ActivityRow,
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO activity (name, description, schedule, max_participants)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&activity.name)
    .bind(&activity.description)
    .bind(&activity.schedule)
    .bind(activity.max_participants)
    .execute(&mut *conn)
    .await
    .map_err(DbError::from_write)?;

    Ok(())
}

/// Fetch a single activity by name, or `None` when it does not exist.
pub async fn get_activity(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<ActivityRow>, DbError> {
    let row = sqlx::query_as::<_, ActivityRow>(
        r#"SELECT name, description, schedule, max_participants FROM activity WHERE name = ?"#,
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// Return every activity ordered by name.
pub async fn list_activities(conn: &mut SqliteConnection) -> Result<Vec<ActivityRow>, DbError> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        r#"SELECT name, description, schedule, max_participants FROM activity ORDER BY name"#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Number of rows in the catalog.
pub async fn count_activities(conn: &mut SqliteConnection) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activity")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}
