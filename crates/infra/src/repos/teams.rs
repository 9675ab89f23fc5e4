use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::TeamRow;

pub async fn find_by_name<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, name, created_at
        FROM teams
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(executor)
    .await
}

/// Exact-name get-or-create backed by the unique index on `teams.name`.
pub async fn get_or_create<'e>(executor: impl PgExecutor<'e>, name: &str) -> SqlxResult<TeamRow> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        INSERT INTO teams (name)
        VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name, created_at
        "#,
    )
    .bind(name)
    .fetch_one(executor)
    .await
}
