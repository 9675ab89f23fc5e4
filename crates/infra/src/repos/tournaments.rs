use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TournamentRow;

pub async fn find_by_game<'e>(
    executor: impl PgExecutor<'e>,
    game: &str,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT id, game, name, stream_url, created_at
        FROM tournaments
        WHERE game = $1
        "#,
    )
    .bind(game)
    .fetch_optional(executor)
    .await
}

/// Return the tournament for `game`, creating it with `name` when absent.
///
/// The no-op `DO UPDATE` makes `RETURNING` yield the existing row on conflict,
/// so two callers racing on a new tag still end up with a single tournament.
pub async fn get_or_create<'e>(
    executor: impl PgExecutor<'e>,
    game: &str,
    name: &str,
) -> SqlxResult<TournamentRow> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        INSERT INTO tournaments (game, name)
        VALUES ($1, $2)
        ON CONFLICT (game) DO UPDATE SET game = EXCLUDED.game
        RETURNING id, game, name, stream_url, created_at
        "#,
    )
    .bind(game)
    .bind(name)
    .fetch_one(executor)
    .await
}

pub async fn set_stream_url<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    stream_url: Option<&str>,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        UPDATE tournaments
        SET stream_url = $2
        WHERE id = $1
        RETURNING id, game, name, stream_url, created_at
        "#,
    )
    .bind(id)
    .bind(stream_url)
    .fetch_optional(executor)
    .await
}
