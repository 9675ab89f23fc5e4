use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{MatchRow, MatchWithTeamsRow};

#[derive(Debug, Clone)]
pub struct UpsertMatch {
    pub tournament_id: Uuid,
    pub position_code: String,
    pub round: Option<String>,
    pub team1_id: Option<Uuid>,
    pub team2_id: Option<Uuid>,
    pub score1: i32,
    pub score2: i32,
    pub winner_id: Option<Uuid>,
}

/// Insert the slot or overwrite the existing row for (tournament, position code).
pub async fn upsert<'e>(executor: impl PgExecutor<'e>, data: &UpsertMatch) -> SqlxResult<MatchRow> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        INSERT INTO matches (
            tournament_id, position_code, round,
            team1_id, team2_id, score1, score2, winner_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (tournament_id, position_code) DO UPDATE
        SET round = EXCLUDED.round,
            team1_id = EXCLUDED.team1_id,
            team2_id = EXCLUDED.team2_id,
            score1 = EXCLUDED.score1,
            score2 = EXCLUDED.score2,
            winner_id = EXCLUDED.winner_id,
            updated_at = NOW()
        RETURNING id, tournament_id, position_code, round,
                  team1_id, team2_id, score1, score2, winner_id, updated_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(&data.position_code)
    .bind(&data.round)
    .bind(data.team1_id)
    .bind(data.team2_id)
    .bind(data.score1)
    .bind(data.score2)
    .bind(data.winner_id)
    .fetch_one(executor)
    .await
}

/// Overwrite an existing slot without ever inserting one.
/// Returns `None` when the tournament has no row for that position code.
pub async fn update_existing<'e>(
    executor: impl PgExecutor<'e>,
    data: &UpsertMatch,
) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        UPDATE matches
        SET round = $3,
            team1_id = $4,
            team2_id = $5,
            score1 = $6,
            score2 = $7,
            winner_id = $8,
            updated_at = NOW()
        WHERE tournament_id = $1 AND position_code = $2
        RETURNING id, tournament_id, position_code, round,
                  team1_id, team2_id, score1, score2, winner_id, updated_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(&data.position_code)
    .bind(&data.round)
    .bind(data.team1_id)
    .bind(data.team2_id)
    .bind(data.score1)
    .bind(data.score2)
    .bind(data.winner_id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_position<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    position_code: &str,
) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, tournament_id, position_code, round,
               team1_id, team2_id, score1, score2, winner_id, updated_at
        FROM matches
        WHERE tournament_id = $1 AND position_code = $2
        "#,
    )
    .bind(tournament_id)
    .bind(position_code)
    .fetch_optional(executor)
    .await
}

pub async fn list_with_teams<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<MatchWithTeamsRow>> {
    sqlx::query_as::<_, MatchWithTeamsRow>(
        r#"
        SELECT m.position_code, m.score1, m.score2,
               t1.name AS team1_name, t2.name AS team2_name
        FROM matches m
        LEFT JOIN teams t1 ON t1.id = m.team1_id
        LEFT JOIN teams t2 ON t2.id = m.team2_id
        WHERE m.tournament_id = $1
        ORDER BY m.position_code ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

pub async fn count_for_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches WHERE tournament_id = $1")
        .bind(tournament_id)
        .fetch_one(executor)
        .await
}
