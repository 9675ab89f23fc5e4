use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use infra::repos::{matches, teams, tournaments, UpsertMatch};

use super::format::{flatten_bracket, parse_bracket, MatchInput};
use super::positions::Round;
use crate::error::AppError;

/// Parameters for saving a bracket (parsed by the route handler).
pub struct SaveBracketParams {
    pub game_tag: String,
    pub dados: Map<String, Value>,
    pub stream_url: Option<String>,
}

/// Output of the save workflow, used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub tournament_id: Uuid,
    pub written: usize,
    pub skipped: usize,
}

/// Display name given to a tournament created on first write.
pub fn tournament_display_name(game_tag: &str) -> String {
    format!("Copa {}", game_tag.to_uppercase())
}

/// The team with strictly more points, provided both teams are known.
pub fn winner<T: Copy>(team1: Option<T>, team2: Option<T>, score1: i32, score2: i32) -> Option<T> {
    let (team1, team2) = (team1?, team2?);
    if score1 > score2 {
        Some(team1)
    } else if score2 > score1 {
        Some(team2)
    } else {
        None
    }
}

/// Get-or-create a team by exact name. Blank names resolve to no team.
pub async fn resolve_team(db: &PgPool, name: Option<&str>) -> sqlx::Result<Option<Uuid>> {
    match name {
        Some(name) if !name.trim().is_empty() => {
            Ok(Some(teams::get_or_create(db, name).await?.id))
        }
        _ => Ok(None),
    }
}

/// Current bracket for a game in the flat frontend shape. An unknown game
/// yields an empty object.
pub async fn read_bracket(db: &PgPool, game_tag: &str) -> Result<Map<String, Value>, AppError> {
    let Some(tournament) = tournaments::find_by_game(db, game_tag).await? else {
        tracing::debug!(game = %game_tag, "no tournament for game");
        return Ok(Map::new());
    };

    let rows = matches::list_with_teams(db, tournament.id).await?;
    Ok(flatten_bracket(&rows, tournament.stream_url.as_deref()))
}

/// Write every slot of the submitted bracket.
///
/// The payload is validated before anything is written. Slots are then saved
/// one by one without a surrounding transaction, so a database failure leaves
/// the slots written before it in place.
pub async fn save_bracket(db: &PgPool, params: SaveBracketParams) -> Result<SaveSummary, AppError> {
    let inputs = parse_bracket(&params.dados)?;

    let tournament = tournaments::get_or_create(
        db,
        &params.game_tag,
        &tournament_display_name(&params.game_tag),
    )
    .await?;

    if let Some(url) = params.stream_url.as_deref() {
        let url = url.trim();
        tournaments::set_stream_url(db, tournament.id, (!url.is_empty()).then_some(url)).await?;
    }

    let mut summary = SaveSummary {
        tournament_id: tournament.id,
        written: 0,
        skipped: 0,
    };

    for input in &inputs {
        if save_match(db, tournament.id, input).await? {
            summary.written += 1;
        } else {
            summary.skipped += 1;
        }
    }

    tracing::info!(
        game = %params.game_tag,
        tournament_id = %summary.tournament_id,
        written = summary.written,
        skipped = summary.skipped,
        "bracket saved"
    );

    Ok(summary)
}

/// Returns whether a row was written for the slot.
async fn save_match(db: &PgPool, tournament_id: Uuid, input: &MatchInput) -> Result<bool, AppError> {
    let team1_id = resolve_team(db, input.team1.as_deref()).await?;
    let team2_id = resolve_team(db, input.team2.as_deref()).await?;

    let data = UpsertMatch {
        tournament_id,
        position_code: input.code.to_string(),
        round: Round::from_code(input.code).map(|r| r.as_str().to_string()),
        team1_id,
        team2_id,
        score1: input.score1,
        score2: input.score2,
        winner_id: winner(team1_id, team2_id, input.score1, input.score2),
    };

    // Empty slots may clear an existing row but never create one.
    let written = if input.is_empty() {
        matches::update_existing(db, &data).await?.is_some()
    } else {
        matches::upsert(db, &data).await?;
        true
    };

    tracing::debug!(code = input.code, written, "match slot processed");
    Ok(written)
}
