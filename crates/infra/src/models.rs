use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRow {
    pub id: Uuid,
    pub game: String,
    pub name: String,
    pub stream_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub position_code: String,
    pub round: Option<String>,
    pub team1_id: Option<Uuid>,
    pub team2_id: Option<Uuid>,
    pub score1: i32,
    pub score2: i32,
    pub winner_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

/// A match slot joined with the names of both teams, as shown on the bracket.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchWithTeamsRow {
    pub position_code: String,
    pub score1: i32,
    pub score2: i32,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
}
