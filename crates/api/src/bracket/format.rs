//! Translation between the flat key-value shape used by the HTML frontend and
//! match slots.
//!
//! The admin panel sends and reads hyphenated keys (`o1-t1-n`, `o1-t1-s`); the
//! public bracket page reads compact keys (`o1t1n`, `o1t1s`). Both sides use
//! `f` instead of `final` as the prefix of the last match.

use infra::models::MatchWithTeamsRow;
use serde_json::{Map, Value};
use thiserror::Error;

use super::positions::{key_prefix, BRACKET_FORMAT, POSITION_CODES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Placar inválido em {key}: {value}")]
    InvalidScore { key: String, value: String },

    #[error("Nome de time inválido em {key}")]
    InvalidName { key: String },
}

/// One slot as submitted by the admin panel, before team names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInput {
    pub code: &'static str,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub score1: i32,
    pub score2: i32,
}

impl MatchInput {
    /// No team and no points: nothing worth a new row.
    pub fn is_empty(&self) -> bool {
        self.team1.is_none() && self.team2.is_none() && self.score1 == 0 && self.score2 == 0
    }
}

/// Admin panel key, e.g. `hyphenated_key("final", 2, 's') == "f-t2-s"`.
pub fn hyphenated_key(code: &str, team: u8, field: char) -> String {
    format!("{}-t{}-{}", key_prefix(code), team, field)
}

/// Public page key, e.g. `compact_key("o1", 1, 'n') == "o1t1n"`.
pub fn compact_key(code: &str, team: u8, field: char) -> String {
    format!("{}t{}{}", key_prefix(code), team, field)
}

/// Read every known slot out of the admin payload. Keys that are not part of
/// the bracket are ignored.
pub fn parse_bracket(dados: &Map<String, Value>) -> Result<Vec<MatchInput>, FormatError> {
    POSITION_CODES
        .iter()
        .map(|&code| -> Result<MatchInput, FormatError> {
            Ok(MatchInput {
                code,
                team1: read_name(dados, &hyphenated_key(code, 1, 'n'))?,
                team2: read_name(dados, &hyphenated_key(code, 2, 'n'))?,
                score1: read_score(dados, &hyphenated_key(code, 1, 's'))?,
                score2: read_score(dados, &hyphenated_key(code, 2, 's'))?,
            })
        })
        .collect()
}

fn read_name(dados: &Map<String, Value>, key: &str) -> Result<Option<String>, FormatError> {
    match dados.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) if name.trim().is_empty() => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(_) => Err(FormatError::InvalidName {
            key: key.to_string(),
        }),
    }
}

fn read_score(dados: &Map<String, Value>, key: &str) -> Result<i32, FormatError> {
    let Some(value) = dados.get(key) else {
        return Ok(0);
    };

    let score = match value {
        Value::Null => Some(0),
        Value::String(raw) if raw.trim().is_empty() => Some(0),
        Value::String(raw) => raw.trim().parse().ok(),
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        _ => None,
    };

    score.ok_or_else(|| FormatError::InvalidScore {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Build the response object served to both frontends.
pub fn flatten_bracket(rows: &[MatchWithTeamsRow], stream_url: Option<&str>) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("formato".into(), Value::from(BRACKET_FORMAT));
    if let Some(url) = stream_url {
        out.insert("stream_url".into(), Value::from(url));
    }

    for row in rows {
        let code = row.position_code.as_str();
        let t1 = row.team1_name.clone().unwrap_or_default();
        let t2 = row.team2_name.clone().unwrap_or_default();

        for key in [compact_key(code, 1, 'n'), hyphenated_key(code, 1, 'n')] {
            out.insert(key, Value::from(t1.as_str()));
        }
        for key in [compact_key(code, 2, 'n'), hyphenated_key(code, 2, 'n')] {
            out.insert(key, Value::from(t2.as_str()));
        }
        for key in [compact_key(code, 1, 's'), hyphenated_key(code, 1, 's')] {
            out.insert(key, Value::from(row.score1));
        }
        for key in [compact_key(code, 2, 's'), hyphenated_key(code, 2, 's')] {
            out.insert(key, Value::from(row.score2));
        }
    }

    out
}
