use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HISTORY_FILE: &str = "match_history.csv";

/// Columns that must be present (after header normalization) for the file to load.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "tournament",
    "category",
    "opponent",
    "venue_condition",
    "goals_for",
    "goals_against",
    "outcome",
    "round_or_stage",
];

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file not found: {path}")]
    MissingSource { path: String },
    #[error("history file is missing required column '{column}'")]
    MissingField { column: String },
    #[error("failed to read history row: {0}")]
    BadRow(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
    Neutral,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::Home, Venue::Away, Venue::Neutral];

    pub fn parse(raw: &str) -> Option<Venue> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Venue::Home),
            "away" => Some(Venue::Away),
            "neutral" => Some(Venue::Neutral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn parse(raw: &str) -> Option<Outcome> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "win" => Some(Outcome::Win),
            "draw" => Some(Outcome::Draw),
            "loss" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// One played match. Immutable after load.
///
/// The venue and outcome cells keep their literal text for display; the typed
/// accessors parse on demand so every consumer stays total even when a cell
/// carries out-of-domain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub tournament: String,
    pub category: String,
    pub opponent: String,
    pub venue_label: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub outcome_label: String,
    pub round_or_stage: String,
    /// Empty string when the match was not decided on penalties.
    pub penalty_detail: String,
}

impl MatchRecord {
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::parse(&self.outcome_label)
    }

    pub fn venue_condition(&self) -> Option<Venue> {
        Venue::parse(&self.venue_label)
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    tournament: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    opponent: String,
    #[serde(default)]
    venue_condition: String,
    #[serde(default)]
    goals_for: String,
    #[serde(default)]
    goals_against: String,
    #[serde(default)]
    outcome: String,
    #[serde(default)]
    round_or_stage: String,
    #[serde(default)]
    penalty_detail: String,
}

/// Resolve the history file path: env override first, then the bundled default.
pub fn history_path() -> PathBuf {
    std::env::var("TALLERES_HISTORY_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
}

static HISTORY: OnceCell<Vec<MatchRecord>> = OnceCell::new();

/// Load the match history exactly once for the process lifetime.
///
/// Repeated calls return the cached snapshot without re-reading the source;
/// view recomputation never touches the file again.
pub fn load_once(path: &Path) -> Result<&'static [MatchRecord], HistoryError> {
    HISTORY
        .get_or_try_init(|| load_history(path))
        .map(|records| records.as_slice())
}

/// Read, validate and normalize the match history from a CSV file.
pub fn load_history(path: &Path) -> Result<Vec<MatchRecord>, HistoryError> {
    if !path.exists() {
        return Err(HistoryError::MissingSource {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    // Header names are matched case- and whitespace-insensitively.
    let normalized: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    for column in REQUIRED_COLUMNS {
        if !normalized.iter().any(|h| h == column) {
            return Err(HistoryError::MissingField {
                column: column.to_string(),
            });
        }
    }
    reader.set_headers(csv::StringRecord::from(normalized));

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let raw = row?;
        records.push(MatchRecord {
            tournament: raw.tournament.trim().replace('_', " "),
            category: raw.category.trim().to_string(),
            opponent: raw.opponent.trim().to_string(),
            venue_label: raw.venue_condition.trim().to_string(),
            goals_for: parse_goals(&raw.goals_for),
            goals_against: parse_goals(&raw.goals_against),
            outcome_label: raw.outcome.trim().to_string(),
            round_or_stage: raw.round_or_stage.trim().to_string(),
            penalty_detail: normalize_penalty(&raw.penalty_detail),
        });
    }
    Ok(records)
}

fn parse_goals(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

fn normalize_penalty(raw: &str) -> String {
    let s = raw.trim();
    // Spreadsheet exports sometimes carry a textual null marker.
    if s.eq_ignore_ascii_case("nan") || s.eq_ignore_ascii_case("null") {
        return String::new();
    }
    s.to_string()
}
