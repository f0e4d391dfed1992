use ratatui::style::Color;

use crate::aggregate::{CategoryLine, VenueLine};
use crate::history::{MatchRecord, Outcome, Venue};

pub const CLUB_NAME: &str = "Talleres";

pub const WIN_COLOR: Color = Color::Rgb(0x34, 0xD3, 0x99);
pub const DRAW_COLOR: Color = Color::Rgb(0xFB, 0xBF, 0x24);
pub const LOSS_COLOR: Color = Color::Rgb(0xF8, 0x71, 0x71);
pub const NEUTRAL_COLOR: Color = Color::Rgb(0xE0, 0xE0, 0xE0);

/// Display form of one match result.
///
/// The penalty note is carried next to the score, never merged into it; the
/// UI renders it as a dim trailing annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    pub score: String,
    pub color: Color,
    pub penalties: Option<String>,
}

pub fn format_result(record: &MatchRecord) -> FormattedResult {
    FormattedResult {
        score: format!("{}-{}", record.goals_for, record.goals_against),
        color: outcome_color(record.outcome()),
        penalties: if record.penalty_detail.is_empty() {
            None
        } else {
            Some(format!("Penalties: {}", record.penalty_detail))
        },
    }
}

/// The outcome column is authoritative, so an unknown label should not occur;
/// it still maps to the neutral color rather than failing.
pub fn outcome_color(outcome: Option<Outcome>) -> Color {
    match outcome {
        Some(Outcome::Win) => WIN_COLOR,
        Some(Outcome::Draw) => DRAW_COLOR,
        Some(Outcome::Loss) => LOSS_COLOR,
        None => NEUTRAL_COLOR,
    }
}

/// Sign color for aggregate cells: positive green, negative red, zero neutral.
pub fn sign_color(value: i64) -> Color {
    if value > 0 {
        WIN_COLOR
    } else if value < 0 {
        LOSS_COLOR
    } else {
        NEUTRAL_COLOR
    }
}

pub fn venue_sentence(line: &VenueLine) -> String {
    let t = &line.tally;
    format!(
        "{} {} ({} played): won {}, drew {} and lost {}.",
        CLUB_NAME,
        venue_phrase(line.venue),
        t.played,
        t.wins,
        t.draws,
        t.losses,
    )
}

fn venue_phrase(venue: Venue) -> &'static str {
    match venue {
        Venue::Home => "at home",
        Venue::Away => "away",
        Venue::Neutral => "on neutral ground",
    }
}

/// Symmetric phrasing: the club's wins and the opponent's wins side by side.
pub fn category_sentence(line: &CategoryLine, opponent: &str) -> String {
    let t = &line.tally;
    format!(
        "In {} ({} played): {} won {}, {} draws, {} won {}.",
        line.category, t.played, CLUB_NAME, t.wins, t.draws, opponent, t.losses,
    )
}
