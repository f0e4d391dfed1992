use std::collections::HashMap;

use crate::history::{MatchRecord, Outcome, Venue};

/// Head-to-head totals against one opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentSummary {
    pub opponent: String,
    pub played: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl OpponentSummary {
    /// Win-minus-loss balance. Goals are tracked per match but do not feed
    /// this number; the original summary table defines it this way.
    pub fn balance(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }
}

/// One summary row per distinct opponent, sorted descending by games played.
/// The sort is stable, so opponents with equal game counts keep the order in
/// which they first appear in the source.
pub fn opponent_summaries(records: &[MatchRecord]) -> Vec<OpponentSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<OpponentSummary> = Vec::new();

    for record in records {
        let slot = match index.get(record.opponent.as_str()) {
            Some(&slot) => slot,
            None => {
                rows.push(OpponentSummary {
                    opponent: record.opponent.clone(),
                    played: 0,
                    wins: 0,
                    draws: 0,
                    losses: 0,
                });
                index.insert(record.opponent.as_str(), rows.len() - 1);
                rows.len() - 1
            }
        };
        let row = &mut rows[slot];
        row.played += 1;
        match record.outcome() {
            Some(Outcome::Win) => row.wins += 1,
            Some(Outcome::Draw) => row.draws += 1,
            Some(Outcome::Loss) => row.losses += 1,
            None => {}
        }
    }

    rows.sort_by(|a, b| b.played.cmp(&a.played));
    rows
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub played: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    fn add(&mut self, outcome: Option<Outcome>) {
        self.played += 1;
        match outcome {
            Some(Outcome::Win) => self.wins += 1,
            Some(Outcome::Draw) => self.draws += 1,
            Some(Outcome::Loss) => self.losses += 1,
            None => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueLine {
    pub venue: Venue,
    pub tally: Tally,
}

/// Per-venue split for one opponent, in Home/Away/Neutral order.
/// Venues with no matches against this opponent are omitted entirely.
pub fn venue_breakdown(records: &[MatchRecord], opponent: &str) -> Vec<VenueLine> {
    let mut tallies = [Tally::default(); 3];
    for record in records.iter().filter(|r| r.opponent == opponent) {
        let Some(venue) = record.venue_condition() else {
            continue;
        };
        tallies[venue as usize].add(record.outcome());
    }
    Venue::ALL
        .into_iter()
        .zip(tallies)
        .filter(|(_, tally)| tally.played > 0)
        .map(|(venue, tally)| VenueLine { venue, tally })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLine {
    pub category: String,
    pub tally: Tally,
}

/// Per-category split for one opponent, categories sorted ascending.
pub fn category_breakdown(records: &[MatchRecord], opponent: &str) -> Vec<CategoryLine> {
    let mut by_category: HashMap<&str, Tally> = HashMap::new();
    for record in records.iter().filter(|r| r.opponent == opponent) {
        by_category
            .entry(record.category.as_str())
            .or_default()
            .add(record.outcome());
    }
    let mut lines: Vec<CategoryLine> = by_category
        .into_iter()
        .map(|(category, tally)| CategoryLine {
            category: category.to_string(),
            tally,
        })
        .collect();
    lines.sort_by(|a, b| a.category.cmp(&b.category));
    lines
}

/// All matches against one opponent, in source order.
pub fn matches_against<'a>(records: &'a [MatchRecord], opponent: &str) -> Vec<&'a MatchRecord> {
    records.iter().filter(|r| r.opponent == opponent).collect()
}

/// All matches of one tournament, in source order. Pure filter, no aggregation.
pub fn matches_in_tournament<'a>(
    records: &'a [MatchRecord],
    tournament: &str,
) -> Vec<&'a MatchRecord> {
    records.iter().filter(|r| r.tournament == tournament).collect()
}

/// Distinct opponents, ascending, for the selector.
pub fn opponent_names(records: &[MatchRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.opponent.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Distinct tournaments, descending, so recent campaigns list first.
pub fn tournament_names(records: &[MatchRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.tournament.clone()).collect();
    names.sort_by(|a, b| b.cmp(a));
    names.dedup();
    names
}
