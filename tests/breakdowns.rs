use talleres_terminal::aggregate::{
    category_breakdown, matches_against, matches_in_tournament, venue_breakdown,
};
use talleres_terminal::format::{category_sentence, format_result, venue_sentence};
use talleres_terminal::history::{MatchRecord, Venue};

fn rec(
    opponent: &str,
    outcome: &str,
    venue: &str,
    category: &str,
    tournament: &str,
) -> MatchRecord {
    MatchRecord {
        tournament: tournament.to_string(),
        category: category.to_string(),
        opponent: opponent.to_string(),
        venue_label: venue.to_string(),
        goals_for: 1,
        goals_against: 0,
        outcome_label: outcome.to_string(),
        round_or_stage: "Round 1".to_string(),
        penalty_detail: String::new(),
    }
}

fn sample() -> Vec<MatchRecord> {
    vec![
        rec("River Plate", "Win", "Home", "Primera División", "Copa Argentina 2023"),
        rec("River Plate", "Loss", "Away", "Primera División", "Liga Profesional 2023"),
        rec("River Plate", "Draw", "Home", "Primera División", "Liga Profesional 2023"),
        rec("River Plate", "Win", "Home", "Segunda División", "Primera Nacional 2015"),
        rec("Belgrano", "Win", "Neutral", "Primera División", "Copa Argentina 2023"),
    ]
}

#[test]
fn venue_breakdown_omits_venues_with_no_matches() {
    let records = sample();
    let lines = venue_breakdown(&records, "River Plate");

    // River Plate was never met on neutral ground; that venue must be absent,
    // not reported as a zero row.
    let venues: Vec<Venue> = lines.iter().map(|l| l.venue).collect();
    assert_eq!(venues, vec![Venue::Home, Venue::Away]);

    let total: usize = lines.iter().map(|l| l.tally.played).sum();
    assert_eq!(total, 4);

    let home = &lines[0].tally;
    assert_eq!((home.played, home.wins, home.draws, home.losses), (3, 2, 1, 0));
}

#[test]
fn category_breakdown_is_sorted_and_complete() {
    let records = sample();
    let lines = category_breakdown(&records, "River Plate");

    let categories: Vec<&str> = lines.iter().map(|l| l.category.as_str()).collect();
    assert_eq!(categories, vec!["Primera División", "Segunda División"]);

    let total: usize = lines.iter().map(|l| l.tally.played).sum();
    assert_eq!(total, 4);
}

#[test]
fn match_list_preserves_source_order() {
    let records = sample();
    let listed = matches_against(&records, "River Plate");
    let tournaments: Vec<&str> = listed.iter().map(|r| r.tournament.as_str()).collect();
    assert_eq!(
        tournaments,
        vec![
            "Copa Argentina 2023",
            "Liga Profesional 2023",
            "Liga Profesional 2023",
            "Primera Nacional 2015",
        ]
    );
}

#[test]
fn tournament_view_is_a_pure_filter_in_source_order() {
    let records = sample();
    let campaign = matches_in_tournament(&records, "Liga Profesional 2023");
    assert_eq!(campaign.len(), 2);
    assert!(campaign.iter().all(|r| r.tournament == "Liga Profesional 2023"));
    assert_eq!(campaign[0].outcome_label, "Loss");
    assert_eq!(campaign[1].outcome_label, "Draw");

    assert!(matches_in_tournament(&records, "Copa Libertadores 1999").is_empty());
}

#[test]
fn venue_sentence_reads_naturally() {
    let records = sample();
    let lines = venue_breakdown(&records, "River Plate");
    assert_eq!(
        venue_sentence(&lines[0]),
        "Talleres at home (3 played): won 2, drew 1 and lost 0."
    );
    assert_eq!(
        venue_sentence(&lines[1]),
        "Talleres away (1 played): won 0, drew 0 and lost 1."
    );
}

#[test]
fn category_sentence_is_phrased_symmetrically() {
    let records = sample();
    let lines = category_breakdown(&records, "River Plate");
    assert_eq!(
        category_sentence(&lines[0], "River Plate"),
        "In Primera División (3 played): Talleres won 1, 1 draws, River Plate won 1."
    );
}

#[test]
fn shootout_annotation_never_leaks_into_the_score() {
    let mut record = rec(
        "Belgrano",
        "Win",
        "Neutral",
        "Primera División",
        "Copa Argentina 2023",
    );
    record.goals_for = 1;
    record.goals_against = 1;
    record.penalty_detail = "5-4".to_string();

    let formatted = format_result(&record);
    assert_eq!(formatted.score, "1-1");
    assert_eq!(formatted.penalties.as_deref(), Some("Penalties: 5-4"));
    assert!(!formatted.score.contains("5-4"));
}
