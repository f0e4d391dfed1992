use std::path::PathBuf;

use talleres_terminal::history::{HistoryError, load_history};

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn history_loads_despite_messy_header_casing() {
    // The fixture header carries ` Tournament ` and `CATEGORY`; matching is
    // case- and whitespace-insensitive.
    let records = load_history(&fixture_path("history_basic.csv")).expect("fixture should load");
    assert_eq!(records.len(), 9);
    assert_eq!(records[0].opponent, "Boca Juniors");
    assert_eq!(records[0].round_or_stage, "Group Stage");
}

#[test]
fn tournament_underscores_become_spaces() {
    let records = load_history(&fixture_path("history_basic.csv")).expect("fixture should load");
    assert_eq!(records[0].tournament, "Copa Argentina 2023");
    assert_eq!(records[2].tournament, "Liga Profesional 2023");
    assert!(records.iter().all(|r| !r.tournament.contains('_')));
}

#[test]
fn missing_goals_default_to_zero() {
    let records = load_history(&fixture_path("history_basic.csv")).expect("fixture should load");
    let away_loss = &records[7];
    assert_eq!(away_loss.opponent, "Instituto");
    assert_eq!(away_loss.goals_for, 0);
    assert_eq!(away_loss.goals_against, 2);
}

#[test]
fn penalty_detail_is_an_empty_string_sentinel() {
    let records = load_history(&fixture_path("history_basic.csv")).expect("fixture should load");
    // Present for the shootout final, empty everywhere else, `nan` scrubbed.
    assert_eq!(records[4].penalty_detail, "4-2");
    assert_eq!(records[7].penalty_detail, "");
    assert!(records.iter().all(|r| r.penalty_detail != "nan"));
}

#[test]
fn absent_penalty_column_is_synthesized_empty() {
    let records =
        load_history(&fixture_path("no_penalty_column.csv")).expect("fixture should load");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.penalty_detail.is_empty()));
}

#[test]
fn missing_file_is_fatal_and_names_the_path() {
    let err = load_history(&fixture_path("definitely_absent.csv"))
        .expect_err("missing file must not load");
    assert!(matches!(err, HistoryError::MissingSource { .. }));
    assert!(err.to_string().contains("definitely_absent.csv"));
}

#[test]
fn missing_required_column_is_fatal_and_names_the_column() {
    let err = load_history(&fixture_path("missing_outcome.csv"))
        .expect_err("missing column must not load");
    match &err {
        HistoryError::MissingField { column } => assert_eq!(column, "outcome"),
        other => panic!("expected MissingField, got {other:?}"),
    }
    assert!(err.to_string().contains("'outcome'"));
}
