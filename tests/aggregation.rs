use talleres_terminal::aggregate::{opponent_names, opponent_summaries, tournament_names};
use talleres_terminal::format::{LOSS_COLOR, NEUTRAL_COLOR, WIN_COLOR, sign_color};
use talleres_terminal::history::MatchRecord;

fn rec(opponent: &str, outcome: &str, goals_for: u32, goals_against: u32) -> MatchRecord {
    MatchRecord {
        tournament: "Liga Profesional 2024".to_string(),
        category: "Primera División".to_string(),
        opponent: opponent.to_string(),
        venue_label: "Home".to_string(),
        goals_for,
        goals_against,
        outcome_label: outcome.to_string(),
        round_or_stage: "Round 1".to_string(),
        penalty_detail: String::new(),
    }
}

#[test]
fn river_plate_worked_example() {
    let records = vec![
        rec("River Plate", "Win", 2, 1),
        rec("River Plate", "Loss", 0, 3),
        rec("River Plate", "Draw", 1, 1),
    ];
    let rows = opponent_summaries(&records);
    assert_eq!(rows.len(), 1);

    let river = &rows[0];
    assert_eq!(river.opponent, "River Plate");
    assert_eq!(river.played, 3);
    assert_eq!(river.wins, 1);
    assert_eq!(river.draws, 1);
    assert_eq!(river.losses, 1);
    assert_eq!(river.balance(), 0);
    assert_eq!(sign_color(river.balance()), NEUTRAL_COLOR);
}

#[test]
fn outcome_counts_always_sum_to_games_played() {
    let records = vec![
        rec("Belgrano", "Win", 1, 0),
        rec("Belgrano", "Win", 2, 0),
        rec("Belgrano", "Draw", 0, 0),
        rec("Instituto", "Loss", 0, 1),
        rec("Racing", "Draw", 2, 2),
        rec("Racing", "Loss", 1, 3),
    ];
    for row in opponent_summaries(&records) {
        assert_eq!(
            row.wins + row.draws + row.losses,
            row.played,
            "counts must add up for {}",
            row.opponent
        );
    }
}

#[test]
fn balance_is_wins_minus_losses_with_matching_sign_color() {
    let records = vec![
        rec("Belgrano", "Win", 1, 0),
        rec("Belgrano", "Win", 3, 2),
        rec("Belgrano", "Loss", 0, 1),
        rec("Instituto", "Loss", 0, 4),
    ];
    let rows = opponent_summaries(&records);

    let belgrano = rows.iter().find(|r| r.opponent == "Belgrano").unwrap();
    // Not goal difference: Belgrano's goal totals would give 4-3 = +1 too,
    // but Instituto's 0-4 still maps to -1, not -4.
    assert_eq!(belgrano.balance(), 1);
    assert_eq!(sign_color(belgrano.balance()), WIN_COLOR);

    let instituto = rows.iter().find(|r| r.opponent == "Instituto").unwrap();
    assert_eq!(instituto.balance(), -1);
    assert_eq!(sign_color(instituto.balance()), LOSS_COLOR);
}

#[test]
fn summary_sorts_by_games_played_descending_with_stable_ties() {
    let records = vec![
        rec("Atlanta", "Win", 1, 0),
        rec("Belgrano", "Win", 1, 0),
        rec("Belgrano", "Draw", 1, 1),
        rec("Quilmes", "Loss", 0, 1),
    ];
    let rows = opponent_summaries(&records);
    let order: Vec<&str> = rows.iter().map(|r| r.opponent.as_str()).collect();
    // Belgrano leads on games; Atlanta and Quilmes tie and keep source order.
    assert_eq!(order, vec!["Belgrano", "Atlanta", "Quilmes"]);
}

#[test]
fn out_of_domain_outcome_counts_the_game_but_no_result() {
    let records = vec![rec("Belgrano", "Abandoned", 0, 0), rec("Belgrano", "Win", 1, 0)];
    let rows = opponent_summaries(&records);
    assert_eq!(rows[0].played, 2);
    assert_eq!(rows[0].wins, 1);
    assert_eq!(rows[0].draws + rows[0].losses, 0);
}

#[test]
fn selector_name_lists_are_sorted_and_deduplicated() {
    let mut records = vec![
        rec("Quilmes", "Win", 1, 0),
        rec("Atlanta", "Draw", 0, 0),
        rec("Quilmes", "Loss", 0, 2),
    ];
    records[0].tournament = "Copa Argentina 2021".to_string();
    records[1].tournament = "Liga Profesional 2024".to_string();
    records[2].tournament = "Copa Argentina 2021".to_string();

    assert_eq!(opponent_names(&records), vec!["Atlanta", "Quilmes"]);
    assert_eq!(
        tournament_names(&records),
        vec!["Liga Profesional 2024", "Copa Argentina 2021"]
    );
}
