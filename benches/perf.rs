use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use talleres_terminal::aggregate::{opponent_summaries, venue_breakdown};
use talleres_terminal::history::MatchRecord;

fn synthetic_history(n: usize) -> Vec<MatchRecord> {
    (0..n)
        .map(|i| MatchRecord {
            tournament: format!("Liga Profesional {}", 1990 + (i % 30)),
            category: if i % 7 == 0 {
                "Segunda División".to_string()
            } else {
                "Primera División".to_string()
            },
            opponent: format!("Club {}", i % 40),
            venue_label: ["Home", "Away", "Neutral"][i % 3].to_string(),
            goals_for: (i % 4) as u32,
            goals_against: ((i + 1) % 3) as u32,
            outcome_label: ["Win", "Draw", "Loss"][i % 3].to_string(),
            round_or_stage: format!("Round {}", i % 38),
            penalty_detail: String::new(),
        })
        .collect()
}

fn bench_opponent_summaries(c: &mut Criterion) {
    let records = synthetic_history(5000);
    c.bench_function("opponent_summaries", |b| {
        b.iter(|| {
            let rows = opponent_summaries(black_box(&records));
            black_box(rows.len());
        })
    });
}

fn bench_venue_breakdown(c: &mut Criterion) {
    let records = synthetic_history(5000);
    c.bench_function("venue_breakdown", |b| {
        b.iter(|| {
            let lines = venue_breakdown(black_box(&records), "Club 7");
            black_box(lines.len());
        })
    });
}

criterion_group!(benches, bench_opponent_summaries, bench_venue_breakdown);
criterion_main!(benches);
