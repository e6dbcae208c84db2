use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lox_terminal::state::{
    filter_bets, history_summary, search_players, Bet, BetFilters, Outcome, Player, Position,
};

const BET_TYPES: [&str; 4] = ["Points", "Rebounds", "Assists", "3-Pointers"];
const TEAMS: [&str; 8] = ["LAL", "GSW", "BOS", "MIA", "PHX", "DAL", "MIL", "DEN"];

fn build_bets(count: usize) -> Vec<Bet> {
    (0..count)
        .map(|i| Bet {
            player_name: format!("Player {i}"),
            team: TEAMS[i % TEAMS.len()].to_string(),
            opponent: TEAMS[(i + 1) % TEAMS.len()].to_string(),
            bet_type: BET_TYPES[i % BET_TYPES.len()].to_string(),
            line: 20.5 + (i % 10) as f64,
            confidence: (i % 101) as u8,
            game_date: "Oct 18, 2025".to_string(),
            outcome: match i % 3 {
                0 => Some(Outcome::Win),
                1 => Some(Outcome::Loss),
                _ => None,
            },
        })
        .collect()
}

fn build_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player {
            name: format!("Player Name {i}"),
            team: TEAMS[i % TEAMS.len()].to_string(),
            position: Position::PG,
            ppg: 20.0 + (i % 15) as f64,
            rpg: 5.0 + (i % 8) as f64,
            apg: 4.0 + (i % 7) as f64,
        })
        .collect()
}

fn bench_filter_bets(c: &mut Criterion) {
    let bets = build_bets(10_000);
    let mut filters = BetFilters::new();
    filters.set_bet_type("points");

    c.bench_function("filter_bets", |b| {
        b.iter(|| {
            let kept = filter_bets(black_box(&bets), black_box(&filters));
            black_box(kept.len());
        })
    });
}

fn bench_search_players(c: &mut Criterion) {
    let players = build_players(5_000);

    c.bench_function("search_players", |b| {
        b.iter(|| {
            let hits = search_players(black_box(&players), black_box("name 42"));
            black_box(hits.len());
        })
    });
}

fn bench_history_summary(c: &mut Criterion) {
    let bets = build_bets(10_000);

    c.bench_function("history_summary", |b| {
        b.iter(|| {
            let summary = history_summary(black_box(&bets));
            black_box(summary.win_rate);
        })
    });
}

criterion_group!(
    benches,
    bench_filter_bets,
    bench_search_players,
    bench_history_summary
);
criterion_main!(benches);
