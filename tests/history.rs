use lox_terminal::sample_feed::sample_history;
use lox_terminal::state::{apply_delta, history_summary, AppState, Delta, HistoryTab, Outcome};

#[test]
fn summary_over_the_sample_fixture() {
    let summary = history_summary(&sample_history());
    assert_eq!(summary.total, 4);
    assert_eq!(summary.wins, 3);
    assert_eq!(summary.losses, 1);
    assert_eq!(format!("{:.1}%", summary.win_rate), "75.0%");
    assert_eq!(format!("{:.1}%", summary.avg_confidence), "85.5%");
}

#[test]
fn empty_history_reports_zero_rates_instead_of_failing() {
    let summary = history_summary(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.win_rate, 0.0);
    assert_eq!(summary.avg_confidence, 0.0);
    assert_eq!(format!("{:.1}%", summary.win_rate), "0.0%");
}

#[test]
fn tabs_partition_without_reordering() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetHistory(sample_history()));

    state.history_tab = HistoryTab::All;
    let all: Vec<&str> = state
        .history_rows()
        .iter()
        .map(|b| b.player_name.as_str())
        .collect();
    assert_eq!(
        all,
        vec![
            "LeBron James",
            "Kevin Durant",
            "Damian Lillard",
            "Anthony Davis",
        ]
    );

    state.history_tab = HistoryTab::Wins;
    let wins: Vec<&str> = state
        .history_rows()
        .iter()
        .map(|b| b.player_name.as_str())
        .collect();
    assert_eq!(wins, vec!["LeBron James", "Kevin Durant", "Anthony Davis"]);

    state.history_tab = HistoryTab::Losses;
    let losses: Vec<&str> = state
        .history_rows()
        .iter()
        .map(|b| b.player_name.as_str())
        .collect();
    assert_eq!(losses, vec!["Damian Lillard"]);
}

#[test]
fn partition_predicates_are_pure_over_outcome() {
    let history = sample_history();
    for bet in &history {
        assert!(HistoryTab::All.matches(bet));
        assert_eq!(
            HistoryTab::Wins.matches(bet),
            bet.outcome == Some(Outcome::Win)
        );
        assert_eq!(
            HistoryTab::Losses.matches(bet),
            bet.outcome == Some(Outcome::Loss)
        );
    }
}

#[test]
fn tab_cycle_walks_all_then_wins_then_losses() {
    let mut tab = HistoryTab::All;
    tab = tab.cycle();
    assert_eq!(tab, HistoryTab::Wins);
    tab = tab.cycle();
    assert_eq!(tab, HistoryTab::Losses);
    tab = tab.cycle();
    assert_eq!(tab, HistoryTab::All);
}

#[test]
fn partitioning_leaves_the_stored_list_untouched() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetHistory(sample_history()));
    let snapshot = state.history.clone();

    state.history_tab = HistoryTab::Wins;
    let _ = state.history_rows();
    state.history_tab = HistoryTab::Losses;
    let _ = state.history_rows();

    assert_eq!(state.history, snapshot);
}
