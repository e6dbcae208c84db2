use lox_terminal::sample_feed::{sample_bets, sample_players};
use lox_terminal::state::{apply_delta, AppState, Delta, GameLogRow};

fn log_row(points: u8) -> GameLogRow {
    GameLogRow {
        opponent: "BOS".to_string(),
        points,
        rebounds: 5,
        assists: 4,
    }
}

#[test]
fn set_bets_clamps_the_dashboard_selection() {
    let mut state = AppState::new();
    state.filters.set_confidence(0);
    apply_delta(&mut state, Delta::SetBets(sample_bets()));
    state.selected_bet = 3;

    apply_delta(&mut state, Delta::SetBets(sample_bets()[..1].to_vec()));
    assert_eq!(state.selected_bet, 0);
}

#[test]
fn game_log_applies_only_to_the_still_selected_player() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPlayers(sample_players()));
    let lebron = state.players[0].clone();
    state.search.select(lebron);

    apply_delta(
        &mut state,
        Delta::SetGameLog {
            player: "Stephen Curry".to_string(),
            rows: vec![log_row(30)],
        },
    );
    assert!(state.search.game_log.is_empty());

    apply_delta(
        &mut state,
        Delta::SetGameLog {
            player: "LeBron James".to_string(),
            rows: vec![log_row(28), log_row(22)],
        },
    );
    assert_eq!(state.search.game_log.len(), 2);
    assert_eq!(state.search.game_log[0].points, 28);
}

#[test]
fn game_log_for_a_cleared_selection_is_dropped() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPlayers(sample_players()));
    let curry = state.players[1].clone();
    state.search.select(curry);
    state.search.clear_selection();

    apply_delta(
        &mut state,
        Delta::SetGameLog {
            player: "Stephen Curry".to_string(),
            rows: vec![log_row(31)],
        },
    );
    assert!(state.search.game_log.is_empty());
}

#[test]
fn console_log_is_capped() {
    let mut state = AppState::new();
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}

#[test]
fn set_players_clamps_the_search_cursor() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPlayers(sample_players()));
    // "e" matches LeBron, Stephen and Giannis in the full fixture.
    state.search.push_char('e');
    state.search.cursor = 4;

    apply_delta(&mut state, Delta::SetPlayers(sample_players()[..2].to_vec()));
    assert_eq!(state.search.cursor, 1);
}

#[test]
fn set_history_replaces_the_list() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetHistory(sample_bets()));
    assert_eq!(state.history.len(), 4);

    apply_delta(&mut state, Delta::SetHistory(Vec::new()));
    assert!(state.history.is_empty());
    assert_eq!(state.history_summary().win_rate, 0.0);
}
