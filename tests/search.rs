use lox_terminal::sample_feed::sample_players;
use lox_terminal::state::{apply_delta, search_players, AppState, Delta};

#[test]
fn empty_query_returns_no_results() {
    let players = sample_players();
    assert!(search_players(&players, "").is_empty());
}

#[test]
fn query_matches_substrings_case_insensitively() {
    let players = sample_players();
    let results = search_players(&players, "LEB");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "LeBron James");

    let results = search_players(&players, "curry");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Stephen Curry");
}

#[test]
fn results_preserve_source_order() {
    let players = sample_players();
    // "a" hits four of the five fixture names; the listing must keep fixture order.
    let results = search_players(&players, "a");
    let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "LeBron James",
            "Jayson Tatum",
            "Luka Doncic",
            "Giannis Antetokounmpo",
        ]
    );
}

#[test]
fn unmatched_query_returns_empty_without_error() {
    let players = sample_players();
    assert!(search_players(&players, "zz").is_empty());
}

#[test]
fn selecting_then_clearing_returns_to_the_same_results() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPlayers(sample_players()));
    state.search.push_char('a');

    let before: Vec<String> = state
        .search_results()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert!(!before.is_empty());

    let picked = state.search_results()[1].clone();
    state.search.select(picked.clone());
    assert_eq!(state.search.selected_player.as_ref(), Some(&picked));

    state.search.clear_selection();
    assert!(state.search.selected_player.is_none());
    assert!(state.search.game_log.is_empty());

    let after: Vec<String> = state
        .search_results()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn query_edits_reset_the_result_cursor() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPlayers(sample_players()));
    state.search.push_char('a');
    state.select_next_result();
    state.select_next_result();
    assert_eq!(state.search.cursor, 2);

    state.search.pop_char();
    assert_eq!(state.search.cursor, 0);
}

#[test]
fn result_cursor_wraps_in_both_directions() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SetPlayers(sample_players()));
    state.search.push_char('a');
    let total = state.search_results().len();

    state.select_prev_result();
    assert_eq!(state.search.cursor, total - 1);
    state.select_next_result();
    assert_eq!(state.search.cursor, 0);
}
