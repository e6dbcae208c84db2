use lox_terminal::state::{active_route, Screen, ROUTES};

#[test]
fn every_screen_path_activates_exactly_its_own_entry() {
    for (idx, route) in ROUTES.iter().enumerate() {
        assert_eq!(active_route(route.path), Some(idx));
        assert_eq!(ROUTES[idx].screen, route.screen);
    }
}

#[test]
fn at_most_one_entry_is_active_for_any_path() {
    for route in &ROUTES {
        let matching = ROUTES.iter().filter(|r| r.path == route.path).count();
        assert_eq!(matching, 1);
    }
}

#[test]
fn prefix_paths_do_not_match() {
    assert_eq!(active_route("/scor"), None);
    assert_eq!(active_route("/scores/1"), None);
    assert_eq!(active_route("/searching"), None);
    assert_eq!(active_route(""), None);
}

#[test]
fn screen_paths_round_trip_through_the_route_table() {
    for screen in [
        Screen::Dashboard,
        Screen::Search,
        Screen::History,
        Screen::Scores,
        Screen::About,
    ] {
        let idx = active_route(screen.path()).expect("every screen is routable");
        assert_eq!(ROUTES[idx].screen, screen);
    }
}

#[test]
fn route_labels_keep_their_display_order() {
    let labels: Vec<&str> = ROUTES.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec!["Dashboard", "Search", "History", "Scores", "About"]
    );
}
