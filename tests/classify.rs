use lox_terminal::classify::{
    abbreviate_team, classify_status, confidence_tier, initials, status_group_label,
    ConfidenceTier, GamePhase,
};

#[test]
fn tiers_for_representative_confidence_values() {
    assert_eq!(confidence_tier(95), ConfidenceTier::High);
    assert_eq!(confidence_tier(70), ConfidenceTier::Medium);
    assert_eq!(confidence_tier(40), ConfidenceTier::Low);
}

#[test]
fn tier_boundaries_are_inclusive() {
    assert_eq!(confidence_tier(80), ConfidenceTier::High);
    assert_eq!(confidence_tier(79), ConfidenceTier::Medium);
    assert_eq!(confidence_tier(60), ConfidenceTier::Medium);
    assert_eq!(confidence_tier(59), ConfidenceTier::Low);
    assert_eq!(confidence_tier(0), ConfidenceTier::Low);
    assert_eq!(confidence_tier(100), ConfidenceTier::High);
}

#[test]
fn final_status_requires_an_exact_match() {
    assert_eq!(classify_status("Final"), GamePhase::Final);
    // Lowercase or padded variants fall through to the live fallback.
    assert_eq!(classify_status("final"), GamePhase::Live);
    assert_eq!(classify_status("Final "), GamePhase::Live);
}

#[test]
fn time_of_day_marker_means_scheduled() {
    assert_eq!(classify_status("7:30 PM ET"), GamePhase::Scheduled);
    assert_eq!(classify_status("7:30 PM"), GamePhase::Scheduled);
}

#[test]
fn anything_else_classifies_as_live() {
    assert_eq!(classify_status("Q4 2:35"), GamePhase::Live);
    assert_eq!(classify_status("Q3 8:12"), GamePhase::Live);
    assert_eq!(classify_status(""), GamePhase::Live);
    assert_eq!(classify_status("Halftime"), GamePhase::Live);
}

#[test]
fn scheduled_games_group_under_upcoming() {
    assert_eq!(status_group_label("7:30 PM ET"), "Upcoming");
    assert_eq!(status_group_label("Q4 2:35"), "Q4 2:35");
    assert_eq!(status_group_label("Final"), "Final");
}

#[test]
fn initials_join_the_first_letter_of_each_word() {
    assert_eq!(initials("LeBron James"), "LJ");
    assert_eq!(initials("Giannis Antetokounmpo"), "GA");
    assert_eq!(initials(""), "");
}

#[test]
fn team_abbreviations_take_city_prefix_or_word_initials() {
    assert_eq!(abbreviate_team("Los Angeles Lakers"), "LAL");
    assert_eq!(abbreviate_team("Golden State Warriors"), "GSW");
    assert_eq!(abbreviate_team("Boston Celtics"), "BOS");
    assert_eq!(abbreviate_team("Miami Heat"), "MIA");
    assert_eq!(abbreviate_team(""), "");
}
