#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

/// Display tier for a confidence figure. Presentation only; list filtering
/// compares against the raw threshold instead.
pub fn confidence_tier(confidence: u8) -> ConfidenceTier {
    if confidence >= 80 {
        ConfidenceTier::High
    } else if confidence >= 60 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Final,
    Scheduled,
    Live,
}

/// "Final" must match exactly; a time-of-day marker means the game has not
/// tipped off yet; anything else is treated as an in-progress clock.
pub fn classify_status(status: &str) -> GamePhase {
    if status == "Final" {
        GamePhase::Final
    } else if status.contains("PM") {
        GamePhase::Scheduled
    } else {
        GamePhase::Live
    }
}

pub fn status_group_label(status: &str) -> String {
    match classify_status(status) {
        GamePhase::Scheduled => "Upcoming".to_string(),
        _ => status.to_string(),
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn abbreviate_team(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.len() {
        0 => String::new(),
        // "Boston Celtics" -> BOS, "Miami Heat" -> MIA
        1 | 2 => words[0].chars().take(3).collect::<String>().to_uppercase(),
        // "Los Angeles Lakers" -> LAL, "Golden State Warriors" -> GSW
        _ => words
            .iter()
            .filter_map(|word| word.chars().next())
            .take(3)
            .collect::<String>()
            .to_uppercase(),
    }
}
