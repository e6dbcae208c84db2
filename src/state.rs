use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIDENCE: u8 = 70;
pub const CONFIDENCE_STEP: u8 = 5;

pub const BET_TYPE_CHOICES: [&str; 5] = ["all", "points", "rebounds", "assists", "3-pointers"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub player_name: String,
    pub team: String,
    pub opponent: String,
    pub bet_type: String,
    pub line: f64,
    pub confidence: u8,
    pub game_date: String,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    pub name: String,
    pub stats: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u16,
    pub away_score: u16,
    pub status: String,
    #[serde(default)]
    pub top_performers: Vec<Performer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub position: Position,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLogRow {
    pub opponent: String,
    pub points: u8,
    pub rebounds: u8,
    pub assists: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Search,
    History,
    Scores,
    About,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::Dashboard => "/",
            Screen::Search => "/search",
            Screen::History => "/history",
            Screen::Scores => "/scores",
            Screen::About => "/about",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
    pub screen: Screen,
}

pub const ROUTES: [Route; 5] = [
    Route {
        path: "/",
        label: "Dashboard",
        screen: Screen::Dashboard,
    },
    Route {
        path: "/search",
        label: "Search",
        screen: Screen::Search,
    },
    Route {
        path: "/history",
        label: "History",
        screen: Screen::History,
    },
    Route {
        path: "/scores",
        label: "Scores",
        screen: Screen::Scores,
    },
    Route {
        path: "/about",
        label: "About",
        screen: Screen::About,
    },
];

/// Exact path equality against the route table; no prefix or nested-route
/// matching, so at most one entry can ever be active.
pub fn active_route(path: &str) -> Option<usize> {
    ROUTES.iter().position(|route| route.path == path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryTab {
    All,
    Wins,
    Losses,
}

impl HistoryTab {
    pub fn cycle(self) -> Self {
        match self {
            HistoryTab::All => HistoryTab::Wins,
            HistoryTab::Wins => HistoryTab::Losses,
            HistoryTab::Losses => HistoryTab::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HistoryTab::All => "All Bets",
            HistoryTab::Wins => "Wins",
            HistoryTab::Losses => "Losses",
        }
    }

    pub fn matches(self, bet: &Bet) -> bool {
        match self {
            HistoryTab::All => true,
            HistoryTab::Wins => bet.outcome == Some(Outcome::Win),
            HistoryTab::Losses => bet.outcome == Some(Outcome::Loss),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoresTab {
    Today,
    Yesterday,
    Upcoming,
}

impl ScoresTab {
    pub fn cycle(self) -> Self {
        match self {
            ScoresTab::Today => ScoresTab::Yesterday,
            ScoresTab::Yesterday => ScoresTab::Upcoming,
            ScoresTab::Upcoming => ScoresTab::Today,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoresTab::Today => "Today",
            ScoresTab::Yesterday => "Yesterday",
            ScoresTab::Upcoming => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetFilters {
    pub confidence: u8,
    pub bet_type: String,
    pub game_date: Option<NaiveDate>,
}

impl Default for BetFilters {
    fn default() -> Self {
        Self::new()
    }
}

impl BetFilters {
    pub fn new() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            bet_type: "all".to_string(),
            game_date: None,
        }
    }

    pub fn set_confidence(&mut self, value: u8) {
        self.confidence = value.min(100);
    }

    pub fn raise_confidence(&mut self) {
        self.set_confidence(self.confidence.saturating_add(CONFIDENCE_STEP));
    }

    pub fn lower_confidence(&mut self) {
        self.confidence = self.confidence.saturating_sub(CONFIDENCE_STEP);
    }

    pub fn set_bet_type(&mut self, value: impl Into<String>) {
        self.bet_type = value.into();
    }

    pub fn cycle_bet_type(&mut self) {
        let idx = BET_TYPE_CHOICES
            .iter()
            .position(|choice| *choice == self.bet_type)
            .unwrap_or(0);
        self.bet_type = BET_TYPE_CHOICES[(idx + 1) % BET_TYPE_CHOICES.len()].to_string();
    }

    pub fn set_game_date(&mut self, date: Option<NaiveDate>) {
        self.game_date = date;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub input_active: bool,
    pub cursor: usize,
    pub selected_player: Option<Player>,
    pub game_log: Vec<GameLogRow>,
}

impl SearchState {
    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.cursor = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    pub fn select(&mut self, player: Player) {
        self.selected_player = Some(player);
        self.game_log.clear();
    }

    pub fn clear_selection(&mut self) {
        self.selected_player = None;
        self.game_log.clear();
    }
}

/// Stable confidence/type filter over the bet list. Order is preserved from
/// the source; the source itself is never mutated.
pub fn filter_bets<'a>(bets: &'a [Bet], filters: &BetFilters) -> Vec<&'a Bet> {
    let selector = filters.bet_type.to_lowercase();
    bets.iter()
        .filter(|bet| bet.confidence >= filters.confidence)
        .filter(|bet| selector == "all" || bet.bet_type.to_lowercase().contains(&selector))
        .collect()
}

/// Case-insensitive substring match over player names. An empty query yields
/// no results rather than the full listing.
pub fn search_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    players
        .iter()
        .filter(|player| player.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub avg_confidence: f64,
}

pub fn history_summary(bets: &[Bet]) -> HistorySummary {
    let total = bets.len();
    let wins = bets
        .iter()
        .filter(|bet| bet.outcome == Some(Outcome::Win))
        .count();
    let losses = bets
        .iter()
        .filter(|bet| bet.outcome == Some(Outcome::Loss))
        .count();
    // Rates report 0.0 on an empty list instead of dividing by zero.
    let win_rate = if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    };
    let avg_confidence = if total == 0 {
        0.0
    } else {
        bets.iter().map(|bet| bet.confidence as f64).sum::<f64>() / total as f64
    };
    HistorySummary {
        total,
        wins,
        losses,
        win_rate,
        avg_confidence,
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub bets: Vec<Bet>,
    pub games: Vec<Game>,
    pub players: Vec<Player>,
    pub history: Vec<Bet>,
    pub filters: BetFilters,
    pub history_tab: HistoryTab,
    pub scores_tab: ScoresTab,
    pub search: SearchState,
    pub selected_bet: usize,
    pub scores_scroll: u16,
    pub about_scroll: u16,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Dashboard,
            bets: Vec::with_capacity(16),
            games: Vec::with_capacity(8),
            players: Vec::with_capacity(16),
            history: Vec::with_capacity(16),
            filters: BetFilters::new(),
            history_tab: HistoryTab::All,
            scores_tab: ScoresTab::Today,
            search: SearchState::default(),
            selected_bet: 0,
            scores_scroll: 0,
            about_scroll: 0,
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
        }
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        self.push_log(format!("[INFO] Route: {}", screen.path()));
    }

    pub fn filtered_bets(&self) -> Vec<&Bet> {
        filter_bets(&self.bets, &self.filters)
    }

    pub fn search_results(&self) -> Vec<&Player> {
        search_players(&self.players, &self.search.query)
    }

    pub fn history_rows(&self) -> Vec<&Bet> {
        self.history
            .iter()
            .filter(|bet| self.history_tab.matches(bet))
            .collect()
    }

    pub fn history_summary(&self) -> HistorySummary {
        history_summary(&self.history)
    }

    pub fn selected_filtered_bet(&self) -> Option<&Bet> {
        self.filtered_bets().get(self.selected_bet).copied()
    }

    pub fn select_next_bet(&mut self) {
        let total = self.filtered_bets().len();
        if total == 0 {
            self.selected_bet = 0;
            return;
        }
        self.selected_bet = (self.selected_bet + 1) % total;
    }

    pub fn select_prev_bet(&mut self) {
        let total = self.filtered_bets().len();
        if total == 0 {
            self.selected_bet = 0;
            return;
        }
        if self.selected_bet == 0 {
            self.selected_bet = total - 1;
        } else {
            self.selected_bet -= 1;
        }
    }

    pub fn clamp_bet_selection(&mut self) {
        let total = self.filtered_bets().len();
        if total == 0 {
            self.selected_bet = 0;
        } else if self.selected_bet >= total {
            self.selected_bet = total - 1;
        }
    }

    pub fn select_next_result(&mut self) {
        let total = self.search_results().len();
        if total == 0 {
            self.search.cursor = 0;
            return;
        }
        self.search.cursor = (self.search.cursor + 1) % total;
    }

    pub fn select_prev_result(&mut self) {
        let total = self.search_results().len();
        if total == 0 {
            self.search.cursor = 0;
            return;
        }
        if self.search.cursor == 0 {
            self.search.cursor = total - 1;
        } else {
            self.search.cursor -= 1;
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetBets(Vec<Bet>),
    SetGames(Vec<Game>),
    SetPlayers(Vec<Player>),
    SetHistory(Vec<Bet>),
    SetGameLog {
        player: String,
        rows: Vec<GameLogRow>,
    },
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    FetchBets,
    FetchGames,
    FetchPlayers,
    FetchHistory,
    FetchGameLog { player: String },
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetBets(bets) => {
            state.bets = bets;
            state.clamp_bet_selection();
        }
        Delta::SetGames(games) => {
            state.games = games;
        }
        Delta::SetPlayers(players) => {
            state.players = players;
            let total = state.search_results().len();
            if total == 0 {
                state.search.cursor = 0;
            } else if state.search.cursor >= total {
                state.search.cursor = total - 1;
            }
        }
        Delta::SetHistory(bets) => {
            state.history = bets;
        }
        Delta::SetGameLog { player, rows } => {
            // The selection may have moved on before the provider replied.
            if state
                .search
                .selected_player
                .as_ref()
                .is_some_and(|p| p.name == player)
            {
                state.search.game_log = rows;
            }
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
