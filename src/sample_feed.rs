use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use rand::Rng;

use crate::state::{
    Bet, Delta, Game, GameLogRow, Outcome, Performer, Player, Position, ProviderCommand,
};

/// Source of everything the pages render. The sample implementation below
/// serves literal fixtures; a real backend slots in behind the same trait
/// without touching presentation.
pub trait DataSource: Send {
    fn current_bets(&self) -> anyhow::Result<Vec<Bet>>;
    fn historical_bets(&self) -> anyhow::Result<Vec<Bet>>;
    fn current_games(&self) -> anyhow::Result<Vec<Game>>;
    fn players(&self) -> anyhow::Result<Vec<Player>>;
    fn recent_game_log(&self, player: &Player) -> anyhow::Result<Vec<GameLogRow>>;
}

pub struct SampleData;

impl DataSource for SampleData {
    fn current_bets(&self) -> anyhow::Result<Vec<Bet>> {
        Ok(sample_bets())
    }

    fn historical_bets(&self) -> anyhow::Result<Vec<Bet>> {
        Ok(sample_history())
    }

    fn current_games(&self) -> anyhow::Result<Vec<Game>> {
        Ok(sample_games())
    }

    fn players(&self) -> anyhow::Result<Vec<Player>> {
        Ok(sample_players())
    }

    fn recent_game_log(&self, player: &Player) -> anyhow::Result<Vec<GameLogRow>> {
        Ok(generate_game_log(player))
    }
}

pub fn spawn_sample_provider(
    source: impl DataSource + 'static,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) {
    thread::spawn(move || {
        publish_bets(&source, &tx);
        publish_games(&source, &tx);
        publish_players(&source, &tx);
        publish_history(&source, &tx);
        let _ = tx.send(Delta::Log("[INFO] Sample data loaded".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::FetchBets => publish_bets(&source, &tx),
                ProviderCommand::FetchGames => publish_games(&source, &tx),
                ProviderCommand::FetchPlayers => publish_players(&source, &tx),
                ProviderCommand::FetchHistory => publish_history(&source, &tx),
                ProviderCommand::FetchGameLog { player } => {
                    publish_game_log(&source, &tx, &player);
                }
            }
        }
    });
}

fn publish_bets(source: &impl DataSource, tx: &Sender<Delta>) {
    match source.current_bets() {
        Ok(bets) => {
            let _ = tx.send(Delta::SetBets(bets));
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Bet fetch error: {err}")));
        }
    }
}

fn publish_games(source: &impl DataSource, tx: &Sender<Delta>) {
    match source.current_games() {
        Ok(games) => {
            let _ = tx.send(Delta::SetGames(games));
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Score fetch error: {err}")));
        }
    }
}

fn publish_players(source: &impl DataSource, tx: &Sender<Delta>) {
    match source.players() {
        Ok(players) => {
            let _ = tx.send(Delta::SetPlayers(players));
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Player fetch error: {err}")));
        }
    }
}

fn publish_history(source: &impl DataSource, tx: &Sender<Delta>) {
    match source.historical_bets() {
        Ok(bets) => {
            let _ = tx.send(Delta::SetHistory(bets));
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] History fetch error: {err}")));
        }
    }
}

fn publish_game_log(source: &impl DataSource, tx: &Sender<Delta>, player_name: &str) {
    let player = match source.players() {
        Ok(players) => players.into_iter().find(|p| p.name == player_name),
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Player fetch error: {err}")));
            return;
        }
    };
    let Some(player) = player else {
        let _ = tx.send(Delta::Log(format!(
            "[WARN] No game log for unknown player {player_name}"
        )));
        return;
    };
    match source.recent_game_log(&player) {
        Ok(rows) => {
            let _ = tx.send(Delta::SetGameLog {
                player: player.name,
                rows,
            });
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Game log error: {err}")));
        }
    }
}

fn bet(
    player_name: &str,
    team: &str,
    opponent: &str,
    bet_type: &str,
    line: f64,
    confidence: u8,
    game_date: &str,
    outcome: Option<Outcome>,
) -> Bet {
    Bet {
        player_name: player_name.to_string(),
        team: team.to_string(),
        opponent: opponent.to_string(),
        bet_type: bet_type.to_string(),
        line,
        confidence,
        game_date: game_date.to_string(),
        outcome,
    }
}

pub fn sample_bets() -> Vec<Bet> {
    vec![
        bet(
            "LeBron James",
            "LAL",
            "GSW",
            "Points",
            28.5,
            82,
            "Oct 18, 2025",
            None,
        ),
        bet(
            "Stephen Curry",
            "GSW",
            "LAL",
            "3-Pointers",
            4.5,
            75,
            "Oct 18, 2025",
            Some(Outcome::Win),
        ),
        bet(
            "Nikola Jokic",
            "DEN",
            "PHX",
            "Rebounds",
            12.5,
            65,
            "Oct 19, 2025",
            Some(Outcome::Loss),
        ),
        bet(
            "Kevin Durant",
            "PHX",
            "DEN",
            "Points",
            29.5,
            58,
            "Oct 19, 2025",
            None,
        ),
    ]
}

pub fn sample_history() -> Vec<Bet> {
    vec![
        bet(
            "LeBron James",
            "LAL",
            "GSW",
            "Over",
            25.5,
            91,
            "Dec 25",
            Some(Outcome::Win),
        ),
        bet(
            "Kevin Durant",
            "PHX",
            "LAL",
            "Over",
            27.5,
            85,
            "Dec 24",
            Some(Outcome::Win),
        ),
        bet(
            "Damian Lillard",
            "MIL",
            "BOS",
            "Over",
            5.5,
            78,
            "Dec 23",
            Some(Outcome::Loss),
        ),
        bet(
            "Anthony Davis",
            "LAL",
            "DEN",
            "Over",
            11.5,
            88,
            "Dec 22",
            Some(Outcome::Win),
        ),
    ]
}

pub fn sample_players() -> Vec<Player> {
    vec![
        Player {
            name: "LeBron James".to_string(),
            team: "LAL".to_string(),
            position: Position::SF,
            ppg: 25.7,
            rpg: 7.3,
            apg: 7.3,
        },
        Player {
            name: "Stephen Curry".to_string(),
            team: "GSW".to_string(),
            position: Position::PG,
            ppg: 29.4,
            rpg: 6.1,
            apg: 6.3,
        },
        Player {
            name: "Jayson Tatum".to_string(),
            team: "BOS".to_string(),
            position: Position::SF,
            ppg: 27.1,
            rpg: 8.4,
            apg: 4.6,
        },
        Player {
            name: "Luka Doncic".to_string(),
            team: "DAL".to_string(),
            position: Position::PG,
            ppg: 33.9,
            rpg: 9.2,
            apg: 9.8,
        },
        Player {
            name: "Giannis Antetokounmpo".to_string(),
            team: "MIL".to_string(),
            position: Position::PF,
            ppg: 31.1,
            rpg: 11.8,
            apg: 5.7,
        },
    ]
}

pub fn sample_games() -> Vec<Game> {
    vec![
        Game {
            id: "1".to_string(),
            home_team: "Los Angeles Lakers".to_string(),
            away_team: "Golden State Warriors".to_string(),
            home_score: 112,
            away_score: 108,
            status: "Final".to_string(),
            top_performers: vec![
                performer("LeBron James", "28 PTS, 7 REB, 8 AST"),
                performer("Stephen Curry", "31 PTS, 5 REB, 6 AST"),
            ],
        },
        Game {
            id: "2".to_string(),
            home_team: "Boston Celtics".to_string(),
            away_team: "Miami Heat".to_string(),
            home_score: 98,
            away_score: 95,
            status: "Q4 2:35".to_string(),
            top_performers: vec![
                performer("Jayson Tatum", "24 PTS, 9 REB, 5 AST"),
                performer("Jimmy Butler", "22 PTS, 6 REB, 4 AST"),
            ],
        },
        Game {
            id: "3".to_string(),
            home_team: "Phoenix Suns".to_string(),
            away_team: "Dallas Mavericks".to_string(),
            home_score: 89,
            away_score: 91,
            status: "Q3 8:12".to_string(),
            top_performers: vec![
                performer("Kevin Durant", "19 PTS, 5 REB, 3 AST"),
                performer("Luka Doncic", "26 PTS, 8 REB, 7 AST"),
            ],
        },
        Game {
            id: "4".to_string(),
            home_team: "Milwaukee Bucks".to_string(),
            away_team: "Denver Nuggets".to_string(),
            home_score: 0,
            away_score: 0,
            status: "7:30 PM ET".to_string(),
            top_performers: Vec::new(),
        },
    ]
}

fn performer(name: &str, stats: &str) -> Performer {
    Performer {
        name: name.to_string(),
        stats: stats.to_string(),
    }
}

const LOG_OPPONENTS: [&str; 8] = ["BOS", "MIA", "PHX", "DEN", "GSW", "DAL", "MIL", "LAL"];

fn generate_game_log(player: &Player) -> Vec<GameLogRow> {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(5);
    for _ in 0..5 {
        let opponent = loop {
            let pick = LOG_OPPONENTS[rng.gen_range(0..LOG_OPPONENTS.len())];
            if pick != player.team {
                break pick;
            }
        };
        rows.push(GameLogRow {
            opponent: opponent.to_string(),
            points: rng.gen_range(15..30),
            rebounds: rng.gen_range(3..8),
            assists: rng.gen_range(2..7),
        });
    }
    rows
}
