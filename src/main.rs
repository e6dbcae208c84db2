use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::{Duration as ChronoDuration, Local};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use lox_terminal::classify::{
    abbreviate_team, classify_status, confidence_tier, initials, status_group_label,
    ConfidenceTier, GamePhase,
};
use lox_terminal::sample_feed::{spawn_sample_provider, SampleData};
use lox_terminal::state::{
    active_route, apply_delta, AppState, Bet, Delta, Game, HistoryTab, Outcome, Player,
    ProviderCommand, Screen, ScoresTab, ROUTES,
};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    tick_rate: Duration,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        let tick_ms = std::env::var("LOX_TICK_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(250)
            .max(50);
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
            tick_rate: Duration::from_millis(tick_ms),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.screen == Screen::Search && self.state.search.input_active {
            self.on_search_input(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.set_screen(Screen::Dashboard),
            KeyCode::Char('2') => self.state.set_screen(Screen::Search),
            KeyCode::Char('3') => self.state.set_screen(Screen::History),
            KeyCode::Char('4') => self.state.set_screen(Screen::Scores),
            KeyCode::Char('5') => self.state.set_screen(Screen::About),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => match self.state.screen {
                Screen::Dashboard => self.on_dashboard_key(key),
                Screen::Search => self.on_search_key(key),
                Screen::History => self.on_history_key(key),
                Screen::Scores => self.on_scores_key(key),
                Screen::About => self.on_about_key(key),
            },
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_bet(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_bet(),
            KeyCode::Char('h') | KeyCode::Left => {
                self.state.filters.lower_confidence();
                self.state.clamp_bet_selection();
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.filters.raise_confidence();
                self.state.clamp_bet_selection();
            }
            KeyCode::Char('t') => {
                self.state.filters.cycle_bet_type();
                self.state.clamp_bet_selection();
            }
            KeyCode::Char('g') => self.cycle_game_date(),
            KeyCode::Char('x') => {
                self.state.filters.reset();
                self.state.clamp_bet_selection();
                self.state.push_log("[INFO] Filters reset");
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => self.state.search.input_active = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_result(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_result(),
            KeyCode::Enter => self.select_search_result(),
            KeyCode::Char('x') | KeyCode::Esc => {
                if self.state.search.selected_player.is_some() {
                    self.state.search.clear_selection();
                }
            }
            _ => {}
        }
    }

    fn on_search_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.search.input_active = false,
            KeyCode::Backspace => self.state.search.pop_char(),
            KeyCode::Char(ch) => self.state.search.push_char(ch),
            _ => {}
        }
    }

    fn on_history_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('t') | KeyCode::Tab) {
            self.state.history_tab = self.state.history_tab.cycle();
        }
    }

    fn on_scores_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') | KeyCode::Tab => {
                self.state.scores_tab = self.state.scores_tab.cycle();
                self.state.scores_scroll = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.scores_scroll = self.state.scores_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.scores_scroll = self.state.scores_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn on_about_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.about_scroll = self.state.about_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.about_scroll = self.state.about_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn cycle_game_date(&mut self) {
        let today = Local::now().date_naive();
        let next = match self.state.filters.game_date {
            None => Some(today),
            Some(date) => {
                let offset = (date - today).num_days();
                if offset >= 2 {
                    None
                } else {
                    Some(today + ChronoDuration::days(offset + 1))
                }
            }
        };
        self.state.filters.set_game_date(next);
    }

    fn select_search_result(&mut self) {
        let player = match self.state.search_results().get(self.state.search.cursor) {
            Some(player) => (*player).clone(),
            None => return,
        };
        self.state.search.select(player.clone());
        self.request_game_log(&player.name);
    }

    fn request_game_log(&mut self, player: &str) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Game log fetch unavailable");
            return;
        };
        if tx
            .send(ProviderCommand::FetchGameLog {
                player: player.to_string(),
            })
            .is_err()
        {
            self.state.push_log("[WARN] Game log request failed");
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_sample_provider(SampleData, tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = app
            .tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_lines(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Dashboard => render_dashboard(frame, chunks[1], &app.state),
        Screen::Search => render_search(frame, chunks[1], &app.state),
        Screen::History => render_history(frame, chunks[1], &app.state),
        Screen::Scores => render_scores(frame, chunks[1], &app.state),
        Screen::About => render_about(frame, chunks[1], &app.state),
    }

    let footer = Paragraph::new(footer_text(&app.state));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_lines(state: &AppState) -> Vec<Line<'static>> {
    let brand = Line::from(vec![
        Span::styled(
            " LOX ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" PropEdge - NBA player prop analytics"),
    ]);

    let active = active_route(state.screen.path());
    let mut tabs: Vec<Span> = Vec::with_capacity(ROUTES.len() * 2);
    for (idx, route) in ROUTES.iter().enumerate() {
        let style = if active == Some(idx) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(
            format!(" [{}] {} ", idx + 1, route.label),
            style,
        ));
    }

    vec![brand, Line::from(tabs)]
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Dashboard => {
            "1-5 Pages | j/k Move | h/l Confidence | t Type | g Date | x Reset | ? Help | q Quit"
                .to_string()
        }
        Screen::Search => {
            if state.search.input_active {
                "Type to search | Enter/Esc Done typing".to_string()
            } else {
                "1-5 Pages | / Type | j/k Move | Enter Select | x Clear | ? Help | q Quit"
                    .to_string()
            }
        }
        Screen::History => "1-5 Pages | t Tab | ? Help | q Quit".to_string(),
        Screen::Scores => "1-5 Pages | t Tab | j/k Scroll | ? Help | q Quit".to_string(),
        Screen::About => "1-5 Pages | j/k Scroll | ? Help | q Quit".to_string(),
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Min(40),
            Constraint::Length(30),
        ])
        .split(rows[0]);

    render_scores_sidebar(frame, columns[0], state);
    render_bet_list(frame, columns[1], state);
    render_filter_panel(frame, columns[2], state);

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, rows[1]);
}

fn render_scores_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Live Scores").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.games.is_empty() {
        let empty = Paragraph::new("No games yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for game in &state.games {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<4} {:>3}  ",
                abbreviate_team(&game.away_team),
                score_text(game.away_score)
            )),
            status_badge(game),
        ]));
        lines.push(Line::from(format!(
            "{:<4} {:>3}",
            abbreviate_team(&game.home_team),
            score_text(game.home_score)
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn status_badge(game: &Game) -> Span<'static> {
    match classify_status(&game.status) {
        GamePhase::Final => Span::styled("Final", Style::default().fg(Color::DarkGray)),
        GamePhase::Scheduled => {
            Span::styled(game.status.clone(), Style::default().fg(Color::Yellow))
        }
        GamePhase::Live => Span::styled(
            game.status.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn score_text(score: u16) -> String {
    if score == 0 {
        "-".to_string()
    } else {
        score.to_string()
    }
}

const BET_ROW_HEIGHT: u16 = 3;

fn render_bet_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let filtered = state.filtered_bets();
    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(sections[0]);
    let title = Paragraph::new(Span::styled(
        "Player Props",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, header_cols[0]);
    let count = Paragraph::new(format!("{} results", filtered.len()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(count, header_cols[1]);

    let list_area = sections[1];
    if filtered.is_empty() {
        let empty = Paragraph::new("No bets match the current filters.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
    } else if list_area.height >= BET_ROW_HEIGHT {
        let visible = (list_area.height / BET_ROW_HEIGHT) as usize;
        let (start, end) = visible_range(state.selected_bet, filtered.len(), visible);
        for (i, idx) in (start..end).enumerate() {
            let row_area = Rect {
                x: list_area.x,
                y: list_area.y + (i as u16) * BET_ROW_HEIGHT,
                width: list_area.width,
                height: BET_ROW_HEIGHT,
            };
            render_bet_row(frame, row_area, filtered[idx], idx == state.selected_bet);
        }
    }

    let note = Paragraph::new("Odds are subject to change. Always check with your provider.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(note, sections[2]);
}

fn render_bet_row(frame: &mut Frame, area: Rect, bet: &Bet, selected: bool) {
    let row_style = if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    };
    if selected {
        frame.render_widget(Block::default().style(row_style), area);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(24),
            Constraint::Length(9),
        ])
        .split(area);

    let avatar = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{:^5}", initials(&bet.player_name)),
            with_row_bg(Style::default().add_modifier(Modifier::BOLD), selected),
        )),
    ]);
    frame.render_widget(avatar, cols[0]);

    let date_style = if selected {
        row_style
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let body = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                bet.player_name.clone(),
                with_row_bg(Style::default().add_modifier(Modifier::BOLD), selected),
            ),
            Span::styled(format!("  [{}]", bet.team), row_style),
        ]),
        Line::from(Span::styled(
            format!("vs {}  {} {}", bet.opponent, bet.bet_type, bet.line),
            row_style,
        )),
        Line::from(Span::styled(bet.game_date.clone(), date_style)),
    ]);
    frame.render_widget(body, cols[1]);

    let tier_color = match confidence_tier(bet.confidence) {
        ConfidenceTier::High => Color::Green,
        ConfidenceTier::Medium => Color::Yellow,
        ConfidenceTier::Low => Color::DarkGray,
    };
    let outcome_span = match bet.outcome {
        Some(Outcome::Win) => Span::styled(
            format!("{:>8}", "WON"),
            with_row_bg(Style::default().fg(Color::Green), selected),
        ),
        Some(Outcome::Loss) => Span::styled(
            format!("{:>8}", "LOST"),
            with_row_bg(Style::default().fg(Color::Red), selected),
        ),
        None => Span::raw(""),
    };
    let right = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{:>8}", format!("{}%", bet.confidence)),
            with_row_bg(
                Style::default()
                    .fg(tier_color)
                    .add_modifier(Modifier::BOLD),
                selected,
            ),
        )),
        Line::from(""),
        Line::from(outcome_span),
    ]);
    frame.render_widget(right, cols[2]);
}

fn with_row_bg(style: Style, selected: bool) -> Style {
    if selected {
        style.bg(Color::DarkGray)
    } else {
        style
    }
}

fn render_filter_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Filters").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::Cyan);

    const SLIDER_CELLS: usize = 20;
    let filled = (state.filters.confidence as usize / 5).min(SLIDER_CELLS);
    let slider = format!(
        "{}{} {}%+",
        "█".repeat(filled),
        "░".repeat(SLIDER_CELLS - filled),
        state.filters.confidence
    );

    let date_text = match state.filters.game_date {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => "Select date".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled("Confidence Score", label_style)),
        Line::from(Span::styled(slider, value_style)),
        Line::from(""),
        Line::from(Span::styled("Bet Type", label_style)),
        Line::from(Span::styled(
            bet_type_label(&state.filters.bet_type),
            value_style,
        )),
        Line::from(""),
        Line::from(Span::styled("Game Date", label_style)),
        Line::from(Span::styled(date_text, value_style)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn bet_type_label(value: &str) -> String {
    match value {
        "all" => "All Types".to_string(),
        "points" => "Points".to_string(),
        "rebounds" => "Rebounds".to_string(),
        "assists" => "Assists".to_string(),
        "3-pointers" => "3-Pointers".to_string(),
        other => other.to_string(),
    }
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(64),
            Constraint::Min(1),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(columns[1]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Player Search",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Look up NBA players and view their stats",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(title, rows[0]);

    let input_line = if state.search.query.is_empty() && !state.search.input_active {
        Line::from(Span::styled(
            "Search for a player...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(state.search.query.clone())];
        if state.search.input_active {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };
    let input = Paragraph::new(input_line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, rows[1]);

    if let Some(player) = &state.search.selected_player {
        render_player_detail(frame, rows[2], state, player);
        return;
    }

    if state.search.query.is_empty() {
        return;
    }

    let results = state.search_results();
    if results.is_empty() {
        let empty = Paragraph::new("No players match your search")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, rows[2]);
        return;
    }

    const RESULT_ROW_HEIGHT: u16 = 2;
    let list_area = rows[2];
    if list_area.height < RESULT_ROW_HEIGHT {
        return;
    }
    let visible = (list_area.height / RESULT_ROW_HEIGHT) as usize;
    let (start, end) = visible_range(state.search.cursor, results.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * RESULT_ROW_HEIGHT,
            width: list_area.width,
            height: RESULT_ROW_HEIGHT,
        };
        render_result_row(frame, row_area, results[idx], idx == state.search.cursor);
    }
}

fn render_result_row(frame: &mut Frame, area: Rect, player: &Player, selected: bool) {
    let row_style = if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    };
    if selected {
        frame.render_widget(Block::default().style(row_style), area);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(area);

    let meta_style = if selected {
        row_style
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            player.name.clone(),
            with_row_bg(Style::default().add_modifier(Modifier::BOLD), selected),
        )),
        Line::from(Span::styled(
            format!("{} • {}", player.team, player.position.label()),
            meta_style,
        )),
    ]);
    frame.render_widget(body, cols[0]);

    let badge = Paragraph::new(Span::styled(
        format!("{} PPG", player.ppg),
        with_row_bg(Style::default().fg(Color::Cyan), selected),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(badge, cols[1]);
}

fn render_player_detail(frame: &mut Frame, area: Rect, state: &AppState, player: &Player) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            player.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("[{}]", player.team), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", player.position.label()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("   x Clear", Style::default().fg(Color::DarkGray)),
        ]),
    ]);
    frame.render_widget(header, rows[0]);

    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);
    render_stat_box(
        frame,
        stat_cols[0],
        "Points Per Game",
        player.ppg,
        "+2.3 vs last season",
        Color::Green,
    );
    render_stat_box(
        frame,
        stat_cols[1],
        "Rebounds Per Game",
        player.rpg,
        "-0.4 vs last season",
        Color::DarkGray,
    );
    render_stat_box(
        frame,
        stat_cols[2],
        "Assists Per Game",
        player.apg,
        "+1.1 vs last season",
        Color::Green,
    );

    let log_block = Block::default()
        .title("Recent Game Log")
        .borders(Borders::TOP);
    let log_inner = log_block.inner(rows[2]);
    frame.render_widget(log_block, rows[2]);

    if state.search.game_log.is_empty() {
        let empty =
            Paragraph::new("No games logged yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, log_inner);
        return;
    }

    let lines: Vec<Line> = state
        .search
        .game_log
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", format!("vs {}", row.opponent)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(
                    "{} PTS, {} REB, {} AST",
                    row.points, row.rebounds, row.assists
                )),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), log_inner);
}

fn render_stat_box(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: f64,
    trend: &str,
    trend_color: Color,
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("{value}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            trend.to_string(),
            Style::default().fg(trend_color),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let summary = state.history_summary();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
    render_summary_card(
        frame,
        cards[0],
        "Total Bets",
        summary.total.to_string(),
        Color::White,
    );
    render_summary_card(
        frame,
        cards[1],
        "Win Rate",
        format!("{:.1}%", summary.win_rate),
        Color::Green,
    );
    render_summary_card(
        frame,
        cards[2],
        "Avg Confidence",
        format!("{:.1}%", summary.avg_confidence),
        Color::Yellow,
    );

    let tabs = [HistoryTab::All, HistoryTab::Wins, HistoryTab::Losses];
    let mut spans: Vec<Span> = Vec::new();
    for (idx, tab) in tabs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *tab == state.history_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);

    let bets = state.history_rows();
    let list_area = rows[3];
    if bets.is_empty() {
        let empty =
            Paragraph::new("No bets in this view.").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height < BET_ROW_HEIGHT {
        return;
    }
    let visible = (list_area.height / BET_ROW_HEIGHT) as usize;
    for (i, bet) in bets.iter().take(visible).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * BET_ROW_HEIGHT,
            width: list_area.width,
            height: BET_ROW_HEIGHT,
        };
        render_bet_row(frame, row_area, bet, false);
    }
}

fn render_summary_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

const GAME_CARD_HEIGHT: u16 = 9;

fn render_scores(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let tabs = [ScoresTab::Today, ScoresTab::Yesterday, ScoresTab::Upcoming];
    let mut spans: Vec<Span> = Vec::new();
    for (idx, tab) in tabs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *tab == state.scores_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    match state.scores_tab {
        ScoresTab::Today => render_game_cards(frame, rows[1], state),
        ScoresTab::Yesterday => {
            let empty = Paragraph::new("No games yesterday")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, rows[1]);
        }
        ScoresTab::Upcoming => {
            let empty = Paragraph::new("No upcoming games")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, rows[1]);
        }
    }
}

fn render_game_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.games.is_empty() {
        let empty = Paragraph::new("No games yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }
    if area.height < GAME_CARD_HEIGHT {
        let empty = Paragraph::new("Scores need more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let visible = (area.height / GAME_CARD_HEIGHT) as usize;
    let total = state.games.len();
    let max_start = total.saturating_sub(visible);
    let start = (state.scores_scroll as usize).min(max_start);
    let end = (start + visible).min(total);

    for (i, idx) in (start..end).enumerate() {
        let card_area = Rect {
            x: area.x,
            y: area.y + (i as u16) * GAME_CARD_HEIGHT,
            width: area.width,
            height: GAME_CARD_HEIGHT,
        };
        render_game_card(frame, card_area, &state.games[idx]);
    }
}

fn render_game_card(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(Rect {
            x: inner.x,
            y: inner.y,
            width: inner.width,
            height: 1,
        });
    let group = Paragraph::new(Span::styled(
        status_group_label(&game.status),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(group, status_cols[0]);
    let badge = match classify_status(&game.status) {
        GamePhase::Final => Span::styled("Final", Style::default().fg(Color::DarkGray)),
        GamePhase::Scheduled => {
            Span::styled(game.status.clone(), Style::default().fg(Color::Yellow))
        }
        GamePhase::Live => Span::styled(
            "LIVE",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    };
    frame.render_widget(
        Paragraph::new(badge).alignment(Alignment::Right),
        status_cols[1],
    );

    let mut lines = vec![
        Line::from(format!(
            "{:<28}{:>6}",
            game.away_team,
            score_text(game.away_score)
        )),
        Line::from(format!(
            "{:<28}{:>6}",
            game.home_team,
            score_text(game.home_score)
        )),
    ];
    if !game.top_performers.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Top Performers",
            Style::default().fg(Color::DarkGray),
        )));
        for performer in game.top_performers.iter().take(2) {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<22}", performer.name)),
                Span::styled(performer.stats.clone(), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }
    let body_area = Rect {
        x: inner.x,
        y: inner.y + 1,
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    frame.render_widget(Paragraph::new(lines), body_area);
}

fn render_about(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(about_lines())
        .wrap(Wrap { trim: false })
        .scroll((state.about_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn about_lines() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    vec![
        Line::from(Span::styled("About PropEdge", heading)),
        Line::from(Span::styled(
            "AI-powered NBA player prop analytics",
            muted,
        )),
        Line::from(""),
        Line::from(Span::styled("Our Mission", heading)),
        Line::from(
            "PropEdge leverages advanced analytics and machine learning to provide \
             data-driven insights for NBA player prop bets. We analyze historical \
             performance, matchup data, team dynamics, and real-time factors to \
             generate confidence scores for prop bet opportunities.",
        ),
        Line::from(""),
        Line::from(Span::styled("How It Works", heading)),
        Line::from("Our algorithm analyzes multiple data points including:"),
        Line::from("  - Player performance trends and historical statistics"),
        Line::from("  - Opponent defensive ratings and matchup history"),
        Line::from("  - Recent form, injuries, and lineup changes"),
        Line::from("  - Home/away splits and back-to-back game factors"),
        Line::from(""),
        Line::from(Span::styled("Data Sources", heading)),
        Line::from(
            "We pull data from official NBA APIs, verified statistics providers, and \
             reputable sports data aggregators. All data is updated in real-time to \
             ensure accuracy.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Important Disclaimer",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(
            "PropEdge is for informational and entertainment purposes only. We do not \
             guarantee the accuracy of predictions or recommend any specific betting \
             actions. Sports betting involves risk and may not be legal in your \
             jurisdiction. Always gamble responsibly and never bet more than you can \
             afford to lose. Confidence scores represent algorithmic probability \
             estimates and should not be considered financial advice.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Data accuracy and freshness may vary. Last updated: Real-time",
            muted,
        )),
    ]
}

fn console_text(state: &AppState) -> String {
    match state.logs.back() {
        Some(line) => line.clone(),
        None => "No alerts yet".to_string(),
    }
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Lox Terminal - Help",
        "",
        "Global:",
        "  1-5          Dashboard / Search / History / Scores / About",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Dashboard:",
        "  j/k or ↑/↓   Move bet selection",
        "  h/l or ←/→   Adjust confidence threshold",
        "  t            Cycle bet type filter",
        "  g            Cycle game date filter",
        "  x            Reset filters",
        "",
        "Search:",
        "  /            Type a query",
        "  Enter        Select highlighted player",
        "  x / Esc      Clear selection",
        "",
        "History / Scores:",
        "  t            Cycle tab",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
