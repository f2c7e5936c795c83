//! Play command implementation - interactive TUI game.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use droids::game::{Action, GameConfig, GameEngine, GameState, TurnStatus, QUIT_KEY};
use droids::highscore::{save_highscore, today_iso, HighscoreEntry};
use droids::Cell;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

/// Longest name accepted for the highscore table.
const MAX_NAME_LEN: usize = 12;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error for a bad configuration or if the TUI fails.
pub(crate) fn execute(
    board_size: u16,
    seed: Option<u64>,
    safe_teleports: u32,
    scores_file: PathBuf,
) -> Result<(), CliError> {
    let config = GameConfig {
        board_size,
        seed,
        safe_teleports_per_run: safe_teleports,
    };
    let mut engine = GameEngine::new(config)?;
    let state = engine.start_level(1, 0, safe_teleports)?;

    let app = App::new(engine, state, scores_file);
    run_tui(app)
}

/// What the UI is currently asking of the player.
#[derive(Debug)]
enum Phase {
    /// Normal turn loop.
    Playing,
    /// Level cleared; waiting for Enter.
    LevelClear,
    /// Run lost; collecting a name for the highscore table.
    NameEntry { name: String },
    /// Highscore table shown; any key exits.
    ScoreTable { scores: Vec<HighscoreEntry> },
}

/// App state for the TUI.
#[derive(Debug)]
struct App {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    message: String,
    turns_total: u32,
    scores_file: PathBuf,
}

impl App {
    fn new(engine: GameEngine, state: GameState, scores_file: PathBuf) -> Self {
        Self {
            engine,
            state,
            phase: Phase::Playing,
            message: "Destroy all enemies by making them collide.".to_string(),
            turns_total: 0,
            scores_file,
        }
    }

    /// One key press while the turn loop is live.
    fn play_key(&mut self, key: char) {
        let Some(action) = Action::from_key(key) else {
            self.message = format!("Unknown action {key:?}. Use q,w,e,a,s,d,z,c,.,t,r or x.");
            return;
        };

        let outcome = self.engine.apply_action(&mut self.state, action);
        self.message = outcome.message().to_string();
        let status = self.engine.resolve_turn(&mut self.state);
        self.turns_total += 1;

        match status {
            TurnStatus::Playing => {}
            TurnStatus::Won => {
                self.message = format!("Level {} clear! Press Enter.", self.state.level);
                self.phase = Phase::LevelClear;
            }
            TurnStatus::Lost => {
                self.message = "Game Over. Enter a name for the highscore table.".to_string();
                self.phase = Phase::NameEntry {
                    name: String::new(),
                };
            }
        }
    }

    /// Advance to the next level after a clear.
    fn next_level(&mut self) -> Result<(), CliError> {
        let next = self.state.level + 1;
        self.state =
            self.engine
                .start_level(next, self.state.score, self.state.safe_teleports_left)?;
        self.message = format!("Level {next}.");
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Persist the finished run and show the table.
    fn save_score(&mut self, name: &str) {
        let name = if name.trim().is_empty() {
            "Player"
        } else {
            name.trim()
        };
        let entry = HighscoreEntry {
            name: name.to_string(),
            score: self.state.score,
            level: self.state.level,
            turns: self.turns_total,
            seed: Some(self.engine.seed()),
            date: today_iso(),
        };
        match save_highscore(entry, &self.scores_file) {
            Ok(scores) => {
                self.message = "Highscores saved. Press any key to exit.".to_string();
                self.phase = Phase::ScoreTable { scores };
            }
            Err(e) => {
                self.message = format!("Could not save highscores: {e}. Press any key to exit.");
                self.phase = Phase::ScoreTable { scores: Vec::new() };
            }
        }
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if !event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))? {
            continue;
        }
        let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // A name submitted in the entry phase is saved after the phase
        // borrow ends.
        let mut submitted: Option<String> = None;

        match &mut app.phase {
            Phase::Playing => match key.code {
                KeyCode::Esc => break,
                KeyCode::Char(c) if c.to_ascii_lowercase() == QUIT_KEY => break,
                KeyCode::Char(c) => app.play_key(c.to_ascii_lowercase()),
                _ => {}
            },
            Phase::LevelClear => match key.code {
                KeyCode::Enter => app.next_level()?,
                KeyCode::Esc => break,
                KeyCode::Char(c) if c.to_ascii_lowercase() == QUIT_KEY => break,
                _ => {}
            },
            Phase::NameEntry { name } => match key.code {
                KeyCode::Enter => submitted = Some(name.clone()),
                KeyCode::Backspace => {
                    name.pop();
                }
                KeyCode::Esc => break,
                KeyCode::Char(c) if !c.is_control() && name.len() < MAX_NAME_LEN => {
                    name.push(c);
                }
                _ => {}
            },
            Phase::ScoreTable { .. } => break,
        }

        if let Some(name) = submitted {
            app.save_score(&name);
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // HUD
            Constraint::Min(7),    // Board / score table
            Constraint::Length(4), // Message + controls
        ])
        .split(f.area());

    let hud = Paragraph::new(format!(
        "Level {} | Score {} | Enemies {} | Safe teleports {} | Turn {}",
        app.state.level,
        app.state.score,
        app.state.enemies.len(),
        app.state.safe_teleports_left,
        app.state.turn_count,
    ))
    .block(Block::default().borders(Borders::ALL).title("Droids"));
    f.render_widget(hud, chunks[0]);

    let main = if let Phase::ScoreTable { scores } = &app.phase {
        score_table(scores)
    } else {
        board_widget(app)
    };
    f.render_widget(main, chunks[1]);

    let footer_text = match &app.phase {
        Phase::NameEntry { name } => {
            vec![
                Line::from(app.message.as_str()),
                Line::from(format!("Name: {name}_")),
            ]
        }
        _ => vec![
            Line::from(app.message.as_str()),
            Line::from("Move: q w e / a . d / z s c | t=safe teleport | r=risky teleport | x=quit"),
        ],
    };
    let footer =
        Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}

/// Render the board grid with per-cell colors.
fn board_widget(app: &App) -> Paragraph<'static> {
    let board = app.engine.build_board(&app.state);
    let lines: Vec<Line<'static>> = board
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(cell_span(*cell));
            }
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL))
}

fn cell_span(cell: Cell) -> Span<'static> {
    let symbol = cell.symbol().to_string();
    match cell {
        Cell::Empty => Span::raw(symbol),
        Cell::Player => Span::styled(
            symbol,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Enemy => Span::styled(symbol, Style::default().fg(Color::Red)),
        Cell::Wreck => Span::styled(symbol, Style::default().fg(Color::DarkGray)),
    }
}

/// Render the final highscore table.
fn score_table(scores: &[HighscoreEntry]) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        "Top Runs",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if scores.is_empty() {
        lines.push(Line::from("No highscores yet."));
    }
    for (idx, entry) in scores.iter().enumerate() {
        let seed = match entry.seed {
            Some(s) => s.to_string(),
            None => "-".to_string(),
        };
        lines.push(Line::from(format!(
            "{:>2}. {:<12} score={:<5} level={:<3} turns={:<4} seed={seed}",
            idx + 1,
            entry.name,
            entry.score,
            entry.level,
            entry.turns,
        )));
    }
    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Game Over"))
}
