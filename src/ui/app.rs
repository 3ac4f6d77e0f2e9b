use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, warn};

use super::board_widget::{BoardOverlay, FallingPiece};
use super::game_view::{self, GameView};
use super::tally::Tally;
use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{GameEvent, GameOutcome, GameState, Move, Run};

/// A dropped piece travelling from the top row down to where it landed.
#[derive(Debug, Clone, Copy)]
struct DropAnimation {
    mv: Move,
    row: usize,
    last_step: Instant,
}

/// Terminal front end. Owns the running game, animates each drop, and asks
/// the game to resolve the move once the piece has landed.
pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    animation: Option<DropAnimation>,
    highlight: Option<Run>,
    finished_at: Option<Instant>,
    banner: Option<String>,
    message: Option<String>,
    tally: Tally,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let game_state = GameState::from_config(&config.board)?;
        Ok(App {
            selected_column: game_state.board().cols() / 2, // Start in middle
            config,
            game_state,
            animation: None,
            highlight: None,
            finished_at: None,
            banner: None,
            message: None,
            tally: Tally::default(),
            should_quit: false,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let frame_time = self.frame_time();
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            if event::poll(frame_time)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    fn frame_time(&self) -> Duration {
        Duration::from_millis(self.config.ui.drop_frame_ms)
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        // Dismissing the end-of-game banner starts the next game
        if self.banner.is_some() {
            self.new_game();
            return;
        }

        let cols = self.game_state.board().cols();
        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(now);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < cols {
                    self.selected_column = column;
                    self.drop_piece(now);
                }
            }
            KeyCode::Char('r') => {
                self.new_game();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Advance the drop animation and the end-of-game banner timer
    pub fn tick(&mut self, now: Instant) {
        let frame_time = self.frame_time();
        while let Some(animation) = self.animation.as_mut() {
            if now.duration_since(animation.last_step) < frame_time {
                break;
            }
            if animation.row < animation.mv.row {
                animation.row += 1;
                animation.last_step += frame_time;
            } else {
                self.animation = None;
                self.land(now);
            }
        }

        if let Some(finished_at) = self.finished_at {
            let delay = Duration::from_millis(self.config.ui.announce_delay_ms);
            if self.banner.is_none() && now.duration_since(finished_at) >= delay {
                self.banner = Some(game_view::status_line(&self.game_state));
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self, now: Instant) {
        match self.game_state.attempt_move(self.selected_column) {
            Ok(mv) => {
                self.animation = Some(DropAnimation {
                    mv,
                    row: 0,
                    last_step: now,
                });
                self.process_events(now);
            }
            Err(MoveError::InputLocked) => {
                if self.game_state.is_terminal() {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                } else {
                    debug!(column = self.selected_column, "ignoring input during drop");
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn land(&mut self, now: Instant) {
        if let Err(err) = self.game_state.resolve_move() {
            warn!(%err, "piece landed without a pending move");
        }
        self.process_events(now);
    }

    fn process_events(&mut self, now: Instant) {
        let events: Vec<GameEvent> = self.game_state.drain_events().collect();
        for event in events {
            match event {
                GameEvent::MoveApplied(mv) => {
                    debug!(
                        row = mv.row,
                        column = mv.column,
                        player = mv.player.id(),
                        "piece dropped"
                    );
                }
                GameEvent::TurnSwitched { player } => {
                    debug!(player = player.id(), "turn switched");
                }
                GameEvent::GameWon { player, run } => {
                    self.highlight = Some(run);
                    self.tally.record(GameOutcome::Winner(player));
                    self.finished_at = Some(now);
                }
                GameEvent::GameTied => {
                    self.tally.record(GameOutcome::Tie);
                    self.finished_at = Some(now);
                }
            }
        }
    }

    fn new_game(&mut self) {
        match GameState::from_config(&self.config.board) {
            Ok(game_state) => {
                self.selected_column = game_state.board().cols() / 2;
                self.game_state = game_state;
                self.animation = None;
                self.highlight = None;
                self.finished_at = None;
                self.banner = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn overlay(&self) -> BoardOverlay {
        BoardOverlay {
            selected_column: (!self.game_state.is_terminal()).then_some(self.selected_column),
            falling: self.animation.map(|a| FallingPiece {
                row: a.row,
                column: a.mv.column,
                landing_row: a.mv.row,
                player: a.mv.player,
            }),
            highlight: self.highlight,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = GameView {
            game: &self.game_state,
            overlay: self.overlay(),
            message: self.message.as_deref(),
            banner: self.banner.as_deref(),
            tally: self.tally,
        };
        game_view::render(frame, &view);
    }
}
