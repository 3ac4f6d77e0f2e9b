use std::collections::vec_deque::{self, VecDeque};

use tracing::{debug, info};

use super::event::{GameEvent, Move};
use super::{win, Board, Player};
use crate::config::BoardConfig;
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active(Player),
    Finished(GameOutcome),
}

/// Turn state machine for one game.
///
/// A move happens in two steps. [`GameState::attempt_move`] places the piece
/// and closes the input gate; [`GameState::resolve_move`] checks for a win or
/// a tie and, if the game goes on, hands the turn over and reopens the gate.
/// A controller that animates the drop calls `resolve_move` once the
/// animation is over, so the gate stays closed for the whole drop.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    accepting_input: bool,
    pending: Option<Move>,
    outcome: Option<GameOutcome>,
    moves_played: usize,
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// New game on the default 6x7 board, player one to move
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// New game on a board of the configured size
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::with_size(config.rows, config.cols)?))
    }

    fn with_board(board: Board) -> Self {
        info!(rows = board.rows(), cols = board.cols(), "new game");
        GameState {
            board,
            current_player: Player::One,
            accepting_input: true,
            pending: None,
            outcome: None,
            moves_played: 0,
            events: VecDeque::new(),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose piece is being (or will next be) dropped
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::Finished(outcome),
            None => Phase::Active(self.current_player),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_accepting_input(&self) -> bool {
        self.accepting_input
    }

    /// Move placed by `attempt_move` and not yet resolved
    pub fn pending_move(&self) -> Option<Move> {
        self.pending
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of columns that can take a piece (empty once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On success the piece is on the board, `MoveApplied` is queued and the
    /// gate stays closed until [`GameState::resolve_move`] runs. On failure
    /// nothing changes.
    pub fn attempt_move(&mut self, column: usize) -> Result<Move, MoveError> {
        if !self.accepting_input || self.is_terminal() {
            debug!(column, "move rejected: input locked");
            return Err(MoveError::InputLocked);
        }
        self.accepting_input = false;

        let row = match self.board.next_open_row(column) {
            Ok(Some(row)) => row,
            Ok(None) => {
                self.accepting_input = true;
                debug!(column, "move rejected: column full");
                return Err(MoveError::ColumnFull { column });
            }
            Err(err) => {
                self.accepting_input = true;
                return Err(err);
            }
        };

        let player = self.current_player;
        self.board.place(row, column, player);
        self.moves_played += 1;

        let mv = Move {
            row,
            column,
            player,
        };
        self.pending = Some(mv);
        self.emit(GameEvent::MoveApplied(mv));
        Ok(mv)
    }

    /// Finish the pending move: detect a win or a tie, otherwise pass the
    /// turn to the other player and reopen the gate.
    pub fn resolve_move(&mut self) -> Result<Option<GameOutcome>, MoveError> {
        let mv = self.pending.take().ok_or(MoveError::NoMoveInProgress)?;

        if let Some(run) = win::winning_run(&self.board, mv.player) {
            let outcome = GameOutcome::Winner(mv.player);
            self.outcome = Some(outcome);
            info!(player = mv.player.id(), moves = self.moves_played, "game won");
            self.emit(GameEvent::GameWon {
                player: mv.player,
                run,
            });
            return Ok(Some(outcome));
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            info!(moves = self.moves_played, "game tied");
            self.emit(GameEvent::GameTied);
            return Ok(Some(GameOutcome::Tie));
        }

        self.current_player = self.current_player.other();
        self.accepting_input = true;
        self.emit(GameEvent::TurnSwitched {
            player: self.current_player,
        });
        Ok(None)
    }

    /// Place and resolve a move in one go, for controllers without animation
    pub fn play(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        self.attempt_move(column)?;
        self.resolve_move()
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> vec_deque::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, "game event");
        self.events.push_back(event);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
