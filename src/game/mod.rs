//! Core Connect Four game logic: board, players, win detection, and the turn
//! state machine with its input gate and outgoing events.

mod board;
mod event;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use event::{GameEvent, Move};
pub use player::Player;
pub use state::{GameOutcome, GameState, Phase};
pub use win::{has_win, winning_run, Run, RUN_LENGTH};

pub use crate::error::MoveError;
