use super::win::Run;
use super::Player;

/// A piece that has been placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Notifications emitted by [`GameState`](super::GameState) for the
/// presentation layer, in the order the state machine produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied(Move),
    TurnSwitched { player: Player },
    GameWon { player: Player, run: Run },
    GameTied,
}
