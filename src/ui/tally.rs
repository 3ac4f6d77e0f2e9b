use crate::game::{GameOutcome, Player};

/// Session score across games played in one process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: [usize; 2],
    ties: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(player) => self.wins[Self::slot(player)] += 1,
            GameOutcome::Tie => self.ties += 1,
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        self.wins[Self::slot(player)]
    }

    pub fn ties(&self) -> usize {
        self.ties
    }

    fn slot(player: Player) -> usize {
        usize::from(player.id() - 1)
    }
}
