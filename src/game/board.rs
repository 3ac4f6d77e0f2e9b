use std::fmt;

use super::Player;
use crate::error::{ConfigError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Grid of cells, stored row-major. Row 0 is the top, the last row is the
/// bottom; pieces settle downward, so every column is a run of empty cells
/// followed by a run of occupied ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the default 6x7 size
    pub fn new() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::Validation(format!(
                "board dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            ConfigError::Validation(format!("board dimensions {rows}x{cols} are too large"))
        })?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board, like slice indexing.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Bounds-checked variant of [`Board::cell_at`]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, MoveError> {
        self.check_column(col)?;
        Ok(self.cell_at(0, col) != Cell::Empty)
    }

    /// Lowest empty row in a column, or `None` when the column is full
    pub fn next_open_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(col)?;
        Ok((0..self.rows)
            .rev()
            .find(|&row| self.cell_at(row, col) == Cell::Empty))
    }

    /// Put a piece on a cell. The caller resolves `row` with
    /// [`Board::next_open_row`] first; nothing is re-validated here.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        let index = row * self.cols + col;
        debug_assert_eq!(
            self.cells[index],
            Cell::Empty,
            "cell ({row}, {col}) is occupied"
        );
        self.cells[index] = Cell::Occupied(player);
    }

    /// Check if the board is completely full.
    ///
    /// Only the top row is inspected: with no floating pieces, a full top
    /// row means a full board.
    pub fn is_full(&self) -> bool {
        self.cells[..self.cols].iter().all(|&c| c != Cell::Empty)
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.cell_at(0, col) == Cell::Empty)
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = match self.cell_at(row, col) {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
