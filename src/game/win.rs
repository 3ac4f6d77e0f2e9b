//! Four-in-a-row detection.
//!
//! Every cell is tried as the origin of a run in four directions. Runs that
//! leave the board are rejected cell by cell, so origins near the edges need
//! no special casing. Boards are small enough that the full scan is cheap.

use super::{Board, Cell, Player};

/// Number of aligned pieces needed to win
pub const RUN_LENGTH: usize = 4;

/// Board coordinates `(row, col)` of a winning run, starting at its origin
pub type Run = [(usize, usize); RUN_LENGTH];

/// (row step, col step): horizontal, vertical, diagonal down-right,
/// diagonal down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether `player` has four in a row anywhere on the board
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

/// First winning run for `player`, scanning origins row by row
pub fn winning_run(board: &Board, player: Player) -> Option<Run> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for &(d_row, d_col) in &DIRECTIONS {
                if let Some(run) = run_from(board, player, row, col, d_row, d_col) {
                    return Some(run);
                }
            }
        }
    }
    None
}

fn run_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> Option<Run> {
    let mut run = [(0, 0); RUN_LENGTH];
    for (step, slot) in run.iter_mut().enumerate() {
        let r = row as isize + d_row * step as isize;
        let c = col as isize + d_col * step as isize;
        let (r, c) = (usize::try_from(r).ok()?, usize::try_from(c).ok()?);
        if board.get(r, c)? != Cell::Occupied(player) {
            return None;
        }
        *slot = (r, c);
    }
    Some(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::with_size(rows.len(), rows[0].len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '1' => board.place(row, col, Player::One),
                    '2' => board.place(row, col, Player::Two),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!has_win(&board, Player::One));
        assert!(!has_win(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "...1111",
        ]);
        assert_eq!(
            winning_run(&board, Player::One),
            Some([(5, 3), (5, 4), (5, 5), (5, 6)])
        );
        assert!(!has_win(&board, Player::Two));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from(&[
            ".......",
            ".......",
            "..2....",
            "..2....",
            "..2....",
            "1.21...",
        ]);
        assert_eq!(
            winning_run(&board, Player::Two),
            Some([(2, 2), (3, 2), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_from(&[
            ".......",
            ".......",
            "1......",
            "21.....",
            "221....",
            "2221...",
        ]);
        assert_eq!(
            winning_run(&board, Player::One),
            Some([(2, 0), (3, 1), (4, 2), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_down_left_win_at_right_edge() {
        let board = board_from(&[
            ".......",
            ".......",
            "......2",
            ".....21",
            "....211",
            "...2111",
        ]);
        assert_eq!(
            winning_run(&board, Player::Two),
            Some([(2, 6), (3, 5), (4, 4), (5, 3)])
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_from(&[
            ".......",
            ".......",
            ".......",
            "1......",
            "1......",
            "1.111..",
        ]);
        assert!(!has_win(&board, Player::One));
    }

    #[test]
    fn test_runs_do_not_wrap_across_rows() {
        // Row-major neighbours at the row boundary are not adjacent.
        let board = board_from(&[
            "....",
            "....",
            "..11",
            "11..",
        ]);
        assert!(!has_win(&board, Player::One));
    }

    #[test]
    fn test_mixed_run_is_not_a_win() {
        let board = board_from(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "1121...",
        ]);
        assert!(!has_win(&board, Player::One));
        assert!(!has_win(&board, Player::Two));
    }

    #[test]
    fn test_board_smaller_than_run_never_wins() {
        let board = board_from(&["111", "111", "111"]);
        assert!(!has_win(&board, Player::One));
    }

    #[test]
    fn test_has_win_is_idempotent() {
        let board = board_from(&[
            ".......",
            ".......",
            "...2...",
            "..2....",
            ".2.....",
            "2......",
        ]);
        let first = has_win(&board, Player::Two);
        let second = has_win(&board, Player::Two);
        assert!(first);
        assert_eq!(first, second);
    }
}
