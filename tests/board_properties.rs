//! Property tests for the board queries and win detection, over boards built
//! from random sequences of legal drops.

use proptest::prelude::*;

use connect_four::game::{has_win, Board, Cell, GameState, Phase, Player};

/// Drop pieces for alternating players, skipping full columns.
fn build_board(rows: usize, cols: usize, drops: &[usize]) -> Board {
    let mut board = Board::with_size(rows, cols).unwrap();
    let mut player = Player::One;
    for &d in drops {
        let col = d % cols;
        if let Some(row) = board.next_open_row(col).unwrap() {
            board.place(row, col, player);
            player = player.other();
        }
    }
    board
}

fn mirror_and_swap(board: &Board) -> Board {
    let mut mirrored = Board::with_size(board.rows(), board.cols()).unwrap();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if let Cell::Occupied(player) = board.cell_at(row, col) {
                mirrored.place(row, board.cols() - 1 - col, player.other());
            }
        }
    }
    mirrored
}

proptest! {
    #[test]
    fn column_full_iff_no_open_row(
        rows in 1usize..8,
        cols in 1usize..9,
        drops in prop::collection::vec(0usize..16, 0..80),
    ) {
        let board = build_board(rows, cols, &drops);
        for col in 0..cols {
            let full = board.is_column_full(col).unwrap();
            let open = board.next_open_row(col).unwrap();
            prop_assert_eq!(full, open.is_none());
        }
        prop_assert_eq!(board.is_full(), board.legal_columns().is_empty());
    }

    #[test]
    fn columns_have_no_floating_pieces(
        drops in prop::collection::vec(0usize..7, 0..60),
    ) {
        let board = build_board(6, 7, &drops);
        for col in 0..7 {
            let mut seen_piece = false;
            for row in 0..6 {
                match board.cell_at(row, col) {
                    Cell::Occupied(_) => seen_piece = true,
                    Cell::Empty => {
                        prop_assert!(!seen_piece, "gap below a piece in column {}", col);
                    }
                }
            }
        }
    }

    #[test]
    fn place_touches_only_its_cell(
        drops in prop::collection::vec(0usize..7, 0..40),
        col in 0usize..7,
    ) {
        let board = build_board(6, 7, &drops);
        if let Some(row) = board.next_open_row(col).unwrap() {
            let mut after = board.clone();
            after.place(row, col, Player::Two);
            prop_assert_eq!(after.cell_at(row, col), Cell::Occupied(Player::Two));
            for r in 0..6 {
                for c in 0..7 {
                    if (r, c) != (row, col) {
                        prop_assert_eq!(after.cell_at(r, c), board.cell_at(r, c));
                    }
                }
            }
        }
    }

    #[test]
    fn win_is_symmetric_under_mirror_and_swap(
        drops in prop::collection::vec(0usize..7, 0..42),
    ) {
        let board = build_board(6, 7, &drops);
        let mirrored = mirror_and_swap(&board);
        for player in [Player::One, Player::Two] {
            prop_assert_eq!(has_win(&board, player), has_win(&mirrored, player.other()));
        }
    }

    #[test]
    fn has_win_is_idempotent(
        drops in prop::collection::vec(0usize..7, 0..42),
    ) {
        let board = build_board(6, 7, &drops);
        for player in [Player::One, Player::Two] {
            prop_assert_eq!(has_win(&board, player), has_win(&board, player));
        }
    }

    #[test]
    fn turns_alternate_until_finished(
        moves in prop::collection::vec(0usize..7, 1..60),
    ) {
        let mut state = GameState::new();
        for col in moves {
            let before = state.phase();
            match state.play(col) {
                Ok(None) => {
                    let Phase::Active(player) = before else {
                        return Err(TestCaseError::fail("finished game accepted a move"));
                    };
                    prop_assert_eq!(state.phase(), Phase::Active(player.other()));
                }
                Ok(Some(outcome)) => {
                    prop_assert_eq!(state.phase(), Phase::Finished(outcome));
                }
                Err(_) => {
                    prop_assert_eq!(state.phase(), before);
                }
            }
        }
    }
}
