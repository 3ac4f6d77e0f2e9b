//! Line-oriented front end: one command per line on the input, board and
//! prompts on the output. Moves resolve immediately, with no animation.

use std::io::{self, BufRead, Write};

use tracing::info;

use super::tally::Tally;
use crate::config::BoardConfig;
use crate::game::{GameEvent, GameState, MoveError, Player};

/// Play games until `q` or end of input. Returns the session tally.
pub fn run<R: BufRead, W: Write>(
    config: &BoardConfig,
    mut input: R,
    output: &mut W,
) -> io::Result<Tally> {
    let mut game = new_game(config)?;
    let mut tally = Tally::default();
    let cols = game.board().cols();
    let mut buf = Vec::new();

    loop {
        write!(output, "\n{}", game.board())?;
        let player = game.current_player();
        write!(
            output,
            "{} ({}) - column 1-{cols}, n: new game, q: quit > ",
            player.name(),
            player.symbol()
        )?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }
        // Undecodable bytes become U+FFFD and fail the column parse below
        let line = String::from_utf8_lossy(&buf);

        let column = match line.trim() {
            "q" => break,
            "n" => {
                game = new_game(config)?;
                writeln!(output, "New game started!")?;
                continue;
            }
            text => match text.parse::<usize>() {
                Ok(n) if (1..=cols).contains(&n) => n - 1,
                _ => {
                    writeln!(output, "Enter a column between 1 and {cols}.")?;
                    continue;
                }
            },
        };

        match game.play(column) {
            Ok(Some(outcome)) => {
                let events: Vec<GameEvent> = game.drain_events().collect();
                for event in events {
                    match event {
                        GameEvent::GameWon { player, .. } => {
                            write!(output, "\n{}", game.board())?;
                            writeln!(output, "{} won!", player.name())?;
                        }
                        GameEvent::GameTied => {
                            write!(output, "\n{}", game.board())?;
                            writeln!(output, "Tie game")?;
                        }
                        _ => {}
                    }
                }
                tally.record(outcome);
                game = new_game(config)?;
            }
            Ok(None) => {
                game.drain_events().for_each(drop);
            }
            Err(MoveError::ColumnFull { .. }) => {
                writeln!(output, "Column is full!")?;
            }
            Err(err) => {
                writeln!(output, "{err}")?;
            }
        }
    }

    info!(
        player_one = tally.wins(Player::One),
        player_two = tally.wins(Player::Two),
        ties = tally.ties(),
        "console session over"
    );
    Ok(tally)
}

fn new_game(config: &BoardConfig) -> io::Result<GameState> {
    GameState::from_config(config).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(config: &BoardConfig, script: &str) -> (Tally, String) {
        play_bytes(config, script.as_bytes())
    }

    fn play_bytes(config: &BoardConfig, script: &[u8]) -> (Tally, String) {
        let mut output = Vec::new();
        let tally = run(config, Cursor::new(script), &mut output).unwrap();
        (tally, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_vertical_win_is_announced() {
        let (tally, output) = play(&BoardConfig::default(), "1\n2\n1\n2\n1\n2\n1\nq\n");
        assert!(output.contains("Player 1 won!"));
        assert_eq!(tally.wins(Player::One), 1);
        // The next game starts with player one again
        assert!(output
            .trim_end()
            .ends_with("Player 1 (X) - column 1-7, n: new game, q: quit >"));
    }

    #[test]
    fn test_bad_input_reprompts_same_player() {
        let (_, output) = play(&BoardConfig::default(), "0\n8\nabc\n4\n");
        assert_eq!(output.matches("Enter a column between 1 and 7.").count(), 3);
        assert_eq!(output.matches("Player 1 (X)").count(), 4);
        assert_eq!(output.matches("Player 2 (O)").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_reprompts_same_player() {
        let (tally, output) = play_bytes(&BoardConfig::default(), b"\xff\n4\nq\n");
        assert_eq!(output.matches("Enter a column between 1 and 7.").count(), 1);
        assert_eq!(output.matches("Player 1 (X)").count(), 2);
        assert_eq!(output.matches("Player 2 (O)").count(), 1);
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn test_full_column_reprompts() {
        let config = BoardConfig { rows: 1, cols: 3 };
        let (_, output) = play(&config, "2\n2\n");
        assert!(output.contains("Column is full!"));
        assert!(output
            .trim_end()
            .ends_with("Player 2 (O) - column 1-3, n: new game, q: quit >"));
    }

    #[test]
    fn test_tie_is_announced() {
        let config = BoardConfig { rows: 2, cols: 2 };
        let (tally, output) = play(&config, "1\n2\n1\n2\n");
        assert!(output.contains("Tie game"));
        assert_eq!(tally.ties(), 1);
    }

    #[test]
    fn test_new_game_command_clears_board() {
        let (_, output) = play(&BoardConfig { rows: 2, cols: 2 }, "1\nn\n");
        assert!(output.contains("New game started!"));
        assert!(output.ends_with(
            ". .\n. .\nPlayer 1 (X) - column 1-2, n: new game, q: quit > \n"
        ));
    }
}
