//! Front ends for the game: an animated terminal UI and a line-oriented
//! console mode.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;
mod tally;

pub use app::App;
pub use tally::Tally;
