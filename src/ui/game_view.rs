use super::board_widget::{self, BoardOverlay};
use super::tally::Tally;
use crate::game::{GameOutcome, GameState, Phase, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Snapshot of what the game screen shows.
pub struct GameView<'a> {
    pub game: &'a GameState,
    pub overlay: BoardOverlay,
    pub message: Option<&'a str>,
    pub banner: Option<&'a str>,
    pub tally: Tally,
}

pub fn render(frame: &mut Frame, view: &GameView) {
    let board_height = u16::try_from(view.game.board().rows() + 4).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    let board = board_widget::board_lines(view.game.board(), &view.overlay);
    frame.render_widget(Paragraph::new(board).alignment(Alignment::Center), chunks[1]);
    render_message(frame, view, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// One-line status for the header
pub fn status_line(game: &GameState) -> String {
    match game.phase() {
        Phase::Active(player) => format!("Current Player: {}", player.name()),
        Phase::Finished(GameOutcome::Winner(player)) => format!("{} won!", player.name()),
        Phase::Finished(GameOutcome::Tie) => "Tie game".to_string(),
    }
}

fn render_header(frame: &mut Frame, view: &GameView, area: Rect) {
    let color = match view.game.phase() {
        Phase::Active(player) | Phase::Finished(GameOutcome::Winner(player)) => {
            board_widget::player_color(player)
        }
        Phase::Finished(GameOutcome::Tie) => Color::White,
    };

    let score = format!(
        "P1 {}  P2 {}  Ties {}",
        view.tally.wins(Player::One),
        view.tally.wins(Player::Two),
        view.tally.ties()
    );
    let line = Line::from(vec![
        Span::styled(
            status_line(view.game),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::raw(score),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, view: &GameView, area: Rect) {
    // The end-of-game banner wins over transient messages
    let (text, style) = match (view.banner, view.message) {
        (Some(banner), _) => (
            format!("{banner}  Press any key for a new game."),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        (None, Some(message)) => (message.to_string(), Style::default().fg(Color::Yellow)),
        (None, None) => (String::new(), Style::default()),
    };
    let msg_widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
