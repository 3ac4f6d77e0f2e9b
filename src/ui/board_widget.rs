use crate::game::{Board, Cell, Player, Run};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A piece on its way down, drawn at `row` while the board already holds it
/// at `landing_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub row: usize,
    pub column: usize,
    pub landing_row: usize,
    pub player: Player,
}

/// Everything drawn on top of the plain board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardOverlay {
    pub selected_column: Option<usize>,
    pub falling: Option<FallingPiece>,
    pub highlight: Option<Run>,
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Build the framed board: column numbers, grid, and the selection marker.
pub fn board_lines(board: &Board, overlay: &BoardOverlay) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.rows() + 4);
    let inner_width = board.cols() * 3 + 1;

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // matches "  ║"
    for col in 0..board.cols() {
        let label = format!("{:^3}", col + 1);
        if overlay.selected_column == Some(col) {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.cols() {
            row_spans.push(cell_span(board, overlay, row, col));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.cols() {
        if overlay.selected_column == Some(col) {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn cell_span(board: &Board, overlay: &BoardOverlay, row: usize, col: usize) -> Span<'static> {
    let mut cell = board.cell_at(row, col);
    if let Some(falling) = overlay.falling.filter(|f| f.column == col) {
        if row == falling.row {
            cell = Cell::Occupied(falling.player);
        } else if row == falling.landing_row {
            cell = Cell::Empty;
        }
    }

    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            let mut style = Style::default().fg(player_color(player));
            let highlighted = overlay
                .highlight
                .is_some_and(|run| run.contains(&(row, col)));
            if highlighted {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(" ● ", style)
        }
    }
}
