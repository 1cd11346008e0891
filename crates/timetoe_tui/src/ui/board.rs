//! Tic-tac-toe board rendering.

use super::layout::{ScreenLayout, pane_block};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;
use timetoe::{GameState, Player, Position, Square, rules};

/// Renders the displayed board with cursor and winning-line highlights.
pub fn render_board(
    f: &mut Frame,
    layout: &ScreenLayout,
    game: &GameState,
    cursor: Position,
    hints: bool,
) {
    let title = format!(" Board (step {}) ", game.current_step());
    f.render_widget(pane_block().title(title), layout.board);

    let board = game.current_board();
    let winning = rules::winning_line(board);

    for pos in Position::iter() {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Some(Style::default().bg(Color::Green).fg(Color::Black))
        } else if pos == cursor {
            Some(Style::default().bg(Color::White).fg(Color::Black))
        } else {
            None
        };
        render_square(f, layout.square(pos), board.get(pos), pos, hints, highlight);
    }

    for area in layout.row_separators {
        render_separator(f, area);
    }
    for area in layout.column_separators {
        render_vertical_sep(f, area);
    }
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    hints: bool,
    highlight: Option<Style>,
) {
    let (text, style) = match square {
        Square::Empty if hints => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let style = match highlight {
        Some(h) => style.patch(h),
        None => style,
    };

    // Middle line of a three-line square.
    let lines = vec![Line::from(""), Line::from(Span::styled(text, style))];
    let paragraph = Paragraph::new(lines)
        .style(highlight.unwrap_or_default())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}
