//! Move list rendering.

use super::layout::{ScreenLayout, pane_block};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use timetoe::GameState;

/// Renders one line per history step; the displayed step is bold and marked.
pub fn render_history(f: &mut Frame, layout: &ScreenLayout, game: &GameState) {
    f.render_widget(pane_block().title(" Moves "), layout.history);

    for step in 0..game.history().len() {
        let (Some(area), Some(label)) = (layout.history_row(step), game.move_label(step)) else {
            // Rows past the pane height are not drawn.
            break;
        };
        let (marker, style) = if step == game.current_step() {
            (
                "▶ ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default())
        };
        f.render_widget(Paragraph::new(format!("{marker}{label}")).style(style), area);
    }
}
