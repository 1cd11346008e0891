//! UI rendering using ratatui.

mod board;
mod history;
mod layout;

pub use board::render_board;
pub use history::render_history;
pub use layout::ScreenLayout;

use crate::app::App;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use timetoe::GameStatus;

const HELP: &str = "1-9/click: move | arrows+Enter: cursor | [ ]: step | Home/End | R: restart | Q: quit";

/// Draws the whole screen and returns the layout used, for hit-testing.
pub fn draw(f: &mut Frame, app: &App, hints: bool) -> ScreenLayout {
    let layout = ScreenLayout::new(f.area());

    let title = Paragraph::new("timetoe - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    render_board(f, &layout, app.game(), *app.cursor(), hints);
    render_history(f, &layout, app.game());

    let status_color = match app.game().status() {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress { .. } => Color::Yellow,
    };
    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, layout.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help);

    layout
}
