//! Tests for drawing into an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend};
use timetoe_tui::{App, ScreenLayout, ui};

fn render(app: &App, hints: bool) -> (String, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let mut layout = ScreenLayout::default();
    terminal
        .draw(|f| layout = ui::draw(f, app, hints))
        .unwrap();
    let text = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    (text, layout)
}

#[test]
fn test_fresh_game_screen() {
    let app = App::new();
    let (text, _) = render(&app, true);
    assert!(text.contains("Next player: X"));
    assert!(text.contains("▶ Go to game start"));
    assert!(!text.contains("Go to move # 1"));
}

#[test]
fn test_move_list_and_status_after_moves() {
    let mut app = App::new();
    app.on_square_click(4);
    app.on_square_click(2);
    let (text, _) = render(&app, true);

    assert!(text.contains("Next player: X"));
    assert!(text.contains("  Go to game start"));
    assert!(text.contains("Go to move # 1 (2,2)"));
    assert!(text.contains("▶ Go to move # 2 (3,1)"));
}

#[test]
fn test_marker_follows_current_step() {
    let mut app = App::new();
    app.on_square_click(4);
    app.on_square_click(2);
    app.on_history_click(1);
    let (text, _) = render(&app, true);

    assert!(text.contains("▶ Go to move # 1 (2,2)"));
    assert!(text.contains("  Go to move # 2 (3,1)"));
    assert!(text.contains("Next player: O"));
}

#[test]
fn test_winner_is_shown() {
    let mut app = App::new();
    for index in [0, 3, 1, 4, 2] {
        app.on_square_click(index);
    }
    let (text, _) = render(&app, true);
    assert!(text.contains("Winner: X"));
}

#[test]
fn test_hints_toggle() {
    let app = App::new();
    let (with_hints, layout) = render(&app, true);
    let (without_hints, _) = render(&app, false);

    // Square numbers are drawn on the middle line of each square.
    let width = 80usize;
    let cell = |text: &str, pos: timetoe::Position| {
        let area = layout.square(pos);
        let y = usize::from(area.y + 1);
        let row: String = text.chars().skip(y * width).take(width).collect();
        row.chars()
            .skip(usize::from(area.x))
            .take(usize::from(area.width))
            .collect::<String>()
    };
    assert!(cell(&with_hints, timetoe::Position::TopLeft).contains('1'));
    assert!(!cell(&without_hints, timetoe::Position::TopLeft).contains('1'));
}
