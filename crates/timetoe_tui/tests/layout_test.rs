//! Tests for screen layout and mouse hit-testing.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use timetoe::Position;
use timetoe_tui::{Action, ScreenLayout, map_mouse};

fn layout() -> ScreenLayout {
    ScreenLayout::new(Rect::new(0, 0, 80, 30))
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_square_centres_hit_their_position() {
    let layout = layout();
    for pos in Position::ALL {
        let area = layout.square(pos);
        assert!(area.width > 0 && area.height > 0, "{pos} has no area");
        let (x, y) = (area.x + area.width / 2, area.y + area.height / 2);
        assert_eq!(layout.square_at(x, y), Some(pos));
    }
}

#[test]
fn test_squares_are_row_major() {
    let layout = layout();
    let top_left = layout.square(Position::TopLeft);
    let top_right = layout.square(Position::TopRight);
    let bottom_left = layout.square(Position::BottomLeft);
    assert_eq!(top_left.y, top_right.y);
    assert!(top_left.x < top_right.x);
    assert_eq!(top_left.x, bottom_left.x);
    assert!(top_left.y < bottom_left.y);
}

#[test]
fn test_separators_are_not_squares() {
    let layout = layout();
    for sep in layout.row_separators.iter().chain(layout.column_separators.iter()) {
        assert_eq!(layout.square_at(sep.x, sep.y), None);
    }
}

#[test]
fn test_history_rows_map_to_steps() {
    let layout = layout();
    for step in 0..4 {
        let row = layout.history_row(step).expect("Row fits");
        assert_eq!(layout.step_at(row.x + 2, row.y, 4), Some(step));
    }
    // Rows below the last entry are blank.
    let blank = layout.history_row(4).expect("Row fits");
    assert_eq!(layout.step_at(blank.x, blank.y, 4), None);
    // The pane border is not a row.
    assert_eq!(layout.step_at(layout.history.x, layout.history.y, 4), None);
}

#[test]
fn test_mouse_clicks_map_to_actions() {
    let layout = layout();
    let centre = layout.square(Position::Center);
    assert_eq!(
        map_mouse(click(centre.x + 1, centre.y + 1), &layout, 1),
        Some(Action::Place(Position::Center))
    );

    let row = layout.history_row(2).expect("Row fits");
    assert_eq!(map_mouse(click(row.x, row.y), &layout, 3), Some(Action::JumpTo(2)));
    assert_eq!(map_mouse(click(row.x, row.y), &layout, 2), None);

    assert_eq!(map_mouse(click(0, 0), &layout, 3), None);
}

#[test]
fn test_scroll_steps_through_history() {
    let layout = layout();
    let mut scroll = click(0, 0);
    scroll.kind = MouseEventKind::ScrollUp;
    assert_eq!(map_mouse(scroll, &layout, 3), Some(Action::StepBack));
    scroll.kind = MouseEventKind::ScrollDown;
    assert_eq!(map_mouse(scroll, &layout, 3), Some(Action::StepForward));
}
