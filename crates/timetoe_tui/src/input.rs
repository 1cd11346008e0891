//! Translation of terminal events into session actions.

use crate::ui::ScreenLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use timetoe::Position;

/// Direction for keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the player asked the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a square (clicked or typed 1-9).
    Place(Position),
    /// Play at the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(CursorMove),
    /// Show a history step (clicked in the move list).
    JumpTo(usize),
    /// Show the previous step.
    StepBack,
    /// Show the next step.
    StepForward,
    /// Show the empty starting board.
    JumpStart,
    /// Show the newest step.
    JumpLatest,
    /// Start a fresh game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: CursorMove) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let (column, row) = match direction {
        CursorMove::Up => (column, row.saturating_sub(1)),
        CursorMove::Down => (column, row + 1),
        CursorMove::Left => (column.saturating_sub(1), row),
        CursorMove::Right => (column + 1, row),
    };
    Position::from_column_row(column, row).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up => Some(Action::MoveCursor(CursorMove::Up)),
        KeyCode::Down => Some(Action::MoveCursor(CursorMove::Down)),
        KeyCode::Left => Some(Action::MoveCursor(CursorMove::Left)),
        KeyCode::Right => Some(Action::MoveCursor(CursorMove::Right)),
        KeyCode::Char('[') | KeyCode::PageUp | KeyCode::Backspace => Some(Action::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpStart),
        KeyCode::End => Some(Action::JumpLatest),
        _ => None,
    }
}

/// Maps a mouse event to an action using the last drawn layout.
pub fn map_mouse(mouse: MouseEvent, layout: &ScreenLayout, history_len: usize) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .square_at(mouse.column, mouse.row)
            .map(Action::Place)
            .or_else(|| {
                layout
                    .step_at(mouse.column, mouse.row, history_len)
                    .map(Action::JumpTo)
            }),
        MouseEventKind::ScrollUp => Some(Action::StepBack),
        MouseEventKind::ScrollDown => Some(Action::StepForward),
        _ => None,
    }
}

/// Maps any terminal event to an action.
pub fn map_event(event: &Event, layout: &ScreenLayout, history_len: usize) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, layout, history_len),
        _ => None,
    }
}
