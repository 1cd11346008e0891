//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    widgets::{Block, Borders},
};
use timetoe::Position;

/// Width of the history pane, borders included.
const HISTORY_WIDTH: u16 = 30;
/// Size of one square.
const SQUARE_WIDTH: u16 = 12;
const SQUARE_HEIGHT: u16 = 3;
/// Board grid: three squares plus two separators each way.
const GRID_WIDTH: u16 = SQUARE_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = SQUARE_HEIGHT * 3 + 2;

/// Where everything goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Board pane, borders included.
    pub board: Rect,
    /// Squares in index order.
    pub squares: [Rect; 9],
    /// Horizontal separators between board rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators between squares, two per row.
    pub column_separators: [Rect; 6],
    /// Move list pane, borders included.
    pub history: Rect,
    /// Inside of the move list pane; step `k` is drawn on its `k`-th line.
    pub history_inner: Rect,
    /// Status bar.
    pub status: Rect,
    /// Key help bar.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title
                Constraint::Min(GRID_HEIGHT + 2),    // Board and moves
                Constraint::Length(3),               // Status
                Constraint::Length(3),               // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(GRID_WIDTH + 2), Constraint::Length(HISTORY_WIDTH)])
            .split(chunks[1]);

        let board = body[0];
        let history = body[1];
        let grid = center_rect(pane_block().inner(board), GRID_WIDTH, GRID_HEIGHT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SQUARE_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(SQUARE_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(SQUARE_HEIGHT),
            ])
            .split(grid);

        let mut squares = [Rect::default(); 9];
        let mut column_separators = [Rect::default(); 6];
        for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SQUARE_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(SQUARE_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(SQUARE_WIDTH),
                ])
                .split(row_area);
            squares[r * 3] = cols[0];
            squares[r * 3 + 1] = cols[2];
            squares[r * 3 + 2] = cols[4];
            column_separators[r * 2] = cols[1];
            column_separators[r * 2 + 1] = cols[3];
        }

        Self {
            title: chunks[0],
            board,
            squares,
            row_separators: [rows[1], rows[3]],
            column_separators,
            history,
            history_inner: pane_block().inner(history),
            status: chunks[2],
            help: chunks[3],
        }
    }

    /// Area of one square.
    pub fn square(&self, pos: Position) -> Rect {
        self.squares[pos.to_index()]
    }

    /// Square under a terminal cell, if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.square(*pos).contains(point))
    }

    /// Line of the move list used for a step, if it fits on screen.
    pub fn history_row(&self, step: usize) -> Option<Rect> {
        let offset = u16::try_from(step).ok()?;
        if offset >= self.history_inner.height {
            return None;
        }
        Some(Rect {
            x: self.history_inner.x,
            y: self.history_inner.y + offset,
            width: self.history_inner.width,
            height: 1,
        })
    }

    /// History step under a terminal cell, if any.
    pub fn step_at(&self, column: u16, row: u16, history_len: usize) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        if !self.history_inner.contains(point) {
            return None;
        }
        let step = usize::from(row - self.history_inner.y);
        (step < history_len).then_some(step)
    }
}

/// Border used around the board and move list panes.
pub(crate) fn pane_block<'a>() -> Block<'a> {
    Block::default().borders(Borders::ALL)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
