//! Terminal setup and the event loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::input;
use crate::ui::{self, ScreenLayout};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

/// Runs a play session until the player quits.
///
/// The terminal is restored even when setup or the loop fails.
#[instrument(skip_all, fields(mouse = *config.mouse(), hints = *config.hints()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting timetoe TUI");
    let mouse = *config.mouse();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match setup(mouse) {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = ?err, "Terminal setup failed");
            return settle(Err(err), leave(&mut io::stdout(), mouse));
        }
    };

    let mut app = App::new();
    let res = event_loop(&mut terminal, &mut app, *config.hints());
    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    let restored = restore(&mut terminal, mouse);
    info!(steps = app.game().history().len(), "Session ended");
    settle(res, restored)
}

/// Enters the alternate screen and builds the terminal. Raw mode is already on.
fn setup(mouse: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to capture mouse")?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Draw, wait for one event, handle it, repeat.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    hints: bool,
) -> Result<()> {
    let mut layout = ScreenLayout::default();
    while !*app.should_quit() {
        terminal.draw(|f| layout = ui::draw(f, app, hints))?;

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(action) = input::map_event(&event, &layout, app.game().history().len()) {
            app.dispatch(action);
        }
    }
    Ok(())
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mouse: bool) -> Result<()> {
    let left = leave(terminal.backend_mut(), mouse);
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    left.and(cursor)
}

/// Undoes raw mode, the alternate screen and mouse capture.
///
/// Every step is attempted; the first failure is returned.
fn leave(out: &mut impl Write, mouse: bool) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(out, LeaveAlternateScreen).context("Failed to leave alternate screen");
    let capture = if mouse {
        execute!(out, DisableMouseCapture).context("Failed to release mouse")
    } else {
        Ok(())
    };
    raw.and(screen).and(capture)
}

/// Combines the session result with the restore result.
///
/// A session error wins over a restore error, which is only logged.
fn settle(res: Result<()>, restored: Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(err), Err(restore_err)) => {
            error!(error = ?restore_err, "Failed to restore terminal");
            Err(err)
        }
        (res, restored) => res.and(restored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_settle_ok_when_both_succeed() {
        assert!(settle(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_settle_keeps_loop_error_over_restore_error() {
        let err = settle(Err(anyhow!("read failed")), Err(anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }

    #[test]
    fn test_settle_reports_restore_error_after_clean_loop() {
        let err = settle(Ok(()), Err(anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "restore failed");
    }

    #[test]
    fn test_settle_reports_loop_error_after_clean_restore() {
        let err = settle(Err(anyhow!("read failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }
}
