//! Terminal front end for timetoe.
//!
//! A thin renderer over [`timetoe::GameState`]: it draws the board and the
//! move list, and forwards square clicks to `apply_move` and move-list
//! clicks to `jump_to`. All game rules live in the core crate.
//!
//! # Architecture
//!
//! - **App**: the session, owning the single game
//! - **Input**: key and mouse events mapped to [`Action`]s
//! - **UI**: a [`ScreenLayout`] shared by drawing and mouse hit-testing
//! - **Config**: CLI flags over a TOML file over defaults

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;

pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, CursorMove, map_event, map_key, map_mouse, move_cursor};
pub use logging::init_logging;
pub use terminal::run;
pub use ui::ScreenLayout;
