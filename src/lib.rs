//! Strictly Tic-Tac-Toe - a pure tic-tac-toe state machine with a terminal front end
//!
//! # Architecture
//!
//! - **Games**: board state machine and keyboard cursor, no I/O
//! - **Controller**: explicit application state and command dispatch
//! - **Theme**: light/dark flag persisted under a single key
//! - **TUI**: ratatui rendering and crossterm input decoding
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Command, Controller, GameStatus, InputSettings, MemoryThemeStore, Player};
//!
//! let mut controller = Controller::new(Box::new(MemoryThemeStore::new()), InputSettings::default());
//! for index in [4, 1, 0, 2, 8] {
//!     controller.dispatch(Command::Activate(index));
//! }
//! assert_eq!(controller.game().status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod theme;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, InputSettings};

// Crate-level exports - Controller
pub use controller::{Command, Controller, LoggingObserver, StateObserver, View};

// Crate-level exports - Theme
pub use theme::{FileThemeStore, MemoryThemeStore, StorageError, THEME_KEY, Theme, ThemeStore};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cursor, Direction, GameState, GameStatus, MoveError, Player, Position, Square, rules,
};
