//! Application state and command dispatch.
//!
//! The controller owns the game, the cursor and the theme as explicit
//! values. Front ends translate raw input into [`Command`]s and render the
//! [`View`] snapshot; observers hear about every visible change.

use crate::config::InputSettings;
use crate::games::tictactoe::{Board, Cursor, Direction, GameState, GameStatus, Position};
use crate::theme::{self, Theme, ThemeStore};
use tracing::{debug, info, instrument, warn};

/// Abstract input command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell at this index (a click).
    Activate(usize),
    /// Play the cell under the cursor.
    ActivateSelected,
    /// Move the cursor one cell.
    Navigate(Direction),
    /// Start a new game.
    NewGame,
    /// Switch between light and dark themes.
    ToggleTheme,
}

/// Snapshot of everything a renderer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Board contents.
    pub board: Board,
    /// Game status.
    pub status: GameStatus,
    /// Status line text.
    pub status_message: String,
    /// Cursor position.
    pub selected: Position,
    /// Active theme.
    pub theme: Theme,
}

impl View {
    /// True once the game has been won or drawn.
    pub fn finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Label for the theme toggle control.
    pub fn theme_label(&self) -> &'static str {
        self.theme.toggle_label()
    }
}

/// Receives a [`View`] after each state change.
pub trait StateObserver {
    /// Called once per command that changed visible state.
    fn on_change(&mut self, view: &View);
}

/// Observer that logs each change.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl StateObserver for LoggingObserver {
    fn on_change(&mut self, view: &View) {
        info!(
            status = %view.status_message,
            selected = %view.selected,
            theme = %view.theme,
            "State changed"
        );
    }
}

/// Explicit application state plus its collaborators.
pub struct Controller {
    game: GameState,
    cursor: Cursor,
    theme: Theme,
    input: InputSettings,
    store: Box<dyn ThemeStore>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("game", &self.game)
            .field("cursor", &self.cursor)
            .field("theme", &self.theme)
            .field("input", &self.input)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Controller {
    /// Creates a controller, reading the startup theme from `store`.
    #[instrument(skip(store))]
    pub fn new(store: Box<dyn ThemeStore>, input: InputSettings) -> Self {
        let theme = theme::load_or_default(&*store);
        info!(%theme, "Controller ready");
        Self {
            game: GameState::new(),
            cursor: Cursor::new(),
            theme,
            input,
            store,
            observers: Vec::new(),
        }
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Returns the game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the theme store.
    pub fn store(&self) -> &dyn ThemeStore {
        &*self.store
    }

    /// Builds the renderer snapshot.
    pub fn view(&self) -> View {
        View {
            board: *self.game.board(),
            status: self.game.status(),
            status_message: self.game.status_message(),
            selected: self.cursor.selected(),
            theme: self.theme,
        }
    }

    /// Applies one command. Returns whether visible state changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> bool {
        let before = self.view();

        match command {
            Command::Activate(index) => self.game = self.game.play(index),
            Command::ActivateSelected => self.game = self.cursor.activate(self.game),
            Command::Navigate(direction) => {
                if self.game.status().is_terminal() && !self.input.navigate_when_finished {
                    debug!("Navigation ignored after game end");
                } else {
                    self.cursor = self.cursor.shift(direction);
                }
            }
            Command::NewGame => {
                self.game = GameState::new();
                self.cursor = self.cursor.reset();
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggle();
                if let Err(e) = self.store.save(self.theme) {
                    warn!(error = %e, "Failed to persist theme");
                }
            }
        }

        let after = self.view();
        let changed = after != before;
        if changed {
            for observer in &mut self.observers {
                observer.on_change(&after);
            }
        }
        changed
    }
}
