//! Terminal events to commands.

use crate::controller::Command;
use crate::games::tictactoe::Direction;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::ui::cell_at;

/// What the event loop should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hand the command to the controller.
    Dispatch(Command),
    /// Leave the event loop.
    Quit,
}

/// Translates a terminal event; `area` is the last rendered frame size.
pub fn translate(event: &Event, area: Rect) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(*key),
        Event::Mouse(mouse) => mouse_action(*mouse, area),
        _ => None,
    }
}

/// Maps a key press. Releases and repeats of non-arrow keys are ignored.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Up => Command::Navigate(Direction::Up),
        KeyCode::Down => Command::Navigate(Direction::Down),
        KeyCode::Left => Command::Navigate(Direction::Left),
        KeyCode::Right => Command::Navigate(Direction::Right),
        _ if key.kind == KeyEventKind::Repeat => return None,
        // Chorded keys are left to the terminal.
        _ if !(KeyModifiers::SHIFT).contains(key.modifiers) => return None,
        KeyCode::Enter | KeyCode::Char(' ') => Command::ActivateSelected,
        KeyCode::Char(c @ '1'..='9') => Command::Activate(c as usize - '1' as usize),
        KeyCode::Char('n') | KeyCode::Char('r') => Command::NewGame,
        KeyCode::Char('t') => Command::ToggleTheme,
        _ => return None,
    };
    Some(Action::Dispatch(command))
}

/// Maps a left click on a cell to activating that cell.
pub fn mouse_action(mouse: MouseEvent, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => cell_at(area, mouse.column, mouse.row)
            .map(|pos| Action::Dispatch(Command::Activate(pos.to_index()))),
        _ => None,
    }
}
