//! Terminal UI for tic-tac-toe.

mod input;
mod ui;

pub use input::{Action, key_action, mouse_action, translate};
pub use ui::{cell_areas, cell_at, cursor_background, draw};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, trace};

use crate::controller::Controller;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the player quits. The terminal is restored on exit.
#[instrument(skip_all)]
pub fn run(controller: &mut Controller) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let res = enter_and_loop(controller);
    let restored = restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    res.and(restored.map_err(Into::into))
}

fn enter_and_loop(controller: &mut Controller) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    event_loop(&mut terminal, controller)
}

/// Runs every teardown step, even after one fails.
fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture),
        execute!(stdout, Show),
    ])
}

/// First failure among already-completed steps.
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

/// One blocking read per iteration; each event is one transition.
fn event_loop(terminal: &mut Term, controller: &mut Controller) -> Result<()> {
    loop {
        let view = controller.view();
        let area = terminal.draw(|f| draw(f, &view))?.area;

        let event = event::read()?;
        trace!(?event, "Terminal event");
        match translate(&event, area) {
            Some(Action::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(Action::Dispatch(command)) => {
                controller.dispatch(command);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_reports_earliest_failure() {
        let results = [
            Ok(()),
            Err(io::Error::other("leave alternate screen")),
            Err(io::Error::other("show cursor")),
        ];
        let err = first_error(results).unwrap_err();
        assert_eq!(err.to_string(), "leave alternate screen");
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
