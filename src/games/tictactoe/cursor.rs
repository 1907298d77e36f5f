//! Keyboard selection cursor.
//!
//! The cursor is independent of the board: it roams over all 9 cells
//! regardless of occupancy and does not wrap at the edges.

use super::position::Position;
use super::types::GameState;
use tracing::instrument;

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Currently selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    selected: Position,
}

impl Cursor {
    /// Creates a cursor on the top-left cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected position.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Moves one cell in `direction`; a step off the grid is a no-op.
    #[instrument]
    pub fn shift(self, direction: Direction) -> Self {
        let (row, col) = (self.selected.row(), self.selected.col());
        let target = match direction {
            Direction::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
            Direction::Down => Position::from_row_col(row + 1, col),
            Direction::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
            Direction::Right => Position::from_row_col(row, col + 1),
        };
        match target {
            Some(selected) => Self { selected },
            None => self,
        }
    }

    /// Plays the selected cell on `game`.
    #[instrument(skip(game))]
    pub fn activate(self, game: GameState) -> GameState {
        game.play(self.selected.to_index())
    }

    /// Returns the cursor to the top-left cell.
    pub fn reset(self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_edges_do_not_wrap() {
        let top_left = Cursor::new();
        assert_eq!(top_left.shift(Direction::Up), top_left);
        assert_eq!(top_left.shift(Direction::Left), top_left);

        let bottom_right = Cursor { selected: Position::BottomRight };
        assert_eq!(bottom_right.shift(Direction::Down), bottom_right);
        assert_eq!(bottom_right.shift(Direction::Right), bottom_right);
    }

    #[test]
    fn test_steps_from_center() {
        let center = Cursor { selected: Position::Center };
        assert_eq!(center.shift(Direction::Up).selected(), Position::TopCenter);
        assert_eq!(center.shift(Direction::Down).selected(), Position::BottomCenter);
        assert_eq!(center.shift(Direction::Left).selected(), Position::MiddleLeft);
        assert_eq!(center.shift(Direction::Right).selected(), Position::MiddleRight);
    }

    #[test]
    fn test_every_step_stays_on_grid() {
        for start in Position::iter() {
            for direction in Direction::iter() {
                let moved = Cursor { selected: start }.shift(direction).selected();
                let distance = moved.row().abs_diff(start.row()) + moved.col().abs_diff(start.col());
                assert!(moved.to_index() <= 8);
                assert!(distance <= 1, "{start:?} {direction:?} -> {moved:?}");
            }
        }
    }
}
