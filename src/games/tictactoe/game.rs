//! Board state machine: InProgress → Won(X|O) | Draw.
//!
//! Every transition takes a [`GameState`] by value and returns the next one.
//! Won and Draw are terminal: once reached, [`GameState::apply_move`] rejects
//! everything until a new game is started.

use super::action::MoveError;
use super::position::Position;
use super::rules::has_line;
use super::types::{GameState, GameStatus, Square};
use tracing::{debug, instrument};

impl GameState {
    /// Places the current player's mark at `index` (0-8).
    ///
    /// Does not evaluate the result or switch players; see [`evaluate`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, the index is out of
    /// range, or the square is occupied. The state is left untouched.
    ///
    /// [`evaluate`]: GameState::evaluate
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(mut self, index: usize) -> Result<Self, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.current_player));
        Ok(self)
    }

    /// Resolves the position after a move by the current player.
    ///
    /// A winning line for the current player ends the game before the draw
    /// check runs, so a full board with a line is a win. Otherwise the turn
    /// passes to the opponent.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn evaluate(mut self) -> Self {
        if self.status.is_terminal() {
            return self;
        }

        if has_line(&self.board, self.current_player) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }
        self
    }

    /// Applies a move and evaluates it. Rejected moves leave the state as is.
    #[instrument(skip(self))]
    pub fn play(self, index: usize) -> Self {
        match self.apply_move(index) {
            Ok(next) => {
                let next = next.evaluate();
                debug!(index, status = ?next.status, "Move applied");
                next
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self
            }
        }
    }

    /// Text for the status line: whose turn, the winner, or a draw.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }
}
