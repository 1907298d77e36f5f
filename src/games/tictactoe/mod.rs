mod action;
mod cursor;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use cursor::{Cursor, Direction};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
