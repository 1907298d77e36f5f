//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! the state machine so they can be tested on hand-built boards.

pub mod win;

pub use win::{WINNING_LINES, has_line};
