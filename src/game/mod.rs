//! Core Connect Four game model: board representation, piece types, and the
//! game state machine that drives a single match.

mod board;
mod piece;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WINDOW};
pub use piece::Piece;
pub use state::{GameOutcome, GameState, MoveError};
