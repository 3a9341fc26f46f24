//! Core Connect Four game logic: board representation, player numbering, and
//! the move-by-move game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, RUN_LENGTH};
pub use player::PlayerId;
pub use state::{GameOutcome, GameState, MoveOutcome, MoveResult};
