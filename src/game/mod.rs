//! Core Connect Four game logic: board representation, player types, and the
//! single-game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CELLS, COLS, ROWS};
pub use player::Player;
pub use state::{GameState, WinState};
