//! # Connect Four engine
//!
//! A two-player Connect Four game engine: gravity-drop board, turn
//! enforcement derived from board occupancy, exhaustive four-direction win
//! detection, and cross-game statistics with synchronous change
//! notification. This crate is the game core only; rendering and hosting are
//! consumers that call in and subscribe to stats changes.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, and the single-game state machine
//! - [`stats`] — Win counters, game history, observer notification
//! - [`session`] — Per-consumer pairing of game state and stats
//! - [`config`] — TOML configuration loading
//! - [`error`] — Structured error types
//!
//! ## Usage
//!
//! ```
//! use connect_four_engine::game::WinState;
//! use connect_four_engine::session::GameSession;
//!
//! let mut session = GameSession::new();
//! for column in [0, 1, 0, 1, 0, 1, 0] {
//!     session.play_piece(column).unwrap();
//! }
//! assert_eq!(session.check_for_win(), WinState::Player1Wins);
//! assert_eq!(session.player1_wins(), 1);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod stats;
