//! A game session: one [`GameState`] paired with one [`StatsTracker`].
//!
//! The host creates a session when a consumer attaches and drops it when the
//! consumer leaves; nothing in here is shared or global. Sessions provide no
//! internal locking, so a host serving concurrent callers over a single
//! session must serialize access itself.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::MoveError;
use crate::game::{Board, GameState, WinState};
use crate::stats::{GameResult, StatsTracker};

/// Owning handle for one game plus its accumulated stats, exposing the full
/// surface the presentation layer consumes.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    stats: StatsTracker,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        debug!("creating game session");
        GameSession {
            state: GameState::new(),
            stats: StatsTracker::with_config(&config.stats),
        }
    }

    /// Read-only board access for rendering.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The player (1 or 2) whose turn it is.
    pub fn current_player_turn(&self) -> u8 {
        self.state.player_turn().number()
    }

    /// Number of pieces played in the current game.
    pub fn current_turn_count(&self) -> usize {
        self.state.current_turn()
    }

    /// Drop the current player's piece into `column`; returns the landing
    /// row (1 = bottom). The presentation layer surfaces failures as user
    /// feedback and takes no board action.
    pub fn play_piece(&mut self, column: usize) -> Result<u8, MoveError> {
        self.state.play_piece(column)
    }

    /// Evaluate the current game for a terminal result, recording a newly
    /// concluded game into the stats (which notifies observers) at most once.
    pub fn check_for_win(&mut self) -> WinState {
        self.state.check_for_win(&mut self.stats)
    }

    /// Start a new game. Stats and observers are untouched.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Clear win counters and history; fires one notification.
    pub fn reset_stats(&mut self) {
        self.stats.reset_stats();
    }

    pub fn player1_wins(&self) -> u32 {
        self.stats.player1_wins()
    }

    pub fn player2_wins(&self) -> u32 {
        self.stats.player2_wins()
    }

    /// Concluded games, oldest first.
    pub fn game_history(&self) -> &VecDeque<GameResult> {
        self.stats.history()
    }

    /// Register a handler invoked synchronously whenever stats mutate.
    pub fn on_state_changed(&mut self, handler: impl FnMut() + 'static) {
        self.stats.on_state_changed(handler);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
