//! Cross-game statistics: win counters, a chronological history of concluded
//! games, and synchronous change notification for subscribed observers.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::StatsConfig;
use crate::game::Player;

/// One concluded game. `winner` is `None` for a tie entry, which only
/// appears in the history when tie recording is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub timestamp: DateTime<Utc>,
}

/// Session-lifetime tally of concluded games.
///
/// Survives board resets; only [`reset_stats`](StatsTracker::reset_stats)
/// clears it. Every mutation notifies all registered observers synchronously,
/// in registration order, before the mutating call returns.
pub struct StatsTracker {
    player1_wins: u32,
    player2_wins: u32,
    history: VecDeque<GameResult>,
    record_ties: bool,
    history_capacity: usize, // 0 = unbounded
    observers: Vec<Box<dyn FnMut()>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::with_config(&StatsConfig::default())
    }

    pub fn with_config(config: &StatsConfig) -> Self {
        StatsTracker {
            player1_wins: 0,
            player2_wins: 0,
            history: VecDeque::new(),
            record_ties: config.record_ties,
            history_capacity: config.history_capacity,
            observers: Vec::new(),
        }
    }

    pub fn player1_wins(&self) -> u32 {
        self.player1_wins
    }

    pub fn player2_wins(&self) -> u32 {
        self.player2_wins
    }

    /// Concluded games in chronological order, oldest first.
    pub fn history(&self) -> &VecDeque<GameResult> {
        &self.history
    }

    /// Register an observer invoked after every stats mutation. A panicking
    /// observer aborts the remaining notifications for that mutation.
    pub fn on_state_changed(&mut self, handler: impl FnMut() + 'static) {
        debug!("registering stats observer");
        self.observers.push(Box::new(handler));
    }

    /// Tally a win for `player` and append it to the history.
    ///
    /// The caller guarantees at most one call per concluded game; the tracker
    /// itself does not deduplicate.
    pub fn record_win(&mut self, player: Player) {
        info!(player = player.number(), "recording win");
        match player {
            Player::One => self.player1_wins += 1,
            Player::Two => self.player2_wins += 1,
        }
        self.push_entry(GameResult {
            winner: Some(player),
            timestamp: Utc::now(),
        });
        self.notify();
    }

    /// Append a tie entry to the history, if tie recording is enabled.
    /// Ties never increment the win counters.
    pub fn record_tie(&mut self) {
        if !self.record_ties {
            return;
        }
        info!("recording tie");
        self.push_entry(GameResult {
            winner: None,
            timestamp: Utc::now(),
        });
        self.notify();
    }

    /// Zero both counters and clear the history.
    pub fn reset_stats(&mut self) {
        debug!("resetting stats");
        self.player1_wins = 0;
        self.player2_wins = 0;
        self.history.clear();
        self.notify();
    }

    fn push_entry(&mut self, entry: GameResult) {
        self.history.push_back(entry);
        if self.history_capacity > 0 && self.history.len() > self.history_capacity {
            self.history.pop_front();
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StatsTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsTracker")
            .field("player1_wins", &self.player1_wins)
            .field("player2_wins", &self.player2_wins)
            .field("history", &self.history)
            .field("record_ties", &self.record_ties)
            .field("history_capacity", &self.history_capacity)
            .field("observers", &self.observers.len())
            .finish()
    }
}
