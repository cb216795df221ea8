use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, CELLS};
use super::Player;
use crate::error::MoveError;
use crate::stats::StatsTracker;

/// A winning line needs 4 pieces from one player and at least 3 opposing
/// moves in between, so no board with fewer pieces can be terminal.
const MIN_PIECES_FOR_WIN: usize = 7;

/// Result of evaluating the board for a terminal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinState {
    NoWinner,
    Player1Wins,
    Player2Wins,
    Tie,
}

impl WinState {
    /// True for wins and ties; no further placement is accepted.
    pub fn is_terminal(self) -> bool {
        self != WinState::NoWinner
    }

    /// The winning player, if this is a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            WinState::Player1Wins => Some(Player::One),
            WinState::Player2Wins => Some(Player::Two),
            WinState::NoWinner | WinState::Tie => None,
        }
    }

    fn win_for(player: Player) -> WinState {
        match player {
            Player::One => WinState::Player1Wins,
            Player::Two => WinState::Player2Wins,
        }
    }
}

/// Single-game state machine: owns the board, derives the turn from
/// occupancy, evaluates terminal conditions and forwards newly concluded
/// results to a [`StatsTracker`] exactly once per game.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    result: WinState,
    // Last result forwarded to the stats tracker for this game. Guards
    // against double counting when check_for_win runs once per render.
    recorded: WinState,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            result: WinState::NoWinner,
            recorded: WinState::NoWinner,
        }
    }

    /// Read-only board access for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. Player one moves on even ply counts,
    /// so the turn can never drift out of sync with the board contents.
    pub fn player_turn(&self) -> Player {
        if self.board.occupied() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Number of pieces played so far.
    pub fn current_turn(&self) -> usize {
        self.board.occupied()
    }

    /// Place the current player's piece in the given 0-indexed column.
    ///
    /// Returns the landing row (1 = bottom, 6 = top). Fails with
    /// [`MoveError::GameOver`] once a terminal result has been cached by
    /// [`check_for_win`](Self::check_for_win); column errors propagate
    /// unchanged from the board.
    pub fn play_piece(&mut self, column: usize) -> Result<u8, MoveError> {
        if self.result.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.player_turn();
        self.board.drop_piece(column, player.cell())
    }

    /// Evaluate the board for a win or tie, recording a newly concluded
    /// result into `stats` at most once per game.
    ///
    /// Safe to call repeatedly (for example once per render): repeated calls
    /// after the same conclusion return the same result without touching the
    /// tracker again.
    pub fn check_for_win(&mut self, stats: &mut StatsTracker) -> WinState {
        if self.board.occupied() < MIN_PIECES_FOR_WIN {
            self.result = WinState::NoWinner;
            return self.result;
        }

        // Win takes precedence over a simultaneously full board.
        let result = match self.board.winner() {
            Some(player) => WinState::win_for(player),
            None if self.board.occupied() == CELLS => WinState::Tie,
            None => WinState::NoWinner,
        };

        if result.is_terminal() && result != self.recorded {
            match result.winner() {
                Some(player) => stats.record_win(player),
                None => stats.record_tie(),
            }
            self.recorded = result;
        }

        self.result = result;
        self.result
    }

    /// Clear the board and cached result for a new game. Accumulated stats
    /// are untouched.
    pub fn reset(&mut self) {
        debug!("resetting board for a new game");
        self.board.clear();
        self.result = WinState::NoWinner;
        self.recorded = WinState::NoWinner;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: &mut GameState, columns: &[usize]) {
        for &col in columns {
            state.play_piece(col).unwrap();
        }
    }

    #[test]
    fn test_player_one_starts() {
        let state = GameState::new();
        assert_eq!(state.player_turn(), Player::One);
        assert_eq!(state.current_turn(), 0);
    }

    #[test]
    fn test_turn_toggles_and_ply_count_increments() {
        let mut state = GameState::new();

        state.play_piece(3).unwrap();
        assert_eq!(state.current_turn(), 1);
        assert_eq!(state.player_turn(), Player::Two);

        state.play_piece(3).unwrap();
        assert_eq!(state.current_turn(), 2);
        assert_eq!(state.player_turn(), Player::One);
    }

    #[test]
    fn test_failed_placement_leaves_state_unchanged() {
        let mut state = GameState::new();
        assert_eq!(state.play_piece(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(state.current_turn(), 0);
        assert_eq!(state.player_turn(), Player::One);
    }

    #[test]
    fn test_no_winner_before_seven_pieces() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[0, 1, 0, 1, 0, 1]);
        assert_eq!(state.check_for_win(&mut stats), WinState::NoWinner);
    }

    #[test]
    fn test_vertical_win_for_player_one() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(state.check_for_win(&mut stats), WinState::Player1Wins);
        assert_eq!(stats.player1_wins(), 1);
    }

    #[test]
    fn test_horizontal_win_then_game_over() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(state.check_for_win(&mut stats), WinState::Player1Wins);

        for col in 0..crate::game::COLS {
            assert_eq!(state.play_piece(col), Err(MoveError::GameOver));
        }
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[0, 1, 1, 2, 5, 2, 2, 3, 5, 3, 3, 6, 3]);
        assert_eq!(state.check_for_win(&mut stats), WinState::Player1Wins);
    }

    #[test]
    fn test_descending_diagonal_win() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[6, 5, 5, 4, 1, 4, 4, 3, 1, 3, 3, 0, 3]);
        assert_eq!(state.check_for_win(&mut stats), WinState::Player1Wins);
    }

    #[test]
    fn test_repeated_check_does_not_double_count() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        let first = state.check_for_win(&mut stats);
        let second = state.check_for_win(&mut stats);

        assert_eq!(first, second);
        assert_eq!(stats.player1_wins() + stats.player2_wins(), 1);
        assert_eq!(stats.history().len(), 1);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        // Fills every column with runs of at most 3: columns are paired and
        // each pair is filled bottom half then top half with roles swapped,
        // column 6 strictly alternates.
        let mut sequence = Vec::new();
        for pair in [(0, 1), (2, 3), (4, 5)] {
            sequence.extend([pair.0, pair.1].repeat(3));
            sequence.extend([pair.1, pair.0].repeat(3));
        }
        sequence.extend([6; 6]);

        play_all(&mut state, &sequence);
        assert_eq!(state.current_turn(), CELLS);
        assert_eq!(state.check_for_win(&mut stats), WinState::Tie);

        // Ties are terminal but never tallied as wins.
        assert_eq!(stats.player1_wins(), 0);
        assert_eq!(stats.player2_wins(), 0);
        assert_eq!(state.play_piece(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        // The 42nd drop both fills the board and completes a line for
        // player two.
        play_all(
            &mut state,
            &[
                4, 6, 0, 2, 6, 5, 1, 2, 5, 2, 3, 4, 1, 1, 4, 0, 3, 5, 5, 6, 2,
                4, 3, 0, 1, 3, 1, 5, 0, 1, 3, 0, 2, 6, 2, 4, 3, 0, 4, 6, 6, 5,
            ],
        );

        assert_eq!(state.current_turn(), CELLS);
        assert_eq!(state.check_for_win(&mut stats), WinState::Player2Wins);
        assert_eq!(stats.player2_wins(), 1);
    }

    #[test]
    fn test_reset_clears_game_but_allows_new_recording() {
        let mut state = GameState::new();
        let mut stats = StatsTracker::new();

        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        state.check_for_win(&mut stats);
        assert_eq!(stats.player1_wins(), 1);

        state.reset();
        assert_eq!(state.current_turn(), 0);
        assert_eq!(state.check_for_win(&mut stats), WinState::NoWinner);
        assert_eq!(stats.player1_wins(), 1);

        // Player one winning again in the next game is a new result.
        play_all(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        state.check_for_win(&mut stats);
        assert_eq!(stats.player1_wins(), 2);
    }
}
