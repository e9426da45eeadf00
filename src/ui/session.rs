//! Front-end session: current game plus what the side panel shows

use tracing::error;

use crate::engine::MoveResult;
use crate::game::{self, GameState, Outcome, COMPUTER, HUMAN};
use crate::Pos;

/// One window's game.
///
/// The computer's reply is deferred to the next frame so the "thinking"
/// message gets drawn once.
pub struct Session {
    pub state: GameState,
    pub message: String,
    pub last_ai_result: Option<MoveResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: game::new_game(),
            message: "Game started! Your turn.".to_string(),
            last_ai_result: None,
        }
    }

    /// Replace the game wholesale.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Human clicked `pos`.
    pub fn click(&mut self, pos: Pos) {
        match game::apply_human_move(&self.state, pos.row as usize, pos.col as usize) {
            Ok(next) => {
                self.state = next;
                self.message = match self.state.winner() {
                    Some(outcome) => outcome_message(outcome).to_string(),
                    None => "The computer is thinking...".to_string(),
                };
            }
            Err(err) => self.message = err.to_string(),
        }
    }

    /// Play the computer's reply if it is the computer's turn.
    pub fn play_computer_if_due(&mut self) {
        if !self.state.is_computer_turn() {
            return;
        }

        let result = match game::compute_ai_move_with_stats(&self.state) {
            Ok(result) => result,
            Err(err) => {
                error!(%err, "move selector failed");
                self.message = err.to_string();
                return;
            }
        };

        match game::apply_ai_move(&self.state, result.best_move) {
            Ok(next) => {
                self.state = next;
                self.message = match self.state.winner() {
                    Some(outcome) => outcome_message(outcome).to_string(),
                    None => "Your turn. Place a stone.".to_string(),
                };
                self.last_ai_result = Some(result);
            }
            Err(err) => {
                error!(%err, pos = %result.best_move, "selector picked an illegal cell");
                self.message = err.to_string();
            }
        }
    }
}

/// Banner text for a finished game.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(stone) if stone == HUMAN => "Congratulations! You win!",
        Outcome::Win(stone) if stone == COMPUTER => "The computer wins. Try again!",
        Outcome::Win(_) => "Game over.",
        Outcome::Draw => "It's a draw!",
    }
}
