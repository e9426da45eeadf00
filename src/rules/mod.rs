//! Game rules for standard 15x15 Gomoku
//!
//! - Five or more in a row wins (overlines allowed)
//! - A full board with no five is a draw

pub mod draw;
pub mod win;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

// Re-exports for convenient access
pub use draw::{is_draw, is_full};
pub use win::{check_win, check_winner, find_five_positions, has_five_at_pos, wins_with};
