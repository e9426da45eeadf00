//! Gomoku against the computer
//!
//! Human (Black) versus a one-ply heuristic opponent (White) on a 15x15 board:
//! - Five or more in a row wins
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Grid representation with bitboards and scoped lookahead
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Line-length scoring of candidate cells
//! - [`engine`]: Move selector for the computer
//! - [`game`]: Game state and the move pipeline used by both players
//! - [`ui`]: Native front-end built on egui
//!
//! # Quick Start
//!
//! ```
//! use gomoku::game::{apply_ai_move, apply_human_move, compute_ai_move, new_game};
//!
//! let state = new_game();
//! let state = apply_human_move(&state, 7, 7).unwrap();
//!
//! let reply = compute_ai_move(&state).unwrap();
//! let state = apply_ai_move(&state, reply).unwrap();
//!
//! assert!(state.is_human_turn());
//! ```
//!
//! # Move Selection
//!
//! The computer looks one move ahead:
//! 1. Complete its own five
//! 2. Block the human's five
//! 3. Otherwise extend its longest line, or cut the human's if that line is
//!    longer

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{find_best_move, find_best_move_with_stats, MoveResult, SearchType};
pub use error::{GameError, IllegalMove, NoLegalMove};
pub use game::{GameState, Outcome};
