//! Cell evaluation for the move selector

pub mod heuristic;

pub use heuristic::{line_score, MAX_LINE_SCORE};
