//! Longest-line heuristic
//!
//! A candidate cell is scored by the longest run of one color that a stone of
//! that color placed there would join. The selector computes it twice per
//! cell: once for its own color (offense) and once for the opponent's
//! (defense).

use crate::board::{Board, Pos, Stone};
use crate::rules::{DIRECTIONS, WIN_LENGTH};

/// Scores never exceed a completed five
pub const MAX_LINE_SCORE: u8 = WIN_LENGTH as u8;

/// How far the scan reaches in each direction from the candidate
const REACH: i32 = WIN_LENGTH as i32 - 1;

/// Longest line `stone` would form through `pos`, capped at [`MAX_LINE_SCORE`].
///
/// The candidate counts as one stone whatever the cell currently holds. For
/// each of the four axes the run extends up to four cells both ways, stopping
/// at the first cell that is off the board or not `stone`.
#[must_use]
pub fn line_score(board: &Board, pos: Pos, stone: Stone) -> u8 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| 1 + ray(board, pos, dr, dc, stone) + ray(board, pos, -dr, -dc, stone))
        .max()
        .map_or(1, |len| len.min(MAX_LINE_SCORE))
}

/// Contiguous `stone` cells stepping away from `pos`, at most [`REACH`].
#[inline]
fn ray(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> u8 {
    (1..=REACH)
        .map_while(|i| pos.offset(dr, dc, i))
        .take_while(|&p| board.get(p) == stone)
        .count() as u8
}
