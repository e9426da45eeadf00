//! Move selector for the computer player
//!
//! One ply, no tree search. Candidates are every empty cell in row-major
//! order, and the selector stops at the first phase that produces a move:
//!
//! 1. **Immediate win**: a cell where our stone completes five
//! 2. **Block**: a cell where the opponent's stone would complete five
//! 3. **Longest line**: the cell with the best offensive line score, unless
//!    the best defensive score is strictly higher, in which case the cell
//!    with that defensive score
//!
//! Ties in every phase go to the first cell in row-major order.
//!
//! # Example
//!
//! ```
//! use gomoku::{find_best_move, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! for i in 0..4 {
//!     board.apply_move(i, i, Stone::White).unwrap();
//! }
//!
//! assert_eq!(find_best_move(&board, Stone::White), Ok(Pos::new(4, 4)));
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::board::{Board, Pos, Stone};
use crate::error::NoLegalMove;
use crate::eval::line_score;
use crate::rules::wins_with;

/// Which phase of the selector produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Our stone completes five
    ImmediateWin,
    /// The opponent would complete five here
    Block,
    /// Best offensive line score
    Offense,
    /// Best defensive line score, strictly above the best offensive one
    Defense,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell to play
    pub best_move: Pos,
    /// Phase that picked the cell
    pub search_type: SearchType,
    /// Best offensive line score seen (0 when the heuristic phase didn't run)
    pub offense_score: u8,
    /// Best defensive line score seen (0 when the heuristic phase didn't run)
    pub defense_score: u8,
    /// Empty cells examined across all phases
    pub cells_examined: usize,
    /// Wall time spent choosing
    pub elapsed: Duration,
}

/// Best move for `color` on `board`.
///
/// Fails with [`NoLegalMove`] when the board has no empty cell or `color` is
/// [`Stone::Empty`].
pub fn find_best_move(board: &Board, color: Stone) -> Result<Pos, NoLegalMove> {
    find_best_move_with_stats(board, color).map(|result| result.best_move)
}

/// Best move for `color` along with which phase found it.
///
/// `board` is not modified: hypothetical stones go onto a scratch copy and
/// are reverted before the next candidate is tried.
#[instrument(skip(board), fields(stones = board.stone_count()))]
pub fn find_best_move_with_stats(board: &Board, color: Stone) -> Result<MoveResult, NoLegalMove> {
    let start = Instant::now();
    if color == Stone::Empty {
        return Err(NoLegalMove::NotAPlayer(color));
    }
    let opponent = color.opponent();

    let candidates: Vec<Pos> = board.empty_cells().collect();
    if candidates.is_empty() {
        debug!("board is full, nothing to choose from");
        return Err(NoLegalMove::BoardFull);
    }

    let mut scratch = board.clone();
    let mut examined = 0;

    // 1. Immediate win
    if let Some(pos) = first_winning_cell(&mut scratch, &candidates, color, &mut examined) {
        debug!(%pos, "immediate win");
        return Ok(MoveResult::forced(pos, SearchType::ImmediateWin, examined, start.elapsed()));
    }

    // 2. Block the opponent's five
    if let Some(pos) = first_winning_cell(&mut scratch, &candidates, opponent, &mut examined) {
        debug!(%pos, "blocking opponent five");
        return Ok(MoveResult::forced(pos, SearchType::Block, examined, start.elapsed()));
    }

    // 3. Longest line, offense and defense tracked separately
    let mut offense: Option<(Pos, u8)> = None;
    let mut defense: Option<(Pos, u8)> = None;

    for &pos in &candidates {
        examined += 1;

        let attack = line_score(&scratch, pos, color);
        if offense.map_or(true, |(_, best)| attack > best) {
            offense = Some((pos, attack));
        }

        let block = line_score(&scratch, pos, opponent);
        if defense.map_or(true, |(_, best)| block > best) {
            defense = Some((pos, block));
        }
    }

    // candidates is non-empty, so both are set
    let (Some((attack_pos, attack)), Some((block_pos, block))) = (offense, defense) else {
        return Err(NoLegalMove::BoardFull);
    };

    let (best_move, search_type) = if attack >= block {
        (attack_pos, SearchType::Offense)
    } else {
        (block_pos, SearchType::Defense)
    };
    debug!(%best_move, ?search_type, attack, block, "heuristic pick");

    Ok(MoveResult {
        best_move,
        search_type,
        offense_score: attack,
        defense_score: block,
        cells_examined: examined,
        elapsed: start.elapsed(),
    })
}

/// First candidate where a `stone` there would complete five.
fn first_winning_cell(
    scratch: &mut Board,
    candidates: &[Pos],
    stone: Stone,
    examined: &mut usize,
) -> Option<Pos> {
    candidates.iter().copied().find(|&pos| {
        *examined += 1;
        wins_with(scratch, pos, stone)
    })
}

impl MoveResult {
    /// Result for the win and block phases, which don't score lines
    #[inline]
    fn forced(pos: Pos, search_type: SearchType, cells_examined: usize, elapsed: Duration) -> Self {
        Self {
            best_move: pos,
            search_type,
            offense_score: 0,
            defense_score: 0,
            cells_examined,
            elapsed,
        }
    }
}
