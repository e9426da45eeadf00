//! Draw detection

use crate::board::{Board, Stone};

use super::win::check_win;

/// True iff no empty cell remains.
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Full board and neither color has five in a row.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Stone::Black) && !check_win(board, Stone::White)
}
