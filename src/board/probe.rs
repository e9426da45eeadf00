//! Scoped hypothetical placement

use std::ops::Deref;

use super::{Board, Pos, Stone};

/// A stone placed for lookahead only.
///
/// Derefs to the board with the stone in place. Dropping the guard writes the
/// cell's prior value back, whichever way the caller leaves the scope.
#[must_use = "the placement is reverted as soon as the guard is dropped"]
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    prior: Stone,
}

impl<'a> Probe<'a> {
    pub(super) fn new(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        let prior = board.get(pos);
        board.set(pos, stone);
        Self { board, pos, prior }
    }

    /// Cell holding the hypothetical stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.prior);
    }
}
