//! Board structure and checked move application

use super::bitboard::Bitboard;
use super::probe::Probe;
use super::{Pos, Stone, TOTAL_CELLS};
use crate::error::IllegalMove;

/// Game board: one bitboard per color, a cell is empty when neither is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place `stone` at `(row, col)`.
    ///
    /// Fails when the coordinates fall outside the grid, the cell is
    /// occupied, or `stone` is [`Stone::Empty`]. The board is untouched on
    /// failure.
    pub fn apply_move(&mut self, row: usize, col: usize, stone: Stone) -> Result<Pos, IllegalMove> {
        let pos = Pos::try_new(row, col).ok_or(IllegalMove::OutOfBounds { row, col })?;
        if stone == Stone::Empty {
            return Err(IllegalMove::EmptyStone);
        }
        if !self.is_empty(pos) {
            return Err(IllegalMove::Occupied(pos));
        }
        self.set(pos, stone);
        Ok(pos)
    }

    /// Temporarily place `stone` at `pos`.
    ///
    /// The previous contents of the cell come back when the returned guard is
    /// dropped.
    #[inline]
    pub fn probe(&mut self, pos: Pos, stone: Stone) -> Probe<'_> {
        Probe::new(self, pos, stone)
    }

    /// Overwrite a cell. `Stone::Empty` clears it.
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, stone: Stone) {
        self.black.clear(pos);
        self.white.clear(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Unchecked placement for setting up positions in tests
    #[cfg(test)]
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.set(pos, stone);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }
}
