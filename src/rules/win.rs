//! Win condition checking: five or more in a row

use tracing::instrument;

use crate::board::{Board, Pos, Stone};

use super::{DIRECTIONS, WIN_LENGTH};

/// Check if there's 5+ in a row for the given color.
///
/// Every stone of `stone` is tried as the start of a run in each of the four
/// directions. Read-only.
pub fn check_win(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };

    stones.iter_ones().any(|origin| {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| run_from(board, origin, dr, dc, stone) >= WIN_LENGTH)
    })
}

/// Would placing `stone` at `pos` give `stone` a winning line?
///
/// The stone is placed through a [`Probe`](crate::board::Probe), so `board`
/// is back to its previous contents when this returns.
#[inline]
pub fn wins_with(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    let probe = board.probe(pos, stone);
    check_win(&probe, stone)
}

/// Either color's five, Black checked first.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| check_win(board, stone))
}

/// Count consecutive `stone` cells starting at `origin`, capped at WIN_LENGTH.
#[inline]
fn run_from(board: &Board, origin: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    (0..WIN_LENGTH as i32)
        .map_while(|i| origin.offset(dr, dc, i))
        .take_while(|&pos| board.get(pos) == stone)
        .count()
}

/// Fast five-in-a-row check through a specific position.
///
/// Only checks the 4 lines through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = (1..)
            .map_while(|i| pos.offset(dr, dc, i))
            .take_while(|&p| board.get(p) == color)
            .count();
        let backward = (1..)
            .map_while(|i| pos.offset(-dr, -dc, i))
            .take_while(|&p| board.get(p) == color)
            .count();
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Find the positions of a 5-in-a-row if exists
///
/// Returns Some(Vec<Pos>) with at least 5 positions if a winning line exists,
/// None otherwise.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    let stones = board.stones(stone)?;

    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let mut line = vec![pos];

            // Extend in negative direction first
            for i in 1..WIN_LENGTH as i32 {
                match pos.offset(-dr, -dc, i) {
                    Some(prev) if board.get(prev) == stone => line.insert(0, prev),
                    _ => break,
                }
            }

            // Extend in positive direction
            for i in 1..WIN_LENGTH as i32 {
                match pos.offset(dr, dc, i) {
                    Some(next) if board.get(next) == stone => line.push(next),
                    _ => break,
                }
            }

            if line.len() >= WIN_LENGTH {
                return Some(line);
            }
        }
    }
    None
}
