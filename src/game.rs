//! Game state and the move pipeline shared by the human and the computer
//!
//! The state is a plain value. Each move returns a new [`GameState`]; a new
//! game replaces the old state wholesale.
//!
//! ```text
//! HumanTurn --legal move--> ComputerTurn --legal move--> HumanTurn
//!     |                          |
//!     +------ five / full -------+--------> GameOver(winner)
//! ```

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Pos, Stone};
use crate::engine::{find_best_move_with_stats, MoveResult};
use crate::error::{IllegalMove, NoLegalMove};
use crate::rules::{check_winner, find_five_positions, has_five_at_pos, is_full};

/// The human plays Black and moves first.
pub const HUMAN: Stone = Stone::Black;
/// The computer plays White.
pub const COMPUTER: Stone = Stone::White;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// Everything a front-end needs to render a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Stone,
    outcome: Option<Outcome>,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
    move_count: u32,
}

impl GameState {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: HUMAN,
            outcome: None,
            last_move: None,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Resume from an arbitrary position with `turn` to move.
    ///
    /// A five already on the board, or a full board, ends the game
    /// immediately.
    pub fn with_board(board: Board, turn: Stone) -> Self {
        let (outcome, winning_line) = match check_winner(&board) {
            Some(stone) => (Some(Outcome::Win(stone)), find_five_positions(&board, stone)),
            None if is_full(&board) => (Some(Outcome::Draw), None),
            None => (None, None),
        };

        Self {
            move_count: board.stone_count(),
            board,
            turn,
            outcome,
            last_move: None,
            winning_line,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Frozen once the game is over.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// `None` while the game is running.
    pub fn winner(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Cells of the five that ended the game, if it ended by a win.
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Stones on the board.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// A front-end may offer this cell for a click.
    pub fn is_clickable(&self, pos: Pos) -> bool {
        !self.game_over() && self.board.is_empty(pos)
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game_over() && self.turn == HUMAN
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.game_over() && self.turn == COMPUTER
    }

    /// Place a stone for `stone` and settle win, draw and turn.
    fn play(&self, row: usize, col: usize, stone: Stone) -> Result<GameState, IllegalMove> {
        if self.game_over() {
            return Err(IllegalMove::GameOver);
        }
        if stone != self.turn {
            return Err(IllegalMove::OutOfTurn {
                expected: self.turn,
                actual: stone,
            });
        }

        let mut next = self.clone();
        let pos = next.board.apply_move(row, col, stone)?;
        next.last_move = Some(pos);
        next.move_count += 1;
        debug!(%pos, %stone, moves = next.move_count, "stone placed");

        // Any new five runs through the stone just placed
        if has_five_at_pos(&next.board, pos, stone) {
            next.outcome = Some(Outcome::Win(stone));
            next.winning_line = find_five_positions(&next.board, stone);
            info!(winner = %stone, moves = next.move_count, "five in a row");
        } else if is_full(&next.board) {
            next.outcome = Some(Outcome::Draw);
            info!(moves = next.move_count, "board full, draw");
        } else {
            next.turn = stone.opponent();
        }

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a new game.
pub fn new_game() -> GameState {
    info!("new game");
    GameState::new()
}

/// Play the human's stone at `(row, col)`.
#[instrument(skip(state), fields(turn = %state.turn()))]
pub fn apply_human_move(state: &GameState, row: usize, col: usize) -> Result<GameState, IllegalMove> {
    state.play(row, col, HUMAN).inspect_err(|err| {
        warn!(%err, "human move rejected");
    })
}

/// Choose the computer's reply on `state`'s board.
///
/// The state is not changed; pass the cell to [`apply_ai_move`].
pub fn compute_ai_move(state: &GameState) -> Result<Pos, NoLegalMove> {
    compute_ai_move_with_stats(state).map(|result| result.best_move)
}

/// [`compute_ai_move`] with the selector's report.
pub fn compute_ai_move_with_stats(state: &GameState) -> Result<MoveResult, NoLegalMove> {
    find_best_move_with_stats(state.board(), COMPUTER)
}

/// Play the computer's stone at `pos` through the same checks as a human move.
#[instrument(skip(state), fields(turn = %state.turn()))]
pub fn apply_ai_move(state: &GameState, pos: Pos) -> Result<GameState, IllegalMove> {
    state.play(pos.row as usize, pos.col as usize, COMPUTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};
    use crate::rules::check_win;
    use crate::rules::draw::tests::drawn_pattern;

    #[test]
    fn test_new_game() {
        let state = new_game();
        assert_eq!(state.board().empty_cells().count(), TOTAL_CELLS);
        assert_eq!(state.turn(), Stone::Black);
        assert!(!state.game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.last_move(), None);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_human_move_switches_turn() {
        let state = new_game();
        let next = apply_human_move(&state, 7, 7).unwrap();

        assert_eq!(next.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(next.turn(), Stone::White);
        assert_eq!(next.last_move(), Some(Pos::new(7, 7)));
        assert!(next.is_computer_turn());
        assert!(!next.is_clickable(Pos::new(7, 7)));
        assert!(next.is_clickable(Pos::new(7, 8)));

        // The old state is untouched
        assert!(state.board().is_board_empty());
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let state = apply_human_move(&new_game(), 7, 7).unwrap();
        assert_eq!(
            apply_human_move(&state, 0, 0),
            Err(IllegalMove::OutOfTurn {
                expected: Stone::White,
                actual: Stone::Black,
            })
        );
    }

    #[test]
    fn test_computer_cannot_move_first() {
        assert_eq!(
            apply_ai_move(&new_game(), Pos::new(0, 0)),
            Err(IllegalMove::OutOfTurn {
                expected: Stone::Black,
                actual: Stone::White,
            })
        );
    }

    #[test]
    fn test_occupied_and_out_of_range_rejected() {
        let state = apply_human_move(&new_game(), 7, 7).unwrap();
        let state = apply_ai_move(&state, Pos::new(0, 0)).unwrap();

        assert_eq!(
            apply_human_move(&state, 0, 0),
            Err(IllegalMove::Occupied(Pos::new(0, 0)))
        );
        assert_eq!(
            apply_human_move(&state, BOARD_SIZE, 3),
            Err(IllegalMove::OutOfBounds { row: 15, col: 3 })
        );
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_five_ends_game_and_freezes_turn() {
        let mut state = new_game();
        for (i, c) in (7..11).enumerate() {
            state = apply_human_move(&state, 7, c).unwrap();
            state = apply_ai_move(&state, Pos::new(0, 2 * i as u8)).unwrap();
        }
        assert!(!check_win(state.board(), Stone::Black));

        let won = apply_human_move(&state, 7, 11).unwrap();
        assert!(won.game_over());
        assert_eq!(won.winner(), Some(Outcome::Win(Stone::Black)));
        assert_eq!(won.turn(), Stone::Black);
        assert_eq!(won.winning_line().map(<[Pos]>::len), Some(5));
        assert!(!won.is_clickable(Pos::new(14, 14)));

        assert_eq!(apply_ai_move(&won, Pos::new(7, 6)), Err(IllegalMove::GameOver));
        assert_eq!(apply_human_move(&won, 14, 14), Err(IllegalMove::GameOver));

        // The other end completes five just as well
        let won_left = apply_human_move(&state, 7, 6).unwrap();
        assert_eq!(won_left.winner(), Some(Outcome::Win(Stone::Black)));
    }

    #[test]
    fn test_computer_completes_diagonal() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        let state = GameState::with_board(board, COMPUTER);

        let pos = compute_ai_move(&state).unwrap();
        assert_eq!(pos, Pos::new(4, 4));

        let next = apply_ai_move(&state, pos).unwrap();
        assert_eq!(next.winner(), Some(Outcome::Win(Stone::White)));
    }

    #[test]
    fn test_computer_blocks_human_four() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(5, c), Stone::Black);
        }
        let state = GameState::with_board(board, COMPUTER);

        let pos = compute_ai_move(&state).unwrap();
        assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9));
        assert_eq!(
            compute_ai_move_with_stats(&state).unwrap().search_type,
            crate::engine::SearchType::Block
        );
    }

    #[test]
    fn test_compute_is_deterministic_and_pure() {
        let state = apply_human_move(&new_game(), 7, 7).unwrap();
        let before = state.clone();

        let first = compute_ai_move(&state);
        let second = compute_ai_move(&state);
        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn test_filling_board_without_five_is_draw() {
        let cells = || (0..TOTAL_CELLS).map(Pos::from_index);
        let black: Vec<Pos> = cells()
            .filter(|p| drawn_pattern(p.row as usize, p.col as usize) == Stone::Black)
            .collect();
        let white: Vec<Pos> = cells()
            .filter(|p| drawn_pattern(p.row as usize, p.col as usize) == Stone::White)
            .collect();
        assert_eq!((black.len(), white.len()), (113, 112));

        let mut state = new_game();
        for (i, b) in black.iter().enumerate() {
            assert!(!state.game_over());
            state = apply_human_move(&state, b.row as usize, b.col as usize).unwrap();
            if let Some(&w) = white.get(i) {
                state = apply_ai_move(&state, w).unwrap();
            }
        }

        assert!(state.game_over());
        assert_eq!(state.winner(), Some(Outcome::Draw));
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.move_count(), TOTAL_CELLS as u32);
        assert_eq!(compute_ai_move(&state), Err(NoLegalMove::BoardFull));
    }

    #[test]
    fn test_with_board_detects_finished_games() {
        let mut board = Board::new();
        for r in 0..5 {
            board.place_stone(Pos::new(r, 14), Stone::White);
        }
        let state = GameState::with_board(board, HUMAN);
        assert_eq!(state.winner(), Some(Outcome::Win(Stone::White)));
        assert!(!state.is_human_turn());
        assert_eq!(apply_human_move(&state, 7, 7), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_full_exchange_with_selector() {
        let mut state = new_game();
        for &(r, c) in &[(7, 7), (7, 8), (8, 7)] {
            state = apply_human_move(&state, r, c).unwrap();
            let reply = compute_ai_move(&state).unwrap();
            assert!(state.is_clickable(reply));
            state = apply_ai_move(&state, reply).unwrap();
            assert!(state.is_human_turn());
        }
        assert_eq!(state.move_count(), 6);
    }

    #[test]
    fn test_move_win_check_agrees_with_full_scan() {
        let mut state = new_game();
        let moves = [(7, 7), (0, 0), (8, 8), (0, 1), (9, 9), (0, 2), (10, 10), (0, 3)];
        for (i, &(r, c)) in moves.iter().enumerate() {
            state = if i % 2 == 0 {
                apply_human_move(&state, r, c).unwrap()
            } else {
                apply_ai_move(&state, Pos::new(r as u8, c as u8)).unwrap()
            };
            let any_five =
                check_win(state.board(), Stone::Black) || check_win(state.board(), Stone::White);
            assert_eq!(state.game_over(), any_five);
        }

        // White's row and Black's diagonal are both one short
        let white_wins = apply_human_move(&state, 14, 14)
            .and_then(|s| apply_ai_move(&s, Pos::new(0, 4)))
            .unwrap();
        assert!(check_win(white_wins.board(), Stone::White));
        assert_eq!(white_wins.winner(), Some(Outcome::Win(Stone::White)));

        let black_wins = apply_human_move(&state, 11, 11).unwrap();
        assert!(check_win(black_wins.board(), Stone::Black));
        assert_eq!(black_wins.winner(), Some(Outcome::Win(Stone::Black)));
        assert_eq!(black_wins.winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_with_board_reports_winning_line() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(14 - i, i), Stone::Black);
        }
        let state = GameState::with_board(board, COMPUTER);
        assert_eq!(state.winner(), Some(Outcome::Win(Stone::Black)));
        assert_eq!(state.winning_line().map(<[Pos]>::len), Some(5));
    }
}
