use crate::chess_board::{ChessBoard, ChessField, Color};
use crate::ChessError;
use std::fmt;

mod move_generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        *self != GameState::InProgress
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::InProgress => write!(f, "In progress"),
            GameState::WhiteWon => write!(f, "White won"),
            GameState::BlackWon => write!(f, "Black won"),
            GameState::Draw => write!(f, "Draw"),
        }
    }
}

/// Turn order and outcome of one game. The board itself is passed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    active_color: Color,
    state: GameState,
    /// White's king stands on the goal rank and Black still has a reply.
    grace_turn_pending: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Rules {
    pub fn new(active_color: Color) -> Self {
        Self {
            active_color,
            state: GameState::InProgress,
            grace_turn_pending: false,
        }
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grace_turn_pending(&self) -> bool {
        self.grace_turn_pending
    }

    /// Plays `from -> to` on `board` if it is legal for the side to move.
    ///
    /// Returns `Ok(false)` and leaves board and rules untouched when the move is
    /// rejected. `Err` means the board broke the one-king-per-color invariant.
    pub fn apply_move(&mut self, board: &mut ChessBoard, from: ChessField, to: ChessField) -> Result<bool, ChessError> {
        if !self.is_legal(board, from, to)? {
            return Ok(false);
        }

        let mut next = board.snapshot();
        next.relocate(from, to);
        let (state, grace_turn_pending) = self.next_game_state(&next)?;

        *board = next;
        self.active_color = self.active_color.opposite();
        self.state = state;
        self.grace_turn_pending = grace_turn_pending;
        Ok(true)
    }

    /// Outcome once `board` is the position after the last move.
    ///
    /// Black reaching the goal ends the game at once. White reaching it gives
    /// Black exactly one reply to draw by arriving too.
    fn next_game_state(&self, board: &ChessBoard) -> Result<(GameState, bool), ChessError> {
        let (white_king, black_king) = board.locate_kings()?;
        let goal = board.size();
        let white_at_goal = white_king.rank == goal;
        let black_at_goal = black_king.rank == goal;

        Ok(match (white_at_goal, black_at_goal) {
            (false, true) => (GameState::BlackWon, self.grace_turn_pending),
            (true, true) => (GameState::Draw, self.grace_turn_pending),
            (true, false) if !self.grace_turn_pending => (GameState::InProgress, true),
            (true, false) => (GameState::WhiteWon, true),
            (false, false) => (GameState::InProgress, self.grace_turn_pending),
        })
    }
}
