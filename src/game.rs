use crate::chess_board::fen::{self, INITIAL_POSITION};
use crate::chess_board::{ChessBoard, ChessField, Color, Move, PieceType};
use crate::rules::{GameState, Rules};
use crate::ChessError;
use std::collections::BTreeMap;

/// One game: the live board plus turn and outcome.
///
/// Callers drive it one move at a time. Nothing here is shared, so a host that
/// serves several clients has to serialize calls per session itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: ChessBoard,
    rules: Rules,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Starts from the default arrangement with White to move.
    pub fn new() -> Self {
        match Self::from_fen(INITIAL_POSITION) {
            Ok(session) => session,
            Err(e) => unreachable!("default position is invalid: {}", e),
        }
    }

    /// Starts from a custom position. Each color needs exactly one king.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let (board, active_color) = fen::from_fen(fen)?;
        Ok(Self {
            board,
            rules: Rules::new(active_color),
        })
    }

    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.rules.active_color())
    }

    /// Tries to play a move given as two square names such as "c1" and "d3".
    ///
    /// Returns whether the move was played. Malformed squares and illegal moves
    /// both give `false` and leave the game as it was.
    pub fn attempt_move(&mut self, from: &str, to: &str) -> bool {
        let (from, to) = match (ChessField::from_algebraic(from), ChessField::from_algebraic(to)) {
            (Ok(from), Ok(to)) => (from, to),
            _ => return false,
        };
        match self.try_move(Move::new(from, to)) {
            Ok(applied) => applied,
            // Sessions start from positions where no king is capturable, and every
            // accepted move keeps it that way, so kings are never taken.
            Err(e) => panic!("corrupted position {}: {}", self.to_fen(), e),
        }
    }

    pub fn try_move(&mut self, mv: Move) -> Result<bool, ChessError> {
        self.rules.apply_move(&mut self.board, mv.from, mv.to)
    }

    pub fn current_turn(&self) -> Color {
        self.rules.active_color()
    }

    pub fn current_state(&self) -> GameState {
        self.rules.state()
    }

    pub fn grace_turn_pending(&self) -> bool {
        self.rules.grace_turn_pending()
    }

    pub fn is_over(&self) -> bool {
        self.current_state().is_terminal()
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, ChessError> {
        self.rules.generate_legal_moves(&self.board)
    }

    /// Occupied squares with what stands on them, for rendering.
    pub fn board_snapshot_for_display(&self) -> BTreeMap<ChessField, (PieceType, Color)> {
        self.board.occupancy()
    }

    pub fn render_to_string(&self) -> String {
        self.board.render_to_string()
    }
}
