//! Rules engine for a king-race chess variant.
//!
//! Kings, knights, bishops and rooks move as in chess. The first king to reach
//! the far rank wins, unless the other king gets there on the very next ply,
//! which is a draw. No move may leave any king attackable.

pub mod chess_board;
pub mod engines;
pub mod game;
pub mod perft;
pub mod rules;
pub mod ui;

pub use chess_board::{ChessBoard, ChessField, Color, Move, Piece, PieceType};
pub use game::GameSession;
pub use rules::GameState;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square {0:?}: expected a letter followed by a digit")]
    InvalidSquareFormat(String),

    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("unknown piece {0:?}")]
    UnknownPiece(String),
}
