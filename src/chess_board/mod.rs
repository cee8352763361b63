pub mod fen;
pub mod geometry;
pub mod model;
pub use geometry::BOARD_SIZE;
pub use model::{ChessField, Color, Move, Piece, PieceType};

mod chess_board;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::ChessBoard;
