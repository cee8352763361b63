use super::ChessBoard;
use super::{ChessField, Color, Piece};
use crate::ChessError;

/// Kings in the corners of rank 1, each side's army mirrored on ranks 1 and 2.
pub const INITIAL_POSITION: &str = "8/8/8/8/8/8/RBN2nbr/KBN2nbk w";

const MIN_BOARD_SIZE: usize = 2;
/// Ranks are written with one digit.
const MAX_BOARD_SIZE: usize = 9;

/// Parses a position string into a board and the side to move.
///
/// The format is `<placement> <w|b>`, placement listing ranks from the top
/// down. The number of ranks sets the board size. Each color must have
/// exactly one king, and neither king may be capturable already.
pub fn from_fen(fen: &str) -> Result<(ChessBoard, Color), ChessError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(invalid("must have 2 parts"));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    let size = rows.len();
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(invalid(&format!(
            "expected between {} and {} ranks, got {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
        )));
    }

    let mut board = ChessBoard::with_size(size as u8);
    for (row_index, row) in rows.iter().enumerate() {
        let rank = (size - row_index) as u8;
        let mut file = 0usize;

        for c in row.chars() {
            if let Some(empty) = c.to_digit(10) {
                if empty == 0 {
                    return Err(invalid(&format!("empty run of 0 on rank {}", rank)));
                }
                file += empty as usize;
            } else if let Some(piece) = Piece::from_char(c) {
                if file >= size {
                    return Err(invalid(&format!("too many files on rank {}", rank)));
                }
                board.place(ChessField::new(file as u8, rank), piece);
                file += 1;
            } else {
                return Err(invalid(&format!("invalid piece character {:?}", c)));
            }
        }
        if file != size {
            return Err(invalid(&format!("rank {} has {} files, expected {}", rank, file, size)));
        }
    }

    let active_color = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(invalid(&format!("invalid active color {:?}", other))),
    };

    if board.is_any_king_attackable()? {
        return Err(invalid("a king can already be captured"));
    }

    Ok((board, active_color))
}

pub fn to_fen(board: &ChessBoard, active_color: Color) -> String {
    let mut board_representation = String::new();

    for rank in (1..=board.size()).rev() {
        let mut empty_count = 0;

        for file in 0..board.size() {
            match board.piece_at(ChessField::new(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                None => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if rank > 1 {
            board_representation.push('/');
        }
    }

    format!("{} {}", board_representation, active_color.to_char())
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidPosition(reason.to_string())
}
