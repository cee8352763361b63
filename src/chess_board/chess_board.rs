use super::geometry::BOARD_SIZE;
use super::{fen, ChessField, Color, Piece, PieceType};
use crate::ChessError;
use std::collections::{BTreeMap, HashMap};

/// Sparse occupancy map. Squares without an entry are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pieces: HashMap<ChessField, Piece>,
    size: u8,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates an empty 8x8 board
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    pub fn with_size(size: u8) -> Self {
        Self {
            pieces: HashMap::with_capacity(16),
            size,
        }
    }

    /// Delegates position parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        fen::from_fen(fen).map(|(board, _)| board)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_on_board(&self, field: ChessField) -> bool {
        field.is_on_board(self.size)
    }

    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        self.pieces.get(&field).copied()
    }

    pub fn is_occupied(&self, field: ChessField) -> bool {
        self.pieces.contains_key(&field)
    }

    /// Puts `piece` on `field`, replacing whatever stood there.
    pub fn place(&mut self, field: ChessField, piece: Piece) {
        self.pieces.insert(field, piece);
    }

    /// Looks up the piece by name, as when setting up a position by hand.
    pub fn spawn_piece(&mut self, name: &str, field: ChessField, color: Color) -> Result<(), ChessError> {
        let kind = PieceType::from_name(name)?;
        self.place(field, Piece::new(color, kind));
        Ok(())
    }

    pub fn remove(&mut self, field: ChessField) -> Option<Piece> {
        self.pieces.remove(&field)
    }

    /// Lifts the piece on `from` and sets it down on `to`. Any piece on `to` is lost.
    ///
    /// No legality checks are made here.
    pub fn relocate(&mut self, from: ChessField, to: ChessField) {
        if let Some(piece) = self.remove(from) {
            self.place(to, piece);
        }
    }

    /// Independent copy for trying out moves.
    pub fn snapshot(&self) -> ChessBoard {
        self.clone()
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        self.pieces.iter().map(|(field, piece)| (*field, *piece))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Squares of the white and the black king, in that order.
    ///
    /// Fails unless each color has exactly one king.
    pub fn locate_kings(&self) -> Result<(ChessField, ChessField), ChessError> {
        Ok((self.find_king_position(Color::White)?, self.find_king_position(Color::Black)?))
    }

    pub fn find_king_position(&self, color: Color) -> Result<ChessField, ChessError> {
        let mut kings = self
            .pieces_with_coordinates()
            .filter(|(_, piece)| piece.is_king() && piece.color == color)
            .map(|(field, _)| field);
        match (kings.next(), kings.next()) {
            (Some(field), None) => Ok(field),
            (None, _) => Err(ChessError::MissingKing(color)),
            (Some(_), Some(_)) => Err(ChessError::DuplicateKing(color)),
        }
    }

    /// Whether a piece of either color could capture the other color's king as
    /// the board stands: the shape fits and, unless the piece jumps, the path is clear.
    pub fn is_any_king_attackable(&self) -> Result<bool, ChessError> {
        let (white_king, black_king) = self.locate_kings()?;
        Ok(self.pieces_with_coordinates().any(|(square, piece)| {
            let king = match piece.color {
                Color::White => black_king,
                Color::Black => white_king,
            };
            piece.is_legal_shape(square, king)
                && (piece.can_jump() || square.squares_between(king).into_iter().all(|f| !self.is_occupied(f)))
        }))
    }

    /// Ordered, read-only view of the occupied squares for presentation layers.
    pub fn occupancy(&self) -> BTreeMap<ChessField, (PieceType, Color)> {
        self.pieces_with_coordinates()
            .map(|(field, piece)| (field, (piece.kind, piece.color)))
            .collect()
    }

    pub fn to_fen(&self, active_color: Color) -> String {
        fen::to_fen(self, active_color)
    }

    pub fn render_to_string(&self) -> String {
        let size = self.size as usize;
        let files: String = (0..self.size).map(|f| format!("  {} ", (b'a' + f) as char)).collect();
        let rule = |left: &str, mid: &str, right: &str| format!("  {}{}{}\n", left, vec!["───"; size].join(mid), right);

        let mut board_representation = String::new();
        board_representation.push_str(&format!("  {}\n", files));
        board_representation.push_str(&rule("┌", "┬", "┐"));

        for rank in (1..=self.size).rev() {
            // Render rows from the top rank down to 1
            board_representation.push_str(&format!("{} │", rank));
            for file in 0..self.size {
                let square = match self.piece_at(ChessField::new(file, rank)) {
                    Some(piece) => piece.symbol(),
                    None => ' ',
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if rank > 1 {
                board_representation.push_str(&rule("├", "┼", "┤"));
            }
        }

        board_representation.push_str(&rule("└", "┴", "┘"));
        board_representation.push_str(&format!("  {}\n", files));

        board_representation
    }
}
