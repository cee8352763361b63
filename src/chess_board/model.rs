use crate::ChessError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The closed set of pieces this variant is played with.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Knight,
    Bishop,
    Rook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    /// Zero-based column, `a` is 0.
    pub file: u8,
    /// One-based row, as printed on the board.
    pub rank: u8,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::King => write!(f, "K"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
        }
    }
}

impl PieceType {
    pub const ALL: [PieceType; 4] = [PieceType::King, PieceType::Knight, PieceType::Bishop, PieceType::Rook];

    /// Looks up a piece by its English name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ChessError> {
        match name.to_ascii_lowercase().as_str() {
            "king" => Ok(PieceType::King),
            "knight" => Ok(PieceType::Knight),
            "bishop" => Ok(PieceType::Bishop),
            "rook" => Ok(PieceType::Rook),
            _ => Err(ChessError::UnknownPiece(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
        }
    }

    /// Whether `from -> to` matches this piece's movement pattern.
    ///
    /// Only square deltas are looked at. Occupancy, paths and king safety are
    /// decided by the rules engine. The king accepts the null move here, so
    /// callers must reject `from == to` on their own.
    pub fn is_legal_shape(&self, from: ChessField, to: ChessField) -> bool {
        let (df, dr) = from.delta(to);
        let (df, dr) = (df.abs(), dr.abs());
        match self {
            PieceType::King => df <= 1 && dr <= 1,
            PieceType::Knight => (df == 2 && dr == 1) || (df == 1 && dr == 2),
            PieceType::Bishop => df == dr && df != 0,
            PieceType::Rook => (df == 0) != (dr == 0),
        }
    }

    pub fn can_jump(&self) -> bool {
        matches!(self, PieceType::Knight)
    }
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceType::King
    }

    pub fn can_jump(&self) -> bool {
        self.kind.can_jump()
    }

    pub fn is_legal_shape(&self, from: ChessField, to: ChessField) -> bool {
        self.kind.is_legal_shape(from, to)
    }

    /// Letter used in position strings, upper case for White.
    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::King => 'k',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
        };
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece { color, kind })
    }

    /// Unicode glyph for terminal rendering.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Rook) => '♖',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Rook) => '♜',
        }
    }
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, ChessError> {
        if !algebraic.is_ascii() || algebraic.len() != 4 {
            return Err(ChessError::InvalidSquareFormat(algebraic.to_string()));
        }
        let from = ChessField::from_algebraic(&algebraic[0..2])?;
        let to = ChessField::from_algebraic(&algebraic[2..4])?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
