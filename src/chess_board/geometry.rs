//! Square arithmetic. Nothing here looks at pieces.

use super::ChessField;
use crate::ChessError;
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: u8 = 8;

impl ChessField {
    pub fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Parses a square like "e3": one lowercase letter then one digit.
    ///
    /// The letter is stored as its offset from `a`. Range checks are left to
    /// [`ChessField::is_on_board`], so "z9" parses.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, ChessError> {
        let mut chars = algebraic.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) if file.is_ascii_lowercase() && rank.is_ascii_digit() => {
                let file = file as u8 - b'a';
                let rank = rank as u8 - b'0';
                Ok(Self { file, rank })
            }
            _ => Err(ChessError::InvalidSquareFormat(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.file, self.rank)
    }

    pub fn is_on_board(&self, board_size: u8) -> bool {
        self.file < board_size && (1..=board_size).contains(&self.rank)
    }

    /// Signed (file, rank) offset from `self` to `other`.
    pub fn delta(&self, other: ChessField) -> (i8, i8) {
        (other.file as i8 - self.file as i8, other.rank as i8 - self.rank as i8)
    }

    /// Squares strictly between `self` and `other`, walking from `self`.
    ///
    /// Empty unless the two squares share a file, a rank or a diagonal.
    pub fn squares_between(&self, other: ChessField) -> Vec<ChessField> {
        let (df, dr) = self.delta(other);
        let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
        if !aligned {
            return Vec::new();
        }

        let (step_file, step_rank) = (df.signum(), dr.signum());
        let steps = df.abs().max(dr.abs());
        (1..steps)
            .map(|i| {
                ChessField::new(
                    (self.file as i8 + step_file * i) as u8,
                    (self.rank as i8 + step_rank * i) as u8,
                )
            })
            .collect()
    }
}

impl FromStr for ChessField {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChessField::from_algebraic(s)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

pub fn to_algebraic_square(file: u8, rank: u8) -> String {
    format!("{}{}", (b'a' + file) as char, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(s: &str) -> ChessField {
        ChessField::from_algebraic(s).unwrap()
    }

    fn between(a: &str, b: &str) -> Vec<String> {
        field(a).squares_between(field(b)).iter().map(|f| f.as_algebraic()).collect()
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(field("a1"), ChessField::new(0, 1));
        assert_eq!(field("h8"), ChessField::new(7, 8));
        assert_eq!(field("z9"), ChessField::new(25, 9));
        for bad in ["", "a", "a10", "1a", "aa", "ab1", "é1", "a-", "C5", "H8"] {
            assert!(
                matches!(ChessField::from_algebraic(bad), Err(ChessError::InvalidSquareFormat(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_render_round_trip() {
        for file in 0..BOARD_SIZE {
            for rank in 1..=BOARD_SIZE {
                let text = ChessField::new(file, rank).as_algebraic();
                assert_eq!(field(&text).as_algebraic(), text);
            }
        }
        assert_eq!("d3".parse::<ChessField>().unwrap().to_string(), "d3");
    }

    #[test]
    fn test_is_on_board() {
        assert!(field("a1").is_on_board(BOARD_SIZE));
        assert!(field("h8").is_on_board(BOARD_SIZE));
        assert!(!field("i1").is_on_board(BOARD_SIZE));
        assert!(!field("a9").is_on_board(BOARD_SIZE));
        assert!(!field("a0").is_on_board(BOARD_SIZE));
        assert!(!field("e5").is_on_board(4));
    }

    #[test]
    fn test_squares_between_orthogonal() {
        assert_eq!(between("a1", "a5"), vec!["a2", "a3", "a4"]);
        assert_eq!(between("a5", "a1"), vec!["a4", "a3", "a2"]);
        assert_eq!(between("h3", "d3"), vec!["g3", "f3", "e3"]);
        assert!(between("d3", "e3").is_empty());
    }

    #[test]
    fn test_squares_between_diagonal() {
        assert_eq!(between("b2", "f6"), vec!["c3", "d4", "e5"]);
        assert_eq!(between("f6", "b2"), vec!["e5", "d4", "c3"]);
        assert_eq!(between("a8", "d5"), vec!["b7", "c6"]);
        assert_eq!(between("h1", "e4"), vec!["g2", "f3"]);
    }

    #[test]
    fn test_squares_between_unaligned_is_empty() {
        assert!(between("c1", "d3").is_empty());
        assert!(between("a1", "h7").is_empty());
        assert!(between("e4", "e4").is_empty());
    }

    #[test]
    fn test_squares_between_length() {
        for a_file in 0..BOARD_SIZE {
            for a_rank in 1..=BOARD_SIZE {
                for b_file in 0..BOARD_SIZE {
                    for b_rank in 1..=BOARD_SIZE {
                        let a = ChessField::new(a_file, a_rank);
                        let b = ChessField::new(b_file, b_rank);
                        let (df, dr) = a.delta(b);
                        let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
                        let expected = if aligned && a != b {
                            df.abs().max(dr.abs()) as usize - 1
                        } else {
                            0
                        };
                        assert_eq!(a.squares_between(b).len(), expected, "{} {}", a, b);
                    }
                }
            }
        }
    }
}
