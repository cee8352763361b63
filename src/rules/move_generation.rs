use super::Rules;
use crate::chess_board::{ChessBoard, ChessField, Color, Move};
use crate::ChessError;

impl Rules {
    /// Whether the side to move may play `from -> to` on `board`.
    pub fn is_legal(&self, board: &ChessBoard, from: ChessField, to: ChessField) -> Result<bool, ChessError> {
        self.is_legal_move(board, from, to, self.active_color, false)
    }

    /// The full legality test.
    ///
    /// With `hypothetical` set, turn ownership and king safety are not looked
    /// at. That mode only answers "could this piece reach that square" while
    /// king safety is being evaluated, and stays private to the rules.
    fn is_legal_move(
        &self,
        board: &ChessBoard,
        from: ChessField,
        to: ChessField,
        turn_owner: Color,
        hypothetical: bool,
    ) -> Result<bool, ChessError> {
        if self.state.is_terminal() {
            return Ok(false);
        }

        let moving_piece = match board.piece_at(from) {
            Some(piece) => piece,
            None => return Ok(false),
        };

        if !hypothetical && moving_piece.color != turn_owner {
            return Ok(false);
        }

        if !board.is_on_board(to) {
            return Ok(false);
        }

        if !moving_piece.is_legal_shape(from, to) {
            return Ok(false);
        }

        // Also rejects the king's null move, which lands on itself.
        if let Some(target) = board.piece_at(to) {
            if target.color == moving_piece.color {
                return Ok(false);
            }
        }

        if !moving_piece.can_jump() && from.squares_between(to).into_iter().any(|f| board.is_occupied(f)) {
            return Ok(false);
        }

        if !hypothetical && self.would_expose_check(board, from, to)? {
            return Ok(false);
        }

        Ok(true)
    }

    /// Whether some piece could capture the opposing king once `from -> to` is played.
    ///
    /// Both colors are examined. A move that leaves the mover's own king en prise
    /// is caught here, and so is a move that lets the mover attack the other king.
    pub fn would_expose_check(&self, board: &ChessBoard, from: ChessField, to: ChessField) -> Result<bool, ChessError> {
        let mut hypothetical_board = board.snapshot();
        hypothetical_board.relocate(from, to);

        let (white_king, black_king) = hypothetical_board.locate_kings()?;

        for (square, piece) in hypothetical_board.pieces_with_coordinates() {
            let opposing_king = match piece.color {
                Color::White => black_king,
                Color::Black => white_king,
            };
            if self.is_legal_move(&hypothetical_board, square, opposing_king, piece.color, true)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Every legal move for the side to move, sorted. Empty once the game is over.
    pub fn generate_legal_moves(&self, board: &ChessBoard) -> Result<Vec<Move>, ChessError> {
        let mut moves = Vec::new();
        if self.state.is_terminal() {
            return Ok(moves);
        }

        let own_pieces: Vec<ChessField> = board
            .pieces_with_coordinates()
            .filter(|(_, piece)| piece.color == self.active_color)
            .map(|(field, _)| field)
            .collect();

        for from in own_pieces {
            for file in 0..board.size() {
                for rank in 1..=board.size() {
                    let to = ChessField::new(file, rank);
                    if self.is_legal(board, from, to)? {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }

        moves.sort();
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::fen::{from_fen, INITIAL_POSITION};
    use crate::chess_board::test_utils::assert_moves;
    use crate::chess_board::{Piece, PieceType};
    use crate::rules::GameState;

    fn field(s: &str) -> ChessField {
        ChessField::from_algebraic(s).unwrap()
    }

    fn setup(fen: &str) -> (ChessBoard, Rules) {
        let (board, active_color) = from_fen(fen).unwrap();
        (board, Rules::new(active_color))
    }

    fn legal(fen: &str, from: &str, to: &str) -> bool {
        let (board, rules) = setup(fen);
        rules.is_legal(&board, field(from), field(to)).unwrap()
    }

    #[test]
    fn test_initial_moves() {
        let (board, rules) = setup(INITIAL_POSITION);
        let expected = vec![
            "a2a3", "a2a4", "a2a5", "a2a6", "a2a7", "a2a8", "b2a3", "b2c3", "b2d4", "b2e5", "b2f6", "b2g7", "b2h8",
            "c1b3", "c1d3", "c1e2", "c2a3", "c2b4", "c2d4", "c2e1", "c2e3",
        ];
        assert_moves(rules.generate_legal_moves(&board).unwrap(), expected);
    }

    #[test]
    fn test_king_blocked_by_own_rook() {
        assert!(!legal(INITIAL_POSITION, "a1", "a2"));
    }

    #[test]
    fn test_knight_jumps() {
        assert!(legal(INITIAL_POSITION, "c1", "d3"));
        assert!(legal(INITIAL_POSITION, "c1", "b3"));
        assert!(!legal(INITIAL_POSITION, "c1", "c3"));
    }

    #[test]
    fn test_sliders_are_blocked() {
        // b1 bishop sees only its own knight on c2 and rook on a2.
        let (board, rules) = setup(INITIAL_POSITION);
        let moves = rules.generate_legal_moves(&board).unwrap();
        assert!(moves.iter().all(|mv| mv.from != field("b1")));
        assert!(!legal("8/8/8/8/8/8/R7/K1N4k w", "a2", "a1"));
        assert!(!legal("7k/8/8/N7/8/8/R7/K7 w", "a2", "a6"));
        assert!(legal("7k/8/8/N7/8/8/R7/K7 w", "a2", "a4"));
    }

    #[test]
    fn test_wrong_color_and_empty_source() {
        assert!(!legal(INITIAL_POSITION, "h2", "h3"));
        assert!(!legal(INITIAL_POSITION, "d4", "d5"));
    }

    #[test]
    fn test_off_board_target() {
        assert!(!legal(INITIAL_POSITION, "a2", "a9"));
        assert!(!legal(INITIAL_POSITION, "a2", "i2"));
        assert!(!legal(INITIAL_POSITION, "a2", "a0"));
    }

    #[test]
    fn test_capture() {
        // The white rook takes the black knight on a5.
        assert!(legal("7k/8/8/n7/8/8/R7/K7 w", "a2", "a5"));
        assert!(!legal("7k/8/8/N7/8/8/R7/K7 w", "a2", "a5"));
    }

    #[test]
    fn test_move_exposing_own_king_is_rejected() {
        let fen = "4r3/8/8/7k/8/8/4R3/4K3 w";
        assert!(!legal(fen, "e2", "d2"));
        assert!(legal(fen, "e2", "e3"));
        assert!(legal(fen, "e2", "e8"));
    }

    #[test]
    fn test_move_attacking_enemy_king_is_rejected() {
        let fen = "4r3/8/8/7k/8/8/4R3/4K3 w";
        assert!(!legal(fen, "e2", "h2"));
        assert!(!legal(fen, "e2", "e5"));
    }

    #[test]
    fn test_king_cannot_step_next_to_king() {
        assert!(!legal("8/8/8/8/8/8/8/K1k5 w", "a1", "b1"));
        assert!(!legal("8/8/8/8/8/8/8/K1k5 w", "a1", "b2"));
        assert!(legal("8/8/8/8/8/8/8/K1k5 w", "a1", "a2"));
    }

    #[test]
    fn test_king_null_move_rejected() {
        assert!(!legal("8/8/8/8/8/8/8/K6k w", "a1", "a1"));
    }

    #[test]
    fn test_would_expose_check() {
        let (board, rules) = setup("4r3/8/8/7k/8/8/4R3/4K3 w");
        assert!(rules.would_expose_check(&board, field("e2"), field("d2")).unwrap());
        assert!(!rules.would_expose_check(&board, field("e2"), field("e4")).unwrap());
    }

    #[test]
    fn test_no_moves_after_game_end() {
        let (mut board, mut rules) = setup("8/k7/8/8/8/8/8/4K3 b");
        assert!(rules.apply_move(&mut board, field("a7"), field("a8")).unwrap());
        assert_eq!(rules.state(), GameState::BlackWon);
        assert!(rules.generate_legal_moves(&board).unwrap().is_empty());
    }

    #[test]
    fn test_hypothetical_reach_ignores_turn() {
        let (board, rules) = setup("K7/8/8/8/8/8/8/6rk w");
        assert!(rules
            .is_legal_move(&board, field("g1"), field("a1"), Color::White, true)
            .unwrap());
        assert!(!rules
            .is_legal_move(&board, field("g1"), field("a1"), Color::White, false)
            .unwrap());
        assert_eq!(board.piece_at(field("g1")), Some(Piece::new(Color::Black, PieceType::Rook)));
    }
}
