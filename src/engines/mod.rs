use crate::chess_board::Move;
use crate::game::GameSession;
use crate::ChessError;

pub mod random_mover;

pub trait ChessEngine {
    fn name(&self) -> &str;
    /// Picks a move for the side to move, or `None` if it has none.
    fn select_move(&mut self, session: &GameSession) -> Result<Option<Move>, ChessError>;
}

/// Lets `engine` play both sides until the game ends, the side to move is stuck,
/// or `max_plies` moves were made. Returns the moves played.
pub fn play_game<E: ChessEngine>(
    session: &mut GameSession,
    engine: &mut E,
    max_plies: usize,
) -> Result<Vec<Move>, ChessError> {
    let mut played = Vec::new();
    while played.len() < max_plies && !session.is_over() {
        let mv = match engine.select_move(session)? {
            Some(mv) => mv,
            None => break,
        };
        if !session.try_move(mv)? {
            break;
        }
        played.push(mv);
    }
    Ok(played)
}
