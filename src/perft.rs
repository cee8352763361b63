use crate::chess_board::Move;
use crate::game::GameSession;
use crate::ChessError;

/// Number of leaf positions `depth` plies below `session`. Finished games have no children.
pub fn perft(session: &GameSession, depth: u8) -> Result<u64, ChessError> {
    let mut node_count = 0u64;

    if depth == 0 {
        return Ok(1u64);
    }

    for mv in session.legal_moves()? {
        let mut new_session = session.clone();
        new_session.try_move(mv)?;
        node_count += perft(&new_session, depth - 1)?;
    }
    Ok(node_count)
}

/// Perft split by first move, sorted by move.
pub fn perft_divide(session: &GameSession, depth: u8) -> Result<Vec<(Move, u64)>, ChessError> {
    let mut result_moves = Vec::new();
    for mv in session.legal_moves()? {
        let mut new_session = session.clone();
        new_session.try_move(mv)?;
        result_moves.push((mv, perft(&new_session, depth.saturating_sub(1))?));
    }
    Ok(result_moves)
}
