use crate::chess_board::Color;
use crate::engines::ChessEngine;
use crate::game::GameSession;
use crate::rules::GameState;
use std::io::{self, BufRead, Write};

pub const RULES: &str = "
This game is a variant on chess. Kings, knights, bishops and rooks move and capture like they do in chess.
The objective of the game is to put your king on the highest rank. If Black makes it there first, Black wins.
If White makes it there first, Black gets one move in which they can draw the game by arriving too.
Unlike chess, no move that would result in a check being given to either king is allowed. Thus, no checkmates.
";

pub fn turn_string(session: &GameSession) -> String {
    format!("{} to move", session.current_turn())
}

pub fn outcome_string(state: GameState) -> Option<&'static str> {
    match state {
        GameState::InProgress => None,
        GameState::WhiteWon => Some("White won. Thanks for playing."),
        GameState::BlackWon => Some("Black won. Thanks for playing."),
        GameState::Draw => Some("Draw. Thanks for playing."),
    }
}

/// Optional computer opponent: the color it plays and the engine choosing its moves.
pub type Opponent<'a> = (Color, &'a mut dyn ChessEngine);

/// Terminal game loop. Reads a source and a target square per move and asks
/// again until the move is accepted. Stops at the end of the game or of input.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
    mut opponent: Option<Opponent<'_>>,
    debug: bool,
) -> io::Result<()> {
    let mut lines = input.lines();
    let mut message = turn_string(session);

    while !session.is_over() {
        write!(output, "\n{}{}\n", session.render_to_string(), message)?;

        if session.legal_moves().map_err(invalid_data)?.is_empty() {
            writeln!(output, "{} has no legal moves.", session.current_turn())?;
            return Ok(());
        }

        if let Some((color, engine)) = opponent.as_mut() {
            if *color == session.current_turn() {
                match engine.select_move(session).map_err(invalid_data)? {
                    Some(mv) if session.try_move(mv).map_err(invalid_data)? => {
                        message = format!("{} played {}. {}", engine.name(), mv, turn_string(session));
                    }
                    _ => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("{} found no legal move in {}", engine.name(), session.to_fen()),
                        ));
                    }
                }
                continue;
            }
        }

        let Some(source) = prompt(&mut lines, output, "Which piece? ")? else {
            return Ok(());
        };
        let Some(target) = prompt(&mut lines, output, "To where? ")? else {
            return Ok(());
        };

        if session.attempt_move(&source, &target) {
            message = turn_string(session);
        } else {
            if debug {
                eprintln!("rejected {} -> {} in {}", source, target, session.to_fen());
            }
            message = format!("{}. Move was invalid, try again.", turn_string(session));
        }

        if debug && session.grace_turn_pending() && !session.is_over() {
            eprintln!("White king on the goal rank, Black has one reply");
        }
    }

    write!(output, "\n{}", session.render_to_string())?;
    if let Some(outcome) = outcome_string(session.current_state()) {
        writeln!(output, "{}", outcome)?;
    }
    Ok(())
}

fn prompt<B: BufRead, W: Write>(
    lines: &mut io::Lines<B>,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn invalid_data(e: crate::ChessError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}
