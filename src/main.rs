use std::io::{stdin, stdout};
use std::time::Instant;

use chessvar::chess_board::fen::INITIAL_POSITION;
use chessvar::chess_board::{Color, Move};
use chessvar::engines::random_mover::RandomMover;
use chessvar::engines::{play_game, ChessEngine};
use chessvar::perft::perft_divide;
use chessvar::ui::{outcome_string, run_game, Opponent, RULES};
use chessvar::GameSession;

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn main() {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ).global(true))
        .subcommand(
            Command::new("play")
                .about("Play a game in the terminal")
                .arg(arg!(-f --fen <FEN> "Start position").default_value(INITIAL_POSITION))
                .arg(
                    arg!(-c --computer <COLOR> "Let the computer play this color")
                        .value_parser(["white", "black"]),
                )
                .arg(
                    arg!(-s --seed <SEED> "Seed for the computer player")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("rules").about("Print the rules"))
        .subcommand(
            Command::new("perft")
                .about("Count legal move sequences")
                .arg(arg!(-f --fen <FEN> "Board position").default_value(INITIAL_POSITION))
                .arg(
                    arg!(-x --depth <d> "depth")
                        .default_value("3")
                        .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(-m --moves <moves> "List of moves")
                        .num_args(1..)
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Play a seeded random game")
                .arg(arg!(-f --fen <FEN> "Start position").default_value(INITIAL_POSITION))
                .arg(
                    arg!(-s --seed <SEED> "Random seed")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(-p --plies <PLIES> "Maximum number of plies")
                        .default_value("200")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .get_matches();

    let debug = matches.get_flag("debug");

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => play(arg_matches, debug),
        Some(("rules", _)) => {
            println!("{}", RULES);
            Ok(())
        }
        Some(("perft", arg_matches)) => perft(arg_matches, debug),
        Some(("random", arg_matches)) => random(arg_matches, debug),
        None => play_session(GameSession::new(), None, debug),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn session_from_args(arg_matches: &ArgMatches) -> Result<GameSession, String> {
    let fen = arg_matches.get_one::<String>("fen").map(String::as_str).unwrap_or(INITIAL_POSITION);
    GameSession::from_fen(fen).map_err(|e| e.to_string())
}

fn seed_from_args(arg_matches: &ArgMatches) -> u64 {
    arg_matches.get_one::<u64>("seed").copied().unwrap_or_default()
}

fn play(arg_matches: &ArgMatches, debug: bool) -> Result<(), String> {
    let session = session_from_args(arg_matches)?;
    let computer = arg_matches.get_one::<String>("computer").map(|c| match c.as_str() {
        "white" => Color::White,
        _ => Color::Black,
    });
    play_session(session, computer.map(|c| (c, seed_from_args(arg_matches))), debug)
}

fn play_session(mut session: GameSession, computer: Option<(Color, u64)>, debug: bool) -> Result<(), String> {
    println!("{}", RULES);
    let mut engine = computer.map(|(color, seed)| (color, RandomMover::new(seed)));
    let opponent: Option<Opponent> = match engine.as_mut() {
        Some((color, engine)) => {
            let engine: &mut dyn ChessEngine = engine;
            Some((*color, engine))
        }
        None => None,
    };
    run_game(&mut session, stdin().lock(), &mut stdout(), opponent, debug).map_err(|e| e.to_string())
}

#[derive(Tabled)]
struct PerftRow {
    #[tabled(rename = "move")]
    mv: String,
    nodes: u64,
}

fn perft(arg_matches: &ArgMatches, debug: bool) -> Result<(), String> {
    let mut session = session_from_args(arg_matches)?;
    let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
    let moves = arg_matches
        .get_many::<String>("moves")
        .unwrap_or_default()
        .filter(|&v| !v.is_empty())
        .collect::<Vec<_>>();
    println!("Perft test for {} moves {:?} with depth {}", session.to_fen(), moves, depth);

    for m in moves {
        let mv = Move::from_algebraic(m).map_err(|e| e.to_string())?;
        if !session.try_move(mv).map_err(|e| e.to_string())? {
            return Err(format!("Invalid move: {}", m));
        }
    }

    let start_time = Instant::now();
    let result_moves = perft_divide(&session, depth).map_err(|e| e.to_string())?;
    if debug {
        eprintln!("perft finished in {:.3}s", start_time.elapsed().as_secs_f32());
    }

    let num_nodes: u64 = result_moves.iter().map(|(_, c)| c).sum();
    let rows = result_moves
        .into_iter()
        .map(|(mv, nodes)| PerftRow {
            mv: mv.as_algebraic(),
            nodes,
        })
        .collect::<Vec<_>>();
    println!("{}", Table::new(rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
    Ok(())
}

#[derive(Tabled)]
struct PlyRow {
    ply: usize,
    color: String,
    #[tabled(rename = "move")]
    mv: String,
}

fn random(arg_matches: &ArgMatches, debug: bool) -> Result<(), String> {
    let mut session = session_from_args(arg_matches)?;
    let seed = seed_from_args(arg_matches);
    let max_plies = arg_matches.get_one::<usize>("plies").copied().unwrap_or(200);
    let first_color = session.current_turn();

    let mut engine = RandomMover::new(seed);
    if debug {
        eprintln!("{} with seed {} for at most {} plies", engine.name(), seed, max_plies);
    }
    let played = play_game(&mut session, &mut engine, max_plies).map_err(|e| e.to_string())?;

    let rows = played
        .iter()
        .enumerate()
        .map(|(i, mv)| PlyRow {
            ply: i + 1,
            color: (if i % 2 == 0 { first_color } else { first_color.opposite() }).to_string(),
            mv: mv.as_algebraic(),
        })
        .collect::<Vec<_>>();
    println!("{}", Table::new(rows).with(Style::modern()));
    println!("{}", session.render_to_string());
    match outcome_string(session.current_state()) {
        Some(outcome) => println!("{}", outcome),
        None => println!("{} after {} plies: {}", session.current_state(), played.len(), session.to_fen()),
    }
    Ok(())
}
