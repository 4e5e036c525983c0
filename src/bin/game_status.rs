use std::env;
use std::process::ExitCode;

use chess_rules::board::Board;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    for notation in args.iter().skip(1) {
        let applied = board
            .parse_move(notation)
            .map_err(|e| e.to_string())
            .and_then(|mv| board.play(mv).map_err(|e| e.to_string()));
        if let Err(err) = applied {
            eprintln!("{err}");
            break;
        }
    }

    let side = board.current_turn();
    let legal_moves = board.all_legal_moves(side);
    let status = board.status();
    println!("side_to_move: {}", side.to_string().to_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {status}");
    if let Some(message) = status.message() {
        println!("{message}");
    }
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
