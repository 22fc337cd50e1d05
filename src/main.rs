//! Interactive terminal driver: human vs engine.

use std::io::{self, BufRead, Write};

use quince_chess::game_state::board::Board;
use quince_chess::game_state::chess_rules::{
    is_checkmate, is_insufficient_material, is_stalemate,
};
use quince_chess::game_state::chess_types::{Color, PieceKind};
use quince_chess::move_generation::legal_move_generator::play_move;
use quince_chess::search::iterative_deepening::{Engine, SearchConfig};
use quince_chess::utils::long_algebraic::{format_long_algebraic, parse_long_algebraic};
use quince_chess::utils::render_game_state::render_game_state;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let human = match choose_human_color(&mut input) {
        Some(color) => color,
        None => return,
    };

    let engine = Engine::new(SearchConfig::default());
    let mut board = Board::new_game();
    let mut current = Color::White;

    loop {
        print!("{}", render_game_state(&board));

        if is_checkmate(&mut board, current) {
            let winner = match current {
                Color::White => "Black",
                Color::Black => "White",
            };
            println!("{winner} wins by checkmate!");
            break;
        }
        if is_stalemate(&mut board, current) {
            println!("The game is a draw by stalemate.");
            break;
        }
        if is_insufficient_material(&board) {
            println!("The game is a draw by insufficient material.");
            break;
        }

        if current == human {
            if !human_turn(&mut input, &mut board, current) {
                break;
            }
        } else {
            println!("Engine is thinking...");
            match engine.find_best_move(&board, current) {
                Ok(outcome) => {
                    board.make_move(outcome.best_move);
                    clear_screen();
                    println!(
                        "Engine plays {} (eval {:+.2})",
                        format_long_algebraic(outcome.best_move),
                        outcome.score
                    );
                }
                Err(_) => {
                    println!("Engine has no moves.");
                    break;
                }
            }
        }

        current = current.opposite();
    }
}

fn choose_human_color(input: &mut impl BufRead) -> Option<Color> {
    loop {
        print!("Play as (w/b): ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line).ok()? == 0 {
            return None;
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "w" | "white" | "" => return Some(Color::White),
            "b" | "black" => return Some(Color::Black),
            "exit" => return None,
            _ => println!("Please answer w or b."),
        }
    }
}

/// One human turn. Returns false when the game loop should end.
fn human_turn(input: &mut impl BufRead, board: &mut Board, side: Color) -> bool {
    loop {
        print!("Your move (e.g. e2e4 or e7e8q): ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }
        let text = line.trim();
        if text == "exit" {
            return false;
        }

        let Ok(mut mv) = parse_long_algebraic(text) else {
            println!("Invalid or illegal move.");
            continue;
        };

        // A promoting move entered without a letter promotes to a queen.
        let promotion_row = match side {
            Color::White => 0,
            Color::Black => 7,
        };
        let moves_pawn_to_last_rank = mv.to.row == promotion_row
            && board
                .piece_at(mv.from)
                .is_some_and(|piece| piece.kind == PieceKind::Pawn);
        if moves_pawn_to_last_rank && mv.promotion.is_none() {
            mv.promotion = Some(PieceKind::Queen);
        }

        match play_move(board, side, mv) {
            Ok(_) => {
                clear_screen();
                return true;
            }
            Err(_) => println!("Invalid or illegal move."),
        }
    }
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}
