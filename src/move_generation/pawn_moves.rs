//! Pseudo-legal pawn moves: single and double pushes, diagonal captures,
//! en passant, and the four-way promotion fan on the last rank.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, PieceKind, Square};

pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let direction = color.pawn_direction();
    let promotion_row = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    let start_row = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    if let Some(one_step) = from.offset(direction, 0) {
        if board.piece_at(one_step).is_none() {
            push_advance(from, one_step, promotion_row, out);

            if from.row == start_row {
                if let Some(two_steps) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_steps).is_none() {
                        out.push(Move::new(from, two_steps));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        match board.color_at(target) {
            Some(occupant) if occupant != color => push_advance(from, target, promotion_row, out),
            None if board.en_passant == Some(target) => out.push(Move::new(from, target)),
            _ => {}
        }
    }
}

fn push_advance(from: Square, to: Square, promotion_row: u8, out: &mut Vec<Move>) {
    if to.row == promotion_row {
        for promotion in PieceKind::PROMOTIONS {
            out.push(Move::promoting(from, to, promotion));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
