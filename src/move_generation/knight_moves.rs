//! Pseudo-legal knight moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.color_at(target) != Some(color) {
            out.push(Move::new(from, target));
        }
    }
}
