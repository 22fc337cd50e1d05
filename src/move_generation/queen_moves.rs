//! Pseudo-legal queen moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::move_generation::sliding::{slide_moves, DIAGONALS, ORTHOGONALS};

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_moves(board, from, color, &ORTHOGONALS, out);
    slide_moves(board, from, color, &DIAGONALS, out);
}
