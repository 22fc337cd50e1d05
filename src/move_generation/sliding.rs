//! Shared ray walker for the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};

pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each direction until the edge or the first occupied square; an enemy
/// occupant is included as a capture, an own piece blocks.
pub fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.color_at(next) {
                None => {
                    out.push(Move::new(from, next));
                    current = next;
                }
                Some(occupant) => {
                    if occupant != color {
                        out.push(Move::new(from, next));
                    }
                    break;
                }
            }
        }
    }
}
