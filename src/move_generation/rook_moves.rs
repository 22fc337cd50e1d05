//! Pseudo-legal rook moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::move_generation::sliding::{slide_moves, ORTHOGONALS};

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_moves(board, from, color, &ORTHOGONALS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn open_board_rook_reaches_fourteen_squares() {
        let mut board = Board::empty();
        board.set_piece(Square::new(3, 3), Piece::new(PieceKind::Rook, Color::White));
        let mut moves = Vec::new();
        generate_rook_moves(&board, Square::new(3, 3), Color::White, &mut moves);
        assert_eq!(moves.len(), 14);
    }
}
