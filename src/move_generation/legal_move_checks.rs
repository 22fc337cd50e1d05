//! Attack and check detection.
//!
//! `is_square_attacked` is pattern-based rather than move-list-based: pawn
//! diagonals and knight/king offsets are probed directly, and slider rays are
//! walked outward from the target until the first occupied square. The first
//! occupant is counted whatever its color, so the same primitive answers both
//! "is this king in check" and "is this piece defended by its own side".

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::king_moves::KING_OFFSETS;
use crate::move_generation::knight_moves::KNIGHT_OFFSETS;
use crate::move_generation::sliding::{DIAGONALS, ORTHOGONALS};

pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .occupied_squares()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(square, _)| square)
}

/// True iff any piece of `attacker_color` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, attacker_color: Color) -> bool {
    // A pawn on `p` attacks `p + (direction, ±1)`, so look one row against
    // the attacker's direction of travel.
    let pawn_row_delta = -attacker_color.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(square) = target.offset(pawn_row_delta, d_col) {
            if holds(board, square, attacker_color, PieceKind::Pawn) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(square) = target.offset(d_row, d_col) {
            if holds(board, square, attacker_color, PieceKind::Knight) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KING_OFFSETS {
        if let Some(square) = target.offset(d_row, d_col) {
            if holds(board, square, attacker_color, PieceKind::King) {
                return true;
            }
        }
    }

    ray_hits(board, target, attacker_color, &ORTHOGONALS, PieceKind::Rook)
        || ray_hits(board, target, attacker_color, &DIAGONALS, PieceKind::Bishop)
}

/// True iff `color`'s king is attacked. A missing king reads as in check so
/// the legality filter can never walk past a king capture.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(square) => is_square_attacked(board, square, color.opposite()),
        None => true,
    }
}

#[inline]
fn holds(board: &Board, square: Square, color: Color, kind: PieceKind) -> bool {
    board.piece_at(square) == Some(Piece::new(kind, color))
}

fn ray_hits(
    board: &Board,
    target: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = target;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn rook_attacks_along_open_lines_only() {
        let mut board = Board::empty();
        board.set_piece(Square::new(0, 0), Piece::new(PieceKind::Rook, Color::Black));

        assert!(is_square_attacked(&board, Square::new(0, 7), Color::Black));
        assert!(is_square_attacked(&board, Square::new(7, 0), Color::Black));
        assert!(!is_square_attacked(&board, Square::new(1, 1), Color::Black));

        board.set_piece(Square::new(0, 3), Piece::new(PieceKind::Pawn, Color::White));
        assert!(!is_square_attacked(&board, Square::new(0, 7), Color::Black));
        assert!(is_square_attacked(&board, Square::new(0, 3), Color::Black));
    }

    #[test]
    fn pawn_attacks_are_diagonal_not_forward() {
        let mut board = Board::empty();
        board.set_piece(Square::new(4, 4), Piece::new(PieceKind::Pawn, Color::White));

        assert!(is_square_attacked(&board, Square::new(3, 3), Color::White));
        assert!(is_square_attacked(&board, Square::new(3, 5), Color::White));
        assert!(!is_square_attacked(&board, Square::new(3, 4), Color::White));
    }

    #[test]
    fn attack_test_sees_defended_friendly_pieces() {
        let mut board = Board::empty();
        board.set_piece(
            Square::new(4, 4),
            Piece::new(PieceKind::Knight, Color::White),
        );
        board.set_piece(Square::new(6, 3), Piece::new(PieceKind::Pawn, Color::White));

        // The knight on e4 guards the pawn's square even though the square is
        // occupied by its own side.
        assert!(is_square_attacked(&board, Square::new(6, 3), Color::White));
    }

    #[test]
    fn check_detection_finds_the_king() {
        let mut board = Board::empty();
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        assert!(!is_king_in_check(&board, Color::White));

        board.set_piece(Square::new(3, 4), Piece::new(PieceKind::Rook, Color::Black));
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_reads_as_in_check() {
        let board = Board::empty();
        assert!(is_king_in_check(&board, Color::White));
    }
}
