//! Zobrist hashing for position identity and transposition-table keys.
//!
//! The key tables are generated from a fixed seed so hashes are identical
//! across runs and across the parallel root workers, which share nothing but
//! the transposition table.

use std::sync::OnceLock;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0xC3A5_C85C_97CB_3127;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for square in piece {
                *square = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Key for a `(color, piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][piece.index()][square.index()]
}

/// Key for a castling-rights mask in {WK, WQ, BK, BQ} bit order.
#[inline]
pub fn castling_key(rights_mask: u8) -> u64 {
    tables().castling[(rights_mask & 0x0F) as usize]
}

/// Key for an en-passant target on the given file.
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[(file & 0x07) as usize]
}

/// Side-to-move toggle key (xor in when Black is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Full from-scratch position key. `make_move` maintains the same value
/// incrementally; this recompute is the authority the incremental path is
/// tested against.
pub fn compute_zobrist_key(board: &Board, side_to_move: Color) -> u64 {
    let mut key = 0u64;

    for (square, piece) in board.occupied_squares() {
        key ^= piece_square_key(piece.color, piece.kind, square);
    }

    if side_to_move == Color::Black {
        key ^= side_to_move_key();
    }

    key ^= castling_key(board.castling.rights_mask());

    if let Some(ep) = board.en_passant {
        key ^= en_passant_file_key(ep.col);
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn bare_kings() -> Board {
        let mut board = Board::empty();
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        board
    }

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = Board::new_game();
        let b = Board::new_game();
        assert_eq!(a.zobrist_key, b.zobrist_key);
        assert_ne!(a.zobrist_key, 0);
    }

    #[test]
    fn side_to_move_changes_the_key() {
        let board = bare_kings();
        assert_ne!(
            compute_zobrist_key(&board, Color::White),
            compute_zobrist_key(&board, Color::Black)
        );
    }

    #[test]
    fn castling_rights_change_the_key() {
        let mut board = bare_kings();
        let with_rights = compute_zobrist_key(&board, Color::White);
        board.castling.white_king_moved = true;
        let without_rights = compute_zobrist_key(&board, Color::White);
        assert_ne!(with_rights, without_rights);
    }

    #[test]
    fn en_passant_file_changes_the_key() {
        let mut board = bare_kings();
        let no_ep = compute_zobrist_key(&board, Color::White);
        board.en_passant = Some(Square::new(2, 3));
        let ep = compute_zobrist_key(&board, Color::White);
        assert_ne!(no_ep, ep);
    }

    #[test]
    fn moving_a_piece_moves_its_key_contribution() {
        let mut board = bare_kings();
        board.set_piece(Square::new(6, 4), Piece::new(PieceKind::Pawn, Color::White));
        let before = compute_zobrist_key(&board, Color::White);

        board.clear_square(Square::new(6, 4));
        board.set_piece(Square::new(5, 4), Piece::new(PieceKind::Pawn, Color::White));
        let after = compute_zobrist_key(&board, Color::White);

        assert_ne!(before, after);
        let expected = before
            ^ piece_square_key(Color::White, PieceKind::Pawn, Square::new(6, 4))
            ^ piece_square_key(Color::White, PieceKind::Pawn, Square::new(5, 4));
        assert_eq!(after, expected);
    }
}
