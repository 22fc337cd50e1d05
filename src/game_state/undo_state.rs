use crate::game_state::chess_types::{CastlingState, Move, Piece, Square};

/// Single undo record for `make_move` / `unmake_move`.
///
/// The captured piece is stored with the square it stood on, which for an
/// en-passant capture is not the move's destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub captured: Option<(Square, Piece)>,
    pub prev_en_passant: Option<Square>,
    pub prev_castling: CastlingState,
    pub prev_zobrist_key: u64,
}
