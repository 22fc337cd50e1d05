//! Central mutable position: 8x8 grid, castling flags, en-passant target,
//! incremental Zobrist key, and the make/unmake history stack.
//!
//! The board does not track the side to move; callers pass the side into
//! every operation and the hash carries the side-to-move key. `make_move`
//! maintains the hash incrementally; `unmake_move` restores the saved hash
//! verbatim from the undo record, so unmake can never accumulate XOR drift.

use crate::game_state::chess_types::{CastlingState, Color, Move, Piece, PieceKind, Square};
use crate::game_state::undo_state::UndoState;
use crate::search::zobrist;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: [Option<Piece>; 64],
    pub castling: CastlingState,
    pub en_passant: Option<Square>,
    pub zobrist_key: u64,
    history: Vec<UndoState>,
}

/// Undo token for a null move. Null moves bypass the regular history stack;
/// the caller holds the token across the reduced-depth probe.
#[derive(Debug, Clone, Copy)]
pub struct NullMoveUndo {
    prev_en_passant: Option<Square>,
    prev_zobrist_key: u64,
}

impl Board {
    /// Empty board with no history. The hash is zero until the caller places
    /// pieces and calls [`Board::refresh_zobrist`].
    pub fn empty() -> Self {
        Self {
            grid: [None; 64],
            castling: CastlingState::default(),
            en_passant: None,
            zobrist_key: 0,
            history: Vec::new(),
        }
    }

    /// Standard starting position, hash computed, White to move.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square::new(0, col as u8), Piece::new(kind, Color::Black));
            board.set_piece(Square::new(7, col as u8), Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            board.set_piece(Square::new(1, col), Piece::new(PieceKind::Pawn, Color::Black));
            board.set_piece(Square::new(6, col), Piece::new(PieceKind::Pawn, Color::White));
        }
        board.refresh_zobrist(Color::White);
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.grid[square.index()].map(|piece| piece.color)
    }

    /// Place a piece during position setup. Does not touch the hash; finish
    /// setup with [`Board::refresh_zobrist`].
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.grid[square.index()] = Some(piece);
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        self.grid[square.index()] = None;
    }

    /// Recompute the hash from scratch for the given side to move.
    pub fn refresh_zobrist(&mut self, side_to_move: Color) {
        self.zobrist_key = zobrist::compute_zobrist_key(self, side_to_move);
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// All occupied squares with their pieces, in index order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Apply a move. The move must come from the pseudo-legal generator for
    /// the side whose turn the hash currently encodes.
    pub fn make_move(&mut self, mv: Move) {
        let Some(piece) = self.piece_at(mv.from) else {
            debug_assert!(false, "make_move from an empty square");
            return;
        };
        let color = piece.color;
        let mut undo = UndoState {
            mv,
            captured: None,
            prev_en_passant: self.en_passant,
            prev_castling: self.castling,
            prev_zobrist_key: self.zobrist_key,
        };
        let mut hash = self.zobrist_key;

        // Any existing en-passant window closes now.
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_file_key(ep.col);
        }
        self.en_passant = None;

        if let Some(victim) = self.piece_at(mv.to) {
            undo.captured = Some((mv.to, victim));
            hash ^= zobrist::piece_square_key(victim.color, victim.kind, mv.to);
            self.grid[mv.to.index()] = None;
        } else if piece.kind == PieceKind::Pawn && undo.prev_en_passant == Some(mv.to) {
            // En passant: the victim pawn sits beside the destination.
            let victim_row = (mv.to.row as i8 - color.pawn_direction()) as u8;
            let victim_square = Square::new(victim_row, mv.to.col);
            if let Some(victim) = self.piece_at(victim_square) {
                undo.captured = Some((victim_square, victim));
                hash ^= zobrist::piece_square_key(victim.color, victim.kind, victim_square);
                self.grid[victim_square.index()] = None;
            }
        }

        let old_rights = self.castling.rights_mask();
        if piece.kind == PieceKind::King {
            match color {
                Color::White => self.castling.white_king_moved = true,
                Color::Black => self.castling.black_king_moved = true,
            }
        }
        self.latch_rook_square(mv.from);
        self.latch_rook_square(mv.to);

        hash ^= zobrist::piece_square_key(color, piece.kind, mv.from);
        hash ^= zobrist::piece_square_key(color, piece.kind, mv.to);
        self.grid[mv.from.index()] = None;
        self.grid[mv.to.index()] = Some(piece);

        if piece.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
            let target = Square::new((mv.from.row + mv.to.row) / 2, mv.from.col);
            self.en_passant = Some(target);
            hash ^= zobrist::en_passant_file_key(target.col);
        }

        if piece.kind == PieceKind::King && mv.from.col.abs_diff(mv.to.col) == 2 {
            let row = mv.from.row;
            let (rook_from, rook_to) = if mv.to.col == 6 {
                (Square::new(row, 7), Square::new(row, 5))
            } else {
                (Square::new(row, 0), Square::new(row, 3))
            };
            if let Some(rook) = self.piece_at(rook_from) {
                self.grid[rook_from.index()] = None;
                self.grid[rook_to.index()] = Some(rook);
                hash ^= zobrist::piece_square_key(color, PieceKind::Rook, rook_from);
                hash ^= zobrist::piece_square_key(color, PieceKind::Rook, rook_to);
            }
        }

        if let Some(promotion) = mv.promotion {
            hash ^= zobrist::piece_square_key(color, PieceKind::Pawn, mv.to);
            self.grid[mv.to.index()] = Some(Piece::new(promotion, color));
            hash ^= zobrist::piece_square_key(color, promotion, mv.to);
        }

        let new_rights = self.castling.rights_mask();
        if new_rights != old_rights {
            hash ^= zobrist::castling_key(old_rights);
            hash ^= zobrist::castling_key(new_rights);
        }

        self.zobrist_key = hash ^ zobrist::side_to_move_key();
        self.history.push(undo);
    }

    /// Reverse the most recent move. A no-op when the history is empty.
    pub fn unmake_move(&mut self) {
        let Some(undo) = self.history.pop() else {
            return;
        };
        let mv = undo.mv;

        self.zobrist_key = undo.prev_zobrist_key;
        self.en_passant = undo.prev_en_passant;
        self.castling = undo.prev_castling;

        if let Some(piece) = self.piece_at(mv.to) {
            let restored = if mv.promotion.is_some() {
                Piece::new(PieceKind::Pawn, piece.color)
            } else {
                piece
            };
            self.grid[mv.from.index()] = Some(restored);
        }
        self.grid[mv.to.index()] = None;

        if let Some(piece) = self.piece_at(mv.from) {
            if piece.kind == PieceKind::King && mv.from.col.abs_diff(mv.to.col) == 2 {
                let row = mv.from.row;
                let (rook_home, rook_transit) = if mv.to.col == 6 {
                    (Square::new(row, 7), Square::new(row, 5))
                } else {
                    (Square::new(row, 0), Square::new(row, 3))
                };
                let rook = self.grid[rook_transit.index()].take();
                self.grid[rook_home.index()] = rook;
            }
        }

        if let Some((square, victim)) = undo.captured {
            self.grid[square.index()] = Some(victim);
        }
    }

    /// "Pass" for null-move pruning: flips the side key and closes any
    /// en-passant window. The grid and history are untouched.
    pub fn make_null_move(&mut self) -> NullMoveUndo {
        let undo = NullMoveUndo {
            prev_en_passant: self.en_passant,
            prev_zobrist_key: self.zobrist_key,
        };
        if let Some(ep) = self.en_passant {
            self.zobrist_key ^= zobrist::en_passant_file_key(ep.col);
        }
        self.en_passant = None;
        self.zobrist_key ^= zobrist::side_to_move_key();
        undo
    }

    pub fn unmake_null_move(&mut self, undo: NullMoveUndo) {
        self.en_passant = undo.prev_en_passant;
        self.zobrist_key = undo.prev_zobrist_key;
    }

    #[inline]
    fn latch_rook_square(&mut self, square: Square) {
        match (square.row, square.col) {
            (7, 0) => self.castling.white_rook_a_moved = true,
            (7, 7) => self.castling.white_rook_h_moved = true,
            (0, 0) => self.castling.black_rook_a_moved = true,
            (0, 7) => self.castling.black_rook_h_moved = true,
            _ => {}
        }
    }
}
