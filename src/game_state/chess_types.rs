//! Core value types shared across the engine.
//!
//! The board itself lives in `board.rs`; this module holds the small copy
//! types (colors, piece kinds, squares, moves, castling flags) that flow
//! through move generation, search, and the driver.

/// Side to move or piece ownership. Empty squares are `Option<Piece>` being
/// `None`, so no third color variant is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row advance direction for this side's pawns (White moves toward row 0).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind. The `index()` values feed the Zobrist tables and must stay
/// stable in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion targets in the order the generator emits them.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN-style ASCII symbol, uppercase for White.
    pub const fn symbol(self) -> char {
        let lower = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        }
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 is White's back rank;
/// columns run a..h as 0..7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Linear index `row * 8 + col`, used for the grid and the hash tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Offset by a (row, col) delta, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

/// A move in from/to/promotion form. Castling is a king move of two columns;
/// en passant is a pawn diagonal onto the board's current EP target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// King/rook movement flags from which castling rights are derived.
///
/// A flag is latched once the piece leaves (or is captured on) its home
/// square and is only ever cleared by `unmake_move` restoring a saved copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingState {
    pub white_king_moved: bool,
    pub white_rook_a_moved: bool,
    pub white_rook_h_moved: bool,
    pub black_king_moved: bool,
    pub black_rook_a_moved: bool,
    pub black_rook_h_moved: bool,
}

impl CastlingState {
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        match color {
            Color::White => !self.white_king_moved && !self.white_rook_h_moved,
            Color::Black => !self.black_king_moved && !self.black_rook_h_moved,
        }
    }

    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        match color {
            Color::White => !self.white_king_moved && !self.white_rook_a_moved,
            Color::Black => !self.black_king_moved && !self.black_rook_a_moved,
        }
    }

    /// 4-bit rights mask in {WK, WQ, BK, BQ} order, indexing the Zobrist
    /// castling keys.
    #[inline]
    pub const fn rights_mask(self) -> u8 {
        ((self.can_castle_kingside(Color::White) as u8) << 3)
            | ((self.can_castle_queenside(Color::White) as u8) << 2)
            | ((self.can_castle_kingside(Color::Black) as u8) << 1)
            | (self.can_castle_queenside(Color::Black) as u8)
    }
}
