//! Static position evaluation in pawn units.
//!
//! Every component is computed white-minus-black and the sum is negated for
//! a Black-perspective consumer, so `evaluate(board, White)` is always the
//! exact negation of `evaluate(board, Black)`. The evaluation reads the
//! board only; it never makes moves and has no search side effects.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Piece, PieceKind, Square};
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;

pub const MATE_SCORE: f64 = 10_000.0;

const PAWN_VALUE: f64 = 1.0;
const KNIGHT_VALUE: f64 = 3.2;
const BISHOP_VALUE: f64 = 3.3;
const ROOK_VALUE: f64 = 5.0;
const QUEEN_VALUE: f64 = 9.0;
const KING_VALUE: f64 = 200.0;

const DOUBLED_PAWN_PENALTY: f64 = -0.35;
const ISOLATED_PAWN_PENALTY: f64 = -0.20;
const PASSED_PAWN_BONUS: [f64; 8] = [0.0, 0.2, 0.4, 0.75, 1.25, 2.0, 3.0, 4.5];

const KNIGHT_MOBILITY_WEIGHT: f64 = 0.04;
const BISHOP_MOBILITY_WEIGHT: f64 = 0.04;
const ROOK_MOBILITY_WEIGHT: f64 = 0.02;
const QUEEN_MOBILITY_WEIGHT: f64 = 0.01;

const PAWN_SHIELD_BONUS: f64 = 0.15;
const OPEN_KING_FILE_PENALTY: f64 = -0.20;

const BISHOP_PAIR_BONUS: f64 = 0.40;
const KNIGHT_PAIR_BONUS: f64 = 0.15;

const CENTER_OCCUPANCY_BONUS: f64 = 0.10;
const CENTER_ATTACK_BONUS: f64 = 0.05;
const COORDINATION_BONUS: f64 = 0.05;
const DEVELOPMENT_BONUS: f64 = 0.10;

/// Summed piece-phase weights of the full starting material.
const TOTAL_PHASE: f64 = 40.0;

const CENTER_SQUARES: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

// Piece-square tables, from White's point of view (row 0 is Black's back
// rank); Black mirrors by row. The queen has no table.
const PAWN_TABLE: [[f64; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
    [0.1, 0.1, 0.2, 0.3, 0.3, 0.2, 0.1, 0.1],
    [0.05, 0.05, 0.1, 0.25, 0.25, 0.1, 0.05, 0.05],
    [0.0, 0.0, 0.0, 0.2, 0.2, 0.0, 0.0, 0.0],
    [0.05, -0.05, -0.1, 0.0, 0.0, -0.1, -0.05, 0.05],
    [0.05, 0.1, 0.1, -0.2, -0.2, 0.1, 0.1, 0.05],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

const KNIGHT_TABLE: [[f64; 8]; 8] = [
    [-0.5, -0.4, -0.3, -0.3, -0.3, -0.3, -0.4, -0.5],
    [-0.4, -0.2, 0.0, 0.0, 0.0, 0.0, -0.2, -0.4],
    [-0.3, 0.0, 0.1, 0.15, 0.15, 0.1, 0.0, -0.3],
    [-0.3, 0.05, 0.15, 0.2, 0.2, 0.15, 0.05, -0.3],
    [-0.3, 0.0, 0.15, 0.2, 0.2, 0.15, 0.0, -0.3],
    [-0.3, 0.05, 0.1, 0.15, 0.15, 0.1, 0.05, -0.3],
    [-0.4, -0.2, 0.0, 0.05, 0.05, 0.0, -0.2, -0.4],
    [-0.5, -0.4, -0.3, -0.3, -0.3, -0.3, -0.4, -0.5],
];

const BISHOP_TABLE: [[f64; 8]; 8] = [
    [-0.2, -0.1, -0.1, -0.1, -0.1, -0.1, -0.1, -0.2],
    [-0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1],
    [-0.1, 0.0, 0.05, 0.1, 0.1, 0.05, 0.0, -0.1],
    [-0.1, 0.05, 0.05, 0.1, 0.1, 0.05, 0.05, -0.1],
    [-0.1, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, -0.1],
    [-0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, -0.1],
    [-0.1, 0.05, 0.0, 0.0, 0.0, 0.0, 0.05, -0.1],
    [-0.2, -0.1, -0.1, -0.1, -0.1, -0.1, -0.1, -0.2],
];

const ROOK_TABLE: [[f64; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.05, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [0.0, 0.0, 0.0, 0.05, 0.05, 0.0, 0.0, 0.0],
];

const KING_TABLE_MIDGAME: [[f64; 8]; 8] = [
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.2, -0.3, -0.3, -0.4, -0.4, -0.3, -0.3, -0.2],
    [-0.1, -0.2, -0.2, -0.2, -0.2, -0.2, -0.2, -0.1],
    [0.2, 0.2, 0.0, 0.0, 0.0, 0.0, 0.2, 0.2],
    [0.2, 0.3, 0.1, 0.0, 0.0, 0.1, 0.3, 0.2],
];

const KING_TABLE_ENDGAME: [[f64; 8]; 8] = [
    [-0.5, -0.4, -0.3, -0.2, -0.2, -0.3, -0.4, -0.5],
    [-0.3, -0.2, -0.1, 0.0, 0.0, -0.1, -0.2, -0.3],
    [-0.3, -0.1, 0.2, 0.3, 0.3, 0.2, -0.1, -0.3],
    [-0.3, -0.1, 0.3, 0.4, 0.4, 0.3, -0.1, -0.3],
    [-0.3, -0.1, 0.3, 0.4, 0.4, 0.3, -0.1, -0.3],
    [-0.3, -0.1, 0.2, 0.3, 0.3, 0.2, -0.1, -0.3],
    [-0.3, -0.3, 0.0, 0.0, 0.0, 0.0, -0.3, -0.3],
    [-0.5, -0.3, -0.3, -0.3, -0.3, -0.3, -0.3, -0.5],
];

/// Evaluation from `perspective`'s point of view.
pub fn evaluate(board: &Board, perspective: Color) -> f64 {
    match perspective {
        Color::White => evaluate_white(board),
        Color::Black => -evaluate_white(board),
    }
}

/// White-perspective evaluation; positive favors White.
pub fn evaluate_white(board: &Board) -> f64 {
    let phase = game_phase(board);

    material_and_pst_white_minus_black(board, phase)
        + pawn_structure_white_minus_black(board)
        + mobility_white_minus_black(board)
        + king_safety_white_minus_black(board) * phase
        + minor_pairs_white_minus_black(board, phase)
        + center_control_white_minus_black(board) * phase
        + coordination_white_minus_black(board)
        + development_white_minus_black(board) * phase
}

/// Middlegame weight in [0, 1]: 1 with full material, 0 with bare kings.
pub fn game_phase(board: &Board) -> f64 {
    let mut phase = 0.0;
    for (_, piece) in board.occupied_squares() {
        phase += match piece.kind {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::Bishop => 1.0,
            PieceKind::Rook => 2.0,
            PieceKind::Queen => 4.0,
            PieceKind::King => 0.0,
        };
    }
    (phase / TOTAL_PHASE).clamp(0.0, 1.0)
}

/// Base value plus square bonus for one piece. The king blends its midgame
/// and endgame tables by phase.
fn piece_value(piece: Piece, square: Square, phase: f64) -> f64 {
    let row = match piece.color {
        Color::White => square.row,
        Color::Black => 7 - square.row,
    } as usize;
    let col = square.col as usize;

    match piece.kind {
        PieceKind::Pawn => PAWN_VALUE + PAWN_TABLE[row][col],
        PieceKind::Knight => KNIGHT_VALUE + KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_VALUE + BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_VALUE + ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => {
            KING_VALUE
                + KING_TABLE_MIDGAME[row][col] * phase
                + KING_TABLE_ENDGAME[row][col] * (1.0 - phase)
        }
    }
}

fn material_and_pst_white_minus_black(board: &Board, phase: f64) -> f64 {
    let mut score = 0.0;
    for (square, piece) in board.occupied_squares() {
        let value = piece_value(piece, square, phase);
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }
    score
}

fn pawn_structure_white_minus_black(board: &Board) -> f64 {
    let mut white_per_file = [0u8; 8];
    let mut black_per_file = [0u8; 8];
    for (square, piece) in board.occupied_squares() {
        if piece.kind == PieceKind::Pawn {
            match piece.color {
                Color::White => white_per_file[square.col as usize] += 1,
                Color::Black => black_per_file[square.col as usize] += 1,
            }
        }
    }

    let mut score = 0.0;
    for file in 0..8usize {
        if white_per_file[file] > 1 {
            score += f64::from(white_per_file[file] - 1) * DOUBLED_PAWN_PENALTY;
        }
        if black_per_file[file] > 1 {
            score -= f64::from(black_per_file[file] - 1) * DOUBLED_PAWN_PENALTY;
        }

        let left_white = file == 0 || white_per_file[file - 1] == 0;
        let right_white = file == 7 || white_per_file[file + 1] == 0;
        if white_per_file[file] > 0 && left_white && right_white {
            score += ISOLATED_PAWN_PENALTY;
        }

        let left_black = file == 0 || black_per_file[file - 1] == 0;
        let right_black = file == 7 || black_per_file[file + 1] == 0;
        if black_per_file[file] > 0 && left_black && right_black {
            score -= ISOLATED_PAWN_PENALTY;
        }
    }

    for (square, piece) in board.occupied_squares() {
        if piece.kind != PieceKind::Pawn {
            continue;
        }
        if is_passed_pawn(board, square, piece.color) {
            match piece.color {
                Color::White => score += PASSED_PAWN_BONUS[(7 - square.row) as usize],
                Color::Black => score -= PASSED_PAWN_BONUS[square.row as usize],
            }
        }
    }

    score
}

/// No enemy pawn on the same or an adjacent file strictly in front.
fn is_passed_pawn(board: &Board, square: Square, color: Color) -> bool {
    let enemy = color.opposite();
    let direction = color.pawn_direction();

    let mut row = square.row as i8 + direction;
    while (0..8).contains(&row) {
        for d_col in -1i8..=1 {
            let col = square.col as i8 + d_col;
            if !(0..8).contains(&col) {
                continue;
            }
            let guard = Square::new(row as u8, col as u8);
            if board.piece_at(guard) == Some(Piece::new(PieceKind::Pawn, enemy)) {
                return false;
            }
        }
        row += direction;
    }

    true
}

fn mobility_white_minus_black(board: &Board) -> f64 {
    let mut score = 0.0;
    let mut scratch: Vec<Move> = Vec::with_capacity(32);

    for (square, piece) in board.occupied_squares() {
        let weight = match piece.kind {
            PieceKind::Knight => KNIGHT_MOBILITY_WEIGHT,
            PieceKind::Bishop => BISHOP_MOBILITY_WEIGHT,
            PieceKind::Rook => ROOK_MOBILITY_WEIGHT,
            PieceKind::Queen => QUEEN_MOBILITY_WEIGHT,
            PieceKind::Pawn | PieceKind::King => continue,
        };

        scratch.clear();
        match piece.kind {
            PieceKind::Knight => generate_knight_moves(board, square, piece.color, &mut scratch),
            PieceKind::Bishop => generate_bishop_moves(board, square, piece.color, &mut scratch),
            PieceKind::Rook => generate_rook_moves(board, square, piece.color, &mut scratch),
            _ => generate_queen_moves(board, square, piece.color, &mut scratch),
        }

        let term = scratch.len() as f64 * weight;
        match piece.color {
            Color::White => score += term,
            Color::Black => score -= term,
        }
    }

    score
}

fn king_safety_white_minus_black(board: &Board) -> f64 {
    side_king_safety(board, Color::White) - side_king_safety(board, Color::Black)
}

fn side_king_safety(board: &Board, color: Color) -> f64 {
    let Some(king) = king_square(board, color) else {
        return 0.0;
    };

    let mut total = 0.0;
    for d_col in -1i8..=1 {
        let col = king.col as i8 + d_col;
        if !(0..8).contains(&col) {
            continue;
        }
        let col = col as u8;

        if let Some(shield) = king.offset(color.pawn_direction(), d_col) {
            if board.piece_at(shield) == Some(Piece::new(PieceKind::Pawn, color)) {
                total += PAWN_SHIELD_BONUS;
            }
        }

        let file_has_pawn = (0..8u8).any(|row| {
            matches!(
                board.piece_at(Square::new(row, col)),
                Some(piece) if piece.kind == PieceKind::Pawn
            )
        });
        if !file_has_pawn {
            total += OPEN_KING_FILE_PENALTY;
        }
    }

    total
}

fn minor_pairs_white_minus_black(board: &Board, phase: f64) -> f64 {
    let mut bishops = [0u8; 2];
    let mut knights = [0u8; 2];
    for (_, piece) in board.occupied_squares() {
        match piece.kind {
            PieceKind::Bishop => bishops[piece.color.index()] += 1,
            PieceKind::Knight => knights[piece.color.index()] += 1,
            _ => {}
        }
    }

    let mut score = 0.0;
    // The bishop pair grows with simplification, the knight pair with the
    // amount of material still on the board.
    for (color, sign) in [(Color::White, 1.0), (Color::Black, -1.0)] {
        if bishops[color.index()] >= 2 {
            score += sign * BISHOP_PAIR_BONUS * (1.0 - phase);
        }
        if knights[color.index()] >= 2 {
            score += sign * KNIGHT_PAIR_BONUS * phase;
        }
    }
    score
}

fn center_control_white_minus_black(board: &Board) -> f64 {
    let mut score = 0.0;
    for square in CENTER_SQUARES {
        match board.color_at(square) {
            Some(Color::White) => score += CENTER_OCCUPANCY_BONUS,
            Some(Color::Black) => score -= CENTER_OCCUPANCY_BONUS,
            None => {}
        }
        if is_square_attacked(board, square, Color::White) {
            score += CENTER_ATTACK_BONUS;
        }
        if is_square_attacked(board, square, Color::Black) {
            score -= CENTER_ATTACK_BONUS;
        }
    }
    score
}

fn coordination_white_minus_black(board: &Board) -> f64 {
    let mut score = 0.0;
    for (square, piece) in board.occupied_squares() {
        if matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
            continue;
        }
        if is_square_attacked(board, square, piece.color) {
            match piece.color {
                Color::White => score += COORDINATION_BONUS,
                Color::Black => score -= COORDINATION_BONUS,
            }
        }
    }
    score
}

fn development_white_minus_black(board: &Board) -> f64 {
    const MINOR_HOMES: [(u8, PieceKind); 4] = [
        (1, PieceKind::Knight),
        (6, PieceKind::Knight),
        (2, PieceKind::Bishop),
        (5, PieceKind::Bishop),
    ];

    let mut score = 0.0;
    for (col, kind) in MINOR_HOMES {
        if board.piece_at(Square::new(7, col)) != Some(Piece::new(kind, Color::White)) {
            score += DEVELOPMENT_BONUS;
        }
        if board.piece_at(Square::new(0, col)) != Some(Piece::new(kind, Color::Black)) {
            score -= DEVELOPMENT_BONUS;
        }
    }
    score
}
