//! Heuristic move ordering: most-valuable-victim / least-valuable-attacker
//! with promotion and check bonuses.
//!
//! Quiet, non-checking, non-promoting moves all score zero and keep their
//! generation order under the stable sort.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::move_generation::legal_move_checks::is_king_in_check;

const PROMOTION_BONUS: i32 = 10_000;
const CHECK_BONUS: i32 = 5_000;

#[inline]
const fn centipawn_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Sort `moves` best-first for the side to move.
pub fn order_moves(board: &mut Board, side: Color, moves: &mut [Move]) {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| (score_move(board, side, mv), mv))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}

fn score_move(board: &mut Board, side: Color, mv: Move) -> i32 {
    let attacker = board.piece_at(mv.from);
    let attacker_cp = attacker.map_or(0, |piece| centipawn_value(piece.kind));

    let victim_cp = match board.piece_at(mv.to) {
        Some(victim) => centipawn_value(victim.kind),
        None => {
            let en_passant = attacker.is_some_and(|piece| piece.kind == PieceKind::Pawn)
                && board.en_passant == Some(mv.to);
            if en_passant {
                centipawn_value(PieceKind::Pawn)
            } else {
                0
            }
        }
    };

    // MVV-LVA applies to captures; a quiet move contributes nothing here so
    // quiet non-checking non-promoting moves keep their generation order.
    let capture_score = if victim_cp > 0 {
        100 * victim_cp - attacker_cp
    } else {
        0
    };

    let promotion_bonus = if mv.promotion.is_some() {
        PROMOTION_BONUS
    } else {
        0
    };

    board.make_move(mv);
    let gives_check = is_king_in_check(board, side.opposite());
    board.unmake_move();
    let check_bonus = if gives_check { CHECK_BONUS } else { 0 };

    promotion_bonus + capture_score + check_bonus
}
