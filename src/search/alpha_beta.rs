//! Principal-variation negamax with transposition table, null-move pruning,
//! and a check extension.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, MoveFilter};
use crate::search::board_scoring::MATE_SCORE;
use crate::search::move_ordering::order_moves;
use crate::search::quiescence::quiescence;
use crate::search::transposition_table::{Bound, TranspositionTable, TtEntry};

/// Full-width window bound for root searches.
pub const INFINITY_SCORE: f64 = 1e9;

/// Shared read-only search environment for one root task.
pub struct SearchContext<'a> {
    pub tt: &'a TranspositionTable,
    /// Depth of the current iterative-deepening iteration; mate scores are
    /// shaped by distance from here so quicker mates score higher.
    pub root_depth: u8,
    pub nodes: &'a AtomicU64,
}

impl SearchContext<'_> {
    #[inline]
    pub fn count_node(&self) {
        self.nodes.fetch_add(1, Ordering::Relaxed);
    }
}

pub fn negamax(
    board: &mut Board,
    side: Color,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    ctx: &SearchContext<'_>,
) -> f64 {
    let key = board.zobrist_key;

    if let Some(entry) = ctx.tt.probe(key) {
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower if entry.score >= beta => return beta,
                Bound::Upper if entry.score <= alpha => return alpha,
                _ => {}
            }
        }
    }

    if depth == 0 {
        return quiescence(board, side, alpha, beta, ctx, 0);
    }
    ctx.count_node();

    let in_check = is_king_in_check(board, side);

    // Null move: hand the opponent a free shot with a reduced, zero-width
    // probe; a fail-high proves the real position is at least as good.
    // Never while in check, where passing would skip the forced escape.
    if depth >= 3 && !in_check {
        let undo = board.make_null_move();
        let score = -negamax(board, side.opposite(), depth - 3, -beta, -beta + 1.0, ctx);
        board.unmake_null_move(undo);
        if score >= beta {
            return beta;
        }
    }

    let mut moves = legal_moves(board, side, MoveFilter::All);
    if moves.is_empty() {
        return if in_check {
            -MATE_SCORE + f64::from(ctx.root_depth - depth)
        } else {
            0.0
        };
    }

    order_moves(board, side, &mut moves);

    // Check extension: replies to check keep the parent's depth.
    let child_depth = if in_check { depth } else { depth - 1 };

    let mut bound = Bound::Upper;
    let mut best_move = moves[0];

    for (index, mv) in moves.iter().copied().enumerate() {
        board.make_move(mv);
        let score = if index == 0 {
            -negamax(board, side.opposite(), child_depth, -beta, -alpha, ctx)
        } else {
            // PVS: probe later moves with a zero-width window and re-search
            // only when the probe lands inside the open window.
            let probe = -negamax(board, side.opposite(), child_depth, -alpha - 1.0, -alpha, ctx);
            if probe > alpha && probe < beta {
                -negamax(board, side.opposite(), child_depth, -beta, -alpha, ctx)
            } else {
                probe
            }
        };
        board.unmake_move();

        if score >= beta {
            ctx.tt.store(TtEntry {
                key,
                depth,
                score: beta,
                bound: Bound::Lower,
                best_move: Some(mv),
            });
            return beta;
        }
        if score > alpha {
            alpha = score;
            bound = Bound::Exact;
            best_move = mv;
        }
    }

    ctx.tt.store(TtEntry {
        key,
        depth,
        score: alpha,
        bound,
        best_move: Some(best_move),
    });
    alpha
}
