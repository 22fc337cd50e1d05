//! Quiescence search: a negamax extension over forcing moves that runs
//! where the main search hits depth zero, so the evaluation is only ever
//! taken on tactically quiet positions.
//!
//! The forcing set is every capture (en passant and promotions included)
//! plus, on the first quiescence ply only, quiet moves that give check.
//! Bounding the check moves to one ply keeps perpetual-check sequences from
//! recursing without end; captures alone shrink the material and terminate
//! on their own.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, MoveFilter};
use crate::search::alpha_beta::SearchContext;
use crate::search::board_scoring::evaluate;
use crate::search::move_ordering::order_moves;

pub fn quiescence(
    board: &mut Board,
    side: Color,
    mut alpha: f64,
    beta: f64,
    ctx: &SearchContext<'_>,
    quiet_ply: u8,
) -> f64 {
    ctx.count_node();

    let stand_pat = evaluate(board, side);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut forcing = forcing_moves(board, side, quiet_ply);
    order_moves(board, side, &mut forcing);

    for mv in forcing {
        board.make_move(mv);
        let score = -quiescence(board, side.opposite(), -beta, -alpha, ctx, quiet_ply + 1);
        board.unmake_move();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

fn forcing_moves(board: &mut Board, side: Color, quiet_ply: u8) -> Vec<Move> {
    let mut forcing = legal_moves(board, side, MoveFilter::CapturesOnly);
    if quiet_ply > 0 {
        return forcing;
    }

    for mv in legal_moves(board, side, MoveFilter::All) {
        if forcing.contains(&mv) {
            continue;
        }
        board.make_move(mv);
        let gives_check = is_king_in_check(board, side.opposite());
        board.unmake_move();
        if gives_check {
            forcing.push(mv);
        }
    }

    forcing
}
