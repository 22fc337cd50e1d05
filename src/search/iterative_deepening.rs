//! Iterative-deepening root driver with parallel root-move dispatch.
//!
//! Each depth iteration re-orders the root move list, fans one task out per
//! root move (every task owns a clone of the board), joins in input order,
//! and takes the argmax. The transposition table is the only shared state;
//! the winner of each iteration is carried into the next as the incumbent.

use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_generator::{legal_moves, MoveFilter};
use crate::search::alpha_beta::{negamax, SearchContext, INFINITY_SCORE};
use crate::search::move_ordering::order_moves;
use crate::search::transposition_table::TranspositionTable;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub tt_size_mb: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            tt_size_mb: 64,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Score of `best_move` from the searching side's perspective, in pawn
    /// units, from the deepest completed iteration.
    pub score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
}

pub struct Engine {
    tt: TranspositionTable,
    config: SearchConfig,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            tt: TranspositionTable::new_with_mb(config.tt_size_mb),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Forget everything learned from previous games.
    pub fn new_game(&self) {
        self.tt.clear();
    }

    /// Best move for `side` at the engine's configured depth.
    pub fn find_best_move(&self, board: &Board, side: Color) -> Result<SearchOutcome, EngineError> {
        self.find_best_move_at_depth(board, side, self.config.max_depth)
    }

    /// Best move for `side`, searching every depth 1..=`max_depth`.
    pub fn find_best_move_at_depth(
        &self,
        board: &Board,
        side: Color,
        max_depth: u8,
    ) -> Result<SearchOutcome, EngineError> {
        let mut root = board.clone();
        let mut moves = legal_moves(&mut root, side, MoveFilter::All);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let max_depth = max_depth.max(1);
        let nodes = AtomicU64::new(0);
        let mut best_move = moves[0];
        let mut best_score = -INFINITY_SCORE;

        for depth in 1..=max_depth {
            order_moves(&mut root, side, &mut moves);

            let results: Vec<(f64, Move)> = moves
                .par_iter()
                .map(|&mv| {
                    let mut task_board = root.clone();
                    task_board.make_move(mv);
                    let ctx = SearchContext {
                        tt: &self.tt,
                        root_depth: depth,
                        nodes: &nodes,
                    };
                    let score = -negamax(
                        &mut task_board,
                        side.opposite(),
                        depth - 1,
                        -INFINITY_SCORE,
                        INFINITY_SCORE,
                        &ctx,
                    );
                    (score, mv)
                })
                .collect();

            // The join preserves input order, so ties resolve to the move
            // the ordering heuristic already preferred.
            let mut depth_best_score = -INFINITY_SCORE;
            let mut depth_best_move = best_move;
            for (score, mv) in results {
                if score > depth_best_score {
                    depth_best_score = score;
                    depth_best_move = mv;
                }
            }

            best_score = depth_best_score;
            best_move = depth_best_move;
        }

        Ok(SearchOutcome {
            best_move,
            score: best_score,
            reached_depth: max_depth,
            nodes: nodes.load(Ordering::Relaxed),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};
    use crate::search::board_scoring::MATE_SCORE;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn place(board: &mut Board, kind: PieceKind, color: Color, row: u8, col: u8) {
        board.set_piece(Square::new(row, col), Piece::new(kind, color));
    }

    fn small_engine() -> Engine {
        Engine::new(SearchConfig {
            max_depth: 3,
            tt_size_mb: 8,
        })
    }

    #[test]
    fn a_mated_position_reports_no_legal_moves() {
        let mut board = Board::new_game();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            board.make_move(parse_long_algebraic(text).expect("test move should parse"));
        }

        let engine = small_engine();
        assert_eq!(
            engine.find_best_move(&board, Color::White).err(),
            Some(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn a_stalemated_position_also_reports_no_legal_moves() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::Black, 0, 7);
        place(&mut board, PieceKind::King, Color::White, 1, 5);
        place(&mut board, PieceKind::Queen, Color::White, 2, 6);
        board.refresh_zobrist(Color::Black);

        let engine = small_engine();
        assert_eq!(
            engine.find_best_move(&board, Color::Black).err(),
            Some(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn the_engine_plays_a_mate_in_one() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::Black, 0, 7);
        place(&mut board, PieceKind::King, Color::White, 2, 6);
        place(&mut board, PieceKind::Queen, Color::White, 7, 0);
        board.refresh_zobrist(Color::White);

        let engine = small_engine();
        let outcome = engine
            .find_best_move(&board, Color::White)
            .expect("a move should be found");

        assert_eq!(
            outcome.best_move,
            Move::new(Square::new(7, 0), Square::new(0, 0)),
            "Qa8 is the only mate"
        );
        assert!(outcome.score >= MATE_SCORE - 10.0);
        assert_eq!(outcome.reached_depth, 3);
        assert!(outcome.nodes > 0);
    }

    #[test]
    fn the_engine_takes_a_hanging_queen_at_depth_one() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::Black, 0, 4);
        place(&mut board, PieceKind::Queen, Color::Black, 6, 4);
        place(&mut board, PieceKind::King, Color::White, 7, 4);
        place(&mut board, PieceKind::Queen, Color::White, 7, 5);
        board.refresh_zobrist(Color::White);

        let engine = small_engine();
        let outcome = engine
            .find_best_move_at_depth(&board, Color::White, 1)
            .expect("a move should be found");

        assert_eq!(
            outcome.best_move.to,
            Square::new(6, 4),
            "the hanging queen on e2 must be captured"
        );
        assert!(outcome.score > 0.0);
    }

    #[test]
    fn the_search_does_not_mutate_the_callers_board() {
        let board = Board::new_game();
        let reference = board.clone();

        let engine = small_engine();
        let _ = engine
            .find_best_move_at_depth(&board, Color::White, 2)
            .expect("a move should be found");
        assert_eq!(board, reference);
    }

    #[test]
    fn deeper_iterations_keep_producing_legal_root_moves() {
        let mut board = Board::new_game();
        let engine = small_engine();
        let outcome = engine
            .find_best_move(&board, Color::White)
            .expect("a move should be found");

        let legal = legal_moves(&mut board, Color::White, MoveFilter::All);
        assert!(legal.contains(&outcome.best_move));
    }
}
