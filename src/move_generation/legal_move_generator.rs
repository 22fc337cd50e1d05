//! Full legal move generation pipeline.
//!
//! Piece-wise pseudo-legal generation feeds a make / check / unmake filter
//! that discards every move leaving the mover's own king attacked. The same
//! pipeline backs the search (all moves or captures only) and the driver's
//! membership-checked `play_move`.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFilter {
    All,
    /// Destination occupied, en-passant capture by a pawn, or a promotion.
    CapturesOnly,
}

/// Mechanically valid moves for `side`, ignoring whether the own king is
/// left in check.
pub fn pseudo_legal_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for (square, piece) in board
        .occupied_squares()
        .filter(|(_, piece)| piece.color == side)
    {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, square, side, out),
            PieceKind::Knight => generate_knight_moves(board, square, side, out),
            PieceKind::Bishop => generate_bishop_moves(board, square, side, out),
            PieceKind::Rook => generate_rook_moves(board, square, side, out),
            PieceKind::Queen => generate_queen_moves(board, square, side, out),
            PieceKind::King => generate_king_moves(board, square, side, out),
        }
    }
}

/// Legal moves for `side`, optionally restricted to forcing captures.
pub fn legal_moves(board: &mut Board, side: Color, filter: MoveFilter) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(128);
    pseudo_legal_moves(board, side, &mut pseudo);

    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if filter == MoveFilter::CapturesOnly && !is_forcing_capture(board, mv) {
            continue;
        }

        board.make_move(mv);
        if !is_king_in_check(board, side) {
            legal.push(mv);
        }
        board.unmake_move();
    }

    legal
}

/// Apply a human-submitted move after checking it against the legal set.
///
/// The matching mirrors the prompt semantics: from/to must agree, and a
/// stray promotion letter on a non-promoting move is dropped while a
/// promoting move adopts the validated promotion piece. The board is
/// untouched on error.
pub fn play_move(board: &mut Board, side: Color, requested: Move) -> Result<Move, EngineError> {
    let legal = legal_moves(board, side, MoveFilter::All);

    let chosen = legal.into_iter().find(|candidate| {
        candidate.from == requested.from
            && candidate.to == requested.to
            && (candidate.promotion.is_none() || candidate.promotion == requested.promotion)
    });

    match chosen {
        Some(mv) => {
            board.make_move(mv);
            Ok(mv)
        }
        None => Err(EngineError::IllegalMove),
    }
}

fn is_forcing_capture(board: &Board, mv: Move) -> bool {
    if board.piece_at(mv.to).is_some() || mv.promotion.is_some() {
        return true;
    }
    board.en_passant == Some(mv.to)
        && board
            .piece_at(mv.from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, Square};
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn play_line(board: &mut Board, moves: &[&str]) {
        for text in moves {
            let mv = parse_long_algebraic(text).expect("test move should parse");
            board.make_move(mv);
        }
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut board = Board::new_game();
        assert_eq!(legal_moves(&mut board, Color::White, MoveFilter::All).len(), 20);
        assert_eq!(legal_moves(&mut board, Color::Black, MoveFilter::All).len(), 20);
    }

    #[test]
    fn every_legal_move_leaves_the_own_king_safe() {
        let mut board = Board::new_game();
        play_line(&mut board, &["e2e4", "e7e5", "d1h5", "b8c6", "h5f7"]);

        // Black is in check from the queen on f7; every reply must resolve it.
        assert!(is_king_in_check(&board, Color::Black));
        for mv in legal_moves(&mut board, Color::Black, MoveFilter::All) {
            board.make_move(mv);
            assert!(
                !is_king_in_check(&board, Color::Black),
                "move left the king in check"
            );
            board.unmake_move();
        }
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        let mut board = Board::empty();
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(
            Square::new(4, 4),
            Piece::new(PieceKind::Knight, Color::White),
        );
        board.set_piece(Square::new(0, 4), Piece::new(PieceKind::Rook, Color::Black));
        board.set_piece(Square::new(0, 0), Piece::new(PieceKind::King, Color::Black));
        board.refresh_zobrist(Color::White);

        let moves = legal_moves(&mut board, Color::White, MoveFilter::All);
        assert!(
            moves
                .iter()
                .all(|mv| mv.from != Square::new(4, 4)),
            "the pinned knight must stay put"
        );
    }

    #[test]
    fn checked_king_cannot_castle_either_way() {
        let mut board = Board::empty();
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(Square::new(7, 0), Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(Square::new(7, 7), Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(Square::new(6, 4), Piece::new(PieceKind::Rook, Color::Black));
        board.set_piece(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        board.refresh_zobrist(Color::White);

        let moves = legal_moves(&mut board, Color::White, MoveFilter::All);
        let kingside = Move::new(Square::new(7, 4), Square::new(7, 6));
        let queenside = Move::new(Square::new(7, 4), Square::new(7, 2));
        assert!(!moves.contains(&kingside));
        assert!(!moves.contains(&queenside));
    }

    #[test]
    fn lone_pawn_on_the_seventh_yields_exactly_four_promotions() {
        let mut board = Board::empty();
        board.set_piece(Square::new(1, 4), Piece::new(PieceKind::Pawn, Color::White));
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(Square::new(5, 0), Piece::new(PieceKind::King, Color::Black));
        board.refresh_zobrist(Color::White);

        let moves = legal_moves(&mut board, Color::White, MoveFilter::All);
        let promotions: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from == Square::new(1, 4))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.promotion.is_some()));
    }

    #[test]
    fn captures_only_filter_keeps_captures_en_passant_and_promotions() {
        let mut board = Board::new_game();
        play_line(&mut board, &["e2e4", "h7h6", "e4e5", "d7d5"]);

        let captures = legal_moves(&mut board, Color::White, MoveFilter::CapturesOnly);
        assert_eq!(
            captures,
            vec![Move::new(Square::new(3, 4), Square::new(2, 3))],
            "only the en-passant capture e5xd6 is available"
        );
    }

    #[test]
    fn play_move_applies_legal_input_and_rejects_the_rest() {
        let mut board = Board::new_game();
        let before = board.clone();

        let illegal = parse_long_algebraic("e2e5").expect("move should parse");
        assert_eq!(play_move(&mut board, Color::White, illegal), Err(EngineError::IllegalMove));
        assert_eq!(board, before, "rejected input must leave the board alone");

        let legal = parse_long_algebraic("e2e4").expect("move should parse");
        let played = play_move(&mut board, Color::White, legal).expect("e2e4 should be accepted");
        assert_eq!(played, legal);
        assert_eq!(board.history_len(), 1);
    }

    #[test]
    fn play_move_drops_a_stray_promotion_letter() {
        let mut board = Board::new_game();
        let noisy = parse_long_algebraic("e2e4q").expect("move should parse");
        let played = play_move(&mut board, Color::White, noisy).expect("move should be accepted");
        assert_eq!(played.promotion, None);
    }

    #[test]
    fn play_move_requires_a_valid_promotion_choice() {
        let mut board = Board::empty();
        board.set_piece(Square::new(1, 4), Piece::new(PieceKind::Pawn, Color::White));
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(Square::new(5, 0), Piece::new(PieceKind::King, Color::Black));
        board.refresh_zobrist(Color::White);

        let bare = Move::new(Square::new(1, 4), Square::new(0, 4));
        assert_eq!(
            play_move(&mut board, Color::White, bare),
            Err(EngineError::IllegalMove),
            "a promoting move without a promotion piece is not in the legal set"
        );

        let promoting = parse_long_algebraic("e7e8r").expect("move should parse");
        let played = play_move(&mut board, Color::White, promoting).expect("promotion should play");
        assert_eq!(played.promotion, Some(PieceKind::Rook));
    }
}
