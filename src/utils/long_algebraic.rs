//! Move <-> long-algebraic text ("e2e4", "e7e8q").
//!
//! Input promotion letters are lowercased and an unrecognized letter falls
//! back to a queen; the legality check in `play_move` is what ultimately
//! rejects nonsense. Output (the engine echoing its chosen move) uppercases
//! the promotion letter.

use crate::errors::EngineError;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_long_algebraic(text: &str) -> Result<Move, EngineError> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(EngineError::InvalidAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let promotion = if text.len() == 5 {
        let letter = text.as_bytes()[4].to_ascii_lowercase() as char;
        Some(promotion_from_char(letter))
    } else {
        None
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

pub fn format_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(promotion) = mv.promotion {
        out.push(promotion_to_char(promotion).to_ascii_uppercase());
    }
    out
}

fn promotion_from_char(letter: char) -> PieceKind {
    match letter {
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        // 'q' and anything else: the driver's documented queen default.
        _ => PieceKind::Queen,
    }
}

fn promotion_to_char(piece: PieceKind) -> char {
    match piece {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    #[test]
    fn plain_move_round_trips() {
        let mv = parse_long_algebraic("e2e4").expect("move should parse");
        assert_eq!(mv.from, Square::new(6, 4));
        assert_eq!(mv.to, Square::new(4, 4));
        assert_eq!(mv.promotion, None);
        assert_eq!(format_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn promotion_letter_is_case_insensitive_on_input_and_upper_on_output() {
        let lower = parse_long_algebraic("e7e8n").expect("move should parse");
        let upper = parse_long_algebraic("e7e8N").expect("move should parse");
        assert_eq!(lower, upper);
        assert_eq!(lower.promotion, Some(PieceKind::Knight));
        assert_eq!(format_long_algebraic(lower), "e7e8N");
    }

    #[test]
    fn unknown_promotion_letter_defaults_to_queen() {
        let mv = parse_long_algebraic("a7a8x").expect("move should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn malformed_moves_are_rejected() {
        for text in ["", "e2", "e2e", "e2e4qq", "z2e4", "e2z4"] {
            assert!(
                parse_long_algebraic(text).is_err(),
                "{text:?} should not parse"
            );
        }
    }
}
