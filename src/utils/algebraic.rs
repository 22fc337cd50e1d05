//! Square <-> algebraic text conversion.
//!
//! Files a..h map to columns 0..7; ranks 1..8 map to rows 7..0 (row 0 is
//! Black's back rank).

use crate::errors::EngineError;
use crate::game_state::chess_types::Square;

pub fn square_to_algebraic(square: Square) -> String {
    let file = (b'a' + square.col) as char;
    let rank = (b'8' - square.row) as char;
    format!("{file}{rank}")
}

pub fn algebraic_to_square(text: &str) -> Result<Square, EngineError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(EngineError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(EngineError::InvalidAlgebraic(text.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}
