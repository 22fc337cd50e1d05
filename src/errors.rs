use thiserror::Error;

/// Error kinds surfaced by the engine core and the move-text utilities.
///
/// Nothing here is retried; the driver reports and re-prompts on
/// [`EngineError::IllegalMove`] and interprets [`EngineError::NoLegalMoves`]
/// together with the check predicate to declare checkmate or stalemate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("move is not legal in the current position")]
    IllegalMove,

    #[error("no legal moves are available")]
    NoLegalMoves,

    #[error("invalid move text: {0}")]
    InvalidAlgebraic(String),
}
