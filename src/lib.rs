//! quince_chess: a terminal chess engine.
//!
//! The crate splits into the position model (`game_state`), the legal move
//! pipeline (`move_generation`), the evaluation and search stack
//! (`search`), and the text utilities the interactive driver builds on
//! (`utils`).

pub mod errors;
pub mod game_state;
pub mod move_generation;
pub mod search;
pub mod utils;
