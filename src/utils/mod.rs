pub mod algebraic;
pub mod long_algebraic;
pub mod render_game_state;
