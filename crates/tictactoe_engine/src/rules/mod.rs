//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to tic-tac-toe rules on an
//! N×N grid. Rules are kept apart from board storage so the search code and
//! the board share one definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
