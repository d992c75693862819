//! Game rules for Gobang
//!
//! Free-style five in a row: the first side with an unbroken line of five or
//! more stones wins; a full board without one is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_outcome, count_direction, find_five_line, has_five_at_pos, Outcome};
