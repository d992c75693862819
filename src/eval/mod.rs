//! Evaluation module for Gobang positions
//!
//! Scores every cell by the five-cell windows passing through it:
//! - Window classification by occupancy (open, dead, one-sided)
//! - Lookup of the class in a tunable score table
//! - Accumulation over all eight scan directions

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_board, window_counts, window_score, ScoreMap, DIRECTIONS, WINDOW_LEN};
pub use patterns::{classify, ScoreTable, WindowClass, UNREACHABLE_SCORE};
