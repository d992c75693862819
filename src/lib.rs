//! Gobang (free-style five in a row) with a heuristic opponent
//!
//! Two sides alternate placing stones on a 15x15 board; the first to line up
//! five or more in a row, column or diagonal wins.
//!
//! # Architecture
//!
//! - [`board`]: Padded grid with a sentinel ring, move history and undo
//! - [`eval`]: Five-cell window scan and the score table
//! - [`engine`]: Best-move selection for the computer side
//! - [`rules`]: Win and draw detection
//! - [`ui`]: egui front end and turn sequencing
//!
//! # Quick Start
//!
//! ```
//! use gobang::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(8, 8), Stone::Black);
//!
//! // Engine responds as White
//! let engine = AIEngine::new(Stone::White);
//! if let Ok(pos) = engine.best_move(&board) {
//!     board.place(pos, Stone::White);
//!     println!("Engine plays at {}", gobang::format_pos(pos));
//! }
//! ```
//!
//! # Engine
//!
//! The engine does not search. It scores every empty cell once by summing
//! the values of all five-cell windows through it and plays the maximum:
//! 1. Windows holding both colors are worth nothing
//! 2. Empty windows carry a small baseline
//! 3. One-sided windows are worth more the fuller they are, with the
//!    opponent's lines weighted above the engine's own

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod logging;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{format_pos, parse_pos, Board, Cell, Pos, Stone, PLAYABLE_SIZE, WIDTH};
pub use config::{GameConfig, GameMode};
pub use engine::{AIEngine, MoveKind, MoveResult};
pub use error::{BoardError, EngineError, GameError, NotationError};
pub use eval::ScoreTable;
