//! Move selection for the computer side
//!
//! The engine is a single static evaluation, not a search: one window scan
//! over the current board (see [`crate::eval`]) followed by a row-major pass
//! that keeps the highest-scoring empty cell. Ties go to the cell scanned
//! last, i.e. the bottom-right-most of the tied set.
//!
//! # Example
//!
//! ```
//! use gobang::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(8, 8), Stone::Black);
//!
//! let engine = AIEngine::new(Stone::White);
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! ```

use crate::board::{Board, Pos, Stone, LINE_BEGIN, LINE_END};
use crate::error::EngineError;
use crate::eval::{score_board, ScoreMap, ScoreTable};
use rand::Rng;
use std::time::Instant;

/// How the engine arrived at a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Uniformly random first stone
    RandomOpening,
    /// Highest window score
    Heuristic,
}

/// Result of a move query with statistics for display.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, None if the board is full
    pub best_move: Option<Pos>,
    /// Accumulated score of the chosen cell
    pub score: i32,
    pub kind: MoveKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of five-cell windows scored
    pub windows: u32,
}

/// Heuristic opponent playing one side.
///
/// Holds no board: each query takes the current snapshot, so the caller can
/// keep mutating its board between queries.
#[derive(Debug, Clone)]
pub struct AIEngine {
    side: Stone,
    table: ScoreTable,
}

impl AIEngine {
    /// Engine for `side` with the default score table
    #[must_use]
    pub fn new(side: Stone) -> Self {
        Self::with_table(side, ScoreTable::DEFAULT)
    }

    /// Engine for `side` with a custom score table.
    ///
    /// # Example
    ///
    /// ```
    /// use gobang::{AIEngine, ScoreTable, Stone};
    ///
    /// // Weigh own lines as heavily as the opponent's
    /// let table = ScoreTable { opponent: ScoreTable::DEFAULT.own, ..ScoreTable::DEFAULT };
    /// let engine = AIEngine::with_table(Stone::White, table);
    /// assert_eq!(engine.side(), Stone::White);
    /// ```
    #[must_use]
    pub fn with_table(side: Stone, table: ScoreTable) -> Self {
        Self { side, table }
    }

    #[inline]
    pub fn side(&self) -> Stone {
        self.side
    }

    #[inline]
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Score every cell of `board` from this engine's side
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> ScoreMap {
        score_board(board, self.side, &self.table)
    }

    /// Best empty cell for the current position.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] when the playable region is full.
    pub fn best_move(&self, board: &Board) -> Result<Pos, EngineError> {
        let scores = self.evaluate(board);
        select_best(board, &scores)
            .map(|(pos, _)| pos)
            .ok_or(EngineError::NoLegalMove)
    }

    /// Best move plus the data the UI shows about it
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let scores = self.evaluate(board);
        let best = select_best(board, &scores);

        if let Some((pos, score)) = best {
            log::debug!(
                "{} engine picks ({}, {}) score={} windows={}",
                self.side.name(),
                pos.row,
                pos.col,
                score,
                scores.windows()
            );
        }

        MoveResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            kind: MoveKind::Heuristic,
            time_ms: start.elapsed().as_millis() as u64,
            windows: scores.windows(),
        }
    }

    /// Uniformly random playable cell, used as an opening stone
    pub fn opening_move<R: Rng>(&self, rng: &mut R) -> MoveResult {
        let row = rng.random_range(LINE_BEGIN..=LINE_END);
        let col = rng.random_range(LINE_BEGIN..=LINE_END);
        log::debug!("{} engine opens at ({}, {})", self.side.name(), row, col);

        MoveResult {
            best_move: Some(Pos::new(row, col)),
            score: 0,
            kind: MoveKind::RandomOpening,
            time_ms: 0,
            windows: 0,
        }
    }
}

/// Row-major pass over the playable region keeping the last empty cell with
/// the highest score (`>=` comparison)
fn select_best(board: &Board, scores: &ScoreMap) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;

    for pos in Board::playable_positions() {
        if !board.is_empty(pos) {
            continue;
        }
        let score = scores.get(pos);
        if best.map_or(true, |(_, best_score)| score >= best_score) {
            best = Some((pos, score));
        }
    }

    best
}
