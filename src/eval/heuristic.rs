//! Five-cell window scan
//!
//! Every playable cell starts one window in each of eight directions (four
//! axes, both signs). A window that runs into the sentinel ring before
//! collecting five cells is discarded. Each surviving window is classified
//! and its score is added to all five of its cells.

use crate::board::{Board, Cell, Pos, Stone, TOTAL_CELLS};

use super::patterns::ScoreTable;

/// Length of a scoring window
pub const WINDOW_LEN: usize = 5;

/// Scan directions as `(dr, dc)`: four axes, each in both signs
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
];

/// Per-cell accumulated scores for one evaluation pass
#[derive(Debug, Clone)]
pub struct ScoreMap {
    scores: [i32; TOTAL_CELLS],
    windows: u32,
}

impl ScoreMap {
    fn new() -> Self {
        Self {
            scores: [0; TOTAL_CELLS],
            windows: 0,
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> i32 {
        self.scores[pos.to_index()]
    }

    /// Number of in-bounds windows that were scored
    #[inline]
    pub fn windows(&self) -> u32 {
        self.windows
    }

    fn add_window(&mut self, start: Pos, (dr, dc): (i32, i32), score: i32) {
        let mut r = start.row as i32;
        let mut c = start.col as i32;
        for _ in 0..WINDOW_LEN {
            self.scores[Pos::new(r as u8, c as u8).to_index()] += score;
            r += dr;
            c += dc;
        }
        self.windows += 1;
    }
}

/// Count `(own, opponent)` stones in the window starting at `start`.
///
/// Returns None if the window touches the sentinel ring. `start` must be on
/// the padded grid; the ring stops the walk before it can leave it.
pub fn window_counts(board: &Board, start: Pos, (dr, dc): (i32, i32), side: Stone) -> Option<(u8, u8)> {
    let mut own = 0u8;
    let mut opponent = 0u8;
    let mut r = start.row as i32;
    let mut c = start.col as i32;

    for _ in 0..WINDOW_LEN {
        match board.get(Pos::new(r as u8, c as u8)) {
            Cell::OffBoard => return None,
            Cell::Empty => {}
            cell => {
                if cell == Cell::from(side) {
                    own += 1;
                } else {
                    opponent += 1;
                }
            }
        }
        r += dr;
        c += dc;
    }

    Some((own, opponent))
}

/// Score of the window starting at `start`, or None if it is not fully in bounds
#[inline]
pub fn window_score(board: &Board, start: Pos, dir: (i32, i32), side: Stone, table: &ScoreTable) -> Option<i32> {
    window_counts(board, start, dir, side).map(|(own, opponent)| table.window_value(own, opponent))
}

/// Run the full eight-direction scan from `side`'s point of view.
///
/// Occupied cells accumulate scores too; callers filter them when choosing.
#[must_use]
pub fn score_board(board: &Board, side: Stone, table: &ScoreTable) -> ScoreMap {
    let mut map = ScoreMap::new();

    for dir in DIRECTIONS {
        for start in Board::playable_positions() {
            if let Some(score) = window_score(board, start, dir, side, table) {
                map.add_window(start, dir, score);
            }
        }
    }

    map
}
