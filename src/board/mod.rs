//! Board representation for Gobang
//!
//! The grid is padded with a one-cell ring of [`Cell::OffBoard`] sentinels so
//! that directional scans can walk until they hit the border instead of
//! bounds-checking every step.

pub mod board;
pub mod notation;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use notation::{format_pos, parse_pos};

/// Number of playable lines on each axis (15x15)
pub const PLAYABLE_SIZE: usize = 15;
/// Padded grid width: playable region plus the sentinel ring
pub const WIDTH: usize = PLAYABLE_SIZE + 2; // 17
pub const TOTAL_CELLS: usize = WIDTH * WIDTH; // 289

/// First playable row/column index
pub const LINE_BEGIN: u8 = 1;
/// Last playable row/column index
pub const LINE_END: u8 = (WIDTH - 2) as u8;

/// A side in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

/// Occupant of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Sentinel ring around the playable region
    OffBoard,
}

impl Cell {
    /// The stone occupying this cell, if any
    #[inline]
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Black => Some(Stone::Black),
            Cell::White => Some(Stone::White),
            Cell::Empty | Cell::OffBoard => None,
        }
    }
}

impl From<Stone> for Cell {
    #[inline]
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

/// Position on the padded grid (border ring included)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < WIDTH && (col as usize) < WIDTH);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * WIDTH + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / WIDTH) as u8,
            col: (idx % WIDTH) as u8,
        }
    }

    /// Check that signed coordinates fall inside the padded grid
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < WIDTH as i32 && col >= 0 && col < WIDTH as i32
    }

    /// Inside the playable region (not on the sentinel ring)
    #[inline]
    pub fn is_playable(self) -> bool {
        (LINE_BEGIN..=LINE_END).contains(&self.row) && (LINE_BEGIN..=LINE_END).contains(&self.col)
    }

    /// Step by `(dr, dc)`. Returns None when the result leaves the padded grid.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
