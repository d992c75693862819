//! Board structure with move history

use super::{Cell, Pos, Stone, LINE_BEGIN, LINE_END, PLAYABLE_SIZE, TOTAL_CELLS};
use crate::error::BoardError;

/// Game board: a dense padded grid plus the placement history used for undo
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    /// Placed coordinates, most recent last
    history: Vec<Pos>,
}

impl Board {
    /// Sentinel ring everywhere, then the playable region cleared to Empty
    pub fn new() -> Self {
        let mut cells = [Cell::OffBoard; TOTAL_CELLS];
        for row in LINE_BEGIN..=LINE_END {
            for col in LINE_BEGIN..=LINE_END {
                cells[Pos::new(row, col).to_index()] = Cell::Empty;
            }
        }

        Self {
            cells,
            history: Vec::with_capacity(PLAYABLE_SIZE * PLAYABLE_SIZE),
        }
    }

    /// Get occupant at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a stone and record it in the history.
    ///
    /// Performs no occupancy check; use [`Board::try_place`] when the caller
    /// has not validated the target.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(pos.is_playable());
        self.cells[pos.to_index()] = stone.into();
        self.history.push(pos);
    }

    /// Place a stone after checking the target is a playable empty cell
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !pos.is_playable() {
            return Err(BoardError::OffBoard(pos));
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.place(pos, stone);
        Ok(())
    }

    /// Retract the most recent placement. No-op on an empty history.
    pub fn undo(&mut self) -> Option<Pos> {
        let pos = self.history.pop()?;
        self.cells[pos.to_index()] = Cell::Empty;
        Some(pos)
    }

    /// Placements in order, oldest first
    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// No empty playable cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() >= PLAYABLE_SIZE * PLAYABLE_SIZE
    }

    /// Playable coordinates in row-major order
    pub fn playable_positions() -> impl Iterator<Item = Pos> {
        (LINE_BEGIN..=LINE_END)
            .flat_map(|row| (LINE_BEGIN..=LINE_END).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
