//! Two-letter coordinates: column letter then row letter, both `a..o`.
//!
//! `"aa"` is the top-left playable cell, `"oa"` the top-right one.

use super::{Pos, LINE_BEGIN, PLAYABLE_SIZE};
use crate::error::NotationError;

fn letter_to_line(letter: char) -> Result<u8, NotationError> {
    let lower = letter.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() {
        return Err(NotationError::OutOfRange(letter));
    }
    let idx = lower as u8 - b'a';
    if idx as usize >= PLAYABLE_SIZE {
        return Err(NotationError::OutOfRange(letter));
    }
    Ok(idx + LINE_BEGIN)
}

/// Parse a coordinate such as `"hc"` into a playable grid position
pub fn parse_pos(input: &str) -> Result<Pos, NotationError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::Length(trimmed.to_string()));
    };

    let col = letter_to_line(col)?;
    let row = letter_to_line(row)?;
    Ok(Pos::new(row, col))
}

/// Format a playable position as a two-letter coordinate
pub fn format_pos(pos: Pos) -> String {
    debug_assert!(pos.is_playable());
    let col = (b'a' + pos.col - LINE_BEGIN) as char;
    let row = (b'a' + pos.row - LINE_BEGIN) as char;
    format!("{col}{row}")
}
