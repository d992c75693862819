//! Win condition checking
//!
//! Five or more same-colored stones in a line win (overlines count). The
//! check runs from the stone just placed, so it only walks the four axes
//! through that cell. The sentinel ring ends every walk without bounds checks.

use crate::board::{Board, Cell, Pos, Stone};

/// Axes for line checking, one sign each; walks go both ways
const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Outcome of the game after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Stone),
    /// Board full with no five
    Draw,
}

/// Count consecutive `stone` cells starting one step from `pos` along `(dr, dc)`.
///
/// `pos` itself is not counted. `pos` must be playable.
pub fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let target = Cell::from(stone);
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;

    while board.get(Pos::new(r as u8, c as u8)) == target {
        count += 1;
        r += dr;
        c += dc;
    }

    count
}

/// Length of the `stone` run through `pos` on one axis, `pos` included
#[inline]
fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> usize {
    1 + count_direction(board, pos, dr, dc, stone) + count_direction(board, pos, -dr, -dc, stone)
}

/// Fast five-in-a-row check at a specific position
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, stone: Stone) -> bool {
    AXES.iter().any(|&axis| run_length(board, pos, axis, stone) >= 5)
}

/// First five cells of a winning run through `pos`, for highlighting
pub fn find_five_line(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    for (dr, dc) in AXES {
        if run_length(board, pos, (dr, dc), stone) < 5 {
            continue;
        }

        let back = count_direction(board, pos, -dr, -dc, stone) as i32;
        let start_r = pos.row as i32 - dr * back;
        let start_c = pos.col as i32 - dc * back;

        let mut line = [pos; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            let i = i as i32;
            *cell = Pos::new((start_r + dr * i) as u8, (start_c + dc * i) as u8);
        }
        return Some(line);
    }

    None
}

/// Game outcome after the stone at `last` was placed
pub fn check_outcome(board: &Board, last: Pos) -> Outcome {
    if let Some(stone) = board.get(last).stone() {
        if has_five_at_pos(board, last, stone) {
            return Outcome::Win(stone);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for col in 1..6 {
            board.place(Pos::new(8, col), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(8, 3), Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(8, 3), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical_at_edge() {
        let mut board = Board::new();
        for row in 11..16 {
            board.place(Pos::new(row, 15), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(15, 15), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonals() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(3 + i, 3 + i), Stone::Black);
            board.place(Pos::new(3 + i, 13 - i), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(5, 5), Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(7, 9), Stone::White));
    }

    #[test]
    fn test_four_is_not_five() {
        let mut board = Board::new();
        for col in 4..8 {
            board.place(Pos::new(8, col), Stone::Black);
        }
        board.place(Pos::new(8, 8), Stone::White);
        assert!(!has_five_at_pos(&board, Pos::new(8, 7), Stone::Black));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new();
        for col in 2..8 {
            board.place(Pos::new(4, col), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(4, 2), Stone::Black));
    }

    #[test]
    fn test_count_direction_stops_at_border() {
        let mut board = Board::new();
        board.place(Pos::new(1, 1), Stone::Black);
        board.place(Pos::new(1, 2), Stone::Black);
        assert_eq!(count_direction(&board, Pos::new(1, 2), 0, -1, Stone::Black), 1);
        assert_eq!(count_direction(&board, Pos::new(1, 1), -1, 0, Stone::Black), 0);
    }

    #[test]
    fn test_find_five_line() {
        let mut board = Board::new();
        for col in 6..11 {
            board.place(Pos::new(8, col), Stone::White);
        }
        let line = find_five_line(&board, Pos::new(8, 10), Stone::White).unwrap();
        assert_eq!(line[0], Pos::new(8, 6));
        assert_eq!(line[4], Pos::new(8, 10));
        assert!(find_five_line(&board, Pos::new(8, 10), Stone::Black).is_none());
    }

    #[test]
    fn test_check_outcome() {
        let mut board = Board::new();
        for row in 2..6 {
            board.place(Pos::new(row, 2), Stone::Black);
        }
        assert_eq!(check_outcome(&board, Pos::new(5, 2)), Outcome::Ongoing);

        board.place(Pos::new(6, 2), Stone::Black);
        assert_eq!(check_outcome(&board, Pos::new(6, 2)), Outcome::Win(Stone::Black));
    }

    #[test]
    fn test_check_outcome_draw() {
        let mut board = Board::new();
        // Pairs of columns alternate colors so no line reaches five
        for pos in Board::playable_positions() {
            let stripe = ((pos.col - 1) / 2 + (pos.row - 1)) % 2;
            let stone = if stripe == 0 { Stone::Black } else { Stone::White };
            board.place(pos, stone);
        }
        let last = Pos::new(15, 15);
        assert!(!has_five_at_pos(&board, last, board.get(last).stone().unwrap()));
        assert_eq!(check_outcome(&board, last), Outcome::Draw);
    }
}
