use super::*;
use crate::error::BoardError;

fn border_ring() -> impl Iterator<Item = Pos> {
    (0..WIDTH as u8).flat_map(|row| {
        (0..WIDTH as u8)
            .map(move |col| Pos::new(row, col))
            .filter(|pos| !pos.is_playable())
    })
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_cell_from_stone() {
    assert_eq!(Cell::from(Stone::Black), Cell::Black);
    assert_eq!(Cell::from(Stone::White), Cell::White);
    assert_eq!(Cell::Black.stone(), Some(Stone::Black));
    assert_eq!(Cell::Empty.stone(), None);
    assert_eq!(Cell::OffBoard.stone(), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(PLAYABLE_SIZE, 15);
    assert_eq!(WIDTH, 17);
    assert_eq!(TOTAL_CELLS, 289);
    assert_eq!(LINE_BEGIN, 1);
    assert_eq!(LINE_END, 15);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(8, 8); // Center
    assert_eq!(pos.to_index(), 8 * 17 + 8);

    let pos2 = Pos::from_index(144);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_playable() {
    assert!(Pos::new(1, 1).is_playable());
    assert!(Pos::new(15, 15).is_playable());
    assert!(!Pos::new(0, 5).is_playable());
    assert!(!Pos::new(5, 16).is_playable());
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(1, 1).offset(-1, -1), Some(Pos::new(0, 0)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(16, 16).offset(0, 1), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(1, 1);
    let pos2 = Pos::new(1, 2);
    let pos3 = Pos::new(2, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_new_board_layout() {
    let board = Board::new();
    for pos in border_ring() {
        assert_eq!(board.get(pos), Cell::OffBoard, "{:?} should be a sentinel", pos);
    }
    assert!(Board::playable_positions().all(|pos| board.get(pos) == Cell::Empty));
    assert_eq!(Board::playable_positions().count(), PLAYABLE_SIZE * PLAYABLE_SIZE);
    assert!(board.is_board_empty());
}

#[test]
fn test_playable_positions_row_major() {
    let positions: Vec<Pos> = Board::playable_positions().collect();
    assert_eq!(positions[0], Pos::new(1, 1));
    assert_eq!(positions[1], Pos::new(1, 2));
    assert_eq!(positions[15], Pos::new(2, 1));
    assert_eq!(*positions.last().unwrap(), Pos::new(15, 15));
}

#[test]
fn test_place_and_undo() {
    let mut board = Board::new();
    let pos = Pos::new(8, 8);

    board.place(pos, Stone::Black);
    assert_eq!(board.get(pos), Cell::Black);
    assert_eq!(board.history(), &[pos]);
    assert_eq!(board.last_move(), Some(pos));

    assert_eq!(board.undo(), Some(pos));
    assert_eq!(board.get(pos), Cell::Empty);
    assert!(board.history().is_empty());
}

#[test]
fn test_undo_is_lifo() {
    let mut board = Board::new();
    board.place(Pos::new(3, 3), Stone::Black);
    board.place(Pos::new(4, 4), Stone::White);

    assert_eq!(board.undo(), Some(Pos::new(4, 4)));
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Black);
    assert_eq!(board.undo(), Some(Pos::new(3, 3)));
}

#[test]
fn test_undo_empty_history_is_noop() {
    let mut board = Board::new();
    assert_eq!(board.undo(), None);
    assert!(Board::playable_positions().all(|pos| board.is_empty(pos)));
}

#[test]
fn test_try_place_rejects_occupied_and_border() {
    let mut board = Board::new();
    let pos = Pos::new(5, 5);

    assert_eq!(board.try_place(pos, Stone::Black), Ok(()));
    assert_eq!(board.try_place(pos, Stone::White), Err(BoardError::Occupied(pos)));
    assert_eq!(board.get(pos), Cell::Black);

    let edge = Pos::new(0, 5);
    assert_eq!(board.try_place(edge, Stone::White), Err(BoardError::OffBoard(edge)));
    assert_eq!(board.get(edge), Cell::OffBoard);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    let mut stone = Stone::Black;
    for pos in Board::playable_positions() {
        assert!(!board.is_full());
        board.place(pos, stone);
        stone = stone.opponent();
    }
    assert!(board.is_full());
}
