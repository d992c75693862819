use gobang::{Board, Cell, Pos, Stone, WIDTH};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Place(u8, u8),
    Undo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..WIDTH as u8, 0..WIDTH as u8).prop_map(|(r, c)| Op::Place(r, c)),
        1 => Just(Op::Undo),
    ]
}

fn snapshot(board: &Board) -> Vec<Cell> {
    (0..(WIDTH * WIDTH)).map(|i| board.get(Pos::from_index(i))).collect()
}

fn board_from(moves: &[(u8, u8)]) -> Board {
    let mut board = Board::new();
    let mut stone = Stone::Black;
    for &(r, c) in moves {
        if board.try_place(Pos::new(r, c), stone).is_ok() {
            stone = stone.opponent();
        }
    }
    board
}

proptest! {
    #[test]
    fn border_stays_sentinel(ops in prop::collection::vec(op(), 0..120)) {
        let mut board = Board::new();
        let mut stone = Stone::Black;
        for op in ops {
            match op {
                Op::Place(r, c) => {
                    if board.try_place(Pos::new(r, c), stone).is_ok() {
                        stone = stone.opponent();
                    }
                }
                Op::Undo => {
                    board.undo();
                }
            }
        }

        for i in 0..(WIDTH * WIDTH) {
            let pos = Pos::from_index(i);
            if !pos.is_playable() {
                prop_assert_eq!(board.get(pos), Cell::OffBoard);
            } else {
                prop_assert_ne!(board.get(pos), Cell::OffBoard);
            }
        }
    }

    #[test]
    fn undo_inverts_place(
        moves in prop::collection::vec((1..=15u8, 1..=15u8), 0..60),
        target in (1..=15u8, 1..=15u8),
    ) {
        let mut board = board_from(&moves);
        let pos = Pos::new(target.0, target.1);
        prop_assume!(board.is_empty(pos));

        let before = snapshot(&board);
        let len = board.history().len();

        board.place(pos, Stone::White);
        prop_assert_eq!(board.get(pos), Cell::White);
        prop_assert_eq!(board.undo(), Some(pos));

        prop_assert_eq!(snapshot(&board), before);
        prop_assert_eq!(board.history().len(), len);
    }

    #[test]
    fn history_tracks_placements(moves in prop::collection::vec((1..=15u8, 1..=15u8), 0..80)) {
        let board = board_from(&moves);
        let stones = (0..(WIDTH * WIDTH))
            .filter(|&i| board.get(Pos::from_index(i)).stone().is_some())
            .count();
        prop_assert_eq!(board.history().len(), stones);
        for &pos in board.history() {
            prop_assert!(board.get(pos).stone().is_some());
        }
    }
}
