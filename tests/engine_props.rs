use gobang::{AIEngine, Board, EngineError, Pos, Stone};
use proptest::prelude::*;

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

fn side() -> impl Strategy<Value = Stone> {
    prop_oneof![Just(Stone::Black), Just(Stone::White)]
}

proptest! {
    #[test]
    fn best_move_is_an_empty_playable_cell(
        moves in prop::collection::vec((1..=15u8, 1..=15u8), 0..100),
        side in side(),
    ) {
        let board = board_from(&moves);
        let engine = AIEngine::new(side);
        let pos = engine.best_move(&board).unwrap();
        prop_assert!(pos.is_playable());
        prop_assert!(board.is_empty(pos));
    }

    #[test]
    fn best_move_is_last_maximum_in_scan_order(
        moves in prop::collection::vec((1..=15u8, 1..=15u8), 0..100),
        side in side(),
    ) {
        let board = board_from(&moves);
        let engine = AIEngine::new(side);
        let best = engine.best_move(&board).unwrap();
        let scores = engine.evaluate(&board);
        let top = scores.get(best);

        for pos in Board::playable_positions().filter(|&p| board.is_empty(p)) {
            if pos > best {
                prop_assert!(scores.get(pos) < top, "{:?} ties or beats {:?}", pos, best);
            } else {
                prop_assert!(scores.get(pos) <= top);
            }
        }
    }

    #[test]
    fn best_move_ignores_history_order(
        moves in prop::collection::vec((1..=15u8, 1..=15u8), 0..60),
        side in side(),
    ) {
        let board = board_from(&moves);

        // Same stones placed in reverse order
        let mut replay = Board::new();
        for &pos in board.history().iter().rev() {
            if let Some(stone) = board.get(pos).stone() {
                replay.place(pos, stone);
            }
        }

        let engine = AIEngine::new(side);
        prop_assert_eq!(engine.best_move(&board), engine.best_move(&replay));
    }
}

#[test]
fn full_board_has_no_legal_move() {
    let mut board = Board::new();
    let mut stone = Stone::Black;
    for pos in Board::playable_positions() {
        board.place(pos, stone);
        stone = stone.opponent();
    }

    for side in [Stone::Black, Stone::White] {
        assert_eq!(AIEngine::new(side).best_move(&board), Err(EngineError::NoLegalMove));
    }
}

#[test]
fn engine_plays_out_a_game_against_itself() {
    use gobang::rules::{check_outcome, Outcome};

    let mut board = Board::new();
    let black = AIEngine::new(Stone::Black);
    let white = AIEngine::new(Stone::White);
    let mut turn = Stone::Black;

    let outcome = loop {
        let engine = if turn == Stone::Black { &black } else { &white };
        let pos = engine.best_move(&board).unwrap();
        board.try_place(pos, turn).unwrap();
        match check_outcome(&board, pos) {
            Outcome::Ongoing => turn = turn.opponent(),
            done => break done,
        }
    };

    assert_ne!(outcome, Outcome::Ongoing);
}
