use connect_four_mcts::{
    Board, EngineError, GameState, Move, Player, Winner, COLS, ROWS,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const DRAWN_BOARD: &str = "\
RRYYRRY
YYRRYYR
RRYYRRY
YYRRYYR
RRYYRRY
YYRRYYR";

fn board(rows: &str) -> Board {
    rows.parse().expect("test board should parse")
}

#[test]
fn test_empty_board_has_every_column() {
    let state = GameState::empty(Player::Red);
    let moves: Vec<usize> = state.legal_moves().iter().map(|mv| mv.column).collect();
    assert_eq!(moves, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(state.winner(), None);
}

#[test]
fn test_pieces_stack_bottom_up() {
    let mut b = Board::new();
    assert_eq!(b.drop_piece(Move::new(3), Player::Red).unwrap(), ROWS - 1);
    assert_eq!(b.drop_piece(Move::new(3), Player::Yellow).unwrap(), ROWS - 2);
    assert_eq!(b.get(ROWS - 1, 3), Some(Player::Red));
    assert_eq!(b.get(ROWS - 2, 3), Some(Player::Yellow));
    assert_eq!(b.get(ROWS - 3, 3), None);
}

#[test]
fn test_apply_move_keeps_turn_and_play_switches_it() {
    let mut state = GameState::empty(Player::Yellow);

    state.apply_move(Move::new(0)).unwrap();
    assert_eq!(state.current_player(), Player::Yellow);
    assert_eq!(state.board().get(ROWS - 1, 0), Some(Player::Yellow));

    state.switch_turn();
    assert_eq!(state.current_player(), Player::Red);

    state.play(Move::new(0)).unwrap();
    assert_eq!(state.board().get(ROWS - 2, 0), Some(Player::Red));
    assert_eq!(state.current_player(), Player::Yellow);
}

#[test]
fn test_full_column_is_illegal() {
    let mut state = GameState::empty(Player::Red);
    for _ in 0..ROWS {
        state.play(Move::new(2)).unwrap();
    }

    assert!(!state.is_legal_move(Move::new(2)));
    assert!(!state.legal_moves().contains(&Move::new(2)));
    assert_eq!(
        state.apply_move(Move::new(2)),
        Err(EngineError::IllegalMove { column: 2 })
    );
    assert_eq!(
        state.apply_move(Move::new(COLS)),
        Err(EngineError::IllegalMove { column: COLS })
    );
}

#[test]
fn test_three_in_a_row_wins_when_completed() {
    let rows = "\
OOOOOOO
OOOOOOO
OOOOOOO
OOOOOOO
RRROOOO
YYYOOOO";
    let mut state = GameState::new(board(rows), Player::Yellow);
    assert_eq!(state.winner(), None);

    state.apply_move(Move::new(3)).unwrap();
    assert_eq!(state.winner(), Some(Winner::Player(Player::Yellow)));
}

#[test]
fn test_vertical_and_diagonal_wins() {
    let vertical = "\
OOOOOOO
OOOOOOO
OOOOOOR
OOOOOOR
OOOOOOR
YYYOOOR";
    assert_eq!(board(vertical).four_in_a_row(), Some(Player::Red));

    let down_right = "\
OOOOOOO
OOOOOOO
YOOOOOO
RYOOOOO
RRYOOOO
RRRYOOO";
    assert_eq!(board(down_right).four_in_a_row(), Some(Player::Yellow));

    let up_right = "\
OOOOOOO
OOOOOOO
OOOOOOR
OOOOORY
OOOORYY
OOORYYY";
    assert_eq!(board(up_right).four_in_a_row(), Some(Player::Red));
}

#[test]
fn test_three_is_not_enough() {
    let rows = "\
OOOOOOO
OOOOOOO
OOOOOOO
ROOOOOO
RYOOOOO
RYYOYYY";
    assert_eq!(board(rows).four_in_a_row(), None);
}

#[test]
fn test_full_board_without_four_is_a_draw() {
    let state = GameState::new(board(DRAWN_BOARD), Player::Red);
    assert!(state.legal_moves().is_empty());
    assert_eq!(state.winner(), Some(Winner::Draw));
    assert!(state.is_terminal());
}

#[test]
fn test_outcome_values_are_canonical() {
    assert_eq!(Winner::Player(Player::Yellow).canonical(), 1);
    assert_eq!(Winner::Player(Player::Red).canonical(), -1);
    assert_eq!(Winner::Draw.canonical(), 0);

    assert_eq!(Winner::Player(Player::Red).value_for(Player::Red), 1.0);
    assert_eq!(Winner::Player(Player::Red).value_for(Player::Yellow), -1.0);
    assert_eq!(Winner::Draw.value_for(Player::Red), 0.0);
}

#[test]
fn test_winner_is_mirror_symmetric() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::empty(Player::Red);

        loop {
            let mirrored = GameState::new(state.board().mirrored(), state.current_player());
            assert_eq!(state.winner(), mirrored.winner(), "seed {}", seed);

            if state.is_terminal() {
                break;
            }
            let mv = *state.legal_moves().choose(&mut rng).unwrap();
            state.play(mv).unwrap();
        }
    }
}

#[test]
fn test_legal_moves_never_grow() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::empty(Player::Yellow);
        let mut previous = state.legal_moves().len();

        while !state.legal_moves().is_empty() {
            let mv = *state.legal_moves().choose(&mut rng).unwrap();
            state.play(mv).unwrap();

            let now = state.legal_moves().len();
            assert!(now <= previous);
            assert!(previous - now <= 1);
            previous = now;
        }
        assert!(state.board().is_full());
    }
}

#[test]
fn test_moves_on_a_copy_leave_the_original_alone() {
    let rows = "\
OOOOOOO
OOOOOOO
OOOOOOO
OOOOOOO
OOOYOOO
OORRYOO";
    let state = GameState::new(board(rows), Player::Red);
    let snapshot = state.clone();

    let mut copy = state.clone();
    copy.play(Move::new(4)).unwrap();

    assert_eq!(state, snapshot);
    assert_ne!(copy, state);
    assert_eq!(state.board().piece_count(), 4);
    assert_eq!(copy.board().piece_count(), 5);
}
