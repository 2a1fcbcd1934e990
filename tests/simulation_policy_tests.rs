use connect_four_mcts::{
    policy::simulation::{CenterBiasedPolicy, RandomPolicy, SimulationPolicy, CENTER_FIRST},
    Board, GameState, Move, Player, Winner,
};
use rand::{rngs::StdRng, SeedableRng};

fn state(rows: &str, player: Player) -> GameState {
    GameState::new(rows.parse::<Board>().unwrap(), player)
}

#[test]
fn test_random_policy_plays_to_the_end() {
    let policy = RandomPolicy::new();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = GameState::empty(Player::Red);
        let winner = policy.simulate(&start, &mut rng).unwrap();

        assert!(matches!(
            winner,
            Winner::Player(Player::Red) | Winner::Player(Player::Yellow) | Winner::Draw
        ));
        // The input state is untouched
        assert_eq!(start, GameState::empty(Player::Red));
    }
}

#[test]
fn test_random_policy_is_reproducible() {
    let policy = RandomPolicy::new();
    let start = GameState::empty(Player::Yellow);

    let results_a: Vec<Winner> = {
        let mut rng = StdRng::seed_from_u64(1234);
        (0..30).map(|_| policy.simulate(&start, &mut rng).unwrap()).collect()
    };
    let results_b: Vec<Winner> = {
        let mut rng = StdRng::seed_from_u64(1234);
        (0..30).map(|_| policy.simulate(&start, &mut rng).unwrap()).collect()
    };

    assert_eq!(results_a, results_b);
}

#[test]
fn test_random_policy_only_picks_legal_moves() {
    let rows = "\
RORORRO
YOYOYYO
RORORRO
YOYOYYO
RORORRO
YOYOYYO";
    let position = state(rows, Player::Red);
    let policy = RandomPolicy::new();
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..100 {
        let mv = policy.choose_move(&position, &mut rng).unwrap();
        assert!([1, 3, 6].contains(&mv.column));
    }
}

#[test]
fn test_terminal_state_returns_its_result() {
    let rows = "\
OOOOOOO
OOOOOOO
OOOOOOO
OOOOOOO
RRROOOO
YYYYOOO";
    let finished = state(rows, Player::Red);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        RandomPolicy::new().simulate(&finished, &mut rng).unwrap(),
        Winner::Player(Player::Yellow)
    );
    assert_eq!(
        CenterBiasedPolicy::new().simulate(&finished, &mut rng).unwrap(),
        Winner::Player(Player::Yellow)
    );
}

#[test]
fn test_center_biased_policy_prefers_center() {
    let policy = CenterBiasedPolicy::new();
    let mut rng = StdRng::seed_from_u64(0);

    let empty = GameState::empty(Player::Red);
    assert_eq!(policy.choose_move(&empty, &mut rng), Some(Move::new(3)));

    // Column 3 full: next preference is column 2
    let mut state = GameState::empty(Player::Red);
    for _ in 0..6 {
        state.play(Move::new(3)).unwrap();
    }
    assert_eq!(policy.choose_move(&state, &mut rng), Some(Move::new(2)));

    assert_eq!(CENTER_FIRST, [3, 2, 4, 1, 5, 0, 6]);
}

#[test]
fn test_center_biased_rollout_is_deterministic() {
    let policy = CenterBiasedPolicy::new();
    let start = GameState::empty(Player::Red);

    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(999);
    assert_eq!(
        policy.simulate(&start, &mut rng_a).unwrap(),
        policy.simulate(&start, &mut rng_b).unwrap()
    );
}

#[test]
fn test_center_biased_falls_back_to_random() {
    // A preference list that names no open column
    let policy = CenterBiasedPolicy::with_preference(vec![3]);
    let mut state = GameState::empty(Player::Red);
    for _ in 0..6 {
        state.play(Move::new(3)).unwrap();
    }

    let mut rng = StdRng::seed_from_u64(5);
    let mv = policy.choose_move(&state, &mut rng).unwrap();
    assert_ne!(mv.column, 3);
    assert!(state.is_legal_move(mv));
}

#[test]
fn test_no_move_on_a_full_board() {
    let rows = "\
RRYYRRY
YYRRYYR
RRYYRRY
YYRRYYR
RRYYRRY
YYRRYYR";
    let full = state(rows, Player::Red);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(RandomPolicy::new().choose_move(&full, &mut rng), None);
    assert_eq!(RandomPolicy::new().simulate(&full, &mut rng).unwrap(), Winner::Draw);
}

#[test]
fn test_simulation_policy_cloning() {
    let boxed: Box<dyn SimulationPolicy> = Box::new(CenterBiasedPolicy::new());
    let cloned = boxed.clone_box();
    let mut rng = StdRng::seed_from_u64(0);

    let empty = GameState::empty(Player::Yellow);
    assert_eq!(cloned.choose_move(&empty, &mut rng), Some(Move::new(3)));
}
