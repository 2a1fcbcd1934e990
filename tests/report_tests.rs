use connect_four_mcts::{
    decide,
    report::{format_value, write_report},
    Algorithm, Decision, GameState, Move, Player, SearchConfig, TraceEvent, Verbosity, Winner,
};
use rand::{rngs::StdRng, SeedableRng};

fn render(initial: &GameState, decision: &Decision, verbosity: Verbosity) -> String {
    let mut out = Vec::new();
    write_report(&mut out, initial, decision, verbosity).unwrap();
    String::from_utf8(out).unwrap()
}

fn sample_decision() -> Decision {
    let mut decision = Decision::no_move(Algorithm::FlatMonteCarlo);
    decision.chosen = Some(Move::new(3));
    decision.column_values = [
        Some(0.25),
        None,
        Some(-0.5),
        Some(0.876),
        Some(-0.0),
        Some(1.0),
        Some(-1.0),
    ];
    decision
}

#[test]
fn test_brief_report_lines() {
    let report = render(
        &GameState::empty(Player::Red),
        &sample_decision(),
        Verbosity::Brief,
    );

    let expected = "\
Column 1: 0.25
Column 2: Null
Column 3: -0.50
Column 4: 0.88
Column 5: 0.00
Column 6: 1.00
Column 7: -1.00
FINAL Move selected: 4
";
    assert_eq!(report, expected);
}

#[test]
fn test_silent_report_prints_only_the_move() {
    let report = render(
        &GameState::empty(Player::Red),
        &sample_decision(),
        Verbosity::None,
    );
    assert_eq!(report, "FINAL Move selected: 4\n");

    let none = Decision::no_move(Algorithm::Uct);
    let report = render(&GameState::empty(Player::Red), &none, Verbosity::None);
    assert_eq!(report, "FINAL Move selected: None\n");
}

#[test]
fn test_verbose_report_prints_trace_first() {
    let mut decision = sample_decision();
    decision.algorithm = Algorithm::Uct;
    decision.trace = vec![
        TraceEvent::SelectionScore {
            mv: Move::new(0),
            score: 1.23456,
        },
        TraceEvent::MoveSelected(Move::new(0)),
        TraceEvent::NodeAdded(Move::new(4)),
        TraceEvent::TerminalValue(-1),
    ];

    let report = render(&GameState::empty(Player::Red), &decision, Verbosity::Verbose);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        &lines[..4],
        &[
            "V1: 1.23",
            "Move selected: 1",
            "NODE ADDED",
            "TERMINAL NODE VALUE: -1",
        ]
    );
    assert_eq!(lines[4], "Column 1: 0.25");
    assert_eq!(lines.last(), Some(&"FINAL Move selected: 4"));
    assert_eq!(lines.len(), 4 + 7 + 1);
}

#[test]
fn test_negative_zero_prints_as_zero() {
    assert_eq!(format_value(-0.0), "0.00");
    assert_eq!(format_value(0.006), "0.01");
    assert_eq!(format_value(2.0 / 3.0), "0.67");
}

#[test]
fn test_uniform_random_report() {
    let start = GameState::empty(Player::Red);
    let config = SearchConfig::default()
        .with_algorithm(Algorithm::UniformRandom)
        .with_simulations(0);
    let decision = decide(&start, &config, &mut StdRng::seed_from_u64(3)).unwrap();
    let record = decision.game.clone().unwrap();

    let brief = render(&start, &decision, Verbosity::Brief);
    let lines: Vec<&str> = brief.lines().collect();
    assert_eq!(
        lines[0],
        "Starting Connect Four game with Uniform Random strategy..."
    );
    assert!(lines[1..7].iter().all(|line| *line == "OOOOOOO"));
    assert_eq!(
        lines[7],
        format!("FINAL Move selected: {}", decision.chosen.unwrap())
    );
    assert_eq!(
        lines[8],
        format!("Total moves played: {}", record.moves.len())
    );
    assert_eq!(lines[9], format!("Final result: {}", record.result));
    assert_eq!(lines.len(), 10);

    let verbose = render(&start, &decision, Verbosity::Verbose);
    let played = verbose
        .lines()
        .filter(|line| line.contains(" played column "))
        .count();
    // a winning move shows up only in the result line
    let expected = match record.result {
        Winner::Player(_) => record.moves.len() - 1,
        Winner::Draw => record.moves.len(),
    };
    assert_eq!(played, expected);

    let first = record.moves[0];
    assert!(verbose.contains(&format!("\n\n{} played column {}\n", first.0, first.1)));
}

#[test]
fn test_uniform_random_report_without_a_game() {
    let decision = Decision::no_move(Algorithm::UniformRandom);
    let report = render(&GameState::empty(Player::Red), &decision, Verbosity::None);
    assert_eq!(report, "FINAL Move selected: None\n");
}

#[test]
fn test_verbose_game_report_stops_before_the_winning_move() {
    let start: GameState = GameState::new(
        "\
OOOOOOO
OOOOOOO
OOOOOOO
OOOOOOO
RRROOOO
YYYOOOO"
            .parse()
            .unwrap(),
        Player::Yellow,
    );
    let mut decision = Decision::no_move(Algorithm::UniformRandom);
    decision.chosen = Some(Move::new(4));
    decision.game = Some(connect_four_mcts::GameRecord {
        moves: vec![
            (Player::Yellow, Move::new(4)),
            (Player::Red, Move::new(3)),
            (Player::Yellow, Move::new(5)),
            (Player::Red, Move::new(3)),
        ],
        result: Winner::Player(Player::Red),
    });

    let report = render(&start, &decision, Verbosity::Verbose);
    let played: Vec<&str> = report
        .lines()
        .filter(|line| line.contains(" played column "))
        .collect();

    assert_eq!(
        played,
        vec!["Y played column 5", "R played column 4", "Y played column 6"]
    );
    assert!(report.ends_with(
        "FINAL Move selected: 5\nTotal moves played: 4\nFinal result: R wins\n"
    ));
}
