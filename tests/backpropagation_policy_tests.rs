use connect_four_mcts::{
    policy::backpropagation::{BackpropagationPolicy, StandardPolicy},
    GameState, Player, SearchNode,
};

#[test]
fn test_standard_policy_update() {
    let state = GameState::empty(Player::Red);
    let mut node = SearchNode::root(&state);
    let policy = StandardPolicy::new();

    // Initial state
    assert_eq!(node.visits(), 0);
    assert_eq!(node.mean_value(), None);

    policy.update_stats(&mut node, 1.0);
    assert_eq!(node.visits(), 1);
    assert_eq!(node.total_value(), 1.0);

    policy.update_stats(&mut node, -1.0);
    policy.update_stats(&mut node, 0.0);
    policy.update_stats(&mut node, -1.0);

    assert_eq!(node.visits(), 4);
    assert_eq!(node.total_value(), -1.0);
    assert_eq!(node.mean_value(), Some(-0.25));
}

#[test]
fn test_negative_values_are_kept() {
    let state = GameState::empty(Player::Yellow);
    let mut node = SearchNode::root(&state);
    let policy = StandardPolicy::new();

    for _ in 0..10 {
        policy.update_stats(&mut node, -1.0);
    }

    assert_eq!(node.mean_value(), Some(-1.0));
}

#[test]
fn test_boxed_policy_clone() {
    let boxed: Box<dyn BackpropagationPolicy> = Box::new(StandardPolicy::new());
    let cloned = boxed.clone_box();

    let state = GameState::empty(Player::Red);
    let mut node = SearchNode::root(&state);
    boxed.update_stats(&mut node, 1.0);
    cloned.update_stats(&mut node, 0.0);

    assert_eq!(node.visits(), 2);
    assert_eq!(node.mean_value(), Some(0.5));
}
