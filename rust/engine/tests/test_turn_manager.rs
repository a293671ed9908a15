use holdem_engine::errors::GameError;
use holdem_engine::player::Player;
use holdem_engine::rules::ValidatedAction;
use holdem_engine::turn::TurnManager;

fn table(balances: &[u32]) -> Vec<Player> {
    balances
        .iter()
        .enumerate()
        .map(|(i, &b)| Player::new(i, format!("p{i}"), b))
        .collect()
}

#[test]
fn a_raise_reopens_action_for_players_who_already_checked() {
    let mut players = table(&[1000, 1000, 1000]);
    let mut tm = TurnManager::new();
    tm.start_postflop(&mut players, 0, 20);

    // action goes 1, 2, 0 after the dealer
    tm.apply_action(&mut players, 1, ValidatedAction::Check).unwrap();
    tm.apply_action(&mut players, 2, ValidatedAction::Check).unwrap();
    tm.apply_action(&mut players, 0, ValidatedAction::Bet(60)).unwrap();

    assert!(!tm.is_round_complete(&players));
    assert!(!players[1].has_acted());
    assert!(!players[2].has_acted());
    assert_eq!(tm.current_player(), Some(1));
    assert_eq!(tm.current_bet(), 60);
    assert_eq!(tm.last_raiser(), Some(0));
}

#[test]
fn checked_around_round_completes() {
    let mut players = table(&[1000, 1000, 1000]);
    let mut tm = TurnManager::new();
    tm.start_postflop(&mut players, 2, 20);

    tm.apply_action(&mut players, 0, ValidatedAction::Check).unwrap();
    tm.apply_action(&mut players, 1, ValidatedAction::Check).unwrap();
    tm.apply_action(&mut players, 2, ValidatedAction::Check).unwrap();

    assert!(tm.is_round_complete(&players));
    assert!(!tm.is_active());
}

#[test]
fn short_all_in_call_does_not_reopen_betting() {
    let mut players = table(&[1000, 1000, 60]);
    let mut tm = TurnManager::new();
    tm.start_postflop(&mut players, 2, 20);

    tm.apply_action(&mut players, 0, ValidatedAction::Bet(100)).unwrap();
    tm.apply_action(&mut players, 1, ValidatedAction::Call(100)).unwrap();
    tm.apply_action(&mut players, 2, ValidatedAction::AllIn(60)).unwrap();

    // seat 2 is below the bet but all-in; nobody must act again
    assert!(tm.is_round_complete(&players));
    assert_eq!(tm.current_bet(), 100);
    assert_eq!(tm.last_raiser(), Some(0));
    assert!(players[0].has_acted());
    assert!(players[1].has_acted());
}

#[test]
fn all_in_above_the_bet_reopens_action() {
    let mut players = table(&[1000, 1000, 500]);
    let mut tm = TurnManager::new();
    tm.start_postflop(&mut players, 2, 20);

    tm.apply_action(&mut players, 0, ValidatedAction::Bet(100)).unwrap();
    tm.apply_action(&mut players, 1, ValidatedAction::Call(100)).unwrap();
    tm.apply_action(&mut players, 2, ValidatedAction::AllIn(500)).unwrap();

    assert!(!tm.is_round_complete(&players));
    assert_eq!(tm.current_bet(), 500);
    assert_eq!(tm.last_raiser(), Some(2));
    assert!(!players[0].has_acted());
    assert!(!players[1].has_acted());
    assert_eq!(tm.current_player(), Some(0));
}

#[test]
fn preflop_blinds_set_the_bet_and_the_order() {
    let mut players = table(&[1000, 1000, 1000, 1000]);
    let mut tm = TurnManager::new();
    tm.start_preflop(&mut players, 0, 10, 20);

    assert_eq!(players[1].street_bet(), 10);
    assert_eq!(players[2].street_bet(), 20);
    assert_eq!(tm.current_bet(), 20);
    assert_eq!(tm.min_raise(), 20);
    assert_eq!(tm.current_player(), Some(3));
}

#[test]
fn big_blind_gets_the_option_after_calls() {
    let mut players = table(&[1000, 1000, 1000]);
    let mut tm = TurnManager::new();
    tm.start_preflop(&mut players, 0, 10, 20);

    tm.apply_action(&mut players, 0, ValidatedAction::Call(20)).unwrap();
    tm.apply_action(&mut players, 1, ValidatedAction::Call(10)).unwrap();

    // everyone matched, but the big blind has not acted yet
    assert!(!tm.is_round_complete(&players));
    assert_eq!(tm.current_player(), Some(2));
    tm.apply_action(&mut players, 2, ValidatedAction::Check).unwrap();
    assert!(tm.is_round_complete(&players));
}

#[test]
fn actions_out_of_turn_or_between_rounds_are_rejected() {
    let mut players = table(&[1000, 1000]);
    let mut tm = TurnManager::new();

    // no round has started
    let err = tm.apply_action(&mut players, 0, ValidatedAction::Check);
    assert_eq!(err, Err(GameError::NoBettingRound));

    tm.start_preflop(&mut players, 0, 10, 20);
    let expected = tm.current_player().unwrap();
    let wrong = 1 - expected;
    let err = tm.apply_action(&mut players, wrong, ValidatedAction::Check);
    assert_eq!(
        err,
        Err(GameError::NotPlayersTurn {
            expected,
            actual: wrong
        })
    );
    // rejection left the turn untouched
    assert_eq!(tm.current_player(), Some(expected));
}

#[test]
fn folding_down_to_one_player_ends_the_round() {
    let mut players = table(&[1000, 1000, 1000]);
    let mut tm = TurnManager::new();
    tm.start_preflop(&mut players, 0, 10, 20);

    tm.apply_action(&mut players, 0, ValidatedAction::Fold).unwrap();
    tm.apply_action(&mut players, 1, ValidatedAction::Fold).unwrap();

    assert!(tm.is_round_complete(&players));
    assert!(!players[2].is_folded());
}
