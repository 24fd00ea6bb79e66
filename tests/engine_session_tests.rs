// tests/engine_session_tests.rs
//
// GameSession: депозиты, ставки с проверкой баланса, раунды.

use roulette_engine::domain::{Chips, Color, DomainError, Selection};
use roulette_engine::engine::{EngineError, GameSession};
use roulette_engine::infra::{RouletteConfig, ScriptedRng};

fn start(deposit: u64) -> GameSession {
    GameSession::start(RouletteConfig::default(), Chips(deposit)).expect("session starts")
}

#[test]
fn start_validates_initial_deposit() {
    assert_eq!(
        GameSession::start(RouletteConfig::default(), Chips::ZERO).err(),
        Some(EngineError::ZeroAmount)
    );
    assert!(matches!(
        GameSession::start(RouletteConfig::default(), Chips(1_000_001)),
        Err(EngineError::AmountTooLarge { .. })
    ));

    let session = start(1_000_000);
    assert_eq!(session.balance(), Chips(1_000_000));
    assert!(session.pending_bets().is_empty());
    assert_eq!(session.last_outcome(), None);
}

#[test]
fn deposit_adds_to_balance() {
    let mut session = start(100);
    assert_eq!(session.deposit(Chips(50)), Ok(Chips(150)));
    assert_eq!(session.deposit(Chips::ZERO), Err(EngineError::ZeroAmount));
    assert_eq!(session.balance(), Chips(150));
}

#[test]
fn place_bet_debits_balance_and_queues_bet() {
    let mut session = start(1000);

    let bet = session
        .place_bet(Chips(100), Selection::Color(Color::Red))
        .expect("bet accepted")
        .clone();
    assert_eq!(bet.amount(), Chips(100));
    assert_eq!(bet.player_id(), session.player().id);

    session.place_bet(Chips(50), Selection::Number(17)).unwrap();

    assert_eq!(session.balance(), Chips(850));
    assert_eq!(session.pending_bets().len(), 2);
    assert_eq!(session.table().pending_total(), Chips(150));
}

#[test]
fn bet_over_balance_is_rejected_without_debit() {
    let mut session = start(10);

    let err = session
        .place_bet(Chips(15), Selection::Color(Color::Black))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::BetExceedsBalance {
            amount: Chips(15),
            balance: Chips(10),
        }
    );
    assert_eq!(session.balance(), Chips(10));
    assert!(session.pending_bets().is_empty());
}

#[test]
fn invalid_number_is_rejected_before_debit() {
    let mut session = start(100);

    let err = session.place_bet(Chips(10), Selection::Number(40)).unwrap_err();
    assert!(matches!(err, EngineError::Domain(DomainError::InvalidBet(_))));
    assert_eq!(session.balance(), Chips(100));
    assert!(session.pending_bets().is_empty());
}

#[test]
fn bet_limit_per_round() {
    let config = RouletteConfig {
        max_bets_per_round: 2,
        ..RouletteConfig::default()
    };
    let mut session = GameSession::start(config, Chips(100)).unwrap();

    session.place_bet(Chips(1), Selection::Number(1)).unwrap();
    session.place_bet(Chips(1), Selection::Number(2)).unwrap();
    assert_eq!(
        session.place_bet(Chips(1), Selection::Number(3)).unwrap_err(),
        EngineError::TooManyBets(2)
    );
    assert_eq!(session.balance(), Chips(98));
}

#[test]
fn play_round_without_bets_fails() {
    let mut session = start(100);
    assert_eq!(
        session.play_round(&mut ScriptedRng::always(3)).unwrap_err(),
        EngineError::NoPendingBets
    );
    assert_eq!(session.table().rounds_played(), 0);
}

/// Сценарий: 1000, 100 на red, 50 на 17, выпало 17 -> 2600.
#[test]
fn full_round_with_mixed_bets() {
    let mut session = start(1000);
    session.place_bet(Chips(100), Selection::Color(Color::Red)).unwrap();
    session.place_bet(Chips(50), Selection::Number(17)).unwrap();

    let summary = session.play_round(&mut ScriptedRng::always(17)).unwrap();

    assert_eq!(summary.round_id, 1);
    assert_eq!(summary.net(), 1600);
    assert_eq!(session.balance(), Chips(2600));
    assert!(session.pending_bets().is_empty());

    let last = session.last_outcome().expect("wheel was spun");
    assert_eq!((last.position, last.color), (17, Color::Black));
}

#[test]
fn all_in_and_broke() {
    let mut session = start(40);
    assert!(session.is_all_in(Chips(40)));
    assert!(!session.is_all_in(Chips(39)));

    session.place_bet(Chips(40), Selection::Color(Color::Red)).unwrap();
    assert!(session.is_broke());
    assert!(!session.is_all_in(Chips::ZERO));

    session.play_round(&mut ScriptedRng::always(2)).unwrap();
    assert!(session.is_broke());

    session.deposit(Chips(25)).unwrap();
    assert!(!session.is_broke());
}

#[test]
fn several_rounds_keep_counting() {
    let mut session = start(1000);
    let mut rng = ScriptedRng::new([1, 2, 0]);

    for expected_round in 1..=3u64 {
        session.place_bet(Chips(10), Selection::Color(Color::Red)).unwrap();
        let summary = session.play_round(&mut rng).unwrap();
        assert_eq!(summary.round_id, expected_round);
    }

    // red выиграл один раз из трёх: 1000 - 30 + 20.
    assert_eq!(session.balance(), Chips(990));
    assert_eq!(session.table().rounds_played(), 3);
}
