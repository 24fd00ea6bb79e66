// tests/engine_validation_tests.rs
//
// Разбор пользовательского ввода: суммы, номера, цвета, тип ставки, да/нет.

use roulette_engine::domain::{BetKind, Chips, Color};
use roulette_engine::engine::validation::*;
use roulette_engine::engine::ValidationError;

const MAX: Chips = Chips(1_000_000);

#[test]
fn positive_amount_cases() {
    let cases: [(&str, Option<u64>); 12] = [
        ("100", Some(100)),
        ("1", Some(1)),
        ("1000000", Some(1_000_000)),
        ("  100  ", Some(100)),
        ("0", None),
        ("-5", None),
        ("abc", None),
        ("", None),
        ("  ", None),
        ("10.5", None),
        ("1,000", None),
        ("1000001", None),
    ];

    for (input, expected) in cases {
        let got = validate_positive_amount(input, "test", MAX).ok().map(|c| c.0);
        assert_eq!(got, expected, "input '{input}'");
    }
}

#[test]
fn positive_amount_errors_are_specific() {
    assert_eq!(
        validate_positive_amount(" ", "bet amount", MAX),
        Err(ValidationError::Empty { field: "bet amount" })
    );
    assert_eq!(
        validate_positive_amount("10.5", "bet amount", MAX),
        Err(ValidationError::NotWholeNumber { field: "bet amount" })
    );
    assert_eq!(
        validate_positive_amount("-1", "bet amount", MAX),
        Err(ValidationError::NotPositive { field: "bet amount" })
    );
    assert!(matches!(
        validate_positive_amount("ten", "bet amount", MAX),
        Err(ValidationError::NotANumber { .. })
    ));
    assert_eq!(
        validate_positive_amount("2000000", "bet amount", MAX),
        Err(ValidationError::TooLarge {
            field: "bet amount",
            max: MAX,
        })
    );
    // Больше, чем влезает в i64: всё равно "слишком много", а не "не число".
    assert_eq!(
        validate_positive_amount("99999999999999999999", "bet amount", MAX),
        Err(ValidationError::TooLarge {
            field: "bet amount",
            max: MAX,
        })
    );
    assert_eq!(
        validate_positive_amount("-99999999999999999999", "bet amount", MAX),
        Err(ValidationError::NotPositive { field: "bet amount" })
    );
}

#[test]
fn number_choice_cases() {
    assert_eq!(validate_number_choice("0"), Ok(0));
    assert_eq!(validate_number_choice(" 36 "), Ok(36));
    assert_eq!(validate_number_choice("17"), Ok(17));
    assert_eq!(validate_number_choice("37"), Err(ValidationError::OutOfRange(37)));
    assert_eq!(validate_number_choice("-1"), Err(ValidationError::OutOfRange(-1)));
    assert!(matches!(
        validate_number_choice("99999999999999999999"),
        Err(ValidationError::OutOfRange(_))
    ));
    assert!(matches!(
        validate_number_choice("5.0"),
        Err(ValidationError::NotWholeNumber { .. })
    ));
    assert!(matches!(validate_number_choice(""), Err(ValidationError::Empty { .. })));
    assert!(matches!(
        validate_number_choice("seven"),
        Err(ValidationError::NotANumber { .. })
    ));
}

#[test]
fn color_choice_cases() {
    let cases = [
        ("red", Some(Color::Red)),
        ("RED", Some(Color::Red)),
        ("rEd", Some(Color::Red)),
        ("r", Some(Color::Red)),
        ("black", Some(Color::Black)),
        ("Black", Some(Color::Black)),
        ("b", Some(Color::Black)),
        ("green", Some(Color::Green)),
        ("GREEN", Some(Color::Green)),
        ("g", Some(Color::Green)),
        ("0", Some(Color::Green)),
        ("blue", None),
        ("", None),
        ("  ", None),
        ("yellow", None),
        ("reds", None),
        ("  Green  ", Some(Color::Green)),
    ];

    for (input, expected) in cases {
        assert_eq!(validate_color_choice(input).ok(), expected, "input '{input}'");
    }
    assert_eq!(
        validate_color_choice(" Blue "),
        Err(ValidationError::UnknownColor("Blue".to_string()))
    );
}

#[test]
fn bet_kind_cases() {
    assert_eq!(validate_bet_kind("color"), Ok(BetKind::Color));
    assert_eq!(validate_bet_kind("C"), Ok(BetKind::Color));
    assert_eq!(validate_bet_kind("number"), Ok(BetKind::Number));
    assert_eq!(validate_bet_kind("num"), Ok(BetKind::Number));
    assert_eq!(validate_bet_kind(" n "), Ok(BetKind::Number));
    assert_eq!(
        validate_bet_kind("split"),
        Err(ValidationError::UnknownBetKind("split".to_string()))
    );
}

#[test]
fn yes_no_cases() {
    for yes in ["y", "Y", "yes", "YES", "Yes", "yeah", "YEAH", "yep", "YEP", "1", "true", "TRUE"] {
        assert_eq!(validate_yes_no(yes), Ok(true), "'{yes}' should be yes");
    }
    for no in ["n", "N", "no", "NO", "No", "nope", "NOPE", "0", "false", "FALSE"] {
        assert_eq!(validate_yes_no(no), Ok(false), "'{no}' should be no");
    }
    for bad in ["maybe", "", "  ", "invalid"] {
        assert!(validate_yes_no(bad).is_err(), "'{bad}' should be rejected");
    }
}
