//! Разбор пользовательского ввода (суммы, номера, цвета, да/нет).
//!
//! Правила совпадают для CLI и любых других фронтов: всё приводится
//! к доменным типам или к `ValidationError` с понятным текстом.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::domain::bet::BetKind;
use crate::domain::chips::Chips;
use crate::domain::wheel::{Color, Position, MAX_POSITION};

/// Ошибка разбора ввода.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} не может быть пустым")]
    Empty { field: &'static str },

    #[error("{field} должно быть целым числом (без дробей)")]
    NotWholeNumber { field: &'static str },

    #[error("'{input}' – не число")]
    NotANumber { input: String },

    #[error("{field} должно быть больше 0")]
    NotPositive { field: &'static str },

    #[error("{field} слишком большое, максимум {max}")]
    TooLarge { field: &'static str, max: Chips },

    #[error("Номер {0} вне диапазона 0..=36")]
    OutOfRange(i64),

    #[error("'{0}' – неизвестный цвет (red/r, black/b, green/g)")]
    UnknownColor(String),

    #[error("'{0}' – неизвестный тип ставки (color/c, number/n)")]
    UnknownBetKind(String),

    #[error("'{0}' – ответьте 'y' или 'n'")]
    UnknownAnswer(String),
}

/// Общая часть для сумм и номеров: пусто / дробь / не число.
fn parse_whole(input: &str, field: &'static str) -> Result<i64, ValidationError> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if cleaned.contains('.') || cleaned.contains(',') {
        return Err(ValidationError::NotWholeNumber { field });
    }
    match cleaned.parse::<i64>() {
        Ok(value) => Ok(value),
        // Переполнение i64 – это всё ещё число, дальше оно упрётся в лимит или диапазон.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) => Err(ValidationError::NotANumber {
            input: input.to_string(),
        }),
    }
}

/// Положительная целая сумма не больше `max`.
pub fn validate_positive_amount(
    input: &str,
    field: &'static str,
    max: Chips,
) -> Result<Chips, ValidationError> {
    let value = parse_whole(input, field)?;
    if value <= 0 {
        return Err(ValidationError::NotPositive { field });
    }
    let amount = Chips(value as u64);
    if amount > max {
        return Err(ValidationError::TooLarge { field, max });
    }
    Ok(amount)
}

/// Номер на колесе, 0..=36.
pub fn validate_number_choice(input: &str) -> Result<Position, ValidationError> {
    let value = parse_whole(input, "number")?;
    if !(0..=MAX_POSITION as i64).contains(&value) {
        return Err(ValidationError::OutOfRange(value));
    }
    Ok(value as Position)
}

/// Цвет без учёта регистра. Короткие формы разбираем здесь,
/// полные названия – через `Color::from_str`.
pub fn validate_color_choice(input: &str) -> Result<Color, ValidationError> {
    let cleaned = input.trim().to_ascii_lowercase();
    match cleaned.as_str() {
        "" => Err(ValidationError::Empty { field: "color" }),
        "r" => Ok(Color::Red),
        "b" => Ok(Color::Black),
        "g" | "0" => Ok(Color::Green),
        full => full
            .parse::<Color>()
            .map_err(|_| ValidationError::UnknownColor(input.trim().to_string())),
    }
}

pub fn validate_bet_kind(input: &str) -> Result<BetKind, ValidationError> {
    let cleaned = input.trim().to_ascii_lowercase();
    match cleaned.as_str() {
        "" => Err(ValidationError::Empty { field: "bet type" }),
        "color" | "c" => Ok(BetKind::Color),
        "number" | "num" | "n" => Ok(BetKind::Number),
        _ => Err(ValidationError::UnknownBetKind(input.trim().to_string())),
    }
}

pub fn validate_yes_no(input: &str) -> Result<bool, ValidationError> {
    let cleaned = input.trim().to_ascii_lowercase();
    match cleaned.as_str() {
        "" => Err(ValidationError::Empty { field: "answer" }),
        "y" | "yes" | "yeah" | "yep" | "1" | "true" => Ok(true),
        "n" | "no" | "nope" | "0" | "false" => Ok(false),
        _ => Err(ValidationError::UnknownAnswer(input.trim().to_string())),
    }
}
