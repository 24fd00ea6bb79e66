use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DomainError, PlayerId};
use crate::engine::{EngineError, ValidationError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiError {
    /// Неправильные входные данные (не число, неизвестный цвет и т.п.).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Не хватает денег на балансе.
    #[error("Insufficient balance: {0}")]
    InsufficientBalance(String),

    /// Игрок не найден.
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Внутренняя ошибка.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Domain(DomainError::InsufficientBalance { .. })
            | EngineError::BetExceedsBalance { .. } => ApiError::InsufficientBalance(err.to_string()),
            EngineError::Domain(DomainError::InvalidBet(_))
            | EngineError::ZeroAmount
            | EngineError::AmountTooLarge { .. } => ApiError::BadRequest(err.to_string()),
            EngineError::Domain(DomainError::StateError(_)) => ApiError::Internal(err.to_string()),
            EngineError::Domain(DomainError::PlayerNotFound(id)) => ApiError::PlayerNotFound(id),
            EngineError::NoPendingBets | EngineError::TooManyBets(_) => {
                ApiError::InvalidCommand(err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
