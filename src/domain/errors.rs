use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Ошибки доменного уровня (игрок, ставка, колесо, стол).
///
/// Все они локальные и синхронные: состояние при ошибке не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Chips, available: Chips },

    #[error("Invalid bet: {0}")]
    InvalidBet(String),

    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("Invalid state: {0}")]
    StateError(&'static str),
}
