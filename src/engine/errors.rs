use crate::domain::{Chips, DomainError};

use thiserror::Error;

/// Ошибки движка рулетки.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Ставка {amount} превышает баланс {balance}")]
    BetExceedsBalance { amount: Chips, balance: Chips },

    #[error("Сумма должна быть больше нуля")]
    ZeroAmount,

    #[error("Сумма {amount} слишком большая, максимум {max}")]
    AmountTooLarge { amount: Chips, max: Chips },

    #[error("Нет ставок для расчёта")]
    NoPendingBets,

    #[error("Слишком много ставок в раунде (максимум {0})")]
    TooManyBets(usize),
}
