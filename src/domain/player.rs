use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::errors::DomainError;
use crate::domain::PlayerId;

/// Игрок за столом рулетки. Владеет только своим балансом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    balance: Chips,
}

impl Player {
    pub fn new(id: PlayerId, balance: Chips) -> Self {
        Self { id, balance }
    }

    /// Пополнение баланса. Всегда успешно.
    pub fn add_to_balance(&mut self, amount: Chips) {
        self.balance += amount;
    }

    /// Списание с баланса. Либо списывается вся сумма, либо ничего.
    pub fn subtract_from_balance(&mut self, amount: Chips) -> Result<(), DomainError> {
        let rest = self
            .balance
            .checked_sub(amount)
            .ok_or(DomainError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            })?;
        self.balance = rest;
        Ok(())
    }

    pub fn get_balance(&self) -> Chips {
        self.balance
    }

    pub fn can_afford(&self, amount: Chips) -> bool {
        amount <= self.balance
    }
}
