use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::errors::DomainError;
use crate::domain::player::Player;
use crate::domain::wheel::{Color, Position, SpinOutcome, MAX_POSITION};
use crate::domain::PlayerId;

/// Коэффициент для красного/чёрного.
pub const EVEN_COLOR_ODDS: u64 = 2;

/// Коэффициент для зелёного и для любого номера.
pub const SINGLE_SLOT_ODDS: u64 = 35;

/// Тип ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BetKind {
    Color,
    Number,
}

/// На что поставлено: либо цвет, либо конкретный номер.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Selection {
    Color(Color),
    Number(Position),
}

impl Selection {
    pub fn kind(&self) -> BetKind {
        match self {
            Selection::Color(_) => BetKind::Color,
            Selection::Number(_) => BetKind::Number,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Color(c) => write!(f, "{c}"),
            Selection::Number(n) => write!(f, "number {n}"),
        }
    }
}

/// Ставка. После создания не меняется.
///
/// Сумма к моменту создания уже списана с игрока вызывающим кодом,
/// сама ставка ничего не списывает – только начисляет выигрыш.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bet {
    amount: Chips,
    player_id: PlayerId,
    selection: Selection,
}

impl Bet {
    pub fn new(amount: Chips, player_id: PlayerId, selection: Selection) -> Result<Self, DomainError> {
        if amount.is_zero() {
            return Err(DomainError::InvalidBet("amount must be positive".into()));
        }
        if let Selection::Number(n) = selection {
            if n > MAX_POSITION {
                return Err(DomainError::InvalidBet(format!(
                    "number {n} is outside 0..={MAX_POSITION}"
                )));
            }
        }
        Ok(Self {
            amount,
            player_id,
            selection,
        })
    }

    pub fn on_color(amount: Chips, player_id: PlayerId, color: Color) -> Result<Self, DomainError> {
        Self::new(amount, player_id, Selection::Color(color))
    }

    pub fn on_number(amount: Chips, player_id: PlayerId, number: Position) -> Result<Self, DomainError> {
        Self::new(amount, player_id, Selection::Number(number))
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn kind(&self) -> BetKind {
        self.selection.kind()
    }

    /// Коэффициент выплаты при выигрыше.
    pub fn odds(&self) -> u64 {
        match self.selection {
            Selection::Color(Color::Green) => SINGLE_SLOT_ODDS,
            Selection::Color(_) => EVEN_COLOR_ODDS,
            Selection::Number(_) => SINGLE_SLOT_ODDS,
        }
    }

    /// Цветовая ставка сравнивается только с цветом, номерная – только с позицией.
    pub fn is_winner(&self, outcome: SpinOutcome) -> bool {
        match self.selection {
            Selection::Color(c) => c == outcome.color,
            Selection::Number(n) => n == outcome.position,
        }
    }

    /// Сколько будет начислено при данном исходе (без изменения игрока).
    pub fn winnings(&self, outcome: SpinOutcome) -> Chips {
        if self.is_winner(outcome) {
            self.amount.times(self.odds())
        } else {
            Chips::ZERO
        }
    }

    /// Начислить выигрыш игроку. Возвращает начисленную сумму.
    ///
    /// Проигравшая ставка игрока не трогает вообще.
    /// Повторный вызов с тем же исходом начислит выигрыш ещё раз.
    pub fn payout(&self, player: &mut Player, outcome: SpinOutcome) -> Chips {
        let winnings = self.winnings(outcome);
        if !winnings.is_zero() {
            player.add_to_balance(winnings);
        }
        winnings
    }
}
