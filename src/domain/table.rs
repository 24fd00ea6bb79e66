use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::wheel::{SpinOutcome, Wheel};
use crate::domain::errors::DomainError;
use crate::domain::{PlayerId, RandomSource, RoundId, TableId};

/// Доступ к игрокам по id на время расчёта ставок.
///
/// Ставка хранит только `PlayerId`, сам игрок принадлежит сессии.
pub trait PlayerLedger {
    fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player>;

    fn contains(&mut self, player_id: PlayerId) -> bool {
        self.player_mut(player_id).is_some()
    }
}

/// Одиночная сессия: сам игрок и есть весь "реестр".
impl PlayerLedger for Player {
    fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        if self.id == player_id {
            Some(self)
        } else {
            None
        }
    }
}

impl PlayerLedger for HashMap<PlayerId, Player> {
    fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.get_mut(&player_id)
    }
}

/// Конфиг стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Сколько ставок можно сделать за один раунд.
    pub max_bets_per_round: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_bets_per_round: 16,
        }
    }
}

/// Итог одной ставки после вращения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetResult {
    pub bet: Bet,
    pub won: bool,
    /// Сколько начислено игроку (0 для проигрыша).
    pub credited: Chips,
}

/// Итог раунда: исход колеса и результаты всех ставок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub outcome: SpinOutcome,
    pub results: Vec<BetResult>,
    pub total_wagered: Chips,
    pub total_won: Chips,
}

impl RoundSummary {
    /// Чистый результат раунда: выигрыш минус поставленное.
    pub fn net(&self) -> i128 {
        self.total_won.0 as i128 - self.total_wagered.0 as i128
    }

    pub fn winners(&self) -> impl Iterator<Item = &BetResult> {
        self.results.iter().filter(|r| r.won)
    }
}

/// Стол рулетки: ставки текущего раунда + собственное колесо.
///
/// Между раундами список ставок пуст, расчёт всегда его очищает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub config: TableConfig,
    bets: Vec<Bet>,
    wheel: Wheel,
    rounds_played: u64,
}

impl Table {
    pub fn new(id: TableId, name: String, config: TableConfig) -> Self {
        Self {
            id,
            name,
            config,
            bets: Vec::new(),
            wheel: Wheel::new(),
            rounds_played: 0,
        }
    }

    /// Добавить ставку в текущий раунд. Платёжеспособность здесь не проверяется.
    pub fn place_bet(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    /// Ставки текущего раунда в порядке размещения.
    pub fn pending_bets(&self) -> &[Bet] {
        &self.bets
    }

    pub fn pending_total(&self) -> Chips {
        self.bets.iter().map(Bet::amount).sum()
    }

    pub fn has_pending_bets(&self) -> bool {
        !self.bets.is_empty()
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Единственная точка расчёта раунда:
    /// 1) крутим колесо; 2) читаем позицию и цвет;
    /// 3) рассчитываем каждую ставку; 4) очищаем список ставок.
    ///
    /// Если владелец какой-то ставки не найден в `ledger`, раунд не начинается
    /// и стол остаётся как был.
    pub fn spin_wheel_and_payout<R, L>(
        &mut self,
        rng: &mut R,
        ledger: &mut L,
    ) -> Result<RoundSummary, DomainError>
    where
        R: RandomSource,
        L: PlayerLedger + ?Sized,
    {
        if let Some(missing) = self.bets.iter().find(|b| !ledger.contains(b.player_id())) {
            return Err(DomainError::PlayerNotFound(missing.player_id()));
        }

        self.wheel.spin(rng);
        let outcome = self.wheel.outcome()?;

        let bets = std::mem::take(&mut self.bets);
        let mut results = Vec::with_capacity(bets.len());
        let mut total_wagered = Chips::ZERO;
        let mut total_won = Chips::ZERO;

        for bet in bets {
            let credited = match ledger.player_mut(bet.player_id()) {
                Some(player) => bet.payout(player, outcome),
                None => Chips::ZERO,
            };
            total_wagered += bet.amount();
            total_won += credited;
            results.push(BetResult {
                won: bet.is_winner(outcome),
                credited,
                bet,
            });
        }

        self.rounds_played += 1;

        Ok(RoundSummary {
            round_id: self.rounds_played,
            outcome,
            results,
            total_wagered,
            total_won,
        })
    }
}
