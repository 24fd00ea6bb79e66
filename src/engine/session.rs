// src/engine/session.rs

use log::{debug, info};

use crate::domain::bet::{Bet, Selection};
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::{RoundSummary, Table, TableConfig};
use crate::domain::wheel::SpinOutcome;
use crate::engine::{EngineError, RandomSource};
use crate::infra::config::RouletteConfig;
use crate::infra::ids::IdGenerator;

/// Игровая сессия: один игрок + один стол, от первого депозита до выхода.
///
/// Всё, что интерфейс делает вокруг стола, живёт здесь:
/// - лимиты сумм из конфига;
/// - проверка баланса перед ставкой;
/// - списание суммы и только потом создание `Bet`.
pub struct GameSession {
    config: RouletteConfig,
    player: Player,
    table: Table,
}

impl GameSession {
    /// Начать сессию с первым депозитом.
    pub fn start(config: RouletteConfig, initial_deposit: Chips) -> Result<Self, EngineError> {
        check_amount(initial_deposit, config.max_amount)?;

        let ids = IdGenerator::new();
        let player = Player::new(ids.next_player_id(), initial_deposit);
        let table = Table::new(
            ids.next_table_id(),
            config.table_name.clone(),
            TableConfig {
                max_bets_per_round: config.max_bets_per_round,
            },
        );

        info!(
            "session started: player={} table={} deposit={}",
            player.id, table.id, initial_deposit
        );

        Ok(Self {
            config,
            player,
            table,
        })
    }

    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balance(&self) -> Chips {
        self.player.get_balance()
    }

    pub fn is_broke(&self) -> bool {
        self.balance().is_zero()
    }

    pub fn pending_bets(&self) -> &[Bet] {
        self.table.pending_bets()
    }

    /// Исход последнего вращения (None, если колесо ещё не крутили).
    pub fn last_outcome(&self) -> Option<SpinOutcome> {
        self.table.wheel().outcome().ok()
    }

    /// Ставка на весь оставшийся баланс – UI просит подтверждение.
    pub fn is_all_in(&self, amount: Chips) -> bool {
        !amount.is_zero() && amount == self.balance()
    }

    /// Дополнительный депозит. Возвращает новый баланс.
    pub fn deposit(&mut self, amount: Chips) -> Result<Chips, EngineError> {
        check_amount(amount, self.config.max_amount)?;
        self.player.add_to_balance(amount);
        info!("deposit {} -> balance {}", amount, self.balance());
        Ok(self.balance())
    }

    /// Поставить ставку в текущий раунд.
    ///
    /// Порядок: лимиты -> баланс -> валидация `Bet` -> списание -> стол.
    /// При любой ошибке баланс не меняется.
    pub fn place_bet(&mut self, amount: Chips, selection: Selection) -> Result<&Bet, EngineError> {
        check_amount(amount, self.config.max_amount)?;

        let limit = self.table.config.max_bets_per_round;
        if self.table.pending_bets().len() >= limit {
            return Err(EngineError::TooManyBets(limit));
        }

        let balance = self.balance();
        if !self.player.can_afford(amount) {
            return Err(EngineError::BetExceedsBalance { amount, balance });
        }

        let bet = Bet::new(amount, self.player.id, selection)?;
        self.player.subtract_from_balance(amount)?;
        self.table.place_bet(bet);

        debug!(
            "bet placed: {} on {} (balance {})",
            amount,
            selection,
            self.balance()
        );

        self.table
            .pending_bets()
            .last()
            .ok_or(EngineError::NoPendingBets)
    }

    /// Сыграть раунд: крутим колесо и рассчитываем все ставки.
    pub fn play_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<RoundSummary, EngineError> {
        if !self.table.has_pending_bets() {
            return Err(EngineError::NoPendingBets);
        }

        let summary = self.table.spin_wheel_and_payout(rng, &mut self.player)?;

        info!(
            "round {}: ball on {}, wagered {}, won {}, balance {}",
            summary.round_id,
            summary.outcome,
            summary.total_wagered,
            summary.total_won,
            self.balance()
        );

        Ok(summary)
    }
}

fn check_amount(amount: Chips, max: Chips) -> Result<(), EngineError> {
    if amount.is_zero() {
        return Err(EngineError::ZeroAmount);
    }
    if amount > max {
        return Err(EngineError::AmountTooLarge { amount, max });
    }
    Ok(())
}
