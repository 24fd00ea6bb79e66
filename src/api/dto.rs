use serde::{Deserialize, Serialize};

use crate::domain::bet::BetKind;
use crate::domain::chips::Chips;
use crate::domain::wheel::{Color, Position};
use crate::domain::{PlayerId, RoundId, TableId};

/// Внешнее представление выбора ставки (API-слой).
///
/// В домене маппим в `domain::bet::Selection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionApi {
    Color { color: Color },
    Number { number: Position },
}

/// DTO игрока.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub player_id: PlayerId,
    pub balance: Chips,
}

/// DTO ставки.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetDto {
    pub player_id: PlayerId,
    pub kind: BetKind,
    pub selection: SelectionApi,
    pub amount: Chips,
    pub odds: u64,
}

/// DTO исхода вращения.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDto {
    pub position: Position,
    pub color: Color,
}

/// Результат одной ставки в раунде.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResultDto {
    pub bet: BetDto,
    pub won: bool,
    pub credited: Chips,
}

/// DTO сыгранного раунда.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResultDto {
    pub round_id: RoundId,
    pub outcome: OutcomeDto,
    pub bets: Vec<BetResultDto>,
    pub total_wagered: Chips,
    pub total_won: Chips,
    /// Выигрыш минус поставленное, может быть отрицательным.
    pub net: i128,
    pub balance_after: Chips,
}

impl RoundResultDto {
    /// Была ли в раунде хоть одна выплата (чистый итог при этом может быть <= 0).
    pub fn paid_out(&self) -> bool {
        self.total_won > Chips::ZERO
    }
}

/// DTO стола.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableViewDto {
    pub table_id: TableId,
    pub name: String,
    /// Ставки текущего раунда (до вращения).
    pub pending_bets: Vec<BetDto>,
    pub pending_total: Chips,
    pub rounds_played: u64,
    pub last_outcome: Option<OutcomeDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Баланс изменился (депозит).
    BalanceUpdated(PlayerDto),

    /// Ставка принята.
    BetPlaced(BetDto),

    /// Раунд сыгран.
    RoundFinished(RoundResultDto),
}
