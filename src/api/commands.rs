use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::{GameSession, RandomSource};
use crate::infra::mapping::{map_bet_to_dto, map_player_to_dto, map_round_to_dto, selection_from_api};

use super::dto::{CommandResponse, SelectionApi};
use super::errors::ApiError;

/// Команда верхнего уровня.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Дополнительный депозит.
    Deposit(DepositCommand),

    /// Ставка в текущий раунд.
    PlaceBet(PlaceBetCommand),

    /// Крутить колесо и рассчитать все ставки раунда.
    SpinAndPayout,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositCommand {
    pub amount: Chips,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBetCommand {
    pub amount: Chips,
    pub selection: SelectionApi,
}

/// Выполнить команду над сессией.
pub fn execute_command<R: RandomSource>(
    session: &mut GameSession,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Deposit(DepositCommand { amount }) => {
            session.deposit(amount)?;
            Ok(CommandResponse::BalanceUpdated(map_player_to_dto(session.player())))
        }

        Command::PlaceBet(PlaceBetCommand { amount, selection }) => {
            let bet = session.place_bet(amount, selection_from_api(selection))?;
            Ok(CommandResponse::BetPlaced(map_bet_to_dto(bet)))
        }

        Command::SpinAndPayout => {
            let summary = session.play_round(rng)?;
            Ok(CommandResponse::RoundFinished(map_round_to_dto(
                &summary,
                session.balance(),
            )))
        }
    }
}
