use crate::api::dto::{
    BetDto, BetResultDto, OutcomeDto, PlayerDto, RoundResultDto, SelectionApi, TableViewDto,
};
use crate::domain::bet::{Bet, Selection};
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::{BetResult, RoundSummary, Table};
use crate::domain::wheel::SpinOutcome;

/// Маппинг выбора ставки между API и domain.
pub fn selection_from_api(api: SelectionApi) -> Selection {
    match api {
        SelectionApi::Color { color } => Selection::Color(color),
        SelectionApi::Number { number } => Selection::Number(number),
    }
}

pub fn selection_to_api(domain: Selection) -> SelectionApi {
    match domain {
        Selection::Color(color) => SelectionApi::Color { color },
        Selection::Number(number) => SelectionApi::Number { number },
    }
}

pub fn map_player_to_dto(player: &Player) -> PlayerDto {
    PlayerDto {
        player_id: player.id,
        balance: player.get_balance(),
    }
}

pub fn map_bet_to_dto(bet: &Bet) -> BetDto {
    BetDto {
        player_id: bet.player_id(),
        kind: bet.kind(),
        selection: selection_to_api(bet.selection()),
        amount: bet.amount(),
        odds: bet.odds(),
    }
}

pub fn map_outcome_to_dto(outcome: SpinOutcome) -> OutcomeDto {
    OutcomeDto {
        position: outcome.position,
        color: outcome.color,
    }
}

fn map_bet_result_to_dto(result: &BetResult) -> BetResultDto {
    BetResultDto {
        bet: map_bet_to_dto(&result.bet),
        won: result.won,
        credited: result.credited,
    }
}

/// `balance_after` берётся снаружи: в сводке раунда баланса игрока нет.
pub fn map_round_to_dto(summary: &RoundSummary, balance_after: Chips) -> RoundResultDto {
    RoundResultDto {
        round_id: summary.round_id,
        outcome: map_outcome_to_dto(summary.outcome),
        bets: summary.results.iter().map(map_bet_result_to_dto).collect(),
        total_wagered: summary.total_wagered,
        total_won: summary.total_won,
        net: summary.net(),
        balance_after,
    }
}

pub fn map_table_to_dto(table: &Table) -> TableViewDto {
    TableViewDto {
        table_id: table.id,
        name: table.name.clone(),
        pending_bets: table.pending_bets().iter().map(map_bet_to_dto).collect(),
        pending_total: table.pending_total(),
        rounds_played: table.rounds_played(),
        last_outcome: table.wheel().outcome().ok().map(map_outcome_to_dto),
    }
}
