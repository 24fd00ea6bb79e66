use serde::{Deserialize, Serialize};

use crate::engine::GameSession;
use crate::infra::mapping::{map_outcome_to_dto, map_player_to_dto, map_table_to_dto};

use super::dto::{OutcomeDto, PlayerDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// Игрок и его баланс.
    GetPlayer,

    /// Стол: ставки текущего раунда, число сыгранных раундов.
    GetTable,

    /// Исход последнего вращения.
    GetLastOutcome,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryResponse {
    Player(PlayerDto),
    Table(TableViewDto),
    LastOutcome(Option<OutcomeDto>),
}

pub fn execute_query(session: &GameSession, query: &Query) -> QueryResponse {
    match query {
        Query::GetPlayer => QueryResponse::Player(map_player_to_dto(session.player())),
        Query::GetTable => QueryResponse::Table(map_table_to_dto(session.table())),
        Query::GetLastOutcome => {
            QueryResponse::LastOutcome(session.last_outcome().map(map_outcome_to_dto))
        }
    }
}
