//! Доменная модель рулетки: колесо, цвета, игрок, ставки, стол.

pub mod bet;
pub mod chips;
pub mod errors;
pub mod player;
pub mod table;
pub mod wheel;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type TableId = u64;
pub type RoundId = u64;

/// RNG интерфейс для колеса.
/// Реализации лежат в infra (обёртки над `rand` и заскриптованный RNG для тестов).
pub trait RandomSource {
    /// Равновероятное значение из `0..slots`.
    fn next_position(&mut self, slots: u8) -> u8;
}

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Bet и т.п.
pub use bet::*;
pub use chips::*;
pub use errors::*;
pub use player::*;
pub use table::*;
pub use wheel::*;
