//! Движок рулетки поверх доменной модели.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `GameSession::start` – создать игрока с первым депозитом
//!   - `place_bet` – проверить сумму, списать её и поставить ставку на стол
//!   - `play_round` – крутить колесо и рассчитать все ставки раунда

pub mod errors;
pub mod session;
pub mod validation;

pub use errors::EngineError;
pub use session::GameSession;
pub use validation::ValidationError;

pub use crate::domain::RandomSource;
