//! Внешний API движка рулетки.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что меняет состояние (депозит, ставка, вращение);
//! - запросы (queries.rs) – только чтение;
//! - DTO (dto.rs) – сериализуемые структуры для фронта / JSON-вывода;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
