//! Рулетка на один стол: колесо, игрок, ставки на цвет и номер, расчёт раунда.
//!
//! Слои:
//! - `domain` – колесо, цвета, игрок, ставка, стол и расчёт ставок;
//! - `engine` – игровая сессия поверх домена и разбор пользовательского ввода;
//! - `infra` – RNG, ID, конфиг, маппинги;
//! - `api` – команды, запросы и DTO для внешних клиентов.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
