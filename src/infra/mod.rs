//! Инфраструктурный слой вокруг движка рулетки:
//! - генерация ID;
//! - RNG-реализации для колеса;
//! - конфиг сессии (JSON-файл + дефолты);
//! - маппинги между domain и API.

pub mod config;
pub mod ids;
pub mod mapping;
pub mod rng;

pub use config::{ConfigError, RouletteConfig};
pub use ids::*;
pub use mapping::*;
pub use rng::*;
