//! Конфиг сессии рулетки.
//!
//! Источник – JSON-файл (все поля необязательные), флаги CLI
//! перекрывают значения из файла.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Лимит сумм по умолчанию: не больше миллиона за раз.
pub const DEFAULT_MAX_AMOUNT: Chips = Chips(1_000_000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouletteConfig {
    /// Имя стола (для вывода).
    pub table_name: String,
    /// Максимальная сумма одного депозита/ставки.
    pub max_amount: Chips,
    /// Максимум ставок в одном раунде.
    pub max_bets_per_round: usize,
    /// Seed для детерминированного колеса. None – системный RNG.
    pub seed: Option<u64>,
    /// Символ валюты в выводе CLI.
    pub currency_symbol: String,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            table_name: "Roulette".to_string(),
            max_amount: DEFAULT_MAX_AMOUNT,
            max_bets_per_round: 16,
            seed: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl RouletteConfig {
    /// Прочитать конфиг из JSON-файла и провалидировать.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Файл, если указан, иначе дефолты.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_amount.is_zero() {
            return Err(ConfigError::Invalid("max_amount = 0".into()));
        }
        if self.max_bets_per_round == 0 {
            return Err(ConfigError::Invalid("max_bets_per_round = 0".into()));
        }
        Ok(())
    }

    /// Сумма с символом валюты, например `$150`.
    pub fn format_amount(&self, amount: Chips) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}
