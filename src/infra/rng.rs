use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (`thread_rng`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn next_position(&mut self, slots: u8) -> u8 {
        if slots == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..slots)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed даёт одинаковую последовательность вращений.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn next_position(&mut self, slots: u8) -> u8 {
        if slots == 0 {
            return 0;
        }
        self.inner.gen_range(0..slots)
    }
}

/// Заранее заданные исходы: "подкрученное" колесо для тестов и демо.
///
/// Позиции выдаются по очереди, после конца списка – снова с начала.
/// Пустой сценарий всегда даёт 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<u8>,
}

impl ScriptedRng {
    pub fn new(positions: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: positions.into_iter().collect(),
        }
    }

    /// Всегда одна и та же позиция.
    pub fn always(position: u8) -> Self {
        Self::new([position])
    }
}

impl RandomSource for ScriptedRng {
    fn next_position(&mut self, slots: u8) -> u8 {
        let Some(next) = self.script.pop_front() else {
            return 0;
        };
        self.script.push_back(next);
        if slots == 0 {
            0
        } else {
            next % slots
        }
    }
}
