use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::RandomSource;

/// Позиция шарика на колесе (0..=36).
pub type Position = u8;

/// Количество ячеек на колесе: 0 и 1..=36.
pub const WHEEL_SLOTS: u8 = 37;

/// Максимальный номер на колесе.
pub const MAX_POSITION: Position = WHEEL_SLOTS - 1;

/// Цвет ячейки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
    Green,
}

/// Таблица позиция -> цвет. Не вычисляется по чётности:
/// на 10/11, 18/19, 28/29 чередование ломается, поэтому таблица явная.
pub static WHEEL_POSITIONS: [Color; WHEEL_SLOTS as usize] = {
    use Color::{Black, Green, Red};
    [
        Green, // 0
        Red, Black, Red, Black, Red, Black, Red, Black, Red, // 1..=9
        Black, Black, Red, Black, Red, Black, Red, Black, Red, // 10..=18
        Red, Black, Red, Black, Red, Black, Red, Black, Red, // 19..=27
        Black, Black, Red, Black, Red, Black, Red, Black, Red, // 28..=36
    ]
};

impl Color {
    /// Цвет ячейки колеса. None, если позиции нет на колесе.
    pub fn of(position: Position) -> Option<Color> {
        WHEEL_POSITIONS.get(position as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Парсинг строки вида "red", "Black", "GREEN".
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            "green" => Ok(Color::Green),
            other => Err(format!("Invalid color: {other}")),
        }
    }
}

/// Результат одного вращения: позиция и её цвет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinOutcome {
    pub position: Position,
    pub color: Color,
}

impl SpinOutcome {
    /// Исход для конкретной позиции. None, если позиции нет на колесе.
    pub fn at(position: Position) -> Option<Self> {
        Color::of(position).map(|color| Self { position, color })
    }
}

impl fmt::Display for SpinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.position, self.color.as_str().to_uppercase())
    }
}

/// Колесо рулетки. Хранит только последнюю позицию шарика, без истории.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wheel {
    ball_position: Option<Position>,
}

impl Wheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Одно равновероятное значение из 0..=36. Предыдущая позиция затирается.
    pub fn spin<R: RandomSource>(&mut self, rng: &mut R) {
        let position = rng.next_position(WHEEL_SLOTS) % WHEEL_SLOTS;
        self.ball_position = Some(position);
    }

    /// Последняя позиция шарика и её цвет.
    ///
    /// До первого вращения – `DomainError::StateError`.
    pub fn get_ball_position(&self) -> Result<(Position, Color), DomainError> {
        let position = self
            .ball_position
            .ok_or(DomainError::StateError("wheel has not been spun yet"))?;
        let color = Color::of(position)
            .ok_or(DomainError::StateError("ball position is off the wheel"))?;
        Ok((position, color))
    }

    /// То же самое, но в виде `SpinOutcome`.
    pub fn outcome(&self) -> Result<SpinOutcome, DomainError> {
        let (position, color) = self.get_ball_position()?;
        Ok(SpinOutcome { position, color })
    }

    pub fn has_spun(&self) -> bool {
        self.ball_position.is_some()
    }
}
