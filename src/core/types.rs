// src/core/types.rs
//
// Общие типы результата, независимые от конкретного движка.

use serde::Serialize;

use crate::engine::RawMatch;

/// Точка в пиксельных координатах исходного изображения.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Четырёхугольник символа.
///
/// Порядок углов - часть публичного контракта:
/// topLeft, topRight, bottomRight, bottomLeft (по часовой стрелке
/// относительно самого символа, а не кадра).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Position {
    #[inline]
    pub const fn new(top_left: Point, top_right: Point, bottom_right: Point, bottom_left: Point) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Углы в контрактном порядке.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

impl From<[Point; 4]> for Position {
    #[inline]
    fn from(c: [Point; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Плоская запись для хоста.
///
/// Либо успех (`format`/`text` заполнены, `error` пуст), либо отказ
/// (`error` заполнен, остальное пусто, `position` нулевая). Запись по
/// умолчанию (всё пусто) означает «ничего не найдено».
/// Порядок полей сериализации фиксирован.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ReadResult {
    pub format: String,
    pub text: String,
    pub error: String,
    pub position: Position,
}

impl ReadResult {
    /// Запись-отказ с текстом ошибки.
    #[inline]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_empty() && !self.format.is_empty()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.error.is_empty()
    }
}

impl From<RawMatch> for ReadResult {
    fn from(m: RawMatch) -> Self {
        Self {
            format: m.format.to_string(),
            text: m.text,
            error: String::new(),
            position: m.position,
        }
    }
}
