// src/hints.rs
//
// Подсказки декодеру на один вызов.

use crate::format::BarcodeFormats;

/// Кап для входных точек «один результат».
pub const MAX_SYMBOLS_SINGLE: usize = 1;
/// Кап для входной точки «много результатов».
pub const MAX_SYMBOLS_MULTI: usize = 255;

/// Настройки поиска.
///
/// rotate/invert/downscale не задаются по отдельности: все три всегда
/// равны `try_harder`, поэтому поля закрыты, а значения только читаются.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeHints {
    try_harder: bool,
    formats: BarcodeFormats,
    max_number_of_symbols: usize,
}

impl DecodeHints {
    #[inline]
    pub fn new(try_harder: bool, formats: BarcodeFormats, max_number_of_symbols: usize) -> Self {
        Self {
            try_harder,
            formats,
            max_number_of_symbols,
        }
    }

    #[inline]
    pub fn try_harder(&self) -> bool {
        self.try_harder
    }

    #[inline]
    pub fn try_rotate(&self) -> bool {
        self.try_harder
    }

    #[inline]
    pub fn try_invert(&self) -> bool {
        self.try_harder
    }

    #[inline]
    pub fn try_downscale(&self) -> bool {
        self.try_harder
    }

    /// Пустое множество = любые форматы.
    #[inline]
    pub fn formats(&self) -> BarcodeFormats {
        self.formats
    }

    #[inline]
    pub fn max_number_of_symbols(&self) -> usize {
        self.max_number_of_symbols
    }
}

impl Default for DecodeHints {
    fn default() -> Self {
        Self::new(false, BarcodeFormats::NONE, MAX_SYMBOLS_MULTI)
    }
}
