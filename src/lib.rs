#![cfg_attr(not(feature = "wasm"), forbid(unsafe_code))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Публичные модули
pub mod api;         // входные точки моста: BarcodeReader
pub mod core;        // вид на пиксели, ReadResult/Position
pub mod engine;      // трейт движка + QR-движок на rqrr
pub mod error;       // ошибки по слоям (thiserror)
pub mod format;      // символики и разбор фильтра
pub mod hints;       // DecodeHints
pub mod materialize; // сжатая картинка → RGBA
pub mod prelude;     // удобные re-export'ы

#[cfg(feature = "wasm")]
pub mod wasm;        // wasm-bindgen обёртки для JS-хоста

// Реэкспорт основных типов в корень
pub use crate::api::BarcodeReader;
pub use crate::core::types::{Point, Position, ReadResult};
pub use crate::core::view::{ImageFormat, ImageView};
pub use crate::format::{BarcodeFormat, BarcodeFormats};

// Быстрый «сахар» поверх BarcodeReader по умолчанию (image + rqrr).
// Своё окружение (фейковый материализатор, другой движок) - через BarcodeReader::with_parts.

/// Один результат из сжатой картинки (PNG/JPEG/GIF/BMP).
#[inline]
pub fn read_barcode_from_image(bytes: &[u8], try_harder: bool, format: &str) -> ReadResult {
    BarcodeReader::new().read_barcode_from_image(bytes, try_harder, format)
}

/// Один результат из RGBX-пиксмапа.
#[inline]
pub fn read_barcode_from_pixmap(pixels: &[u8], width: usize, height: usize, try_harder: bool, format: &str) -> ReadResult {
    BarcodeReader::new().read_barcode_from_pixmap(pixels, width, height, try_harder, format)
}

/// Все результаты (до 255) из RGBX-пиксмапа.
#[inline]
pub fn read_barcodes_from_pixmap(pixels: &[u8], width: usize, height: usize, try_harder: bool, format: &str) -> Vec<ReadResult> {
    BarcodeReader::new().read_barcodes_from_pixmap(pixels, width, height, try_harder, format)
}
