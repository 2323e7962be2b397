//! WebAssembly-биндинги для JS-хоста.
//!
//! Три функции с именами исходного JS-API. Буферы приходят срезами
//! (`Uint8Array`), длина проверяется видом, а не берётся на веру.
//! Результаты - экспортируемые классы с геттерами по форме
//! `{ format, text, error, position: { topLeft, topRight, bottomRight, bottomLeft } }`.
//!
//! Под `wasm32-unknown-unknown` паника всегда `abort`: `catch_unwind` в
//! [`BarcodeReader`] там ничего не ловит, и паника движка или декодера
//! картинки роняет экземпляр (JS получает `RuntimeError: unreachable`)
//! вместо записи `"Unknown error"`.

use wasm_bindgen::prelude::*;

use crate::api::BarcodeReader;
use crate::core::types::{Point, Position, ReadResult};

#[wasm_bindgen(js_name = "Point")]
#[derive(Clone, Copy, Debug)]
pub struct JsPoint {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for JsPoint {
    #[inline]
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[wasm_bindgen(js_name = "Position")]
#[derive(Clone, Copy, Debug)]
pub struct JsPosition {
    inner: Position,
}

#[wasm_bindgen(js_class = "Position")]
impl JsPosition {
    #[wasm_bindgen(getter = topLeft)]
    pub fn top_left(&self) -> JsPoint {
        self.inner.top_left.into()
    }

    #[wasm_bindgen(getter = topRight)]
    pub fn top_right(&self) -> JsPoint {
        self.inner.top_right.into()
    }

    #[wasm_bindgen(getter = bottomRight)]
    pub fn bottom_right(&self) -> JsPoint {
        self.inner.bottom_right.into()
    }

    #[wasm_bindgen(getter = bottomLeft)]
    pub fn bottom_left(&self) -> JsPoint {
        self.inner.bottom_left.into()
    }
}

#[wasm_bindgen(js_name = "ReadResult")]
#[derive(Clone, Debug)]
pub struct JsReadResult {
    inner: ReadResult,
}

#[wasm_bindgen(js_class = "ReadResult")]
impl JsReadResult {
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> String {
        self.inner.error.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn position(&self) -> JsPosition {
        JsPosition {
            inner: self.inner.position,
        }
    }
}

impl From<ReadResult> for JsReadResult {
    #[inline]
    fn from(inner: ReadResult) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen(js_name = "readBarcodeFromImage")]
pub fn read_barcode_from_image(buffer: &[u8], try_harder: bool, format: &str) -> JsReadResult {
    BarcodeReader::new()
        .read_barcode_from_image(buffer, try_harder, format)
        .into()
}

#[wasm_bindgen(js_name = "readBarcodeFromPixmap")]
pub fn read_barcode_from_pixmap(buffer: &[u8], width: u32, height: u32, try_harder: bool, format: &str) -> JsReadResult {
    BarcodeReader::new()
        .read_barcode_from_pixmap(buffer, width as usize, height as usize, try_harder, format)
        .into()
}

#[wasm_bindgen(js_name = "readBarcodesFromPixmap")]
pub fn read_barcodes_from_pixmap(buffer: &[u8], width: u32, height: u32, try_harder: bool, format: &str) -> Vec<JsReadResult> {
    BarcodeReader::new()
        .read_barcodes_from_pixmap(buffer, width as usize, height as usize, try_harder, format)
        .into_iter()
        .map(JsReadResult::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters_follow_record() {
        let r = ReadResult {
            format: "QRCode".into(),
            text: "x".into(),
            error: String::new(),
            position: Position::new(Point::new(1, 1), Point::new(9, 1), Point::new(9, 9), Point::new(1, 9)),
        };
        let js = JsReadResult::from(r);
        assert_eq!(js.format(), "QRCode");
        assert_eq!(js.position().top_right().x, 9);
        assert_eq!(js.position().bottom_left().y, 9);
    }

    #[test]
    fn garbage_image_reports_load_error() {
        let r = read_barcode_from_image(b"nope", false, "");
        assert_eq!(r.error(), "Error loading image");
    }
}
