// src/api.rs
//
// Верхнеуровневый API: входные точки моста. Каждая - линейный пайплайн
// [материализатор] → вид → подсказки → движок → записи. Ни одна ошибка
// (включая панику движка) наружу не выходит: всё сворачивается в ReadResult.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::types::ReadResult;
use crate::core::view::ImageView;
use crate::engine::{BarcodeEngine, QrEngine, RawMatch};
use crate::error::{MaterializeError, ReadError, Result};
use crate::format::BarcodeFormats;
use crate::hints::{DecodeHints, MAX_SYMBOLS_MULTI, MAX_SYMBOLS_SINGLE};
use crate::materialize::{ImageCrateMaterializer, ImageMaterializer};

/// Мост: материализатор и движок внедряются, состояния между вызовами нет.
#[derive(Clone, Debug, Default)]
pub struct BarcodeReader<M = ImageCrateMaterializer, E = QrEngine> {
    materializer: M,
    engine: E,
}

impl BarcodeReader {
    /// `image` + `rqrr`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M, E> BarcodeReader<M, E>
where
    M: ImageMaterializer,
    E: BarcodeEngine,
{
    #[inline]
    pub fn with_parts(materializer: M, engine: E) -> Self {
        Self { materializer, engine }
    }

    #[inline]
    pub fn materializer(&self) -> &M {
        &self.materializer
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Один результат из сжатой картинки (PNG/JPEG/...).
    ///
    /// Не распаковалась (или декодер паниковал) - одна запись с ошибкой
    /// `"Error loading image"`, движок не вызывается. Ничего не нашли -
    /// запись по умолчанию.
    pub fn read_barcode_from_image(&self, bytes: &[u8], try_harder: bool, format: &str) -> ReadResult {
        let materializer = &self.materializer;
        let loaded = panic::catch_unwind(AssertUnwindSafe(|| materializer.materialize(bytes))).unwrap_or_else(|payload| {
            tracing::error!(panic = panic_message(&*payload), "image materializer panicked");
            Err(MaterializeError::Panicked)
        });
        let image = match loaded {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(error = %e, len = bytes.len(), "image materialization failed");
                return ReadResult::failure(ReadError::LoadImage(e).to_string());
            }
        };
        // буфер живёт до конца функции и освобождается своим Drop
        let results = self.read_barcodes_from_rgbx(
            image.pixels(),
            image.width,
            image.height,
            try_harder,
            format,
            MAX_SYMBOLS_SINGLE,
        );
        first_or_default(results)
    }

    /// Один результат из RGBX-пиксмапа хоста.
    pub fn read_barcode_from_pixmap(&self, pixels: &[u8], width: usize, height: usize, try_harder: bool, format: &str) -> ReadResult {
        first_or_default(self.read_barcodes_from_rgbx(pixels, width, height, try_harder, format, MAX_SYMBOLS_SINGLE))
    }

    /// Все результаты (до 255) из RGBX-пиксмапа, в порядке выдачи движка.
    pub fn read_barcodes_from_pixmap(&self, pixels: &[u8], width: usize, height: usize, try_harder: bool, format: &str) -> Vec<ReadResult> {
        self.read_barcodes_from_rgbx(pixels, width, height, try_harder, format, MAX_SYMBOLS_MULTI)
    }

    /// Общая часть всех входных точек для готового вида.
    /// При отказе - ровно одна запись с ошибкой.
    pub fn read_barcodes_from_view(&self, view: &ImageView<'_>, try_harder: bool, format: &str, max_symbols: usize) -> Vec<ReadResult> {
        match self.try_read_barcodes(view, try_harder, format, max_symbols) {
            Ok(matches) => matches.into_iter().map(ReadResult::from).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "barcode read failed");
                vec![ReadResult::failure(e.to_string())]
            }
        }
    }

    /// То же, но с типизированной ошибкой вместо записи-отказа.
    pub fn try_read_barcodes(&self, view: &ImageView<'_>, try_harder: bool, format: &str, max_symbols: usize) -> Result<Vec<RawMatch>> {
        let formats: BarcodeFormats = format.parse()?;
        let hints = DecodeHints::new(try_harder, formats, max_symbols);
        tracing::debug!(
            width = view.width(),
            height = view.height(),
            try_harder,
            formats = %formats,
            max_symbols,
            "invoking engine"
        );

        let engine = &self.engine;
        match panic::catch_unwind(AssertUnwindSafe(|| engine.read_barcodes(view, &hints))) {
            Ok(res) => Ok(res?),
            Err(payload) => {
                tracing::error!(panic = panic_message(&*payload), "engine panicked");
                Err(ReadError::Unknown)
            }
        }
    }

    fn read_barcodes_from_rgbx(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        try_harder: bool,
        format: &str,
        max_symbols: usize,
    ) -> Vec<ReadResult> {
        match ImageView::rgbx(pixels, width, height) {
            Ok(view) => self.read_barcodes_from_view(&view, try_harder, format, max_symbols),
            Err(e) => {
                tracing::warn!(error = %e, "invalid pixmap");
                vec![ReadResult::failure(ReadError::from(e).to_string())]
            }
        }
    }
}

#[inline]
fn first_or_default(results: Vec<ReadResult>) -> ReadResult {
    results.into_iter().next().unwrap_or_default()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
