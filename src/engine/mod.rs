//! Контракт движка распознавания.
//!
//! Мост не содержит логики символик: он отдаёт [`ImageView`] и
//! [`DecodeHints`] реализации [`BarcodeEngine`] и получает сырые совпадения.
//! В комплекте один движок - [`QrEngine`] поверх `rqrr`.

mod qr;

pub use qr::QrEngine;

use crate::core::types::Position;
use crate::core::view::ImageView;
use crate::error::EngineError;
use crate::format::BarcodeFormat;
use crate::hints::DecodeHints;

/// Одно совпадение в том виде, как его вернул движок.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMatch {
    pub format: BarcodeFormat,
    pub text: String,
    /// Углы: topLeft, topRight, bottomRight, bottomLeft.
    pub position: Position,
}

pub trait BarcodeEngine {
    /// Пакетное чтение. Порядок результатов - порядок выдачи движка;
    /// не больше `hints.max_number_of_symbols()` записей.
    fn read_barcodes(&self, view: &ImageView<'_>, hints: &DecodeHints) -> Result<Vec<RawMatch>, EngineError>;
}

impl<E: BarcodeEngine + ?Sized> BarcodeEngine for &E {
    #[inline]
    fn read_barcodes(&self, view: &ImageView<'_>, hints: &DecodeHints) -> Result<Vec<RawMatch>, EngineError> {
        (**self).read_barcodes(view, hints)
    }
}

impl<E: BarcodeEngine + ?Sized> BarcodeEngine for Box<E> {
    #[inline]
    fn read_barcodes(&self, view: &ImageView<'_>, hints: &DecodeHints) -> Result<Vec<RawMatch>, EngineError> {
        (**self).read_barcodes(view, hints)
    }
}
