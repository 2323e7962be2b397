//! Удобные re-export'ы: `use ultracode_reader::prelude::*;`.

pub use crate::api::BarcodeReader;
pub use crate::core::types::{Point, Position, ReadResult};
pub use crate::core::view::{ImageFormat, ImageView};
pub use crate::engine::{BarcodeEngine, QrEngine, RawMatch};
pub use crate::error::{EngineError, FormatError, MaterializeError, ReadError, ViewError, LOAD_IMAGE_ERROR};
pub use crate::format::{BarcodeFormat, BarcodeFormats};
pub use crate::hints::{DecodeHints, MAX_SYMBOLS_MULTI, MAX_SYMBOLS_SINGLE};
pub use crate::materialize::{ImageCrateMaterializer, ImageMaterializer, Materialized};
