//! Материализация сжатой картинки в RGBA-буфер.
//!
//! Материализатор - внедряемая зависимость моста: в тестах подставляется
//! фейк, по умолчанию работает [`ImageCrateMaterializer`] на крейте `image`.
//! Буфер - владеющее значение; освобождается своим `Drop` на любом пути
//! выхода из входной точки.

use crate::error::MaterializeError;

/// Каналов на пиксель в материализованном буфере (RGBA/RGBX).
pub const CHANNELS: usize = 4;

/// Распакованная картинка: владеющий буфер + размеры.
#[derive(Clone, Debug)]
pub struct Materialized<B> {
    pub buffer: B,
    pub width: usize,
    pub height: usize,
}

impl<B: AsRef<[u8]>> Materialized<B> {
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}

pub trait ImageMaterializer {
    /// Владелец пикселей. Освобождение - его `Drop`.
    type Buffer: AsRef<[u8]>;

    /// Распаковать `bytes` в 4-канальный буфер.
    fn materialize(&self, bytes: &[u8]) -> Result<Materialized<Self::Buffer>, MaterializeError>;
}

/// PNG/JPEG/GIF/BMP через `image::load_from_memory`, всегда в RGBA8.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateMaterializer;

impl ImageMaterializer for ImageCrateMaterializer {
    type Buffer = Vec<u8>;

    fn materialize(&self, bytes: &[u8]) -> Result<Materialized<Vec<u8>>, MaterializeError> {
        if bytes.is_empty() {
            return Err(MaterializeError::Empty);
        }
        let rgba = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);
        let buffer = rgba.into_raw();
        debug_assert_eq!(buffer.len(), width * height * CHANNELS);
        tracing::debug!(width, height, "image materialized");
        Ok(Materialized { buffer, width, height })
    }
}
