// src/core/view.rs
//
// Невладеющий вид на пиксельный буфер. Живёт ровно один вызов декодера:
// lifetime `'a` не даёт ему пережить буфер.

use crate::error::ViewError;
use crate::materialize::CHANNELS;

/// Раскладка пикселя в буфере.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    /// 8 бит яркости.
    Lum,
    Rgb,
    /// RGB + байт-заполнитель (альфа игнорируется). Формат входных точек.
    Rgbx,
}

impl ImageFormat {
    /// Байт на пиксель.
    #[inline]
    pub const fn pixel_stride(self) -> usize {
        match self {
            ImageFormat::Lum => 1,
            ImageFormat::Rgb => 3,
            ImageFormat::Rgbx => CHANNELS,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    format: ImageFormat,
}

impl<'a> ImageView<'a> {
    /// Проверяет размеры против реальной длины буфера; пиксели не копируются.
    pub fn new(data: &'a [u8], width: usize, height: usize, format: ImageFormat) -> Result<Self, ViewError> {
        if width == 0 || height == 0 {
            return Err(ViewError::Empty { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(format.pixel_stride()))
            .ok_or(ViewError::Overflow { width, height })?;
        if data.len() < expected {
            return Err(ViewError::BufferTooSmall {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    #[inline]
    pub fn rgbx(data: &'a [u8], width: usize, height: usize) -> Result<Self, ViewError> {
        Self::new(data, width, height, ImageFormat::Rgbx)
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width * self.format.pixel_stride()
    }

    /// Яркость пикселя (x, y). Для цветных раскладок - целочисленная
    /// взвешенная сумма 306/601/117 (>> 10).
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> u8 {
        let i = y * self.row_stride() + x * self.format.pixel_stride();
        match self.format {
            ImageFormat::Lum => self.data[i],
            ImageFormat::Rgb | ImageFormat::Rgbx => {
                let r = u32::from(self.data[i]);
                let g = u32::from(self.data[i + 1]);
                let b = u32::from(self.data[i + 2]);
                ((306 * r + 601 * g + 117 * b + 0x200) >> 10) as u8
            }
        }
    }

    /// Собрать яркостный буфер width*height (row-major).
    /// Это уже копия для движка, вид сам по себе ничего не копирует.
    pub fn to_luma(&self) -> Vec<u8> {
        if self.format == ImageFormat::Lum {
            return self.data[..self.width * self.height].to_vec();
        }
        let mut out = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.luma(x, y));
            }
        }
        out
    }
}
