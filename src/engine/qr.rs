//! QR-движок поверх `rqrr`.
//!
//! Каскад проходов, останов на первом проходе с результатом:
//! 1) яркость как есть;
//! 2) инверсия (`try_invert`) - светлый код на тёмном фоне;
//! 3) пирамида 2× (`try_downscale`), пока длинная сторона > 500 px.
//!
//! Тихая зона не дорисовывается: детектор `rqrr` принимает искатель,
//! прижатый к краю кадра.
//!
//! `try_rotate` отдельного прохода не требует: детектор QR инвариантен к повороту.

use crate::core::types::{Point, Position};
use crate::core::view::ImageView;
use crate::engine::{BarcodeEngine, RawMatch};
use crate::error::EngineError;
use crate::format::BarcodeFormat;
use crate::hints::DecodeHints;

/// Длинная сторона, выше которой строим уменьшенные уровни.
const DOWNSCALE_THRESHOLD: usize = 500;
/// Меньше версии 1 (21 модуль) QR не бывает.
const MIN_SIDE: usize = 21;

#[derive(Clone, Copy, Debug, Default)]
pub struct QrEngine;

impl QrEngine {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl BarcodeEngine for QrEngine {
    fn read_barcodes(&self, view: &ImageView<'_>, hints: &DecodeHints) -> Result<Vec<RawMatch>, EngineError> {
        if !hints.formats().accepts(BarcodeFormat::QrCode) {
            tracing::debug!(formats = %hints.formats(), "QRCode not requested, skipping scan");
            return Ok(Vec::new());
        }
        if view.width() < MIN_SIDE || view.height() < MIN_SIDE {
            return Ok(Vec::new());
        }

        let base = Plane::from_view(view);
        let mut found = scan(&base, |p| p);

        if found.is_empty() && hints.try_invert() {
            tracing::debug!("qr pass: inverted");
            found = scan(&base.inverted(), |p| p);
        }

        if found.is_empty() && hints.try_downscale() {
            let mut factor = 1i32;
            let mut level = base.downscaled_if_large();
            while let Some(plane) = level {
                factor *= 2;
                tracing::debug!(factor, width = plane.width, height = plane.height, "qr pass: downscaled");
                found = scan(&plane, upscale(factor));
                if !found.is_empty() {
                    break;
                }
                level = plane.downscaled_if_large();
            }
        }

        found.truncate(hints.max_number_of_symbols());
        Ok(found)
    }
}

/// Яркостная плоскость, row-major.
#[derive(Clone, Debug)]
struct Plane {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Plane {
    fn from_view(view: &ImageView<'_>) -> Self {
        Self {
            data: view.to_luma(),
            width: view.width(),
            height: view.height(),
        }
    }

    fn inverted(&self) -> Self {
        Self {
            data: self.data.iter().map(|v| 255 - v).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Уровень пирамиды: среднее по блокам 2×2. `None`, если картинка и так
    /// мала или после уменьшения QR уже не поместится.
    fn downscaled_if_large(&self) -> Option<Self> {
        if self.width.max(self.height) <= DOWNSCALE_THRESHOLD {
            return None;
        }
        let (w, h) = (self.width / 2, self.height / 2);
        if w < MIN_SIDE || h < MIN_SIDE {
            return None;
        }
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            let r0 = &self.data[(2 * y) * self.width..];
            let r1 = &self.data[(2 * y + 1) * self.width..];
            for x in 0..w {
                let sum = u32::from(r0[2 * x]) + u32::from(r0[2 * x + 1]) + u32::from(r1[2 * x]) + u32::from(r1[2 * x + 1]);
                data.push(((sum + 2) / 4) as u8);
            }
        }
        Some(Self { data, width: w, height: h })
    }
}

/// Углы с уровня пирамиды обратно в координаты вида.
fn upscale(factor: i32) -> impl Fn(Point) -> Point {
    move |p| Point::new(p.x * factor, p.y * factor)
}

/// Один проход детектора; `to_view` переводит углы обратно в координаты вида.
fn scan(plane: &Plane, to_view: impl Fn(Point) -> Point) -> Vec<RawMatch> {
    let mut img = rqrr::PreparedImage::prepare_from_greyscale(plane.width, plane.height, |x, y| {
        plane.data[y * plane.width + x]
    });
    let grids = img.detect_grids();

    let mut out = Vec::with_capacity(grids.len());
    for grid in grids {
        match grid.decode() {
            Ok((meta, text)) => {
                tracing::debug!(version = ?meta.version, ecc = ?meta.ecc_level, len = text.len(), "qr decoded");
                // rqrr отдаёт углы в порядке TL, TR, BR, BL относительно символа
                let corners = grid.bounds.map(|p| to_view(Point::new(p.x, p.y)));
                out.push(RawMatch {
                    format: BarcodeFormat::QrCode,
                    text,
                    position: Position::from(corners),
                });
            }
            Err(e) => {
                tracing::debug!("qr grid skipped: {e:?}");
            }
        }
    }
    out
}
