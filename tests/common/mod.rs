// tests/common/mod.rs
//
// Общие хелперы интеграционных тестов: эталонный QR v1-L и рендер в RGBX.

#![allow(dead_code)]

use std::io::Cursor;

/// Текст, закодированный в [`qr_v1`].
pub const QR_TEXT: &str = "ultracode-reader";

/// QR версии 1, уровень L, маска 0, байтовый режим. '#' - тёмный модуль.
pub fn qr_v1() -> Vec<&'static str> {
    include_str!("../data/qr_v1.txt").lines().collect()
}

/// Тихая зона в модулях.
pub const QUIET: usize = 4;

/// Повернуть матрицу на 90° по часовой стрелке.
pub fn rotate_cw<S: AsRef<str>>(m: &[S]) -> Vec<String> {
    let rows: Vec<&[u8]> = m.iter().map(|r| r.as_ref().as_bytes()).collect();
    let n = rows.len();
    (0..n)
        .map(|r| (0..n).map(|c| rows[n - 1 - c][r] as char).collect())
        .collect()
}

/// Отрисовать матрицы слева направо, каждая со своей тихой зоной.
/// Возвращает (RGBX, width, height).
pub fn render_row<S: AsRef<str>>(codes: &[&[S]], unit: usize) -> (Vec<u8>, usize, usize) {
    let n = codes[0].len();
    let cell = (n + 2 * QUIET) * unit;
    let (w, h) = (cell * codes.len(), cell);
    let mut buf = vec![255u8; w * h * 4];
    for (k, m) in codes.iter().enumerate() {
        for (r, row) in m.iter().enumerate() {
            for (c, ch) in row.as_ref().bytes().enumerate() {
                if ch != b'#' {
                    continue;
                }
                for dy in 0..unit {
                    for dx in 0..unit {
                        let x = k * cell + (QUIET + c) * unit + dx;
                        let y = (QUIET + r) * unit + dy;
                        let i = (y * w + x) * 4;
                        buf[i..i + 3].copy_from_slice(&[0, 0, 0]);
                    }
                }
            }
        }
    }
    (buf, w, h)
}

pub fn render<S: AsRef<str>>(m: &[S], unit: usize) -> (Vec<u8>, usize, usize) {
    render_row(&[m], unit)
}

/// Инвертировать цвет, байт-заполнитель не трогаем.
pub fn invert_rgbx(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        for v in &mut px[..3] {
            *v = 255 - *v;
        }
    }
}

pub fn encode_png(rgbx: &[u8], w: usize, h: usize) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w as u32, h as u32, rgbx.to_vec()).expect("buffer size");
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("png encode");
    out.into_inner()
}
