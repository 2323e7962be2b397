//! Символики и их множества.
//!
//! Каноническое имя формата (`Display`) и разбор строки-фильтра
//! (`FromStr` для [`BarcodeFormats`]) - правила движка; мост только
//! пользуется ими.
//!
//! Грамматика фильтра:
//! - разделители - пробел, `,` и `|`, пустые токены пропускаются;
//! - токен нормализуется: ASCII lower-case, без `-`, `_`, `[`, `]`;
//! - есть групповые имена `Linear-Codes` и `Matrix-Codes`;
//! - пустой фильтр = пустое множество = «все форматы».

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum BarcodeFormat {
    Aztec = 1 << 0,
    Codabar = 1 << 1,
    Code39 = 1 << 2,
    Code93 = 1 << 3,
    Code128 = 1 << 4,
    DataBar = 1 << 5,
    DataBarExpanded = 1 << 6,
    DataMatrix = 1 << 7,
    Ean8 = 1 << 8,
    Ean13 = 1 << 9,
    Itf = 1 << 10,
    MaxiCode = 1 << 11,
    Pdf417 = 1 << 12,
    QrCode = 1 << 13,
    UpcA = 1 << 14,
    UpcE = 1 << 15,
    MicroQrCode = 1 << 16,
}

impl BarcodeFormat {
    pub const ALL: [BarcodeFormat; 17] = [
        BarcodeFormat::Aztec,
        BarcodeFormat::Codabar,
        BarcodeFormat::Code39,
        BarcodeFormat::Code93,
        BarcodeFormat::Code128,
        BarcodeFormat::DataBar,
        BarcodeFormat::DataBarExpanded,
        BarcodeFormat::DataMatrix,
        BarcodeFormat::Ean8,
        BarcodeFormat::Ean13,
        BarcodeFormat::Itf,
        BarcodeFormat::MaxiCode,
        BarcodeFormat::Pdf417,
        BarcodeFormat::QrCode,
        BarcodeFormat::UpcA,
        BarcodeFormat::UpcE,
        BarcodeFormat::MicroQrCode,
    ];

    /// Каноническое имя для хоста.
    pub const fn name(self) -> &'static str {
        match self {
            BarcodeFormat::Aztec => "Aztec",
            BarcodeFormat::Codabar => "Codabar",
            BarcodeFormat::Code39 => "Code39",
            BarcodeFormat::Code93 => "Code93",
            BarcodeFormat::Code128 => "Code128",
            BarcodeFormat::DataBar => "DataBar",
            BarcodeFormat::DataBarExpanded => "DataBarExpanded",
            BarcodeFormat::DataMatrix => "DataMatrix",
            BarcodeFormat::Ean8 => "EAN-8",
            BarcodeFormat::Ean13 => "EAN-13",
            BarcodeFormat::Itf => "ITF",
            BarcodeFormat::MaxiCode => "MaxiCode",
            BarcodeFormat::Pdf417 => "PDF417",
            BarcodeFormat::QrCode => "QRCode",
            BarcodeFormat::UpcA => "UPC-A",
            BarcodeFormat::UpcE => "UPC-E",
            BarcodeFormat::MicroQrCode => "MicroQRCode",
        }
    }

    #[inline]
    const fn bit(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Множество форматов (битовая маска). Пустое - «любой».
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BarcodeFormats(u32);

impl BarcodeFormats {
    pub const NONE: Self = Self(0);

    pub const LINEAR_CODES: Self = Self(
        BarcodeFormat::Codabar.bit()
            | BarcodeFormat::Code39.bit()
            | BarcodeFormat::Code93.bit()
            | BarcodeFormat::Code128.bit()
            | BarcodeFormat::Ean8.bit()
            | BarcodeFormat::Ean13.bit()
            | BarcodeFormat::Itf.bit()
            | BarcodeFormat::DataBar.bit()
            | BarcodeFormat::DataBarExpanded.bit()
            | BarcodeFormat::UpcA.bit()
            | BarcodeFormat::UpcE.bit(),
    );

    pub const MATRIX_CODES: Self = Self(
        BarcodeFormat::Aztec.bit()
            | BarcodeFormat::DataMatrix.bit()
            | BarcodeFormat::MaxiCode.bit()
            | BarcodeFormat::Pdf417.bit()
            | BarcodeFormat::QrCode.bit()
            | BarcodeFormat::MicroQrCode.bit(),
    );

    pub const ANY: Self = Self(Self::LINEAR_CODES.0 | Self::MATRIX_CODES.0);

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, f: BarcodeFormat) -> bool {
        self.0 & f.bit() != 0
    }

    /// Разрешён ли формат: пустое множество разрешает всё.
    #[inline]
    pub fn accepts(self, f: BarcodeFormat) -> bool {
        self.is_empty() || self.contains(f)
    }

    #[inline]
    pub fn insert(&mut self, f: impl Into<BarcodeFormats>) {
        self.0 |= f.into().0;
    }

    pub fn iter(self) -> impl Iterator<Item = BarcodeFormat> {
        BarcodeFormat::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl From<BarcodeFormat> for BarcodeFormats {
    #[inline]
    fn from(f: BarcodeFormat) -> Self {
        Self(f.bit())
    }
}

impl FromIterator<BarcodeFormat> for BarcodeFormats {
    fn from_iter<I: IntoIterator<Item = BarcodeFormat>>(iter: I) -> Self {
        let mut out = Self::NONE;
        for f in iter {
            out.insert(f);
        }
        out
    }
}

impl fmt::Display for BarcodeFormats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for x in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(x.name())?;
            first = false;
        }
        Ok(())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | '[' | ']'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn parse_token(token: &str) -> Option<BarcodeFormats> {
    match token {
        "linearcodes" => return Some(BarcodeFormats::LINEAR_CODES),
        "matrixcodes" => return Some(BarcodeFormats::MATRIX_CODES),
        _ => {}
    }
    BarcodeFormat::ALL
        .into_iter()
        .find(|f| normalize(f.name()) == token)
        .map(BarcodeFormats::from)
}

impl FromStr for BarcodeFormats {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        let mut out = BarcodeFormats::NONE;
        for token in normalized.split([' ', ',', '|']).filter(|t| !t.is_empty()) {
            let f = parse_token(token).ok_or_else(|| FormatError::Unknown {
                token: token.to_owned(),
            })?;
            out.insert(f);
        }
        Ok(out)
    }
}
