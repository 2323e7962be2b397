// src/error.rs
//
// Ошибки по слоям. `Display` у `ReadError` - ровно тот текст, что уходит
// хосту в поле `ReadResult::error`.

/// Неверные параметры вида на пиксельный буфер.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("image view has zero area ({width}x{height})")]
    Empty { width: usize, height: usize },

    /// Буфер короче, чем требуют размеры и раскладка.
    #[error("image buffer too small: {width}x{height} needs {expected} bytes, got {actual}")]
    BufferTooSmall {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("image dimensions overflow: {width}x{height}")]
    Overflow { width: usize, height: usize },
}

/// Материализатор не смог распаковать сжатую картинку.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("empty image buffer")]
    Empty,

    #[error(transparent)]
    Codec(#[from] image::ImageError),

    #[error("image decoder panicked")]
    Panicked,
}

/// Ошибка разбора строки-фильтра форматов.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("This is not a valid barcode format: {token}")]
    Unknown { token: String },
}

/// Ошибки движка распознавания.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Описание от движка, уходит хосту как есть.
    #[error("{0}")]
    Message(String),
}

/// Текст записи-отказа, когда картинку не удалось распаковать.
pub const LOAD_IMAGE_ERROR: &str = "Error loading image";

/// Всё, что может пойти не так в одном вызове входной точки.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("{}", LOAD_IMAGE_ERROR)]
    LoadImage(#[source] MaterializeError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Паника внутри движка; описание намеренно не пробрасывается.
    #[error("Unknown error")]
    Unknown,
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;
