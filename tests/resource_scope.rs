// tests/resource_scope.rs
//
// Материализованный буфер освобождается на каждом пути выхода из
// read_barcode_from_image: успех, пустой результат, ошибка движка, паника
// движка и паника самого декодера картинки.

use std::cell::Cell;
use std::rc::Rc;

use ultracode_reader::prelude::*;

struct Tracked {
    data: Vec<u8>,
    released: Rc<Cell<usize>>,
}

impl AsRef<[u8]> for Tracked {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// Фейковый материализатор: выдаёт белый буфер заданного размера,
/// не глядя на байты.
struct FakeMaterializer {
    width: usize,
    height: usize,
    /// Сколько байт недодать, чтобы вид не собрался.
    short_by: usize,
    /// Паниковать уже после выделения буфера.
    panic_on_load: bool,
    allocated: Cell<usize>,
    released: Rc<Cell<usize>>,
}

impl FakeMaterializer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            short_by: 0,
            panic_on_load: false,
            allocated: Cell::new(0),
            released: Rc::new(Cell::new(0)),
        }
    }
}

impl ImageMaterializer for FakeMaterializer {
    type Buffer = Tracked;

    fn materialize(&self, _bytes: &[u8]) -> Result<Materialized<Tracked>, MaterializeError> {
        self.allocated.set(self.allocated.get() + 1);
        let buffer = Tracked {
            data: vec![255; self.width * self.height * 4 - self.short_by],
            released: Rc::clone(&self.released),
        };
        if self.panic_on_load {
            panic!("corrupt deflate stream");
        }
        Ok(Materialized {
            buffer,
            width: self.width,
            height: self.height,
        })
    }
}

enum Behaviour {
    Hit,
    Miss,
    Fail,
    Panic,
}

struct ScriptedEngine(Behaviour);

impl BarcodeEngine for ScriptedEngine {
    fn read_barcodes(&self, view: &ImageView<'_>, _hints: &DecodeHints) -> Result<Vec<RawMatch>, EngineError> {
        match self.0 {
            Behaviour::Hit => Ok(vec![RawMatch {
                format: BarcodeFormat::DataMatrix,
                text: format!("{}x{}", view.width(), view.height()),
                position: Position::default(),
            }]),
            Behaviour::Miss => Ok(Vec::new()),
            Behaviour::Fail => Err(EngineError::Message("no finder pattern".into())),
            Behaviour::Panic => panic!("engine bug"),
        }
    }
}

fn run(engine: Behaviour, materializer: FakeMaterializer) -> (ReadResult, usize, usize) {
    let reader = BarcodeReader::with_parts(materializer, ScriptedEngine(engine));
    let r = reader.read_barcode_from_image(b"fake", false, "");
    let m = reader.materializer();
    (r, m.allocated.get(), m.released.get())
}

#[test]
fn released_after_success() {
    let (r, alloc, rel) = run(Behaviour::Hit, FakeMaterializer::new(6, 4));
    assert_eq!(r.text, "6x4");
    assert_eq!(r.format, "DataMatrix");
    assert_eq!((alloc, rel), (1, 1));
}

#[test]
fn released_after_no_match() {
    let (r, alloc, rel) = run(Behaviour::Miss, FakeMaterializer::new(6, 4));
    assert_eq!(r, ReadResult::default());
    assert_eq!((alloc, rel), (1, 1));
}

#[test]
fn released_after_engine_error() {
    let (r, alloc, rel) = run(Behaviour::Fail, FakeMaterializer::new(6, 4));
    assert_eq!(r, ReadResult::failure("no finder pattern"));
    assert_eq!((alloc, rel), (1, 1));
}

#[test]
fn released_after_engine_panic() {
    let (r, alloc, rel) = run(Behaviour::Panic, FakeMaterializer::new(6, 4));
    assert_eq!(r.error, "Unknown error");
    assert_eq!((alloc, rel), (1, 1));
}

#[test]
fn released_after_invalid_view() {
    let mut m = FakeMaterializer::new(6, 4);
    m.short_by = 1;
    let (r, alloc, rel) = run(Behaviour::Hit, m);
    assert!(r.is_failure(), "{r:?}");
    assert_eq!((alloc, rel), (1, 1));
}

#[test]
fn released_after_materializer_panic() {
    let mut m = FakeMaterializer::new(6, 4);
    m.panic_on_load = true;
    let (r, alloc, rel) = run(Behaviour::Hit, m);
    assert_eq!(r, ReadResult::failure(LOAD_IMAGE_ERROR));
    assert_eq!((alloc, rel), (1, 1));
}

#[test]
fn each_call_is_independent() {
    let reader = BarcodeReader::with_parts(FakeMaterializer::new(3, 3), ScriptedEngine(Behaviour::Hit));
    for i in 1..=3 {
        let r = reader.read_barcode_from_image(b"fake", true, "DataMatrix");
        assert_eq!(r.text, "3x3");
        assert_eq!(reader.materializer().released.get(), i);
    }
}
