use std::{fs, path::PathBuf, process};

use clap::Parser;
use tracing::Level;
use ultracode_reader::error::LOAD_IMAGE_ERROR;
use ultracode_reader::materialize::{ImageCrateMaterializer, ImageMaterializer};
use ultracode_reader::{BarcodeReader, ReadResult};

/// Распознать штрих-коды в файле картинки и вывести записи ReadResult в JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// PNG/JPEG/GIF/BMP
    path: PathBuf,

    /// агрессивный поиск (инверсия, пирамида)
    #[arg(long)]
    try_harder: bool,

    /// фильтр форматов, например "QRCode" или "EAN-13,Code128"; пусто = все
    #[arg(long, default_value = "")]
    formats: String,

    /// вернуть все найденные коды, а не первый
    #[arg(long)]
    multi: bool,

    /// подробный лог в stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let bytes = match fs::read(&args.path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Не удалось прочитать {}: {e}", args.path.display());
            process::exit(2);
        }
    };

    let reader = BarcodeReader::new();
    let results: Vec<ReadResult> = if args.multi {
        let image = match ImageCrateMaterializer.materialize(&bytes) {
            Ok(image) => image,
            Err(e) => {
                eprintln!("{LOAD_IMAGE_ERROR}: {e}");
                process::exit(2);
            }
        };
        reader.read_barcodes_from_pixmap(image.pixels(), image.width, image.height, args.try_harder, &args.formats)
    } else {
        let r = reader.read_barcode_from_image(&bytes, args.try_harder, &args.formats);
        if r.error == LOAD_IMAGE_ERROR {
            eprintln!("{}: {}", args.path.display(), r.error);
            process::exit(2);
        }
        vec![r]
    };

    match serde_json::to_string_pretty(&results) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("JSON: {e}");
            process::exit(2);
        }
    }

    if !results.iter().any(ReadResult::is_success) {
        process::exit(1);
    }
}
