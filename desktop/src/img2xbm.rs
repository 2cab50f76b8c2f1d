use std::{fmt, process::ExitCode};

use argh::FromArgs;
use embedded_graphics::{image::Image, prelude::*};
use log::{error, info};
use xbm_core::{Dialect, EmissionConfig, PackedImage, emit};

use crate::{preview::AsciiCanvas, std_io::StdWriter};

mod decode;
mod preview;
mod std_io;

#[derive(FromArgs)]
/// Convert a monochrome image into an XBM C array for u8g2 and friends
struct Args {
    /// input image path (png, jpeg, bmp or webp)
    #[argh(positional)]
    input: String,

    /// prefix for the generated `_width`, `_height` and `_bits` names
    #[argh(positional, default = "xbm_core::emit::DEFAULT_VAR_BASE.to_string()")]
    var_base: String,

    /// output file, stdout if omitted
    #[argh(option, short = 'o')]
    output: Option<String>,

    /// target dialect: u8g2, avr or x11
    #[argh(option, short = 'd', default = "Dialect::default()", from_str_fn(parse_dialect))]
    dialect: Dialect,

    /// bytes per line in the array
    #[argh(option, default = "xbm_core::emit::DEFAULT_BYTES_PER_ROW")]
    bytes_per_row: usize,

    /// spaces before each array line
    #[argh(option, default = "xbm_core::emit::DEFAULT_INDENT")]
    indent: usize,

    /// treat black pixels as set instead of non-black ones
    #[argh(switch)]
    invert: bool,

    /// print the packed bitmap to stderr
    #[argh(switch)]
    preview: bool,
}

#[derive(Debug)]
enum Error {
    Image(image::ImageError),
    Io(std::io::Error),
    Xbm(xbm_core::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<xbm_core::Error> for Error {
    fn from(err: xbm_core::Error) -> Self {
        Error::Xbm(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Image(err) => write!(f, "failed to decode image: {err}"),
            Error::Io(err) => write!(f, "failed to write output: {err}"),
            Error::Xbm(err) => write!(f, "failed to pack image: {err}"),
        }
    }
}

fn parse_dialect(value: &str) -> Result<Dialect, String> {
    value
        .parse()
        .map_err(|_| format!("unknown dialect `{value}`, expected u8g2, avr or x11"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {}", args.input, err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let decoded = decode::open(&args.input, args.invert)?;
    info!("Converting {} ({}x{})", args.input, decoded.width, decoded.height);

    let image = decoded.raw().pack()?;
    if args.preview {
        print_preview(&image);
    }

    let config = EmissionConfig::default()
        .with_var_base(args.var_base.as_str())
        .with_provenance(args.input.as_str())
        .with_bytes_per_row(args.bytes_per_row)
        .with_indent(args.indent)
        .with_dialect(args.dialect);
    let text = emit(&image, &config);

    let out: Box<dyn std::io::Write> = match &args.output {
        Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    text.write_to(&mut StdWriter::new(out))?;

    if let Some(path) = &args.output {
        info!("Wrote {} bytes of bitmap data to {}", image.bytes().len(), path);
    }
    Ok(())
}


fn print_preview(image: &PackedImage) {
    let mut canvas = AsciiCanvas::new(image.size());
    let Ok(()) = Image::new(image, Point::zero()).draw(&mut canvas);
    eprint!("{}", canvas.render());
}
