/*!
Packs monochrome pixel data into XBM bitmaps and emits them as C source for
embedded graphics libraries such as u8g2.

## Pipeline
- [`pack`] turns a row-major sequence of on/off pixels into bytes, 8 pixels per
  byte with the first pixel in the lowest bit.
- [`emit`] formats the packed bytes as a `static const unsigned char` array
  plus `_width`/`_height` defines.

## Usage
```
# fn main() -> Result<(), xbm_core::Error> {
use xbm_core::{EmissionConfig, emit, pack};

let image = pack([true; 64], 8, 8)?;
let config = EmissionConfig::default().with_provenance("assets/logo.bmp");
let text = emit(&image, &config);
assert!(text.to_string().contains("#define img_width 8"));
# Ok(())
# }
```
*/

#![no_std]

extern crate alloc;

pub mod emit;
mod error;
pub mod pack;
pub mod pixels;


pub use emit::{Dialect, EmissionConfig, SourceText, emit};
pub use error::{DimensionMismatch, Error, Result};
pub use pack::{PackedImage, pack};
pub use pixels::RawPixels;
