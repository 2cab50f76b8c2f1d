use image::DynamicImage;
use xbm_core::RawPixels;

/// An image flattened to the sample layout `RawPixels` reads: one
/// little-endian `[0, b, g, r]` group per pixel, so only pure black is zero.
pub struct Decoded {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Decoded {
    pub fn raw(&self) -> RawPixels<'_> {
        RawPixels::new(self.width, self.height, &self.data)
    }
}

const OFF: [u8; 4] = [0; 4];
const ON: [u8; 4] = [0, 0xFF, 0xFF, 0xFF];

pub fn to_samples(image: &DynamicImage, invert: bool) -> Decoded {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut data = Vec::with_capacity(width as usize * height as usize * RawPixels::BYTES_PER_SAMPLE);
    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let sample = match invert {
            false => [0, b, g, r],
            true if (r | g | b) == 0 => ON,
            true => OFF,
        };
        data.extend_from_slice(&sample);
    }
    Decoded {
        width,
        height,
        data,
    }
}

pub fn open(path: &str, invert: bool) -> image::ImageResult<Decoded> {
    let image = image::open(path)?;
    log::debug!("Decoded {} as {:?}", path, image.color());
    Ok(to_samples(&image, invert))
}
