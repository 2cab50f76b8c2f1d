use alloc::vec::Vec;
use embedded_graphics::{
    Pixel,
    image::ImageDrawable,
    pixelcolor::BinaryColor,
    prelude::{Dimensions, DrawTarget, OriginDimensions, Size},
    primitives::{PointsIter, Rectangle},
};
use log::{debug, trace};

use crate::error::{DimensionMismatch, Result};

/// A monochrome bitmap packed XBM style: 8 consecutive pixels per byte in
/// row-major scan order, the first pixel in bit 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PackedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns whether the pixel at `(x, y)` is set, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        Some(self.bit(index))
    }

    /// Unpacks every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.data.len() * 8).map(|index| self.bit(index))
    }

    fn bit(&self, index: usize) -> bool {
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }
}

/// Packs row-major on/off pixels into a [`PackedImage`].
///
/// `width * height` must be a multiple of 8; the check happens before any
/// pixel is consumed. The pixel source must then produce exactly
/// `width * height / 8` whole bytes.
pub fn pack<I>(pixels: I, width: u32, height: u32) -> Result<PackedImage>
where
    I: IntoIterator<Item = bool>,
{
    let pixel_count = width as u64 * height as u64;
    if pixel_count % 8 != 0 {
        return Err(DimensionMismatch::NotByteAligned { width, height }.into());
    }
    let expected = pixel_count / 8;

    let pixels = pixels.into_iter();
    // sized by what the source claims to hold, not by the declared dimensions
    let capacity = (pixels.size_hint().0 / 8) as u64;
    let mut data = Vec::with_capacity(capacity.min(expected) as usize);
    let mut current = 0u8;
    let mut bit_offset = 0u8;
    for on in pixels {
        // the lowest bit is the leftmost pixel
        if on {
            current |= 1 << bit_offset;
        }
        if bit_offset == 7 {
            data.push(current);
            current = 0;
            bit_offset = 0;
        } else {
            bit_offset += 1;
        }
    }

    let actual = data.len() as u64;
    if actual != expected {
        return Err(DimensionMismatch::ByteCount { expected, actual }.into());
    }
    if bit_offset != 0 {
        debug!("Discarding {} trailing pixels past {}x{}", bit_offset, width, height);
    }

    trace!("Packed {}x{} image into {} bytes", width, height, data.len());
    Ok(PackedImage {
        width,
        height,
        data,
    })
}

impl OriginDimensions for PackedImage {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl ImageDrawable for PackedImage {
    type Color = BinaryColor;

    fn draw<D>(&self, target: &mut D) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels().map(BinaryColor::from))
    }

    fn draw_sub_image<D>(
        &self,
        target: &mut D,
        area: &Rectangle,
    ) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&self.bounding_box());
        let origin = area.top_left;
        target.draw_iter(area.points().filter_map(|point| {
            self.pixel(point.x as u32, point.y as u32)
                .map(|on| Pixel(point - origin, BinaryColor::from(on)))
        }))
    }
}
