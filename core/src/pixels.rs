use crate::{error::Result, pack::PackedImage};

/// Decoded image data as handed over by an image decoder: one 4-byte
/// little-endian sample per pixel, row-major.
///
/// Only zero versus nonzero matters; color and alpha decoding are up to
/// whoever fills the buffer.
#[derive(Debug, Clone, Copy)]
pub struct RawPixels<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl<'a> RawPixels<'a> {
    pub const BYTES_PER_SAMPLE: usize = 4;

    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// A pixel is on iff its 32-bit sample is nonzero. A trailing group
    /// shorter than 4 bytes is not a sample and is skipped.
    pub fn samples(&self) -> impl Iterator<Item = bool> + use<'a> {
        self.data
            .chunks_exact(Self::BYTES_PER_SAMPLE)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) != 0)
    }

    pub fn pack(&self) -> Result<PackedImage> {
        crate::pack::pack(self.samples(), self.width, self.height)
    }
}
