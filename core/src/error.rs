use core::fmt;

/// Reasons the packed byte stream cannot match the declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionMismatch {
    /// `width * height` is not a multiple of 8, so the last byte would be partial.
    NotByteAligned { width: u32, height: u32 },
    /// The pixel source produced a different number of whole bytes than
    /// `width * height / 8`.
    ByteCount { expected: u64, actual: u64 },
}

/// Error type for XBM packing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    DimensionMismatch(DimensionMismatch),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<DimensionMismatch> for Error {
    fn from(err: DimensionMismatch) -> Self {
        Error::DimensionMismatch(err)
    }
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionMismatch::NotByteAligned { width, height } => write!(
                f,
                "{width}x{height} image has {} pixels, which is not a multiple of 8",
                *width as u64 * *height as u64
            ),
            DimensionMismatch::ByteCount { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual} bytes")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch(err) => write!(f, "dimension mismatch: {err}"),
        }
    }
}

impl core::error::Error for Error {}
