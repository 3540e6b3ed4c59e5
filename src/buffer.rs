//! RGB pixel buffer.
//!
//! ## Layout
//!
//! Pixels are stored row-major in an `Array3<u8>` of shape
//! `(height, width, 3)`, the same `(H, W, C)` convention the filters use for
//! numpy interop. Access goes through `(col, row)` pairs so the x/y axis order
//! is explicit at every call site.
//!
//! Coordinates passed to [`PixelBuffer::get`] and [`PixelBuffer::set`] are
//! signed: a 3x3 neighborhood lookup at row 0 asks for row -1, and that must
//! surface as [`PixelBufferError::OutOfBounds`] instead of wrapping.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use crate::error::{PixelBufferError, Result};

/// Number of color channels stored per pixel.
pub const CHANNELS: usize = 3;

/// An RGB pixel with 8-bit channels.
///
/// Channels are fixed at construction; build a new pixel to change one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pixel with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }
}

/// Fixed-size grid of RGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-filled (black) buffer.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        byte_len(width, height)?;
        Ok(Self {
            data: Array3::zeros((height, width, CHANNELS)),
        })
    }

    /// Allocate a buffer with every cell set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        let mut buffer = Self::new(width, height)?;
        buffer.fill(pixel);
        Ok(buffer)
    }

    /// Wrap an `(height, width, channels)` array.
    ///
    /// Supported channel counts:
    /// - 1: grayscale, replicated into R, G and B
    /// - 3: RGB, taken as is
    /// - 4: RGBA, alpha is dropped
    pub fn from_array(array: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = array.dim();
        byte_len(width, height)?;

        match channels {
            3 => Ok(Self { data: array }),
            1 | 4 => {
                let mut data = Array3::<u8>::zeros((height, width, CHANNELS));
                for y in 0..height {
                    for x in 0..width {
                        for c in 0..CHANNELS {
                            let src_c = if channels == 1 { 0 } else { c };
                            data[[y, x, c]] = array[[y, x, src_c]];
                        }
                    }
                }
                Ok(Self { data })
            }
            n => Err(PixelBufferError::UnsupportedChannels(n)),
        }
    }

    /// Wrap packed row-major RGB bytes (`width * height * 3` long).
    pub fn from_raw(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        let actual = bytes.len();
        if actual != expected {
            return Err(PixelBufferError::InvalidDataLength { expected, actual });
        }
        let data = Array3::from_shape_vec((height, width, CHANNELS), bytes)
            .map_err(|_| PixelBufferError::InvalidDataLength { expected, actual })?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Read the pixel at `(col, row)`.
    pub fn get(&self, col: isize, row: isize) -> Result<Pixel> {
        let (x, y) = self.checked_index(col, row)?;
        Ok(Pixel::new(
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ))
    }

    /// Overwrite the pixel at `(col, row)`.
    pub fn set(&mut self, col: isize, row: isize, pixel: Pixel) -> Result<()> {
        let (x, y) = self.checked_index(col, row)?;
        self.data[[y, x, 0]] = pixel.r();
        self.data[[y, x, 1]] = pixel.g();
        self.data[[y, x, 2]] = pixel.b();
        Ok(())
    }

    /// Set every cell to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        for mut px in self.data.lanes_mut(ndarray::Axis(2)) {
            px[0] = pixel.r();
            px[1] = pixel.g();
            px[2] = pixel.b();
        }
    }

    /// Read-only `(height, width, 3)` view of the pixel data.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub(crate) fn view_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        self.data.view_mut()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Packed row-major RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec_and_offset().0
        } else {
            self.data.iter().copied().collect()
        }
    }

    fn checked_index(&self, col: isize, row: isize) -> Result<(usize, usize)> {
        let (width, height) = self.dimensions();
        let in_range = |v: isize, len: usize| v >= 0 && (v as usize) < len;
        if in_range(col, width) && in_range(row, height) {
            Ok((col as usize, row as usize))
        } else {
            Err(PixelBufferError::OutOfBounds {
                col,
                row,
                width,
                height,
            })
        }
    }
}

/// Number of bytes a `width x height` RGB buffer occupies.
///
/// Fails for zero dimensions and for sizes ndarray cannot address
/// (more than `isize::MAX` elements).
fn byte_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .filter(|&n| n > 0 && n <= isize::MAX as usize)
        .ok_or(PixelBufferError::InvalidDimensions { width, height })
}
