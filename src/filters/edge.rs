//! Binary edge detection by gradient magnitude.
//!
//! Each interior pixel is convolved with a horizontal and a vertical 3x3
//! kernel, the Euclidean magnitude `sqrt(gx^2 + gy^2)` is compared with a
//! threshold, and the pixel becomes black (edge) or white (no edge).
//!
//! ## Border
//!
//! The one-pixel frame (row 0, row H-1, col 0, col W-1) has no full 3x3
//! neighborhood and is skipped by the interior pass. [`BorderPolicy`] decides
//! what happens to it afterwards:
//! - `Unwritten` (default): left as the destination buffer held it. For a
//!   freshly allocated output that is black.
//! - `White`: classified as non-edge.
//!
//! ## Input
//!
//! The source should already be grayscaled; only its red channel is read.
//! This is not checked.

use ndarray::{ArrayViewMut2, Axis};
use rayon::prelude::*;

use crate::buffer::{Pixel, PixelBuffer};
use crate::error::{PixelBufferError, Result};
use crate::filters::convolve::{convolve, Kernel, HORIZONTAL_KERNEL, VERTICAL_KERNEL};

/// Magnitude above which a pixel counts as an edge.
pub const DEFAULT_THRESHOLD: u32 = 175;

/// Handling of the one-pixel frame the convolution cannot reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Never written; keeps the destination's existing values
    #[default]
    Unwritten,
    /// Set to white (non-edge) after the interior pass
    White,
}

/// Edge detector parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeConfig {
    pub threshold: u32,
    pub horizontal: Kernel,
    pub vertical: Kernel,
    pub border: BorderPolicy,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            horizontal: HORIZONTAL_KERNEL,
            vertical: VERTICAL_KERNEL,
            border: BorderPolicy::default(),
        }
    }
}

impl EdgeConfig {
    /// Default kernels with a custom threshold.
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Same configuration with a different border policy.
    pub fn border(self, border: BorderPolicy) -> Self {
        Self { border, ..self }
    }
}

/// Euclidean norm of the two directional gradients.
#[inline]
pub fn gradient_magnitude(gx: i32, gy: i32) -> f64 {
    let (gx, gy) = (gx as f64, gy as f64);
    (gx * gx + gy * gy).sqrt()
}

/// Edge detector with its configuration fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    config: EdgeConfig,
}

impl EdgeDetector {
    pub fn new(config: EdgeConfig) -> Self {
        Self { config }
    }

    /// Classify a single interior pixel.
    pub fn classify(&self, src: &PixelBuffer, row: usize, col: usize) -> Result<Pixel> {
        let gx = convolve(src, row, col, &self.config.horizontal)?;
        let gy = convolve(src, row, col, &self.config.vertical)?;
        let magnitude = gradient_magnitude(gx, gy);

        Ok(if magnitude > self.config.threshold as f64 {
            Pixel::BLACK
        } else {
            Pixel::WHITE
        })
    }

    /// Detect edges into a freshly allocated buffer of the same size.
    pub fn detect(&self, src: &PixelBuffer) -> Result<PixelBuffer> {
        let mut output = PixelBuffer::new(src.width(), src.height())?;
        self.detect_into(src, &mut output)?;
        Ok(output)
    }

    /// Detect edges into `dst`, which must match `src` in size.
    ///
    /// Interior rows are split across rayon workers; each worker owns one
    /// output row. Border cells are only touched under `BorderPolicy::White`.
    pub fn detect_into(&self, src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
        if dst.dimensions() != src.dimensions() {
            return Err(PixelBufferError::DimensionMismatch {
                expected: src.dimensions(),
                actual: dst.dimensions(),
            });
        }

        let (width, height) = src.dimensions();
        let progress_every = progress_interval(height);
        log::debug!(
            "detect_edges: {}x{} buffer, threshold {}, border {:?}",
            width,
            height,
            self.config.threshold,
            self.config.border
        );

        dst.view_mut()
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .filter(|(row, _)| *row >= 1 && *row + 1 < height)
            .try_for_each(|(row, mut out_row)| -> Result<()> {
                if row % progress_every == 0 {
                    log::trace!("detect_edges: row {} of {}", row, height);
                }
                for col in 1..width - 1 {
                    let pixel = self.classify(src, row, col)?;
                    write_pixel(&mut out_row, col, pixel);
                }
                Ok(())
            })?;

        if self.config.border == BorderPolicy::White {
            paint_border(dst, Pixel::WHITE);
        }

        log::debug!("detect_edges: done");
        Ok(())
    }
}

/// Detect edges with the default kernels and border policy.
///
/// # Arguments
/// * `src` - Grayscaled source buffer
/// * `threshold` - Magnitudes strictly above this become black
///
/// # Returns
/// Binary buffer of the same dimensions
pub fn detect_edges(src: &PixelBuffer, threshold: u32) -> Result<PixelBuffer> {
    EdgeDetector::new(EdgeConfig::with_threshold(threshold)).detect(src)
}

/// Detect edges with an explicit configuration.
pub fn detect_edges_with(src: &PixelBuffer, config: &EdgeConfig) -> Result<PixelBuffer> {
    EdgeDetector::new(*config).detect(src)
}

/// Detect edges into a caller-provided buffer.
pub fn detect_edges_into(
    src: &PixelBuffer,
    config: &EdgeConfig,
    dst: &mut PixelBuffer,
) -> Result<()> {
    EdgeDetector::new(*config).detect_into(src, dst)
}

/// Rows between progress messages: an eighth of the image, at least one.
fn progress_interval(height: usize) -> usize {
    (height / 8).max(1)
}

#[inline]
fn write_pixel(row: &mut ArrayViewMut2<u8>, col: usize, pixel: Pixel) {
    row[[col, 0]] = pixel.r();
    row[[col, 1]] = pixel.g();
    row[[col, 2]] = pixel.b();
}

fn paint_border(dst: &mut PixelBuffer, pixel: Pixel) {
    let (width, height) = dst.dimensions();
    let mut view = dst.view_mut();
    for y in 0..height {
        for x in 0..width {
            if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                view[[y, x, 0]] = pixel.r();
                view[[y, x, 1]] = pixel.g();
                view[[y, x, 2]] = pixel.b();
            }
        }
    }
}
