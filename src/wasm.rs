//! WebAssembly exports for grayedge filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//! Image data crosses the boundary as flat RGB bytes
//! (length = width * height * 3).

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::error::PixelBufferError;
use crate::filters::edge::{BorderPolicy, EdgeConfig, EdgeDetector};
use crate::filters::grayscale::grayscale;

fn to_js(err: PixelBufferError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Grayscale Filter
// ============================================================================

/// Convert RGB u8 image to grayscale using the channel average.
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGB bytes with R = G = B
#[wasm_bindgen]
pub fn grayscale_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    let input = PixelBuffer::from_raw(width, height, data.to_vec()).map_err(to_js)?;
    Ok(grayscale(&input).into_raw())
}

// ============================================================================
// Edge Detection
// ============================================================================

/// Binary edge detection on an already grayscaled RGB u8 image.
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - Gradient magnitudes above this become black (reference: 175)
/// * `white_border` - Paint the one-pixel frame white instead of leaving it black
///
/// # Returns
/// Flat array of RGB bytes, each pixel black or white
#[wasm_bindgen]
pub fn detect_edges_rgb_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: u32,
    white_border: bool,
) -> Result<Vec<u8>, JsValue> {
    let input = PixelBuffer::from_raw(width, height, data.to_vec()).map_err(to_js)?;
    let border = if white_border {
        BorderPolicy::White
    } else {
        BorderPolicy::Unwritten
    };
    let detector = EdgeDetector::new(EdgeConfig::with_threshold(threshold).border(border));
    let output = detector.detect(&input).map_err(to_js)?;
    Ok(output.into_raw())
}
