//! Filter modules for grayscale edge extraction.
//!
//! ## Supported Formats
//!
//! Filters operate on [`PixelBuffer`](crate::buffer::PixelBuffer), an RGB u8
//! grid of shape (H, W, 3). Grayscale (H, W, 1) and RGBA (H, W, 4) arrays are
//! accepted at the buffer boundary and normalized to RGB there.
//!
//! ## Architecture
//!
//! - **Fresh output** - every filter borrows its source and returns a new buffer
//! - **Row-parallel** - rows are distributed with rayon; writes never overlap
//! - **Checked access** - out-of-range neighbor lookups are errors, never clamped
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: grayscale (channel average)
//! - **Neighborhood**: convolve (3x3 integer kernel)
//! - **Edge detection**: detect_edges (gradient magnitude + threshold)

pub mod grayscale;
pub mod convolve;
pub mod edge;
