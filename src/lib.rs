//! grayedge
//!
//! Grayscale conversion and binary edge extraction for RGB images,
//! with optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Buffers are RGB u8, shape (height, width, 3), addressed by (column, row).
//! Array inputs may also be:
//! - **Grayscale**: (height, width, 1) - replicated into RGB
//! - **RGBA**: (height, width, 4) - alpha dropped
//!
//! ## Pipeline
//! 1. [`filters::grayscale::grayscale`] - average of R, G and B, truncated
//! 2. [`filters::edge::detect_edges`] - 3x3 gradient kernels, magnitude,
//!    threshold (default 175) into black (edge) / white (no edge)
//!
//! [`pipeline::run`] chains both stages. Decoding and encoding image files is
//! left to the caller.

pub mod buffer;
pub mod error;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{Pixel, PixelBuffer};
pub use error::{PixelBufferError, Result};
pub use filters::convolve::{convolve, Kernel, HORIZONTAL_KERNEL, VERTICAL_KERNEL};
pub use filters::edge::{
    detect_edges, detect_edges_into, detect_edges_with, BorderPolicy, EdgeConfig, EdgeDetector,
    DEFAULT_THRESHOLD,
};
pub use filters::grayscale::grayscale;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::buffer::PixelBuffer;
    use crate::error::PixelBufferError;
    use crate::filters::edge::{BorderPolicy, EdgeConfig, EdgeDetector, DEFAULT_THRESHOLD};
    use crate::filters::grayscale::grayscale as grayscale_impl;
    use crate::pipeline;

    impl From<PixelBufferError> for PyErr {
        fn from(err: PixelBufferError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn edge_config(threshold: u32, white_border: bool) -> EdgeConfig {
        let border = if white_border {
            BorderPolicy::White
        } else {
            BorderPolicy::Unwritten
        };
        EdgeConfig::with_threshold(threshold).border(border)
    }

    fn to_buffer(image: PyReadonlyArray3<'_, u8>) -> PyResult<PixelBuffer> {
        Ok(PixelBuffer::from_array(image.as_array().to_owned())?)
    }

    // ========================================================================
    // Grayscale Filter
    // ========================================================================

    /// Convert a u8 image to grayscale using the channel average.
    ///
    /// Accepts (H, W, 1), (H, W, 3) or (H, W, 4); returns (H, W, 3).
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = to_buffer(image)?;
        let result = py.allow_threads(|| grayscale_impl(&input));
        Ok(result.into_array().into_pyarray(py))
    }

    // ========================================================================
    // Edge Detection
    // ========================================================================

    /// Binary edge detection on an already grayscaled u8 image.
    ///
    /// # Arguments
    /// * `image` - Input image (1, 3, or 4 channels)
    /// * `threshold` - Gradient magnitudes above this become black (default: 175)
    /// * `white_border` - Paint the one-pixel frame white instead of leaving it black
    #[pyfunction]
    #[pyo3(signature = (image, threshold=DEFAULT_THRESHOLD, white_border=false))]
    pub fn detect_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u32,
        white_border: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = to_buffer(image)?;
        let detector = EdgeDetector::new(edge_config(threshold, white_border));
        let result = py.allow_threads(|| detector.detect(&input))?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Grayscale then edge-detect; returns `(grayscale, edges)`.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=DEFAULT_THRESHOLD, white_border=false))]
    pub fn grayscale_and_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u32,
        white_border: bool,
    ) -> PyResult<(Bound<'py, PyArray3<u8>>, Bound<'py, PyArray3<u8>>)> {
        let input = to_buffer(image)?;
        let config = edge_config(threshold, white_border);
        let output = py.allow_threads(|| pipeline::run(&input, &config))?;
        Ok((
            output.grayscale.into_array().into_pyarray(py),
            output.edges.into_array().into_pyarray(py),
        ))
    }

    /// grayedge Rust extension module
    #[pymodule]
    pub fn grayedge(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(detect_edges, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale_and_edges, m)?)?;
        m.add("DEFAULT_THRESHOLD", DEFAULT_THRESHOLD)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::grayedge;
