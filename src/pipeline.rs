//! Grayscale-then-edges pipeline.
//!
//! Runs the in-memory stages of the edge extraction workflow in order:
//! analyze, grayscale, detect edges. Loading and saving images stay with the
//! caller.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::filters::edge::{EdgeConfig, EdgeDetector};
use crate::filters::grayscale::grayscale;

/// Dimensions reported by [`analyze`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
}

/// Buffers produced by [`run`].
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub info: ImageInfo,
    pub grayscale: PixelBuffer,
    pub edges: PixelBuffer,
}

pub fn analyze(image: &PixelBuffer) -> ImageInfo {
    let info = ImageInfo {
        width: image.width(),
        height: image.height(),
    };
    log::info!("image width: {}, height: {}", info.width, info.height);
    info
}

/// Analyze, grayscale and edge-detect `src`.
///
/// The edge stage reads the full grayscale output, so the two stages never
/// overlap.
pub fn run(src: &PixelBuffer, config: &EdgeConfig) -> Result<PipelineOutput> {
    let info = analyze(src);
    let gray = grayscale(src);
    let edges = EdgeDetector::new(*config).detect(&gray)?;

    Ok(PipelineOutput {
        info,
        grayscale: gray,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;

    #[test]
    fn test_analyze_reports_dimensions() {
        let img = PixelBuffer::new(12, 5).unwrap();
        assert_eq!(
            analyze(&img),
            ImageInfo {
                width: 12,
                height: 5
            }
        );
    }

    #[test]
    fn test_run_edges_use_grayscale_output() {
        // pure red averages to 85; the red channel alone would read 255
        let mut src = PixelBuffer::new(5, 5).unwrap();
        for row in 0..5 {
            for col in 3..5 {
                src.set(col, row, Pixel::new(255, 0, 0)).unwrap();
            }
        }

        let out = run(&src, &EdgeConfig::default()).unwrap();

        assert_eq!(out.grayscale.get(4, 0).unwrap(), Pixel::gray(85));
        // |gy| = 4 * 85 = 340 next to the step
        assert_eq!(out.edges.get(2, 2).unwrap(), Pixel::BLACK);
        assert_eq!(out.edges.get(1, 2).unwrap(), Pixel::WHITE);

        let high = run(&src, &EdgeConfig::with_threshold(400)).unwrap();
        assert_eq!(high.edges.get(2, 2).unwrap(), Pixel::WHITE);
    }
}
