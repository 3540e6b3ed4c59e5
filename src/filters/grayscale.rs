//! Grayscale conversion filter.
//!
//! Uses the plain channel average `(R + G + B) / 3` with truncating integer
//! division, so the result is exact and reproducible across platforms.
//! Output keeps the RGB layout with R = G = B, which lets the edge detector
//! read any single channel as the intensity.

use ndarray::{Axis, Zip};

use crate::buffer::PixelBuffer;

/// Average of the three channels, truncated.
#[inline]
pub fn average_gray(r: u8, g: u8, b: u8) -> u8 {
    // max sum is 765, so the quotient always fits in u8
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Convert an RGB buffer to grayscale (average method).
///
/// # Arguments
/// * `src` - Source buffer, only borrowed
///
/// # Returns
/// New buffer of the same dimensions with R = G = B = average of the source
pub fn grayscale(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = src.dimensions();
    log::debug!("grayscale: converting {}x{} buffer", width, height);

    let mut output = src.clone();
    Zip::from(output.view_mut().lanes_mut(Axis(2)))
        .and(src.view().lanes(Axis(2)))
        .par_for_each(|mut out, px| {
            let gray = average_gray(px[0], px[1], px[2]);
            out.fill(gray);
        });

    log::debug!("grayscale: done");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;
    use proptest::prelude::*;

    fn single(pixel: Pixel) -> PixelBuffer {
        PixelBuffer::filled(1, 1, pixel).unwrap()
    }

    #[test]
    fn test_grayscale_truncates() {
        let cases = [
            (Pixel::new(1, 1, 1), 1),
            (Pixel::new(1, 0, 0), 0),
            (Pixel::new(1, 1, 0), 0),
            (Pixel::new(2, 2, 0), 1),
            (Pixel::new(255, 255, 254), 254),
            (Pixel::new(255, 255, 255), 255),
            (Pixel::new(200, 100, 50), 116),
        ];
        for (input, expected) in cases {
            let out = grayscale(&single(input));
            assert_eq!(out.get(0, 0).unwrap(), Pixel::gray(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let src = PixelBuffer::new(7, 3).unwrap();
        let out = grayscale(&src);
        assert_eq!(out.width(), src.width());
        assert_eq!(out.height(), src.height());
    }

    #[test]
    fn test_grayscale_leaves_source_untouched() {
        let mut src = PixelBuffer::new(2, 2).unwrap();
        src.set(1, 0, Pixel::new(255, 0, 0)).unwrap();
        let before = src.clone();

        let out = grayscale(&src);

        assert_eq!(src, before);
        assert_eq!(out.get(1, 0).unwrap(), Pixel::gray(85));
        assert_eq!(out.get(0, 1).unwrap(), Pixel::BLACK);
    }

    proptest! {
        #[test]
        fn prop_grayscale_matches_floor_average(r: u8, g: u8, b: u8) {
            let out = grayscale(&single(Pixel::new(r, g, b)));
            let expected = ((r as u32 + g as u32 + b as u32) / 3) as u8;
            prop_assert_eq!(out.get(0, 0).unwrap(), Pixel::gray(expected));
        }

        #[test]
        fn prop_grayscale_is_identity_on_gray_buffers(
            w in 1usize..8,
            h in 1usize..8,
            values in proptest::collection::vec(any::<u8>(), 64),
        ) {
            let mut src = PixelBuffer::new(w, h).unwrap();
            for row in 0..h {
                for col in 0..w {
                    let v = values[row * w + col];
                    src.set(col as isize, row as isize, Pixel::gray(v)).unwrap();
                }
            }
            prop_assert_eq!(grayscale(&src), src);
        }
    }
}
