//! 3x3 integer kernel convolution over the red channel.
//!
//! The input is expected to be grayscaled already (R = G = B), so the red
//! channel stands in for intensity. Results are signed intermediates and are
//! not clamped to the 0-255 pixel range.

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// 3x3 kernel, indexed `[row][col]`.
pub type Kernel = [[i32; 3]; 3];

/// Horizontal gradient kernel (responds to intensity change between rows).
pub const HORIZONTAL_KERNEL: Kernel = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Vertical gradient kernel (responds to intensity change between columns).
pub const VERTICAL_KERNEL: Kernel = [[1, 0, -1], [2, 0, -2], [1, 0, -1]];

/// Weighted sum of the 3x3 neighborhood centered on `(col, row)`.
///
/// The caller must pick an interior pixel (`1 <= row <= height - 2`,
/// `1 <= col <= width - 2`). Bounds are not re-checked here: a border pixel
/// fails with `OutOfBounds` from the buffer lookup of the missing neighbor.
pub fn convolve(img: &PixelBuffer, row: usize, col: usize, kernel: &Kernel) -> Result<i32> {
    let (row, col) = (row as isize, col as isize);
    let mut sum = 0i32;

    for (ky, kernel_row) in kernel.iter().enumerate() {
        for (kx, &weight) in kernel_row.iter().enumerate() {
            let py = row + ky as isize - 1;
            let px = col + kx as isize - 1;
            let intensity = img.get(px, py)?.r() as i32;
            sum += weight * intensity;
        }
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;
    use crate::error::PixelBufferError;
    use proptest::prelude::*;

    #[test]
    fn test_kernels_sum_to_zero() {
        for kernel in [HORIZONTAL_KERNEL, VERTICAL_KERNEL] {
            let total: i32 = kernel.iter().flatten().sum();
            assert_eq!(total, 0);
        }
    }

    #[test]
    fn test_convolve_horizontal_step() {
        // top row 0, everything below 100
        let mut img = PixelBuffer::filled(3, 3, Pixel::gray(100)).unwrap();
        for col in 0..3 {
            img.set(col, 0, Pixel::BLACK).unwrap();
        }

        assert_eq!(convolve(&img, 1, 1, &HORIZONTAL_KERNEL).unwrap(), 400);
        assert_eq!(convolve(&img, 1, 1, &VERTICAL_KERNEL).unwrap(), 0);
    }

    #[test]
    fn test_convolve_can_go_negative() {
        // left column 200, rest 0
        let mut img = PixelBuffer::new(3, 3).unwrap();
        for row in 0..3 {
            img.set(0, row, Pixel::gray(200)).unwrap();
        }

        assert_eq!(convolve(&img, 1, 1, &VERTICAL_KERNEL).unwrap(), 800);

        let mut flipped = PixelBuffer::filled(3, 3, Pixel::gray(200)).unwrap();
        for row in 0..3 {
            flipped.set(0, row, Pixel::BLACK).unwrap();
        }
        assert_eq!(convolve(&flipped, 1, 1, &VERTICAL_KERNEL).unwrap(), -800);
    }

    #[test]
    fn test_convolve_reads_red_channel_only() {
        let img = PixelBuffer::filled(3, 3, Pixel::new(0, 255, 255)).unwrap();
        let mut marked = img.clone();
        marked.set(1, 2, Pixel::new(10, 0, 0)).unwrap();

        assert_eq!(convolve(&img, 1, 1, &HORIZONTAL_KERNEL).unwrap(), 0);
        assert_eq!(convolve(&marked, 1, 1, &HORIZONTAL_KERNEL).unwrap(), 20);
    }

    #[test]
    fn test_convolve_on_border_is_out_of_bounds() {
        let img = PixelBuffer::new(4, 4).unwrap();

        let err = convolve(&img, 0, 1, &HORIZONTAL_KERNEL).unwrap_err();
        assert!(matches!(err, PixelBufferError::OutOfBounds { row: -1, .. }));

        let err = convolve(&img, 1, 3, &VERTICAL_KERNEL).unwrap_err();
        assert!(matches!(err, PixelBufferError::OutOfBounds { col: 4, .. }));
    }

    proptest! {
        #[test]
        fn prop_uniform_neighborhood_is_zero(k: u8) {
            let img = PixelBuffer::filled(3, 3, Pixel::gray(k)).unwrap();
            prop_assert_eq!(convolve(&img, 1, 1, &HORIZONTAL_KERNEL).unwrap(), 0);
            prop_assert_eq!(convolve(&img, 1, 1, &VERTICAL_KERNEL).unwrap(), 0);
        }
    }
}
