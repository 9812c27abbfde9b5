use ballfinder_core::GrayBuffer;

use crate::error::{DetectError, DetectResult};

/// Converts an RGBA pixel buffer into a single-channel luminance buffer
/// using the Rec. 601 weights. Alpha is ignored.
pub fn grayscale_from_rgba(rgba: &[u8], width: usize, height: usize) -> DetectResult<GrayBuffer> {
    let expected_len = width * height * 4;
    if rgba.len() != expected_len {
        return Err(DetectError::InvalidImageData {
            expected_len,
            actual_len: rgba.len(),
        });
    }

    let mut gray = Vec::with_capacity(width * height);
    for px in rgba.chunks_exact(4) {
        let lum = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
        gray.push(lum.clamp(0.0, 255.0) as u8);
    }
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_black_stays_black() {
        let rgba = vec![0u8; 4 * 4 * 4];
        let gray = grayscale_from_rgba(&rgba, 4, 4).unwrap();
        assert_eq!(gray, vec![0u8; 16]);
    }

    #[test]
    fn test_pure_white_stays_white() {
        let rgba = vec![255u8; 4 * 4 * 4];
        let gray = grayscale_from_rgba(&rgba, 4, 4).unwrap();
        for &g in &gray {
            // Weights sum to 1.0; allow one count of rounding slack
            assert!(g >= 254, "expected ~255, got {}", g);
        }
    }

    #[test]
    fn test_luminance_weights() {
        // Pure red, green, blue pixels
        let rgba = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
        ];
        let gray = grayscale_from_rgba(&rgba, 3, 1).unwrap();
        assert_eq!(gray[0], (0.299f32 * 255.0) as u8);
        assert_eq!(gray[1], (0.587f32 * 255.0) as u8);
        assert_eq!(gray[2], (0.114f32 * 255.0) as u8);
    }

    #[test]
    fn test_alpha_ignored() {
        let opaque = vec![100, 150, 200, 255];
        let transparent = vec![100, 150, 200, 0];
        let a = grayscale_from_rgba(&opaque, 1, 1).unwrap();
        let b = grayscale_from_rgba(&transparent, 1, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let rgba = vec![0u8; 10];
        let result = grayscale_from_rgba(&rgba, 4, 4);
        assert!(matches!(result, Err(DetectError::InvalidImageData { .. })));
    }
}
