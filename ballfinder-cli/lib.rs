use ballfinder_core::{Candidate, DetectionParams};
use ballfinder_detect::{BallDetector, DetectError};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_circle_mut;

pub use ballfinder_core::{self, Candidate as BallCandidate, DetectionParams as Params};
pub use ballfinder_detect::{self, DetectorBuilder, DetectorConfig};

#[derive(Debug)]
pub enum FinderError {
    Detect(DetectError),
    Image(image::ImageError),
}

impl std::fmt::Display for FinderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinderError::Detect(e) => write!(f, "Detection error: {}", e),
            FinderError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for FinderError {}

impl From<DetectError> for FinderError {
    fn from(err: DetectError) -> Self {
        FinderError::Detect(err)
    }
}

impl From<image::ImageError> for FinderError {
    fn from(err: image::ImageError) -> Self {
        FinderError::Image(err)
    }
}

pub type FinderResult<T> = Result<T, FinderError>;

/// High-level ball finder that ties image decoding to the detector
pub struct BallFinder {
    params: DetectionParams,
}

impl BallFinder {
    /// Create a new ball finder with the given detection parameters
    pub fn new(params: DetectionParams) -> Self {
        Self { params }
    }

    /// Decode an image file and detect ball candidates in it
    pub fn detect_file<P: AsRef<std::path::Path>>(&self, path: P) -> FinderResult<Vec<Candidate>> {
        let img = image::ImageReader::open(path)
            .map_err(image::ImageError::IoError)?
            .decode()?
            .to_rgba8();
        self.detect_image(&img)
    }

    /// Detect ball candidates in a decoded RGBA image
    pub fn detect_image(&self, img: &RgbaImage) -> FinderResult<Vec<Candidate>> {
        let (w, h) = img.dimensions();
        let detector = BallDetector::new(self.params.clone(), w as usize, h as usize)?;
        Ok(detector.detect(img.as_raw())?)
    }

    /// Draw hollow circles of the configured radius over the candidates
    pub fn draw_overlay(&self, img: &mut RgbaImage, candidates: &[Candidate]) {
        for c in candidates {
            draw_hollow_circle_mut(
                img,
                (c.x, c.y),
                self.params.radius as i32,
                Rgba([255, 0, 0, 255]),
            );
        }
    }

    /// Get the detection parameters
    pub fn params(&self) -> &DetectionParams {
        &self.params
    }
}

impl Default for BallFinder {
    fn default() -> Self {
        Self::new(DetectionParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk_image(width: u32, height: u32, centers: &[(i32, i32)], r: i32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(width, height, Rgba([10, 10, 10, 255]));
        for &(cx, cy) in centers {
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    let (dx, dy) = (x - cx, y - cy);
                    if dx * dx + dy * dy <= r * r {
                        img.put_pixel(x as u32, y as u32, Rgba([240, 240, 240, 255]));
                    }
                }
            }
        }
        img
    }

    fn test_params() -> DetectionParams {
        DetectionParams {
            min_threshold: 50,
            max_threshold: 200,
            step: 10,
            radius: 10,
            overlap_limit: 0.3,
        }
    }

    #[test]
    fn test_detect_image_finds_disks() {
        let finder = BallFinder::new(test_params());
        let img = disk_image(100, 100, &[(25, 25), (75, 75)], 10);
        let candidates = finder.detect_image(&img).unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_overlay_drawing_is_in_bounds() {
        let finder = BallFinder::new(test_params());
        let mut img = disk_image(100, 100, &[(50, 50)], 10);
        let candidates = finder.detect_image(&img).unwrap();
        assert_eq!(candidates.len(), 1);
        // imageproc clips to the image; drawing must not panic
        finder.draw_overlay(&mut img, &candidates);
    }

    #[test]
    fn test_missing_file_reports_image_error() {
        let finder = BallFinder::default();
        let result = finder.detect_file("does-not-exist.png");
        assert!(matches!(result, Err(FinderError::Image(_))));
    }
}
