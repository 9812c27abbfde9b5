use ballfinder_core::{Candidate, DetectionParams, GrayBuffer};
use log::{debug, trace};

use crate::error::{DetectError, DetectResult};
use crate::grayscale::grayscale_from_rgba;
use crate::label::find_centroids;
use crate::mask::build_mask;
use crate::overlap::is_overlapping;

/// Threshold-descent ball detector.
///
/// Walks a brightness threshold from `max_threshold` down to
/// `min_threshold`, labels the connected bright regions of each binary
/// mask, and accumulates their centroids while dropping candidates that
/// overlap an earlier acceptance. Descending locks each ball onto its
/// brightest-core detection while lower steps still pick up fainter balls.
pub struct BallDetector {
    params: DetectionParams,
    w: usize,
    h: usize,
}

impl BallDetector {
    /// Creates a new detector with validation
    pub fn new(params: DetectionParams, width: usize, height: usize) -> DetectResult<Self> {
        if width == 0 || height == 0 {
            return Err(DetectError::InvalidImageSize { width, height });
        }
        if params.min_threshold > params.max_threshold {
            return Err(DetectError::InvalidThresholdRange {
                min: params.min_threshold,
                max: params.max_threshold,
            });
        }
        // A zero step would never lower the threshold and spin forever
        if params.step == 0 {
            return Err(DetectError::InvalidStep(params.step));
        }
        if params.radius == 0 {
            return Err(DetectError::InvalidRadius(params.radius));
        }
        if !(0.0..=1.0).contains(&params.overlap_limit) {
            return Err(DetectError::InvalidOverlapLimit(params.overlap_limit));
        }

        Ok(Self {
            params,
            w: width,
            h: height,
        })
    }

    /// Detects ball candidates in an RGBA pixel buffer.
    pub fn detect(&self, rgba: &[u8]) -> DetectResult<Vec<Candidate>> {
        let gray = grayscale_from_rgba(rgba, self.w, self.h)?;
        self.detect_grayscale(&gray)
    }

    /// Runs the threshold descent over an already-converted grayscale buffer.
    ///
    /// Candidates are returned in acceptance order: threshold descending,
    /// then scan order within each mask. Every run is deterministic up to
    /// the generated ids.
    pub fn detect_grayscale(&self, gray: &GrayBuffer) -> DetectResult<Vec<Candidate>> {
        self.validate_gray(gray)?;

        let mut detected: Vec<Candidate> = Vec::new();

        let mut t = self.params.max_threshold as i32;
        while t >= self.params.min_threshold as i32 {
            let mask = build_mask(gray, t as u8);
            let centroids = find_centroids(&mask, self.w, self.h, self.params.radius);
            trace!("threshold {}: {} component(s)", t, centroids.len());

            for c in centroids {
                let candidate = Candidate::from_centroid(c);
                // Deduplicate against every acceptance so far, not just
                // the ones from the current threshold level
                if !is_overlapping(
                    &candidate,
                    &detected,
                    self.params.radius,
                    self.params.overlap_limit,
                ) {
                    detected.push(candidate);
                }
            }

            t -= self.params.step as i32;
        }

        debug!(
            "descent {}..={} step {} found {} candidate(s)",
            self.params.max_threshold,
            self.params.min_threshold,
            self.params.step,
            detected.len()
        );
        Ok(detected)
    }

    fn validate_gray(&self, gray: &[u8]) -> DetectResult<()> {
        let expected_len = self.w * self.h;
        if gray.len() != expected_len {
            return Err(DetectError::InvalidImageData {
                expected_len,
                actual_len: gray.len(),
            });
        }
        Ok(())
    }

    /// Get detector parameters
    pub fn params(&self) -> &DetectionParams {
        &self.params
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}
