use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major 8-bit grayscale image
pub type GrayBuffer = Vec<u8>;

/// Blob center of mass in pixel coordinates, before rounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f32,
    pub y: f32,
}

/// Accepted detection: rounded centroid + run-unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    pub x: i32,
    pub y: i32,
    pub id: Uuid,
}

impl Candidate {
    /// Rounds a centroid to integer coordinates and mints a fresh id.
    pub fn from_centroid(c: Centroid) -> Self {
        Self {
            x: c.x.round() as i32,
            y: c.y.round() as i32,
            id: Uuid::new_v4(),
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectionParams {
    /// Lowest brightness threshold the descent reaches (inclusive)
    pub min_threshold: u8,
    /// Starting brightness threshold (inclusive, >= min_threshold)
    pub max_threshold: u8,
    /// Threshold decrement per descent step, must be > 0
    pub step: u8,
    /// Nominal ball radius in pixels; drives the minimum-area filter
    /// and the overlap distance
    pub radius: u32,
    /// Overlap ratio above which a candidate is dropped, 0.0..=1.0
    pub overlap_limit: f32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            min_threshold: 120,
            max_threshold: 240,
            step: 5,
            radius: 20,
            overlap_limit: 0.3,
        }
    }
}
