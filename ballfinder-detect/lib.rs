//! Brightness threshold-descent blob detection.
//!
//! The detector scans an image at a descending series of brightness
//! thresholds. At each level it builds a binary mask, labels the
//! 4-connected foreground components, and keeps each component's centroid
//! unless it overlaps a centroid accepted at a higher threshold. A ball's
//! bright core is picked up early; its dimmer rim at later levels is
//! folded into the same detection by the overlap filter, while genuinely
//! fainter balls still surface as the threshold drops.

pub mod config;
pub mod detector;
pub mod error;
pub mod grayscale;
pub mod label;
pub mod mask;
pub mod overlap;

pub use config::{DetectorBuilder, DetectorConfig};
pub use detector::BallDetector;
pub use error::{DetectError, DetectResult};
pub use grayscale::grayscale_from_rgba;
pub use label::find_centroids;
pub use mask::build_mask;
pub use overlap::is_overlapping;
