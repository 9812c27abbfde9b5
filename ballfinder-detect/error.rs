#[derive(Debug, Clone)]
pub enum DetectError {
    InvalidImageSize { width: usize, height: usize },
    InvalidImageData { expected_len: usize, actual_len: usize },
    InvalidThresholdRange { min: u8, max: u8 },
    InvalidStep(u8),
    InvalidRadius(u32),
    InvalidOverlapLimit(f32),
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::InvalidImageSize { width, height } => {
                write!(f, "Invalid image dimensions: {}x{} (must be > 0)", width, height)
            }
            DetectError::InvalidImageData { expected_len, actual_len } => {
                write!(f, "Image data length mismatch: expected {}, got {}", expected_len, actual_len)
            }
            DetectError::InvalidThresholdRange { min, max } => {
                write!(f, "Invalid threshold range: min {} > max {}", min, max)
            }
            DetectError::InvalidStep(s) => {
                write!(f, "Invalid descent step: {} (must be > 0)", s)
            }
            DetectError::InvalidRadius(r) => {
                write!(f, "Invalid ball radius: {} (must be > 0)", r)
            }
            DetectError::InvalidOverlapLimit(l) => {
                write!(f, "Invalid overlap limit: {} (must be in 0.0..=1.0)", l)
            }
        }
    }
}

impl std::error::Error for DetectError {}

pub type DetectResult<T> = Result<T, DetectError>;
