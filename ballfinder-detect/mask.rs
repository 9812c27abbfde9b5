/// Builds a fresh binary mask for one threshold level:
/// mask[i] = 1 iff gray[i] >= threshold.
///
/// A new buffer is allocated per call so that one descent step can never
/// leak foreground pixels into the next.
pub fn build_mask(gray: &[u8], threshold: u8) -> Vec<u8> {
    gray.iter().map(|&g| (g >= threshold) as u8).collect()
}
