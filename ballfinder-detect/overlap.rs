use ballfinder_core::Candidate;

/// Returns true when `candidate` overlaps an already-accepted candidate
/// beyond the configured limit.
///
/// All candidates share the same nominal radius, so the sum of radii is
/// `2 * radius`. For centers closer than that, the overlap ratio is
/// `1 - d / (2 * radius)`; the first accepted candidate that pushes the
/// ratio past `limit` rejects the newcomer and ends the scan.
pub fn is_overlapping(candidate: &Candidate, accepted: &[Candidate], radius: u32, limit: f32) -> bool {
    let sum_r = 2.0 * radius as f32;
    for other in accepted {
        let dx = (candidate.x - other.x) as f32;
        let dy = (candidate.y - other.y) as f32;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < sum_r {
            let overlap_ratio = (1.0 - dist / sum_r).max(0.0);
            if overlap_ratio > limit {
                return true;
            }
        }
    }
    false
}
