use std::collections::VecDeque;
use std::f32::consts::PI;

use ballfinder_core::Centroid;

/// Fraction of the nominal radius that sets the minimum blob area.
/// A component must cover more than pi * (0.4 * radius)^2 pixels to count,
/// which drops noise specks while still accepting partial blobs.
const MIN_AREA_RADIUS_FRACTION: f32 = 0.4;

/// Connected-component labeling over a binary mask.
///
/// Scans the flat mask in linear-index order and flood-fills every
/// unvisited foreground pixel into a 4-connected component, accumulating
/// the coordinate sums needed for its centroid. Components are reported
/// in increasing linear-index order of their first visited pixel.
///
/// The fill uses an explicit queue rather than recursion so that large
/// blobs cannot overflow the stack.
pub fn find_centroids(mask: &[u8], width: usize, height: usize, radius: u32) -> Vec<Centroid> {
    debug_assert_eq!(mask.len(), width * height);

    let min_area = PI * (radius as f32 * MIN_AREA_RADIUS_FRACTION).powi(2);
    let mut centroids = Vec::new();
    let mut visited = vec![false; mask.len()];
    let mut queue = VecDeque::new();

    for start in 0..mask.len() {
        if mask[start] != 1 || visited[start] {
            continue;
        }

        let mut sum_x = 0u64;
        let mut sum_y = 0u64;
        let mut count = 0u64;

        visited[start] = true;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            let x = idx % width;
            let y = idx / width;
            sum_x += x as u64;
            sum_y += y as u64;
            count += 1;

            // Horizontal neighbors stay on the current row: without the
            // column guard, linear-index arithmetic would connect the last
            // pixel of one row to the first pixel of the next.
            if x > 0 {
                push_foreground(mask, &mut visited, &mut queue, idx - 1);
            }
            if x + 1 < width {
                push_foreground(mask, &mut visited, &mut queue, idx + 1);
            }
            // Vertical neighbors shift by a whole row and keep their
            // column, so a bounds check on y is all they need.
            if y > 0 {
                push_foreground(mask, &mut visited, &mut queue, idx - width);
            }
            if y + 1 < height {
                push_foreground(mask, &mut visited, &mut queue, idx + width);
            }
        }

        if count as f32 > min_area {
            centroids.push(Centroid {
                x: sum_x as f32 / count as f32,
                y: sum_y as f32 / count as f32,
            });
        }
    }

    centroids
}

#[inline]
fn push_foreground(mask: &[u8], visited: &mut [bool], queue: &mut VecDeque<usize>, idx: usize) {
    if mask[idx] == 1 && !visited[idx] {
        visited[idx] = true;
        queue.push_back(idx);
    }
}
