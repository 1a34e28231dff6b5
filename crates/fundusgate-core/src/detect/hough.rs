use ndarray::Array2;
use tracing::debug;

use super::config::CircleDetectorConfig;
use super::gradient::sobel;

/// A circle reported by the detector. `votes` is the accumulator support
/// of the center; results are ordered strongest first.
#[derive(Clone, Debug)]
pub struct DetectedCircle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub votes: u32,
}

/// Find circles with radius in `[min_radius, max_radius]`.
///
/// Hough-gradient scheme: every edge pixel (Sobel magnitude above the
/// edge threshold) votes for candidate centers along its gradient line,
/// once per radius in the band and in both directions. Center candidates
/// are accumulator local maxima with enough votes, thinned so no two
/// reported centers are closer than `min_center_distance`. The radius of
/// each survivor is the modal distance of supporting edge pixels.
pub fn detect_circles(
    gray: &Array2<f32>,
    config: &CircleDetectorConfig,
    min_radius: f32,
    max_radius: f32,
) -> Vec<DetectedCircle> {
    let (h, w) = gray.dim();
    if h == 0 || w == 0 || min_radius <= 0.0 || max_radius < min_radius {
        return Vec::new();
    }

    let field = sobel(gray);
    let mut edges: Vec<(f32, f32, f32)> = Vec::new();
    for ((row, col), &mag) in field.magnitude.indexed_iter() {
        if mag > config.edge_threshold {
            edges.push((col as f32, row as f32, field.direction[[row, col]]));
        }
    }
    debug!(edge_pixels = edges.len(), "circle detection");
    if edges.is_empty() {
        return Vec::new();
    }

    let ratio = config.accumulator_ratio.max(1.0);
    let aw = (w as f32 / ratio).ceil() as usize;
    let ah = (h as f32 / ratio).ceil() as usize;
    let mut acc = Array2::<u32>::zeros((ah, aw));

    let r_lo = min_radius.round() as i32;
    let r_hi = max_radius.round() as i32;
    for &(x, y, dir) in &edges {
        let (sin, cos) = dir.sin_cos();
        for sign in [-1.0f32, 1.0] {
            for r in r_lo..=r_hi {
                let cx = x + sign * r as f32 * cos;
                let cy = y + sign * r as f32 * sin;
                if cx < 0.0 || cy < 0.0 || cx >= w as f32 || cy >= h as f32 {
                    continue;
                }
                let ax = (cx / ratio) as usize;
                let ay = (cy / ratio) as usize;
                acc[[ay, ax]] += 1;
            }
        }
    }

    // Local maxima over the 4-neighborhood, strongest first. Ties break on
    // position so repeated runs report identical candidates.
    let mut candidates: Vec<(u32, usize, usize)> = Vec::new();
    for ((ay, ax), &votes) in acc.indexed_iter() {
        if votes < config.accumulator_threshold {
            continue;
        }
        let up = ay > 0 && acc[[ay - 1, ax]] > votes;
        let down = ay + 1 < ah && acc[[ay + 1, ax]] > votes;
        let left = ax > 0 && acc[[ay, ax - 1]] > votes;
        let right = ax + 1 < aw && acc[[ay, ax + 1]] > votes;
        if !(up || down || left || right) {
            candidates.push((votes, ay, ax));
        }
    }
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    let min_dist2 = config.min_center_distance * config.min_center_distance;
    let mut circles: Vec<DetectedCircle> = Vec::new();
    for (votes, ay, ax) in candidates {
        let x = (ax as f32 + 0.5) * ratio;
        let y = (ay as f32 + 0.5) * ratio;
        let too_close = circles.iter().any(|c| {
            let dx = c.x - x;
            let dy = c.y - y;
            dx * dx + dy * dy < min_dist2
        });
        if too_close {
            continue;
        }
        let radius = estimate_radius(&edges, x, y, r_lo, r_hi);
        circles.push(DetectedCircle {
            x,
            y,
            radius,
            votes,
        });
    }

    debug!(circles = circles.len(), "circle detection done");
    circles
}

/// Modal distance from `(x, y)` to the supporting edge pixels, restricted
/// to the search band.
fn estimate_radius(edges: &[(f32, f32, f32)], x: f32, y: f32, r_lo: i32, r_hi: i32) -> f32 {
    let bins = (r_hi - r_lo + 1) as usize;
    let mut histogram = vec![0u32; bins];
    for &(ex, ey, _) in edges {
        let d = ((ex - x).powi(2) + (ey - y).powi(2)).sqrt().round() as i32;
        if d >= r_lo && d <= r_hi {
            histogram[(d - r_lo) as usize] += 1;
        }
    }
    let best = histogram
        .iter()
        .enumerate()
        .max_by_key(|&(i, &count)| (count, std::cmp::Reverse(i)))
        .map(|(i, _)| i)
        .unwrap_or(bins / 2);
    (r_lo + best as i32) as f32
}
