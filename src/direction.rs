//! Maps an edge's geographic bearing onto the eight octolinear compass
//! directions, with two fallback candidates for the solver to use when
//! the preferred direction conflicts with another constraint.

use std::f64::consts::PI;

/// The eight-direction candidate pool widened by one step on each side
/// (`-1..=9`), so the classifier can find "the direction just past
/// west" (`-1`, which wraps to NW) without special-casing the wrap.
const CANDIDATE_POOL: [i32; 11] = [-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// `(k + 16) mod 8`, robust to the `-1` candidate.
fn mod8(k: i32) -> u8 {
    ((k + 16).rem_euclid(8)) as u8
}

/// The continuous octolinear direction index of a 2-D vector:
/// `4 * (atan2(y, x) / pi + 1)`, so `0` is due west and the value
/// increases counter-clockwise through the eight compass points.
pub fn direction_angle(dx: f64, dy: f64) -> f64 {
    4.0 * (dy.atan2(dx) / PI + 1.0)
}

/// Find the candidate in `numbers` closest to `target`, breaking ties
/// toward the smaller integer. `numbers` must be supplied in ascending
/// order (the pool and its progressively-shrunk copies always are).
fn closest_number(target: f64, numbers: &[i32]) -> i32 {
    let mut best = numbers[0];
    let mut best_dist = (numbers[0] as f64 - target).abs();
    for &n in &numbers[1..] {
        let dist = (n as f64 - target).abs();
        if dist < best_dist {
            best = n;
            best_dist = dist;
        }
    }
    best
}

/// The three closest octolinear direction ids (0-7) to `angle`, ordered
/// by angular closeness: the first is the main direction, the second is
/// the secondary fallback, the third a further fallback.
pub fn closest_direction_ids(angle: f64) -> Vec<u8> {
    let mut pool: Vec<i32> = CANDIDATE_POOL.to_vec();
    let mut result = Vec::with_capacity(3);
    for _ in 0..3 {
        let picked = closest_number(angle, &pool);
        result.push(mod8(picked));
        pool.retain(|&n| n != picked);
    }
    result
}

/// Computes an edge's candidate octolinear directions from its
/// endpoints' geographic coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionClassifier;

impl DirectionClassifier {
    /// Classify a single edge given its endpoint coordinates, returning
    /// `(source_directions, target_directions)`.
    ///
    /// `target_directions` is the elementwise `(d + 4) mod 8` of
    /// `source_directions`, i.e. the same three candidates viewed from
    /// the opposite end of the edge.
    pub fn classify(
        &self,
        source: (f64, f64),
        target: (f64, f64),
    ) -> (Vec<u8>, Vec<u8>) {
        let dx = target.0 - source.0;
        let dy = target.1 - source.1;
        let angle = direction_angle(dx, dy);
        let source_directions = closest_direction_ids(angle);
        let target_directions = source_directions
            .iter()
            .map(|&d| mod8(d as i32 + 4))
            .collect();
        (source_directions, target_directions)
    }
}
