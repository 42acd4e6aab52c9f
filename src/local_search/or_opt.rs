//! Open-path Or-opt improvement.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive stops to a different
//! position within the path, keeping their direction. For each segment the
//! gain of removing it is compared with the cheapest reinsertion; the best
//! improving move of a pass is applied.
//!
//! Because the path is open, removing or inserting at the end touches only
//! one edge.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::DistanceMatrix;

use super::IMPROVEMENT_EPSILON;

/// Longest segment Or-opt relocates.
const MAX_SEGMENT: usize = 3;

/// Applies Or-opt until no improving relocation remains.
///
/// Returns the improved order and its open-path length.
///
/// # Examples
///
/// ```
/// use geo_route::distance::DistanceMatrix;
/// use geo_route::local_search::or_opt_improve;
///
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// // 4 sits in the middle of the path; Or-opt moves it to the end.
/// let (improved, dist) = or_opt_improve(&[1, 4, 2, 3], 0, &dm);
/// assert_eq!(improved, vec![1, 2, 3, 4]);
/// assert!((dist - 4.0).abs() < 1e-10);
/// ```
pub fn or_opt_improve(order: &[usize], start: usize, distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = order.to_vec();
    while or_opt_pass(&mut current, start, distances) {}
    let dist = distances.path_length(start, &current);
    (current, dist)
}

/// One pass over every segment length. Returns `true` if any move was applied.
pub(crate) fn or_opt_pass(route: &mut Vec<usize>, start: usize, distances: &DistanceMatrix) -> bool {
    let mut improved = false;
    for seg_len in 1..=MAX_SEGMENT.min(route.len()) {
        if try_or_opt_move(route, start, distances, seg_len) {
            improved = true;
        }
    }
    improved
}

/// Applies the best relocation for one segment length, if it improves.
fn try_or_opt_move(route: &mut Vec<usize>, start: usize, distances: &DistanceMatrix, seg_len: usize) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }

    let mut best_delta = -IMPROVEMENT_EPSILON;
    let mut best_move: Option<(usize, usize)> = None;
    let mut rest = Vec::with_capacity(n - seg_len);

    for from in 0..=(n - seg_len) {
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];
        let prev = if from == 0 { start } else { route[from - 1] };

        // Old edges: prev→seg_first + seg_last→after; new: prev→after.
        let removal_gain = match route.get(from + seg_len) {
            Some(&after) => {
                distances.get(prev, seg_first) + distances.get(seg_last, after)
                    - distances.get(prev, after)
            }
            None => distances.get(prev, seg_first),
        };

        rest.clear();
        rest.extend_from_slice(&route[..from]);
        rest.extend_from_slice(&route[from + seg_len..]);

        // `to` is an insertion index into `rest`; `to == from` restores the
        // original order.
        for to in 0..=rest.len() {
            if to == from {
                continue;
            }
            let ins_prev = if to == 0 { start } else { rest[to - 1] };
            let insertion_cost = match rest.get(to) {
                Some(&ins_next) => {
                    distances.get(ins_prev, seg_first) + distances.get(seg_last, ins_next)
                        - distances.get(ins_prev, ins_next)
                }
                None => distances.get(ins_prev, seg_first),
            };

            let delta = insertion_cost - removal_gain;
            if delta < best_delta {
                best_delta = delta;
                best_move = Some((from, to));
            }
        }
    }

    match best_move {
        Some((from, to)) => {
            let segment: Vec<usize> = route.drain(from..from + seg_len).collect();
            route.splice(to..to, segment);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    #[test]
    fn test_or_opt_already_optimal() {
        let dm = line(4);
        let (improved, dist) = or_opt_improve(&[1, 2, 3], 0, &dm);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((dist - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_empty() {
        let dm = line(4);
        let (improved, dist) = or_opt_improve(&[], 0, &dm);
        assert!(improved.is_empty());
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_or_opt_single() {
        let dm = line(4);
        let (improved, dist) = or_opt_improve(&[2], 0, &dm);
        assert_eq!(improved, vec![2]);
        assert!((dist - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_moves_segment_forward() {
        // [3, 4] is visited before [1, 2]; moving the pair to the end is optimal.
        let dm = line(5);
        let (improved, dist) = or_opt_improve(&[3, 4, 1, 2], 0, &dm);
        assert_eq!(improved.len(), 4);
        assert!((dist - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_does_not_worsen() {
        let dm = euclidean(&[(5.0, 5.0), (0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let initial = [1, 4, 2, 3];
        let initial_dist = dm.path_length(0, &initial);
        let (improved, improved_dist) = or_opt_improve(&initial, 0, &dm);
        assert!(improved_dist <= initial_dist + 1e-10);
        let mut sorted = improved.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_or_opt_reported_distance_matches_path() {
        let dm = euclidean(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, -1.0), (4.0, 2.0)]);
        let (improved, dist) = or_opt_improve(&[4, 1, 3, 2], 0, &dm);
        assert!((dist - dm.path_length(0, &improved)).abs() < 1e-10);
    }
}
