//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For positions i ≤ j, reversing the segment `r[i..=j]` replaces the edges
//! `(prev, r[i])` and `(r[j], next)` with `(prev, r[j])` and `(r[i], next)`:
//!
//! ```text
//! delta = d(prev, r[j]) + d(r[i], next) - d(prev, r[i]) - d(r[j], next)
//! ```
//!
//! `prev` is the start for i = 0. The path is open, so when j is the last
//! position there is no `next` edge and only the first pair of terms counts;
//! this lets 2-opt also reverse the tail of the path.
//!
//! If delta < 0, the segment is reversed (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

use super::IMPROVEMENT_EPSILON;

/// Applies 2-opt until no improving reversal remains.
///
/// `order` holds location indices visited after `start`. Returns the
/// improved order and its open-path length.
///
/// # Examples
///
/// ```
/// use geo_route::distance::DistanceMatrix;
/// use geo_route::local_search::two_opt_improve;
///
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let (improved, dist) = two_opt_improve(&[3, 2, 1], 0, &dm);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert!((dist - 3.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(order: &[usize], start: usize, distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = order.to_vec();
    while two_opt_pass(&mut current, start, distances) {}
    let dist = distances.path_length(start, &current);
    (current, dist)
}

/// One sweep over all (i, j) pairs. Returns `true` if any reversal was applied.
pub(crate) fn two_opt_pass(route: &mut [usize], start: usize, distances: &DistanceMatrix) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    let mut improved = false;
    for i in 0..n - 1 {
        for j in i + 1..n {
            if two_opt_delta(route, start, distances, i, j) < -IMPROVEMENT_EPSILON {
                route[i..=j].reverse();
                improved = true;
            }
        }
    }
    improved
}

/// Distance change from reversing `route[i..=j]`.
fn two_opt_delta(route: &[usize], start: usize, distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let prev = if i == 0 { start } else { route[i - 1] };
    let (old_tail, new_tail) = match route.get(j + 1) {
        Some(&next) => (distances.get(route[j], next), distances.get(route[i], next)),
        None => (0.0, 0.0),
    };

    let old_cost = distances.get(prev, route[i]) + old_tail;
    let new_cost = distances.get(prev, route[j]) + new_tail;

    new_cost - old_cost
}
