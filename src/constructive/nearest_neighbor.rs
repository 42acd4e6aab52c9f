//! Nearest-neighbor constructive heuristic.
//!
//! Builds an open path greedily: starting from the origin, always move to
//! the nearest unvisited destination. The path does not return.
//!
//! # Complexity
//!
//! O(n²) where n = number of destinations.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;

/// Constructs a visiting order using the nearest-neighbor heuristic.
///
/// Visits every location of `distances` other than `start` exactly once.
/// Ties are broken towards the lower index.
///
/// # Examples
///
/// ```
/// use geo_route::distance::DistanceMatrix;
/// use geo_route::constructive::nearest_neighbor;
///
/// // 0 — 2 — 1 on a line: 0→2 is 1, 0→1 is 2.
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 2.0, 1.0,
///     2.0, 0.0, 1.0,
///     1.0, 1.0, 0.0,
/// ]).unwrap();
/// assert_eq!(nearest_neighbor(&dm, 0), vec![2, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(remaining.len());
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    order
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

    #[test]
    fn test_nn_follows_line() {
        assert_eq!(nearest_neighbor(&line(4), 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_nn_from_middle() {
        // From 2: 1 and 3 are both at distance 1, lower index wins.
        assert_eq!(nearest_neighbor(&line(5), 2), vec![1, 0, 3, 4]);
    }

    #[test]
    fn test_nn_empty() {
        assert!(nearest_neighbor(&line(1), 0).is_empty());
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 10.0, 1.0, //
                10.0, 0.0, 9.0, //
                1.0, 9.0, 0.0,
            ],
        )
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm, 0), vec![2, 1]);
    }

    #[test]
    fn test_nn_covers_all() {
        let order = nearest_neighbor(&line(7), 3);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 4, 5, 6]);
    }
}
