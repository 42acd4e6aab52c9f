//! Dense distance matrix.

use super::{distance_in, DistanceUnit};
use crate::models::Coordinate;

/// A dense n×n distance matrix stored in row-major order.
///
/// Search strategies address locations by index: index 0 is the origin and
/// `1..size()` are the destinations in canonical order.
///
/// # Examples
///
/// ```
/// use geo_route::distance::{DistanceMatrix, DistanceUnit};
/// use geo_route::models::Coordinate;
///
/// let points = vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 1.0).unwrap(),
///     Coordinate::new(0.0, 3.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&points, DistanceUnit::Kilometers);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes great-circle distances between every pair of coordinates.
    pub fn from_coordinates(points: &[Coordinate], unit: DistanceUnit) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance_in(points[i], points[j], unit);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Length of the open path `start → order[0] → … → order[n-1]`.
    ///
    /// Summed left to right, so equal orders always score identically.
    pub fn path_length(&self, start: usize, order: &[usize]) -> f64 {
        let mut dist = 0.0;
        let mut prev = start;
        for &next in order {
            dist += self.get(prev, next);
            prev = next;
        }
        dist
    }
}
