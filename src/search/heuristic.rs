//! Approximate route search for inputs too large to enumerate.
//!
//! # Algorithm
//!
//! 1. Build an open path with nearest neighbor from the origin.
//! 2. Alternate one 2-opt pass and one Or-opt pass until neither finds an
//!    improving move, or the stop condition fires.
//!
//! The result visits every destination exactly once but is not guaranteed
//! to be minimal.

use tracing::{debug, trace};

use super::{RouteSearch, SearchContext, SearchOutcome, ORIGIN};
use crate::constructive::nearest_neighbor;
use crate::local_search::{or_opt_pass, two_opt_pass};
use crate::models::SearchMethod;

/// Nearest neighbor construction with optional local search.
///
/// # Examples
///
/// ```
/// use geo_route::models::{SearchMethod, Waypoint};
/// use geo_route::search::{HeuristicSearch, RouteSearch};
///
/// let origin = Waypoint::at("hq".to_string(), 0.0, 0.0).unwrap();
/// let stops: Vec<_> = (1..=20)
///     .map(|i| Waypoint::at(i.to_string(), (i % 5) as f64 * 0.1, (i / 5) as f64 * 0.1).unwrap())
///     .collect();
/// let route = HeuristicSearch::new().search(&origin, &stops).unwrap();
/// assert_eq!(route.len(), 21);
/// assert_eq!(route.method(), SearchMethod::Heuristic);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicSearch {
    local_search: bool,
}

impl HeuristicSearch {
    /// Nearest neighbor followed by 2-opt and Or-opt.
    pub fn new() -> Self {
        Self { local_search: true }
    }

    /// Enables or disables the local search phase.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }

    /// Whether the local search phase runs.
    pub fn local_search(&self) -> bool {
        self.local_search
    }
}

impl Default for HeuristicSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSearch for HeuristicSearch {
    fn method(&self) -> SearchMethod {
        SearchMethod::Heuristic
    }

    fn search_order(&self, ctx: &SearchContext<'_>) -> SearchOutcome {
        let distances = ctx.distances();
        let mut order = nearest_neighbor(distances, ORIGIN);
        let constructed = distances.path_length(ORIGIN, &order);

        if self.local_search {
            let mut rounds = 0usize;
            while !ctx.stop().is_stopped() {
                let reversed = two_opt_pass(&mut order, ORIGIN, distances);
                let relocated = or_opt_pass(&mut order, ORIGIN, distances);
                rounds += 1;
                trace!(rounds, reversed, relocated, "local search round");
                if !reversed && !relocated {
                    break;
                }
            }
            debug!(rounds, "local search converged or stopped");
        }

        let distance = distances.path_length(ORIGIN, &order);
        debug!(
            destinations = order.len(),
            constructed, distance, "heuristic search finished"
        );

        SearchOutcome {
            // Zero or one destination admits a single order.
            optimal: order.len() <= 1,
            order,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::termination::{CancellationToken, StopCondition};

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

    fn grid(side: usize) -> DistanceMatrix {
        let mut points = vec![(-1.0, -1.0)];
        for i in 0..side {
            for j in 0..side {
                points.push((i as f64, j as f64));
            }
        }
        euclidean(&points)
    }

    fn run(search: &HeuristicSearch, dm: &DistanceMatrix, stop: &StopCondition) -> SearchOutcome {
        search.search_order(&SearchContext::new(dm, stop))
    }

    #[test]
    fn test_visits_every_destination_once() {
        let dm = grid(5);
        let outcome = run(&HeuristicSearch::new(), &dm, &StopCondition::never());
        let mut sorted = outcome.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=25).collect::<Vec<_>>());
        assert!((dm.path_length(ORIGIN, &outcome.order) - outcome.distance).abs() < 1e-12);
        assert!(!outcome.optimal);
    }

    #[test]
    fn test_local_search_never_worse_than_construction() {
        let dm = euclidean(&[
            (0.0, 0.0),
            (5.0, 1.0),
            (1.0, 5.0),
            (-4.0, 2.0),
            (3.0, -3.0),
            (-2.0, -5.0),
            (6.0, 6.0),
            (-6.0, 0.5),
        ]);
        let stop = StopCondition::never();
        let plain = run(&HeuristicSearch::new().with_local_search(false), &dm, &stop);
        let improved = run(&HeuristicSearch::new(), &dm, &stop);
        assert!(improved.distance <= plain.distance + 1e-10);
    }

    #[test]
    fn test_grid_row_is_solved_exactly() {
        // Points on a line starting next to the origin: nearest neighbor is optimal.
        let dm = euclidean(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let outcome = run(&HeuristicSearch::new(), &dm, &StopCondition::never());
        assert_eq!(outcome.order, vec![1, 2, 3]);
        assert!((outcome.distance - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_stopped_search_returns_construction() {
        let dm = grid(4);
        let token = CancellationToken::new();
        token.cancel();
        let stop = StopCondition::never().with_token(token);
        let stopped = run(&HeuristicSearch::new(), &dm, &stop);
        let plain = run(
            &HeuristicSearch::new().with_local_search(false),
            &dm,
            &StopCondition::never(),
        );
        assert_eq!(stopped, plain);
    }

    #[test]
    fn test_empty_and_single() {
        let stop = StopCondition::never();
        let empty = run(&HeuristicSearch::new(), &euclidean(&[(0.0, 0.0)]), &stop);
        assert!(empty.order.is_empty());
        assert!(empty.optimal);

        let single = run(&HeuristicSearch::new(), &euclidean(&[(0.0, 0.0), (2.0, 0.0)]), &stop);
        assert_eq!(single.order, vec![1]);
        assert!(single.optimal);
    }
}
