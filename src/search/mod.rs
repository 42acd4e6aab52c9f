//! Route search strategies.
//!
//! - [`ExhaustiveSearch`] — Enumerates every ordering, exact, O(n!) worst case
//! - [`HeuristicSearch`] — Nearest neighbor + 2-opt/Or-opt, O(n³) worst case
//!
//! Both implement [`RouteSearch`], so each can be used and tested on its
//! own; [`RouteOptimizer`](crate::optimizer::RouteOptimizer) picks one by
//! destination count.

mod exhaustive;
mod heuristic;
mod instance;

pub use exhaustive::ExhaustiveSearch;
pub use heuristic::HeuristicSearch;

pub(crate) use instance::RoutingInstance;

use crate::distance::{DistanceMatrix, DistanceUnit};
use crate::error::Result;
use crate::models::{Route, SearchMethod, Waypoint, WaypointId};
use crate::termination::StopCondition;

/// Matrix index of the origin.
pub const ORIGIN: usize = 0;

/// Input to the index-based core of a strategy.
///
/// Location [`ORIGIN`] is the fixed start; `1..=num_destinations()` are the
/// destinations to order.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    distances: &'a DistanceMatrix,
    stop: &'a StopCondition,
}

impl<'a> SearchContext<'a> {
    /// Creates a context over a matrix whose index 0 is the origin.
    pub fn new(distances: &'a DistanceMatrix, stop: &'a StopCondition) -> Self {
        Self { distances, stop }
    }

    /// Pairwise distances.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// When to give up and return the best candidate so far.
    pub fn stop(&self) -> &'a StopCondition {
        self.stop
    }

    /// Number of locations to order after the origin.
    pub fn num_destinations(&self) -> usize {
        self.distances.size().saturating_sub(1)
    }
}

/// Result of a strategy run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Destination indices in visiting order, excluding [`ORIGIN`].
    pub order: Vec<usize>,
    /// Open-path length of `ORIGIN → order`.
    pub distance: f64,
    /// `true` if no shorter order exists.
    pub optimal: bool,
}

/// A strategy for ordering destinations after a fixed origin.
///
/// Implementors provide [`RouteSearch::search_order`] over matrix indices;
/// [`RouteSearch::search`] wraps it with input validation and route
/// assembly.
///
/// # Examples
///
/// ```
/// use geo_route::models::Waypoint;
/// use geo_route::search::{ExhaustiveSearch, HeuristicSearch, RouteSearch};
///
/// let origin = Waypoint::at(0, 0.0, 0.0).unwrap();
/// let stops = vec![
///     Waypoint::at(1, 0.0, 1.0).unwrap(),
///     Waypoint::at(2, 0.0, 2.0).unwrap(),
///     Waypoint::at(3, 0.0, -1.0).unwrap(),
/// ];
/// let exact = ExhaustiveSearch::new().search(&origin, &stops).unwrap();
/// let approx = HeuristicSearch::new().search(&origin, &stops).unwrap();
/// assert!(exact.total_distance() <= approx.total_distance() + 1e-9);
/// ```
pub trait RouteSearch: Send + Sync {
    /// Which kind of search this is.
    fn method(&self) -> SearchMethod;

    /// Orders every destination of `ctx`.
    ///
    /// Must return each index in `1..=ctx.num_destinations()` exactly once.
    fn search_order(&self, ctx: &SearchContext<'_>) -> SearchOutcome;

    /// Validates the waypoints and returns the route found by this strategy,
    /// with distances in kilometers.
    fn search<Id: WaypointId>(
        &self,
        origin: &Waypoint<Id>,
        destinations: &[Waypoint<Id>],
    ) -> Result<Route<Id>>
    where
        Self: Sized,
    {
        let instance = RoutingInstance::new(origin, destinations, DistanceUnit::Kilometers)?;
        let stop = StopCondition::never();
        let outcome = self.search_order(&SearchContext::new(instance.distances(), &stop));
        instance.into_route(outcome, self.method())
    }
}
