//! Route type.

use serde::Serialize;

use super::Waypoint;
use crate::distance::DistanceUnit;

/// The strategy that produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Every ordering was considered.
    Exhaustive,
    /// Nearest neighbor construction followed by local search.
    Heuristic,
}

/// A single hop between two consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a, Id> {
    /// Stop the leg departs from.
    pub from: &'a Waypoint<Id>,
    /// Stop the leg arrives at.
    pub to: &'a Waypoint<Id>,
    /// Leg length in the route's unit.
    pub distance: f64,
}

/// An ordered visiting sequence starting at the origin.
///
/// The first stop is always the origin, every destination appears exactly
/// once, and the route never returns to the origin. Routes are produced by
/// the optimizer and are read-only afterwards.
///
/// # Examples
///
/// ```
/// use geo_route::models::Waypoint;
/// use geo_route::optimize;
///
/// let origin = Waypoint::at("depot", 0.0, 0.0).unwrap();
/// let stops = vec![
///     Waypoint::at("far", 0.0, 2.0).unwrap(),
///     Waypoint::at("near", 0.0, 1.0).unwrap(),
/// ];
/// let route = optimize(&origin, &stops).unwrap();
/// assert_eq!(route.ids(), vec![&"depot", &"near", &"far"]);
/// assert_eq!(route.origin().id(), &"depot");
/// ```
///
/// Routes serialize for output but cannot be deserialized, which would
/// bypass the origin-first invariant:
///
/// ```compile_fail
/// use geo_route::Route;
///
/// let json = r#"{"stops":[],"total_distance":0.0,"unit":"kilometers","method":"exhaustive","optimal":true}"#;
/// let route: Route<String> = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<Id> {
    stops: Vec<Waypoint<Id>>,
    total_distance: f64,
    unit: DistanceUnit,
    method: SearchMethod,
    optimal: bool,
}

impl<Id> Route<Id> {
    pub(crate) fn new(
        stops: Vec<Waypoint<Id>>,
        total_distance: f64,
        unit: DistanceUnit,
        method: SearchMethod,
        optimal: bool,
    ) -> Self {
        debug_assert!(!stops.is_empty(), "a route always holds its origin");
        Self {
            stops,
            total_distance,
            unit,
            method,
            optimal,
        }
    }

    /// The fixed starting waypoint.
    pub fn origin(&self) -> &Waypoint<Id> {
        &self.stops[0]
    }

    /// All stops in visiting order, origin first.
    pub fn stops(&self) -> &[Waypoint<Id>] {
        &self.stops
    }

    /// Stops after the origin, in visiting order.
    pub fn destinations(&self) -> &[Waypoint<Id>] {
        &self.stops[1..]
    }

    /// Number of stops including the origin.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: a route contains at least its origin.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Identifiers in visiting order.
    pub fn ids(&self) -> Vec<&Id> {
        self.stops.iter().map(|w| w.id()).collect()
    }

    /// Sum of leg distances, in [`Route::unit`].
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Unit of [`Route::total_distance`] and leg distances.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Strategy that produced this route.
    pub fn method(&self) -> SearchMethod {
        self.method
    }

    /// `true` when the route is proven minimal.
    ///
    /// Heuristic routes and exhaustive searches cut short by a deadline or
    /// cancellation report `false`.
    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Iterates consecutive stop pairs with their distances.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_, Id>> + '_ {
        let unit = self.unit;
        self.stops.windows(2).map(move |pair| Leg {
            from: &pair[0],
            to: &pair[1],
            distance: crate::distance::distance_in(
                pair[0].coordinate(),
                pair[1].coordinate(),
                unit,
            ),
        })
    }

    /// Consumes the route, returning its stops.
    pub fn into_stops(self) -> Vec<Waypoint<Id>> {
        self.stops
    }
}
