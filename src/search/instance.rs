//! Validated, canonically ordered search input.

use std::iter;

use super::{SearchOutcome, ORIGIN};
use crate::distance::{DistanceMatrix, DistanceUnit};
use crate::error::{InvalidInput, Result, RoutingError};
use crate::models::{Route, SearchMethod, Waypoint, WaypointId};

/// Origin plus destinations sorted by identifier, with their distance matrix.
///
/// Index 0 of [`RoutingInstance::distances`] is the origin; index `i > 0`
/// is the `i`-th destination in ascending identifier order. Sorting makes
/// the enumeration order, and therefore tie-breaking, independent of the
/// order in which the caller listed the destinations.
#[derive(Debug, Clone)]
pub(crate) struct RoutingInstance<Id> {
    stops: Vec<Waypoint<Id>>,
    distances: DistanceMatrix,
    unit: DistanceUnit,
}

impl<Id: WaypointId> RoutingInstance<Id> {
    /// Validates the input and builds the distance matrix.
    ///
    /// Fails if the origin's identifier appears among the destinations, if
    /// any identifier repeats, or if any coordinate is out of range.
    pub(crate) fn new(
        origin: &Waypoint<Id>,
        destinations: &[Waypoint<Id>],
        unit: DistanceUnit,
    ) -> Result<Self> {
        if let Some(dup) = destinations.iter().find(|d| d.id() == origin.id()) {
            return Err(InvalidInput::OriginInDestinations {
                id: format!("{:?}", dup.id()),
            }
            .into());
        }

        let mut sorted = destinations.to_vec();
        sorted.sort_by(|a, b| a.id().cmp(b.id()));
        if let Some(pair) = sorted.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(InvalidInput::DuplicateWaypoint {
                id: format!("{:?}", pair[0].id()),
            }
            .into());
        }

        let stops: Vec<Waypoint<Id>> = iter::once(origin.clone()).chain(sorted).collect();
        if let Some(bad) = stops.iter().map(|w| w.coordinate()).find(|c| !c.is_valid()) {
            return Err(InvalidInput::CoordinateOutOfRange {
                latitude: bad.latitude(),
                longitude: bad.longitude(),
            }
            .into());
        }

        let coordinates: Vec<_> = stops.iter().map(|w| w.coordinate()).collect();
        let distances = DistanceMatrix::from_coordinates(&coordinates, unit);
        debug_assert!(distances.is_symmetric(1e-9));

        Ok(Self {
            stops,
            distances,
            unit,
        })
    }
}

impl<Id> RoutingInstance<Id> {
    pub(crate) fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub(crate) fn num_destinations(&self) -> usize {
        self.stops.len() - 1
    }

    /// Turns a search outcome into the caller-facing route.
    ///
    /// Fails with [`RoutingError::InvalidOrder`] unless the order visits
    /// every destination index exactly once.
    pub(crate) fn into_route(
        self,
        outcome: SearchOutcome,
        method: SearchMethod,
    ) -> Result<Route<Id>> {
        let n = self.num_destinations();
        if !is_permutation(&outcome.order, n) {
            return Err(RoutingError::InvalidOrder {
                destinations: n,
                order: outcome.order,
            });
        }

        let mut slots: Vec<Option<Waypoint<Id>>> = self.stops.into_iter().map(Some).collect();
        let stops: Vec<Waypoint<Id>> = iter::once(ORIGIN)
            .chain(outcome.order)
            .filter_map(|i| slots[i].take())
            .collect();

        Ok(Route::new(
            stops,
            outcome.distance,
            self.unit,
            method,
            outcome.optimal,
        ))
    }
}

/// `true` if `order` holds each of `1..=n` exactly once.
fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n + 1];
    seen[ORIGIN] = true;
    order
        .iter()
        .all(|&i| i <= n && !std::mem::replace(&mut seen[i], true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(id: &'static str, lat: f64, lon: f64) -> Waypoint<&'static str> {
        Waypoint::at(id, lat, lon).expect("valid")
    }

    #[test]
    fn test_destinations_sorted_by_id() {
        let origin = wp("o", 0.0, 0.0);
        let dests = vec![wp("c", 0.0, 3.0), wp("a", 0.0, 1.0), wp("b", 0.0, 2.0)];
        let inst = RoutingInstance::new(&origin, &dests, DistanceUnit::Kilometers).expect("valid");
        assert_eq!(inst.num_destinations(), 3);
        // Index 1 is "a" at one degree from the origin.
        assert!((inst.distances().get(0, 1) - 111.195).abs() < 1e-2);

        let outcome = SearchOutcome {
            order: vec![1, 2, 3],
            distance: 0.0,
            optimal: true,
        };
        let route = inst
            .into_route(outcome, SearchMethod::Exhaustive)
            .expect("complete order");
        assert_eq!(route.ids(), vec![&"o", &"a", &"b", &"c"]);
    }

    #[test]
    fn test_rejects_incomplete_orders() {
        let origin = wp("o", 0.0, 0.0);
        let dests = vec![wp("a", 0.0, 1.0), wp("b", 0.0, 2.0), wp("c", 0.0, 3.0)];
        let inst = RoutingInstance::new(&origin, &dests, DistanceUnit::Kilometers).expect("valid");

        for order in [vec![1, 1, 3], vec![1, 2], vec![0, 1, 2], vec![1, 2, 4], vec![1, 2, 3, 3]] {
            let outcome = SearchOutcome {
                order: order.clone(),
                distance: 0.0,
                optimal: false,
            };
            let err = inst
                .clone()
                .into_route(outcome, SearchMethod::Heuristic)
                .unwrap_err();
            assert_eq!(
                err,
                RoutingError::InvalidOrder {
                    destinations: 3,
                    order
                }
            );
        }
    }

    #[test]
    fn test_permutation_check() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[2, 1], 2));
        assert!(!is_permutation(&[2, 2], 2));
        assert!(!is_permutation(&[0], 1));
    }

    #[test]
    fn test_rejects_origin_in_destinations() {
        let origin = wp("o", 0.0, 0.0);
        let dests = vec![wp("a", 0.0, 1.0), wp("o", 5.0, 5.0)];
        let err = RoutingInstance::new(&origin, &dests, DistanceUnit::Kilometers).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidInput(InvalidInput::OriginInDestinations {
                id: "\"o\"".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let origin = wp("o", 0.0, 0.0);
        let dests = vec![wp("a", 0.0, 1.0), wp("b", 0.0, 2.0), wp("a", 0.0, 3.0)];
        let err = RoutingInstance::new(&origin, &dests, DistanceUnit::Kilometers).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidInput(InvalidInput::DuplicateWaypoint {
                id: "\"a\"".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_deserialized_bad_coordinate() {
        let origin = wp("o", 0.0, 0.0);
        let bad: Waypoint<String> =
            serde_json::from_str(r#"{"id":"x","latitude":123.0,"longitude":0.0}"#).expect("parses");
        let origin = Waypoint::new(origin.id().to_string(), origin.coordinate());
        let err = RoutingInstance::new(&origin, &[bad], DistanceUnit::Kilometers).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidInput(InvalidInput::CoordinateOutOfRange { .. })
        ));
    }
}
