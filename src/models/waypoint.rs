//! Waypoint type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::distance;
use crate::error::InvalidInput;

/// Bounds required of a waypoint identifier.
///
/// Identifiers are compared for duplicate detection and ordered to give the
/// search a canonical enumeration order. Any `Clone + Ord + Debug` type
/// qualifies, e.g. `String` or `usize`.
pub trait WaypointId: Clone + Ord + fmt::Debug {}

impl<T: Clone + Ord + fmt::Debug> WaypointId for T {}

/// A named location with resolved coordinates.
///
/// # Examples
///
/// ```
/// use geo_route::models::Waypoint;
///
/// let office = Waypoint::at("office", 52.52, 13.405).unwrap();
/// assert_eq!(*office.id(), "office");
/// assert_eq!(office.coordinate().latitude(), 52.52);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint<Id> {
    id: Id,
    #[serde(flatten)]
    coordinate: Coordinate,
}

impl<Id> Waypoint<Id> {
    /// Creates a waypoint from an identifier and a coordinate.
    pub fn new(id: Id, coordinate: Coordinate) -> Self {
        Self { id, coordinate }
    }

    /// Creates a waypoint from raw degrees, validating the range.
    pub fn at(id: Id, latitude: f64, longitude: f64) -> Result<Self, InvalidInput> {
        Ok(Self::new(id, Coordinate::new(latitude, longitude)?))
    }

    /// Caller-defined identifier.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Resolved location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Great-circle distance to another waypoint, in kilometers.
    pub fn distance_to<Other>(&self, other: &Waypoint<Other>) -> f64 {
        distance::distance(self.coordinate, other.coordinate)
    }
}
