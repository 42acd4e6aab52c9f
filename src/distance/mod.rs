//! Great-circle distance and distance matrices.
//!
//! [`distance`] is the haversine distance in kilometers; [`DistanceMatrix`]
//! caches pairwise distances so search strategies never recompute them.

mod haversine;
mod matrix;

pub use haversine::{distance, distance_in, DistanceUnit, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
