//! Domain types for the itinerary map.
//!
//! This module contains the value types that flow through geometry
//! reconstruction. Types with invariants enforce them at construction
//! time, so code that receives them can trust their validity.

mod coordinate;
mod error;
mod itinerary;
mod leg;

pub use coordinate::{BoundingBox, Coordinate, REGIONAL_CENTROID, RoutePath, SERVICE_REGION};
pub use error::DomainError;
pub use itinerary::{Itinerary, count_transfers};
pub use leg::{Leg, Mode};
