//! Geographic coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Centre of the service region.
///
/// A path made of this point twice is the "geometry unavailable" sentinel
/// produced when origin or destination cannot be resolved.
pub const REGIONAL_CENTROID: Coordinate = Coordinate::new(19.0760, 72.8777);

/// Bounding box of the Mumbai metropolitan region served by this deployment.
///
/// Points outside it are still rendered, but they almost always mean a
/// name resolved to the wrong place.
pub const SERVICE_REGION: BoundingBox = BoundingBox {
    southwest: Coordinate::new(18.85, 72.75),
    northeast: Coordinate::new(19.35, 73.10),
};

/// A WGS84 latitude/longitude pair in degrees.
///
/// No range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Linear interpolation towards `other`.
    ///
    /// `fraction` 0 yields `self`, 1 yields `other`.
    pub fn lerp(&self, other: &Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lon: self.lon + (other.lon - self.lon) * fraction,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// An axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude and minimum longitude.
    pub southwest: Coordinate,
    /// Maximum latitude and maximum longitude.
    pub northeast: Coordinate,
}

impl BoundingBox {
    /// Smallest box containing every coordinate, or `None` for an empty slice.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Option<Self> {
        let (first, rest) = coordinates.split_first()?;
        let mut bounds = BoundingBox {
            southwest: *first,
            northeast: *first,
        };
        for c in rest {
            bounds.southwest.lat = bounds.southwest.lat.min(c.lat);
            bounds.southwest.lon = bounds.southwest.lon.min(c.lon);
            bounds.northeast.lat = bounds.northeast.lat.max(c.lat);
            bounds.northeast.lon = bounds.northeast.lon.max(c.lon);
        }
        Some(bounds)
    }

    /// Whether the coordinate lies inside the box (edges inclusive).
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.southwest.lat <= c.lat
            && c.lat <= self.northeast.lat
            && self.southwest.lon <= c.lon
            && c.lon <= self.northeast.lon
    }

    /// Whether the box has zero area (all input points identical).
    pub fn is_degenerate(&self) -> bool {
        self.southwest == self.northeast
    }
}

/// An ordered, non-empty sequence of coordinates.
///
/// # Invariants
///
/// - At least one coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath(Vec<Coordinate>);

impl RoutePath {
    /// Wrap a coordinate list, rejecting an empty one.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, DomainError> {
        if coordinates.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        Ok(Self(coordinates))
    }

    /// The fallback path used when geometry cannot be reconstructed.
    pub fn centroid_fallback() -> Self {
        Self(vec![REGIONAL_CENTROID, REGIONAL_CENTROID])
    }

    /// Whether this is exactly the centroid fallback path.
    pub fn is_centroid_fallback(&self) -> bool {
        self.0.len() == 2 && self.0.iter().all(|c| *c == REGIONAL_CENTROID)
    }

    pub fn first(&self) -> Coordinate {
        // Safe: non-empty by construction
        self.0[0]
    }

    pub fn last(&self) -> Coordinate {
        // Safe: non-empty by construction
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }
}
