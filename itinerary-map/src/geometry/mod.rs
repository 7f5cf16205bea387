//! Route geometry reconstruction.
//!
//! Given an itinerary whose legs may lack geographic detail, produce
//! everything a map needs to draw it: an ordered path, mode-styled
//! per-leg segments, start/end/transfer markers and a bounding box.
//!
//! Every stage is a pure function of its inputs and the read-only
//! gazetteer behind the resolver, so requests can be rendered
//! concurrently without coordination.
//!
//! Pipeline: [`assemble`] → { [`build_segments`], [`locate_markers`],
//! [`compute_bounds`] } → [`GeometryResult`].

mod assemble;
mod bounds;
mod markers;
mod segments;


use serde::Serialize;

use crate::domain::{BoundingBox, Coordinate, Itinerary, SERVICE_REGION};
use crate::resolver::StationLookup;

pub use assemble::assemble;
pub use bounds::compute_bounds;
pub use markers::{Marker, MarkerKind, MarkerSet, locate_markers};
pub use segments::{LineStyle, Segment, allocate_points, build_segments, style_for};

/// Everything needed to draw one itinerary.
///
/// Built fresh per request and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryResult {
    /// False when the path is the centroid fallback; the map should tell the
    /// user that the route could not be placed.
    pub geometry_available: bool,
    pub coordinates: Vec<Coordinate>,
    pub segments: Vec<Segment>,
    pub markers: MarkerSet,
    pub bounds: BoundingBox,
}

/// Renders itineraries using a station lookup.
#[derive(Debug, Clone)]
pub struct GeometryEngine<L> {
    lookup: L,
}

impl<L: StationLookup> GeometryEngine<L> {
    /// Create an engine over a station lookup.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the station lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Reconstruct the full geometry for an itinerary.
    pub fn render(&self, itinerary: &Itinerary, origin_name: &str, dest_name: &str) -> GeometryResult {
        render(itinerary, origin_name, dest_name, &self.lookup)
    }
}

/// Reconstruct the full geometry for an itinerary.
pub fn render<L>(itinerary: &Itinerary, origin_name: &str, dest_name: &str, lookup: &L) -> GeometryResult
where
    L: StationLookup + ?Sized,
{
    let path = assemble(itinerary, origin_name, dest_name, lookup);
    let geometry_available = !path.is_centroid_fallback();

    let outside = path
        .as_slice()
        .iter()
        .filter(|c| !SERVICE_REGION.contains(c))
        .count();
    if outside > 0 {
        tracing::warn!(
            origin = origin_name,
            destination = dest_name,
            outside,
            "route points fall outside the service region"
        );
    }

    let segments = build_segments(itinerary.legs(), path.as_slice());
    let markers = locate_markers(itinerary, &path, origin_name, dest_name);
    let bounds = compute_bounds(&path);

    tracing::debug!(
        legs = itinerary.leg_count(),
        points = path.len(),
        segments = segments.len(),
        transfers = markers.transfers.len(),
        geometry_available,
        "rendered itinerary geometry"
    );

    GeometryResult {
        geometry_available,
        coordinates: path.into_inner(),
        segments,
        markers,
        bounds,
    }
}
