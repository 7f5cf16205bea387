//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DomainError, Itinerary, Leg, Mode, count_transfers};
use crate::gazetteer::GazetteerEntry;

/// Request to render an itinerary.
#[derive(Debug, Deserialize)]
pub struct GeometryRequest {
    /// Origin stop name as typed by the user
    pub origin: String,

    /// Destination stop name as typed by the user
    pub destination: String,

    /// Route object from the planning backend
    pub route: RouteDto,
}

/// A route as returned by the planning backend.
#[derive(Debug, Deserialize)]
pub struct RouteDto {
    /// Total duration in minutes
    pub duration: Option<u32>,

    /// Number of transfers (derived from the legs when absent)
    pub transfers: Option<usize>,

    pub legs: Vec<LegDto>,

    /// Unprocessed backend response, the only source of real coordinates
    pub raw_route: Option<RawRouteDto>,
}

/// One leg of a backend route.
#[derive(Debug, Deserialize)]
pub struct LegDto {
    pub mode: Mode,

    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,

    /// Distance in meters
    pub distance: Option<f64>,

    pub from_name: Option<String>,
    pub to_name: Option<String>,
    pub route: Option<String>,

    /// Epoch milliseconds
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub start_time: Option<DateTime<Utc>>,

    /// Epoch milliseconds
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub end_time: Option<DateTime<Utc>>,
}

/// The backend's raw route, reduced to what carries coordinates.
#[derive(Debug, Default, Deserialize)]
pub struct RawRouteDto {
    #[serde(default)]
    pub legs: Vec<RawLegDto>,
}

/// Raw endpoints of one leg, positionally matched to `RouteDto::legs`.
#[derive(Debug, Default, Deserialize)]
pub struct RawLegDto {
    pub from: Option<RawPlaceDto>,
    pub to: Option<RawPlaceDto>,
}

/// A raw place with coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawPlaceDto {
    pub lat: f64,
    pub lon: f64,
}

impl From<RawPlaceDto> for Coordinate {
    fn from(p: RawPlaceDto) -> Self {
        Coordinate::new(p.lat, p.lon)
    }
}

impl RouteDto {
    /// Convert into a domain itinerary.
    ///
    /// Raw coordinates are attached to the leg at the same index when both
    /// endpoints are present. A leg reporting zero duration takes its
    /// duration from its timestamps instead.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the route has no legs.
    pub fn into_itinerary(self) -> Result<Itinerary, DomainError> {
        let raw_legs = self.raw_route.map(|r| r.legs).unwrap_or_default();

        let legs: Vec<Leg> = self
            .legs
            .into_iter()
            .enumerate()
            .map(|(i, dto)| {
                let mut leg = dto.into_leg();
                if let Some(RawLegDto {
                    from: Some(from),
                    to: Some(to),
                }) = raw_legs.get(i)
                {
                    leg = leg.with_raw_endpoints((*from).into(), (*to).into());
                }
                leg
            })
            .collect();

        let duration = self
            .duration
            .unwrap_or_else(|| legs.iter().map(|l| l.duration_mins).sum());
        let transfers = self.transfers.unwrap_or_else(|| count_transfers(&legs));

        Itinerary::new(legs, duration, transfers)
    }
}

impl LegDto {
    fn into_leg(self) -> Leg {
        let mut leg = Leg::new(self.mode, self.duration);
        leg.distance_m = self
            .distance
            .filter(|d| d.is_finite() && *d >= 0.0)
            .map(|d| d.round() as u32);
        leg.from_name = self.from_name;
        leg.to_name = self.to_name;
        leg.route = self.route;
        leg.start_time = self.start_time;
        leg.end_time = self.end_time;

        if leg.duration_mins == 0
            && let Some(mins) = leg.timed_duration_mins()
        {
            leg.duration_mins = mins;
        }
        leg
    }
}

/// A gazetteer station.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Normalized station name
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&GazetteerEntry> for StationResult {
    fn from(e: &GazetteerEntry) -> Self {
        Self {
            name: e.name.clone(),
            lat: e.coordinate.lat,
            lon: e.coordinate.lon,
        }
    }
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Query for station search.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (default 10, at most 50)
    pub limit: Option<usize>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(json: serde_json::Value) -> RouteDto {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn minimal_route_derives_aggregates() {
        let it = route(serde_json::json!({
            "legs": [
                {"mode": "WALK", "duration": 5},
                {"mode": "RAIL", "duration": 20, "route": "Western Line"},
                {"mode": "BUS", "duration": 12},
                {"mode": "WALK", "duration": 3}
            ]
        }))
        .into_itinerary()
        .unwrap();

        assert_eq!(it.leg_count(), 4);
        assert_eq!(it.duration_mins(), 40);
        assert_eq!(it.transfers(), 1);
        assert_eq!(it.legs()[1].route.as_deref(), Some("Western Line"));
        assert!(!it.has_raw_coordinates());
    }

    #[test]
    fn reported_aggregates_are_kept() {
        let it = route(serde_json::json!({
            "duration": 42,
            "transfers": 0,
            "legs": [{"mode": "RAIL", "duration": 20}, {"mode": "SUBWAY", "duration": 10}]
        }))
        .into_itinerary()
        .unwrap();

        assert_eq!(it.duration_mins(), 42);
        assert_eq!(it.transfers(), 0);
    }

    #[test]
    fn empty_legs_rejected() {
        let err = route(serde_json::json!({"legs": []}))
            .into_itinerary()
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyItinerary);
    }

    #[test]
    fn unknown_mode_is_other() {
        let it = route(serde_json::json!({"legs": [{"mode": "FERRY", "duration": 30}]}))
            .into_itinerary()
            .unwrap();
        assert_eq!(it.legs()[0].mode, Mode::Other);
    }

    #[test]
    fn zero_duration_taken_from_timestamps() {
        let it = route(serde_json::json!({
            "legs": [{
                "mode": "BUS",
                "duration": 0,
                "start_time": 1_700_000_000_000i64,
                "end_time": 1_700_000_000_000i64 + 17 * 60_000
            }]
        }))
        .into_itinerary()
        .unwrap();

        let leg = &it.legs()[0];
        assert_eq!(leg.duration_mins, 17);
        assert_eq!(leg.start_time.map(|t| t.timestamp_millis()), Some(1_700_000_000_000));
    }

    #[test]
    fn nonzero_duration_wins_over_timestamps() {
        let it = route(serde_json::json!({
            "legs": [{
                "mode": "BUS",
                "duration": 9,
                "start_time": 0,
                "end_time": 30 * 60_000
            }]
        }))
        .into_itinerary()
        .unwrap();

        assert_eq!(it.legs()[0].duration_mins, 9);
    }

    #[test]
    fn raw_coordinates_matched_by_index() {
        let it = route(serde_json::json!({
            "legs": [
                {"mode": "WALK", "duration": 5},
                {"mode": "RAIL", "duration": 20}
            ],
            "raw_route": {
                "legs": [
                    {"from": {"lat": 18.93, "lon": 72.82}, "to": {"lat": 18.94, "lon": 72.83}},
                    {"from": {"lat": 18.94, "lon": 72.83}}
                ]
            }
        }))
        .into_itinerary()
        .unwrap();

        assert_eq!(it.legs()[0].raw_from, Some(Coordinate::new(18.93, 72.82)));
        assert_eq!(it.legs()[0].raw_to, Some(Coordinate::new(18.94, 72.83)));
        // Half a pair is not attached
        assert!(!it.legs()[1].has_raw_endpoints());
        assert!(!it.has_raw_coordinates());
    }

    #[test]
    fn distance_is_rounded_meters() {
        let it = route(serde_json::json!({
            "legs": [
                {"mode": "WALK", "duration": 5, "distance": 412.6},
                {"mode": "WALK", "duration": 5, "distance": -1.0}
            ]
        }))
        .into_itinerary()
        .unwrap();

        assert_eq!(it.legs()[0].distance_m, Some(413));
        assert_eq!(it.legs()[1].distance_m, None);
    }

    #[test]
    fn search_request_defaults() {
        let req: StationSearchRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(req.q, "");
        assert_eq!(req.limit, None);
    }
}
