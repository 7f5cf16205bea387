//! Journey leg types.
//!
//! A `Leg` is one mode-homogeneous step of an itinerary, as produced by
//! the trip-planning backend. Geographic detail on a leg is optional:
//! stop names may be missing and authoritative coordinates usually are.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Transport mode of a leg.
///
/// Serialized as the upper-case backend name. Modes the backend may add
/// later deserialize to `Other` instead of failing the whole itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Walk,
    Bus,
    Rail,
    Subway,
    Tram,
    /// Auto-rickshaw
    Auto,
    Car,
    #[serde(other)]
    Other,
}

impl Mode {
    /// Returns the backend name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Walk => "WALK",
            Mode::Bus => "BUS",
            Mode::Rail => "RAIL",
            Mode::Subway => "SUBWAY",
            Mode::Tram => "TRAM",
            Mode::Auto => "AUTO",
            Mode::Car => "CAR",
            Mode::Other => "OTHER",
        }
    }

    /// Returns true for walking legs.
    pub fn is_walk(&self) -> bool {
        matches!(self, Mode::Walk)
    }

    /// Returns true if boarding this mode counts towards the transfer count.
    pub fn is_boarded(&self) -> bool {
        matches!(
            self,
            Mode::Bus | Mode::Rail | Mode::Subway | Mode::Tram | Mode::Auto | Mode::Car
        )
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single leg of an itinerary.
///
/// Legs are built once from backend data and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub mode: Mode,
    /// Duration in whole minutes.
    pub duration_mins: u32,
    /// Distance in meters, if the backend reported one.
    pub distance_m: Option<u32>,
    pub from_name: Option<String>,
    pub to_name: Option<String>,
    /// Line or service label, e.g. "Western Line" or "BEST 56".
    pub route: Option<String>,
    /// Authoritative boarding coordinate from the backend's raw data.
    pub raw_from: Option<Coordinate>,
    /// Authoritative alighting coordinate from the backend's raw data.
    pub raw_to: Option<Coordinate>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Leg {
    /// Create a leg with only a mode and duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_map::domain::{Leg, Mode};
    ///
    /// let leg = Leg::new(Mode::Rail, 20)
    ///     .with_names("Churchgate", "Andheri")
    ///     .with_route("Western Line");
    ///
    /// assert_eq!(leg.from_name.as_deref(), Some("Churchgate"));
    /// assert!(!leg.has_raw_endpoints());
    /// ```
    pub fn new(mode: Mode, duration_mins: u32) -> Self {
        Self {
            mode,
            duration_mins,
            distance_m: None,
            from_name: None,
            to_name: None,
            route: None,
            raw_from: None,
            raw_to: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Set the boarding and alighting stop names.
    pub fn with_names(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_name = Some(from.into());
        self.to_name = Some(to.into());
        self
    }

    /// Set the line/service label.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the distance in meters.
    pub fn with_distance(mut self, distance_m: u32) -> Self {
        self.distance_m = Some(distance_m);
        self
    }

    /// Set the authoritative endpoint coordinates.
    pub fn with_raw_endpoints(mut self, from: Coordinate, to: Coordinate) -> Self {
        self.raw_from = Some(from);
        self.raw_to = Some(to);
        self
    }

    /// Set the scheduled start and end instants.
    pub fn with_times(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Returns true if both authoritative endpoint coordinates are present.
    pub fn has_raw_endpoints(&self) -> bool {
        self.raw_from.is_some() && self.raw_to.is_some()
    }

    /// Whole minutes between start and end time, when both are known and ordered.
    pub fn timed_duration_mins(&self) -> Option<u32> {
        let (start, end) = (self.start_time?, self.end_time?);
        let mins = end.signed_duration_since(start).num_minutes();
        u32::try_from(mins).ok()
    }
}
