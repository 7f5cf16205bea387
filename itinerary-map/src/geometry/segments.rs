//! Per-leg segmentation of the assembled path.
//!
//! The path carries no record of which points belong to which leg, so the
//! points are shared out proportionally: every leg gets the same run
//! length, in leg order, until the path runs out.

use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Coordinate, Leg, Mode};

/// Line style for a transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    /// CSS hex color.
    pub color: &'static str,
    pub dashed: bool,
}

/// Returns the line style used to draw a mode.
pub fn style_for(mode: Mode) -> LineStyle {
    let color = match mode {
        Mode::Walk => "#10b981",
        Mode::Bus => "#f59e0b",
        Mode::Rail => "#3b82f6",
        Mode::Subway => "#8b5cf6",
        Mode::Auto | Mode::Car => "#ef4444",
        Mode::Tram | Mode::Other => "#6b7280",
    };
    LineStyle {
        color,
        dashed: mode.is_walk(),
    }
}

/// A drawable, styled piece of the route belonging to one leg.
///
/// # Invariants
///
/// - At least two coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Index of the leg this segment draws.
    pub leg_index: usize,
    pub mode: Mode,
    pub route: Option<String>,
    pub duration_mins: u32,
    pub distance_m: Option<u32>,
    #[serde(flatten)]
    pub style: LineStyle,
    pub coordinates: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Share `point_count` path indices out among `leg_count` legs.
///
/// Each leg gets `max(2, ceil(point_count / leg_count))` consecutive
/// indices, or whatever is left. The returned ranges, one per leg, tile
/// `0..point_count` exactly: no gaps, no overlaps, in leg order. Later
/// ranges may be empty.
///
/// # Examples
///
/// ```
/// use itinerary_map::geometry::allocate_points;
///
/// assert_eq!(allocate_points(3, 5), vec![0..2, 2..4, 4..5]);
/// assert_eq!(allocate_points(3, 3), vec![0..2, 2..3, 3..3]);
/// ```
pub fn allocate_points(leg_count: usize, point_count: usize) -> Vec<Range<usize>> {
    if leg_count == 0 {
        return Vec::new();
    }

    let per_leg = point_count.div_ceil(leg_count).max(2);
    let mut start = 0;
    (0..leg_count)
        .map(|_| {
            let end = (start + per_leg).min(point_count);
            let range = start..end;
            start = end;
            range
        })
        .collect()
}

/// Partition the path into per-leg segments.
///
/// Legs that received fewer than two points cannot be drawn as a line and
/// produce no segment.
pub fn build_segments(legs: &[Leg], coordinates: &[Coordinate]) -> Vec<Segment> {
    allocate_points(legs.len(), coordinates.len())
        .into_iter()
        .zip(legs)
        .enumerate()
        .filter(|(_, (range, _))| range.len() >= 2)
        .map(|(leg_index, (range, leg))| Segment {
            leg_index,
            mode: leg.mode,
            route: leg.route.clone(),
            duration_mins: leg.duration_mins,
            distance_m: leg.distance_m,
            style: style_for(leg.mode),
            coordinates: coordinates[range].to_vec(),
            start_time: leg.start_time,
            end_time: leg.end_time,
        })
        .collect()
}
