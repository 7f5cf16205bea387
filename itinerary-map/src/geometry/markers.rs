//! Start, end and transfer markers.

use serde::Serialize;

use crate::domain::{Coordinate, Itinerary, RoutePath};

/// Path points allotted per five minutes of travel when placing transfers.
const MINUTES_PER_POINT: u32 = 5;

/// What a marker annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Start,
    End,
    Transfer,
}

/// A point of interest on the rendered route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub coordinate: Coordinate,
    pub label: String,
    /// Leg boarded at this point (transfers only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_index: Option<usize>,
}

/// All markers for one itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSet {
    pub start: Marker,
    pub end: Marker,
    pub transfers: Vec<Marker>,
}

impl MarkerSet {
    /// All markers in drawing order: start, transfers, end.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        std::iter::once(&self.start)
            .chain(&self.transfers)
            .chain(std::iter::once(&self.end))
    }
}

/// Place start, end and transfer markers on an assembled path.
///
/// A transfer marker is placed for each interior, non-walking leg. Its
/// position is an estimate: one path point per started five minutes of the
/// legs before it. Estimates that run past the end of the path are dropped.
pub fn locate_markers(
    itinerary: &Itinerary,
    path: &RoutePath,
    origin_name: &str,
    dest_name: &str,
) -> MarkerSet {
    let coords = path.as_slice();
    let legs = itinerary.legs();
    let last = legs.len() - 1;

    let mut transfers = Vec::new();
    let mut coord_index = 0usize;
    for (i, leg) in legs.iter().enumerate() {
        if i > 0
            && i < last
            && !leg.mode.is_walk()
            && let Some(&coordinate) = coords.get(coord_index)
        {
            transfers.push(Marker {
                kind: MarkerKind::Transfer,
                coordinate,
                label: format!(
                    "{} → {} ({})",
                    leg.from_name.as_deref().unwrap_or("Unknown"),
                    leg.to_name.as_deref().unwrap_or("Unknown"),
                    leg.mode
                ),
                leg_index: Some(i),
            });
        }
        coord_index += leg.duration_mins.div_ceil(MINUTES_PER_POINT) as usize;
    }

    MarkerSet {
        start: Marker {
            kind: MarkerKind::Start,
            coordinate: path.first(),
            label: origin_name.to_string(),
            leg_index: None,
        },
        end: Marker {
            kind: MarkerKind::End,
            coordinate: path.last(),
            label: dest_name.to_string(),
            leg_index: None,
        },
        transfers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leg, Mode};

    fn path(n: usize) -> RoutePath {
        RoutePath::new(
            (0..n)
                .map(|i| Coordinate::new(19.0 + i as f64 * 0.01, 72.8))
                .collect(),
        )
        .unwrap()
    }

    fn itinerary(legs: Vec<Leg>) -> Itinerary {
        Itinerary::from_legs(legs).unwrap()
    }

    #[test]
    fn start_and_end_use_path_endpoints() {
        let p = path(4);
        let m = locate_markers(&itinerary(vec![Leg::new(Mode::Rail, 20)]), &p, "Churchgate", "Andheri");

        assert_eq!(m.start.kind, MarkerKind::Start);
        assert_eq!(m.start.coordinate, p.first());
        assert_eq!(m.start.label, "Churchgate");
        assert_eq!(m.end.kind, MarkerKind::End);
        assert_eq!(m.end.coordinate, p.last());
        assert_eq!(m.end.label, "Andheri");
        assert!(m.transfers.is_empty());
    }

    #[test]
    fn single_point_path_puts_start_and_end_together() {
        let p = path(1);
        let m = locate_markers(&itinerary(vec![Leg::new(Mode::Walk, 2)]), &p, "Dadar", "Dadar");

        assert_eq!(m.start.coordinate, m.end.coordinate);
    }

    #[test]
    fn transfer_index_accumulates_five_minute_steps() {
        let it = itinerary(vec![
            Leg::new(Mode::Walk, 7),                                   // ceil(7/5) = 2
            Leg::new(Mode::Rail, 20).with_names("Churchgate", "Dadar"), // at 2, then +4
            Leg::new(Mode::Bus, 1).with_names("Dadar", "Kurla"),        // at 6
            Leg::new(Mode::Walk, 3),
        ]);
        let p = path(10);

        let m = locate_markers(&it, &p, "a", "b");

        assert_eq!(m.transfers.len(), 2);
        assert_eq!(m.transfers[0].coordinate, p.as_slice()[2]);
        assert_eq!(m.transfers[0].leg_index, Some(1));
        assert_eq!(m.transfers[0].label, "Churchgate → Dadar (RAIL)");
        assert_eq!(m.transfers[1].coordinate, p.as_slice()[6]);
        assert_eq!(m.transfers[1].label, "Dadar → Kurla (BUS)");
    }

    #[test]
    fn walking_and_boundary_legs_get_no_transfer() {
        let it = itinerary(vec![
            Leg::new(Mode::Bus, 5),
            Leg::new(Mode::Walk, 5),
            Leg::new(Mode::Rail, 5),
        ]);
        let m = locate_markers(&it, &path(10), "a", "b");

        assert!(m.transfers.is_empty());
    }

    #[test]
    fn out_of_range_transfer_is_skipped() {
        let it = itinerary(vec![
            Leg::new(Mode::Walk, 60), // pushes the index to 12
            Leg::new(Mode::Rail, 20),
            Leg::new(Mode::Walk, 3),
        ]);
        let m = locate_markers(&it, &path(3), "a", "b");

        assert!(m.transfers.is_empty());
    }

    #[test]
    fn zero_duration_legs_do_not_advance() {
        let it = itinerary(vec![
            Leg::new(Mode::Walk, 0),
            Leg::new(Mode::Subway, 0),
            Leg::new(Mode::Walk, 0),
        ]);
        let p = path(2);
        let m = locate_markers(&it, &p, "a", "b");

        assert_eq!(m.transfers.len(), 1);
        assert_eq!(m.transfers[0].coordinate, p.first());
        assert_eq!(m.transfers[0].label, "Unknown → Unknown (SUBWAY)");
    }

    #[test]
    fn iter_orders_start_transfers_end() {
        let it = itinerary(vec![
            Leg::new(Mode::Walk, 5),
            Leg::new(Mode::Rail, 20),
            Leg::new(Mode::Walk, 3),
        ]);
        let m = locate_markers(&it, &path(3), "a", "b");

        let kinds: Vec<_> = m.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, [MarkerKind::Start, MarkerKind::Transfer, MarkerKind::End]);
    }
}
