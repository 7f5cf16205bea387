//! Coordinate assembly.
//!
//! Turns an itinerary into an ordered path. Authoritative coordinates from
//! the backend's raw data are used verbatim when every leg has them;
//! otherwise the path is rebuilt from stop names. Each interior leg adds
//! exactly one point: where it is boarded, or a linear interpolation between
//! origin and destination when neither of its stops resolves.

use crate::domain::{Coordinate, Itinerary, Leg, RoutePath};
use crate::resolver::StationLookup;

/// Assemble the ordered coordinate path for an itinerary.
///
/// Never fails. When origin or destination cannot be resolved (and the
/// itinerary has no raw coordinates) the result is the two-point centroid
/// fallback, see [`RoutePath::centroid_fallback`].
pub fn assemble<L>(itinerary: &Itinerary, origin_name: &str, dest_name: &str, lookup: &L) -> RoutePath
where
    L: StationLookup + ?Sized,
{
    if let Some(path) = raw_path(itinerary) {
        return path;
    }

    let (Some(origin), Some(dest)) = (lookup.resolve(origin_name), lookup.resolve(dest_name))
    else {
        tracing::warn!(
            origin = origin_name,
            destination = dest_name,
            "origin or destination unresolved, using centroid fallback"
        );
        return RoutePath::centroid_fallback();
    };

    let legs = itinerary.legs();
    let total = legs.len();
    let mut coords = vec![origin];

    // Interior legs only; the first and last are anchored by origin and destination
    for (i, leg) in legs.iter().enumerate().take(total.saturating_sub(1)).skip(1) {
        let point = resolve_boarding(leg, lookup)
            .unwrap_or_else(|| origin.lerp(&dest, i as f64 / total as f64));
        coords.push(point);
    }

    push_distinct(&mut coords, dest);

    // Safe: starts with origin
    RoutePath::new(coords).unwrap_or_else(|_| RoutePath::centroid_fallback())
}

/// The raw from/to coordinates of every leg, if all legs carry both.
fn raw_path(itinerary: &Itinerary) -> Option<RoutePath> {
    let coords: Vec<Coordinate> = itinerary
        .legs()
        .iter()
        .map(|leg| Some([leg.raw_from?, leg.raw_to?]))
        .collect::<Option<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    RoutePath::new(coords).ok()
}

/// Where an interior leg is boarded: its `from_name`, or its `to_name` when
/// the boarding stop is unknown.
fn resolve_boarding<L>(leg: &Leg, lookup: &L) -> Option<Coordinate>
where
    L: StationLookup + ?Sized,
{
    leg.from_name
        .as_deref()
        .and_then(|name| lookup.resolve(name))
        .or_else(|| leg.to_name.as_deref().and_then(|name| lookup.resolve(name)))
}

/// Append `c` unless it is exactly the current last point.
fn push_distinct(coords: &mut Vec<Coordinate>, c: Coordinate) {
    if coords.last() != Some(&c) {
        coords.push(c);
    }
}


#[cfg(test)]
mod proptests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Leg, Mode};
    use crate::gazetteer::Gazetteer;
    use crate::resolver::StationResolver;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (18.8f64..19.4, 72.7f64..73.1).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        /// With raw coordinates on every leg, the path is the flattened from/to pairs
        #[test]
        fn raw_roundtrip(pairs in prop::collection::vec((coordinate(), coordinate()), 1..8)) {
            let legs = pairs
                .iter()
                .map(|(from, to)| Leg::new(Mode::Bus, 10).with_raw_endpoints(*from, *to))
                .collect();
            let it = Itinerary::from_legs(legs).unwrap();
            let resolver = StationResolver::new(Arc::new(Gazetteer::mumbai()));

            let path = assemble(&it, "", "", &resolver);
            let expected: Vec<Coordinate> =
                pairs.iter().flat_map(|(from, to)| [*from, *to]).collect();
            prop_assert_eq!(path.into_inner(), expected);
        }

        /// Every interior leg contributes exactly one point, named or not
        #[test]
        fn one_point_per_interior_leg(
            names in prop::collection::vec(
                prop::option::of(prop::sample::select(vec!["Dadar", "Bandra", "Kurla", "Nowhere"])),
                1..10,
            )
        ) {
            let legs: Vec<Leg> = names
                .iter()
                .map(|name| match name {
                    Some(n) => Leg::new(Mode::Bus, 10).with_names(*n, *n),
                    None => Leg::new(Mode::Bus, 10),
                })
                .collect();
            let interior = legs.len().saturating_sub(2);
            let it = Itinerary::from_legs(legs).unwrap();
            let resolver = StationResolver::new(Arc::new(Gazetteer::mumbai()));

            // Thane is in none of the leg names, so the destination is always appended
            let path = assemble(&it, "Churchgate", "Thane", &resolver);
            prop_assert_eq!(path.len(), interior + 2);
        }

        /// Resolved fallback paths start at the origin and end at the destination
        #[test]
        fn fallback_path_is_anchored(leg_count in 1usize..8) {
            let legs = (0..leg_count).map(|_| Leg::new(Mode::Rail, 10)).collect();
            let it = Itinerary::from_legs(legs).unwrap();
            let resolver = StationResolver::new(Arc::new(Gazetteer::mumbai()));

            let path = assemble(&it, "Thane", "Churchgate", &resolver);
            prop_assert_eq!(path.first(), Coordinate::new(19.1972, 72.9636));
            prop_assert_eq!(path.last(), Coordinate::new(18.9322, 72.8264));
            prop_assert_eq!(path.len(), leg_count.max(2));
        }
    }
}
