//! Viewport bounds.

use crate::domain::{BoundingBox, RoutePath};

/// Bounding box of every point on the path.
///
/// A single-point path yields a degenerate box; callers pad it when fitting
/// the viewport.
pub fn compute_bounds(path: &RoutePath) -> BoundingBox {
    let first = path.first();
    BoundingBox::from_coordinates(path.as_slice()).unwrap_or(BoundingBox {
        southwest: first,
        northeast: first,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinate;
    use proptest::prelude::*;

    proptest! {
        /// Every input point lies inside the computed box
        #[test]
        fn bounds_contain_every_point(
            points in prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 1..50)
        ) {
            let coords: Vec<Coordinate> =
                points.iter().map(|(lat, lon)| Coordinate::new(*lat, *lon)).collect();
            let path = RoutePath::new(coords.clone()).unwrap();

            let bounds = compute_bounds(&path);
            for c in &coords {
                prop_assert!(bounds.contains(c));
            }
        }
    }
}
