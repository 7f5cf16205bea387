//! Itinerary type.
//!
//! An `Itinerary` is a complete planned journey: an ordered list of legs
//! plus the aggregate figures the planning backend reports for it.

use super::{DomainError, Leg};

/// A complete planned journey.
///
/// # Invariants
///
/// - At least one leg
/// - Legs are in chronological order (not checked; the backend supplies them
///   that way and transfer detection relies on it)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
    duration_mins: u32,
    transfers: usize,
}

impl Itinerary {
    /// Construct an itinerary with backend-reported aggregates.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty.
    pub fn new(legs: Vec<Leg>, duration_mins: u32, transfers: usize) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        Ok(Self {
            legs,
            duration_mins,
            transfers,
        })
    }

    /// Construct an itinerary, deriving the aggregates from the legs.
    ///
    /// Duration is the sum of leg durations; transfers is the number of
    /// boarded legs minus one.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_map::domain::{Itinerary, Leg, Mode};
    ///
    /// let itinerary = Itinerary::from_legs(vec![
    ///     Leg::new(Mode::Walk, 5),
    ///     Leg::new(Mode::Rail, 20),
    ///     Leg::new(Mode::Bus, 12),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(itinerary.duration_mins(), 37);
    /// assert_eq!(itinerary.transfers(), 1);
    /// ```
    pub fn from_legs(legs: Vec<Leg>) -> Result<Self, DomainError> {
        let duration = legs.iter().map(|l| l.duration_mins).sum();
        let transfers = count_transfers(&legs);
        Self::new(legs, duration, transfers)
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs (always at least one).
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the total duration in minutes.
    pub fn duration_mins(&self) -> u32 {
        self.duration_mins
    }

    /// Returns the number of transfers.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Returns true if every leg carries both authoritative endpoint coordinates.
    pub fn has_raw_coordinates(&self) -> bool {
        self.legs.iter().all(Leg::has_raw_endpoints)
    }
}

/// Count transfers: boarded (non-walking) legs after the first.
pub fn count_transfers(legs: &[Leg]) -> usize {
    legs.iter()
        .filter(|l| l.mode.is_boarded())
        .count()
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Mode};

    #[test]
    fn empty_itinerary_rejected() {
        assert!(matches!(
            Itinerary::new(vec![], 0, 0),
            Err(DomainError::EmptyItinerary)
        ));
        assert!(matches!(
            Itinerary::from_legs(vec![]),
            Err(DomainError::EmptyItinerary)
        ));
    }

    #[test]
    fn reported_aggregates_are_kept() {
        let itinerary = Itinerary::new(vec![Leg::new(Mode::Bus, 10)], 14, 0).unwrap();

        assert_eq!(itinerary.duration_mins(), 14);
        assert_eq!(itinerary.transfers(), 0);
        assert_eq!(itinerary.leg_count(), 1);
    }

    #[test]
    fn walking_does_not_count_as_transfer() {
        let legs = vec![
            Leg::new(Mode::Walk, 5),
            Leg::new(Mode::Rail, 20),
            Leg::new(Mode::Walk, 3),
        ];
        assert_eq!(count_transfers(&legs), 0);
    }

    #[test]
    fn each_extra_boarding_is_a_transfer() {
        let legs = vec![
            Leg::new(Mode::Auto, 8),
            Leg::new(Mode::Rail, 20),
            Leg::new(Mode::Walk, 4),
            Leg::new(Mode::Subway, 15),
            Leg::new(Mode::Bus, 10),
        ];
        assert_eq!(count_transfers(&legs), 3);
    }

    #[test]
    fn all_walk_has_no_transfers() {
        assert_eq!(count_transfers(&[Leg::new(Mode::Walk, 30)]), 0);
    }

    #[test]
    fn raw_coordinates_require_every_leg() {
        let a = Coordinate::new(18.93, 72.82);
        let b = Coordinate::new(19.11, 72.84);

        let full = Itinerary::from_legs(vec![
            Leg::new(Mode::Walk, 5).with_raw_endpoints(a, a),
            Leg::new(Mode::Rail, 20).with_raw_endpoints(a, b),
        ])
        .unwrap();
        assert!(full.has_raw_coordinates());

        let partial = Itinerary::from_legs(vec![
            Leg::new(Mode::Walk, 5).with_raw_endpoints(a, a),
            Leg::new(Mode::Rail, 20),
        ])
        .unwrap();
        assert!(!partial.has_raw_coordinates());
    }
}
