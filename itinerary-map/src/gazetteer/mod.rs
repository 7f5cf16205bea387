//! Station gazetteer.
//!
//! A read-only, ordered table from normalized stop name to coordinate.
//! The table is built once at startup, either from the built-in Mumbai
//! table or from a `stations.json` file, and shared behind an `Arc`.
//!
//! Entry order is significant: partial-match resolution returns the first
//! matching entry, so the same names in a different order can resolve
//! differently.

mod error;
mod file;
mod table;

use std::collections::HashMap;

use crate::domain::Coordinate;

pub use error::GazetteerError;
pub use file::StationRecord;

/// Normalize a stop name for gazetteer lookup: trimmed and upper-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// A named point in the gazetteer.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    /// Normalized name.
    pub name: String,
    pub coordinate: Coordinate,
}

/// Ordered name → coordinate table.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
    /// Normalized name → position in `entries`.
    index: HashMap<String, usize>,
}

impl Gazetteer {
    /// Build a gazetteer from `(name, coordinate)` pairs, keeping their order.
    ///
    /// Names are normalized. A repeated name keeps its first position and
    /// coordinate; later repeats are ignored. Names that are empty after
    /// trimming are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_map::domain::Coordinate;
    /// use itinerary_map::gazetteer::Gazetteer;
    ///
    /// let gazetteer = Gazetteer::from_entries([
    ///     (" dadar ", Coordinate::new(19.0178, 72.8478)),
    ///     ("Bandra", Coordinate::new(19.0544, 72.8406)),
    /// ]);
    ///
    /// assert_eq!(gazetteer.lookup("DADAR"), Some(Coordinate::new(19.0178, 72.8478)));
    /// assert_eq!(gazetteer.lookup("dadar"), None); // lookup is exact
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Coordinate)>,
        S: AsRef<str>,
    {
        let mut gazetteer = Self::default();
        for (name, coordinate) in entries {
            let name = normalize_name(name.as_ref());
            if name.is_empty() || gazetteer.index.contains_key(&name) {
                continue;
            }
            gazetteer.index.insert(name.clone(), gazetteer.entries.len());
            gazetteer.entries.push(GazetteerEntry { name, coordinate });
        }
        gazetteer
    }

    /// The built-in Mumbai suburban rail table.
    ///
    /// Order: Western line south to north, Central line south to north,
    /// then popular non-station places.
    pub fn mumbai() -> Self {
        Self::from_entries(table::MUMBAI_STATIONS.iter().map(|(name, lat, lon)| {
            (*name, Coordinate::new(*lat, *lon))
        }))
    }

    /// Exact lookup by already-normalized name.
    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        self.index.get(name).map(|&i| self.entries[i].coordinate)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &GazetteerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_upper_cases() {
        assert_eq!(normalize_name("  Vile Parle "), "VILE PARLE");
        assert_eq!(normalize_name("\tcst\n"), "CST");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn lookup_is_exact_on_normalized_keys() {
        let g = Gazetteer::from_entries([("Dadar", Coordinate::new(19.0178, 72.8478))]);

        assert!(g.lookup("DADAR").is_some());
        assert!(g.lookup("Dadar").is_none());
        assert!(g.lookup("DADAR WEST").is_none());
    }

    #[test]
    fn duplicate_keeps_first() {
        let g = Gazetteer::from_entries([
            ("KURLA", Coordinate::new(1.0, 1.0)),
            ("THANE", Coordinate::new(2.0, 2.0)),
            ("kurla", Coordinate::new(3.0, 3.0)),
        ]);

        assert_eq!(g.len(), 2);
        assert_eq!(g.lookup("KURLA"), Some(Coordinate::new(1.0, 1.0)));
        let names: Vec<_> = g.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["KURLA", "THANE"]);
    }

    #[test]
    fn blank_names_skipped() {
        let g = Gazetteer::from_entries([("  ", Coordinate::new(1.0, 1.0))]);
        assert!(g.is_empty());
    }

    #[test]
    fn mumbai_table_order_and_contents() {
        let g = Gazetteer::mumbai();

        assert!(!g.is_empty());
        let first = g.entries().next().unwrap();
        assert_eq!(first.name, "CHURCHGATE");
        assert_eq!(first.coordinate, Coordinate::new(18.9322, 72.8264));
        assert_eq!(g.lookup("ANDHERI"), Some(Coordinate::new(19.1197, 72.8469)));
        assert_eq!(g.lookup("THANE"), Some(Coordinate::new(19.1972, 72.9636)));
        assert_eq!(g.lookup("VILE PARLE"), Some(Coordinate::new(19.0989, 72.8469)));
    }

    #[test]
    fn mumbai_table_has_no_duplicates() {
        assert_eq!(Gazetteer::mumbai().len(), table::MUMBAI_STATIONS.len());
    }
}
