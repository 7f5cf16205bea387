//! Free-text stop name resolution.
//!
//! Resolves the stop names found on itinerary legs (and typed by users)
//! to gazetteer coordinates: an exact match on the normalized name first,
//! then the first gazetteer entry whose name contains, or is contained in,
//! the query.
//!
//! Failing to resolve is an expected outcome and is reported as `None`.

mod cache;

use std::sync::Arc;

use crate::domain::Coordinate;
use crate::gazetteer::{Gazetteer, GazetteerEntry, normalize_name};

pub use cache::{CachedStationResolver, DEFAULT_CAPACITY};

/// Anything that can turn a stop name into a coordinate.
///
/// Implementations must be deterministic: the same name always yields the
/// same result.
pub trait StationLookup {
    /// Resolve a free-text stop name, or `None` if it is unknown.
    fn resolve(&self, name: &str) -> Option<Coordinate>;
}

/// Resolver backed directly by a gazetteer.
#[derive(Debug, Clone)]
pub struct StationResolver {
    gazetteer: Arc<Gazetteer>,
}

impl StationResolver {
    /// Create a resolver over a shared gazetteer.
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self { gazetteer }
    }

    /// Returns the underlying gazetteer.
    pub fn gazetteer(&self) -> &Arc<Gazetteer> {
        &self.gazetteer
    }

    /// Resolve an already-normalized, non-empty name.
    pub(crate) fn resolve_normalized(&self, name: &str) -> Option<Coordinate> {
        if let Some(c) = self.gazetteer.lookup(name) {
            return Some(c);
        }

        self.gazetteer
            .entries()
            .find(|e| is_partial_match(&e.name, name))
            .map(|e| e.coordinate)
    }

    /// List gazetteer entries matching a query, best first.
    ///
    /// The exact match (if any) comes first, followed by partial matches in
    /// gazetteer order. The first element is always what `resolve` returns.
    pub fn candidates(&self, query: &str, limit: usize) -> Vec<&GazetteerEntry> {
        let name = normalize_name(query);
        if name.is_empty() || limit == 0 {
            return Vec::new();
        }

        let exact = self.gazetteer.entries().find(|e| e.name == name);
        let partial = self
            .gazetteer
            .entries()
            .filter(|e| e.name != name && is_partial_match(&e.name, &name));

        exact.into_iter().chain(partial).take(limit).collect()
    }
}

impl StationLookup for StationResolver {
    fn resolve(&self, name: &str) -> Option<Coordinate> {
        let name = normalize_name(name);
        if name.is_empty() {
            return None;
        }
        self.resolve_normalized(&name)
    }
}

/// Bidirectional substring containment between a gazetteer key and a query.
fn is_partial_match(key: &str, query: &str) -> bool {
    key.contains(query) || query.contains(key)
}
