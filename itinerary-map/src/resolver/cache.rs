//! Memoizing resolver.
//!
//! Caches resolution results by normalized name, including misses. The
//! gazetteer never changes after startup, so only capacity bounds the cache.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::domain::Coordinate;
use crate::gazetteer::{Gazetteer, normalize_name};

use super::{StationLookup, StationResolver};

/// Default maximum number of cached names.
pub const DEFAULT_CAPACITY: u64 = 1024;

/// A `StationResolver` with a bounded, thread-safe result cache.
#[derive(Clone)]
pub struct CachedStationResolver {
    resolver: StationResolver,
    cache: MokaCache<String, Option<Coordinate>>,
}

impl CachedStationResolver {
    /// Create a cached resolver holding at most `capacity` names.
    pub fn new(gazetteer: Arc<Gazetteer>, capacity: u64) -> Self {
        Self {
            resolver: StationResolver::new(gazetteer),
            cache: MokaCache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the uncached resolver.
    pub fn inner(&self) -> &StationResolver {
        &self.resolver
    }

    /// Number of cached names (for monitoring; approximate).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl StationLookup for CachedStationResolver {
    fn resolve(&self, name: &str) -> Option<Coordinate> {
        let name = normalize_name(name);
        if name.is_empty() {
            return None;
        }

        if let Some(hit) = self.cache.get(&name) {
            return hit;
        }

        let resolved = self.resolver.resolve_normalized(&name);
        if resolved.is_none() {
            tracing::debug!(name = %name, "stop name did not resolve");
        }
        self.cache.insert(name, resolved);
        resolved
    }
}
