//! Application state for the web layer.

use std::sync::Arc;

use crate::gazetteer::Gazetteer;
use crate::geometry::GeometryEngine;
use crate::resolver::CachedStationResolver;

/// Shared application state.
///
/// Everything in here is read-only after startup apart from the resolver
/// cache, which synchronizes itself.
#[derive(Clone)]
pub struct AppState {
    /// Station table, for listing and search
    pub gazetteer: Arc<Gazetteer>,

    /// Geometry engine over the cached resolver
    pub engine: Arc<GeometryEngine<CachedStationResolver>>,
}

impl AppState {
    /// Create a new app state over a gazetteer.
    pub fn new(gazetteer: Gazetteer, cache_capacity: u64) -> Self {
        let gazetteer = Arc::new(gazetteer);
        let resolver = CachedStationResolver::new(Arc::clone(&gazetteer), cache_capacity);
        Self {
            gazetteer,
            engine: Arc::new(GeometryEngine::new(resolver)),
        }
    }
}
