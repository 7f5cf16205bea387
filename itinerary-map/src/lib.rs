//! Itinerary map server.
//!
//! Reconstructs drawable map geometry (path, styled per-leg segments,
//! markers and viewport bounds) for multi-modal itineraries whose legs
//! often carry nothing but stop names.

pub mod config;
pub mod domain;
pub mod gazetteer;
pub mod geometry;
pub mod resolver;
pub mod web;
