//! Web layer for the itinerary map.
//!
//! Provides HTTP endpoints for listing and searching stations and for
//! rendering itinerary geometry.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
