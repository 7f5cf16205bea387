//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::DomainError;
use crate::geometry::GeometryResult;

use super::dto::*;
use super::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search", get(search_stations))
        .route("/api/geometry", post(render_geometry))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All gazetteer stations in table order.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state.gazetteer.entries().map(StationResult::from).collect();
    Json(StationsResponse { stations })
}

/// Search stations by name: exact match first, then partial matches.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationsResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let stations = state
        .engine
        .lookup()
        .inner()
        .candidates(&req.q, limit)
        .into_iter()
        .map(StationResult::from)
        .collect();

    Json(StationsResponse { stations })
}

/// Reconstruct map geometry for a backend route.
async fn render_geometry(
    State(state): State<AppState>,
    payload: Result<Json<GeometryRequest>, JsonRejection>,
) -> Result<Json<GeometryResult>, AppError> {
    let Json(req) = payload?;
    let itinerary = req.route.into_itinerary()?;
    let result = state
        .engine
        .render(&itinerary, &req.origin, &req.destination);

    if !result.geometry_available {
        tracing::info!(
            origin = %req.origin,
            destination = %req.destination,
            "geometry unavailable for route"
        );
    }

    Ok(Json(result))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let AppError::BadRequest { message } = self;
        let status = StatusCode::BAD_REQUEST;
        tracing::warn!(%status, %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
